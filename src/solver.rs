//! The search state and the consistency algorithms.

use bit_set::BitSet;
use log::{debug, trace};
use std::cmp::Reverse;
use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::iter;
use std::rc::Rc;

use crate::{Arc, Assignment, Overlap, Puzzle, VarToken, Word};

/// The candidate words of one variable.  Shared until written to.
type Domain = Rc<BTreeSet<Word>>;

/// Tunable search behaviour.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SolverConfig {
    /// Re-establish arc consistency around each tentative assignment.
    pub inference: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig { inference: true }
    }
}

/// Candidate domains for every slot of a puzzle, and the search over them.
pub struct Solver<'a> {
    puzzle: &'a Puzzle,
    config: SolverConfig,
    domains: Vec<Domain>,

    // The number of values tried by the last search.
    num_guesses: u32,
}

/*--------------------------------------------------------------*/

impl<'a> Solver<'a> {
    /// Allocate a solver with every domain set to the full vocabulary.
    ///
    /// # Examples
    ///
    /// ```
    /// let puzzle = crossword_solver::Puzzle::parse("___", "CAT\nDOG\n").unwrap();
    /// let mut solver = crossword_solver::Solver::new(&puzzle);
    /// assert!(solver.solve().is_some());
    /// ```
    pub fn new(puzzle: &'a Puzzle) -> Self {
        Solver::with_config(puzzle, SolverConfig::default())
    }

    pub fn with_config(puzzle: &'a Puzzle, config: SolverConfig) -> Self {
        let words = puzzle.shared_words();
        let domains = puzzle.vars().map(|_| words.clone()).collect();

        Solver {
            puzzle,
            config,
            domains,
            num_guesses: 0,
        }
    }

    /// The remaining candidates of a variable.
    pub fn domain(&self, var: VarToken) -> &BTreeSet<Word> {
        &self.domains[var.index()]
    }

    /// Get the number of values tried by the last search.
    pub fn num_guesses(&self) -> u32 {
        self.num_guesses
    }

    /// Enforce node and arc consistency, then search for a complete fill.
    ///
    /// Returns None if the puzzle has no solution with this vocabulary.
    pub fn solve(&mut self) -> Option<Assignment> {
        self.num_guesses = 0;
        self.enforce_node_consistency();

        if !self.ac3(None) {
            debug!(target: "solver", "arc consistency left an empty domain");
            return None;
        }

        let result = self.backtrack(Assignment::new());
        debug!(
            target: "solver",
            "search {} after {} guesses",
            if result.is_some() { "succeeded" } else { "failed" },
            self.num_guesses
        );
        result
    }

    /// Drop every candidate whose length does not fit its slot.
    pub fn enforce_node_consistency(&mut self) {
        for var in self.puzzle.vars() {
            let length = self.puzzle.variable(var).length;
            let domain = &mut self.domains[var.index()];

            if domain.iter().any(|word| word.len() != length) {
                Rc::make_mut(domain).retain(|word| word.len() == length);
            }

            trace!(
                target: "solver",
                "{} keeps {} candidates",
                self.puzzle.variable(var),
                domain.len()
            );
        }
    }

    /// Make `x` arc consistent with `y`: remove each word of `x` that no
    /// word of `y` agrees with at their shared cell.
    ///
    /// Returns whether anything was removed.  Slots that do not cross are
    /// left alone.
    ///
    /// # Panics
    ///
    /// Panics if a candidate is too short for the overlap, i.e. node
    /// consistency was not enforced first.
    pub fn revise(&mut self, x: VarToken, y: VarToken) -> bool {
        let (kx, ky) = match self.puzzle.overlap(x, y) {
            Some(overlap) => overlap,
            None => return false,
        };

        let supported = self.domains[y.index()]
            .iter()
            .map(|word| word.char_at(ky))
            .collect::<HashSet<_>>();

        let domain = &mut self.domains[x.index()];
        if domain
            .iter()
            .all(|word| supported.contains(&word.char_at(kx)))
        {
            return false;
        }

        Rc::make_mut(domain).retain(|word| supported.contains(&word.char_at(kx)));
        true
    }

    /// Run AC-3 until no arc can be revised.
    ///
    /// Starts from every arc between crossing slots, or from `arcs` if
    /// given.  Returns false as soon as a domain empties, otherwise
    /// whether every domain still has a candidate.
    pub fn ac3(&mut self, arcs: Option<Vec<Arc>>) -> bool {
        let puzzle = self.puzzle;
        let n = puzzle.num_vars();

        let mut queue: VecDeque<Arc> = match arcs {
            Some(arcs) => arcs.into(),
            None => puzzle
                .vars()
                .flat_map(move |x| puzzle.neighbors(x).map(move |y| (x, y)))
                .collect(),
        };

        // The arcs currently waiting in the queue.
        let mut queued = BitSet::with_capacity(n * n);
        for &(x, y) in queue.iter() {
            queued.insert(x.index() * n + y.index());
        }

        while let Some((x, y)) = queue.pop_front() {
            queued.remove(x.index() * n + y.index());

            if !self.revise(x, y) {
                continue;
            }

            if self.domains[x.index()].is_empty() {
                trace!(target: "ac3", "{} has no candidates left", puzzle.variable(x));
                return false;
            }

            for z in puzzle.neighbors(x) {
                if z != y && queued.insert(z.index() * n + x.index()) {
                    queue.push_back((z, x));
                }
            }
        }

        self.domains.iter().all(|domain| !domain.is_empty())
    }

    /// Check that the assigned words are distinct, fit their slots, and
    /// agree wherever two assigned slots cross.
    pub fn consistent(&self, assignment: &Assignment) -> bool {
        let mut seen = HashSet::with_capacity(assignment.len());
        for (var, word) in assignment.iter() {
            if !seen.insert(word) || word.len() != self.puzzle.variable(var).length {
                return false;
            }
        }

        for (var, word) in assignment.iter() {
            for other in self.puzzle.neighbors(var) {
                if let (Some(other_word), Some((kx, ky))) =
                    (assignment.get(other), self.puzzle.overlap(var, other))
                {
                    if word.char_at(kx) != other_word.char_at(ky) {
                        return false;
                    }
                }
            }
        }

        true
    }

    /// Pick the unassigned variable with the fewest candidates, preferring
    /// the one crossing the most unassigned slots on a tie.
    pub fn select_unassigned_variable(&self, assignment: &Assignment) -> Option<VarToken> {
        self.puzzle
            .vars()
            .filter(|&var| !assignment.is_assigned(var))
            .min_by_key(|&var| {
                (
                    self.domains[var.index()].len(),
                    Reverse(self.unassigned_degree(var, assignment)),
                )
            })
    }

    /// List the candidates of `var`, least constraining first: a word's
    /// cost is the number of candidates it rules out among the unassigned
    /// slots crossing `var`.
    pub fn order_domain_values(&self, var: VarToken, assignment: &Assignment) -> Vec<Word> {
        // For each unassigned neighbor: overlap, domain size, letter counts
        // at the shared cell.
        let neighbors = self
            .puzzle
            .neighbors(var)
            .filter(|&other| !assignment.is_assigned(other))
            .filter_map(|other| {
                let overlap = self.puzzle.overlap(var, other)?;
                Some((overlap, self.letter_counts(other, overlap)))
            })
            .collect::<Vec<_>>();

        let mut scored = self.domains[var.index()]
            .iter()
            .map(|word| {
                let ruled_out = neighbors
                    .iter()
                    .map(|((kx, _), (total, counts))| {
                        total - counts.get(&word.char_at(*kx)).copied().unwrap_or(0)
                    })
                    .sum::<usize>();
                (ruled_out, word)
            })
            .collect::<Vec<_>>();

        scored.sort_by_key(|&(ruled_out, _)| ruled_out);
        scored.into_iter().map(|(_, word)| word.clone()).collect()
    }

    /// Search for a complete assignment extending `assignment`.
    pub fn backtrack(&mut self, assignment: Assignment) -> Option<Assignment> {
        let mut assignment = assignment;
        if self.search(&mut assignment) {
            Some(assignment)
        } else {
            None
        }
    }

    /// Depth-first search; extends `assignment` in place and undoes each
    /// failed extension.  Each level assigns one more variable, so the
    /// depth never exceeds the number of slots.
    fn search(&mut self, assignment: &mut Assignment) -> bool {
        let var = match self.select_unassigned_variable(assignment) {
            Some(var) => var,
            None => return true,
        };

        for word in self.order_domain_values(var, assignment) {
            self.num_guesses += 1;
            assignment.insert(var, word.clone());

            if self.consistent(assignment) {
                trace!(
                    target: "search",
                    "depth {}: {} = {}",
                    assignment.len(),
                    self.puzzle.variable(var),
                    word
                );

                if self.config.inference {
                    let saved = self.domains.clone();
                    if self.infer(var, &word, assignment) && self.search(assignment) {
                        return true;
                    }
                    self.domains = saved;
                } else if self.search(assignment) {
                    return true;
                }
            }

            assignment.remove(var);
        }

        false
    }

    /// Fix `var` to `word` and propagate to the unassigned slots crossing it.
    fn infer(&mut self, var: VarToken, word: &Word, assignment: &Assignment) -> bool {
        self.domains[var.index()] = Rc::new(iter::once(word.clone()).collect());

        let arcs = self
            .puzzle
            .neighbors(var)
            .filter(|&other| !assignment.is_assigned(other))
            .map(|other| (other, var))
            .collect();

        self.ac3(Some(arcs))
    }

    /// The number of unassigned slots crossing `var`.
    fn unassigned_degree(&self, var: VarToken, assignment: &Assignment) -> usize {
        self.puzzle.neighbors(var).fold(0, |n, other| {
            if assignment.is_assigned(other) {
                n
            } else {
                n + 1
            }
        })
    }

    /// Size of `var`'s domain, and how many of its candidates carry each
    /// letter at the overlap's far index.
    fn letter_counts(&self, var: VarToken, (_, ky): Overlap) -> (usize, HashMap<char, usize>) {
        let domain = &self.domains[var.index()];
        let mut counts = HashMap::new();
        for word in domain.iter() {
            *counts.entry(word.char_at(ky)).or_insert(0) += 1;
        }

        (domain.len(), counts)
    }
}

impl fmt::Debug for Solver<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "Solver={{")?;
        for var in self.puzzle.vars() {
            writeln!(f)?;
            write!(f, "  {}:", self.puzzle.variable(var))?;
            for word in self.domains[var.index()].iter() {
                write!(f, " {}", word)?;
            }
        }
        write!(f, "}}")?;
        Ok(())
    }
}
