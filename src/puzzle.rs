//! The crossword's geometry and vocabulary.

use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

use crate::variable::{Direction, Variable};
use crate::{Error, Overlap, VarToken, Word};

/// The puzzle to be solved.
///
/// Built once from a structure grid and a word list, then only read.
pub struct Puzzle {
    height: usize,
    width: usize,

    // Row-major; true for cells that hold a letter.
    structure: Vec<Vec<bool>>,

    // The word slots, sorted.  A VarToken is an index into this list.
    variables: Vec<Variable>,

    // overlaps[x * n + y] is where x's word crosses y's word, if at all.
    overlaps: Vec<Option<Overlap>>,

    // The slots that share a cell with each slot, in slot order.
    neighbors: Vec<Vec<VarToken>>,

    words: Rc<BTreeSet<Word>>,
}

/*--------------------------------------------------------------*/

impl Puzzle {
    /// Build a puzzle from a structure grid and a vocabulary.
    ///
    /// Rows shorter than the longest row are padded with blocked cells.
    ///
    /// # Examples
    ///
    /// ```
    /// let structure = vec![vec![true, true, true]];
    /// let puzzle = crossword_solver::Puzzle::new(structure, ["CAT", "DOG"]).unwrap();
    /// assert_eq!(puzzle.num_vars(), 1);
    /// ```
    pub fn new<I>(structure: Vec<Vec<bool>>, words: I) -> Result<Self, Error>
    where
        I: IntoIterator,
        I::Item: Into<Word>,
    {
        let height = structure.len();
        let width = structure.iter().map(Vec::len).max().unwrap_or(0);
        if height == 0 {
            return Err(Error::EmptyStructure);
        }

        let structure = structure
            .into_iter()
            .map(|mut row| {
                row.resize(width, false);
                row
            })
            .collect::<Vec<_>>();

        let variables = find_variables(&structure, height, width);
        let overlaps = find_overlaps(&variables);
        let neighbors = init_neighbors(&overlaps, variables.len());

        Ok(Puzzle {
            height,
            width,
            structure,
            variables,
            overlaps,
            neighbors,
            words: Rc::new(words.into_iter().map(Into::into).collect()),
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether the cell at `(row, col)` holds a letter.
    pub fn is_open(&self, row: usize, col: usize) -> bool {
        self.structure
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// The number of word slots.
    pub fn num_vars(&self) -> usize {
        self.variables.len()
    }

    /// Get an iterator over all variable tokens, in slot order.
    pub fn vars(&self) -> impl Iterator<Item = VarToken> {
        (0..self.variables.len()).map(VarToken)
    }

    /// Get the slot a token stands for.
    ///
    /// # Panics
    ///
    /// Panics if the token belongs to a different puzzle.
    pub fn variable(&self, var: VarToken) -> &Variable {
        let VarToken(idx) = var;
        &self.variables[idx]
    }

    /// Look up the token of a slot.
    pub fn token(&self, variable: &Variable) -> Option<VarToken> {
        self.variables.binary_search(variable).ok().map(VarToken)
    }

    /// The shared cell between `x` and `y` as `(index in x, index in y)`.
    pub fn overlap(&self, x: VarToken, y: VarToken) -> Option<Overlap> {
        let VarToken(xi) = x;
        let VarToken(yi) = y;
        self.overlaps[xi * self.variables.len() + yi]
    }

    /// Get an iterator over the slots crossing `var`.
    pub fn neighbors(&self, var: VarToken) -> impl Iterator<Item = VarToken> + '_ {
        let VarToken(idx) = var;
        self.neighbors[idx].iter().copied()
    }

    /// The number of slots crossing `var`.
    pub fn degree(&self, var: VarToken) -> usize {
        let VarToken(idx) = var;
        self.neighbors[idx].len()
    }

    /// The vocabulary every slot starts from.
    pub fn words(&self) -> &BTreeSet<Word> {
        &self.words
    }

    pub(crate) fn shared_words(&self) -> Rc<BTreeSet<Word>> {
        self.words.clone()
    }
}

impl fmt::Debug for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "Puzzle={{ {}x{}", self.height, self.width)?;
        for (idx, var) in self.variables.iter().enumerate() {
            writeln!(f)?;
            write!(f, "  var {}: {}", idx, var)?;
        }
        write!(f, " }}")?;
        Ok(())
    }
}

/*--------------------------------------------------------------*/

/// Collect every maximal run of two or more open cells, across and down.
fn find_variables(structure: &[Vec<bool>], height: usize, width: usize) -> Vec<Variable> {
    let mut variables = Vec::new();

    for i in 0..height {
        for j in 0..width {
            if !structure[i][j] {
                continue;
            }

            if i == 0 || !structure[i - 1][j] {
                let length = (i..height).take_while(|&k| structure[k][j]).count();
                if length > 1 {
                    variables.push(Variable::new(i, j, Direction::Down, length));
                }
            }

            if j == 0 || !structure[i][j - 1] {
                let length = (j..width).take_while(|&k| structure[i][k]).count();
                if length > 1 {
                    variables.push(Variable::new(i, j, Direction::Across, length));
                }
            }
        }
    }

    variables.sort();
    variables
}

/// Compute the pairwise overlap table, flattened row-major.
fn find_overlaps(variables: &[Variable]) -> Vec<Option<Overlap>> {
    let n = variables.len();
    let mut overlaps = vec![None; n * n];

    for (x, v1) in variables.iter().enumerate() {
        for (y, v2) in variables.iter().enumerate() {
            if x == y {
                continue;
            }

            overlaps[x * n + y] = v1.cells().enumerate().find_map(|(kx, cell)| {
                v2.cells().position(|other| other == cell).map(|ky| (kx, ky))
            });
        }
    }

    overlaps
}

/// Determine which slots cross which.
fn init_neighbors(overlaps: &[Option<Overlap>], num_vars: usize) -> Vec<Vec<VarToken>> {
    (0..num_vars)
        .map(|x| {
            (0..num_vars)
                .filter(|&y| overlaps[x * num_vars + y].is_some())
                .map(VarToken)
                .collect()
        })
        .collect()
}
