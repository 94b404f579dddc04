//! Small hand-checked puzzles.

use crossword_solver::{Assignment, Direction, Puzzle, Solver, SolverConfig, VarToken, Variable};

const CONFIGS: [SolverConfig; 2] = [
    SolverConfig { inference: true },
    SolverConfig { inference: false },
];

fn slot(puzzle: &Puzzle, i: usize, j: usize, direction: Direction, length: usize) -> VarToken {
    puzzle
        .token(&Variable::new(i, j, direction, length))
        .expect("slot")
}

fn solve(puzzle: &Puzzle, config: SolverConfig) -> Option<Assignment> {
    let mut solver = Solver::with_config(puzzle, config);
    let result = solver.solve();
    println!("{:?}: {} guesses", config, solver.num_guesses());
    result
}

#[test]
fn single_slot() {
    let puzzle = Puzzle::parse("___", "CAT\nDOG").unwrap();
    let var = slot(&puzzle, 0, 0, Direction::Across, 3);

    for config in CONFIGS {
        let dict = solve(&puzzle, config).expect("solution");
        assert_eq!(dict.len(), 1);
        assert!(dict[var] == "CAT" || dict[var] == "DOG");
    }
}

#[test]
fn disjoint_letters_at_overlap() {
    // __
    // _#
    // _#
    let puzzle = Puzzle::parse("__\n_#\n_#", "AB\nBC\nCDE\nDEF").unwrap();

    for config in CONFIGS {
        assert_eq!(solve(&puzzle, config), None);
    }
}

#[test]
fn shared_letter_matches() {
    //  ____
    //  #_##
    //  #_##
    let puzzle = Puzzle::parse("____\n#_##\n#_##", "BOAT\nCOAT\nOAK\nXAY\nQRS").unwrap();
    let across = slot(&puzzle, 0, 0, Direction::Across, 4);
    let down = slot(&puzzle, 0, 1, Direction::Down, 3);
    assert_eq!(puzzle.overlap(across, down), Some((1, 0)));

    for config in CONFIGS {
        let dict = solve(&puzzle, config).expect("solution");
        assert_eq!(dict.len(), 2);
        assert_eq!(dict[across].char_at(1), dict[down].char_at(0));
        assert_eq!(dict[down], "OAK");
    }
}

#[test]
fn words_must_be_distinct() {
    // Two parallel slots and a single word.
    let puzzle = Puzzle::parse("___\n###\n___", "CAT").unwrap();

    for config in CONFIGS {
        assert_eq!(solve(&puzzle, config), None);
    }
}

#[test]
fn word_too_short_for_every_slot() {
    let puzzle = Puzzle::parse("____", "CAT\nDOG").unwrap();

    for config in CONFIGS {
        assert_eq!(solve(&puzzle, config), None);
    }
}

#[test]
fn ring_of_four() {
    // ___
    // _#_
    // ___
    let puzzle = Puzzle::parse("___\n_#_\n___", "CAT\nCOW\nWAR\nTAR\nDOG\nRAT").unwrap();

    for config in CONFIGS {
        let mut solver = Solver::with_config(&puzzle, config);
        let dict = solver.solve().expect("solution");
        assert_eq!(dict.len(), 4);
        assert!(solver.consistent(&dict));

        for var in puzzle.vars() {
            for other in puzzle.neighbors(var) {
                let (kx, ky) = puzzle.overlap(var, other).unwrap();
                assert_eq!(dict[var].char_at(kx), dict[other].char_at(ky));
            }
        }
    }
}
