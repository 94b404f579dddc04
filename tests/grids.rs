//! Grids loaded from the files under `data/`.

use crossword_solver::{letter_grid, render, Assignment, Puzzle, Solver, SolverConfig};

fn load(structure: &str, words: &str) -> Puzzle {
    let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/data/");
    Puzzle::load(format!("{}{}", dir, structure), format!("{}{}", dir, words)).expect("puzzle")
}

fn check_solution(puzzle: &Puzzle, solver: &Solver, dict: &Assignment) {
    assert_eq!(dict.len(), puzzle.num_vars());
    assert!(solver.consistent(dict));

    for (var, word) in dict.iter() {
        assert_eq!(word.len(), puzzle.variable(var).length);
        assert!(puzzle.words().contains(word));
    }

    // Every open cell got exactly the letter its slots agree on.
    let letters = letter_grid(puzzle, dict);
    for var in puzzle.vars() {
        for ((row, col), c) in puzzle.variable(var).cells().zip(dict[var].chars()) {
            assert_eq!(letters[row][col], Some(c));
        }
    }
}

#[test]
fn structure0() {
    let puzzle = load("structure0.txt", "words0.txt");
    assert_eq!(puzzle.num_vars(), 4);

    let mut solver = Solver::new(&puzzle);
    let dict = solver.solve().expect("solution");
    check_solution(&puzzle, &solver, &dict);

    let grid = render(&puzzle, &dict).to_string();
    println!("{}", grid);
    assert_eq!(grid.lines().count(), 4);
    assert!(grid.lines().all(|line| line.starts_with('█')));
}

#[test]
fn structure1() {
    let puzzle = load("structure1.txt", "words1.txt");
    assert_eq!(puzzle.num_vars(), 6);

    for inference in [true, false] {
        let mut solver = Solver::with_config(&puzzle, SolverConfig { inference });
        let dict = solver.solve().expect("solution");
        check_solution(&puzzle, &solver, &dict);
        println!("{}", render(&puzzle, &dict));
        println!("structure1 (inference {}): {} guesses", inference, solver.num_guesses());
    }
}

#[test]
fn structure1_without_short_words() {
    // Five-letter vocabulary against a grid with a three-letter slot.
    let words = std::fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/data/words1.txt"))
        .expect("words");
    let puzzle = Puzzle::parse("_____\n_#_#_\n___##", &words).unwrap();

    let mut solver = Solver::new(&puzzle);
    assert_eq!(solver.solve(), None);
}
