//! Turning an assignment back into a grid of letters.

use std::fmt;

use crate::{Assignment, Puzzle};

/// The letter in each cell, row-major; None where nothing is written.
pub fn letter_grid(puzzle: &Puzzle, assignment: &Assignment) -> Vec<Vec<Option<char>>> {
    let mut letters = vec![vec![None; puzzle.width()]; puzzle.height()];

    for (var, word) in assignment.iter() {
        let variable = puzzle.variable(var);
        for ((row, col), c) in variable.cells().zip(word.chars()) {
            letters[row][col] = Some(c);
        }
    }

    letters
}

/// Borrow a puzzle and an assignment for printing.
///
/// # Examples
///
/// ```
/// let puzzle = crossword_solver::Puzzle::parse("#___", "CAT").unwrap();
/// let mut solver = crossword_solver::Solver::new(&puzzle);
/// let assignment = solver.solve().unwrap();
/// assert_eq!(crossword_solver::render(&puzzle, &assignment).to_string(), "█CAT\n");
/// ```
pub fn render<'a>(puzzle: &'a Puzzle, assignment: &'a Assignment) -> Grid<'a> {
    Grid { puzzle, assignment }
}

/// A filled (or partly filled) crossword.
#[derive(Clone, Copy, Debug)]
pub struct Grid<'a> {
    puzzle: &'a Puzzle,
    assignment: &'a Assignment,
}

impl fmt::Display for Grid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters = letter_grid(self.puzzle, self.assignment);

        for (row, line) in letters.iter().enumerate() {
            for (col, letter) in line.iter().enumerate() {
                if self.puzzle.is_open(row, col) {
                    write!(f, "{}", letter.unwrap_or(' '))?;
                } else {
                    write!(f, "█")?;
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
