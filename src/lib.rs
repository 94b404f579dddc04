//! This crate fills crossword grids from a word list.
//! Every word slot is a variable; the solver prunes candidate words with
//! node and arc consistency and then searches for a complete fill.
//! Fills print as text or save as PNG images.

mod assignment;
mod draw;
mod error;
mod loader;
mod puzzle;
mod render;
mod solver;
mod variable;
mod word;

pub use assignment::Assignment;
pub use draw::{draw, save, CELL_BORDER, CELL_SIZE};
pub use error::Error;
pub use loader::{parse_structure, parse_words};
pub use puzzle::Puzzle;
pub use render::{letter_grid, render, Grid};
pub use solver::{Solver, SolverConfig};
pub use variable::{Direction, Variable};
pub use word::Word;

/// A puzzle variable token.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct VarToken(usize);

impl VarToken {
    /// The position of the variable in its puzzle.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A pair of character indices `(kx, ky)` where two slots share a cell.
pub type Overlap = (usize, usize);

/// A directed arc `(x, y)`: make `x` consistent with `y`.
pub type Arc = (VarToken, VarToken);
