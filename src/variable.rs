//! Word slots in the grid.

use std::fmt;

#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Direction {
    Across,
    Down,
}

/// One word slot: a run of fillable cells starting at row `i`, column `j`.
///
/// Field order matters: the derived ordering sorts slots by position
/// first, which is the order a puzzle stores them in.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Variable {
    pub i: usize,
    pub j: usize,
    pub direction: Direction,
    pub length: usize,
}

impl Variable {
    pub fn new(i: usize, j: usize, direction: Direction, length: usize) -> Self {
        Variable {
            i,
            j,
            direction,
            length,
        }
    }

    /// The `(row, col)` of the k-th character of this slot.
    pub fn cell(&self, k: usize) -> (usize, usize) {
        match self.direction {
            Direction::Across => (self.i, self.j + k),
            Direction::Down => (self.i + k, self.j),
        }
    }

    /// Get an iterator over the cells covered by this slot, in word order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.length).map(move |k| self.cell(k))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Across => write!(f, "across"),
            Direction::Down => write!(f, "down"),
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) {} : {}",
            self.i, self.j, self.direction, self.length
        )
    }
}
