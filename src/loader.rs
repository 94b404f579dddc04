//! Reading puzzles from text.
//!
//! Structure files hold one grid row per line, `_` marking a cell to fill
//! and any other character a blocked cell.  Word lists hold one word per
//! line.

use log::debug;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::{Error, Puzzle, Word};

/// Parse a structure description into rows of open (`true`) cells.
pub fn parse_structure(contents: &str) -> Result<Vec<Vec<bool>>, Error> {
    let rows = contents
        .lines()
        .map(|line| line.chars().map(|c| c == '_').collect::<Vec<_>>())
        .collect::<Vec<_>>();

    if rows.is_empty() {
        return Err(Error::EmptyStructure);
    }

    Ok(rows)
}

/// Parse a word list: trimmed, upper-cased, blank lines dropped.
pub fn parse_words(contents: &str) -> BTreeSet<Word> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| Word::from(line.to_uppercase()))
        .collect()
}

impl Puzzle {
    /// Build a puzzle from the text of a structure file and a word list.
    ///
    /// # Examples
    ///
    /// ```
    /// let puzzle = crossword_solver::Puzzle::parse("#___#\n", "cat\ndog\n").unwrap();
    /// assert_eq!(puzzle.num_vars(), 1);
    /// assert_eq!(puzzle.words().len(), 2);
    /// ```
    pub fn parse(structure: &str, words: &str) -> Result<Self, Error> {
        Puzzle::new(parse_structure(structure)?, parse_words(words))
    }

    /// Load a puzzle from a structure file and a word list file.
    pub fn load<P, Q>(structure: P, words: Q) -> Result<Self, Error>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let structure = read(structure.as_ref())?;
        let words = read(words.as_ref())?;
        let puzzle = Puzzle::parse(&structure, &words)?;

        debug!(
            target: "loader",
            "loaded {}x{} grid with {} slots and {} words",
            puzzle.height(),
            puzzle.width(),
            puzzle.num_vars(),
            puzzle.words().len()
        );

        Ok(puzzle)
    }
}

fn read(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
