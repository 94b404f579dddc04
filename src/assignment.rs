use std::ops;

use crate::{VarToken, Word};

/// A partial mapping from puzzle variables to words.
#[derive(Clone, Debug, Default)]
pub struct Assignment {
    words: Vec<Option<Word>>,
    len: usize,
}

impl Assignment {
    pub fn new() -> Self {
        Assignment::default()
    }

    /// The number of assigned variables.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_assigned(&self, var: VarToken) -> bool {
        self.get(var).is_some()
    }

    /// Get the word assigned to a variable, or None.
    pub fn get(&self, var: VarToken) -> Option<&Word> {
        self.words.get(var.index()).and_then(Option::as_ref)
    }

    /// Assign a word, returning the word it replaces.
    pub fn insert(&mut self, var: VarToken, word: Word) -> Option<Word> {
        let idx = var.index();
        if idx >= self.words.len() {
            self.words.resize(idx + 1, None);
        }

        let old = self.words[idx].replace(word);
        if old.is_none() {
            self.len += 1;
        }
        old
    }

    /// Unassign a variable, returning its word.
    pub fn remove(&mut self, var: VarToken) -> Option<Word> {
        let old = self.words.get_mut(var.index()).and_then(Option::take);
        if old.is_some() {
            self.len -= 1;
        }
        old
    }

    /// Get an iterator over the assigned variables and their words.
    pub fn iter(&self) -> impl Iterator<Item = (VarToken, &Word)> + '_ {
        self.words
            .iter()
            .enumerate()
            .filter_map(|(idx, word)| word.as_ref().map(|w| (VarToken(idx), w)))
    }
}

impl PartialEq for Assignment {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for Assignment {}

impl ops::Index<VarToken> for Assignment {
    type Output = Word;

    /// Get the word assigned to a variable.
    ///
    /// # Panics
    ///
    /// Panics if the variable has not been assigned.
    fn index(&self, var: VarToken) -> &Word {
        match self.get(var) {
            Some(word) => word,
            None => panic!("unassigned"),
        }
    }
}
