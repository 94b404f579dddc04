use std::fmt;
use std::rc::Rc;

/// A candidate word.
///
/// Characters are stored decoded so that overlap lookups are O(1); clones
/// share the same buffer.
#[derive(Clone, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Word(Rc<[char]>);

impl Word {
    pub fn new(word: &str) -> Self {
        Word(word.chars().collect())
    }

    /// The number of characters in the word.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the k-th character.
    ///
    /// # Panics
    ///
    /// Panics if `k` is out of range.  Overlap indices are derived from
    /// slot lengths, so this means the puzzle itself is malformed.
    pub fn char_at(&self, k: usize) -> char {
        match self.0.get(k) {
            Some(&c) => c,
            None => panic!("overlap index {} out of range for word {:?}", k, self),
        }
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }
}

impl From<&str> for Word {
    fn from(word: &str) -> Self {
        Word::new(word)
    }
}

impl From<String> for Word {
    fn from(word: String) -> Self {
        Word::new(&word)
    }
}

impl PartialEq<str> for Word {
    fn eq(&self, other: &str) -> bool {
        self.chars().eq(other.chars())
    }
}

impl PartialEq<&str> for Word {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.chars() {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self)
    }
}

#[cfg(test)]
mod tests {
    use super::Word;

    #[test]
    fn counts_characters() {
        let word = Word::new("CAFÉ");
        assert_eq!(word.len(), 4);
        assert_eq!(word.char_at(3), 'É');
        assert_eq!(word, "CAFÉ");
        assert_eq!(word.to_string(), "CAFÉ");
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn char_at_out_of_range() {
        Word::new("CAT").char_at(3);
    }
}
