//! Wildcard search patterns.

use shareword_core::BoundedText;

/// Maximum number of characters in a pattern.
pub const PATTERN_CAPACITY: usize = 29;

/// Matches any single character.
pub const WILDCARD: char = '_';

/// As the last character, matches any remaining suffix.
pub const PREFIX_MARKER: char = '*';

/// A search pattern such as `C_T` or `CA*`.
///
/// Letters are compared exactly, without case folding.
#[derive(Debug, Default, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{text}")]
pub struct Pattern {
    text: BoundedText<PATTERN_CAPACITY>,
}

impl Pattern {
    /// Creates an empty pattern.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: BoundedText::new(),
        }
    }

    /// Builds a pattern by pushing each character of `s` in turn.
    ///
    /// # Examples
    ///
    /// ```
    /// use shareword_finder::Pattern;
    ///
    /// assert_eq!(Pattern::parse("B? D*").as_str(), "B__D*");
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Self {
        let mut pattern = Self::new();
        for c in s.chars() {
            pattern.push(c);
        }
        pattern
    }

    /// Appends a character; a space or `?` becomes [`WILDCARD`].
    ///
    /// Returns `false` and leaves the pattern unchanged when it is full.
    pub fn push(&mut self, c: char) -> bool {
        let c = if c == ' ' || c == '?' { WILDCARD } else { c };
        self.text.push(c)
    }

    /// Removes the last character.
    pub fn pop(&mut self) -> Option<char> {
        self.text.pop()
    }

    /// Returns the pattern text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    /// Returns the number of characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the pattern has no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns `true` if the pattern ends in [`PREFIX_MARKER`].
    #[must_use]
    pub fn is_prefix(&self) -> bool {
        self.text.last() == Some(PREFIX_MARKER)
    }

    /// Returns `true` if `word` fits the pattern.
    ///
    /// Without a trailing `*` the lengths must be equal; with one, the word
    /// must be at least as long as the whole pattern, marker included. An
    /// empty pattern matches nothing.
    #[must_use]
    pub fn matches(&self, word: &str) -> bool {
        if self.is_empty() {
            return false;
        }
        let word_len = word.chars().count();
        let len_ok = if self.is_prefix() {
            word_len >= self.len()
        } else {
            word_len == self.len()
        };
        len_ok
            && self
                .as_str()
                .chars()
                .zip(word.chars())
                .all(|(p, w)| p == WILDCARD || p == PREFIX_MARKER || p == w)
    }
}
