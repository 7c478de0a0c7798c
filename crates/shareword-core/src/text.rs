//! Capacity-limited text.
//!
//! Titles, clue hints and search patterns are bounded: input past the capacity
//! is dropped rather than reported, so editors can feed keystrokes in without
//! checking lengths first.

use std::fmt;

/// Maximum number of characters in a puzzle title.
pub const TITLE_CAPACITY: usize = 29;

/// Maximum number of characters in a clue hint.
pub const HINT_CAPACITY: usize = 63;

/// A puzzle title.
pub type Title = BoundedText<TITLE_CAPACITY>;

/// The hint text of a clue entry.
pub type Hint = BoundedText<HINT_CAPACITY>;

/// A string holding at most `CAP` characters.
///
/// Lengths and indices are counted in characters, not bytes.
///
/// # Examples
///
/// ```
/// use shareword_core::BoundedText;
///
/// let mut text = BoundedText::<3>::truncated("abcdef");
/// assert_eq!(text.as_str(), "abc");
/// assert!(!text.push('x'));
///
/// text.truncate(1);
/// assert!(text.push('z'));
/// assert_eq!(text, "az");
/// ```
#[derive(Default, Clone, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{text}")]
pub struct BoundedText<const CAP: usize> {
    text: String,
}

impl<const CAP: usize> fmt::Debug for BoundedText<CAP> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.text, f)
    }
}

impl<const CAP: usize> BoundedText<CAP> {
    /// The maximum number of characters this text can hold.
    pub const CAPACITY: usize = CAP;

    /// Creates an empty text.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Creates a text from the first `CAP` characters of `s`.
    #[must_use]
    pub fn truncated(s: &str) -> Self {
        let end = byte_offset(s, CAP);
        Self {
            text: s[..end].to_owned(),
        }
    }

    /// Returns the text as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the number of characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns `true` if the text has no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns `true` if no more characters fit.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len() >= CAP
    }

    /// Returns the last character, if any.
    #[must_use]
    pub fn last(&self) -> Option<char> {
        self.text.chars().next_back()
    }

    /// Appends a character. Returns `false` and leaves the text unchanged when full.
    pub fn push(&mut self, c: char) -> bool {
        if self.is_full() {
            return false;
        }
        self.text.push(c);
        true
    }

    /// Inserts a character at character index `index`, clamped to the end.
    /// Returns `false` and leaves the text unchanged when full.
    pub fn insert(&mut self, index: usize, c: char) -> bool {
        if self.is_full() {
            return false;
        }
        let at = byte_offset(&self.text, index);
        self.text.insert(at, c);
        true
    }

    /// Removes and returns the last character.
    pub fn pop(&mut self) -> Option<char> {
        self.text.pop()
    }

    /// Shortens the text to `len` characters. Longer lengths are a no-op.
    pub fn truncate(&mut self, len: usize) {
        let end = byte_offset(&self.text, len);
        self.text.truncate(end);
    }

    /// Removes all characters.
    pub fn clear(&mut self) {
        self.text.clear();
    }
}

impl<const CAP: usize> From<&str> for BoundedText<CAP> {
    fn from(s: &str) -> Self {
        Self::truncated(s)
    }
}

impl<const CAP: usize> AsRef<str> for BoundedText<CAP> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<const CAP: usize> PartialEq<str> for BoundedText<CAP> {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl<const CAP: usize> PartialEq<&str> for BoundedText<CAP> {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

// Byte offset of the `chars`-th character, or the string length past the end.
fn byte_offset(s: &str, chars: usize) -> usize {
    s.char_indices().nth(chars).map_or(s.len(), |(i, _)| i)
}
