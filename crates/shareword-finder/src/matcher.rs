//! Interactive pattern search over a dictionary.

use crate::{Dictionary, Pattern};

/// Number of matches kept by [`WordMatcher::new`].
pub const DEFAULT_MATCH_CAPACITY: usize = 3;

/// Returns the words of `dictionary` that fit `pattern`, in file order.
pub fn find_matches<'d>(
    dictionary: &'d Dictionary,
    pattern: &Pattern,
) -> impl Iterator<Item = &'d str> {
    dictionary.words().filter(|word| pattern.matches(word))
}

/// An editable pattern plus the results of its last search.
///
/// Any edit to the pattern discards the results. A search only runs while no
/// results are held, so repeating it on an unchanged pattern does nothing.
#[derive(Debug, Clone)]
pub struct WordMatcher {
    dictionary: Dictionary,
    pattern: Pattern,
    matches: Vec<String>,
    capacity: usize,
}

impl WordMatcher {
    /// Creates a matcher keeping up to [`DEFAULT_MATCH_CAPACITY`] results.
    #[must_use]
    pub fn new(dictionary: Dictionary) -> Self {
        Self::with_capacity(dictionary, DEFAULT_MATCH_CAPACITY)
    }

    /// Creates a matcher keeping up to `capacity` results.
    #[must_use]
    pub fn with_capacity(dictionary: Dictionary, capacity: usize) -> Self {
        Self {
            dictionary,
            pattern: Pattern::new(),
            matches: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns the dictionary being searched.
    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Returns the current pattern.
    #[must_use]
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Returns the maximum number of results kept.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Appends a character to the pattern; a space or `?` becomes `_`.
    ///
    /// Returns `false` if the pattern is full, in which case nothing changes.
    pub fn append_char(&mut self, c: char) -> bool {
        let appended = self.pattern.push(c);
        if appended {
            self.matches.clear();
        }
        appended
    }

    /// Removes the last pattern character.
    pub fn backspace(&mut self) -> Option<char> {
        let removed = self.pattern.pop();
        if removed.is_some() {
            self.matches.clear();
        }
        removed
    }

    /// Replaces the whole pattern, pushing each character of `s` in turn.
    pub fn set_pattern(&mut self, s: &str) {
        self.pattern = Pattern::parse(s);
        self.matches.clear();
    }

    /// Searches the dictionary unless results are already held.
    ///
    /// Keeps the first [`capacity`](Self::capacity) matching words in file
    /// order. An empty pattern is not searched. Returns `true` if a search ran.
    pub fn search(&mut self) -> bool {
        if !self.matches.is_empty() {
            return false;
        }
        if self.pattern.is_empty() {
            log::warn!("ignoring search with an empty pattern");
            return false;
        }
        self.matches.extend(
            find_matches(&self.dictionary, &self.pattern)
                .take(self.capacity)
                .map(str::to_owned),
        );
        log::debug!(
            "pattern {:?} matched {} word(s)",
            self.pattern.as_str(),
            self.matches.len()
        );
        true
    }

    /// Returns the results of the last search.
    pub fn matches(&self) -> impl ExactSizeIterator<Item = &str> {
        self.matches.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(words: &str, pattern: &str) -> WordMatcher {
        let mut matcher = WordMatcher::new(Dictionary::from_text(words));
        for c in pattern.chars() {
            matcher.append_char(c);
        }
        matcher
    }

    #[test]
    fn test_wildcard_search() {
        let mut matcher = matcher("CAT\nCOT\nDOG\n", "C_T");
        assert!(matcher.search());
        assert_eq!(matcher.matches().collect::<Vec<_>>(), ["CAT", "COT"]);
    }

    #[test]
    fn test_prefix_search() {
        let mut matcher = matcher("CAT\nCART\nDOG\n", "CA*");
        assert!(matcher.search());
        assert_eq!(matcher.matches().collect::<Vec<_>>(), ["CAT", "CART"]);
    }

    #[test]
    fn test_search_stops_at_capacity_in_file_order() {
        let mut matcher = matcher("BAT\nCAT\nEAT\nFAT\nHAT\n", "_AT");
        matcher.search();
        assert_eq!(matcher.matches().collect::<Vec<_>>(), ["BAT", "CAT", "EAT"]);

        let mut wide =
            WordMatcher::with_capacity(Dictionary::from_text("BAT\nCAT\nEAT\nFAT\nHAT\n"), 10);
        wide.set_pattern("_AT");
        wide.search();
        assert_eq!(wide.matches().len(), 5);
    }

    #[test]
    fn test_empty_pattern_does_not_search() {
        let mut matcher = matcher("A\nB\n", "");
        assert!(!matcher.search());
        assert_eq!(matcher.matches().len(), 0);
    }

    #[test]
    fn test_held_results_block_research() {
        let mut matcher = matcher("CAT\nCOT\n", "C_T");
        assert!(matcher.search());
        assert!(!matcher.search());
        assert_eq!(matcher.matches().len(), 2);
    }

    #[test]
    fn test_edits_invalidate_results() {
        let mut matcher = matcher("CAT\nCOT\nCO\n", "C_T");
        matcher.search();
        matcher.append_char('S');
        assert_eq!(matcher.matches().len(), 0);

        matcher.search();
        assert_eq!(matcher.matches().len(), 0);
        assert_eq!(matcher.backspace(), Some('S'));
        assert!(matcher.search());
        assert_eq!(matcher.matches().len(), 2);

        matcher.backspace();
        assert_eq!(matcher.matches().len(), 0);
        assert!(matcher.search());
        assert_eq!(matcher.matches().collect::<Vec<_>>(), ["CO"]);
    }

    #[test]
    fn test_search_without_hits_can_rerun() {
        let mut matcher = matcher("CAT\n", "Z_Z");
        assert!(matcher.search());
        assert!(matcher.search());
    }
}
