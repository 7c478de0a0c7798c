//! Word finder panel: routes input frames to a [`WordMatcher`].

use shareword_finder::{Dictionary, WordMatcher};

use crate::{InputAction, InputFrame};

/// Shown instead of the pattern while it is empty.
pub const FINDER_PROMPT: &str = "Type to start finding";

/// Interactive front end for dictionary search.
///
/// Typed characters extend the pattern, backspace shortens it and confirm
/// runs a search if no results are currently held.
#[derive(Debug, Clone)]
pub struct WordFinder {
    matcher: WordMatcher,
}

impl WordFinder {
    /// Creates a panel searching `dictionary` and keeping up to `capacity` matches.
    #[must_use]
    pub fn new(dictionary: Dictionary, capacity: usize) -> Self {
        Self {
            matcher: WordMatcher::with_capacity(dictionary, capacity),
        }
    }

    /// Returns the underlying matcher.
    #[must_use]
    pub fn matcher(&self) -> &WordMatcher {
        &self.matcher
    }

    /// Applies one tick of input.
    pub fn handle(&mut self, input: &InputFrame) {
        for &c in input.typed() {
            if !self.matcher.append_char(c) {
                log::trace!("pattern full, dropped {c:?}");
            }
        }
        if input.is_typed(InputAction::Backspace) {
            self.matcher.backspace();
        }
        if input.is_typed(InputAction::Confirm) {
            self.matcher.search();
        }
    }

    /// Returns the line to show above the results.
    #[must_use]
    pub fn display_text(&self) -> &str {
        let pattern = self.matcher.pattern();
        if pattern.is_empty() {
            FINDER_PROMPT
        } else {
            pattern.as_str()
        }
    }

    /// Returns the held matches in dictionary order.
    pub fn matches(&self) -> impl ExactSizeIterator<Item = &str> {
        self.matcher.matches()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finder() -> WordFinder {
        WordFinder::new(Dictionary::from_text("CAT\nCOT\nCUT\nCART\nDOG\n"), 2)
    }

    #[test]
    fn test_prompt_when_empty() {
        let finder = finder();
        assert_eq!(finder.display_text(), FINDER_PROMPT);
        assert_eq!(finder.matches().len(), 0);
    }

    #[test]
    fn test_type_and_confirm_in_one_tick() {
        let mut finder = finder();
        finder.handle(
            &InputFrame::new()
                .with_text("C T")
                .with_pressed(InputAction::Confirm),
        );
        assert_eq!(finder.display_text(), "C_T");
        assert_eq!(finder.matches().collect::<Vec<_>>(), ["CAT", "COT"]);
    }

    #[test]
    fn test_editing_clears_results() {
        let mut finder = finder();
        finder.handle(&InputFrame::new().with_text("CA*").with_pressed(InputAction::Confirm));
        assert_eq!(finder.matches().collect::<Vec<_>>(), ["CAT", "CART"]);

        finder.handle(&InputFrame::new().with_pressed(InputAction::Backspace));
        assert_eq!(finder.display_text(), "CA");
        assert_eq!(finder.matches().len(), 0);
    }

    #[test]
    fn test_confirm_on_empty_pattern_finds_nothing() {
        let mut finder = finder();
        finder.handle(&InputFrame::new().with_pressed(InputAction::Confirm));
        assert_eq!(finder.matches().len(), 0);
    }
}
