//! Dictionary search for partially filled crossword answers.
//!
//! A [`Pattern`] is built one keystroke at a time. Each character is either a
//! letter that must match exactly or the wildcard `_`; a trailing `*` turns the
//! pattern into a prefix match. [`WordMatcher`] scans a [`Dictionary`] in file
//! order and keeps the first few hits.
//!
//! # Examples
//!
//! ```
//! use shareword_finder::{Dictionary, WordMatcher};
//!
//! let dictionary = Dictionary::from_text("CAT\nCOT\nDOG\n");
//! let mut matcher = WordMatcher::new(dictionary);
//! for c in "C?T".chars() {
//!     matcher.append_char(c);
//! }
//! assert_eq!(matcher.pattern().as_str(), "C_T");
//!
//! matcher.search();
//! assert_eq!(matcher.matches().collect::<Vec<_>>(), ["CAT", "COT"]);
//! ```

pub mod dictionary;
pub mod matcher;
pub mod pattern;

pub use self::{
    dictionary::{Dictionary, DictionaryError},
    matcher::{DEFAULT_MATCH_CAPACITY, WordMatcher, find_matches},
    pattern::{PATTERN_CAPACITY, PREFIX_MARKER, Pattern, WILDCARD},
};
