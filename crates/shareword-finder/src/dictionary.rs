//! Newline-delimited word lists.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// A dictionary file could not be read.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("could not read dictionary {}: {source}", path.display())]
pub struct DictionaryError {
    /// The file that failed.
    pub path: PathBuf,
    /// The underlying I/O error.
    pub source: io::Error,
}

/// An immutable word list in file order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Builds a dictionary from text holding one word per line.
    ///
    /// Surrounding whitespace is trimmed and blank lines are skipped.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let words = text
            .lines()
            .map(str::trim)
            .filter(|word| !word.is_empty())
            .map(str::to_owned)
            .collect();
        Self { words }
    }

    /// Reads a dictionary file.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError`] if the file cannot be read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| DictionaryError {
            path: path.to_owned(),
            source,
        })?;
        let dictionary = Self::from_text(&text);
        log::info!(
            "loaded dictionary {}: {} words",
            path.display(),
            dictionary.len()
        );
        Ok(dictionary)
    }

    /// Returns the number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if there are no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the words in file order.
    pub fn words(&self) -> impl ExactSizeIterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S> FromIterator<S> for Dictionary
where
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_skips_blank_lines() {
        let dictionary = Dictionary::from_text("  CAT\n\n COT \r\n\nDOG");
        assert_eq!(dictionary.words().collect::<Vec<_>>(), ["CAT", "COT", "DOG"]);
        assert_eq!(dictionary.len(), 3);
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("shareword-no-such-dictionary.txt");
        let err = Dictionary::load(&path).unwrap_err();
        assert_eq!(err.path, path);
        assert!(err.to_string().contains("shareword-no-such-dictionary.txt"));
    }

    #[test]
    fn test_collect() {
        let dictionary: Dictionary = ["A", "B"].into_iter().collect();
        assert!(!dictionary.is_empty());
        assert_eq!(dictionary.words().last(), Some("B"));
    }
}
