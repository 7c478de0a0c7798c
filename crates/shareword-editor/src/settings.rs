use shareword_finder::DEFAULT_MATCH_CAPACITY;

use crate::Size;

/// Tunables for an [`EditorSession`](crate::EditorSession).
#[derive(Debug, Clone, PartialEq)]
pub struct EditorSettings {
    /// Hint text given to newly created clues.
    pub placeholder_hint: String,
    /// How many dictionary matches the word finder keeps.
    pub match_capacity: usize,
    /// Viewport assumed until the host reports one.
    pub viewport: Size,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            placeholder_hint: "Hint".to_owned(),
            match_capacity: DEFAULT_MATCH_CAPACITY,
            viewport: Size::new(1280.0, 720.0),
        }
    }
}
