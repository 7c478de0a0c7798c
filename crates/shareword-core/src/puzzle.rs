//! The puzzle aggregate.

use std::path::Path;

use crate::{ClueStore, Grid, LoadError, Position, SaveError, Title, format};

/// A crossword: a title, a letter grid and its clue lists.
///
/// Letters and clues are kept consistent by [`erase`](Self::erase), which
/// removes a letter together with every clue anchored on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    title: Title,
    grid: Grid,
    clues: ClueStore,
}

impl Puzzle {
    /// Creates a puzzle with a blocked grid and no clues.
    ///
    /// The title is truncated to [`TITLE_CAPACITY`](crate::TITLE_CAPACITY).
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero.
    #[must_use]
    pub fn new(width: usize, height: usize, title: &str) -> Self {
        Self::from_parts(Title::truncated(title), Grid::new(width, height), ClueStore::new())
    }

    /// Assembles a puzzle from its parts.
    #[must_use]
    pub fn from_parts(title: Title, grid: Grid, clues: ClueStore) -> Self {
        Self { title, grid, clues }
    }

    /// Reads a puzzle from a `.shareword` file.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] naming `path` if the file cannot be read or is malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        format::load(path.as_ref())
    }

    /// Writes the puzzle to a `.shareword` file.
    ///
    /// # Errors
    ///
    /// Returns [`SaveError`] naming `path` if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), SaveError> {
        format::save(self, path.as_ref())
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &Title {
        &self.title
    }

    /// Replaces the title, truncating it to capacity.
    pub fn set_title(&mut self, title: &str) {
        self.title = Title::truncated(title);
    }

    /// Returns the letter grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the letter grid mutably.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Returns the clue lists.
    #[must_use]
    pub fn clues(&self) -> &ClueStore {
        &self.clues
    }

    /// Returns the clue lists mutably.
    pub fn clues_mut(&mut self) -> &mut ClueStore {
        &mut self.clues
    }

    /// Clears the letter at `pos` and removes every clue anchored there.
    ///
    /// Positions outside the grid are logged and ignored.
    pub fn erase(&mut self, pos: Position) {
        if !self.grid.contains(pos) {
            log::error!(
                "cannot erase {pos}: outside the {}x{} grid",
                self.grid.width(),
                self.grid.height()
            );
            return;
        }
        let removed = self.clues.remove_at(pos);
        if removed > 0 {
            log::debug!("removed {removed} clue(s) anchored at {pos}");
        }
        self.grid.clear(pos);
    }
}
