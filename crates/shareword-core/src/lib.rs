//! Core data structures for crossword authoring.
//!
//! This crate holds the logical model of a crossword puzzle and its on-disk
//! text format. Editing state machines and rendering live in other crates;
//! everything here is plain data with bounds-checked mutation.
//!
//! # Overview
//!
//! - [`position`]: Grid coordinates and single-step movement.
//! - [`grid`]: Fixed-size letter buffer where an empty cell is a blocked square.
//! - [`text`]: Capacity-limited strings used for titles, hints and patterns.
//! - [`clue`]: Across/down clue lists anchored to grid coordinates.
//! - [`puzzle`]: The aggregate of title, grid and clues.
//! - [`format`]: The line-oriented `.shareword` text format.
//!
//! # Examples
//!
//! ```
//! use shareword_core::{Axis, Position, Puzzle, format};
//!
//! let mut puzzle = Puzzle::new(5, 5, "Mini");
//! puzzle.grid_mut().set(Position::new(0, 0), 'a');
//! puzzle.clues_mut().add(Axis::Across, Position::new(0, 0), 1, "Opening letter");
//!
//! let text = format::encode(&puzzle);
//! let decoded = format::decode(&text).unwrap();
//! assert_eq!(decoded, puzzle);
//! assert_eq!(decoded.grid().at(Position::new(0, 0)), Some('A'));
//! ```

pub mod clue;
pub mod format;
pub mod grid;
pub mod position;
pub mod puzzle;
pub mod text;

pub use self::{
    clue::{Axis, ClueEntry, ClueStore},
    format::{FormatError, LoadError, LoadErrorKind, SaveError},
    grid::{Grid, GridError},
    position::Position,
    puzzle::Puzzle,
    text::{BoundedText, HINT_CAPACITY, Hint, TITLE_CAPACITY, Title},
};
