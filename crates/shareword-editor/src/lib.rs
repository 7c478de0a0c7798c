//! Interactive editing of crossword puzzles.
//!
//! This crate turns decoded per-tick input into puzzle edits. It knows nothing
//! about windows or fonts: the host polls its own input devices, fills an
//! [`InputFrame`], and calls [`EditorSession::tick`]. Drawing reads an
//! [`EditorView`].
//!
//! # Overview
//!
//! - [`input`]: Named actions, their per-tick states and the frame type.
//! - [`layout`]: Square sizing and pointer hit-testing.
//! - [`navigator`]: Cursor movement, typing modes and clue creation.
//! - [`clue_editor`]: Tail editing of one clue's hint.
//! - [`finder`]: Word finder panel on top of `shareword-finder`.
//! - [`session`]: Routes each frame to exactly one consumer, handles save
//!   and the answer toggle.
//!
//! # Examples
//!
//! ```
//! use shareword_core::{Axis, Position, Puzzle};
//! use shareword_editor::{EditorSession, EditorSettings, InputAction, InputFrame, Point};
//!
//! let mut session = EditorSession::new(
//!     Puzzle::new(5, 5, "Mini"),
//!     "mini.shareword",
//!     EditorSettings::default(),
//! );
//! let square = session.layout().square_origin(Position::new(0, 0));
//! let click = InputFrame::new()
//!     .with_pressed(InputAction::PrimaryButton)
//!     .with_pointer(Point::new(square.x + 1.0, square.y + 1.0));
//! session.tick(&click)?;
//! session.tick(&InputFrame::new().with_text("owl"))?;
//! session.tick(&click.with_pressed(InputAction::Confirm))?;
//!
//! assert_eq!(session.puzzle().grid().at(Position::new(2, 0)), Some('L'));
//! assert_eq!(session.puzzle().clues().count(Axis::Across), 1);
//! # Ok::<(), shareword_editor::SessionError>(())
//! ```

pub mod clue_editor;
pub mod finder;
pub mod input;
pub mod layout;
pub mod navigator;
pub mod session;
mod settings;

pub use self::{
    clue_editor::{ClueTextEditor, EditTarget},
    finder::{FINDER_PROMPT, WordFinder},
    input::{ActionState, InputAction, InputFrame, Point},
    layout::{GridLayout, Size},
    navigator::{Direction, NavCommand, Navigator, PointerButton, TypingMode},
    session::{EditorSession, EditorView, SessionError},
    settings::EditorSettings,
};
