//! In-place editing of a single clue's hint.

use shareword_core::{Axis, ClueStore};

use crate::{InputAction, InputFrame};

/// The clue being edited and where the text cursor sits in its hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditTarget {
    /// Which clue list.
    pub axis: Axis,
    /// Index within that list.
    pub index: usize,
    /// Character offset into the hint.
    pub cursor_offset: usize,
}

/// Hint editor for at most one clue at a time.
///
/// Edits only happen at the tail: typed characters are inserted at the
/// cursor, and backspace cuts the hint back to the cursor.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ClueTextEditor {
    target: Option<EditTarget>,
}

impl ClueTextEditor {
    /// Creates an inactive editor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while a clue is being edited.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }

    /// Returns the clue being edited.
    #[must_use]
    pub fn target(&self) -> Option<EditTarget> {
        self.target
    }

    /// Starts editing entry `index` of `axis`, with the cursor after its
    /// last character.
    ///
    /// Returns `false` and stays as it was if no such entry exists.
    pub fn activate(&mut self, clues: &ClueStore, axis: Axis, index: usize) -> bool {
        let Some(entry) = clues.entries(axis).get(index) else {
            log::warn!("ignoring selection of missing {axis} clue #{index}");
            return false;
        };
        log::debug!("editing {axis} clue #{index}");
        self.target = Some(EditTarget {
            axis,
            index,
            cursor_offset: entry.hint.len(),
        });
        true
    }

    /// Stops editing.
    pub fn deactivate(&mut self) {
        if let Some(target) = self.target.take() {
            log::debug!("finished editing {} clue #{}", target.axis, target.index);
        }
    }

    /// Applies one tick of input to the clue being edited.
    ///
    /// Does nothing while inactive. If the entry disappeared since
    /// activation the editor deactivates itself.
    pub fn handle(&mut self, clues: &mut ClueStore, input: &InputFrame) {
        let Some(target) = &mut self.target else {
            return;
        };
        let Some(entry) = clues.entry_mut(target.axis, target.index) else {
            log::warn!(
                "{} clue #{} no longer exists; leaving the clue editor",
                target.axis,
                target.index
            );
            self.target = None;
            return;
        };

        for &c in input.typed() {
            if entry.hint.insert(target.cursor_offset, c) {
                target.cursor_offset += 1;
            } else {
                log::trace!("hint full, dropped {c:?}");
            }
        }
        if input.is_typed(InputAction::Backspace) && target.cursor_offset > 0 {
            target.cursor_offset -= 1;
            entry.hint.truncate(target.cursor_offset);
        }
        if input.is_just_pressed(InputAction::Confirm) || input.is_just_pressed(InputAction::Escape)
        {
            self.deactivate();
        }
    }
}
