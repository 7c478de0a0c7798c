//! Plain-text drawing of a puzzle.
//!
//! Rows are printed with the highest `y` on top, matching the editor where
//! `Up` increases `y`.

use std::fmt;

use shareword_core::{Axis, Position, Puzzle};
use shareword_editor::{EditTarget, EditorView, TypingMode};

const BLOCKED: char = '#';
const HIDDEN: char = '.';

/// Formats a puzzle for the terminal; use with `{}`.
#[derive(Debug, Clone, Copy)]
pub struct Rendered<'a> {
    puzzle: &'a Puzzle,
    answers_hidden: bool,
    cursor: Option<Position>,
    mode: TypingMode,
    editing: Option<EditTarget>,
}

impl<'a> Rendered<'a> {
    #[must_use]
    pub fn puzzle(puzzle: &'a Puzzle, answers_hidden: bool) -> Self {
        Self {
            puzzle,
            answers_hidden,
            cursor: None,
            mode: TypingMode::Navigate,
            editing: None,
        }
    }

    /// Includes the cursor, typing mode and edited clue.
    #[must_use]
    pub fn view(view: &EditorView<'a>) -> Self {
        Self {
            puzzle: view.puzzle,
            answers_hidden: view.answers_hidden,
            cursor: Some(view.cursor),
            mode: view.mode,
            editing: view.editing,
        }
    }

    fn cell(&self, pos: Position) -> char {
        match self.puzzle.grid().at(pos) {
            None => BLOCKED,
            Some(_) if self.answers_hidden => HIDDEN,
            Some(letter) => letter,
        }
    }
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = self.puzzle.grid();
        writeln!(f, "{}", self.puzzle.title())?;

        for y in (0..grid.height()).rev() {
            for x in 0..grid.width() {
                let pos = Position::new(x, y);
                let (open, close) = if self.cursor == Some(pos) {
                    ('[', ']')
                } else {
                    (' ', ' ')
                };
                write!(f, "{open}{}{close}", self.cell(pos))?;
            }
            writeln!(f)?;
        }

        if let Some(cursor) = self.cursor {
            write!(f, "cursor {cursor}")?;
            if self.mode.is_type() {
                write!(f, ", typing {}", self.mode)?;
            }
            writeln!(f)?;
        }

        for axis in Axis::ALL {
            let title = match axis {
                Axis::Across => "Across:",
                Axis::Down => "Down:",
            };
            writeln!(f, "{title}")?;
            for (index, entry) in self.puzzle.clues().entries(axis).iter().enumerate() {
                let marker = match self.editing {
                    Some(target) if target.axis == axis && target.index == index => '>',
                    _ => ' ',
                };
                writeln!(
                    f,
                    "{marker} {}. {} {}",
                    entry.number, entry.hint, entry.origin
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use shareword_editor::{EditorSession, EditorSettings, InputAction, InputFrame};

    use super::*;

    fn sample() -> Puzzle {
        let mut puzzle = Puzzle::new(3, 2, "Tiny");
        for (x, c) in "CAT".chars().enumerate() {
            puzzle.grid_mut().set(Position::new(x, 1), c);
        }
        puzzle.grid_mut().set(Position::new(0, 0), 'o');
        puzzle.clues_mut().add(Axis::Across, Position::new(0, 1), 1, "Feline");
        puzzle.clues_mut().add(Axis::Down, Position::new(0, 1), 1, "Cow");
        puzzle
    }

    #[test]
    fn test_render_puzzle() {
        let puzzle = sample();
        assert_eq!(
            Rendered::puzzle(&puzzle, false).to_string(),
            "Tiny\n C  A  T \n O  #  # \nAcross:\n  1. Feline (0, 1)\nDown:\n  1. Cow (0, 1)\n"
        );
    }

    #[test]
    fn test_render_hidden_answers() {
        let puzzle = sample();
        let text = Rendered::puzzle(&puzzle, true).to_string();
        assert!(text.contains(" .  .  . \n .  #  # \n"), "{text}");
        assert!(!text.contains(" C "), "{text}");
    }

    #[test]
    fn test_render_view_marks_cursor_and_editing() {
        let mut session = EditorSession::new(sample(), "unused.shareword", EditorSettings::default());
        session
            .tick(
                &InputFrame::new()
                    .with_clue_selection(Axis::Down, 0)
                    .with_pressed(InputAction::Backspace),
            )
            .unwrap();
        let text = Rendered::view(&session.view()).to_string();
        assert!(text.contains("\n[O] #  # \n"), "{text}");
        assert!(text.contains("cursor (0, 0)\n"), "{text}");
        assert!(text.contains("> 1. Co (0, 1)\n"), "{text}");
        assert!(text.contains("  1. Feline (0, 1)\n"), "{text}");
    }
}
