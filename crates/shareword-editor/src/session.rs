//! The editing session: one puzzle, its save path and all interaction state.

use std::path::{Path, PathBuf};

use shareword_core::{LoadError, Position, Puzzle, SaveError};

use crate::{
    ClueTextEditor, EditTarget, EditorSettings, GridLayout, InputAction, InputFrame, Navigator,
    Size, TypingMode,
};

/// Error returned by session file operations.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SessionError {
    /// Reading the puzzle failed.
    #[display("{_0}")]
    Load(LoadError),
    /// Writing the puzzle failed.
    #[display("{_0}")]
    Save(SaveError),
}

/// Read-only snapshot of everything a renderer needs.
#[derive(Debug, Clone, Copy)]
pub struct EditorView<'a> {
    /// The puzzle being edited.
    pub puzzle: &'a Puzzle,
    /// Grid cursor.
    pub cursor: Position,
    /// Current typing mode.
    pub mode: TypingMode,
    /// Clue whose hint is being edited, if any.
    pub editing: Option<EditTarget>,
    /// Letters should be drawn as plain white squares.
    pub answers_hidden: bool,
    /// Where the grid sits in the viewport.
    pub layout: GridLayout,
}

/// An open puzzle together with the navigator and clue editor driving it.
///
/// The host calls [`tick`](Self::tick) once per frame. Within a tick input
/// goes to exactly one consumer: the clue editor while it is active, the
/// navigator otherwise.
#[derive(Debug)]
pub struct EditorSession {
    puzzle: Puzzle,
    save_path: PathBuf,
    settings: EditorSettings,
    viewport: Size,
    navigator: Navigator,
    clue_editor: ClueTextEditor,
    answers_hidden: bool,
}

impl EditorSession {
    /// Starts a session on an in-memory puzzle that saves to `save_path`.
    #[must_use]
    pub fn new(puzzle: Puzzle, save_path: impl Into<PathBuf>, settings: EditorSettings) -> Self {
        Self {
            puzzle,
            save_path: save_path.into(),
            viewport: settings.viewport,
            settings,
            navigator: Navigator::new(),
            clue_editor: ClueTextEditor::new(),
            answers_hidden: false,
        }
    }

    /// Loads `path` and starts a session that saves back to it.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Load`] if the file cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>, settings: EditorSettings) -> Result<Self, SessionError> {
        let path = path.into();
        let puzzle = Puzzle::load(&path)?;
        Ok(Self::new(puzzle, path, settings))
    }

    /// Returns the puzzle.
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Returns the path [`save`](Self::save) writes to.
    #[must_use]
    pub fn save_path(&self) -> &Path {
        &self.save_path
    }

    /// Returns the session settings.
    #[must_use]
    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    /// Returns the grid navigator.
    #[must_use]
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Returns the hint editor.
    #[must_use]
    pub fn clue_editor(&self) -> &ClueTextEditor {
        &self.clue_editor
    }

    /// Returns `true` if the renderer should hide letters.
    #[must_use]
    pub fn answers_hidden(&self) -> bool {
        self.answers_hidden
    }

    /// Records a new viewport size.
    pub fn resize_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Returns the grid placement for the current viewport.
    #[must_use]
    pub fn layout(&self) -> GridLayout {
        GridLayout::fit(self.viewport, self.puzzle.grid())
    }

    /// Returns a snapshot for drawing.
    #[must_use]
    pub fn view(&self) -> EditorView<'_> {
        EditorView {
            puzzle: &self.puzzle,
            cursor: self.navigator.cursor(),
            mode: self.navigator.mode(),
            editing: self.clue_editor.target(),
            answers_hidden: self.answers_hidden,
            layout: self.layout(),
        }
    }

    /// Writes the puzzle to the save path.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Save`] if writing fails; the file on disk is
    /// left as it was.
    pub fn save(&self) -> Result<(), SessionError> {
        self.puzzle.save_to(&self.save_path)?;
        Ok(())
    }

    /// Writes the puzzle to `path` and makes it the save path.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Save`] if writing fails, in which case the
    /// save path is unchanged.
    pub fn save_as(&mut self, path: impl Into<PathBuf>) -> Result<(), SessionError> {
        let path = path.into();
        self.puzzle.save_to(&path)?;
        self.save_path = path;
        Ok(())
    }

    /// Replaces the puzzle with the contents of the save path.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Load`] if loading fails; the current puzzle is
    /// kept.
    pub fn reload(&mut self) -> Result<(), SessionError> {
        let puzzle = Puzzle::load(&self.save_path)?;
        self.puzzle = puzzle;
        self.clue_editor.deactivate();
        self.navigator.clamp_to(self.puzzle.grid());
        Ok(())
    }

    /// Processes one frame of input.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Save`] if this frame requested a save and it
    /// failed. All other input in the frame has been applied by then.
    pub fn tick(&mut self, input: &InputFrame) -> Result<(), SessionError> {
        if let Some((axis, index)) = input.clue_selection() {
            self.clue_editor.activate(self.puzzle.clues(), axis, index);
        }

        if self.clue_editor.is_active() {
            self.navigator.stop_typing();
            self.clue_editor.handle(self.puzzle.clues_mut(), input);
        } else {
            let layout = self.layout();
            self.navigator
                .handle(&mut self.puzzle, &layout, input, &self.settings);
        }

        if input.is_just_released(InputAction::ToggleAnswers) {
            self.answers_hidden = !self.answers_hidden;
            log::debug!("answers hidden: {}", self.answers_hidden);
        }
        if input.is_just_released(InputAction::Save)
            && let Err(err) = self.save()
        {
            log::error!("{err}");
            return Err(err);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use shareword_core::Axis;

    use super::*;
    use crate::Direction;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "shareword-session-{}-{name}.shareword",
            std::process::id()
        ))
    }

    fn session(name: &str) -> EditorSession {
        EditorSession::new(
            Puzzle::new(5, 5, "Session"),
            temp_path(name),
            EditorSettings::default(),
        )
    }

    fn click(session: &EditorSession, pos: Position) -> InputFrame {
        let layout = session.layout();
        let corner = layout.square_origin(pos);
        let half = layout.square_size() / 2.0;
        InputFrame::new()
            .with_pressed(InputAction::PrimaryButton)
            .with_pointer(crate::Point::new(corner.x + half, corner.y + half))
    }

    #[test]
    fn test_click_type_confirm() {
        let mut session = session("type");
        session.tick(&click(&session, Position::ORIGIN)).unwrap();
        session.tick(&InputFrame::new().with_text("sun")).unwrap();
        assert_eq!(session.navigator().cursor(), Position::new(3, 0));

        session
            .tick(&click(&session, Position::ORIGIN).with_pressed(InputAction::Confirm))
            .unwrap();
        let across = session.puzzle().clues().entries(Axis::Across);
        assert_eq!(across.len(), 1);
        assert_eq!(across[0].origin, Position::ORIGIN);
    }

    #[test]
    fn test_selection_routes_input_to_clue_editor() {
        let mut session = session("select");
        session.tick(&click(&session, Position::ORIGIN)).unwrap();
        session.tick(&InputFrame::new().with_text("a")).unwrap();
        session.tick(&click(&session, Position::ORIGIN)).unwrap();
        session
            .tick(&InputFrame::new().with_pressed(InputAction::Confirm))
            .unwrap();

        session
            .tick(
                &InputFrame::new()
                    .with_clue_selection(Axis::Across, 0)
                    .with_text("s!"),
            )
            .unwrap();
        assert!(session.clue_editor().is_active());
        assert_eq!(session.navigator().mode(), TypingMode::Navigate);
        assert_eq!(session.navigator().cursor(), Position::ORIGIN);
        assert_eq!(
            session.puzzle().clues().entries(Axis::Across)[0].hint,
            "Hints!"
        );
        // Typed letters did not reach the grid.
        assert_eq!(session.puzzle().grid().at(Position::new(1, 0)), None);

        session
            .tick(&InputFrame::new().with_pressed(InputAction::Confirm))
            .unwrap();
        assert!(!session.clue_editor().is_active());
        assert_eq!(session.puzzle().clues().count(Axis::Across), 1);
    }

    #[test]
    fn test_stale_selection_keeps_navigating() {
        let mut session = session("stale");
        session
            .tick(
                &InputFrame::new()
                    .with_clue_selection(Axis::Down, 4)
                    .with_text("d"),
            )
            .unwrap();
        assert!(!session.clue_editor().is_active());
        assert_eq!(session.navigator().cursor(), Position::new(1, 0));
    }

    #[test]
    fn test_toggle_answers_on_release() {
        let mut session = session("toggle");
        session
            .tick(&InputFrame::new().with_pressed(InputAction::ToggleAnswers))
            .unwrap();
        assert!(!session.answers_hidden());
        session
            .tick(&InputFrame::new().with_released(InputAction::ToggleAnswers))
            .unwrap();
        assert!(session.answers_hidden());
        assert!(session.view().answers_hidden);
    }

    #[test]
    fn test_save_on_release_and_reload() {
        let mut session = session("save");
        session.tick(&click(&session, Position::new(2, 2))).unwrap();
        session.tick(&InputFrame::new().with_text("ok")).unwrap();
        session
            .tick(&InputFrame::new().with_released(InputAction::Save))
            .unwrap();

        let reopened = EditorSession::open(session.save_path(), EditorSettings::default()).unwrap();
        assert_eq!(reopened.puzzle(), session.puzzle());
        std::fs::remove_file(session.save_path()).unwrap();
    }

    #[test]
    fn test_failed_save_is_reported() {
        let mut session = EditorSession::new(
            Puzzle::new(2, 2, ""),
            std::env::temp_dir().join("shareword-missing-dir/nested/puzzle.shareword"),
            EditorSettings::default(),
        );
        let result = session.tick(
            &InputFrame::new()
                .with_text("x")
                .with_released(InputAction::Save),
        );
        assert!(matches!(result, Err(SessionError::Save(_))));
    }

    #[test]
    fn test_reload_failure_keeps_puzzle() {
        let mut session = session("reload-missing");
        let _ = std::fs::remove_file(session.save_path());
        session.tick(&click(&session, Position::ORIGIN)).unwrap();
        session.tick(&InputFrame::new().with_text("q")).unwrap();
        let before = session.puzzle().clone();
        assert!(matches!(session.reload(), Err(SessionError::Load(_))));
        assert_eq!(session.puzzle(), &before);
    }

    #[test]
    fn test_reload_clamps_cursor() {
        let path = temp_path("reload-small");
        Puzzle::new(2, 2, "small").save_to(&path).unwrap();

        let mut session = EditorSession::new(Puzzle::new(5, 5, "big"), &path, EditorSettings::default());
        session.tick(&click(&session, Position::new(4, 4))).unwrap();
        session.reload().unwrap();
        assert_eq!(session.puzzle().title(), "small");
        assert_eq!(session.navigator().cursor(), Position::new(1, 1));
        assert_eq!(
            session.navigator().mode(),
            TypingMode::Type(Direction::Right)
        );
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_save_as_moves_save_path() {
        let mut session = session("save-as-old");
        let path = temp_path("save-as-new");
        session.save_as(&path).unwrap();
        assert_eq!(session.save_path(), path);
        assert!(path.exists());
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_resize_changes_layout() {
        let mut session = session("resize");
        let before = session.layout().square_size();
        session.resize_viewport(Size::new(640.0, 360.0));
        assert!(session.layout().square_size() < before);
    }
}
