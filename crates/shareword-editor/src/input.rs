//! Decoded input for one tick.
//!
//! The host shell polls the keyboard and mouse however it likes and hands the
//! editor an [`InputFrame`]: the characters typed since the last tick, a state
//! per named [`InputAction`], the pointer position and, if the host's clue
//! list hit-test fired, which clue row was selected.

use shareword_core::Axis;

/// A named key or button the editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum InputAction {
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
    /// Enter.
    Confirm,
    /// Escape.
    Escape,
    /// Backspace.
    Backspace,
    /// Left mouse button.
    PrimaryButton,
    /// Right mouse button.
    SecondaryButton,
    /// Shift: reverses click direction and keeps arrows from moving.
    Shift,
    /// Control: erases on click and removes clues on confirm.
    Control,
    /// Writes the puzzle to its save path (F1).
    Save,
    /// Shows or hides the letters (F2).
    ToggleAnswers,
}

impl InputAction {
    /// Number of actions.
    pub const COUNT: usize = Self::ALL.len();

    /// All actions in declaration order.
    pub const ALL: [Self; 13] = [
        Self::Up,
        Self::Down,
        Self::Left,
        Self::Right,
        Self::Confirm,
        Self::Escape,
        Self::Backspace,
        Self::PrimaryButton,
        Self::SecondaryButton,
        Self::Shift,
        Self::Control,
        Self::Save,
        Self::ToggleAnswers,
    ];

    const fn index(self) -> usize {
        self as usize
    }
}

bitflags::bitflags! {
    /// What happened to an action during a tick.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
    pub struct ActionState: u8 {
        /// The key or button is down.
        const HELD = 0b0001;
        /// It went down this tick.
        const JUST_PRESSED = 0b0010;
        /// It went up this tick.
        const JUST_RELEASED = 0b0100;
        /// Key repeat fired this tick while held.
        const REPEATED = 0b1000;
    }
}

impl ActionState {
    /// Returns `true` for a fresh press or a key repeat.
    #[must_use]
    pub fn is_typed(self) -> bool {
        self.intersects(Self::JUST_PRESSED | Self::REPEATED)
    }
}

/// A pointer position in the grid's screen coordinate space.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate, growing upward like grid rows.
    pub y: f32,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Everything the editor consumes in one tick.
///
/// Built by the host, or fluently in tests:
///
/// ```
/// use shareword_editor::{InputAction, InputFrame};
///
/// let frame = InputFrame::new()
///     .with_text("abc")
///     .with_pressed(InputAction::Confirm)
///     .with_held(InputAction::Control);
/// assert_eq!(frame.typed(), ['a', 'b', 'c']);
/// assert!(frame.is_typed(InputAction::Confirm));
/// assert!(frame.is_held(InputAction::Control));
/// assert!(!frame.is_just_pressed(InputAction::Control));
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
pub struct InputFrame {
    typed: Vec<char>,
    actions: [ActionState; InputAction::COUNT],
    pointer: Option<Point>,
    clue_selection: Option<(Axis, usize)>,
}

impl InputFrame {
    /// Creates a frame where nothing happened.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends typed characters.
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.typed.extend(text.chars());
        self
    }

    /// Marks `action` as pressed this tick and held.
    #[must_use]
    pub fn with_pressed(self, action: InputAction) -> Self {
        self.with_state(action, ActionState::HELD | ActionState::JUST_PRESSED)
    }

    /// Marks `action` as held from an earlier tick.
    #[must_use]
    pub fn with_held(self, action: InputAction) -> Self {
        self.with_state(action, ActionState::HELD)
    }

    /// Marks `action` as released this tick.
    #[must_use]
    pub fn with_released(self, action: InputAction) -> Self {
        self.with_state(action, ActionState::JUST_RELEASED)
    }

    /// Adds `state` to the flags of `action`.
    #[must_use]
    pub fn with_state(mut self, action: InputAction, state: ActionState) -> Self {
        self.actions[action.index()] |= state;
        self
    }

    /// Sets the pointer position.
    #[must_use]
    pub fn with_pointer(mut self, point: Point) -> Self {
        self.pointer = Some(point);
        self
    }

    /// Reports that the clue row `index` of `axis` was selected.
    #[must_use]
    pub fn with_clue_selection(mut self, axis: Axis, index: usize) -> Self {
        self.clue_selection = Some((axis, index));
        self
    }

    /// Returns the characters typed this tick, in order.
    #[must_use]
    pub fn typed(&self) -> &[char] {
        &self.typed
    }

    /// Returns the flags of `action`.
    #[must_use]
    pub fn state(&self, action: InputAction) -> ActionState {
        self.actions[action.index()]
    }

    /// Returns `true` while `action` is down.
    #[must_use]
    pub fn is_held(&self, action: InputAction) -> bool {
        self.state(action).contains(ActionState::HELD)
    }

    /// Returns `true` if `action` went down this tick.
    #[must_use]
    pub fn is_just_pressed(&self, action: InputAction) -> bool {
        self.state(action).contains(ActionState::JUST_PRESSED)
    }

    /// Returns `true` if `action` went up this tick.
    #[must_use]
    pub fn is_just_released(&self, action: InputAction) -> bool {
        self.state(action).contains(ActionState::JUST_RELEASED)
    }

    /// Returns `true` if `action` was pressed or repeated this tick.
    #[must_use]
    pub fn is_typed(&self, action: InputAction) -> bool {
        self.state(action).is_typed()
    }

    /// Returns the pointer position, if the host reported one.
    #[must_use]
    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    /// Returns the clue row selected this tick.
    #[must_use]
    pub fn clue_selection(&self) -> Option<(Axis, usize)> {
        self.clue_selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_matches_discriminants() {
        for (i, action) in InputAction::ALL.into_iter().enumerate() {
            assert_eq!(action.index(), i);
        }
    }

    #[test]
    fn test_repeat_counts_as_typed() {
        let frame = InputFrame::new()
            .with_state(InputAction::Backspace, ActionState::HELD | ActionState::REPEATED);
        assert!(frame.is_typed(InputAction::Backspace));
        assert!(!frame.is_just_pressed(InputAction::Backspace));
    }

    #[test]
    fn test_release_is_not_held() {
        let frame = InputFrame::new().with_released(InputAction::Save);
        assert!(frame.is_just_released(InputAction::Save));
        assert!(!frame.is_held(InputAction::Save));
        assert!(!frame.is_typed(InputAction::Save));
    }

    #[test]
    fn test_empty_frame() {
        let frame = InputFrame::new();
        assert!(frame.typed().is_empty());
        assert_eq!(frame.pointer(), None);
        assert_eq!(frame.clue_selection(), None);
        assert!(InputAction::ALL.iter().all(|&a| frame.state(a).is_empty()));
    }
}
