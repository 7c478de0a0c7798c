//! Grid cursor and typing-direction state machine.
//!
//! Each tick the raw [`InputFrame`] is decoded into a queue of
//! [`NavCommand`]s in a fixed priority order (clicks, escape, confirm, typed
//! characters, backspace, arrows). The queue is then applied one command at a
//! time by [`Navigator::apply`], so a command sees the mode left behind by the
//! ones before it: a click that starts typing rightward makes the same tick's
//! characters fill the grid instead of acting as movement shortcuts.

use shareword_core::{Axis, Grid, Position, Puzzle};

use crate::{EditorSettings, GridLayout, InputAction, InputFrame};

/// One of the four grid directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum Direction {
    /// Increasing `x`.
    Right,
    /// Decreasing `y`.
    Down,
    /// Decreasing `x`.
    Left,
    /// Increasing `y`.
    Up,
}

impl Direction {
    /// Arrow checking order within a tick.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the `(dx, dy)` step.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Right => (1, 0),
            Self::Left => (-1, 0),
            Self::Up => (0, 1),
            Self::Down => (0, -1),
        }
    }

    /// Returns the opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Right => Self::Left,
            Self::Left => Self::Right,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// Returns the clue list an answer typed in this direction belongs to.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Right | Self::Left => Axis::Across,
            Self::Up | Self::Down => Axis::Down,
        }
    }

    /// Returns the arrow key for this direction.
    #[must_use]
    pub const fn arrow(self) -> InputAction {
        match self {
            Self::Right => InputAction::Right,
            Self::Left => InputAction::Left,
            Self::Up => InputAction::Up,
            Self::Down => InputAction::Down,
        }
    }

    /// Returns the neighbouring position, or `None` below zero on either axis.
    #[must_use]
    pub fn step(self, pos: Position) -> Option<Position> {
        let (dx, dy) = self.delta();
        pos.offset(dx, dy)
    }
}

/// What typed characters do.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum TypingMode {
    /// Characters are movement shortcuts.
    #[default]
    #[display("")]
    Navigate,
    /// Characters fill the grid and advance the cursor this way.
    #[display("{_0}")]
    Type(Direction),
}

impl TypingMode {
    /// Returns the typing direction, if any.
    #[must_use]
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::Navigate => None,
            Self::Type(direction) => Some(direction),
        }
    }
}

/// Mouse buttons that move the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum PointerButton {
    /// Starts across typing.
    Primary,
    /// Starts down typing.
    Secondary,
}

/// A single navigator transition decoded from input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    /// A held mouse button over `target` (`None` when off the grid).
    Click {
        /// Which button.
        button: PointerButton,
        /// The square under the pointer.
        target: Option<Position>,
        /// Shift held: type leftward or upward instead.
        reverse: bool,
        /// Control held: erase the clicked square.
        erase: bool,
    },
    /// Leave typing mode.
    Escape,
    /// Enter: create a clue, or with `remove` delete the cursor's clues.
    Confirm {
        /// Control held.
        remove: bool,
    },
    /// A typed character.
    Char {
        /// The character.
        c: char,
        /// Shift held.
        shift: bool,
    },
    /// Backspace.
    Backspace,
    /// An arrow key.
    Arrow {
        /// The arrow's direction.
        direction: Direction,
        /// Shift held: turn without moving.
        slow: bool,
    },
}

/// Lowercase movement shortcuts used while navigating. The uppercase letter
/// with shift held switches to typing in that direction instead.
const SHORTCUTS: [(char, Direction); 8] = [
    ('d', Direction::Right),
    ('l', Direction::Right),
    ('a', Direction::Left),
    ('h', Direction::Left),
    ('w', Direction::Up),
    ('k', Direction::Up),
    ('s', Direction::Down),
    ('j', Direction::Down),
];

const ERASE_SHORTCUT: char = 'x';

fn shortcut_direction(c: char) -> Option<Direction> {
    let lower = c.to_ascii_lowercase();
    SHORTCUTS
        .iter()
        .find(|(key, _)| *key == lower)
        .map(|&(_, direction)| direction)
}

/// Decodes one tick of input into navigator commands, in application order.
#[must_use]
pub fn decode(input: &InputFrame, layout: &GridLayout) -> Vec<NavCommand> {
    let shift = input.is_held(InputAction::Shift);
    let control = input.is_held(InputAction::Control);
    let target = input.pointer().and_then(|point| layout.cell_at(point));

    let mut commands = Vec::new();
    for (action, button) in [
        (InputAction::PrimaryButton, PointerButton::Primary),
        (InputAction::SecondaryButton, PointerButton::Secondary),
    ] {
        if input.is_held(action) {
            commands.push(NavCommand::Click {
                button,
                target,
                reverse: shift,
                erase: control,
            });
        }
    }
    if input.is_just_pressed(InputAction::Escape) {
        commands.push(NavCommand::Escape);
    }
    if input.is_just_pressed(InputAction::Confirm) {
        commands.push(NavCommand::Confirm { remove: control });
    }
    commands.extend(input.typed().iter().map(|&c| NavCommand::Char { c, shift }));
    if input.is_typed(InputAction::Backspace) {
        commands.push(NavCommand::Backspace);
    }
    for direction in Direction::ALL {
        if input.is_typed(direction.arrow()) {
            commands.push(NavCommand::Arrow {
                direction,
                slow: shift,
            });
        }
    }
    commands
}

/// The grid cursor and the current typing mode.
///
/// The cursor always stays inside the grid it is applied to.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Navigator {
    cursor: Position,
    mode: TypingMode,
}

impl Navigator {
    /// Creates a navigator at (0, 0) in navigation mode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cursor position.
    #[must_use]
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Returns the typing mode.
    #[must_use]
    pub fn mode(&self) -> TypingMode {
        self.mode
    }

    fn set_mode(&mut self, mode: TypingMode) {
        if self.mode != mode {
            log::debug!("typing mode {:?} -> {mode:?}", self.mode);
            self.mode = mode;
        }
    }

    /// Returns to navigation mode.
    pub fn stop_typing(&mut self) {
        self.set_mode(TypingMode::Navigate);
    }

    /// Moves the cursor to `pos` if it lies inside `grid`.
    pub fn set_cursor(&mut self, pos: Position, grid: &Grid) -> bool {
        if !grid.contains(pos) {
            return false;
        }
        self.cursor = pos;
        true
    }

    /// Moves the cursor one square, staying put at the grid edge.
    pub fn move_cursor(&mut self, direction: Direction, grid: &Grid) -> bool {
        direction
            .step(self.cursor)
            .is_some_and(|pos| self.set_cursor(pos, grid))
    }

    /// Pulls the cursor back inside `grid`, e.g. after a smaller puzzle is loaded.
    pub fn clamp_to(&mut self, grid: &Grid) {
        self.cursor = Position::new(
            self.cursor.x().min(grid.width() - 1),
            self.cursor.y().min(grid.height() - 1),
        );
    }

    /// Decodes `input` and applies the resulting commands.
    pub fn handle(
        &mut self,
        puzzle: &mut Puzzle,
        layout: &GridLayout,
        input: &InputFrame,
        settings: &EditorSettings,
    ) {
        for command in decode(input, layout) {
            self.apply(puzzle, command, settings);
        }
    }

    /// Applies one command.
    pub fn apply(&mut self, puzzle: &mut Puzzle, command: NavCommand, settings: &EditorSettings) {
        log::trace!("navigator command {command:?}");
        match command {
            NavCommand::Click {
                button,
                target,
                reverse,
                erase,
            } => {
                let direction = match (button, reverse) {
                    (PointerButton::Primary, false) => Direction::Right,
                    (PointerButton::Primary, true) => Direction::Left,
                    (PointerButton::Secondary, false) => Direction::Down,
                    (PointerButton::Secondary, true) => Direction::Up,
                };
                self.set_mode(TypingMode::Type(direction));
                if let Some(pos) = target
                    && self.set_cursor(pos, puzzle.grid())
                    && erase
                {
                    puzzle.erase(pos);
                }
            }
            NavCommand::Escape => self.stop_typing(),
            NavCommand::Confirm { remove: true } => {
                let removed = puzzle.clues_mut().remove_at(self.cursor);
                log::debug!("removed {removed} clue(s) at {}", self.cursor);
            }
            NavCommand::Confirm { remove: false } => self.create_clue(puzzle, settings),
            NavCommand::Char { c, shift } => match self.mode {
                TypingMode::Type(direction) => {
                    puzzle.grid_mut().set(self.cursor, c);
                    self.move_cursor(direction, puzzle.grid());
                }
                TypingMode::Navigate => self.shortcut(puzzle, c, shift),
            },
            NavCommand::Backspace => {
                if let TypingMode::Type(direction) = self.mode {
                    self.move_cursor(direction.reversed(), puzzle.grid());
                    puzzle.erase(self.cursor);
                }
            }
            NavCommand::Arrow { direction, slow } => {
                if self.mode.is_type() {
                    self.set_mode(TypingMode::Type(direction));
                    if !slow {
                        self.move_cursor(direction, puzzle.grid());
                    }
                }
            }
        }
    }

    fn shortcut(&mut self, puzzle: &mut Puzzle, c: char, shift: bool) {
        if c == ERASE_SHORTCUT {
            puzzle.erase(self.cursor);
            return;
        }
        let Some(direction) = shortcut_direction(c) else {
            return;
        };
        if c.is_ascii_lowercase() {
            self.move_cursor(direction, puzzle.grid());
        } else if shift {
            self.set_mode(TypingMode::Type(direction));
        }
    }

    fn create_clue(&mut self, puzzle: &mut Puzzle, settings: &EditorSettings) {
        let Some(direction) = self.mode.direction() else {
            return;
        };
        if puzzle.grid().at(self.cursor).is_none() {
            return;
        }
        let axis = direction.axis();
        let clues = puzzle.clues_mut();
        let number = clues
            .find_number_at(self.cursor)
            .unwrap_or_else(|| clues.next_number(axis));
        clues.add(axis, self.cursor, number, &settings.placeholder_hint);
        log::debug!("added {axis} clue {number} at {}", self.cursor);
    }
}
