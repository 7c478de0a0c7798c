//! Line-oriented input scripts for driving an [`EditorSession`] headlessly.
//!
//! Each line is one tick:
//!
//! ```text
//! # comments and blank lines are skipped
//! viewport 1280 720
//! click primary 0 0
//! type owl
//! type S with shift
//! press enter
//! press enter with control
//! click secondary 2 4 with shift+control
//! select across 0
//! press save
//! ```
//!
//! `press` taps a key: it goes down and up within the same tick, so actions
//! that fire on press and actions that fire on release both see it. `click`
//! takes grid coordinates and points at the middle of that square. A
//! `type` line ending in ` with <modifiers>` holds them while typing; if the
//! suffix does not name modifiers it is typed as text.

use shareword_core::{Axis, Position};
use shareword_editor::{
    ActionState, EditorSession, InputAction, InputFrame, Point, PointerButton, SessionError, Size,
};

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("script line {line}: {kind}")]
pub struct ScriptError {
    pub line: usize,
    #[error(source)]
    pub kind: ScriptErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ScriptErrorKind {
    #[display("unknown command {_0:?}")]
    UnknownCommand(#[error(not(source))] String),
    #[display("missing {_0}")]
    MissingArgument(#[error(not(source))] &'static str),
    #[display("unexpected argument {_0:?}")]
    UnexpectedArgument(#[error(not(source))] String),
    #[display("invalid number {_0:?}")]
    InvalidNumber(#[error(not(source))] String),
    #[display("unknown key {_0:?}")]
    UnknownAction(#[error(not(source))] String),
    #[display("unknown modifier {_0:?}")]
    UnknownModifier(#[error(not(source))] String),
    #[display("unknown button {_0:?}")]
    UnknownButton(#[error(not(source))] String),
    #[display("unknown clue list {_0:?}")]
    UnknownAxis(#[error(not(source))] String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Type {
        text: String,
        modifiers: Vec<InputAction>,
    },
    Press {
        action: InputAction,
        modifiers: Vec<InputAction>,
    },
    Click {
        button: PointerButton,
        target: Position,
        modifiers: Vec<InputAction>,
    },
    Select {
        axis: Axis,
        index: usize,
    },
    Viewport(Size),
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Script {
    steps: Vec<Step>,
}

impl Script {
    pub fn parse(text: &str) -> Result<Self, ScriptError> {
        let mut steps = Vec::new();
        for (i, raw) in text.lines().enumerate() {
            let line = raw.trim_end();
            let trimmed = line.trim_start();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let step = parse_step(trimmed).map_err(|kind| ScriptError { line: i + 1, kind })?;
            steps.push(step);
        }
        Ok(Self { steps })
    }

    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Feeds every step to `session`, stopping at the first failed save.
    pub fn run(&self, session: &mut EditorSession) -> Result<(), SessionError> {
        for step in &self.steps {
            log::trace!("script step {step:?}");
            let frame = match step {
                Step::Viewport(size) => {
                    session.resize_viewport(*size);
                    continue;
                }
                Step::Type { text, modifiers } => {
                    with_modifiers(InputFrame::new().with_text(text), modifiers)
                }
                Step::Press { action, modifiers } => with_modifiers(
                    InputFrame::new().with_state(*action, tap()),
                    modifiers,
                ),
                Step::Click {
                    button,
                    target,
                    modifiers,
                } => {
                    let layout = session.layout();
                    let corner = layout.square_origin(*target);
                    let half = layout.square_size() / 2.0;
                    let action = match button {
                        PointerButton::Primary => InputAction::PrimaryButton,
                        PointerButton::Secondary => InputAction::SecondaryButton,
                    };
                    with_modifiers(
                        InputFrame::new()
                            .with_pressed(action)
                            .with_pointer(Point::new(corner.x + half, corner.y + half)),
                        modifiers,
                    )
                }
                Step::Select { axis, index } => {
                    InputFrame::new().with_clue_selection(*axis, *index)
                }
            };
            session.tick(&frame)?;
        }
        Ok(())
    }
}

fn tap() -> ActionState {
    ActionState::JUST_PRESSED | ActionState::JUST_RELEASED
}

fn with_modifiers(frame: InputFrame, modifiers: &[InputAction]) -> InputFrame {
    modifiers
        .iter()
        .fold(frame, |frame, &modifier| frame.with_held(modifier))
}

fn parse_step(line: &str) -> Result<Step, ScriptErrorKind> {
    let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
    if command == "type" {
        let step = rest
            .rsplit_once(" with ")
            .and_then(|(text, modifiers)| {
                let modifiers = parse_modifiers(modifiers).ok()?;
                Some(Step::Type {
                    text: text.to_owned(),
                    modifiers,
                })
            })
            .unwrap_or_else(|| Step::Type {
                text: rest.to_owned(),
                modifiers: Vec::new(),
            });
        return Ok(step);
    }

    let (args, modifiers) = match rest.split_once(" with ") {
        Some((args, modifiers)) => (args, parse_modifiers(modifiers)?),
        None => (rest, Vec::new()),
    };
    let mut args = args.split_whitespace();
    let mut next = |name| args.next().ok_or(ScriptErrorKind::MissingArgument(name));

    let step = match command {
        "press" => Step::Press {
            action: parse_action(next("key")?)?,
            modifiers,
        },
        "click" => {
            let button = match next("button")? {
                "primary" | "left" => PointerButton::Primary,
                "secondary" | "right" => PointerButton::Secondary,
                other => return Err(ScriptErrorKind::UnknownButton(other.to_owned())),
            };
            let x = parse_number(next("x")?)?;
            let y = parse_number(next("y")?)?;
            Step::Click {
                button,
                target: Position::new(x, y),
                modifiers,
            }
        }
        "select" => {
            let axis = match next("clue list")? {
                "across" => Axis::Across,
                "down" => Axis::Down,
                other => return Err(ScriptErrorKind::UnknownAxis(other.to_owned())),
            };
            Step::Select {
                axis,
                index: parse_number(next("index")?)?,
            }
        }
        "viewport" => {
            let width = parse_number(next("width")?)?;
            let height = parse_number(next("height")?)?;
            Step::Viewport(Size::new(width, height))
        }
        other => return Err(ScriptErrorKind::UnknownCommand(other.to_owned())),
    };
    if let Some(extra) = args.next() {
        return Err(ScriptErrorKind::UnexpectedArgument(extra.to_owned()));
    }
    Ok(step)
}

fn parse_number<T: std::str::FromStr>(s: &str) -> Result<T, ScriptErrorKind> {
    s.parse()
        .map_err(|_| ScriptErrorKind::InvalidNumber(s.to_owned()))
}

fn parse_action(name: &str) -> Result<InputAction, ScriptErrorKind> {
    let action = match name {
        "up" => InputAction::Up,
        "down" => InputAction::Down,
        "left" => InputAction::Left,
        "right" => InputAction::Right,
        "enter" | "confirm" => InputAction::Confirm,
        "escape" | "esc" => InputAction::Escape,
        "backspace" => InputAction::Backspace,
        "save" | "f1" => InputAction::Save,
        "toggle-answers" | "f2" => InputAction::ToggleAnswers,
        _ => return Err(ScriptErrorKind::UnknownAction(name.to_owned())),
    };
    Ok(action)
}

fn parse_modifiers(text: &str) -> Result<Vec<InputAction>, ScriptErrorKind> {
    text.split(|c: char| c == '+' || c.is_whitespace())
        .filter(|name| !name.is_empty())
        .map(|name| match name {
            "shift" => Ok(InputAction::Shift),
            "control" | "ctrl" => Ok(InputAction::Control),
            _ => Err(ScriptErrorKind::UnknownModifier(name.to_owned())),
        })
        .collect()
}
