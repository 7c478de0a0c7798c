//! The `.shareword` text format.
//!
//! ```text
//! <title>
//! <width> <height>
//! <width*height cells, row 0 first, `~` for a blocked square>across:
//! <number>:<x>,<y>:<hint>
//! down:
//! <number>:<x>,<y>:<hint>
//! ```
//!
//! The grid body has no line break after it, so the `across:` header follows
//! the last cell directly. Nothing is escaped: a title or hint containing a
//! line break, or a hint containing `:` or `,` in the number or coordinate
//! fields, does not survive a round trip. Cells holding `~` read back as
//! blocked squares.
//!
//! Decoding rejects a clue anchored outside the grid, and a declared size is
//! only allocated as far as the grid body actually supplies cells.

use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

use crate::{Axis, ClueEntry, ClueStore, Grid, Hint, Position, Puzzle, Title};

/// The character standing in for a blocked square.
pub const BLOCKED_CELL: char = '~';

const ACROSS_HEADER: &str = "across:";
const DOWN_HEADER: &str = "down:";

fn header(axis: Axis) -> &'static str {
    match axis {
        Axis::Across => ACROSS_HEADER,
        Axis::Down => DOWN_HEADER,
    }
}

/// Error produced when text does not follow the format.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum FormatError {
    /// The input is empty.
    #[display("missing title line")]
    MissingTitle,
    /// The size line is not two integers separated by a space.
    #[display("line {line}: invalid size line {text:?}")]
    InvalidSize {
        /// 1-based line number.
        line: usize,
        /// The offending line.
        text: String,
    },
    /// One of the grid dimensions is zero.
    #[display("grid size {width}x{height} must be positive")]
    ZeroSize {
        /// Declared width.
        width: usize,
        /// Declared height.
        height: usize,
    },
    /// `width * height` does not fit in memory addressing.
    #[display("grid size {width}x{height} is too large")]
    GridTooLarge {
        /// Declared width.
        width: usize,
        /// Declared height.
        height: usize,
    },
    /// The grid body ends before `width * height` cells.
    #[display("grid body has {found} of {expected} cells")]
    TruncatedGrid {
        /// Declared cell count.
        expected: usize,
        /// Cells actually present.
        found: usize,
    },
    /// A section header is missing.
    #[display("missing {_0:?} section")]
    MissingSection(#[error(not(source))] &'static str),
    /// A clue line lacks its `:` or `,` separators.
    #[display("line {line}: malformed clue {text:?}")]
    InvalidClueLine {
        /// 1-based line number.
        line: usize,
        /// The offending line.
        text: String,
    },
    /// A clue is anchored outside the grid.
    #[display("line {line}: clue anchored at {pos} lies outside the grid")]
    ClueOutsideGrid {
        /// 1-based line number.
        line: usize,
        /// The anchor read from the line.
        pos: Position,
    },
    /// A numeric field of a clue line is not a non-negative integer.
    #[display("line {line}: invalid {field} {value:?}")]
    InvalidNumber {
        /// 1-based line number.
        line: usize,
        /// Which field failed: `number`, `x` or `y`.
        field: &'static str,
        /// The text that failed to parse.
        value: String,
    },
}

/// Why a puzzle file could not be loaded.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum LoadErrorKind {
    /// The file could not be read.
    #[display("{_0}")]
    Io(io::Error),
    /// The file content is malformed.
    #[display("{_0}")]
    Format(FormatError),
}

/// A puzzle file failed to load.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("could not load {}: {kind}", path.display())]
pub struct LoadError {
    /// The file that failed.
    pub path: PathBuf,
    /// What went wrong.
    #[error(source)]
    pub kind: LoadErrorKind,
}

/// A puzzle file failed to save.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("could not save {}: {source}", path.display())]
pub struct SaveError {
    /// The file that failed.
    pub path: PathBuf,
    /// The underlying I/O error.
    pub source: io::Error,
}

/// Formats a puzzle in the `.shareword` text format.
///
/// Obtained through [`encode`] or used directly with `write!`.
#[derive(Debug, Clone, Copy)]
pub struct Encoded<'a>(pub &'a Puzzle);

impl fmt::Display for Encoded<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let puzzle = self.0;
        let grid = puzzle.grid();
        writeln!(f, "{}", puzzle.title())?;
        writeln!(f, "{} {}", grid.width(), grid.height())?;
        for cell in grid.cells() {
            write!(f, "{}", cell.unwrap_or(BLOCKED_CELL))?;
        }
        for axis in Axis::ALL {
            writeln!(f, "{}", header(axis))?;
            for entry in puzzle.clues().entries(axis) {
                let ClueEntry {
                    number,
                    origin,
                    hint,
                } = entry;
                writeln!(f, "{number}:{},{}:{hint}", origin.x(), origin.y())?;
            }
        }
        Ok(())
    }
}

/// Serializes a puzzle.
#[must_use]
pub fn encode(puzzle: &Puzzle) -> String {
    Encoded(puzzle).to_string()
}

/// Parses a puzzle.
///
/// The title and hints are truncated to their capacities.
///
/// # Errors
///
/// Returns [`FormatError`] describing the first problem found.
pub fn decode(input: &str) -> Result<Puzzle, FormatError> {
    let mut reader = Reader::new(input);

    let title = reader.next_line().ok_or(FormatError::MissingTitle)?;
    let title = Title::truncated(title);

    let (width, height) = reader.size()?;
    let grid = reader.grid(width, height)?;

    let mut clues = ClueStore::new();
    if reader.next_line() != Some(ACROSS_HEADER) {
        return Err(FormatError::MissingSection(ACROSS_HEADER));
    }
    loop {
        let line = reader
            .next_line()
            .ok_or(FormatError::MissingSection(DOWN_HEADER))?;
        if line == DOWN_HEADER {
            break;
        }
        clues.push(Axis::Across, parse_clue(&grid, reader.line, line)?);
    }
    while let Some(line) = reader.next_line() {
        clues.push(Axis::Down, parse_clue(&grid, reader.line, line)?);
    }

    Ok(Puzzle::from_parts(title, grid, clues))
}

pub(crate) fn load(path: &Path) -> Result<Puzzle, LoadError> {
    let wrap = |kind: LoadErrorKind| LoadError {
        path: path.to_owned(),
        kind,
    };
    let input = fs::read_to_string(path).map_err(|e| wrap(e.into()))?;
    let puzzle = decode(&input).map_err(|e| wrap(e.into()))?;
    log::info!(
        "loaded {}: {}x{} grid, {} across, {} down",
        path.display(),
        puzzle.grid().width(),
        puzzle.grid().height(),
        puzzle.clues().count(Axis::Across),
        puzzle.clues().count(Axis::Down),
    );
    Ok(puzzle)
}

// Writes next to the target and renames over it, so readers never see a partial file.
pub(crate) fn save(puzzle: &Puzzle, path: &Path) -> Result<(), SaveError> {
    let wrap = |source: io::Error| SaveError {
        path: path.to_owned(),
        source,
    };
    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    fs::write(&tmp_path, encode(puzzle)).map_err(wrap)?;
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(wrap(e));
    }
    log::info!("saved {}", path.display());
    Ok(())
}

struct Reader<'a> {
    rest: &'a str,
    // 1-based number of the line most recently returned.
    line: usize,
}

impl<'a> Reader<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            rest: input,
            line: 0,
        }
    }

    fn next_line(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let (line, rest) = self.rest.split_once('\n').unwrap_or((self.rest, ""));
        self.rest = rest;
        self.line += 1;
        Some(line)
    }

    fn size(&mut self) -> Result<(usize, usize), FormatError> {
        let text = self.next_line().unwrap_or_default();
        let invalid = || FormatError::InvalidSize {
            line: self.line,
            text: text.to_owned(),
        };
        let (width, height) = text.split_once(' ').ok_or_else(invalid)?;
        let width = width.trim().parse::<usize>().map_err(|_| invalid())?;
        let height = height.trim().parse::<usize>().map_err(|_| invalid())?;
        if width == 0 || height == 0 {
            return Err(FormatError::ZeroSize { width, height });
        }
        Ok((width, height))
    }

    // Consumes exactly `width * height` characters without treating line breaks specially.
    fn grid(&mut self, width: usize, height: usize) -> Result<Grid, FormatError> {
        let expected = width
            .checked_mul(height)
            .ok_or(FormatError::GridTooLarge { width, height })?;
        // A declared size is only trusted as far as the input can back it.
        let mut cells = Vec::with_capacity(expected.min(self.rest.len()));
        let mut chars = self.rest.char_indices();
        while cells.len() < expected {
            let Some((_, c)) = chars.next() else {
                return Err(FormatError::TruncatedGrid {
                    expected,
                    found: cells.len(),
                });
            };
            cells.push((c != BLOCKED_CELL).then_some(c));
        }
        let consumed = chars.next().map_or(self.rest.len(), |(i, _)| i);
        // The `across:` header shares the last grid line, so only breaks inside the body count.
        self.line += self.rest[..consumed].matches('\n').count();
        self.rest = &self.rest[consumed..];
        Ok(Grid::from_cells(width, height, cells))
    }
}

fn parse_clue(grid: &Grid, line: usize, text: &str) -> Result<ClueEntry, FormatError> {
    let malformed = || FormatError::InvalidClueLine {
        line,
        text: text.to_owned(),
    };
    let (number, rest) = text.split_once(':').ok_or_else(malformed)?;
    let (x, rest) = rest.split_once(',').ok_or_else(malformed)?;
    let (y, hint) = rest.split_once(':').ok_or_else(malformed)?;

    let field = |field: &'static str, value: &str| {
        value
            .trim()
            .parse::<usize>()
            .map_err(|_| FormatError::InvalidNumber {
                line,
                field,
                value: value.to_owned(),
            })
    };
    let number = u32::try_from(field("number", number)?).map_err(|_| {
        FormatError::InvalidNumber {
            line,
            field: "number",
            value: number.to_owned(),
        }
    })?;
    let origin = Position::new(field("x", x)?, field("y", y)?);
    if !grid.contains(origin) {
        return Err(FormatError::ClueOutsideGrid { line, pos: origin });
    }
    Ok(ClueEntry {
        number,
        origin,
        hint: Hint::truncated(hint),
    })
}
