//! Screen placement of the grid.
//!
//! Only the geometry needed to turn a pointer position into a grid square
//! lives here; drawing is the host's job.

use shareword_core::{Grid, Position};

use crate::Point;

/// A viewport size in screen units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Size {
    /// Creates a size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Where the grid sits on screen and how large its squares are.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    origin: Point,
    square_size: f32,
    columns: usize,
    rows: usize,
}

impl GridLayout {
    /// Returns the margin around the grid for a viewport: 1/40 of its width.
    #[must_use]
    pub fn padding(viewport: Size) -> f32 {
        viewport.width / 40.0
    }

    /// Fits `grid` into `viewport` with square cells.
    ///
    /// The grid keeps a padding margin on every side plus one more padding
    /// below for the title line.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn fit(viewport: Size, grid: &Grid) -> Self {
        let padding = Self::padding(viewport);
        let available_width = viewport.width - padding * 2.0;
        let available_height = viewport.height - padding * 3.0;
        let square_size = f32::min(
            available_width / grid.width() as f32,
            available_height / grid.height() as f32,
        )
        .max(0.0);
        Self {
            origin: Point::new(padding, padding),
            square_size,
            columns: grid.width(),
            rows: grid.height(),
        }
    }

    /// Returns the screen position of square (0, 0)'s corner.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Returns the side length of one square.
    #[must_use]
    pub fn square_size(&self) -> f32 {
        self.square_size
    }

    /// Returns the screen position of a square's corner.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn square_origin(&self, pos: Position) -> Point {
        Point::new(
            self.origin.x + pos.x() as f32 * self.square_size,
            self.origin.y + pos.y() as f32 * self.square_size,
        )
    }

    /// Returns the square under `point`, or `None` outside the grid.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn cell_at(&self, point: Point) -> Option<Position> {
        if self.square_size <= 0.0 {
            return None;
        }
        let x = (point.x - self.origin.x) / self.square_size;
        let y = (point.y - self.origin.y) / self.square_size;
        // Also rejects NaN.
        if !(x >= 0.0 && y >= 0.0) {
            return None;
        }
        let pos = Position::new(x.floor() as usize, y.floor() as usize);
        (pos.x() < self.columns && pos.y() < self.rows).then_some(pos)
    }
}
