//! Grid coordinate type.

/// A square on a crossword grid.
///
/// `x` grows to the right and `y` grows upward: row 0 is the bottom row of the
/// drawn grid, so moving "up" increases `y`.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display,
)]
#[display("({x}, {y})")]
pub struct Position {
    x: usize,
    y: usize,
}

impl Position {
    /// The bottom-left square.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Creates a position from its column and row.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns the column.
    #[must_use]
    pub const fn x(self) -> usize {
        self.x
    }

    /// Returns the row.
    #[must_use]
    pub const fn y(self) -> usize {
        self.y
    }

    /// Returns the position shifted by `(dx, dy)`, or `None` if either axis
    /// would become negative.
    ///
    /// The result is not checked against any grid size; use
    /// [`Grid::contains`](crate::Grid::contains) for that.
    ///
    /// # Examples
    ///
    /// ```
    /// use shareword_core::Position;
    ///
    /// assert_eq!(Position::new(1, 1).offset(1, -1), Some(Position::new(2, 0)));
    /// assert_eq!(Position::ORIGIN.offset(-1, 0), None);
    /// ```
    #[must_use]
    pub fn offset(self, dx: isize, dy: isize) -> Option<Self> {
        Some(Self::new(
            self.x.checked_add_signed(dx)?,
            self.y.checked_add_signed(dy)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_moves_both_axes() {
        let pos = Position::new(3, 4);
        assert_eq!(pos.offset(0, 1), Some(Position::new(3, 5)));
        assert_eq!(pos.offset(-3, -4), Some(Position::ORIGIN));
        assert_eq!(pos.offset(-4, 0), None);
        assert_eq!(pos.offset(0, -5), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(2, 7).to_string(), "(2, 7)");
    }
}
