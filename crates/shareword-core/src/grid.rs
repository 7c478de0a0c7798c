//! Fixed-size letter grid.

use crate::Position;

/// Error returned by checked grid access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// The position lies outside the grid.
    #[display("position {pos} is outside the {width}x{height} grid")]
    OutOfBounds {
        /// The rejected position.
        pos: Position,
        /// Grid width.
        width: usize,
        /// Grid height.
        height: usize,
    },
}

/// A rectangular buffer of letters.
///
/// A cell holding `None` is a blocked (black) square. Letters are stored
/// uppercased. The size is fixed at construction.
///
/// Out-of-range access through [`at`](Self::at), [`set`](Self::set) and
/// [`clear`](Self::clear) is logged and ignored; [`get`](Self::get) and
/// [`try_set`](Self::try_set) report it as a [`GridError`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Creates a grid where every square is blocked.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grid size must be positive");
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<Option<char>>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `true` if `pos` lies inside the grid.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.x() < self.width && pos.y() < self.height
    }

    fn index(&self, pos: Position) -> Result<usize, GridError> {
        if self.contains(pos) {
            Ok(pos.y() * self.width + pos.x())
        } else {
            Err(GridError::OutOfBounds {
                pos,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Returns the letter at `pos`, or `None` for a blocked square.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `pos` is outside the grid.
    pub fn get(&self, pos: Position) -> Result<Option<char>, GridError> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Returns the letter at `pos`, or `None` for a blocked square.
    ///
    /// Positions outside the grid are logged and read as blocked.
    #[must_use]
    pub fn at(&self, pos: Position) -> Option<char> {
        self.get(pos).unwrap_or_else(|e| {
            log::error!("{e}");
            None
        })
    }

    /// Stores `letter` uppercased at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `pos` is outside the grid.
    pub fn try_set(&mut self, pos: Position, letter: char) -> Result<(), GridError> {
        let i = self.index(pos)?;
        self.cells[i] = Some(letter.to_ascii_uppercase());
        Ok(())
    }

    /// Stores `letter` uppercased at `pos`.
    ///
    /// Positions outside the grid are logged and ignored.
    pub fn set(&mut self, pos: Position, letter: char) {
        if let Err(e) = self.try_set(pos, letter) {
            log::error!("{e}");
        }
    }

    /// Blocks the square at `pos`.
    ///
    /// Positions outside the grid are logged and ignored.
    pub fn clear(&mut self, pos: Position) {
        match self.index(pos) {
            Ok(i) => self.cells[i] = None,
            Err(e) => log::error!("{e}"),
        }
    }

    /// Returns the cells in storage order: all columns of row 0, then row 1, and so on.
    pub fn cells(&self) -> impl ExactSizeIterator<Item = Option<char>> + '_ {
        self.cells.iter().copied()
    }

    /// Returns every position in storage order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_new_grid_is_blocked() {
        let grid = Grid::new(3, 2);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert!(grid.cells().all(|c| c.is_none()));
        assert_eq!(grid.positions().count(), 6);
    }

    #[test]
    fn test_set_uppercases() {
        let mut grid = Grid::new(3, 3);
        grid.set(Position::new(1, 2), 'q');
        assert_eq!(grid.at(Position::new(1, 2)), Some('Q'));
        grid.clear(Position::new(1, 2));
        assert_eq!(grid.at(Position::new(1, 2)), None);
    }

    #[test]
    fn test_storage_order_is_row_major() {
        let mut grid = Grid::new(2, 2);
        grid.set(Position::new(1, 0), 'b');
        grid.set(Position::new(0, 1), 'c');
        let cells: Vec<_> = grid.cells().collect();
        assert_eq!(cells, [None, Some('B'), Some('C'), None]);
    }

    #[test]
    fn test_edge_is_out_of_bounds() {
        let mut grid = Grid::new(4, 3);
        let pos = Position::new(4, 0);
        assert!(!grid.contains(pos));
        assert_eq!(
            grid.try_set(pos, 'a'),
            Err(GridError::OutOfBounds {
                pos,
                width: 4,
                height: 3
            })
        );
        assert!(grid.get(Position::new(0, 3)).is_err());
    }

    #[test]
    #[should_panic(expected = "grid size must be positive")]
    fn test_zero_size_panics() {
        let _ = Grid::new(0, 5);
    }

    proptest! {
        #[test]
        fn out_of_range_access_never_writes(
            width in 1usize..8,
            height in 1usize..8,
            x in 0usize..16,
            y in 0usize..16,
        ) {
            let mut grid = Grid::new(width, height);
            let pos = Position::new(x, y);
            let before = grid.clone();
            grid.set(pos, 'z');
            if grid.contains(pos) {
                prop_assert_eq!(grid.at(pos), Some('Z'));
            } else {
                prop_assert_eq!(&grid, &before);
                prop_assert_eq!(grid.at(pos), None);
                prop_assert!(grid.get(pos).is_err());
            }
        }
    }
}
