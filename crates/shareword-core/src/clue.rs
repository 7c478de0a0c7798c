//! Numbered clue entries anchored to grid squares.

use crate::{Hint, Position};

/// The direction a clue's answer runs in.
///
/// A [`ClueEntry`] has no direction field; the list it lives in within
/// [`ClueStore`] is its direction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant,
)]
pub enum Axis {
    /// Left to right.
    #[display("Across")]
    Across,
    /// Top to bottom.
    #[display("Down")]
    Down,
}

impl Axis {
    /// Both axes, across first.
    pub const ALL: [Self; 2] = [Self::Across, Self::Down];
}

/// A numbered answer with its hint text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClueEntry {
    /// The printed clue number. An across and a down entry starting on the
    /// same square share their number.
    pub number: u32,
    /// The square the answer starts on.
    pub origin: Position,
    /// The hint shown to the solver.
    pub hint: Hint,
}

impl ClueEntry {
    /// Creates an entry, truncating `hint` to capacity.
    #[must_use]
    pub fn new(number: u32, origin: Position, hint: &str) -> Self {
        Self {
            number,
            origin,
            hint: Hint::truncated(hint),
        }
    }
}

/// The across and down clue lists of a puzzle.
///
/// Order within a list is display order only. Nothing here prevents two
/// entries on the same square and axis; the editor's numbering keeps that
/// from happening.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ClueStore {
    across: Vec<ClueEntry>,
    down: Vec<ClueEntry>,
}

impl ClueStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the entries of one axis.
    #[must_use]
    pub fn entries(&self, axis: Axis) -> &[ClueEntry] {
        match axis {
            Axis::Across => &self.across,
            Axis::Down => &self.down,
        }
    }

    /// Returns a mutable reference to the entry at `index` in `axis`.
    pub fn entry_mut(&mut self, axis: Axis, index: usize) -> Option<&mut ClueEntry> {
        self.list_mut(axis).get_mut(index)
    }

    fn list_mut(&mut self, axis: Axis) -> &mut Vec<ClueEntry> {
        match axis {
            Axis::Across => &mut self.across,
            Axis::Down => &mut self.down,
        }
    }

    /// Returns the number of entries in `axis`.
    #[must_use]
    pub fn count(&self, axis: Axis) -> usize {
        self.entries(axis).len()
    }

    /// Returns `true` if both lists are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.across.is_empty() && self.down.is_empty()
    }

    /// Appends an entry to `axis`.
    pub fn add(&mut self, axis: Axis, origin: Position, number: u32, hint: &str) {
        self.push(axis, ClueEntry::new(number, origin, hint));
    }

    /// Appends an already built entry to `axis`.
    pub fn push(&mut self, axis: Axis, entry: ClueEntry) {
        self.list_mut(axis).push(entry);
    }

    /// Removes every entry, in both lists, that starts at `pos`.
    ///
    /// Returns the number of entries removed.
    pub fn remove_at(&mut self, pos: Position) -> usize {
        let before = self.across.len() + self.down.len();
        self.across.retain(|entry| entry.origin != pos);
        self.down.retain(|entry| entry.origin != pos);
        before - (self.across.len() + self.down.len())
    }

    /// Returns the number of an entry starting at `pos` in either list.
    ///
    /// When several entries start there, down entries take precedence over
    /// across entries and later entries over earlier ones.
    #[must_use]
    pub fn find_number_at(&self, pos: Position) -> Option<u32> {
        self.across
            .iter()
            .chain(&self.down)
            .filter(|entry| entry.origin == pos)
            .map(|entry| entry.number)
            .last()
    }

    /// Returns the default number for a new entry in `axis`: one past its count.
    #[must_use]
    pub fn next_number(&self, axis: Axis) -> u32 {
        u32::try_from(self.count(axis))
            .unwrap_or(u32::MAX)
            .saturating_add(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut store = ClueStore::new();
        store.add(Axis::Across, Position::new(0, 0), 1, "first");
        store.add(Axis::Across, Position::new(2, 0), 2, "second");
        store.add(Axis::Down, Position::new(0, 0), 1, "third");

        let hints: Vec<_> = store
            .entries(Axis::Across)
            .iter()
            .map(|e| e.hint.as_str())
            .collect();
        assert_eq!(hints, ["first", "second"]);
        assert_eq!(store.count(Axis::Down), 1);
    }

    #[test]
    fn test_duplicates_are_permitted() {
        let mut store = ClueStore::new();
        store.add(Axis::Down, Position::new(1, 1), 1, "a");
        store.add(Axis::Down, Position::new(1, 1), 1, "a");
        assert_eq!(store.count(Axis::Down), 2);
    }

    #[test]
    fn test_remove_at_clears_both_axes() {
        let mut store = ClueStore::new();
        let pos = Position::new(1, 1);
        store.add(Axis::Across, pos, 1, "a");
        store.add(Axis::Across, Position::new(0, 0), 2, "b");
        store.add(Axis::Across, pos, 1, "c");
        store.add(Axis::Down, pos, 1, "d");

        assert_eq!(store.remove_at(pos), 3);
        assert_eq!(store.find_number_at(pos), None);
        assert_eq!(store.count(Axis::Across), 1);
        assert!(store.entries(Axis::Down).is_empty());
        assert_eq!(store.remove_at(pos), 0);
    }

    #[test]
    fn test_find_number_at_prefers_down() {
        let mut store = ClueStore::new();
        let pos = Position::new(3, 0);
        assert_eq!(store.find_number_at(pos), None);
        store.add(Axis::Across, pos, 4, "");
        assert_eq!(store.find_number_at(pos), Some(4));
        store.add(Axis::Down, pos, 7, "");
        assert_eq!(store.find_number_at(pos), Some(7));
    }

    #[test]
    fn test_next_number_counts_per_axis() {
        let mut store = ClueStore::new();
        assert_eq!(store.next_number(Axis::Across), 1);
        store.add(Axis::Across, Position::new(0, 0), 1, "");
        store.add(Axis::Across, Position::new(0, 1), 2, "");
        assert_eq!(store.next_number(Axis::Across), 3);
        assert_eq!(store.next_number(Axis::Down), 1);
    }

    #[test]
    fn test_entry_mut() {
        let mut store = ClueStore::new();
        store.add(Axis::Down, Position::new(0, 0), 1, "old");
        store.entry_mut(Axis::Down, 0).unwrap().hint = Hint::truncated("new");
        assert_eq!(store.entries(Axis::Down)[0].hint, "new");
        assert!(store.entry_mut(Axis::Across, 0).is_none());
    }
}
