//! Gridworld lattice geometry.

use crate::state::{Action, State};

/// Gridworld lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub rows: i32,
    pub cols: i32,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(5, 5)
    }
}

impl Grid {
    pub fn new(rows: i32, cols: i32) -> Self {
        Self { rows, cols }
    }

    /// Number of cells in the lattice.
    pub fn cells(&self) -> usize {
        (self.rows * self.cols) as usize
    }

    pub fn on_border_top(&self, s: State) -> bool {
        s.row == 0
    }

    pub fn on_border_bottom(&self, s: State) -> bool {
        s.row == self.rows - 1
    }

    pub fn on_border_left(&self, s: State) -> bool {
        s.col == 0
    }

    pub fn on_border_right(&self, s: State) -> bool {
        s.col == self.cols - 1
    }

    /// Whether the state sits on any border.
    pub fn on_border(&self, s: State) -> bool {
        self.on_border_top(s)
            || self.on_border_bottom(s)
            || self.on_border_left(s)
            || self.on_border_right(s)
    }

    pub fn off_border_top(&self, s: State, a: Action) -> bool {
        self.on_border_top(s) && a == Action::North
    }

    pub fn off_border_bottom(&self, s: State, a: Action) -> bool {
        self.on_border_bottom(s) && a == Action::South
    }

    pub fn off_border_left(&self, s: State, a: Action) -> bool {
        self.on_border_left(s) && a == Action::West
    }

    pub fn off_border_right(&self, s: State, a: Action) -> bool {
        self.on_border_right(s) && a == Action::East
    }

    /// Whether the action would step off any border.
    pub fn off_border(&self, s: State, a: Action) -> bool {
        self.off_border_top(s, a)
            || self.off_border_bottom(s, a)
            || self.off_border_left(s, a)
            || self.off_border_right(s, a)
    }

    /// Index of the state in a row-major flattening of the lattice.
    pub fn flatten(&self, s: State) -> usize {
        (s.row * self.cols + s.col) as usize
    }

    /// State at the given row-major index.
    pub fn unflatten(&self, idx: usize) -> State {
        let idx = idx as i32;
        State::new(idx / self.cols, idx % self.cols)
    }

    /// All states of the lattice, in row-major order.
    pub fn states(&self) -> impl Iterator<Item = State> {
        let rows = self.rows;
        let cols = self.cols;
        (0..rows).flat_map(move |row| (0..cols).map(move |col| State::new(row, col)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_predicates() {
        let grid = Grid::new(5, 5);
        assert!(grid.on_border(State::new(0, 2)));
        assert!(grid.on_border(State::new(4, 2)));
        assert!(grid.on_border(State::new(2, 0)));
        assert!(grid.on_border(State::new(2, 4)));
        assert!(!grid.on_border(State::new(2, 2)));
    }

    #[test]
    fn test_off_border_requires_matching_action() {
        let grid = Grid::new(5, 5);
        let corner = State::new(0, 0);
        assert!(grid.off_border(corner, Action::North));
        assert!(grid.off_border(corner, Action::West));
        assert!(!grid.off_border(corner, Action::South));
        assert!(!grid.off_border(corner, Action::East));
    }

    #[test]
    fn test_flatten_unflatten_round_trip() {
        let grid = Grid::new(3, 4);
        for (expected_idx, s) in grid.states().enumerate() {
            assert_eq!(grid.flatten(s), expected_idx);
            assert_eq!(grid.unflatten(expected_idx), s);
        }
    }

    #[test]
    fn test_states_covers_every_cell_once() {
        let grid = Grid::default();
        assert_eq!(grid.states().count(), grid.cells());
    }
}
