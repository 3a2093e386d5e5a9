//! States and actions in the Markov decision process.

use std::ops::Add;

/// Action in the Markov decision process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    North,
    South,
    East,
    West,
}

impl Action {
    /// All actions, in a fixed order.
    pub const ALL: [Action; 4] = [Action::North, Action::South, Action::East, Action::West];
}

/// State in the Markov decision process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct State {
    pub row: i32,
    pub col: i32,
}

impl State {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl Add<Action> for State {
    type Output = State;

    /// Applies the action without regard for lattice borders.
    fn add(self, action: Action) -> State {
        match action {
            Action::North => State::new(self.row - 1, self.col),
            Action::South => State::new(self.row + 1, self.col),
            Action::West => State::new(self.row, self.col - 1),
            Action::East => State::new(self.row, self.col + 1),
        }
    }
}
