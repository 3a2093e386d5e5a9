//! Policy evaluation for the classic 5x5 gridworld Markov decision process.
//!
//! The library models a rectangular lattice on which an agent moves north,
//! south, east, or west under the equiprobable random policy. Stepping off
//! the lattice costs a reward of -1 and leaves the state unchanged; special
//! (state, action) rules can override both rewards and transitions, which is
//! how the teleporting states of the textbook example are expressed.
//!
//! Two evaluation routes are provided:
//!
//! - [`agent`] - Monte-Carlo estimation from seeded rollouts
//! - [`solve`] - exact evaluation by solving the Bellman expectation system
//!
//! Supporting modules:
//!
//! - [`state`] - states and actions
//! - [`grid`] - lattice geometry and border predicates
//! - [`env`] - environments, plain and with special-case rules
//! - [`policy`] - value-function-guided action probabilities

pub mod agent;
pub mod env;
pub mod grid;
pub mod policy;
pub mod solve;
pub mod state;

// Re-export the main types for easier usage
pub use env::{Environment, GridEnvironment, RewardRule, SpecialCaseEnvironment, TransitionRule};
pub use grid::Grid;
pub use state::{Action, State};
