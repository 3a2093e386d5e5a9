//! Value-function-guided policies.

use std::collections::HashMap;

use crate::env::Environment;
use crate::state::{Action, State};

/// Maps per-action next-state values to action probabilities.
pub type Heuristic = fn(&HashMap<Action, f64>) -> HashMap<Action, f64>;

fn uniform(_values: &HashMap<Action, f64>) -> HashMap<Action, f64> {
    Action::ALL
        .iter()
        .map(|&a| (a, 1.0 / Action::ALL.len() as f64))
        .collect()
}

/// Policy guided by a value estimate over the lattice.
pub struct Policy<'a, E: Environment> {
    env: &'a E,
    /// Row-major value estimate for every state.
    pub value_function: Vec<f64>,
    heuristic: Heuristic,
}

impl<'a, E: Environment> Policy<'a, E> {
    pub fn new(env: &'a E) -> Self {
        Self::with_heuristic(env, uniform)
    }

    pub fn with_heuristic(env: &'a E, heuristic: Heuristic) -> Self {
        Self {
            env,
            value_function: vec![0.0; env.grid().cells()],
            heuristic,
        }
    }

    /// Action probabilities for the state, derived from the values of the
    /// states each action would reach.
    pub fn probabilities(&self, s: State) -> HashMap<Action, f64> {
        let mut action_values = HashMap::new();
        for &action in &Action::ALL {
            let next_state = self.env.transition(s, action);
            let idx = self.env.grid().flatten(next_state);
            action_values.insert(action, self.value_function[idx]);
        }

        (self.heuristic)(&action_values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::GridEnvironment;
    use crate::grid::Grid;

    #[test]
    fn test_default_heuristic_is_uniform() {
        let env = GridEnvironment::new(Grid::default());
        let policy = Policy::new(&env);

        let probabilities = policy.probabilities(State::new(2, 2));
        assert_eq!(probabilities.len(), Action::ALL.len());
        for probability in probabilities.values() {
            assert!((probability - 0.25).abs() < 1e-12);
        }
    }

    #[test]
    fn test_greedy_heuristic_sees_next_state_values() {
        fn greedy(values: &HashMap<Action, f64>) -> HashMap<Action, f64> {
            let best = values
                .iter()
                .max_by(|a, b| a.1.total_cmp(b.1))
                .map(|(action, _)| *action);
            values
                .keys()
                .map(|&a| (a, if Some(a) == best { 1.0 } else { 0.0 }))
                .collect()
        }

        let env = GridEnvironment::new(Grid::default());
        let mut policy = Policy::with_heuristic(&env, greedy);

        // Make the cell east of (2, 2) the most valuable neighbor
        let east = env.grid().flatten(State::new(2, 3));
        policy.value_function[east] = 1.0;

        let probabilities = policy.probabilities(State::new(2, 2));
        assert_eq!(probabilities[&Action::East], 1.0);
        assert_eq!(probabilities[&Action::North], 0.0);
    }
}
