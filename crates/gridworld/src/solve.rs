//! Exact policy evaluation via the Bellman expectation equations.
//!
//! For the equiprobable policy the state values satisfy a linear system over
//! all lattice cells: v(s) = Σ_a π(a) [r(s, a) + γ v(s')]. This module
//! assembles that system and solves it with Gaussian elimination, which is
//! plenty for lattices of textbook size.

use thiserror::Error;

use crate::env::Environment;
use crate::state::Action;

#[derive(Debug, Error)]
pub enum SolveError {
    #[error("Bellman system is singular")]
    Singular,
}

/// Value function of the equiprobable policy, as a row-major grid of rows.
pub fn evaluate_equiprobable(env: &impl Environment) -> Result<Vec<Vec<f64>>, SolveError> {
    let grid = env.grid();
    let cells = grid.cells();
    let pi = 1.0 / Action::ALL.len() as f64;

    let mut a = vec![vec![0.0; cells]; cells];
    let mut b = vec![0.0; cells];

    for s in grid.states() {
        let idx = grid.flatten(s);
        a[idx][idx] = -1.0;

        for &action in &Action::ALL {
            let r = env.reward(s, action);
            b[idx] -= pi * r;

            let next = env.transition(s, action);
            let next_idx = grid.flatten(next);
            a[idx][next_idx] += pi * env.gamma();
        }
    }

    let v = solve_dense(a, b)?;

    let cols = grid.cols as usize;
    let mut values = vec![Vec::with_capacity(cols); grid.rows as usize];
    for (idx, value) in v.into_iter().enumerate() {
        values[idx / cols].push(value);
    }

    Ok(values)
}

/// Gaussian elimination with partial pivoting.
fn solve_dense(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Result<Vec<f64>, SolveError> {
    let n = b.len();

    for col in 0..n {
        // Pivot on the largest magnitude remaining in this column
        let mut pivot = col;
        for row in (col + 1)..n {
            if a[row][col].abs() > a[pivot][col].abs() {
                pivot = row;
            }
        }
        if a[pivot][col].abs() < 1e-12 {
            return Err(SolveError::Singular);
        }
        a.swap(col, pivot);
        b.swap(col, pivot);

        let pivot_row = a[col].clone();
        let pivot_b = b[col];
        for row in (col + 1)..n {
            let factor = a[row][col] / pivot_row[col];
            if factor == 0.0 {
                continue;
            }
            for k in col..n {
                a[row][k] -= factor * pivot_row[k];
            }
            b[row] -= factor * pivot_b;
        }
    }

    let mut x = vec![0.0; n];
    for row in (0..n).rev() {
        let mut sum = b[row];
        for k in (row + 1)..n {
            sum -= a[row][k] * x[k];
        }
        x[row] = sum / a[row][row];
    }

    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::Agent;
    use crate::env::{RewardRule, SpecialCaseEnvironment, TransitionRule};
    use crate::grid::Grid;
    use crate::state::State;

    /// The 5x5 example: A teleports to A' for +10, B to B' for +5.
    fn example_environment() -> SpecialCaseEnvironment {
        let a = State::new(0, 1);
        let a_prime = State::new(4, 1);
        let b = State::new(0, 3);
        let b_prime = State::new(2, 3);

        let mut reward_rules = Vec::new();
        let mut transition_rules = Vec::new();
        for &action in &Action::ALL {
            reward_rules.push(RewardRule {
                state: a,
                action,
                reward: 10.0,
            });
            reward_rules.push(RewardRule {
                state: b,
                action,
                reward: 5.0,
            });
            transition_rules.push(TransitionRule {
                state: a,
                action,
                next_state: a_prime,
            });
            transition_rules.push(TransitionRule {
                state: b,
                action,
                next_state: b_prime,
            });
        }

        SpecialCaseEnvironment::new(Grid::new(5, 5), reward_rules, transition_rules)
    }

    #[test]
    fn test_matches_reference_value_function() {
        let env = example_environment();
        let values = evaluate_equiprobable(&env).unwrap();

        let reference = [
            [3.3, 8.8, 4.4, 5.3, 1.5],
            [1.5, 3.0, 2.3, 1.9, 0.5],
            [0.1, 0.7, 0.7, 0.4, -0.4],
            [-1.0, -0.4, -0.4, -0.6, -1.2],
            [-1.9, -1.3, -1.2, -1.4, -2.0],
        ];

        for (row, reference_row) in reference.iter().enumerate() {
            for (col, expected) in reference_row.iter().enumerate() {
                let got = values[row][col];
                assert!(
                    (got - expected).abs() < 5e-2,
                    "value at ({}, {}) was {}, expected {}",
                    row,
                    col,
                    got,
                    expected
                );
            }
        }
    }

    #[test]
    fn test_monte_carlo_estimate_agrees_with_exact_solution() {
        let env = example_environment();
        let values = evaluate_equiprobable(&env).unwrap();

        let s = State::new(2, 2);
        let mut agent = Agent::new(&env, s);
        let estimate = agent.play(100, 1000);

        let exact = values[s.row as usize][s.col as usize];
        assert!(
            (estimate - exact).abs() < 0.75,
            "estimate {} too far from exact {}",
            estimate,
            exact
        );
    }

    #[test]
    fn test_plain_environment_values_are_non_positive() {
        let env = crate::env::GridEnvironment::new(Grid::new(4, 4));
        let values = evaluate_equiprobable(&env).unwrap();
        for row in &values {
            for &value in row {
                assert!(value <= 0.0);
            }
        }
    }

    #[test]
    fn test_singular_system_is_reported() {
        let a = vec![vec![0.0, 0.0], vec![0.0, 0.0]];
        let b = vec![1.0, 1.0];
        assert!(matches!(solve_dense(a, b), Err(SolveError::Singular)));
    }
}
