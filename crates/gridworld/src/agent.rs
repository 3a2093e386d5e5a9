//! Agent following the equiprobable random policy.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::env::Environment;
use crate::state::{Action, State};

/// Agent in the Markov decision process.
pub struct Agent<'a, E: Environment> {
    env: &'a E,
    initial_state: State,
    current_state: State,
}

impl<'a, E: Environment> Agent<'a, E> {
    pub fn new(env: &'a E, s: State) -> Self {
        Self {
            env,
            initial_state: s,
            current_state: s,
        }
    }

    /// Probability of taking the action under the equiprobable policy.
    pub fn policy(&self, _a: Action) -> f64 {
        1.0 / Action::ALL.len() as f64
    }

    /// Picks an action according to the policy.
    pub fn pick(&self, rng: &mut impl Rng) -> Action {
        *Action::ALL
            .choose_weighted(rng, |a| self.policy(*a))
            .unwrap_or(&Action::ALL[0])
    }

    /// Takes one policy step, returning the reward collected.
    pub fn step(&mut self, rng: &mut impl Rng) -> f64 {
        let action = self.pick(rng);
        let reward = self.env.reward(self.current_state, action);
        self.current_state = self.env.transition(self.current_state, action);
        reward
    }

    /// Plays one or more rollouts from the initial state and returns the mean
    /// discounted return. Rollout k seeds its generator with k, so a given
    /// sample count always reproduces the same estimate.
    pub fn play(&mut self, iterations: usize, samples: usize) -> f64 {
        if samples == 0 {
            return 0.0;
        }

        let mut returns = Vec::with_capacity(samples);

        for sample in 0..samples {
            let mut rng = StdRng::seed_from_u64(sample as u64);
            self.current_state = self.initial_state;
            let mut discount = 1.0;
            let mut value = 0.0;

            for _ in 0..iterations {
                let reward = self.step(&mut rng);
                value += discount * reward;
                discount *= self.env.gamma();
            }

            returns.push(value);
        }

        returns.iter().sum::<f64>() / returns.len() as f64
    }
}
