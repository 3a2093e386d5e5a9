use anyhow::Result;
use clap::Parser;
use colored::*;

use gridworld::agent::Agent;
use gridworld::env::{Environment, RewardRule, SpecialCaseEnvironment, TransitionRule};
use gridworld::grid::Grid;
use gridworld::solve::evaluate_equiprobable;
use gridworld::state::{Action, State};

/// Gridworld - policy evaluation for the 5x5 example
#[derive(Parser)]
#[command(name = "gridworld")]
#[command(about = "Evaluate the equiprobable policy on the 5x5 gridworld example")]
#[command(version)]
struct Cli {
    /// Discount factor
    #[arg(long, default_value_t = 0.9)]
    gamma: f64,

    /// Steps per Monte-Carlo rollout
    #[arg(long, default_value_t = 100)]
    iterations: usize,

    /// Rollouts per cell
    #[arg(long, default_value_t = 1000)]
    samples: usize,
}

/// The textbook example: A teleports to A' for +10, B to B' for +5.
fn example_environment(gamma: f64) -> SpecialCaseEnvironment {
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

    let mut env = SpecialCaseEnvironment::new(Grid::new(5, 5), reward_rules, transition_rules);
    env.set_gamma(gamma);
    env
}

fn monte_carlo_values(env: &impl Environment, iterations: usize, samples: usize) -> Vec<Vec<f64>> {
    let grid = env.grid();
    let mut values = vec![vec![0.0; grid.cols as usize]; grid.rows as usize];

    for s in grid.states() {
        let mut agent = Agent::new(env, s);
        values[s.row as usize][s.col as usize] = agent.play(iterations, samples);
    }

    values
}

fn print_values(values: &[Vec<f64>]) {
    for row in values {
        let cells: Vec<String> = row.iter().map(|v| format!("{:6.2}", v)).collect();
        println!("  {}", cells.join(" "));
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let env = example_environment(cli.gamma);

    println!("{}", "Monte-Carlo estimate".bold().underline());
    print_values(&monte_carlo_values(&env, cli.iterations, cli.samples));

    println!();
    println!("{}", "Bellman solution".bold().underline());
    let exact = evaluate_equiprobable(&env)?;
    print_values(&exact);

    Ok(())
}
