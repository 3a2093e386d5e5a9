//! Command execution utilities
//!
//! This module provides a unified interface for executing target commands
//! (shell command strings, or a program with an explicit argument list) with
//! consistent working-directory, environment, and failure handling.

use std::path::Path;
use std::process::Command;

use colored::*;
use log::debug;

use crate::types::{ChoreError, ChoreResult};

/// Unified command executor that handles common setup and execution patterns
pub struct CommandExecutor<'a> {
    root: &'a Path,
    target: &'a str,
}

impl<'a> CommandExecutor<'a> {
    pub fn new(root: &'a Path, target: &'a str) -> Self {
        Self { root, target }
    }

    /// Execute a prepared command, propagating the child's exit status
    fn execute(&self, command: &mut Command, display: &str) -> ChoreResult<()> {
        // Common setup
        command.current_dir(self.root);
        command.env("CHORE_TARGET", self.target);

        debug!("spawning '{}' in {}", display, self.root.display());

        let status = command.status().map_err(|source| ChoreError::Spawn {
            command: display.to_string(),
            source,
        })?;

        if !status.success() {
            return Err(ChoreError::CommandFailed {
                command: display.to_string(),
                code: status.code().unwrap_or(-1),
            });
        }

        self.show_completion_message(display);
        Ok(())
    }

    /// Execute a single shell command
    pub fn execute_shell_command(&self, cmd: &str) -> ChoreResult<()> {
        let mut command = Command::new("sh");
        command.arg("-c").arg(cmd);
        self.execute(&mut command, cmd)
    }

    /// Execute a program with arguments, preserving argument boundaries
    pub fn execute_command_with_args(&self, program: &str, args: &[String]) -> ChoreResult<()> {
        let mut command = Command::new(program);
        command.args(args);
        self.execute(&mut command, program)
    }

    fn show_completion_message(&self, display: &str) {
        println!(
            "{} {}",
            "✓".green().bold(),
            format!("Completed '{}'", display).bright_black()
        );
    }
}
