//! High-level target runner
//!
//! This module runs a target's commands in order, resolving file selectors
//! into argument lists and stopping at the first non-zero exit status.

use std::path::Path;

use colored::*;

use crate::configs::tasks::{CommandConfig, TargetConfig, FILES_PLACEHOLDER};
use crate::execution::command::CommandExecutor;
use crate::selection::resolve_selector;
use crate::types::{ChoreError, ChoreResult};

/// Runs targets against a workspace root
pub struct TargetRunner<'a> {
    root: &'a Path,
}

impl<'a> TargetRunner<'a> {
    pub fn new(root: &'a Path) -> Self {
        Self { root }
    }

    /// Run every command of a target in order, stopping at the first failure.
    ///
    /// Each invocation is independent of any previous one; nothing is cached
    /// or carried over between runs.
    pub async fn run_target(&self, target: &TargetConfig) -> ChoreResult<()> {
        println!();
        println!(
            "┌─ {}",
            format!("Running target '{}'", target.name).bold()
        );
        if let Some(description) = &target.description {
            println!("└─ {}", description.bright_black());
        }

        for command in &target.commands {
            self.run_command(target, command)?;
        }

        Ok(())
    }

    fn run_command(&self, target: &TargetConfig, command: &CommandConfig) -> ChoreResult<()> {
        let executor = CommandExecutor::new(self.root, &target.name);

        match &command.files {
            None => executor.execute_shell_command(&command.run),
            Some(selector) => {
                let files = resolve_selector(self.root, selector)?;
                let argv = interpolate_files(&command.run, &files)?;
                let (program, args) = match argv.split_first() {
                    Some(split) => split,
                    None => {
                        return Err(ChoreError::Config(format!(
                            "Target '{}' has an empty command",
                            target.name
                        )))
                    }
                };
                executor.execute_command_with_args(program, args)
            }
        }
    }
}

/// Expand the `{files}` token of a command template into individual arguments.
pub fn interpolate_files(template: &str, files: &[String]) -> ChoreResult<Vec<String>> {
    let mut argv = Vec::new();
    let mut replaced = false;

    for (i, token) in template.split_whitespace().enumerate() {
        if token == FILES_PLACEHOLDER {
            if i == 0 {
                return Err(ChoreError::Config(format!(
                    "File list cannot stand in the command position in '{}'",
                    template
                )));
            }
            argv.extend(files.iter().cloned());
            replaced = true;
        } else {
            argv.push(token.to_string());
        }
    }

    if !replaced {
        return Err(ChoreError::Config(format!(
            "Command '{}' has a file selector but no {} placeholder",
            template, FILES_PLACEHOLDER
        )));
    }

    Ok(argv)
}
