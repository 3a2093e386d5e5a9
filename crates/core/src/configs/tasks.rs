use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::{ChoreError, ChoreResult};

/// Placeholder token replaced by the selected file list.
pub const FILES_PLACEHOLDER: &str = "{files}";

/// How a command's file list is produced.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum FileSelector {
    /// Fixed glob over the workspace tree.
    Glob(String),
    /// Source-controlled files matching a pathspec, queried from git.
    Tracked(String),
}

/// One step of a target.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CommandConfig {
    /// Command template. May reference `{files}` when a selector is set.
    pub run: String,
    /// File selection interpolated at the `{files}` placeholder.
    pub files: Option<FileSelector>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TargetConfig {
    pub name: String,
    pub description: Option<String>,
    pub commands: Vec<CommandConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TargetsFileConfig {
    pub name: Option<String>,
    pub description: Option<String>,
    pub targets: Vec<TargetConfig>,
}

pub fn parse_targets_config(yaml_str: &str) -> ChoreResult<TargetsFileConfig> {
    let config: TargetsFileConfig = serde_yaml::from_str(yaml_str)?;
    Ok(config)
}

/// Validate a merged configuration: unique target names, well-formed commands.
pub fn validate_config(config: &TargetsFileConfig) -> ChoreResult<()> {
    let mut seen = HashSet::new();
    for target in &config.targets {
        if !seen.insert(target.name.as_str()) {
            return Err(ChoreError::Config(format!(
                "Duplicate target '{}'",
                target.name
            )));
        }
        validate_target(target)?;
    }
    Ok(())
}

/// Validate a single target definition.
pub fn validate_target(target: &TargetConfig) -> ChoreResult<()> {
    if target.commands.is_empty() {
        return Err(ChoreError::Config(format!(
            "Target '{}' has no commands to execute",
            target.name
        )));
    }
    for command in &target.commands {
        validate_command(&target.name, command)?;
    }
    Ok(())
}

fn validate_command(target_name: &str, command: &CommandConfig) -> ChoreResult<()> {
    let tokens: Vec<&str> = command.run.split_whitespace().collect();
    let first = match tokens.first() {
        Some(first) => *first,
        None => {
            return Err(ChoreError::Config(format!(
                "Target '{}' has an empty command",
                target_name
            )))
        }
    };

    // The file list supplies arguments, never the program itself
    if first == FILES_PLACEHOLDER {
        return Err(ChoreError::Config(format!(
            "Target '{}': file list cannot stand in the command position in '{}'",
            target_name, command.run
        )));
    }

    let has_placeholder = tokens.contains(&FILES_PLACEHOLDER);
    match (&command.files, has_placeholder) {
        (Some(_), false) => Err(ChoreError::Config(format!(
            "Target '{}': command '{}' has a file selector but no {} placeholder",
            target_name, command.run, FILES_PLACEHOLDER
        ))),
        (None, true) => Err(ChoreError::Config(format!(
            "Target '{}': command '{}' references {} but declares no file selector",
            target_name, command.run, FILES_PLACEHOLDER
        ))),
        _ => Ok(()),
    }
}
