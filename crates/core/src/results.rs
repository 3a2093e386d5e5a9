//! Result types for task manager operations
//!
//! This module contains the output structures returned by [`crate::manager`]
//! operations, consumed by presentation layers.

use crate::configs::tasks::TargetConfig;

/// Summary of a configured target
#[derive(Debug, Clone)]
pub struct TargetInfo {
    pub name: String,
    pub description: Option<String>,
    pub command_count: usize,
}

/// Fully resolved invocation sequence for a target, without executing it
#[derive(Debug, Clone)]
pub struct TargetPlan {
    pub target_name: String,
    pub invocations: Vec<ResolvedInvocation>,
}

/// One command of a plan, with its selector already expanded
#[derive(Debug, Clone)]
pub struct ResolvedInvocation {
    pub display: String,
    /// Number of selected files, when the command interpolates a file list
    pub file_count: Option<usize>,
}

impl From<&TargetConfig> for TargetInfo {
    fn from(target: &TargetConfig) -> Self {
        Self {
            name: target.name.clone(),
            description: target.description.clone(),
            command_count: target.commands.len(),
        }
    }
}
