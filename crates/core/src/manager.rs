//! High-level task management interface
//!
//! This module provides the [`TaskManager`] which serves as the primary
//! interface for target operations. It loads and merges the target
//! configuration files, validates them once at startup, and exposes the
//! list/plan/run entry points consumed by the CLI layer.
//!
//! Targets are defined statically when the configuration is parsed and are
//! never mutated afterwards; each run is independent of any previous run.
//!
//! ## Example
//!
//! ```rust,no_run
//! use chore_core::manager::{TaskManager, TaskManagerConfig};
//! use std::path::PathBuf;
//!
//! # async fn example() -> chore_core::types::ChoreResult<()> {
//! let manager = TaskManager::new(TaskManagerConfig {
//!     workspace_root: PathBuf::from("."),
//! })?;
//!
//! // List all targets
//! let targets = manager.list_targets();
//!
//! // Show what a target would execute
//! let plan = manager.plan_target("lint")?;
//!
//! // Run a target
//! manager.run_target("test").await?;
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use crate::configs::tasks::{
    parse_targets_config, validate_config, TargetConfig, TargetsFileConfig,
};
use crate::execution::runner::{interpolate_files, TargetRunner};
use crate::results::{ResolvedInvocation, TargetInfo, TargetPlan};
use crate::selection::resolve_selector;
use crate::types::{ChoreError, ChoreResult};

/// High-level manager that encapsulates all target operations
#[derive(Debug)]
pub struct TaskManager {
    pub root: PathBuf,
    pub config: TargetsFileConfig,
}

/// Configuration for initializing a task manager
pub struct TaskManagerConfig {
    pub workspace_root: PathBuf,
}

impl TaskManager {
    /// Initialize a new task manager from the given workspace root
    pub fn new(config: TaskManagerConfig) -> ChoreResult<Self> {
        let merged = Self::load_target_configs(&config.workspace_root)?;
        validate_config(&merged)?;

        Ok(Self {
            root: config.workspace_root,
            config: merged,
        })
    }

    /// List all configured targets, in declaration order
    pub fn list_targets(&self) -> Vec<TargetInfo> {
        self.config.targets.iter().map(TargetInfo::from).collect()
    }

    /// Resolve the invocation sequence for a target without executing it
    pub fn plan_target(&self, name: &str) -> ChoreResult<TargetPlan> {
        let target = self.find_target(name)?;
        let mut invocations = Vec::new();

        for command in &target.commands {
            match &command.files {
                None => invocations.push(ResolvedInvocation {
                    display: command.run.clone(),
                    file_count: None,
                }),
                Some(selector) => {
                    let files = resolve_selector(&self.root, selector)?;
                    let argv = interpolate_files(&command.run, &files)?;
                    invocations.push(ResolvedInvocation {
                        display: argv.join(" "),
                        file_count: Some(files.len()),
                    });
                }
            }
        }

        Ok(TargetPlan {
            target_name: target.name.clone(),
            invocations,
        })
    }

    /// Execute a target
    pub async fn run_target(&self, name: &str) -> ChoreResult<()> {
        let target = self.find_target(name)?;
        let runner = TargetRunner::new(&self.root);
        runner.run_target(target).await
    }

    fn find_target(&self, name: &str) -> ChoreResult<&TargetConfig> {
        self.config
            .targets
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| ChoreError::Target(format!("Target '{}' not found", name)))
    }

    // Private helper methods

    fn load_target_configs(workspace_root: &Path) -> ChoreResult<TargetsFileConfig> {
        let tasks_dir = workspace_root.join(".chore").join("tasks");
        let mut file_configs = Vec::new();

        if tasks_dir.exists() {
            let mut paths = Vec::new();
            for entry in std::fs::read_dir(&tasks_dir).map_err(|e| {
                ChoreError::Config(format!(
                    "Failed to read tasks directory {}: {}",
                    tasks_dir.display(),
                    e
                ))
            })? {
                let entry = entry
                    .map_err(|e| ChoreError::Config(format!("Failed to read directory entry: {}", e)))?;
                let path = entry.path();
                if path.extension().and_then(|s| s.to_str()) == Some("yml") {
                    paths.push(path);
                }
            }
            // Deterministic merge order regardless of directory iteration order
            paths.sort();

            for path in paths {
                let content = std::fs::read_to_string(&path).map_err(|e| {
                    ChoreError::Config(format!(
                        "Failed to read task config {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                let config = parse_targets_config(&content).map_err(|e| {
                    ChoreError::Config(format!(
                        "Failed to parse task config {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                file_configs.push(config);
            }
        }

        // Merge all target configs
        let mut targets = Vec::new();
        let mut name = None;
        let mut description = None;

        for config in file_configs {
            targets.extend(config.targets);
            if config.name.is_some() {
                name = config.name;
            }
            if config.description.is_some() {
                description = config.description;
            }
        }

        Ok(TargetsFileConfig {
            name,
            description,
            targets,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_tasks_file(root: &Path, file_name: &str, content: &str) {
        let tasks_dir = root.join(".chore").join("tasks");
        std::fs::create_dir_all(&tasks_dir).unwrap();
        std::fs::write(tasks_dir.join(file_name), content).unwrap();
    }

    fn manager_at(root: &Path) -> ChoreResult<TaskManager> {
        TaskManager::new(TaskManagerConfig {
            workspace_root: root.to_path_buf(),
        })
    }

    #[test]
    fn test_new_without_config_dir_has_no_targets() {
        let temp_dir = tempfile::tempdir().unwrap();
        let manager = manager_at(temp_dir.path()).unwrap();
        assert!(manager.list_targets().is_empty());
    }

    #[test]
    fn test_new_merges_all_yaml_files_in_tasks_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        write_tasks_file(
            root,
            "a.yml",
            "targets:\n  - name: lint\n    commands:\n      - run: cargo clippy\n",
        );
        write_tasks_file(
            root,
            "b.yml",
            "targets:\n  - name: test\n    commands:\n      - run: cargo test\n",
        );

        let manager = manager_at(root).unwrap();
        let names: Vec<String> = manager.list_targets().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["lint".to_string(), "test".to_string()]);
    }

    #[test]
    fn test_new_rejects_duplicate_targets_across_files() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        write_tasks_file(
            root,
            "a.yml",
            "targets:\n  - name: lint\n    commands:\n      - run: cargo clippy\n",
        );
        write_tasks_file(
            root,
            "b.yml",
            "targets:\n  - name: lint\n    commands:\n      - run: cargo fmt\n",
        );

        let err = manager_at(root).unwrap_err();
        assert!(err.to_string().contains("Duplicate target 'lint'"));
    }

    #[test]
    fn test_new_rejects_malformed_placeholder_use_at_load_time() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        write_tasks_file(
            root,
            "broken.yml",
            "targets:\n  - name: lint\n    commands:\n      - run: \"{files}\"\n        files:\n          tracked: \"*.py\"\n",
        );

        let err = manager_at(root).unwrap_err();
        assert!(err.to_string().contains("command position"));
    }

    #[test]
    fn test_plan_resolves_selectors_without_executing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        std::fs::create_dir_all(root.join("src")).unwrap();
        std::fs::write(root.join("src/lib.rs"), "").unwrap();
        write_tasks_file(
            root,
            "repo.yml",
            "targets:\n  - name: lint\n    commands:\n      - run: \"rustfmt --check {files}\"\n        files:\n          glob: \"**/*.rs\"\n      - run: cargo clippy\n",
        );

        let manager = manager_at(root).unwrap();
        let plan = manager.plan_target("lint").unwrap();

        assert_eq!(plan.target_name, "lint");
        assert_eq!(plan.invocations.len(), 2);
        assert_eq!(plan.invocations[0].display, "rustfmt --check src/lib.rs");
        assert_eq!(plan.invocations[0].file_count, Some(1));
        assert_eq!(plan.invocations[1].display, "cargo clippy");
        assert_eq!(plan.invocations[1].file_count, None);
    }

    #[tokio::test]
    async fn test_run_unknown_target_is_a_target_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let manager = manager_at(temp_dir.path()).unwrap();

        let err = manager.run_target("deploy").await.unwrap_err();
        assert!(matches!(err, ChoreError::Target(_)));
        assert!(err.to_string().contains("Target 'deploy' not found"));
    }

    #[tokio::test]
    async fn test_run_target_executes_commands() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        write_tasks_file(
            root,
            "repo.yml",
            "targets:\n  - name: touch\n    commands:\n      - run: touch ran.txt\n",
        );

        let manager = manager_at(root).unwrap();
        manager.run_target("touch").await.unwrap();
        assert!(root.join("ran.txt").exists());
    }
}
