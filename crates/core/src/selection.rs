//! File selection for command interpolation
//!
//! Resolves a command's file selector into a sorted list of workspace-relative
//! paths, either by walking the tree with a glob or by querying git for
//! tracked files.

use std::collections::VecDeque;
use std::path::Path;
use std::process::Command;

use globset::{Glob, GlobSetBuilder};
use log::{debug, warn};

use crate::configs::tasks::FileSelector;
use crate::types::{ChoreError, ChoreResult};

const DEFAULT_EXCLUDE_GLOBS: &[&str] = &["**/.git/**", "**/target/**", "**/node_modules/**"];

/// Resolve a selector to the files it names, sorted and deduplicated.
pub fn resolve_selector(root: &Path, selector: &FileSelector) -> ChoreResult<Vec<String>> {
    let mut files = match selector {
        FileSelector::Glob(pattern) => glob_files(root, pattern)?,
        FileSelector::Tracked(pathspec) => tracked_files(root, pathspec)?,
    };

    files.sort();
    files.dedup();

    if files.is_empty() {
        // Zero-input handling is the invoked tool's call, not ours
        warn!("selector matched no files; running the command without file arguments");
    }

    Ok(files)
}

fn glob_files(root: &Path, pattern: &str) -> ChoreResult<Vec<String>> {
    let include = Glob::new(pattern)
        .map_err(|e| ChoreError::Selection(format!("Invalid glob '{}': {}", pattern, e)))?;
    let mut include_builder = GlobSetBuilder::new();
    include_builder.add(include);
    let include_set = include_builder
        .build()
        .map_err(|e| ChoreError::Selection(format!("Invalid glob '{}': {}", pattern, e)))?;

    let mut exclude_builder = GlobSetBuilder::new();
    for exclude in DEFAULT_EXCLUDE_GLOBS {
        if let Ok(glob) = Glob::new(exclude) {
            exclude_builder.add(glob);
        }
    }
    let exclude_set = exclude_builder.build().unwrap_or_default();

    let mut files = Vec::new();
    let mut queue = VecDeque::new();
    queue.push_back(root.to_path_buf());

    while let Some(current_dir) = queue.pop_front() {
        if let Ok(entries) = std::fs::read_dir(&current_dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                let relative_path = path.strip_prefix(root).unwrap_or(&path);

                if exclude_set.is_match(relative_path) {
                    continue;
                }

                if path.is_file() {
                    if include_set.is_match(relative_path) {
                        files.push(relative_path.to_string_lossy().into_owned());
                    }
                } else if path.is_dir() {
                    queue.push_back(path);
                }
            }
        }
    }

    debug!("glob '{}' selected {} files", pattern, files.len());
    Ok(files)
}

fn tracked_files(root: &Path, pathspec: &str) -> ChoreResult<Vec<String>> {
    let output = Command::new("git")
        .args(["ls-files", "--", pathspec])
        .current_dir(root)
        .output()
        .map_err(|e| ChoreError::Selection(format!("Failed to run git ls-files: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ChoreError::Selection(format!(
            "git ls-files failed for '{}': {}",
            pathspec,
            stderr.trim()
        )));
    }

    let files = String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>();

    debug!("git tracks {} files matching '{}'", files.len(), pathspec);
    Ok(files)
}
