use thiserror::Error;

/// The main error type for chore operations
#[derive(Debug, Error)]
pub enum ChoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Selection error: {0}")]
    Selection(String),

    #[error("Target error: {0}")]
    Target(String),

    #[error("Failed to spawn '{command}': {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    #[error("Command '{command}' failed with exit code {code}")]
    CommandFailed { command: String, code: i32 },
}

impl ChoreError {
    /// Exit code carried by a failed command, if this error is one.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ChoreError::CommandFailed { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Result type alias for chore operations
pub type ChoreResult<T> = Result<T, ChoreError>;
