use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop the world from being built.
///
/// All of these are fatal: the game never starts on a partially loaded world.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{source_name}, line {line}: {reason}")]
    MalformedData {
        source_name: String,
        line: usize,
        reason: String,
    },

    #[error("{referenced_by} references unknown room '{key}'")]
    UnknownRoom { referenced_by: String, key: String },

    #[error("{referenced_by} references unknown item '{key}'")]
    UnknownItem { referenced_by: String, key: String },

    #[error("duplicate {kind} key '{key}'")]
    DuplicateKey { kind: &'static str, key: String },

    #[error("item '{key}' is never placed in a room (containers form a cycle)")]
    PlacementCycle { key: String },

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
}

impl LoadError {
    pub(crate) fn malformed(source_name: &str, line: usize, reason: impl Into<String>) -> Self {
        LoadError::MalformedData {
            source_name: source_name.to_string(),
            line,
            reason: reason.into(),
        }
    }
}
