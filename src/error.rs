// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 The Frontier Framework Authors

// Error Taxonomy
//
// Every failure of a build run is terminal. Each variant knows the exit code
// the builder reports for it; a child's own exit code is not an error and
// never passes through here.

use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum BuildError {
    /// One of `<config-name> <platform> <arch>` was not supplied.
    MissingArgument { message: String },
    /// Any other command-line parse failure (unknown flag, bad value).
    InvalidArgument { message: String },
    ConfigNotFound {
        path: PathBuf,
        available: Vec<String>,
    },
    ConfigRead {
        path: PathBuf,
        source: io::Error,
    },
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    Spawn {
        program: String,
        source: io::Error,
    },
    Wait { source: io::Error },
}

impl BuildError {
    pub fn exit_code(&self) -> i32 {
        match self {
            BuildError::Spawn { source, .. } => match source.kind() {
                io::ErrorKind::NotFound => 127,
                io::ErrorKind::PermissionDenied => 126,
                _ => 1,
            },
            _ => 1,
        }
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::MissingArgument { message } | BuildError::InvalidArgument { message } => {
                f.write_str(message)
            }
            BuildError::ConfigNotFound { path, available } => {
                write!(f, "config file not found: {}", path.display())?;
                if available.is_empty() {
                    write!(f, " (no configs available)")
                } else {
                    write!(f, " (available: {})", available.join(", "))
                }
            }
            BuildError::ConfigRead { path, .. } => {
                write!(f, "failed to read config {}", path.display())
            }
            BuildError::ConfigParse { path, .. } => {
                write!(f, "failed to parse config {}", path.display())
            }
            BuildError::Spawn { program, .. } => write!(f, "failed to start `{program}`"),
            BuildError::Wait { .. } => f.write_str("failed to wait for the packaging tool"),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuildError::ConfigRead { source, .. }
            | BuildError::Spawn { source, .. }
            | BuildError::Wait { source } => Some(source),
            BuildError::ConfigParse { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Exit code for an error that reached `main`.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<BuildError>()
        .map_or(1, BuildError::exit_code)
}
