//! Typed errors for the core scaffolding and run operations
//!
//! Every core operation fails fast with one of these kinds; the CLI binary is
//! responsible for rendering a message and choosing a process exit code.

use crate::registry::Language;
use std::path::PathBuf;

/// Error kinds surfaced by the core library
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested template identifier is not in the registry's closed set
    #[error("could not find the selected template '{name}'. Support list: {}", .supported.join(", "))]
    UnknownTemplate {
        name: String,
        supported: Vec<String>,
    },

    /// The destination name violates the project-name rule
    #[error(
        "invalid project name '{0}': only lowercase letters (a-z), hyphens and underscores are allowed"
    )]
    InvalidName(String),

    /// A filesystem entry already exists at the destination path
    #[error("destination '{}' already exists, refusing to overwrite", .0.display())]
    DestinationExists(PathBuf),

    /// Downloading or unpacking the template archive failed
    #[error("failed to fetch template from {url}")]
    FetchFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Marker-file detection found no supported toolchain, or more than one
    #[error("{}", ambiguous_or_unknown_message(.found))]
    AmbiguousOrUnknownProject { found: Vec<Language> },

    /// The toolchain's build step exited non-zero; the run step was not attempted
    #[error("build command exited with code {0}")]
    BuildFailed(i32),

    /// The toolchain's run step exited non-zero
    #[error("run command exited with code {0}")]
    RunFailed(i32),

    /// The user aborted an interactive prompt; not a failure, exits 0
    #[error("cancelled")]
    UserCancelled,

    /// Unexpected filesystem or process-spawn failure outside the kinds above
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn ambiguous_or_unknown_message(found: &[Language]) -> String {
    if found.is_empty() {
        "no supported project detected in this directory (expected go.mod, package.json, \
         requirements.txt or pyproject.toml)"
            .to_string()
    } else {
        format!(
            "multiple project toolchains detected ({}); cannot decide which one to run",
            found
                .iter()
                .map(|l| l.tag())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

impl Error {
    /// Exit code the process should terminate with for this error.
    ///
    /// Build/run failures propagate the child's exit code; a cancelled prompt
    /// is a normal early termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::BuildFailed(code) | Error::RunFailed(code) => *code,
            Error::UserCancelled => 0,
            _ => 1,
        }
    }
}
