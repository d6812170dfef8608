//! Error type shared by the alias store, the locator and the opener.

use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by the `opn` library.
#[derive(Error, Debug)]
pub enum Error {
    /// None of the home-directory sources produced a path.
    #[error("could not determine home directory (set HOME or OPN_HOME)")]
    HomeNotFound,

    /// Creating, reading or appending to a file failed.
    #[error("{action} {}", .path.display())]
    Io {
        /// What was being attempted, e.g. "failed to read".
        action: &'static str,
        /// The file involved.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The alias name or target cannot be stored in the alias file.
    #[error("invalid alias: {reason}")]
    InvalidAlias {
        /// Why the record was rejected.
        reason: String,
    },

    /// The name is already taken and duplicates are rejected.
    #[error("alias '{name}' already exists")]
    AliasExists {
        /// The duplicate name.
        name: String,
    },

    /// No alias with this name is stored.
    #[error("alias '{name}' not found (run `opn list` to see saved aliases)")]
    AliasNotFound {
        /// The name that was looked up.
        name: String,
    },

    /// The open command is not on `PATH`.
    #[error("open command '{program}' was not found on PATH")]
    OpenCommandNotFound {
        /// The program that could not be resolved.
        program: String,
    },

    /// The configured open command could not be turned into a program + args.
    #[error("invalid open command '{command}': {reason}")]
    InvalidOpenCommand {
        /// The command line as configured.
        command: String,
        /// Why it could not be used.
        reason: String,
    },

    /// The open command was found but could not be started.
    #[error("failed to run {program}")]
    Spawn {
        /// The program that failed to start.
        program: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(
        action: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

/// Result alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;
