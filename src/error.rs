//! Fatal, caller-facing error conditions
//!
//! Everything else in the crate propagates `anyhow::Result` with context, the way
//! the parsers and the index store do. These variants are the cases where the CLI
//! cannot resolve a session directory at all and must exit non-zero.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndexerError {
    #[error("no session directory given (pass a path or use --auto)")]
    NoSessionDir,

    #[error("no session directory found for {cwd} under {projects_dir}")]
    SessionDirNotDiscovered { cwd: PathBuf, projects_dir: PathBuf },

    #[error("session directory does not exist: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("home directory could not be determined")]
    HomeDirUnavailable,
}
