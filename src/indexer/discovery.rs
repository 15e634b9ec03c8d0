use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use crate::config::IndexerConfig;
use crate::utils::project_dir_candidates;

/// A session log found in a session directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFile {
    /// File name without extension; the index key
    pub stem: String,
    pub path: PathBuf,
}

/// List the indexable log files directly inside `dir`, sorted by file name
///
/// Only regular files count: symlinks and sub-directories are skipped, as are
/// sub-agent logs and files with a different extension. Entries that cannot be
/// inspected are logged and skipped; failing to read `dir` itself is an error.
pub fn discover_log_files(dir: &Path, config: &IndexerConfig) -> Result<Vec<LogFile>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(e).with_context(|| format!("Failed to read session directory: {}", dir.display()));
            }
            Err(e) => {
                log::warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let Some(file_name) = entry.file_name().to_str() else {
            log::warn!("Skipping non UTF-8 file name: {}", entry.path().display());
            continue;
        };
        if !config.is_indexable_file_name(file_name) {
            continue;
        }

        let Some(stem) = Path::new(file_name).file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if stem.is_empty() {
            continue;
        }

        files.push(LogFile { stem: stem.to_string(), path: entry.into_path() });
    }

    Ok(files)
}

/// Find the session directory belonging to a working directory
///
/// Candidates come from [`project_dir_candidates`]; the first that is a directory
/// holding at least one log file wins.
pub fn discover_session_dir(config: &IndexerConfig, cwd: &Path) -> Option<PathBuf> {
    project_dir_candidates(&config.projects_dir, cwd).into_iter().find(|candidate| {
        let found = candidate.is_dir() && contains_log_file(candidate, &config.log_extension);
        log::debug!("Session dir candidate {} (match: {})", candidate.display(), found);
        found
    })
}

fn contains_log_file(dir: &Path, extension: &str) -> bool {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .any(|entry| entry.file_type().is_file() && entry.path().extension().is_some_and(|ext| ext == extension))
}
