use std::env;
use std::path::PathBuf;

use crate::error::IndexerError;

/// Get the Claude directory path (~/.claude)
///
/// `HOME` is preferred so callers (and tests) can redirect it; the platform home
/// directory lookup is the fallback.
pub fn get_claude_dir() -> Result<PathBuf, IndexerError> {
    claude_dir_from(env::var_os("HOME").map(PathBuf::from))
}

pub(crate) fn claude_dir_from(home: Option<PathBuf>) -> Result<PathBuf, IndexerError> {
    let home = home
        .filter(|h| !h.as_os_str().is_empty())
        .or_else(dirs::home_dir)
        .ok_or(IndexerError::HomeDirUnavailable)?;
    Ok(home.join(".claude"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claude_dir_from_explicit_home() {
        let dir = claude_dir_from(Some(PathBuf::from("/Users/testuser"))).unwrap();
        assert_eq!(dir, PathBuf::from("/Users/testuser/.claude"));
    }

    #[test]
    fn test_claude_dir_from_empty_home_falls_back() {
        // Empty HOME is treated as unset; the fallback may or may not resolve
        if let Ok(dir) = claude_dir_from(Some(PathBuf::new())) {
            assert!(dir.ends_with(".claude"));
            assert_ne!(dir, PathBuf::from(".claude"));
        }
    }
}
