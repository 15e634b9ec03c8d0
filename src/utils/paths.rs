use std::borrow::Cow;
use std::env;
use std::path::{Path, PathBuf};

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

// Characters percent-encoded by the legacy project directory format
const ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b':')
    .add(b'@')
    .add(b'[')
    .add(b']')
    .add(b'!');

/// Encodes a path the way Claude names project directories: every `/` becomes `-`
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use session_indexer::encode_project_dir_name;
///
/// let path = PathBuf::from("/Users/foo/bar");
/// assert_eq!(encode_project_dir_name(&path), "-Users-foo-bar");
/// ```
pub fn encode_project_dir_name(path: &Path) -> String {
    path.to_string_lossy().replace('/', "-")
}

/// Encodes a path into the legacy percent-encoded project directory format
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use session_indexer::utils::paths::encode_path_percent;
///
/// let path = PathBuf::from("/Users/foo/bar");
/// assert_eq!(encode_path_percent(&path), "-Users%2Ffoo%2Fbar");
/// ```
pub fn encode_path_percent(path: &Path) -> String {
    let path_str = path.to_string_lossy();
    let without_leading_slash = path_str.strip_prefix('/').unwrap_or(&path_str);
    let encoded = utf8_percent_encode(without_leading_slash, ENCODE_SET).to_string();
    format!("-{}", encoded)
}

/// Candidate session directories for a working directory, in lookup order
pub fn project_dir_candidates(projects_dir: &Path, cwd: &Path) -> Vec<PathBuf> {
    let encoded = encode_project_dir_name(cwd);
    let mut candidates = vec![projects_dir.join(&encoded), projects_dir.join(format!("-{}", encoded))];

    let percent = projects_dir.join(encode_path_percent(cwd));
    if !candidates.contains(&percent) {
        candidates.push(percent);
    }
    candidates
}

/// Formats a path with ~ substitution for the home directory
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

/// Internal helper for path formatting with optional home override (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home_override: Option<&str>) -> String {
    let home_from_env = env::var("HOME").ok();
    let home = home_override.or(home_from_env.as_deref()).filter(|h| !h.is_empty());

    let path_str = path.to_string_lossy();
    if let Some(home) = home
        && path_str.starts_with(home)
    {
        return path_str.replacen(home, "~", 1);
    }

    match path_str {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}
