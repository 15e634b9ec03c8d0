use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, ValueEnum};

use crate::config::IndexerConfig;
use crate::error::IndexerError;
use crate::indexer::{IndexStore, discover_session_dir};
use crate::output::{format_json, format_table};
use crate::utils::format_path_with_tilde;

const EXAMPLES: &str = "\
Examples:
  session-indexer --auto             Index the sessions of the current project
  session-indexer /path/to/dir       Index a specific session directory
  session-indexer --auto -s login    Show sessions mentioning \"login\"";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

#[derive(Debug, Parser)]
#[command(name = "session-indexer")]
#[command(version)]
#[command(about = "Index Claude Code session logs with titles and tags", long_about = None)]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// Session directory to index (optional with --auto)
    pub session_dir: Option<PathBuf>,

    /// Discover the session directory of the current working directory
    #[arg(short, long)]
    pub auto: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Rebuild every entry, ignoring stored fingerprints
    #[arg(short, long)]
    pub force: bool,

    /// Maximum table rows (0 = no limit)
    #[arg(short, long, default_value_t = 10)]
    pub limit: usize,

    /// Only show sessions whose title, tags, date or file name contain this keyword
    #[arg(short, long)]
    pub search: Option<String>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    execute(&cli)
}

/// Resolve the session directory, update its index and print the result
pub fn execute(cli: &Cli) -> Result<()> {
    let (session_dir, config) = resolve_session_dir(cli)?;

    let store = IndexStore::open(&session_dir, config)?;
    let outcome = store.update(cli.force)?;

    let rendered = match cli.output {
        OutputFormat::Json => format_json(&outcome.document)?,
        OutputFormat::Table => format_table(store.dir(), &outcome.document, cli.limit, cli.search.as_deref()),
    };
    println!("{}", rendered);

    Ok(())
}

fn resolve_session_dir(cli: &Cli) -> Result<(PathBuf, IndexerConfig)> {
    if cli.auto {
        let config = IndexerConfig::from_env()?;
        let cwd = env::current_dir().context("Failed to read current directory")?;
        let Some(dir) = discover_session_dir(&config, &cwd) else {
            return Err(IndexerError::SessionDirNotDiscovered {
                cwd,
                projects_dir: PathBuf::from(format_path_with_tilde(&config.projects_dir)),
            }
            .into());
        };
        log::info!("Discovered session directory {}", dir.display());
        return Ok((dir, config));
    }

    let Some(dir) = cli.session_dir.clone() else {
        Cli::command().print_help().context("Failed to print help")?;
        println!();
        return Err(IndexerError::NoSessionDir.into());
    };

    // An explicit directory does not need the Claude data directory
    let config = IndexerConfig::from_env().unwrap_or_else(|e| {
        log::debug!("{}; using default configuration", e);
        IndexerConfig::from_claude_dir(Path::new(".claude"))
    });
    Ok((dir, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["session-indexer", "/tmp/sessions"]).unwrap();
        assert_eq!(cli.session_dir, Some(PathBuf::from("/tmp/sessions")));
        assert!(!cli.auto);
        assert!(!cli.force);
        assert_eq!(cli.output, OutputFormat::Table);
        assert_eq!(cli.limit, 10);
        assert_eq!(cli.search, None);
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from(["session-indexer", "-a", "-o", "json", "-f", "-l", "0", "-s", "登录"]).unwrap();
        assert!(cli.auto);
        assert!(cli.force);
        assert_eq!(cli.output, OutputFormat::Json);
        assert_eq!(cli.limit, 0);
        assert_eq!(cli.search.as_deref(), Some("登录"));
        assert_eq!(cli.session_dir, None);
    }

    #[test]
    fn test_rejects_unknown_output_format() {
        assert!(Cli::try_parse_from(["session-indexer", "-o", "xml", "/tmp"]).is_err());
    }

    #[test]
    fn test_missing_directory_is_not_found() {
        let cli = Cli::try_parse_from(["session-indexer", "/nonexistent/session/dir"]).unwrap();
        let err = execute(&cli).unwrap_err();
        assert!(matches!(err.downcast_ref::<IndexerError>(), Some(IndexerError::DirectoryNotFound(_))));
    }
}
