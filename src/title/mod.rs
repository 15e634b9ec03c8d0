//! Title extraction waterfall
//!
//! A session title comes from the first strategy in [`STRATEGIES`] that yields one:
//!
//! 1. [`command::command_title`] - a slash command invoked near the start of the session
//! 2. [`heading::heading_title`] - a short markdown heading opening a prompt
//! 3. [`message::message_title`] - the first user message that reads like a title
//!
//! When none applies the title is [`UNTITLED`]. Each strategy is a pure function of
//! a [`TitleContext`] and can be tested on its own.

pub mod command;
pub mod heading;
pub mod message;

/// Title used when no strategy produces one
pub const UNTITLED: &str = "untitled";

/// Number of leading user text segments scanned for commands and headings
pub const COMMAND_WINDOW: usize = 10;

/// Number of leading valid user messages scanned by the heuristic strategy
pub const MESSAGE_WINDOW: usize = 15;

/// Number of user text segments collected per file
pub const SEGMENT_CAPACITY: usize = 20;

/// Inputs shared by all title strategies
#[derive(Debug, Clone, Copy)]
pub struct TitleContext<'a> {
    /// Plain-text segments of user messages, in file order
    pub segments: &'a [String],
    /// Contents of valid user messages, in file order
    pub user_messages: &'a [String],
    pub max_title_length: usize,
}

pub type TitleStrategy = fn(&TitleContext<'_>) -> Option<String>;

/// Strategies in priority order
pub const STRATEGIES: &[TitleStrategy] =
    &[command::command_title, heading::heading_title, message::message_title];

/// Run strategies in order and return the first non-empty result
pub fn first_match(context: &TitleContext<'_>, strategies: &[TitleStrategy]) -> Option<String> {
    strategies.iter().find_map(|strategy| strategy(context).filter(|title| !title.trim().is_empty()))
}

/// Title for a session; never empty
pub fn extract_title(context: &TitleContext<'_>) -> String {
    first_match(context, STRATEGIES).unwrap_or_else(|| UNTITLED.to_string())
}
