pub mod environment;
pub mod paths;
pub mod terminal;

pub use environment::get_claude_dir;
pub use paths::{encode_project_dir_name, format_path_with_tilde, project_dir_candidates};
pub use terminal::sanitize_cell;
