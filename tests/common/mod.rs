//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

pub const SESSION_ID: &str = "550e8400-e29b-41d4-a716-446655440000";

/// Builder for a directory of session logs
pub struct SessionDirBuilder {
    temp_dir: TempDir,
}

impl SessionDirBuilder {
    /// Create a new builder with an empty session directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a log file built from the given lines
    pub fn with_log(self, file_name: &str, log: &SessionLogBuilder) -> Self {
        log.write_to(&self.temp_dir.path().join(file_name));
        self
    }

    /// Add a file with raw contents
    pub fn with_file(self, file_name: &str, content: &[u8]) -> Self {
        fs::write(self.temp_dir.path().join(file_name), content).expect("Failed to write file");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for SessionDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for the lines of one session log file
#[derive(Clone)]
pub struct SessionLogBuilder {
    session_id: Option<String>,
    lines: Vec<String>,
    next_timestamp: i64,
}

impl SessionLogBuilder {
    /// Create an empty log whose lines carry [`SESSION_ID`]
    pub fn new() -> Self {
        Self { session_id: Some(SESSION_ID.to_string()), lines: Vec::new(), next_timestamp: 1_700_000_000_000 }
    }

    /// Set the session ID written on subsequent lines (`None` omits the field)
    pub fn session_id(mut self, session_id: Option<&str>) -> Self {
        self.session_id = session_id.map(str::to_string);
        self
    }

    fn push_message(mut self, entry_type: &str, content: Value) -> Self {
        let mut line = json!({
            "type": entry_type,
            "timestamp": self.next_timestamp,
            "message": { "role": entry_type, "content": content },
        });
        if let Some(session_id) = &self.session_id {
            line["sessionId"] = json!(session_id);
        }
        self.next_timestamp += 1_000;
        self.lines.push(line.to_string());
        self
    }

    /// User message with plain string content
    pub fn user(self, text: &str) -> Self {
        self.push_message("user", json!(text))
    }

    /// User message with typed content blocks
    pub fn user_blocks(self, blocks: Vec<Value>) -> Self {
        self.push_message("user", Value::Array(blocks))
    }

    /// Assistant message with a single text block
    pub fn assistant(self, text: &str) -> Self {
        self.push_message("assistant", json!([text_block(text)]))
    }

    /// Slash command invocation as the client logs it
    pub fn command(self, name: &str) -> Self {
        let text = format!(
            "<command-message>{name} is running…</command-message>\n<command-name>/{name}</command-name>"
        );
        self.user(&text)
    }

    /// A line of another record type (summary, progress, ...)
    pub fn other(mut self, entry_type: &str) -> Self {
        self.lines.push(json!({ "type": entry_type }).to_string());
        self
    }

    /// A raw line, written as is
    pub fn raw(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn to_jsonl(&self) -> String {
        let mut content = self.lines.join("\n");
        content.push('\n');
        content
    }

    pub fn write_to(&self, path: &Path) {
        fs::write(path, self.to_jsonl()).expect("Failed to write log file");
    }
}

impl Default for SessionLogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn text_block(text: &str) -> Value {
    json!({ "type": "text", "text": text })
}

pub fn tool_result_block(tool_use_id: &str, content: &str) -> Value {
    json!({ "type": "tool_result", "tool_use_id": tool_use_id, "content": content })
}

pub fn tool_use_block(name: &str) -> Value {
    json!({ "type": "tool_use", "id": "toolu_01", "name": name, "input": {} })
}

/// A fake home directory with `.claude/projects/<encoded>` session directories
pub struct ClaudeHomeBuilder {
    temp_home: TempDir,
}

impl ClaudeHomeBuilder {
    pub fn new() -> Self {
        let temp_home = TempDir::new().expect("Failed to create temp home");
        fs::create_dir_all(temp_home.path().join(".claude").join("projects"))
            .expect("Failed to create projects dir");
        Self { temp_home }
    }

    pub fn home(&self) -> &Path {
        self.temp_home.path()
    }

    pub fn projects_dir(&self) -> PathBuf {
        self.temp_home.path().join(".claude").join("projects")
    }

    /// Add a session directory named `encoded_name` holding the given logs
    pub fn with_session_dir(self, encoded_name: &str, logs: &[(&str, SessionLogBuilder)]) -> Self {
        let dir = self.projects_dir().join(encoded_name);
        fs::create_dir_all(&dir).expect("Failed to create session dir");
        for (file_name, log) in logs {
            log.write_to(&dir.join(file_name));
        }
        self
    }

    pub fn build(self) -> TempDir {
        self.temp_home
    }
}

impl Default for ClaudeHomeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A session directory with a typical mix of logs
pub fn realistic_session_dir() -> TempDir {
    SessionDirBuilder::new()
        .with_log(
            "11111111-aaaa-4bbb-8ccc-000000000001.jsonl",
            &SessionLogBuilder::new()
                .user("修复登录错误，点击按钮后页面报错")
                .assistant("我先看一下登录组件的错误处理逻辑。"),
        )
        .with_log(
            "11111111-aaaa-4bbb-8ccc-000000000002.jsonl",
            &SessionLogBuilder::new().user("新增订单接口，支持分页查询").assistant("好的，我来实现这个接口。"),
        )
        .with_log(
            "11111111-aaaa-4bbb-8ccc-000000000003.jsonl",
            &SessionLogBuilder::new().command("recover-context").user("Continue where we left off"),
        )
        .with_log("agent-1234.jsonl", &SessionLogBuilder::new().user("Sub-agent work that is never indexed"))
        .build()
}
