//! Input parsing for Claude Code hook invocations.

use serde_json::Value;
use std::io::Read;
use thiserror::Error;

/// Errors that can occur when reading or parsing hook input.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read stdin: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("hook input is null")]
    Null,
}

/// The raw input from Claude Code's PreToolUse hook.
///
/// Kept as untyped JSON: only `tool_input` matters to the read rule, and a
/// field of an unexpected type anywhere else must not reject the request.
/// The other accessors feed the audit log and the project config lookup.
#[derive(Debug, Clone)]
pub struct HookInput {
    raw: Value,
}

impl HookInput {
    /// Parse from JSON string.
    ///
    /// Any JSON value is accepted except `null`, which carries no fields at
    /// all. Arrays and scalars simply have no `tool_input`.
    pub fn parse(json: &str) -> Result<Self, InputError> {
        let raw: Value = serde_json::from_str(json)?;
        if raw.is_null() {
            return Err(InputError::Null);
        }
        Ok(Self { raw })
    }

    /// Read the whole stream and parse it.
    ///
    /// Blocks until the writer closes the stream. Invalid UTF-8 is replaced
    /// with U+FFFD rather than rejected.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, InputError> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Self::parse(&String::from_utf8_lossy(&buf))
    }

    /// The tool's input parameters, `None` if absent.
    pub fn tool_input(&self) -> Option<&Value> {
        self.raw.get("tool_input")
    }

    /// The tool being invoked (e.g., "Read").
    pub fn tool_name(&self) -> Option<&str> {
        self.str_field("tool_name")
    }

    /// Current working directory.
    pub fn cwd(&self) -> Option<&str> {
        self.str_field("cwd")
    }

    pub fn session_id(&self) -> Option<&str> {
        self.str_field("session_id")
    }

    /// The path the tool wants to read.
    ///
    /// `file_path` wins over `path`; empty strings and non-string values count
    /// as absent. Returns `""` when neither is usable.
    pub fn candidate_path(&self) -> &str {
        self.path_field("file_path")
            .or_else(|| self.path_field("path"))
            .unwrap_or("")
    }

    fn path_field(&self, key: &str) -> Option<&str> {
        self.tool_input()
            .and_then(|input| input.get(key))
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.raw.get(key).and_then(Value::as_str)
    }
}
