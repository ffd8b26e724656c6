//! OpenAPI Read Guard - Claude Code read hook.
//!
//! A PreToolUse hook that blocks reads of `.yaml` files, except for
//! `docs/openapi.yaml`.

pub mod audit;
pub mod config;
pub mod decision;
pub mod input;
pub mod output;
pub mod rules;

pub use config::Config;
pub use decision::Decision;
pub use input::{HookInput, InputError};
pub use output::format_response;
pub use rules::check_yaml_read;

/// Exit status for input that could not be read or parsed.
pub const EXIT_INVALID_INPUT: u8 = 1;
