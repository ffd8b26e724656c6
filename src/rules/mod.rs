//! Built-in read rules.

mod yaml;

pub use yaml::{YAML_BLOCK_REASON, YAML_READ_RULE, check_yaml_read, normalize_separators};
