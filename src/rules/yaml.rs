//! YAML read restriction.

use crate::decision::{BlockInfo, Decision};

/// Rule id recorded for blocked YAML reads.
pub const YAML_READ_RULE: &str = "yaml.read";

/// Message shown to the agent when a YAML read is refused.
pub const YAML_BLOCK_REASON: &str = "You cannot read .yaml files except for docs/openapi.yaml";

const YAML_SUFFIX: &str = ".yaml";
const ALLOWED_SUFFIX: &str = "docs/openapi.yaml";

/// Check whether a read of `path` is allowed.
///
/// Any path ending in `.yaml` (case-sensitive) is blocked unless, with
/// backslashes turned into forward slashes, it ends in `docs/openapi.yaml`.
/// The exception is a suffix match, so `a/b/docs/openapi.yaml` passes too.
pub fn check_yaml_read(path: &str) -> Decision {
    if !path.ends_with(YAML_SUFFIX) {
        return Decision::allow();
    }

    let normalized = normalize_separators(path);
    if normalized.ends_with(ALLOWED_SUFFIX) {
        return Decision::allow();
    }

    Decision::Block(BlockInfo::new(YAML_READ_RULE, YAML_BLOCK_REASON).with_details(normalized))
}

/// Replace every `\` with `/`.
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path_allowed() {
        assert!(!check_yaml_read("").is_blocked());
    }

    #[test]
    fn test_non_yaml_allowed() {
        assert!(!check_yaml_read("src/main.rs").is_blocked());
        assert!(!check_yaml_read("Cargo.toml").is_blocked());
        assert!(!check_yaml_read("config.yml").is_blocked());
        assert!(!check_yaml_read("notes.yaml.bak").is_blocked());
    }

    #[test]
    fn test_suffix_is_case_sensitive() {
        assert!(!check_yaml_read("secrets.YAML").is_blocked());
        assert!(!check_yaml_read("secrets.Yaml").is_blocked());
    }

    #[test]
    fn test_openapi_allowed() {
        assert!(!check_yaml_read("docs/openapi.yaml").is_blocked());
        assert!(!check_yaml_read("/home/user/project/docs/openapi.yaml").is_blocked());
    }

    #[test]
    fn test_openapi_backslash_allowed() {
        assert!(!check_yaml_read(r"docs\openapi.yaml").is_blocked());
        assert!(!check_yaml_read(r"C:\work\api\docs\openapi.yaml").is_blocked());
    }

    #[test]
    fn test_nested_openapi_allowed() {
        assert!(!check_yaml_read("config/other/docs/openapi.yaml").is_blocked());
    }

    #[test]
    fn test_suffix_not_segment_match() {
        // "mydocs/openapi.yaml" still ends with "docs/openapi.yaml".
        assert!(!check_yaml_read("mydocs/openapi.yaml").is_blocked());
    }

    #[test]
    fn test_other_yaml_blocked() {
        let decision = check_yaml_read("secrets.yaml");
        let info = decision.block_info().unwrap();
        assert_eq!(info.rule, YAML_READ_RULE);
        assert_eq!(info.reason, YAML_BLOCK_REASON);
    }

    #[test]
    fn test_wrong_docs_file_blocked() {
        assert!(check_yaml_read("docs/config.yaml").is_blocked());
        assert!(check_yaml_read("openapi.yaml").is_blocked());
        assert!(check_yaml_read("docs/openapi.yaml/extra.yaml").is_blocked());
        assert!(check_yaml_read(r"docs\secrets.yaml").is_blocked());
    }

    #[test]
    fn test_block_details_normalized() {
        let decision = check_yaml_read(r"deploy\k8s\values.yaml");
        let info = decision.block_info().unwrap();
        assert_eq!(info.details.as_deref(), Some("deploy/k8s/values.yaml"));
    }

    #[test]
    fn test_normalize_separators() {
        assert_eq!(normalize_separators(r"a\b\c"), "a/b/c");
        assert_eq!(normalize_separators("a/b"), "a/b");
        assert_eq!(normalize_separators(r"a\\b"), "a//b");
    }
}
