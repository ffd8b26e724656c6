//! Allow/block outcome of the read rule.

use serde::Serialize;

/// The result of checking a read request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Let the read through.
    Allow,
    /// Refuse the read.
    Block(BlockInfo),
}

/// Why a read was refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockInfo {
    /// Identifier of the rule that fired (e.g. `yaml.read`).
    pub rule: String,
    /// Message shown to the agent.
    pub reason: String,
    /// Extra context for the audit log; never printed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl BlockInfo {
    pub fn new(rule: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            reason: reason.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl Decision {
    pub fn allow() -> Self {
        Decision::Allow
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, Decision::Block(_))
    }

    pub fn block_info(&self) -> Option<&BlockInfo> {
        match self {
            Decision::Block(info) => Some(info),
            Decision::Allow => None,
        }
    }

    /// Process exit status Claude Code expects for this decision.
    pub fn exit_code(&self) -> u8 {
        match self {
            Decision::Allow => 0,
            Decision::Block(_) => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allow() {
        let d = Decision::allow();
        assert!(!d.is_blocked());
        assert!(d.block_info().is_none());
        assert_eq!(d.exit_code(), 0);
    }

    #[test]
    fn test_block() {
        let d = Decision::Block(BlockInfo::new("yaml.read", "no yaml"));
        assert!(d.is_blocked());
        assert_eq!(d.exit_code(), 2);
        let info = d.block_info().unwrap();
        assert_eq!(info.rule, "yaml.read");
        assert_eq!(info.reason, "no yaml");
    }

    #[test]
    fn test_block_details_serialization() {
        let plain = serde_json::to_string(&BlockInfo::new("r", "x")).unwrap();
        assert!(!plain.contains("details"));

        let detailed =
            serde_json::to_string(&BlockInfo::new("r", "x").with_details("secrets.yaml")).unwrap();
        assert!(detailed.contains(r#""details":"secrets.yaml""#));
    }
}
