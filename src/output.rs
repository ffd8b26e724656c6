//! Response formatting for hook output.

use crate::decision::Decision;

/// Format a decision as the stderr diagnostic.
///
/// Claude Code feeds stderr back to the agent on exit status 2, so a block
/// is rendered as its bare reason with no prefix or decoration.
pub fn format_response(decision: &Decision) -> Option<String> {
    match decision {
        Decision::Allow => None,
        Decision::Block(info) => Some(info.reason.clone()),
    }
}
