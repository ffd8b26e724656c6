//! OpenAPI Read Guard - Claude Code read hook entry point.

use openapi_read_guard::audit::AuditLogger;
use openapi_read_guard::config::Config;
use openapi_read_guard::input::HookInput;
use openapi_read_guard::rules::check_yaml_read;
use openapi_read_guard::{EXIT_INVALID_INPUT, format_response};

use std::io;
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Malformed input fails loud, distinct from allow (0) and block (2)
    let hook_input = match HookInput::from_reader(io::stdin().lock()) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("invalid hook input: {}", e);
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
    };

    let decision = check_yaml_read(hook_input.candidate_path());

    // Audit logging (if enabled); config problems never affect the decision
    let cwd = hook_input.cwd().map(Path::new);
    if let Ok(config) = Config::load(cwd)
        && let Some(path) = config.audit_path()
        && let Ok(mut logger) = AuditLogger::open(path)
    {
        let _ = logger.log_decision(&hook_input, &decision);
    }

    if let Some(msg) = format_response(&decision) {
        eprintln!("{}", msg);
    }
    ExitCode::from(decision.exit_code())
}
