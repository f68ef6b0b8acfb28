use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use dpx_domain::missing_project_guidance;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionOutcome {
    pub status: CommandStatus,
    pub message: String,
    #[serde(default)]
    pub details: Value,
}

impl ExecutionOutcome {
    pub fn success(message: impl Into<String>, details: Value) -> Self {
        Self {
            status: CommandStatus::Ok,
            message: message.into(),
            details,
        }
    }

    pub fn failure(message: impl Into<String>, details: Value) -> Self {
        Self {
            status: CommandStatus::Failure,
            message: message.into(),
            details,
        }
    }

    pub fn user_error(message: impl Into<String>, details: Value) -> Self {
        Self {
            status: CommandStatus::UserError,
            message: message.into(),
            details,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandStatus {
    Ok,
    UserError,
    Failure,
}

pub fn missing_project_outcome() -> ExecutionOutcome {
    let guidance = missing_project_guidance();
    ExecutionOutcome::user_error(
        guidance.message,
        json!({
            "reason": "missing_setup_script",
            "hint": guidance.hint,
        }),
    )
}

/// Process exit code for an outcome. Single-step operations surface the
/// child's exit code exactly; best-effort operations surface the first
/// recorded failure.
#[must_use]
pub fn process_exit_code(outcome: &ExecutionOutcome) -> i32 {
    match outcome.status {
        CommandStatus::Ok => 0,
        CommandStatus::UserError => 1,
        CommandStatus::Failure => outcome
            .details
            .get("exit_code")
            .and_then(Value::as_i64)
            .and_then(|code| i32::try_from(code).ok())
            .filter(|code| *code != 0)
            .unwrap_or(2),
    }
}

#[must_use]
pub fn to_json_response(operation: &str, outcome: &ExecutionOutcome) -> Value {
    let status = match outcome.status {
        CommandStatus::Ok => "ok",
        CommandStatus::UserError => "user-error",
        CommandStatus::Failure => "error",
    };
    let details = match &outcome.details {
        Value::Object(_) => outcome.details.clone(),
        Value::Null => json!({}),
        other => json!({ "value": other }),
    };
    json!({
        "status": status,
        "message": format_status_message(operation, &outcome.message),
        "details": details,
    })
}

#[must_use]
pub fn format_status_message(operation: &str, message: &str) -> String {
    let prefix = format!("dpx {operation}");
    if message.is_empty() {
        prefix
    } else if message.starts_with(&prefix) {
        message.to_string()
    } else {
        format!("{prefix}: {message}")
    }
}
