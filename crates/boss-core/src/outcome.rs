use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use boss_domain::ManifestError;

/// Result envelope returned by every command entry point.
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

    pub fn user_error(message: impl Into<String>, details: Value) -> Self {
        Self {
            status: CommandStatus::UserError,
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
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandStatus {
    Ok,
    UserError,
    Failure,
}

/// Convert a propagated manifest error into a failure envelope for the CLI
/// boundary.
#[must_use]
pub fn manifest_error_outcome(err: &ManifestError) -> ExecutionOutcome {
    let kind = match err {
        ManifestError::Io(_) => "io",
        ManifestError::Deserialize(_) => "deserialize",
        ManifestError::Serialize(_) => "serialize",
    };
    ExecutionOutcome::failure(err.to_string(), json!({ "kind": kind }))
}
