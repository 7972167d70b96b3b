use std::path::Path;

use serde_json::{Value, json};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ClientError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl ClientError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn invalid_argument(message: &str) -> Self {
        Self::invalid_argument_for_command(message, None)
    }

    pub fn invalid_argument_for_command(message: &str, command: Option<&str>) -> Self {
        let help_hint = match command {
            Some(cmd) => format!("Run `makuta {cmd} --help` for usage."),
            None => "Run `makuta --help` for usage.".to_string(),
        };
        let error = Self::new("invalid_argument", message, vec![help_hint]);
        if let Some(cmd) = command {
            return error.with_data(json!({
                "command_hint": cmd,
            }));
        }
        error
    }

    pub fn snapshot_unreadable(path: &str, detail: &str) -> Self {
        Self::new(
            "snapshot_unreadable",
            &format!("Cannot read snapshot `{path}`: {detail}"),
            vec![
                "Check that the snapshot path exists and is readable.".to_string(),
                "Save a fresh backend response with your platform's export endpoint.".to_string(),
            ],
        )
        .with_data(json!({
            "path": path,
        }))
    }

    pub fn invalid_snapshot_format(detail: &str) -> Self {
        Self::new(
            "invalid_snapshot_format",
            &format!("Snapshot is not a valid backend payload: {detail}"),
            vec![
                "Expected one JSON object with `transactions`, `wallet`, and `stats` arrays."
                    .to_string(),
                "Re-save the snapshot from the backend without editing it.".to_string(),
            ],
        )
    }

    pub fn export_write_failed(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "export_write_failed",
            &format!("Cannot write export file at `{location}`: {detail}"),
            vec![format!(
                "Grant write access to `{location}` or pass a writable directory with --out."
            )],
        )
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
