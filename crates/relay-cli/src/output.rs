//! Output renderers for CLI commands.

use anyhow::anyhow;
use serde_json::{Value, json};

use crate::cli::OutputFormat;
use crate::client::{CliError, CliResult};

/// Render an operation's value for stdout.
///
/// `json` wraps the value as `{"operation": ..., "value": ...}`; `text` prints
/// strings and numbers bare and objects as `key: value` lines.
pub(crate) fn render_value(
    format: OutputFormat,
    operation: &str,
    value: &Value,
) -> CliResult<String> {
    match format {
        OutputFormat::Json => {
            let document = json!({ "operation": operation, "value": value });
            serde_json::to_string_pretty(&document)
                .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err}")))
        }
        OutputFormat::Text => Ok(render_text(value)),
    }
}

fn render_text(value: &Value) -> String {
    match value {
        Value::Object(fields) => fields
            .iter()
            .map(|(key, field)| format!("{key}: {}", render_scalar(field)))
            .collect::<Vec<_>>()
            .join("\n"),
        other => render_scalar(other),
    }
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}
