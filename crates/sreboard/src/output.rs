//! Output formatting: table, JSON, YAML, plain.
//!
//! Table mode is for people: key/value tables, and question/answer text for
//! assistant responses. The structured formats serialize the backend payload
//! untouched.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use serde_json::Value;
use tabled::{Table, Tabled, settings::Style};

use sreboard_core::ModalView;
use sreboard_core::modal::render_view;

use crate::cli::{ColorMode, OutputFormat};
use crate::error::CliError;

// ── Color helpers ────────────────────────────────────────────────────

/// Determine whether color output should be enabled.
pub fn should_color(mode: &ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

/// Green for healthy, yellow for degraded, red for anything else.
pub fn paint_status(status: &str, color: bool) -> String {
    if !color {
        return status.to_owned();
    }
    match status {
        "healthy" | "ok" | "active" => status.green().to_string(),
        "degraded" | "warning" => status.yellow().to_string(),
        _ => status.red().to_string(),
    }
}

fn heading(title: &str, color: bool) -> String {
    if color {
        title.bold().cyan().to_string()
    } else {
        title.to_owned()
    }
}

// ── Rows ─────────────────────────────────────────────────────────────

#[derive(Tabled)]
pub struct FieldRow {
    #[tabled(rename = "Field")]
    pub field: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl FieldRow {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a typed item: table mode uses the caller's rows, structured
/// formats serialize `data`, plain emits `field: value` lines.
pub fn render_single<T: serde::Serialize>(
    format: &OutputFormat,
    data: &T,
    rows: impl FnOnce(&T) -> Vec<FieldRow>,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Table => Ok(render_table(&rows(data))),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(data)?),
        OutputFormat::JsonCompact => Ok(serde_json::to_string(data)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(data)?),
        OutputFormat::Plain => Ok(rows(data)
            .iter()
            .map(|r| format!("{}: {}", r.field, r.value))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

/// Render a backend payload under `title`.
///
/// In table mode a payload with an `answer` prints as question/answer
/// text, flat objects print as a field table, anything else as indented
/// JSON.
pub fn render_payload(
    format: &OutputFormat,
    title: &str,
    payload: &Value,
    color: bool,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Table => Ok(render_payload_table(title, payload, color)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(payload)?),
        OutputFormat::JsonCompact => Ok(serde_json::to_string(payload)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(payload)?),
        OutputFormat::Plain => Ok(match payload {
            Value::Object(map) => map
                .iter()
                .map(|(k, v)| format!("{k}: {}", scalar_text(v)))
                .collect::<Vec<_>>()
                .join("\n"),
            other => scalar_text(other),
        }),
    }
}

fn render_payload_table(title: &str, payload: &Value, color: bool) -> String {
    let body = match render_view(payload) {
        ModalView::Answer { question, answer } => {
            let label = if color { "Question".bold().to_string() } else { "Question".into() };
            format!("{label}: {question}\n\n{answer}")
        }
        ModalView::Raw(pretty) => match payload {
            Value::Object(map) if map.values().all(is_flat) => {
                let rows: Vec<FieldRow> = map
                    .iter()
                    .map(|(k, v)| FieldRow::new(k.clone(), scalar_text(v)))
                    .collect();
                render_table(&rows)
            }
            _ => pretty,
        },
    };
    format!("{}\n{body}", heading(title, color))
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

// ── Format-specific helpers ──────────────────────────────────────────

pub fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

fn is_flat(value: &Value) -> bool {
    match value {
        Value::Array(items) => items.iter().all(|v| !v.is_object() && !v.is_array()),
        Value::Object(_) => false,
        _ => true,
    }
}

/// Strings unquoted, everything else as compact JSON.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "-".into(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn answer_payload_prints_question_and_answer() {
        let out = render_payload(
            &OutputFormat::Table,
            "AI Query Response",
            &json!({ "question": "X", "answer": "Y" }),
            false,
        )
        .unwrap();
        assert_eq!(out, "AI Query Response\nQuestion: X\n\nY");
    }

    #[test]
    fn flat_object_prints_as_table() {
        let out = render_payload(
            &OutputFormat::Table,
            "Active Users",
            &json!({ "count": 2, "users": ["a", "b"] }),
            false,
        )
        .unwrap();
        assert!(out.contains("users"));
        assert!(out.contains(r#"["a","b"]"#));
        assert!(out.contains('╭'));
    }

    #[test]
    fn nested_object_falls_back_to_json() {
        let payload = json!({ "stats": { "errors": 4 } });
        let out = render_payload(&OutputFormat::Table, "Log Diagnostics", &payload, false).unwrap();
        assert!(out.ends_with(&serde_json::to_string_pretty(&payload).unwrap()));
    }

    #[test]
    fn plain_is_key_value_lines() {
        let out = render_payload(
            &OutputFormat::Plain,
            "ignored",
            &json!({ "region": "region1", "ok": true }),
            false,
        )
        .unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines.contains(&"region: region1"));
        assert!(lines.contains(&"ok: true"));
    }
}
