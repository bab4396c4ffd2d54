// ── Modal presenter ──
//
// Holds the last dispatched result. Rendering picks one of two views: a
// question/answer pair when the payload carries an `answer`, otherwise the
// whole payload as indented JSON.

use serde_json::{Value, json};

/// Title + payload currently on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Modal {
    title: String,
    payload: Value,
}

/// How a modal payload should be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalView {
    Answer { question: String, answer: String },
    Raw(String),
}

impl Modal {
    pub fn new(title: impl Into<String>, payload: Value) -> Self {
        Self {
            title: title.into(),
            payload,
        }
    }

    /// The `{error: message}` placeholder shown on failures.
    pub fn error(title: impl Into<String>, message: &str) -> Self {
        Self::new(title, json!({ "error": message }))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// The placeholder message, if this is an error modal.
    pub fn error_message(&self) -> Option<&str> {
        match &self.payload {
            Value::Object(map) if map.len() == 1 => map.get("error").and_then(Value::as_str),
            _ => None,
        }
    }

    pub fn view(&self) -> ModalView {
        render_view(&self.payload)
    }
}

/// Q/A when `answer` is truthy, raw JSON otherwise.
pub fn render_view(payload: &Value) -> ModalView {
    match payload.get("answer") {
        Some(answer) if is_present(answer) => ModalView::Answer {
            question: payload
                .get("question")
                .map(text_of)
                .unwrap_or_default(),
            answer: text_of(answer),
        },
        _ => ModalView::Raw(
            serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string()),
        ),
    }
}

/// Truthiness: null, false, zero, and "" are absent.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() > 0.0),
        _ => true,
    }
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn answer_payload_renders_as_qa() {
        let modal = Modal::new("AI Query Response", json!({ "question": "X", "answer": "Y" }));
        assert_eq!(
            modal.view(),
            ModalView::Answer {
                question: "X".into(),
                answer: "Y".into()
            }
        );
    }

    #[test]
    fn plain_payload_renders_as_indented_json() {
        let modal = Modal::new("Active Users", json!({ "users": ["a", "b"] }));
        assert_eq!(
            modal.view(),
            ModalView::Raw("{\n  \"users\": [\n    \"a\",\n    \"b\"\n  ]\n}".into())
        );
    }

    #[test]
    fn empty_answer_falls_back_to_raw() {
        let modal = Modal::new("AI Query Response", json!({ "question": "X", "answer": "" }));
        assert!(matches!(modal.view(), ModalView::Raw(_)));
    }

    #[test]
    fn zero_answer_falls_back_to_raw() {
        for answer in [json!(0), json!(0.0), json!(-0.0)] {
            let modal = Modal::new("AI Query Response", json!({ "question": "X", "answer": answer }));
            assert!(matches!(modal.view(), ModalView::Raw(_)), "{answer}");
        }
    }

    #[test]
    fn nonzero_number_answer_renders_as_qa() {
        let modal = Modal::new("AI Query Response", json!({ "question": "How many?", "answer": 42 }));
        assert_eq!(
            modal.view(),
            ModalView::Answer {
                question: "How many?".into(),
                answer: "42".into()
            }
        );
    }

    #[test]
    fn error_placeholder_shape() {
        let modal = Modal::error("Active Users", "Failed to fetch users");
        assert_eq!(modal.payload(), &json!({ "error": "Failed to fetch users" }));
        assert_eq!(modal.error_message(), Some("Failed to fetch users"));
        assert_eq!(Modal::new("x", json!({ "error": "e", "more": 1 })).error_message(), None);
    }
}
