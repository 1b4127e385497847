use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AskError, AskResult};

/// Path of the backend endpoint that answers questions
pub const GET_ANSWER_PATH: &str = "/get_answer/";

/// What the output element shows when the response carries no answer
pub const ABSENT_ANSWER: &str = "undefined";

/// A validated question, ready to be sent to the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRequest {
    pub question: String,
}

impl AnswerRequest {
    /// Rejects only the empty string; whitespace is a valid question
    pub fn new(question: impl Into<String>) -> AskResult<Self> {
        let question = question.into();
        if question.is_empty() {
            return Err(AskError::EmptyQuestion);
        }
        Ok(Self { question })
    }

    /// Request path with the question percent-encoded into the query string
    pub fn path(&self) -> String {
        build_request_path(&self.question)
    }
}

/// Percent-encodes the question into the `get_answer` query string
pub fn build_request_path(question: &str) -> String {
    format!(
        "{}?question={}",
        GET_ANSWER_PATH,
        urlencoding::encode(question)
    )
}

/// Response body returned by the backend
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AnswerResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

impl AnswerResponse {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: Some(question.into()),
            answer: Some(answer.into()),
        }
    }
}

/// Renders the `answer` field of a parsed response body as display text.
///
/// Values are shown the way a browser shows them when assigned to an
/// element's text: strings verbatim, `null` as nothing, arrays as their
/// items joined with commas, objects as `[object Object]`. A missing
/// field, or a body that is not an object, renders as [`ABSENT_ANSWER`].
/// A `null` body has no fields to read and is an error.
pub fn render_answer(body: &Value) -> AskResult<String> {
    match body {
        Value::Null => Err(AskError::NullBody),
        Value::Object(fields) => Ok(match fields.get("answer") {
            Some(Value::Null) => String::new(),
            Some(answer) => display_text(answer),
            None => ABSENT_ANSWER.to_string(),
        }),
        _ => Ok(ABSENT_ANSWER.to_string()),
    }
}

fn display_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number_text(number),
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                // null items join as empty
                Value::Null => String::new(),
                other => display_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn number_text(number: &serde_json::Number) -> String {
    if number.is_i64() || number.is_u64() {
        return number.to_string();
    }
    let Some(float) = number.as_f64() else {
        return number.to_string();
    };

    let magnitude = float.abs();
    if float == 0.0 {
        "0".to_string()
    } else if magnitude >= 1e21 {
        format!("{float:e}").replace('e', "e+")
    } else if magnitude < 1e-6 {
        format!("{float:e}")
    } else {
        // Shortest round-trip form; integral floats drop the fraction
        float.to_string()
    }
}
