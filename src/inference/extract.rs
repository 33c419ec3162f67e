//! Response normalization - map heterogeneous reply shapes to display text
//!
//! The inference API answers with an array of generations, a single
//! generation object, or an error object. The shapes are decoded through an
//! untagged enum with explicit fallbacks instead of chained type checks, so
//! every input maps to some outcome and nothing here can panic.

use super::types::InferenceError;
use serde::Deserialize;
use serde_json::Value;

/// One decoded reply shape. Variant order matters: serde tries them
/// top to bottom, and a bare generation object must not swallow error
/// objects.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawReply {
    Batch(Vec<Generation>),
    Failure { error: String },
    Single(Generation),
    Other(Value),
}

#[derive(Debug, Deserialize)]
struct Generation {
    generated_text: Option<String>,
    text: Option<String>,
}

impl Generation {
    fn into_candidate(self) -> Option<String> {
        self.generated_text.or(self.text)
    }
}

/// Normalize a raw inference result into display text.
///
/// Transport errors are classified here: a description mentioning "loading"
/// becomes the warming outcome so the shell can show a retry hint instead of
/// a raw error. Successful bodies are decoded per shape; the formatted
/// prompt is stripped when the backend echoes it, and the result is trimmed.
pub fn extract_text(
    raw: Result<Value, InferenceError>,
    formatted_prompt: &str,
) -> Result<String, InferenceError> {
    let value = match raw {
        Ok(value) => value,
        Err(err) => return Err(classify_transport(err)),
    };

    let reply: RawReply = match serde_json::from_value(value) {
        Ok(reply) => reply,
        Err(_) => return Err(InferenceError::UnrecognizedShape),
    };

    let candidate = match reply {
        RawReply::Batch(generations) => generations
            .into_iter()
            .next()
            .and_then(Generation::into_candidate)
            .ok_or(InferenceError::UnrecognizedShape)?,
        RawReply::Failure { error } => {
            return Err(classify_upstream(error));
        }
        RawReply::Single(generation) => generation
            .into_candidate()
            .ok_or(InferenceError::UnrecognizedShape)?,
        RawReply::Other(other) => render_scalar(&other)?,
    };

    Ok(strip_prompt_echo(&candidate, formatted_prompt))
}

/// Map a transport error that mentions model loading to the warming outcome.
fn classify_transport(err: InferenceError) -> InferenceError {
    let description = match &err {
        InferenceError::Status { message, .. } => message.clone(),
        InferenceError::Network { source, .. } => source.to_string(),
        _ => return err,
    };
    if mentions_loading(&description) {
        InferenceError::Warming
    } else {
        err
    }
}

fn classify_upstream(message: String) -> InferenceError {
    if mentions_loading(&message) {
        InferenceError::Warming
    } else {
        InferenceError::Upstream(message)
    }
}

fn mentions_loading(description: &str) -> bool {
    description.to_lowercase().contains("loading")
}

/// A bare scalar body is rendered as its string form; objects without any
/// recognized key and empty arrays are not renderable.
fn render_scalar(value: &Value) -> Result<String, InferenceError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(InferenceError::UnrecognizedShape),
    }
}

/// Remove the first occurrence of the formatted prompt from the text.
///
/// Backends echo the prompt ahead of the completion when full-text return is
/// requested. The strip is a literal match: if the echo differs in
/// whitespace or casing it silently does nothing and the raw text is kept.
fn strip_prompt_echo(text: &str, formatted_prompt: &str) -> String {
    if formatted_prompt.is_empty() {
        return text.trim().to_string();
    }
    match text.find(formatted_prompt) {
        Some(pos) => {
            let mut stripped = String::with_capacity(text.len() - formatted_prompt.len());
            stripped.push_str(&text[..pos]);
            stripped.push_str(&text[pos + formatted_prompt.len()..]);
            stripped.trim().to_string()
        }
        None => text.trim().to_string(),
    }
}
