//! Inference types - request body and error taxonomy

use super::params::GenerationParameters;
use serde::Serialize;
use thiserror::Error;

/// JSON body of one inference request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestBody {
    pub inputs: String,
    pub parameters: GenerationParameters,
}

/// Errors from the inference adapter.
///
/// Every variant is recovered at the chat loop boundary and rendered with
/// [`InferenceError::user_message`]; none of them abort the session.
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("network error calling model '{model}': {source}")]
    Network {
        model: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("inference endpoint returned status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("inference endpoint reported an error: {0}")]
    Upstream(String),
    #[error("model is still loading")]
    Warming,
    #[error("response did not match any recognized shape")]
    UnrecognizedShape,
    #[error("no API token configured")]
    MissingToken,
}

impl InferenceError {
    pub fn network(model: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            model: model.into(),
            source,
        }
    }

    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Display string shown in the chat history.
    pub fn user_message(&self) -> String {
        match self {
            InferenceError::Network { model, source } => {
                if source.is_connect() {
                    format!("Error: could not connect to the inference endpoint for '{model}'.")
                } else if source.is_timeout() {
                    format!("Error: request to '{model}' timed out.")
                } else {
                    format!("Error: {source}")
                }
            }
            InferenceError::Status { status, message } => {
                format!("Error: the endpoint returned {status}: {message}")
            }
            InferenceError::Upstream(message) => format!("Error: {message}"),
            InferenceError::Warming => {
                "The model is still warming up. Please retry in a few seconds.".to_string()
            }
            InferenceError::UnrecognizedShape => {
                "Sorry, I couldn't process the response properly.".to_string()
            }
            InferenceError::MissingToken => {
                "Error: no API token configured. Set HF_API_TOKEN or pass --token.".to_string()
            }
        }
    }
}
