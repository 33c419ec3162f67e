//! HTTP client for the hosted inference endpoint

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};

use super::extract::extract_text;
use super::params::ParameterOverrides;
use super::payload::build_payload;
use super::types::{InferenceError, RequestBody};

/// Default base URL for the HuggingFace Inference API.
pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co/models";

/// Trait seam for anything that can answer one user turn.
///
/// The chat runner is generic over this so it can be exercised with a stub
/// that never touches the network.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send one prompt and return the normalized response text.
    async fn generate(
        &self,
        model_id: &str,
        user_text: &str,
        overrides: &ParameterOverrides,
    ) -> Result<String, InferenceError>;
}

/// Client for the hosted inference REST endpoint.
///
/// Holds the bearer token for its lifetime; the token is read-only after
/// construction. Each call is stateless: build payload, one POST, normalize.
#[derive(Clone)]
pub struct InferenceClient {
    http: Client,
    base_url: String,
    api_token: String,
}

impl InferenceClient {
    pub fn new(api_token: String, base_url: String) -> Self {
        Self {
            http: Client::new(),
            base_url,
            api_token,
        }
    }

    fn build_url(&self, model_id: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let model = model_id.trim_start_matches('/');
        format!("{base}/{model}")
    }

    /// Issue one POST to `{base_url}/{model_id}` with a bearer token.
    ///
    /// Transport failures and non-2xx statuses come back as tagged errors;
    /// nothing is raised past this boundary and nothing is retried.
    pub async fn invoke(
        &self,
        model_id: &str,
        body: &RequestBody,
    ) -> Result<Value, InferenceError> {
        let url = self.build_url(model_id);

        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| InferenceError::network(model_id, e))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(InferenceError::status(status.as_u16(), message));
        }

        response
            .json()
            .await
            .map_err(|e| InferenceError::network(model_id, e))
    }
}

#[async_trait]
impl TextGenerator for InferenceClient {
    async fn generate(
        &self,
        model_id: &str,
        user_text: &str,
        overrides: &ParameterOverrides,
    ) -> Result<String, InferenceError> {
        let (formatted_prompt, body) = build_payload(model_id, user_text, overrides);

        info!(
            model = model_id,
            max_new_tokens = body.parameters.max_new_tokens,
            "Sending inference request"
        );

        let raw = self.invoke(model_id, &body).await;
        debug!(model = model_id, ok = raw.is_ok(), "Inference round trip done");

        extract_text(raw, &formatted_prompt)
    }
}
