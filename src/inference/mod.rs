//! Inference client adapter
//!
//! Turns `(model id, user text, parameter overrides)` into display text or
//! an error string: build the family-specific payload, issue one HTTPS POST,
//! normalize the heterogeneous JSON reply. Stateless; one round trip per
//! user turn, no retries, no memory of prior turns.

mod client;
mod extract;
mod family;
mod params;
mod payload;
mod types;

pub use client::{DEFAULT_BASE_URL, InferenceClient, TextGenerator};
pub use extract::extract_text;
pub use family::{FamilyRule, PromptTemplate, family_for};
pub use params::{GenerationParameters, ParameterOverrides};
pub use payload::build_payload;
pub use types::{InferenceError, RequestBody};
