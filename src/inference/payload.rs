//! Payload assembly - pure function of model id, user text, and overrides

use super::family::family_for;
use super::params::ParameterOverrides;
use super::types::RequestBody;

/// Build the formatted prompt and request body for one user turn.
///
/// Selects the family defaults for `model_id`, merges `overrides` on top,
/// and wraps `user_text` in the family's prompt template. Pure function:
/// identical inputs always yield identical output.
pub fn build_payload(
    model_id: &str,
    user_text: &str,
    overrides: &ParameterOverrides,
) -> (String, RequestBody) {
    let family = family_for(model_id);
    let parameters = family.defaults().merge(overrides);
    let formatted_prompt = family.template.format(user_text);

    let body = RequestBody {
        inputs: formatted_prompt.clone(),
        parameters,
    };
    (formatted_prompt, body)
}
