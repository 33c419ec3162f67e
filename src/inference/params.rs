//! Generation parameters and override merging

use serde::{Deserialize, Serialize};

/// Fully resolved generation parameters sent with every request.
///
/// `repetition_penalty` is only meaningful for some model families and is
/// omitted from the wire payload when unset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationParameters {
    pub max_new_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub do_sample: bool,
    pub return_full_text: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repetition_penalty: Option<f32>,
}

impl Default for GenerationParameters {
    /// Base defaults used when no family rule matches.
    fn default() -> Self {
        Self {
            max_new_tokens: 150,
            temperature: 0.7,
            top_p: 0.9,
            do_sample: true,
            return_full_text: false,
            repetition_penalty: None,
        }
    }
}

impl GenerationParameters {
    /// Apply caller-supplied overrides on top of these defaults.
    ///
    /// Any field present in `overrides` replaces the default value for that
    /// field; absent fields keep the default.
    pub fn merge(&self, overrides: &ParameterOverrides) -> Self {
        Self {
            max_new_tokens: overrides.max_new_tokens.unwrap_or(self.max_new_tokens),
            temperature: overrides.temperature.unwrap_or(self.temperature),
            top_p: overrides.top_p.unwrap_or(self.top_p),
            do_sample: overrides.do_sample.unwrap_or(self.do_sample),
            return_full_text: overrides.return_full_text.unwrap_or(self.return_full_text),
            repetition_penalty: overrides.repetition_penalty.or(self.repetition_penalty),
        }
    }
}

/// Caller-supplied parameter overrides.
///
/// Every field is optional; see [`GenerationParameters::merge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_new_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub do_sample: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_full_text: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repetition_penalty: Option<f32>,
}

impl ParameterOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Set a single override by field name, parsing the value from text.
    ///
    /// Used by the `/set` chat command. Returns an error message suitable
    /// for display when the name or value is not recognized.
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<(), String> {
        match name {
            "max_new_tokens" => {
                self.max_new_tokens =
                    Some(value.parse().map_err(|_| {
                        format!("max_new_tokens expects a positive integer, got '{value}'")
                    })?);
            }
            "temperature" => {
                self.temperature = Some(
                    value
                        .parse()
                        .map_err(|_| format!("temperature expects a number, got '{value}'"))?,
                );
            }
            "top_p" => {
                self.top_p = Some(
                    value
                        .parse()
                        .map_err(|_| format!("top_p expects a number, got '{value}'"))?,
                );
            }
            "do_sample" => {
                self.do_sample = Some(
                    value
                        .parse()
                        .map_err(|_| format!("do_sample expects true or false, got '{value}'"))?,
                );
            }
            "return_full_text" => {
                self.return_full_text = Some(value.parse().map_err(|_| {
                    format!("return_full_text expects true or false, got '{value}'")
                })?);
            }
            "repetition_penalty" => {
                self.repetition_penalty = Some(value.parse().map_err(|_| {
                    format!("repetition_penalty expects a number, got '{value}'")
                })?);
            }
            other => return Err(format!("unknown parameter '{other}'")),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_defaults_for_absent_fields() {
        let defaults = GenerationParameters::default();
        let merged = defaults.merge(&ParameterOverrides {
            max_new_tokens: Some(500),
            ..Default::default()
        });
        assert_eq!(merged.max_new_tokens, 500);
        assert_eq!(merged.temperature, defaults.temperature);
        assert_eq!(merged.top_p, defaults.top_p);
    }

    #[test]
    fn set_field_parses_values() {
        let mut overrides = ParameterOverrides::default();
        overrides.set_field("temperature", "1.5").unwrap();
        overrides.set_field("max_new_tokens", "300").unwrap();
        overrides.set_field("do_sample", "false").unwrap();
        assert_eq!(overrides.temperature, Some(1.5));
        assert_eq!(overrides.max_new_tokens, Some(300));
        assert_eq!(overrides.do_sample, Some(false));
    }

    #[test]
    fn set_field_rejects_bad_input() {
        let mut overrides = ParameterOverrides::default();
        assert!(overrides.set_field("temperature", "warm").is_err());
        assert!(overrides.set_field("no_such_knob", "1").is_err());
        assert!(overrides.is_empty());
    }
}
