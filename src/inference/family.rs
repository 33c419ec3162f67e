//! Model family rules: matcher, default parameters, prompt template
//!
//! A family groups model identifiers that share prompt-formatting and
//! default-parameter conventions. Rules are matched by case-insensitive
//! substring against the model identifier; the first matching rule wins,
//! so more specific matchers come first in the table. A matching family
//! fully replaces the base defaults, it never merges with them.

use super::params::GenerationParameters;

/// How the user text is wrapped before it becomes the `inputs` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptTemplate {
    /// User text is passed through unmodified.
    Passthrough,
    /// Generic instruct/chat template: `Human: {text}\nAssistant:`
    HumanAssistant,
    /// Qwen ChatML turn with explicit start/end markers.
    QwenChatMl,
}

impl PromptTemplate {
    /// Render the user text through this template.
    pub fn format(&self, user_text: &str) -> String {
        match self {
            PromptTemplate::Passthrough => user_text.to_string(),
            PromptTemplate::HumanAssistant => format!("Human: {user_text}\nAssistant:"),
            PromptTemplate::QwenChatMl => {
                format!("<|im_start|>user\n{user_text}<|im_end|>\n<|im_start|>assistant\n")
            }
        }
    }
}

/// One row of the family rule table.
#[derive(Debug, Clone)]
pub struct FamilyRule {
    pub name: &'static str,
    matchers: &'static [&'static str],
    pub template: PromptTemplate,
    defaults: fn() -> GenerationParameters,
}

impl FamilyRule {
    fn matches(&self, model_id: &str) -> bool {
        let id = model_id.to_lowercase();
        self.matchers.iter().any(|m| id.contains(m))
    }

    pub fn defaults(&self) -> GenerationParameters {
        (self.defaults)()
    }
}

fn qwen_defaults() -> GenerationParameters {
    GenerationParameters {
        max_new_tokens: 200,
        temperature: 0.8,
        top_p: 0.95,
        do_sample: true,
        return_full_text: false,
        repetition_penalty: Some(1.1),
    }
}

/// Qwen identifiers also contain "chat"/"instruct", so the Qwen rule must
/// stay ahead of the generic instruct rule.
const FAMILY_RULES: &[FamilyRule] = &[
    FamilyRule {
        name: "qwen",
        matchers: &["qwen"],
        template: PromptTemplate::QwenChatMl,
        defaults: qwen_defaults,
    },
    FamilyRule {
        name: "instruct",
        matchers: &["instruct", "chat"],
        template: PromptTemplate::HumanAssistant,
        defaults: GenerationParameters::default,
    },
];

/// Fallback rule for model ids that match no family.
const BASE_RULE: FamilyRule = FamilyRule {
    name: "base",
    matchers: &[],
    template: PromptTemplate::Passthrough,
    defaults: GenerationParameters::default,
};

/// Select the family rule for a model identifier.
pub fn family_for(model_id: &str) -> &'static FamilyRule {
    FAMILY_RULES
        .iter()
        .find(|rule| rule.matches(model_id))
        .unwrap_or(&BASE_RULE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qwen_wins_over_generic_instruct() {
        let rule = family_for("Qwen/Qwen2-0.5B-Instruct");
        assert_eq!(rule.name, "qwen");
        assert_eq!(rule.template, PromptTemplate::QwenChatMl);
    }

    #[test]
    fn matcher_is_case_insensitive() {
        assert_eq!(family_for("google/FLAN-T5-CHAT").name, "instruct");
        assert_eq!(family_for("QWEN/qwen-7b-chat").name, "qwen");
    }

    #[test]
    fn unknown_model_gets_base_rule() {
        let rule = family_for("gpt2-medium");
        assert_eq!(rule.name, "base");
        assert_eq!(rule.template, PromptTemplate::Passthrough);
        assert_eq!(rule.defaults(), GenerationParameters::default());
    }
}
