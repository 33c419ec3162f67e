//! Model catalog - the categorized list of hosted models offered by the UI

use serde::{Deserialize, Serialize};

/// One category of related models shown together in the picker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModelCategory {
    pub category: String,
    pub models: Vec<String>,
}

/// The full categorized model catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelCatalog {
    pub categories: Vec<ModelCategory>,
}

impl Default for ModelCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ModelCatalog {
    /// Built-in catalog used when the config file does not override it.
    pub fn builtin() -> Self {
        Self {
            categories: vec![
                ModelCategory {
                    category: "Qwen Models".into(),
                    models: vec![
                        "Qwen/Qwen2-0.5B-Instruct".into(),
                        "Qwen/Qwen2-1.5B-Instruct".into(),
                        "Qwen/Qwen1.5-0.5B-Chat".into(),
                        "Qwen/Qwen1.5-1.8B-Chat".into(),
                        "Qwen/Qwen1.5-4B-Chat".into(),
                        "Qwen/Qwen1.5-7B-Chat".into(),
                        "Qwen/Qwen-1_8B-Chat".into(),
                        "Qwen/Qwen-7B-Chat".into(),
                    ],
                },
                ModelCategory {
                    category: "Conversational Models".into(),
                    models: vec![
                        "microsoft/DialoGPT-medium".into(),
                        "microsoft/DialoGPT-large".into(),
                        "facebook/blenderbot-400M-distill".into(),
                        "facebook/blenderbot-1B-distill".into(),
                    ],
                },
                ModelCategory {
                    category: "Instruction Models".into(),
                    models: vec![
                        "google/flan-t5-base".into(),
                        "google/flan-t5-large".into(),
                        "google/flan-t5-xl".into(),
                    ],
                },
                ModelCategory {
                    category: "Text Generation".into(),
                    models: vec![
                        "gpt2".into(),
                        "gpt2-medium".into(),
                        "distilgpt2".into(),
                        "EleutherAI/gpt-neo-125M".into(),
                        "EleutherAI/gpt-neo-1.3B".into(),
                    ],
                },
                ModelCategory {
                    category: "Code Models".into(),
                    models: vec![
                        "microsoft/CodeGPT-small-py".into(),
                        "Salesforce/codegen-350M-mono".into(),
                    ],
                },
            ],
        }
    }

    /// First model of the first category; the initial selection.
    pub fn first_model(&self) -> Option<&str> {
        self.categories
            .first()
            .and_then(|c| c.models.first())
            .map(String::as_str)
    }

    pub fn contains(&self, model: &str) -> bool {
        self.categories
            .iter()
            .any(|c| c.models.iter().any(|m| m == model))
    }

    /// Category a model belongs to, if any.
    pub fn category_of(&self, model: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.models.iter().any(|m| m == model))
            .map(|c| c.category.as_str())
    }

    /// Ensure a model appears in the catalog, appending a category for
    /// ad-hoc entries when needed.
    pub fn ensure_model(&mut self, model: &str) {
        if self.contains(model) {
            return;
        }
        if let Some(other) = self
            .categories
            .iter_mut()
            .find(|c| c.category == "Other Models")
        {
            other.models.push(model.to_string());
        } else {
            self.categories.push(ModelCategory {
                category: "Other Models".into(),
                models: vec![model.to_string()],
            });
        }
    }
}
