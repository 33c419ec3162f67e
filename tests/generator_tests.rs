//! Trait seam tests - the generator dependency exercised with a stub that
//! never touches the network

use async_trait::async_trait;
use hfchat::inference::{InferenceError, ParameterOverrides, TextGenerator};
use std::sync::{Arc, Mutex};

/// Stub generator: records each call and answers with a canned reply.
struct CannedGenerator {
    warming: bool,
    seen: Mutex<Vec<(String, String)>>,
}

impl CannedGenerator {
    fn replying() -> Self {
        Self {
            warming: false,
            seen: Mutex::new(Vec::new()),
        }
    }

    fn warming() -> Self {
        Self {
            warming: true,
            seen: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl TextGenerator for CannedGenerator {
    async fn generate(
        &self,
        model_id: &str,
        user_text: &str,
        _overrides: &ParameterOverrides,
    ) -> Result<String, InferenceError> {
        self.seen
            .lock()
            .unwrap()
            .push((model_id.to_string(), user_text.to_string()));
        if self.warming {
            Err(InferenceError::Warming)
        } else {
            Ok(format!("echo: {user_text}"))
        }
    }
}

#[tokio::test]
async fn stub_generator_dispatches_through_the_trait_object() {
    let stub = Arc::new(CannedGenerator::replying());
    let generator: Arc<dyn TextGenerator> = stub.clone();

    let text = generator
        .generate("gpt2", "hi", &ParameterOverrides::default())
        .await
        .unwrap();
    assert_eq!(text, "echo: hi");

    let seen = stub.seen.lock().unwrap();
    assert_eq!(seen.as_slice(), &[("gpt2".to_string(), "hi".to_string())]);
}

#[tokio::test]
async fn generator_failure_carries_a_display_message() {
    let stub = CannedGenerator::warming();
    let err = stub
        .generate("gpt2", "hi", &ParameterOverrides::default())
        .await
        .unwrap_err();
    assert!(matches!(err, InferenceError::Warming));
    assert!(err.user_message().contains("warming up"));
}

// Mirrors the chat loop: one spawned task per turn, outcome delivered over
// a channel.
#[tokio::test]
async fn spawned_turn_reports_back_over_a_channel() {
    let generator: Arc<dyn TextGenerator> = Arc::new(CannedGenerator::replying());
    let (tx, mut rx) = tokio::sync::mpsc::channel(1);

    tokio::spawn(async move {
        let out = generator
            .generate("gpt2", "ping", &ParameterOverrides::default())
            .await;
        let _ = tx.send(out).await;
    });

    let out = rx.recv().await.expect("turn outcome").expect("reply text");
    assert_eq!(out, "echo: ping");
}
