//! Response normalization tests - shape decoding, prompt stripping,
//! error classification

use hfchat::inference::{InferenceError, extract_text};
use serde_json::json;

#[test]
fn array_with_generated_text_strips_prompt_echo() {
    let raw = json!([{"generated_text": "Hello: Hi there"}]);
    let text = extract_text(Ok(raw), "Hello: ").expect("text outcome");
    assert_eq!(text, "Hi there");
}

#[test]
fn array_with_text_key_is_accepted() {
    let raw = json!([{"text": "  plain answer  "}]);
    let text = extract_text(Ok(raw), "").expect("text outcome");
    assert_eq!(text, "plain answer");
}

#[test]
fn object_with_generated_text_is_accepted() {
    let raw = json!({"generated_text": "single object reply"});
    let text = extract_text(Ok(raw), "").expect("text outcome");
    assert_eq!(text, "single object reply");
}

#[test]
fn object_with_text_key_is_accepted() {
    let raw = json!({"text": "short"});
    let text = extract_text(Ok(raw), "").expect("text outcome");
    assert_eq!(text, "short");
}

#[test]
fn generated_text_wins_over_text_when_both_present() {
    let raw = json!([{"generated_text": "primary", "text": "secondary"}]);
    let text = extract_text(Ok(raw), "").expect("text outcome");
    assert_eq!(text, "primary");
}

#[test]
fn loading_error_body_becomes_warming_outcome() {
    let raw = json!({"error": "Model XYZ is currently loading"});
    let err = extract_text(Ok(raw), "").unwrap_err();
    assert!(matches!(err, InferenceError::Warming));
    assert!(err.user_message().contains("warming up"));
}

#[test]
fn loading_detection_is_case_insensitive() {
    let raw = json!({"error": "Model is LOADING right now"});
    let err = extract_text(Ok(raw), "").unwrap_err();
    assert!(matches!(err, InferenceError::Warming));
}

#[test]
fn other_error_body_becomes_upstream_outcome() {
    let raw = json!({"error": "rate limit exceeded"});
    let err = extract_text(Ok(raw), "").unwrap_err();
    assert!(matches!(err, InferenceError::Upstream(_)));
    assert!(err.user_message().starts_with("Error: "));
}

#[test]
fn unknown_object_maps_to_fixed_fallback() {
    let raw = json!({"unexpected": 42});
    let err = extract_text(Ok(raw), "").unwrap_err();
    assert!(matches!(err, InferenceError::UnrecognizedShape));
    assert_eq!(
        err.user_message(),
        "Sorry, I couldn't process the response properly."
    );
}

#[test]
fn empty_array_maps_to_fixed_fallback() {
    let err = extract_text(Ok(json!([])), "").unwrap_err();
    assert!(matches!(err, InferenceError::UnrecognizedShape));
}

#[test]
fn null_maps_to_fixed_fallback() {
    let err = extract_text(Ok(json!(null)), "").unwrap_err();
    assert!(matches!(err, InferenceError::UnrecognizedShape));
}

#[test]
fn bare_scalar_is_rendered_as_string() {
    assert_eq!(extract_text(Ok(json!("just text")), "").unwrap(), "just text");
    assert_eq!(extract_text(Ok(json!(42)), "").unwrap(), "42");
    assert_eq!(extract_text(Ok(json!(true)), "").unwrap(), "true");
}

#[test]
fn prompt_echo_in_the_middle_is_stripped_once() {
    let raw = json!([{"generated_text": "prefix Hello:  answer"}]);
    let text = extract_text(Ok(raw), "Hello: ").expect("text outcome");
    assert_eq!(text, "prefix  answer");
}

#[test]
fn mismatched_echo_leaks_through_unchanged() {
    // Different casing: the literal strip silently does nothing.
    let raw = json!([{"generated_text": "hello: Hi there"}]);
    let text = extract_text(Ok(raw), "Hello: ").expect("text outcome");
    assert_eq!(text, "hello: Hi there");
}

#[test]
fn transport_status_error_never_propagates_as_panic() {
    let err = extract_text(
        Err(InferenceError::status(500, "internal error")),
        "Hello: ",
    )
    .unwrap_err();
    assert!(matches!(err, InferenceError::Status { status: 500, .. }));
    assert!(!err.user_message().is_empty());
}

#[test]
fn transport_status_mentioning_loading_becomes_warming() {
    let err = extract_text(
        Err(InferenceError::status(
            503,
            r#"{"error":"Model gpt2 is currently loading","estimated_time":20.0}"#,
        )),
        "",
    )
    .unwrap_err();
    assert!(matches!(err, InferenceError::Warming));
}

#[test]
fn whitespace_is_trimmed_from_the_outcome() {
    let raw = json!([{"generated_text": "\n  Hello: answer \n"}]);
    let text = extract_text(Ok(raw), "Hello: ").expect("text outcome");
    assert_eq!(text, "answer");
}
