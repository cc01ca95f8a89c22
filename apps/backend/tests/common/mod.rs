#![allow(dead_code)]

// tests/common/mod.rs
use serde_json::{json, Value};

// Logging is auto-installed for every test binary that includes `common`.
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// A well-formed ten-round session body as the browser client posts it.
pub fn sample_session_json(total_score: u32) -> Value {
    let words = ["cat", "dog", "fish", "bird", "frog", "owl", "cow", "pig", "hen", "ant"];
    let results: Vec<Value> = words
        .iter()
        .enumerate()
        .map(|(i, w)| {
            let correct = (i as u32) < total_score;
            json!({
                "word": w,
                "userAnswer": if correct { w.to_string() } else { String::new() },
                "correct": correct,
                "hintsUsed": i == 9,
            })
        })
        .collect();
    json!({
        "wordBank": words,
        "results": results,
        "totalScore": total_score,
        "totalQuestions": 10,
        "completedAt": "2024-05-01T12:30:00Z",
    })
}

/// Hand-built multipart body with a single `file` field.
pub fn multipart_upload(field: &str, file_name: &str, content: &[u8]) -> (String, Vec<u8>) {
    let boundary = "dictation-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    (format!("multipart/form-data; boundary={boundary}"), body)
}
