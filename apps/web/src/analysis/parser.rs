//! Model-response parsing: fence stripping plus JSON decoding.
//!
//! On failure the caller shows the untouched raw text to the user instead
//! of retrying — fallback to transparency, never silent failure.

use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("the model returned an empty response")]
    EmptyResponse,

    #[error("the model response is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Parses a raw model response into `T`.
///
/// Trims surrounding whitespace, strips an optional markdown code fence
/// (```` ``` ```` or ```` ```json ````), then decodes the remainder as JSON.
pub fn parse_model_response<T: DeserializeOwned>(raw: &str) -> Result<T, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyResponse);
    }
    let body = strip_code_fences(trimmed);
    serde_json::from_str(body).map_err(ParseError::from)
}

fn strip_code_fences(text: &str) -> &str {
    let mut body = text;
    for opener in ["```json", "```"] {
        if let Some(rest) = body.strip_prefix(opener) {
            body = rest;
            break;
        }
    }
    if let Some(rest) = body.trim_end().strip_suffix("```") {
        body = rest;
    }
    body.trim()
}
