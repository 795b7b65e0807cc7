//! The `{success, message, data, ...}` wrapper every endpoint responds with,
//! and its translation into typed results or errors.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::Error;

/// Response envelope returned by every endpoint.
///
/// `data` is kept as raw JSON until `success` has been checked, so a failure
/// envelope is reported by its message even when its `data` has an
/// unexpected shape.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Envelope<T = serde_json::Value> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_more: Option<bool>,
}

/// One decoded page of a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: Option<i64>,
    /// Continuation token, only meaningful when `has_more` is true.
    pub next_token: Option<String>,
    pub has_more: bool,
}

/// Decodes a response body that carries at most one entity.
///
/// A 204 yields `Ok(None)`. A failure envelope yields [`Error::Api`] carrying
/// the message verbatim.
pub fn decode_single<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<Option<T>, Error> {
    if status == StatusCode::NO_CONTENT {
        return Ok(None);
    }
    let envelope = parse_envelope(status, body)?;
    envelope
        .data
        .filter(|data| !data.is_null())
        .map(|data| serde_json::from_value(data).map_err(|e| decode_error(status, body, e)))
        .transpose()
}

/// Decodes one page of a collection. A 204 yields `Ok(None)`.
pub fn decode_page<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<Option<Page<T>>, Error> {
    if status == StatusCode::NO_CONTENT {
        return Ok(None);
    }
    let envelope = parse_envelope(status, body)?;
    let items = match envelope.data {
        Some(data) if !data.is_null() => {
            serde_json::from_value::<Vec<T>>(data).map_err(|e| decode_error(status, body, e))?
        }
        _ => Vec::new(),
    };
    Ok(Some(Page {
        items,
        total_count: envelope.total_count,
        next_token: envelope.next_token.filter(|token| !token.is_empty()),
        has_more: envelope.has_more.unwrap_or(false),
    }))
}

fn parse_envelope(status: StatusCode, body: &str) -> Result<Envelope, Error> {
    let envelope: Envelope =
        serde_json::from_str(body).map_err(|e| decode_error(status, body, e))?;
    if !envelope.success {
        let message = envelope.message.unwrap_or_default();
        tracing::debug!("API reported failure ({}): {}", status, message);
        return Err(Error::Api(message));
    }
    Ok(envelope)
}

/// Response bodies are never logged above `debug!`.
fn decode_error(status: StatusCode, body: &str, source: serde_json::Error) -> Error {
    tracing::error!("Failed to decode response ({}): {}", status, source);
    tracing::debug!("Undecodable body: {}", truncate_body(body));
    Error::Decode {
        status: status.as_u16(),
        source,
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Thing {
        id: String,
    }

    #[test]
    fn single_success_returns_data() {
        let body = r#"{"success":true,"data":{"id":"folder_123"}}"#;
        let thing: Option<Thing> = decode_single(StatusCode::OK, body).unwrap();
        assert_eq!(thing, Some(Thing { id: "folder_123".to_string() }));
    }

    #[test]
    fn no_content_is_absent_not_error() {
        let thing: Option<Thing> = decode_single(StatusCode::NO_CONTENT, "").unwrap();
        assert!(thing.is_none());
        let page: Option<Page<Thing>> = decode_page(StatusCode::NO_CONTENT, "").unwrap();
        assert!(page.is_none());
    }

    #[test]
    fn failure_message_is_verbatim() {
        let body = r#"{"success":false,"message":"X"}"#;
        let err = decode_single::<Thing>(StatusCode::NOT_FOUND, body).unwrap_err();
        assert_eq!(err.to_string(), "X");
        let err = decode_page::<Thing>(StatusCode::OK, body).unwrap_err();
        assert_eq!(err.to_string(), "X");
    }

    #[test]
    fn failure_wins_over_malformed_data() {
        let body = r#"{"success":false,"message":"Bad request","data":"not a thing"}"#;
        let err = decode_single::<Thing>(StatusCode::BAD_REQUEST, body).unwrap_err();
        assert!(matches!(err, Error::Api(ref m) if m == "Bad request"));
    }

    #[test]
    fn invalid_json_is_decode_error() {
        let err = decode_single::<Thing>(StatusCode::INTERNAL_SERVER_ERROR, "oops").unwrap_err();
        assert!(matches!(err, Error::Decode { status: 500, .. }));
        assert!(err.to_string().starts_with("decoding response: "));
    }

    #[test]
    fn wrong_payload_shape_is_decode_error() {
        let body = r#"{"success":true,"data":[{"id":"a"}]}"#;
        let err = decode_single::<Thing>(StatusCode::OK, body).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn success_without_data_is_absent() {
        let thing: Option<Thing> = decode_single(StatusCode::OK, r#"{"success":true}"#).unwrap();
        assert!(thing.is_none());
        let thing: Option<Thing> =
            decode_single(StatusCode::OK, r#"{"success":true,"data":null}"#).unwrap();
        assert!(thing.is_none());
    }

    #[test]
    fn page_carries_continuation() {
        let body = r#"{"success":true,"data":[{"id":"a"},{"id":"b"}],"total_count":3,"next_token":"t","has_more":true}"#;
        let page: Page<Thing> = decode_page(StatusCode::OK, body).unwrap().unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[1].id, "b");
        assert_eq!(page.total_count, Some(3));
        assert_eq!(page.next_token.as_deref(), Some("t"));
        assert!(page.has_more);
    }

    #[test]
    fn page_defaults_to_last() {
        let page: Page<Thing> = decode_page(StatusCode::OK, r#"{"success":true,"data":[],"next_token":""}"#)
            .unwrap()
            .unwrap();
        assert!(page.items.is_empty());
        assert!(!page.has_more);
        assert_eq!(page.next_token, None);
    }

    #[test]
    fn decoding_is_repeatable() {
        let body = r#"{"success":true,"data":{"id":"same"}}"#;
        let first: Option<Thing> = decode_single(StatusCode::OK, body).unwrap();
        let second: Option<Thing> = decode_single(StatusCode::OK, body).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    #[tracing_test::traced_test]
    fn decode_failure_keeps_body_out_of_error_log() {
        let body = r#"{"success":true,"data":[{"id":"cv_1","values":[{"value":"hunter2"}]}]"#;
        let err = decode_page::<Thing>(StatusCode::OK, body).unwrap_err();
        assert!(matches!(err, Error::Decode { status: 200, .. }));
        assert!(!err.to_string().contains("hunter2"));
        assert!(logs_contain("Failed to decode response"));
        logs_assert(|lines: &[&str]| {
            if lines
                .iter()
                .any(|line| line.contains("ERROR") && line.contains("hunter2"))
            {
                return Err("body logged at error level".to_string());
            }
            Ok(())
        });
    }

    #[test]
    fn truncates_long_bodies() {
        let body = "é".repeat(1500);
        let snippet = truncate_body(&body);
        assert!(snippet.ends_with("...[truncated]"));
        assert!(snippet.len() < body.len());
    }
}
