use dashboard_core::{CrawlResult, DeleteResult, DetailData, Keyword, KeywordId};
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Correlates a submitted request with its completion event.
pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    Health,
    ListKeywords,
    CreateKeyword { term: String },
    DeleteKeyword { id: KeywordId },
    CrawlKeyword { id: KeywordId },
    /// Articles and trend, fetched concurrently.
    LoadDetail { keyword_id: KeywordId },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse {
    Health(bool),
    Keywords(Vec<Keyword>),
    /// `None` for an empty success body.
    Created(Option<Keyword>),
    /// `None` for an empty success body.
    Deleted(Option<DeleteResult>),
    Crawled(CrawlResult),
    Detail(DetailData),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    Completed {
        request_id: RequestId,
        result: Result<ApiResponse, GatewayError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// Non-2xx response. `message` is the text shown to the user.
    #[error("{message}")]
    Remote {
        status: u16,
        detail: Option<String>,
        message: String,
    },
    /// Rejected locally; no request was sent.
    #[error("{0}")]
    Validation(String),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("{0}")]
    Network(String),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

impl GatewayError {
    /// Builds the error for a non-success response from its status and body.
    ///
    /// A JSON `detail` field wins (strings verbatim, anything else as compact
    /// JSON), then the whole JSON body, then the raw text. With an empty body
    /// the message is just the status line.
    pub fn remote(status: StatusCode, body: &str) -> Self {
        let detail = describe_error_body(body);
        let status_line = match status.canonical_reason() {
            Some(reason) => format!("HTTP {} {}", status.as_u16(), reason),
            None => format!("HTTP {}", status.as_u16()),
        };
        let message = match &detail {
            Some(detail) => format!("{status_line} - {detail}"),
            None => status_line,
        };
        GatewayError::Remote {
            status: status.as_u16(),
            detail,
            message,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn describe_error_body(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    let value: Value = match serde_json::from_str(trimmed) {
        Ok(value) => value,
        Err(_) => return Some(trimmed.to_string()),
    };
    let detail = match value.get("detail") {
        Some(Value::Null) | None => return Some(value.to_string()),
        Some(detail) => detail,
    };
    match detail {
        Value::String(text) if text.is_empty() => Some(value.to_string()),
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_detail_is_used_verbatim() {
        let err = GatewayError::remote(StatusCode::NOT_FOUND, r#"{"detail":"keyword not found"}"#);
        assert_eq!(err.to_string(), "HTTP 404 Not Found - keyword not found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn structured_detail_is_compact_json() {
        let err = GatewayError::remote(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"detail": [{"loc": ["body", "term"], "msg": "field required"}]}"#,
        );
        assert_eq!(
            err.to_string(),
            r#"HTTP 422 Unprocessable Entity - [{"loc":["body","term"],"msg":"field required"}]"#
        );
    }

    #[test]
    fn json_without_detail_uses_whole_body() {
        let err = GatewayError::remote(StatusCode::BAD_REQUEST, r#"{"error":"nope"}"#);
        assert_eq!(err.to_string(), r#"HTTP 400 Bad Request - {"error":"nope"}"#);
    }

    #[test]
    fn non_json_body_is_raw_text() {
        let err = GatewayError::remote(StatusCode::BAD_GATEWAY, "upstream down\n");
        assert_eq!(err.to_string(), "HTTP 502 Bad Gateway - upstream down");
    }

    #[test]
    fn empty_body_falls_back_to_status_line() {
        let err = GatewayError::remote(StatusCode::INTERNAL_SERVER_ERROR, "");
        assert_eq!(err.to_string(), "HTTP 500 Internal Server Error");
        assert!(matches!(err, GatewayError::Remote { detail: None, .. }));
    }
}
