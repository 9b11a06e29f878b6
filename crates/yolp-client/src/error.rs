use reqwest::{Method, StatusCode};
use thiserror::Error;

/// Errors returned by the YOLP client and its HTTP adapter.
#[derive(Debug, Error)]
pub enum YolpError {
    /// Network, TLS, or body-read failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a status outside the 2xx range.
    #[error(
        "request failed: {} {}\nrequest: {method} {url}\nresponse: {body}",
        .status.as_u16(),
        status_symbol(.status)
    )]
    RequestFailed {
        status: StatusCode,
        method: Method,
        url: String,
        body: String,
    },

    /// A 2xx body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// A request body could not be encoded as JSON.
    #[error("JSON serialization error for {context}: {source}")]
    Serialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Request parameters could not be rendered as a query string.
    #[error("query string error: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),

    /// A caller-supplied header value is not valid HTTP.
    #[error("invalid {name} header: {reason}")]
    InvalidHeader { name: String, reason: String },

    #[error("invalid base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

impl YolpError {
    /// HTTP status of a [`YolpError::RequestFailed`], or of a transport error
    /// that carries one.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::RequestFailed { status, .. } => Some(*status),
            Self::Http(e) => e.status(),
            _ => None,
        }
    }
}

/// Compact symbolic name for a status: the canonical reason phrase with
/// spaces and punctuation removed (`400` → `BadRequest`).
pub(crate) fn status_symbol(status: &StatusCode) -> String {
    status.canonical_reason().map_or_else(
        || "Unknown".to_string(),
        |reason| reason.chars().filter(char::is_ascii_alphanumeric).collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_symbol_strips_spaces_and_punctuation() {
        assert_eq!(status_symbol(&StatusCode::BAD_REQUEST), "BadRequest");
        assert_eq!(
            status_symbol(&StatusCode::INTERNAL_SERVER_ERROR),
            "InternalServerError"
        );
        assert_eq!(
            status_symbol(&StatusCode::NON_AUTHORITATIVE_INFORMATION),
            "NonAuthoritativeInformation"
        );
        assert_eq!(status_symbol(&StatusCode::OK), "OK");
    }

    #[test]
    fn status_symbol_for_unregistered_code() {
        let status = StatusCode::from_u16(599).expect("599 is a valid status code");
        assert_eq!(status_symbol(&status), "Unknown");
    }

    #[test]
    fn request_failed_message_carries_status_request_and_body() {
        let err = YolpError::RequestFailed {
            status: StatusCode::BAD_REQUEST,
            method: Method::GET,
            url: "https://map.yahooapis.jp/geocode/V1/geoCoder".to_string(),
            body: "error details".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("400 BadRequest"), "got: {msg}");
        assert!(
            msg.contains("GET https://map.yahooapis.jp/geocode/V1/geoCoder"),
            "got: {msg}"
        );
        assert!(msg.contains("error details"), "got: {msg}");
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    }

    #[test]
    fn status_is_none_for_decode_errors() {
        let source = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = YolpError::Deserialize {
            context: "test".to_string(),
            source,
        };
        assert_eq!(err.status(), None);
    }
}
