//! Error types for the budget client.
//!
//! Operations return the crate-wide `Result`, which carries an `anyhow::Error` with context about
//! the operation that failed. When the failure came from the budget service the root cause is a
//! `ServiceError`, which can be recovered with `anyhow::Error::downcast_ref`.

use reqwest::StatusCode;
use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

pub type Error = anyhow::Error;
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The ways a call to the budget service can fail.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The service answered with a status other than the one the operation expects.
    #[error("{0}")]
    Status(StatusError),

    /// The request could not be sent, or the response body could not be read.
    #[error("request to the budget service failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not the JSON the operation expects.
    #[error("unable to decode the budget service response (status {status}): {source}")]
    Decode {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },

    /// The response decoded, but its `data` object did not hold the expected field.
    #[error("the budget service response has no '{field}' in its data")]
    MissingField { field: &'static str },

    /// The configured base URL could not be combined with the request path.
    #[error("invalid request URL: {0}")]
    Url(#[from] url::ParseError),
}

impl ServiceError {
    /// The HTTP status of the response, when a response was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ServiceError::Status(e) => Some(e.status()),
            ServiceError::Transport(e) => e.status(),
            ServiceError::Decode { status, .. } => Some(*status),
            ServiceError::MissingField { .. } | ServiceError::Url(_) => None,
        }
    }

    /// The structured error body, if this is a status error.
    pub fn as_status(&self) -> Option<&StatusError> {
        match self {
            ServiceError::Status(e) => Some(e),
            _ => None,
        }
    }
}

/// An unexpected status from the budget service together with whatever the service said about
/// it. The service reports errors in one of two ways: a top-level `detail` value, or an `errors`
/// map of keys to messages inside the usual response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusError {
    status: StatusCode,
    detail: Option<String>,
    message: String,
    errors: BTreeMap<String, Vec<String>>,
}

impl StatusError {
    pub fn new(
        status: StatusCode,
        detail: Option<String>,
        message: impl Into<String>,
        errors: BTreeMap<String, Vec<String>>,
    ) -> Self {
        Self {
            status,
            detail,
            message: message.into(),
            errors,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The `detail` value of the error body, as sent by the service.
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// The envelope `message`, or the raw body when it was not JSON.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn errors(&self) -> &BTreeMap<String, Vec<String>> {
        &self.errors
    }
}

impl Display for StatusError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let code = self.status.as_u16();
        if let Some(detail) = &self.detail {
            return write!(f, "{}", detail.to_lowercase());
        }
        if !self.errors.is_empty() {
            let errors = self
                .errors
                .iter()
                .map(|(key, messages)| format!("{key}: {}", messages.join(", ")))
                .collect::<Vec<_>>()
                .join("; ");
            return write!(f, "{code}: {errors}");
        }
        if !self.message.is_empty() {
            return write!(f, "{code}: {}", self.message);
        }
        write!(f, "unexpected status {code}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_is_lowercased() {
        let e = StatusError::new(
            StatusCode::FORBIDDEN,
            Some("No permission".to_string()),
            "",
            BTreeMap::new(),
        );
        assert_eq!(e.to_string(), "no permission");
    }

    #[test]
    fn test_errors_map_display() {
        let mut errors = BTreeMap::new();
        errors.insert(
            "auth".to_string(),
            vec!["Please ensure you have permission".to_string()],
        );
        errors.insert("token".to_string(), vec!["a".to_string(), "b".to_string()]);
        let e = StatusError::new(StatusCode::FORBIDDEN, None, "Forbidden", errors);
        assert_eq!(
            e.to_string(),
            "403: auth: Please ensure you have permission; token: a, b"
        );
    }

    #[test]
    fn test_message_and_bare_status_display() {
        let e = StatusError::new(
            StatusCode::BAD_GATEWAY,
            None,
            "upstream down",
            BTreeMap::new(),
        );
        assert_eq!(e.to_string(), "502: upstream down");

        let e = StatusError::new(StatusCode::BAD_GATEWAY, None, "", BTreeMap::new());
        assert_eq!(e.to_string(), "unexpected status 502");
    }

    #[test]
    fn test_service_error_status() {
        let e = ServiceError::Status(StatusError::new(
            StatusCode::NOT_FOUND,
            None,
            "",
            BTreeMap::new(),
        ));
        assert_eq!(e.status(), Some(StatusCode::NOT_FOUND));
        assert!(e.as_status().is_some());

        let e = ServiceError::MissingField { field: "budget" };
        assert_eq!(e.status(), None);
        assert!(e.as_status().is_none());
    }
}
