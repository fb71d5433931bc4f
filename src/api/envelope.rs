//! The JSON envelope the budget service wraps every response in.

use crate::error::{ServiceError, StatusError};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// `{ "message": "...", "data": { ... }, "errors": { "key": ["..."] } }`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct Envelope {
    pub(crate) message: String,
    data: Option<Map<String, Value>>,
    #[serde(skip)]
    status: Option<StatusCode>,
}

impl Envelope {
    /// Decodes a successful response body. An empty body decodes as an empty envelope.
    pub(crate) fn parse(status: StatusCode, body: &[u8]) -> Result<Self, ServiceError> {
        let mut envelope: Envelope = if body.iter().all(u8::is_ascii_whitespace) {
            Envelope::default()
        } else {
            serde_json::from_slice(body).map_err(|source| ServiceError::Decode { status, source })?
        };
        envelope.status = Some(status);
        Ok(envelope)
    }

    /// Takes `field` out of the `data` object and decodes it.
    pub(crate) fn take<T>(&mut self, field: &'static str) -> Result<T, ServiceError>
    where
        T: DeserializeOwned,
    {
        let value = self
            .data
            .as_mut()
            .and_then(|data| data.remove(field))
            .filter(|value| !value.is_null())
            .ok_or(ServiceError::MissingField { field })?;
        serde_json::from_value(value).map_err(|source| ServiceError::Decode {
            status: self.status.unwrap_or(StatusCode::OK),
            source,
        })
    }
}

/// The body of a failed request. The service sends either `{"detail": ...}` or the usual
/// envelope with an `errors` map, so both shapes are accepted.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ErrorBody {
    detail: Option<Value>,
    message: Option<String>,
    errors: Option<BTreeMap<String, Vec<String>>>,
}

/// Builds the error for a response whose status was not the one expected. The body is best
/// effort: when it is not JSON its text becomes the message.
pub(crate) fn status_error(status: StatusCode, body: &[u8]) -> StatusError {
    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(parsed) => {
            let detail = parsed.detail.and_then(|detail| match detail {
                Value::Null => None,
                Value::String(s) => Some(s),
                other => Some(other.to_string()),
            });
            StatusError::new(
                status,
                detail,
                parsed.message.unwrap_or_default(),
                parsed.errors.unwrap_or_default(),
            )
        }
        Err(_) => StatusError::new(
            status,
            None,
            String::from_utf8_lossy(body).trim(),
            BTreeMap::new(),
        ),
    }
}
