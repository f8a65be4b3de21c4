use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

pub(crate) const MAX_ERROR_BODY_BYTES: usize = 64 * 1024;
pub(crate) const CONFIG_ERROR_REDIRECT_WITH_AUTH: &str =
    "config error: redirects must be disabled when an auth token is configured";
const FALLBACK_BODY_CHARS: usize = 256;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiErrorCause {
    pub error_summary: String,
}

/// Error payload returned by Okta for non-2xx responses.
///
/// `status` is not part of the wire body; it is filled in from the HTTP
/// response.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiError {
    #[serde(skip)]
    pub status: u16,
    pub error_code: String,
    pub error_summary: String,
    pub error_link: Option<String>,
    pub error_id: Option<String>,
    pub error_causes: Vec<ApiErrorCause>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "status={}", self.status)?;
        if !self.error_code.is_empty() {
            write!(f, ", code={}", self.error_code)?;
        }
        if !self.error_summary.is_empty() {
            write!(f, ", summary={}", self.error_summary)?;
        }
        for cause in &self.error_causes {
            write!(f, ", cause={}", cause.error_summary)?;
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
    #[error("url parse error: {0}")]
    Url(#[from] url::ParseError),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("decode error: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Config(String),
    #[error("okta api error: {0}")]
    Api(Box<ApiError>),
}

pub(crate) fn fallback_message(status: StatusCode, body: &[u8]) -> String {
    let reason = status.canonical_reason().unwrap_or("unexpected status");
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        reason.to_string()
    } else {
        let truncated: String = text.chars().take(FALLBACK_BODY_CHARS).collect();
        format!("{reason}: {truncated}")
    }
}

pub(crate) fn read_body_with_limit(
    resp: &mut reqwest::blocking::Response,
    limit: usize,
) -> Result<Vec<u8>, Error> {
    use std::io::Read;

    let mut body = Vec::new();
    resp.by_ref().take(limit as u64).read_to_end(&mut body)?;
    Ok(body)
}

#[cfg(feature = "async-client")]
pub(crate) async fn read_body_with_limit_async(
    resp: &mut reqwest::Response,
    limit: usize,
) -> Result<Vec<u8>, Error> {
    let mut body = Vec::new();
    while let Some(chunk) = resp.chunk().await? {
        let remaining = limit.saturating_sub(body.len());
        if chunk.len() >= remaining {
            body.extend_from_slice(&chunk[..remaining]);
            break;
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_includes_code_and_causes() {
        let err = ApiError {
            status: 400,
            error_code: "E0000001".to_string(),
            error_summary: "Api validation failed: name".to_string(),
            error_causes: vec![ApiErrorCause {
                error_summary: "name: A policy with the same name already exists.".to_string(),
            }],
            ..ApiError::default()
        };
        assert_eq!(
            err.to_string(),
            "status=400, code=E0000001, summary=Api validation failed: name, \
             cause=name: A policy with the same name already exists."
        );
    }

    #[test]
    fn fallback_message_truncates_long_bodies() {
        let body = "x".repeat(1000);
        let msg = fallback_message(StatusCode::BAD_GATEWAY, body.as_bytes());
        assert!(msg.starts_with("Bad Gateway: "));
        assert_eq!(msg.len(), "Bad Gateway: ".len() + FALLBACK_BODY_CHARS);
    }

    #[test]
    fn fallback_message_uses_reason_for_empty_body() {
        let msg = fallback_message(StatusCode::NOT_FOUND, b"  ");
        assert_eq!(msg, "Not Found");
    }

    #[test]
    fn error_stays_smaller_than_api_error_body() {
        assert!(std::mem::size_of::<Error>() < std::mem::size_of::<ApiError>());
    }
}
