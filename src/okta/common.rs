use crate::error::{fallback_message, ApiError, Error};
use log::warn;
use reqwest::blocking::RequestBuilder as BlockingRequestBuilder;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::RequestBuilder as AsyncRequestBuilder;
use reqwest::StatusCode;
use std::path::Path;
use std::time::Duration;
use url::Url;

pub(crate) const API_PREFIX: [&str; 2] = ["api", "v1"];
pub(crate) const JSON_CONTENT_TYPE: &str = "application/json";

pub(crate) const ENV_ORG_URL: &str = "OKTA_CLIENT_ORGURL";
pub(crate) const ENV_TOKEN: &str = "OKTA_CLIENT_TOKEN";
pub(crate) const ENV_REQUEST_TIMEOUT: &str = "OKTA_CLIENT_REQUESTTIMEOUT";

pub(crate) enum AuthProvider {
    /// Okta API token, sent as `SSWS <token>`.
    ApiToken(HeaderValue),
    /// OAuth 2.0 access token, sent as `Bearer <token>`.
    Bearer(HeaderValue),
}

impl AuthProvider {
    pub(crate) fn api_token(token: &str) -> Result<Self, Error> {
        Ok(AuthProvider::ApiToken(auth_header_value("SSWS", token)?))
    }

    pub(crate) fn bearer(token: &str) -> Result<Self, Error> {
        Ok(AuthProvider::Bearer(auth_header_value("Bearer", token)?))
    }

    fn header_value(&self) -> &HeaderValue {
        match self {
            AuthProvider::ApiToken(value) | AuthProvider::Bearer(value) => value,
        }
    }
}

fn auth_header_value(scheme: &str, token: &str) -> Result<HeaderValue, Error> {
    let mut value = HeaderValue::from_str(&format!("{scheme} {token}"))
        .map_err(|e| Error::Config(format!("config error: invalid auth token: {e}")))?;
    value.set_sensitive(true);
    Ok(value)
}

pub(crate) trait RequestBuilderExt: Sized {
    fn with_header(self, name: &str, value: &str) -> Self;
    fn with_auth(self, value: &HeaderValue) -> Self;
    fn with_query(self, params: &[(&'static str, String)]) -> Self;
    fn with_json_body(self, body: Vec<u8>) -> Self;
}

impl RequestBuilderExt for BlockingRequestBuilder {
    fn with_header(self, name: &str, value: &str) -> Self {
        self.header(name, value)
    }

    fn with_auth(self, value: &HeaderValue) -> Self {
        self.header(reqwest::header::AUTHORIZATION, value.clone())
    }

    fn with_query(self, params: &[(&'static str, String)]) -> Self {
        self.query(params)
    }

    fn with_json_body(self, body: Vec<u8>) -> Self {
        self.header(CONTENT_TYPE, JSON_CONTENT_TYPE).body(body)
    }
}

impl RequestBuilderExt for AsyncRequestBuilder {
    fn with_header(self, name: &str, value: &str) -> Self {
        self.header(name, value)
    }

    fn with_auth(self, value: &HeaderValue) -> Self {
        self.header(reqwest::header::AUTHORIZATION, value.clone())
    }

    fn with_query(self, params: &[(&'static str, String)]) -> Self {
        self.query(params)
    }

    fn with_json_body(self, body: Vec<u8>) -> Self {
        self.header(CONTENT_TYPE, JSON_CONTENT_TYPE).body(body)
    }
}

pub(crate) fn apply_auth<B: RequestBuilderExt>(req: B, auth: &Option<AuthProvider>) -> B {
    match auth {
        Some(auth) => req.with_auth(auth.header_value()),
        None => req,
    }
}

pub(crate) fn apply_accept<B: RequestBuilderExt>(req: B) -> B {
    req.with_header("Accept", JSON_CONTENT_TYPE)
}

pub(crate) fn apply_query_params<B: RequestBuilderExt>(
    req: B,
    params: Vec<(&'static str, String)>,
) -> B {
    if params.is_empty() {
        req
    } else {
        req.with_query(&params)
    }
}

/// Appends `api/v1` and `segments` to the org URL, percent-encoding each
/// segment. Any query, fragment or trailing slash on the org URL is dropped.
pub(crate) fn build_url(base_url: &Url, segments: &[&str]) -> Result<Url, Error> {
    let mut url = base_url.clone();
    url.set_query(None);
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|_| Error::InvalidBaseUrl(base_url.to_string()))?
        .pop_if_empty()
        .extend(API_PREFIX)
        .extend(segments);
    Ok(url)
}

pub(crate) fn parse_error_from_body(status: StatusCode, body: &[u8]) -> Error {
    let mut err = match serde_json::from_slice::<ApiError>(body) {
        Ok(err) => err,
        Err(_) => {
            warn!(
                "okta error response is not json: status={}, bytes={}",
                status.as_u16(),
                body.len()
            );
            ApiError::default()
        }
    };
    err.status = status.as_u16();
    if err.error_summary.is_empty() {
        err.error_summary = fallback_message(status, body);
    }
    Error::Api(Box::new(err))
}

/// An image to upload as a theme logo, favicon or background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    /// Reads an image from disk; the multipart file name is the path's final
    /// component.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Ok(Self { file_name, bytes })
    }
}

pub(crate) const IMAGE_PART_NAME: &str = "file";
pub(crate) const IMAGE_PART_MIME: &str = "application/octet-stream";

/// Settings read from `OKTA_CLIENT_*` environment variables.
///
/// `timeout` is kept as read; the builders treat zero as "no timeout".
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EnvConfig {
    pub(crate) org_url: String,
    pub(crate) token: Option<String>,
    pub(crate) timeout: Option<Duration>,
}

impl EnvConfig {
    pub(crate) fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let org_url = lookup(ENV_ORG_URL)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| Error::Config(format!("config error: {ENV_ORG_URL} is not set")))?;
        let token = lookup(ENV_TOKEN).filter(|v| !v.trim().is_empty());
        let timeout = match lookup(ENV_REQUEST_TIMEOUT) {
            Some(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|e| {
                    Error::Config(format!(
                        "config error: {ENV_REQUEST_TIMEOUT} must be whole seconds: {e}"
                    ))
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };
        Ok(Self {
            org_url,
            token,
            timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn build_url_prefixes_api_version_and_encodes_segments() {
        let base = Url::parse("https://example.okta.com/").expect("url");
        let url = build_url(&base, &["users", "a b/c", "factors"]).expect("url");
        assert_eq!(url.path(), "/api/v1/users/a%20b%2Fc/factors");
    }

    #[test]
    fn build_url_clears_query_and_fragment() {
        let base = Url::parse("https://example.okta.com/?x=1#top").expect("url");
        let url = build_url(&base, &["brands"]).expect("url");
        assert_eq!(url.as_str(), "https://example.okta.com/api/v1/brands");
    }

    #[test]
    fn build_url_keeps_base_path_without_trailing_slash() {
        let base = Url::parse("https://example.okta.com/proxy/").expect("url");
        let url = build_url(&base, &["brands"]).expect("url");
        assert_eq!(url.path(), "/proxy/api/v1/brands");
    }

    #[test]
    fn build_url_rejects_cannot_be_a_base() {
        let base = Url::parse("mailto:admin@example.com").expect("url");
        let err = build_url(&base, &["brands"]).expect_err("error");
        assert!(matches!(err, Error::InvalidBaseUrl(_)));
    }

    #[test]
    fn parse_error_reads_okta_error_body() {
        let body = br#"{"errorCode":"E0000007","errorSummary":"Not found: Resource not found: p1 (Policy)","errorLink":"E0000007","errorId":"oae1","errorCauses":[]}"#;
        match parse_error_from_body(StatusCode::NOT_FOUND, body) {
            Error::Api(err) => {
                assert_eq!(err.status, 404);
                assert_eq!(err.error_code, "E0000007");
                assert_eq!(err.error_id.as_deref(), Some("oae1"));
                assert!(err.error_summary.starts_with("Not found"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_error_falls_back_for_plain_text() {
        match parse_error_from_body(StatusCode::SERVICE_UNAVAILABLE, b"upstream down") {
            Error::Api(err) => {
                assert_eq!(err.status, 503);
                assert!(err.error_code.is_empty());
                assert_eq!(err.error_summary, "Service Unavailable: upstream down");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn auth_token_rejects_control_characters() {
        let err = match AuthProvider::api_token("bad\ntoken") {
            Ok(_) => panic!("expected error"),
            Err(err) => err,
        };
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn auth_header_uses_scheme_prefix() {
        let auth = AuthProvider::api_token("00abc").expect("auth");
        assert_eq!(auth.header_value().to_str().expect("str"), "SSWS 00abc");
        let auth = AuthProvider::bearer("eyJ").expect("auth");
        assert_eq!(auth.header_value().to_str().expect("str"), "Bearer eyJ");
    }

    #[test]
    fn env_config_requires_org_url() {
        let err = EnvConfig::from_lookup(lookup(&[(ENV_TOKEN, "t")])).expect_err("error");
        match err {
            Error::Config(message) => assert!(message.contains(ENV_ORG_URL)),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn env_config_reads_token_and_timeout() {
        let config = EnvConfig::from_lookup(lookup(&[
            (ENV_ORG_URL, "https://example.okta.com"),
            (ENV_TOKEN, "00abc"),
            (ENV_REQUEST_TIMEOUT, "45"),
        ]))
        .expect("config");
        assert_eq!(config.org_url, "https://example.okta.com");
        assert_eq!(config.token.as_deref(), Some("00abc"));
        assert_eq!(config.timeout, Some(Duration::from_secs(45)));
    }

    #[test]
    fn env_config_rejects_non_numeric_timeout() {
        let err = EnvConfig::from_lookup(lookup(&[
            (ENV_ORG_URL, "https://example.okta.com"),
            (ENV_REQUEST_TIMEOUT, "soon"),
        ]))
        .expect_err("error");
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn image_upload_from_missing_path_is_io_error() {
        let err = ImageUpload::from_path("/nonexistent/okta-rs/logo.png").expect_err("error");
        assert!(matches!(err, Error::Io(_)));
    }
}
