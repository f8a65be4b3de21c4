use crate::client_defaults::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
use crate::codec;
use crate::error::{
    read_body_with_limit_async, Error, CONFIG_ERROR_REDIRECT_WITH_AUTH, MAX_ERROR_BODY_BYTES,
};
use crate::okta::common;
use crate::okta::common::{ImageUpload, RequestBuilderExt};
use log::debug;
use reqwest::multipart::{Form, Part};
use reqwest::{Certificate, Client as HttpClient, RequestBuilder, Response};
use std::time::Duration;
use url::Url;

mod brands;
mod email_templates;
mod factors;
mod policies;
mod policy_rules;
mod themes;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::okta::common::EnvConfig;

    fn config(timeout: Option<Duration>) -> EnvConfig {
        EnvConfig {
            org_url: "https://example.okta.com".to_string(),
            token: Some("00abc".to_string()),
            timeout,
        }
    }

    #[test]
    fn zero_env_timeout_disables_timeout() {
        let builder =
            OktaAsyncClientBuilder::from_config(config(Some(Duration::ZERO))).expect("builder");
        assert_eq!(builder.timeout, None);
        assert!(builder.build().is_ok());
    }

    #[test]
    fn nonzero_env_timeout_is_applied() {
        let builder = OktaAsyncClientBuilder::from_config(config(Some(Duration::from_secs(9))))
            .expect("builder");
        assert_eq!(builder.timeout, Some(Duration::from_secs(9)));
        let builder = OktaAsyncClientBuilder::from_config(config(None)).expect("builder");
        assert_eq!(builder.timeout, Some(DEFAULT_TIMEOUT));
    }
}

/// Builder for [`OktaAsyncClient`].
///
/// Available when the `async-client` feature is enabled.
pub struct OktaAsyncClientBuilder {
    base_url: Url,
    timeout: Option<Duration>,
    follow_redirects: bool,
    ca_certs: Vec<Certificate>,
    user_agent: String,
    auth: Option<common::AuthProvider>,
}

impl OktaAsyncClientBuilder {
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, Error> {
        Ok(Self {
            base_url: Url::parse(base_url.as_ref())?,
            timeout: Some(DEFAULT_TIMEOUT),
            follow_redirects: false,
            ca_certs: Vec::new(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            auth: None,
        })
    }

    /// Reads `OKTA_CLIENT_ORGURL`, `OKTA_CLIENT_TOKEN` and
    /// `OKTA_CLIENT_REQUESTTIMEOUT`. A timeout of `0` disables the request
    /// timeout.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_config(common::EnvConfig::from_env()?)
    }

    fn from_config(config: common::EnvConfig) -> Result<Self, Error> {
        let mut builder = Self::new(&config.org_url)?;
        match config.timeout {
            Some(timeout) if timeout.is_zero() => builder.timeout = None,
            Some(timeout) => builder = builder.timeout(timeout),
            None => {}
        }
        if let Some(token) = config.token {
            builder = builder.api_token(token)?;
        }
        Ok(builder)
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Following redirects is rejected at build time when a token is set.
    pub fn follow_redirects(mut self, follow_redirects: bool) -> Self {
        self.follow_redirects = follow_redirects;
        self
    }

    pub fn add_ca_cert_pem(mut self, ca_pem: &[u8]) -> Result<Self, Error> {
        self.ca_certs.push(Certificate::from_pem(ca_pem)?);
        Ok(self)
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn api_token(mut self, token: impl AsRef<str>) -> Result<Self, Error> {
        self.auth = Some(common::AuthProvider::api_token(token.as_ref())?);
        Ok(self)
    }

    pub fn bearer_token(mut self, token: impl AsRef<str>) -> Result<Self, Error> {
        self.auth = Some(common::AuthProvider::bearer(token.as_ref())?);
        Ok(self)
    }

    pub fn build(self) -> Result<OktaAsyncClient, Error> {
        if self.auth.is_some() && self.follow_redirects {
            return Err(Error::Config(CONFIG_ERROR_REDIRECT_WITH_AUTH.to_string()));
        }
        let mut builder = HttpClient::builder().user_agent(self.user_agent);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if !self.follow_redirects {
            builder = builder.redirect(reqwest::redirect::Policy::none());
        }
        for cert in self.ca_certs {
            builder = builder.add_root_certificate(cert);
        }
        let http = builder.build()?;
        Ok(OktaAsyncClient {
            base_url: self.base_url,
            http,
            auth: self.auth,
        })
    }
}

/// Async Okta management API client (requires the `async-client` feature).
pub struct OktaAsyncClient {
    base_url: Url,
    http: HttpClient,
    auth: Option<common::AuthProvider>,
}

impl OktaAsyncClient {
    pub fn builder(base_url: impl AsRef<str>) -> Result<OktaAsyncClientBuilder, Error> {
        OktaAsyncClientBuilder::new(base_url)
    }

    pub fn from_env() -> Result<Self, Error> {
        OktaAsyncClientBuilder::from_env()?.build()
    }

    fn build_url(&self, segments: &[&str]) -> Result<Url, Error> {
        common::build_url(&self.base_url, segments)
    }

    fn json_body<T: serde::Serialize + ?Sized>(
        &self,
        req: RequestBuilder,
        body: &T,
    ) -> Result<RequestBuilder, Error> {
        Ok(req.with_json_body(codec::encode(body)?))
    }

    fn image_form(&self, image: ImageUpload) -> Result<Form, Error> {
        let part = Part::bytes(image.bytes)
            .file_name(image.file_name)
            .mime_str(common::IMAGE_PART_MIME)?;
        Ok(Form::new().part(common::IMAGE_PART_NAME, part))
    }

    async fn send(&self, req: RequestBuilder) -> Result<Response, Error> {
        let req = common::apply_auth(common::apply_accept(req), &self.auth);
        let request = req.build()?;
        debug!("okta request: {} {}", request.method(), request.url().path());
        Ok(self.http.execute(request).await?)
    }

    async fn expect_ok_json<T: serde::de::DeserializeOwned>(
        &self,
        resp: Response,
    ) -> Result<T, Error> {
        if resp.status().is_success() {
            let body = resp.bytes().await?;
            codec::decode(&body)
        } else {
            self.parse_error(resp).await
        }
    }

    async fn expect_no_content(&self, resp: Response) -> Result<(), Error> {
        if resp.status().is_success() {
            Ok(())
        } else {
            self.parse_error(resp).await
        }
    }

    async fn parse_error<T>(&self, mut resp: Response) -> Result<T, Error> {
        let status = resp.status();
        let body = read_body_with_limit_async(&mut resp, MAX_ERROR_BODY_BYTES).await?;
        Err(common::parse_error_from_body(status, &body))
    }
}
