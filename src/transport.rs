use std::time::Duration;

use async_trait::async_trait;
use http::Method;
use reqwest::redirect::Policy;
use url::Url;

use crate::{Credentials, OAuthClientProvider, OAuthParameters, Params, Result};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Whether a request carries an OAuth signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    Signed,
    Anonymous,
}

/// One call against the API, relative to the configured host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    /// Versioned path such as `/v2/user/info`.
    pub path: String,
    /// Sent as the query of a `GET` and as the form body otherwise.
    pub params: Params,
    pub auth: Auth,
}

impl ApiRequest {
    pub fn get<P: Into<String>>(path: P, params: Params) -> Self {
        ApiRequest {
            method: Method::GET,
            path: path.into(),
            params,
            auth: Auth::Signed,
        }
    }

    pub fn post<P: Into<String>>(path: P, params: Params) -> Self {
        ApiRequest {
            method: Method::POST,
            path: path.into(),
            params,
            auth: Auth::Signed,
        }
    }

    /// Send this request without an `Authorization` header.
    pub fn anonymous(self) -> Self {
        ApiRequest {
            auth: Auth::Anonymous,
            ..self
        }
    }
}

/// Executes [`ApiRequest`]s and hands back the raw response body.
///
/// An HTTP error status is not an error here: the API reports it again in
/// the envelope's `meta`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> Result<Vec<u8>>;
}

/// [`Transport`] over reqwest, signing with one set of credentials.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    // avatars answer with a redirect whose body is the result
    anonymous: reqwest::Client,
    host: Url,
    credentials: Credentials,
    timeout: Option<Duration>,
}

impl HttpTransport {
    /// Constructs a transport for `host`, e.g. `https://api.tumblr.com`.
    pub fn new(host: &str, credentials: Credentials) -> Result<Self> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Self::with_client(client, host, credentials)
    }

    /// Constructs a transport that signs requests sent through `client`.
    pub fn with_client(client: reqwest::Client, host: &str, credentials: Credentials) -> Result<Self> {
        let anonymous = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .redirect(Policy::none())
            .build()?;
        Ok(HttpTransport {
            client,
            anonymous,
            host: Url::parse(host)?,
            credentials,
            timeout: None,
        })
    }

    /// Applies `timeout` to every request.
    pub fn timeout(self, timeout: Duration) -> Self {
        HttpTransport {
            timeout: Some(timeout),
            ..self
        }
    }

    pub fn host(&self) -> &Url {
        &self.host
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    fn url(&self, path: &str) -> Result<Url> {
        let base = self.host.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{}{}", base, path))?)
    }

    async fn send_signed(&self, request: &ApiRequest, url: Url) -> Result<reqwest::Response> {
        let params = OAuthParameters::new().version(true);
        let client = self
            .client
            .clone()
            .oauth1_with_params(&self.credentials, params);
        let mut builder = client.request_with_params(request.method.clone(), url, &request.params);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(builder.send().await?)
    }

    async fn send_anonymous(&self, request: &ApiRequest, url: Url) -> Result<reqwest::Response> {
        let mut builder = self.anonymous.request(request.method.clone(), url);
        builder = if request.method == Method::GET {
            builder.query(&request.params)
        } else {
            builder.form(&request.params)
        };
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(builder.send().await?)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<Vec<u8>> {
        let url = self.url(&request.path)?;
        log::debug!(
            "{} {} ({:?}, {} parameters)",
            request.method,
            request.path,
            request.auth,
            request.params.len()
        );

        let response = match request.auth {
            Auth::Signed => self.send_signed(&request, url).await?,
            Auth::Anonymous => self.send_anonymous(&request, url).await?,
        };
        let status = response.status();
        let body = response.bytes().await?;
        log::trace!(
            "{} {} answered {} with {} bytes",
            request.method,
            request.path,
            status,
            body.len()
        );

        Ok(body.to_vec())
    }
}
