use std::{fmt, time::Duration};

use garde::Validate;
use serde::{Deserialize, Deserializer};
use url::Url;

use crate::{Credentials, Error, Result};

/// Host of the public API.
pub const DEFAULT_HOST: &str = "https://api.tumblr.com";

/// Everything needed to build a [`TumblrClient`](crate::TumblrClient).
///
/// Usually deserialized from the embedding application's own configuration:
///
/// ```toml
/// consumer_key = "..."
/// consumer_secret = "..."
/// oauth_token = "..."
/// oauth_secret = "..."
/// callback_url = "https://example.com/tumblr/callback"
/// timeout_secs = 2.5
/// ```
#[derive(Clone, Deserialize, Validate)]
pub struct ClientConfig {
    #[garde(length(min = 1))]
    pub consumer_key: String,

    #[garde(length(min = 1))]
    pub consumer_secret: String,

    #[garde(length(min = 1))]
    pub oauth_token: String,

    #[garde(length(min = 1))]
    pub oauth_secret: String,

    /// Callback registered for the application. Carried for the embedding
    /// application; requests are signed without it.
    #[serde(default)]
    #[garde(custom(is_optional_url))]
    pub callback_url: Option<String>,

    #[serde(default = "default_host")]
    #[garde(custom(is_base_url))]
    pub host: String,

    /// Per-request timeout, `timeout_secs` in TOML (fractions allowed).
    #[serde(default, rename = "timeout_secs", deserialize_with = "seconds")]
    #[garde(custom(non_zero_timeout))]
    pub timeout: Option<Duration>,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

impl ClientConfig {
    pub fn new<A, B, C, D>(consumer_key: A, consumer_secret: B, oauth_token: C, oauth_secret: D) -> Self
    where
        A: Into<String>,
        B: Into<String>,
        C: Into<String>,
        D: Into<String>,
    {
        ClientConfig {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            oauth_token: oauth_token.into(),
            oauth_secret: oauth_secret.into(),
            callback_url: None,
            host: default_host(),
            timeout: None,
        }
    }

    pub fn host<T: Into<String>>(self, host: T) -> Self {
        ClientConfig {
            host: host.into(),
            ..self
        }
    }

    pub fn callback_url<T: Into<String>>(self, callback_url: T) -> Self {
        ClientConfig {
            callback_url: Some(callback_url.into()),
            ..self
        }
    }

    pub fn timeout(self, timeout: Duration) -> Self {
        ClientConfig {
            timeout: Some(timeout),
            ..self
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<ClientConfig> {
        let config: ClientConfig =
            toml::from_str(raw).map_err(|err| Error::Config(err.to_string()))?;
        config.check()?;
        Ok(config)
    }

    pub fn check(&self) -> Result<()> {
        self.validate(&())
            .map_err(|report| Error::Config(report.to_string()))
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.consumer_key.as_str(), self.consumer_secret.as_str())
            .token(self.oauth_token.as_str(), self.oauth_secret.as_str())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"<redacted>")
            .field("oauth_token", &self.oauth_token)
            .field("oauth_secret", &"<redacted>")
            .field("callback_url", &self.callback_url)
            .field("host", &self.host)
            .field("timeout", &self.timeout)
            .finish()
    }
}

// garde hands validators a reference to the field's own type
#[allow(clippy::ptr_arg)]
fn is_base_url(value: &String, _: &()) -> garde::Result {
    match Url::parse(value) {
        Ok(url) if !url.cannot_be_a_base() => Ok(()),
        Ok(_) => Err(garde::Error::new(
            "url should be base, e.g. https://api.tumblr.com",
        )),
        Err(err) => Err(garde::Error::new(format!("invalid url: {}", err))),
    }
}

fn is_optional_url(value: &Option<String>, _: &()) -> garde::Result {
    match value {
        Some(url) => Url::parse(url)
            .map(|_| ())
            .map_err(|err| garde::Error::new(format!("invalid url: {}", err))),
        None => Ok(()),
    }
}

fn non_zero_timeout(value: &Option<Duration>, _: &()) -> garde::Result {
    match value {
        Some(timeout) if timeout.is_zero() => Err(garde::Error::new("value can not be zero")),
        _ => Ok(()),
    }
}

fn seconds<'de, D>(deserializer: D) -> std::result::Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<f64>::deserialize(deserializer)? {
        Some(secs) => Duration::try_from_secs_f64(secs)
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}
