use std::borrow::Cow;

use crate::{SecretsProvider, OAUTH_KEY_PREFIX};
use http::Method;
use oauth1_request::signer::Signer as OAuthSigner;
use oauth1_request::{HmacSha1, Options};
use url::Url;

const REALM_IDENTIFIER: &str = "realm";

/// Computes the `Authorization` header of a single request.
#[derive(Debug, Clone)]
pub struct Signer<'a, TSecretsProvider>
where
    TSecretsProvider: SecretsProvider,
{
    secrets: &'a TSecretsProvider,
    parameters: OAuthParameters<'a>,
}

impl<'a, TSecretsProvider> Signer<'a, TSecretsProvider>
where
    TSecretsProvider: SecretsProvider,
{
    pub fn new(secrets: &'a TSecretsProvider, parameters: OAuthParameters<'a>) -> Self {
        Signer {
            secrets,
            parameters,
        }
    }

    /// Sign `method url` over `payload`, which is the url query when
    /// `is_url_query` is set and the form-urlencoded body otherwise.
    pub fn generate_signature(
        self,
        method: Method,
        url: Url,
        payload: &str,
        is_url_query: bool,
    ) -> String {
        let (consumer_key, consumer_secret) = self.secrets.get_consumer_key_pair();
        let (token, token_secret) = self.secrets.get_token_option_pair();
        let options = self.parameters.build_options(token);

        // request parameters in ascending order, with a marker where the
        // oauth_* block belongs
        let parsed_payload: Vec<(Cow<str>, Cow<str>)> =
            url::form_urlencoded::parse(payload.as_bytes()).collect();
        let marker = vec![(Cow::from(OAUTH_KEY_PREFIX), Cow::from(""))];
        let mut sorted_query = [parsed_payload, marker].concat();
        sorted_query.sort();

        let mut divided = sorted_query.splitn(2, |(k, _)| k == OAUTH_KEY_PREFIX);
        let query_before_oauth = divided.next().unwrap_or_default();
        let query_after_oauth = divided.next().unwrap_or_default();

        let mut signer = if is_url_query {
            OAuthSigner::with_signature_method(
                HmacSha1,
                method.as_str(),
                url,
                consumer_secret,
                token_secret,
            )
        } else {
            OAuthSigner::form_with_signature_method(
                HmacSha1,
                method.as_str(),
                url,
                consumer_secret,
                token_secret,
            )
        };

        // caller-supplied oauth_* parameters are never signed twice
        for (key, value) in query_before_oauth {
            if !key.starts_with(OAUTH_KEY_PREFIX) {
                signer.parameter(key, value);
            }
        }
        let mut signer = signer.oauth_parameters(consumer_key, &options);
        for (key, value) in query_after_oauth {
            if !key.starts_with(OAUTH_KEY_PREFIX) {
                signer.parameter(key, value);
            }
        }

        let sign = signer.finish().authorization;

        match self.parameters.realm {
            Some(realm) => format!("{},{}=\"{}\"", sign, REALM_IDENTIFIER, realm.as_ref()),
            None => sign,
        }
    }
}

/// The `oauth_*` values that are not derived from the credentials.
///
/// Nonce and timestamp are generated per request unless pinned here.
#[derive(Debug, Clone, Default)]
pub struct OAuthParameters<'a> {
    callback: Option<Cow<'a, str>>,
    nonce: Option<Cow<'a, str>>,
    realm: Option<Cow<'a, str>>,
    timestamp: Option<u64>,
    version: bool,
}

impl<'a> OAuthParameters<'a> {
    pub fn new() -> Self {
        Default::default()
    }

    /// set the oauth_callback value
    pub fn callback<T>(self, callback: T) -> Self
    where
        T: Into<Cow<'a, str>>,
    {
        OAuthParameters {
            callback: Some(callback.into()),
            ..self
        }
    }

    /// set the oauth_nonce value
    pub fn nonce<T>(self, nonce: T) -> Self
    where
        T: Into<Cow<'a, str>>,
    {
        OAuthParameters {
            nonce: Some(nonce.into()),
            ..self
        }
    }

    /// set the realm value
    pub fn realm<T>(self, realm: T) -> Self
    where
        T: Into<Cow<'a, str>>,
    {
        OAuthParameters {
            realm: Some(realm.into()),
            ..self
        }
    }

    /// set the oauth_timestamp value
    pub fn timestamp<T>(self, timestamp: T) -> Self
    where
        T: Into<u64>,
    {
        OAuthParameters {
            timestamp: Some(timestamp.into()),
            ..self
        }
    }

    /// When `true`, `oauth_version="1.0"` is sent and signed.
    /// Otherwise it is left out, which OAuth 1.0a also allows.
    pub fn version<T>(self, version: T) -> Self
    where
        T: Into<bool>,
    {
        OAuthParameters {
            version: version.into(),
            ..self
        }
    }

    fn build_options(&'a self, token: Option<&'a str>) -> Options<'a> {
        let mut opt = Options::new();

        // NOTE: items must be added by alphabetical order
        if let Some(ref callback) = self.callback {
            opt.callback(callback.as_ref());
        }
        if let Some(ref nonce) = self.nonce {
            opt.nonce(nonce.as_ref());
        }
        if let Some(timestamp) = self.timestamp {
            opt.timestamp(timestamp);
        }
        if let Some(token) = token {
            opt.token(token);
        }
        opt.version(self.version);

        opt
    }
}
