use std::fmt;

pub trait SecretsProvider {
    fn get_consumer_key_pair(&self) -> (&str, &str);

    fn get_token_pair_option(&self) -> Option<(&str, &str)>;

    fn get_token_option_pair(&self) -> (Option<&str>, Option<&str>) {
        self.get_token_pair_option()
            .map(|s| (Some(s.0), Some(s.1)))
            .unwrap_or((None, None))
    }
}

/// Consumer key pair of the application, optionally with the user's token pair.
///
/// Without a token pair, requests are signed with the consumer secret alone.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    consumer_key: String,
    consumer_secret: String,
    token: Option<(String, String)>,
}

impl Credentials {
    pub fn new<TKey, TSecret>(consumer_key: TKey, consumer_secret: TSecret) -> Self
    where
        TKey: Into<String>,
        TSecret: Into<String>,
    {
        Credentials {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            token: None,
        }
    }

    pub fn token<TKey, TSecret>(self, token: TKey, token_secret: TSecret) -> Self
    where
        TKey: Into<String>,
        TSecret: Into<String>,
    {
        Credentials {
            token: Some((token.into(), token_secret.into())),
            ..self
        }
    }

    /// The consumer key doubles as the `api_key` parameter of public endpoints.
    pub fn consumer_key(&self) -> &str {
        &self.consumer_key
    }
}

impl SecretsProvider for Credentials {
    fn get_consumer_key_pair(&self) -> (&str, &str) {
        (&self.consumer_key, &self.consumer_secret)
    }

    fn get_token_pair_option(&self) -> Option<(&str, &str)> {
        self.token.as_ref().map(|(t, s)| (t.as_str(), s.as_str()))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"<redacted>")
            .field("token", &self.token.as_ref().map(|(t, _)| t))
            .field("token_secret", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
