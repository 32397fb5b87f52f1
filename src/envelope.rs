use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::{Error, Result};

/// Status part of every API response.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Meta {
    pub status: u16,
    pub msg: String,
}

impl Meta {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    fn into_error(self) -> Error {
        Error::Api {
            status: self.status,
            msg: self.msg,
        }
    }
}

/// The `{meta, response}` wrapper around every API response.
///
/// `response` is kept as an untyped value; its shape depends on the endpoint
/// and is decoded by [`Envelope::decode`].
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Envelope {
    pub meta: Meta,
    // error envelopes may come without a payload
    #[serde(default)]
    pub response: Value,
}

impl Envelope {
    pub fn parse(content: &[u8]) -> Result<Envelope> {
        Ok(serde_json::from_slice(content)?)
    }

    /// Decode `response` into the endpoint's result type.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T> {
        Ok(serde_json::from_value(self.response)?)
    }

    /// Fails with the API message unless `meta.status` is `expected`.
    pub fn check(self, expected: u16) -> Result<Envelope> {
        if self.meta.status == expected {
            Ok(self)
        } else {
            Err(self.meta.into_error())
        }
    }

    /// Fails with the API message unless `meta.status` is 2xx.
    pub fn check_success(self) -> Result<Envelope> {
        if self.meta.is_success() {
            Ok(self)
        } else {
            Err(self.meta.into_error())
        }
    }
}
