use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("request failed : {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("response could not be decoded : {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid request url : {0}")]
    Url(#[from] url::ParseError),
    /// The API answered, but `meta.status` was not the expected one.
    /// Displays as the API's `meta.msg`.
    #[error("{msg}")]
    Api { status: u16, msg: String },
    #[error("unknown option `{key}` for {endpoint}")]
    UnknownOption { endpoint: &'static str, key: String },
    #[error("missing required option `{key}` for {endpoint}")]
    MissingOption {
        endpoint: &'static str,
        key: &'static str,
    },
    #[error("unknown post type : {0}")]
    UnknownPostType(String),
    #[error("invalid avatar size {0}, must be one of 16, 24, 30, 40, 48, 64, 96, 128, 512")]
    InvalidAvatarSize(u32),
    #[error("invalid configuration : {0}")]
    Config(String),
}

impl Error {
    /// Returns the `meta.status` carried by an API-level failure.
    pub fn api_status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
