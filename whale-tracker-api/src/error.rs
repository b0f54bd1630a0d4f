use thiserror::Error;

/// All errors produced while fetching from the whale tracker API.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Transport(String),

    #[error("HTTP error: {status}")]
    Status { status: u16 },

    #[error("JSON parse failed: {0}")]
    Decode(String),

    #[error("API reported failure: {0}")]
    Api(String),
}

/// Coarse classification of a [`FetchError`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FetchErrorKind {
    /// Network failure, non-2xx status or malformed body.
    TransportOrParse,
    /// Well-formed response whose `success` flag was false.
    Application,
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Transport(_) | FetchError::Status { .. } | FetchError::Decode(_) => {
                FetchErrorKind::TransportOrParse
            }
            FetchError::Api(_) => FetchErrorKind::Application,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(value: reqwest::Error) -> Self {
        match value.status() {
            Some(status) => Self::Status {
                status: status.as_u16(),
            },
            None if value.is_decode() => Self::Decode(value.to_string()),
            None => Self::Transport(value.to_string()),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value.to_string())
    }
}

/// Errors raised while assembling configuration from the environment.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid base url {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}
