use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid server url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP error! status: {}", .status.as_u16())]
    Server {
        status: StatusCode,
        detail: Option<String>,
    },
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Server { status, .. } => Some(*status),
            Self::Transport(err) => err.status(),
            _ => None,
        }
    }

    /// Server-provided detail for a non-2xx response.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Server { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// The error text followed by the server detail, when the backend sent one.
    pub fn with_detail(&self) -> String {
        match self.detail() {
            Some(detail) => format!("{self}, message: {detail}"),
            None => self.to_string(),
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
