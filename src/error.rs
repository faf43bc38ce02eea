use thiserror::Error;

pub type Result<T> = std::result::Result<T, PageError>;

/// Failures of a single page operation. Each one is confined to the display
/// region of the operation that produced it.
#[derive(Debug, Error)]
pub enum PageError {
    /// The request could not be sent, or no response arrived in time
    #[error("could not reach the restaurant backend: {0}")]
    Network(String),

    /// The response body does not match the expected shape
    #[error("unexpected response from {endpoint}: {message}")]
    Parse { endpoint: String, message: String },

    /// The backend answered with a non-success status and its own message
    #[error("{endpoint} answered {status}: {message}")]
    Rejected {
        endpoint: String,
        status: u16,
        message: String,
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl PageError {
    pub fn parse(endpoint: &str, err: impl std::fmt::Display) -> Self {
        Self::Parse {
            endpoint: endpoint.to_string(),
            message: err.to_string(),
        }
    }

    pub fn rejected(endpoint: &str, status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            endpoint: endpoint.to_string(),
            status,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for PageError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            let endpoint = err
                .url()
                .map(|url| url.path().to_string())
                .unwrap_or_default();
            return Self::parse(&endpoint, err);
        }
        Self::Network(err.to_string())
    }
}
