use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndicatorError {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse grouping of failures, used for logging and metrics labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The remote could not be reached or answered with a non-success status.
    Transport,
    /// The payload arrived but could not be decoded.
    ParseOrMatch,
    Config,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Transport => "transport",
            FailureKind::ParseOrMatch => "parse",
            FailureKind::Config => "config",
        }
    }
}

impl IndicatorError {
    pub fn kind(&self) -> FailureKind {
        match self {
            IndicatorError::Http(_) | IndicatorError::Status { .. } => FailureKind::Transport,
            IndicatorError::Json(_) => FailureKind::ParseOrMatch,
            IndicatorError::Toml(_) | IndicatorError::Io(_) | IndicatorError::Config(_) => {
                FailureKind::Config
            }
        }
    }
}

impl From<reqwest::Error> for IndicatorError {
    fn from(e: reqwest::Error) -> Self {
        IndicatorError::Http(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, IndicatorError>;
