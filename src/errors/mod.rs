/// Error handling for the inspector
///
/// Every failure collapses into one of three classes, each rendered with its
/// own prefix by `inspector::report::write_failure`.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InspectorError {
    /// Transport failure or non-success HTTP status
    #[error("{0}")] Request(String),

    /// Body is not valid JSON; keeps the raw body for the preview
    #[error("{detail}")] Parse {
        detail: String,
        raw_body: String,
    },

    /// Anything else, e.g. the summary could not be written
    #[error("{0}")] Generic(String),
}

pub type InspectorResult<T> = std::result::Result<T, InspectorError>;

impl InspectorError {
    /// Build a parse error from a decoder failure and the body it rejected
    pub fn parse(err: serde_json::Error, raw_body: impl Into<String>) -> Self {
        InspectorError::Parse {
            detail: err.to_string(),
            raw_body: raw_body.into(),
        }
    }

    /// Short class name used in log lines
    pub fn kind(&self) -> &'static str {
        match self {
            InspectorError::Request(_) => "request",
            InspectorError::Parse { .. } => "parse",
            InspectorError::Generic(_) => "generic",
        }
    }
}

impl From<reqwest::Error> for InspectorError {
    fn from(err: reqwest::Error) -> Self {
        InspectorError::Request(err.to_string())
    }
}

impl From<std::io::Error> for InspectorError {
    fn from(err: std::io::Error) -> Self {
        InspectorError::Generic(err.to_string())
    }
}
