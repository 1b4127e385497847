use std::error::Error;
use std::fmt;

/// Errors raised while asking the backend for an answer
#[derive(Debug)]
pub enum AskError {
    EmptyQuestion,
    MissingElement(String),
    Request(reqwest::Error),
    Decode(serde_json::Error),
    NullBody,
    Render(std::io::Error),
}

impl fmt::Display for AskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyQuestion => write!(f, "question is empty"),
            Self::MissingElement(id) => write!(f, "page element '{id}' not found"),
            Self::Request(err) => write!(f, "answer request failed: {err}"),
            Self::Decode(err) => write!(f, "answer response is not valid JSON: {err}"),
            Self::NullBody => write!(f, "answer response body is null"),
            Self::Render(err) => write!(f, "failed to render answer: {err}"),
        }
    }
}

impl Error for AskError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Request(err) => Some(err),
            Self::Decode(err) => Some(err),
            Self::Render(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AskError {
    fn from(err: reqwest::Error) -> Self {
        AskError::Request(err)
    }
}

impl From<serde_json::Error> for AskError {
    fn from(err: serde_json::Error) -> Self {
        AskError::Decode(err)
    }
}

impl From<std::io::Error> for AskError {
    fn from(err: std::io::Error) -> Self {
        AskError::Render(err)
    }
}

/// Result type for answer requests
pub type AskResult<T> = Result<T, AskError>;
