use crate::parser;

/// Crate Error type
#[derive(Debug)]
pub enum Error {
    /// The request never completed
    Transport(String),
    /// The server answered with a non-success status
    Status(u16),
    /// The success body did not carry a usable `result`
    Body(String),
    Pest(Box<pest::error::Error<parser::Rule>>),
    Sheet(String),
    Other(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "request failed: {e}"),
            Self::Status(status) => write!(f, "server answered with status {status}"),
            Self::Body(e) => write!(f, "malformed roll body: {e}"),
            Self::Pest(e) => write!(f, "{e}"),
            Self::Sheet(e) => write!(f, "sheet error: {e}"),
            Self::Other(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<pest::error::Error<parser::Rule>> for Error {
    fn from(value: pest::error::Error<parser::Rule>) -> Self {
        Self::Pest(Box::new(value))
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::Body(value.to_string())
    }
}

impl From<ron::error::SpannedError> for Error {
    fn from(value: ron::error::SpannedError) -> Self {
        Self::Sheet(value.to_string())
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Self::Other(value.to_string())
    }
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Self::Other(value)
    }
}

/// Crate Result type
pub type Result<T> = std::result::Result<T, Error>;
