use thiserror::Error;

/// Fatal conditions only. "Not found" and "no results" are values
/// (`Option` / empty `Vec`), never errors — sparse positioning data is an
/// ordinary outcome callers degrade on, not a fault.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Data load error: {0}")]
    DataLoad(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<String> for DomainError {
    fn from(s: String) -> Self {
        DomainError::DataLoad(s)
    }
}

impl From<&str> for DomainError {
    fn from(s: &str) -> Self {
        DomainError::InvalidInput(s.to_string())
    }
}
