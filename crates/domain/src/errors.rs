use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Invalid hostname: {0}")]
    InvalidHostname(String),

    #[error("CLI session error: {0}")]
    Session(String),
}
