use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown channel: {0} (expected one of R, G, B, A)")]
    UnknownChannel(String),
}
