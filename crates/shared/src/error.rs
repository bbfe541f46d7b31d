use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EventError {
    #[error("unknown speech token: {0}")]
    UnknownToken(String),
}
