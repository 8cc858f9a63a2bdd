use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid booking request: {0}")]
    InvalidInput(String),

    #[error("Booking conflict: {0}")]
    Conflict(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
