use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConjError {
    #[error("Geometry error: {0}")]
    Geometry(String),

    #[error("Tessellation error: {0}")]
    Tessellation(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

pub type Result<T> = std::result::Result<T, ConjError>;
