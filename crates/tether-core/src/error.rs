//! Error types for Tether Core.

use thiserror::Error;

/// Result type alias for Tether operations.
pub type Result<T> = std::result::Result<T, TetherError>;

/// Errors that can occur in Tether operations.
#[derive(Error, Debug)]
pub enum TetherError {
    /// No free child ids are left in the pool.
    #[error("pool exhausted: no free child ids available")]
    PoolExhausted,

    /// Child id outside the universe declared at construction.
    #[error("invalid child id: {0}")]
    InvalidId(u32),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl TetherError {
    /// Whether the caller can succeed later by releasing ids.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, TetherError::PoolExhausted)
    }
}
