//! Error types for the dice session.

use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur during a dice session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A roll was requested while another is still pending.
    #[error("a roll is already in progress")]
    RollPending,

    /// A roll was completed without being requested.
    #[error("no roll is pending")]
    NoPendingRoll,

    /// Die count outside the selectable range.
    #[error("invalid die count: {0} (choose 1-6)")]
    InvalidCount(String),

    /// Face position outside the six faces.
    #[error("invalid face position: {0} (choose 1-6)")]
    InvalidPosition(String),

    /// Unknown command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Settings were applied but could not be persisted.
    #[error("{0}; changes kept for this session only")]
    Persistence(#[from] nw_core::CoreError),
}
