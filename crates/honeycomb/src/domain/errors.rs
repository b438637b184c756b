//! Domain Errors
//!
//! Error types for room service operations.

use thiserror::Error;

/// Domain layer errors
///
/// The two client-failure variants carry the offending room number and render
/// the exact messages the API has always returned; callers match on the
/// variant, not the text.
#[derive(Debug, Error)]
pub enum RoomError {
    #[error("Room number: {0}, is an invalid room number format.")]
    InvalidRoomNumber(String),

    #[error("Room number: {0}, does not exist.")]
    RoomNotFound(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl RoomError {
    /// True for failures caused by the caller's input rather than the store
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            RoomError::InvalidRoomNumber(_) | RoomError::RoomNotFound(_)
        )
    }
}
