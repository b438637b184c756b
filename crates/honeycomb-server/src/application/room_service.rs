//! Room Application Service (Use Case)
//!
//! Validates lookup inputs and dispatches to the room repository. This is
//! the only layer with decision logic; the routes above it translate wire
//! requests, the repository below it just executes queries.

use std::sync::Arc;

use honeycomb::{Room, RoomError, RoomRepository};

/// A room number is well-formed when it is non-empty and consists of
/// decimal digits only. No sign, no whitespace, no decimal point.
fn is_well_formed_room_number(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// Application service for Room operations
///
/// Stateless: holds only an immutable handle to its repository. Consistency
/// under concurrent calls (including the update check-then-act race with the
/// caller's existence check) is delegated to the store.
pub struct RoomService<R: RoomRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: RoomRepository + ?Sized> RoomService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Get all rooms, in whatever order the store returns them
    pub async fn list_all(&self) -> Result<Vec<Room>, RoomError> {
        self.repo.find_all().await
    }

    /// Get a room by id; absence is a normal outcome, not a failure
    pub async fn find_room(&self, id: i64) -> Result<Option<Room>, RoomError> {
        self.repo.find_by_id(id).await
    }

    /// Look up a room by its room number.
    ///
    /// The argument is validated before the store is consulted: an absent,
    /// empty, or non-digit value fails with `InvalidRoomNumber`. A
    /// well-formed number with no matching record fails with `RoomNotFound`.
    /// An absent argument is reported as the literal text `null`, matching
    /// the message format clients already depend on.
    pub async fn find_by_room_number(&self, room_number: Option<&str>) -> Result<Room, RoomError> {
        let number = match room_number {
            Some(n) if is_well_formed_room_number(n) => n,
            Some(n) => return Err(RoomError::InvalidRoomNumber(n.to_string())),
            None => return Err(RoomError::InvalidRoomNumber("null".to_string())),
        };

        self.repo
            .find_by_room_number(number)
            .await?
            .ok_or_else(|| RoomError::RoomNotFound(number.to_string()))
    }

    /// Get all rooms on a floor. No validation; the result may be empty and
    /// keeps the store's relative order.
    pub async fn find_by_floor(&self, floor: &str) -> Result<Vec<Room>, RoomError> {
        self.repo.find_by_floor(floor).await
    }

    /// Persist a new room. Any caller-supplied id is discarded so the
    /// store's assignment policy wins.
    pub async fn add_room(&self, room: Room) -> Result<Room, RoomError> {
        let room = Room { id: 0, ..room };
        let saved = self.repo.save(&room).await?;

        tracing::info!("Created room {} (id {})", saved.room_number, saved.id);

        Ok(saved)
    }

    /// Full-replace save of an existing room.
    ///
    /// No existence check and no concurrency check happen here; the caller
    /// must have resolved the target id (from the request path) and verified
    /// it exists before calling.
    pub async fn update_room(&self, room: Room) -> Result<Room, RoomError> {
        let saved = self.repo.save(&room).await?;

        tracing::info!("Updated room {} (id {})", saved.room_number, saved.id);

        Ok(saved)
    }
}
