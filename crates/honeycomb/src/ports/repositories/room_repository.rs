//! Room Repository Port
//!
//! Abstract interface for Room persistence operations.

use async_trait::async_trait;

use crate::domain::{errors::RoomError, Room};

/// Repository interface for Room entities
///
/// The store is assumed durable and strongly consistent on a single node;
/// concurrent-update semantics and room-number uniqueness live entirely
/// behind this trait. No ordering is guaranteed for `find_all` and
/// `find_by_floor` beyond what the store naturally returns.
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Find all Rooms
    async fn find_all(&self) -> Result<Vec<Room>, RoomError>;

    /// Find a Room by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<Room>, RoomError>;

    /// Find a Room by its room number (exact match)
    async fn find_by_room_number(&self, room_number: &str) -> Result<Option<Room>, RoomError>;

    /// Find all Rooms on a floor
    async fn find_by_floor(&self, floor: &str) -> Result<Vec<Room>, RoomError>;

    /// Save a Room: insert when the id is unassigned, full update otherwise
    async fn save(&self, room: &Room) -> Result<Room, RoomError>;
}
