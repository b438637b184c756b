//! Room - Bookable Hotel Room
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Serialize};

/// A bookable hotel room.
///
/// The id is assigned by the store on first save and is immutable afterwards;
/// `0` marks a room that has not been persisted yet. The room number is a
/// secondary lookup key whose uniqueness is enforced by the store, not here.
/// The domain does not guarantee that every stored room number is well-formed;
/// validation only happens on lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: i64,
    pub room_number: String,
    pub weekday_price: f64,
    pub weekend_price: f64,
    pub room_type: String,
    pub floor: String,
}

impl Room {
    /// Create a new, not-yet-persisted Room (id unassigned)
    pub fn new(
        room_number: String,
        weekday_price: f64,
        weekend_price: f64,
        room_type: String,
        floor: String,
    ) -> Self {
        Self {
            id: 0,
            room_number,
            weekday_price,
            weekend_price,
            room_type,
            floor,
        }
    }

    /// Whether the store has assigned an id yet
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}
