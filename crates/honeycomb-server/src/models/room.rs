//! Room DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use honeycomb::Room;

/// Room payload for create and update requests.
///
/// Carries no id: on create the store assigns one, on update the id comes
/// from the request path, never the body.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomRequest {
    pub room_number: String,
    pub weekday_price: f64,
    pub weekend_price: f64,
    pub room_type: String,
    pub floor: String,
}

impl From<RoomRequest> for Room {
    fn from(req: RoomRequest) -> Self {
        Room::new(
            req.room_number,
            req.weekday_price,
            req.weekend_price,
            req.room_type,
            req.floor,
        )
    }
}

/// Room response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub id: i64,
    pub room_number: String,
    pub weekday_price: f64,
    pub weekend_price: f64,
    pub room_type: String,
    pub floor: String,
}

impl From<Room> for RoomResponse {
    fn from(room: Room) -> Self {
        Self {
            id: room.id,
            room_number: room.room_number,
            weekday_price: room.weekday_price,
            weekend_price: room.weekend_price,
            room_type: room.room_type,
            floor: room.floor,
        }
    }
}
