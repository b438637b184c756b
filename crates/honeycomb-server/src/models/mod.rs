//! Request/Response DTOs

mod room;

pub use room::{RoomRequest, RoomResponse};
