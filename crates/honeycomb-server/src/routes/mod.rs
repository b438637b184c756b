//! Honeycomb API Routes
//!
//! - /rooms - Room CRUD
//! - /rooms/search/byRoomNumber - validated room-number lookup
//! - /rooms/search/byFloor - floor lookup

pub mod room;
pub mod swagger;
