//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! repositories and the transport layer.

mod room_service;

pub use room_service::RoomService;
