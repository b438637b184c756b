//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer
//! interacts with external systems (repositories).

pub mod repositories;

pub use repositories::RoomRepository;
