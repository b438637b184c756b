//! Domain Entities

mod room;

pub use room::Room;
