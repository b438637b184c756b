//! Honeycomb Domain Library
//!
//! Core domain types and interfaces for the Honeycomb room service.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Room)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use honeycomb::{Room, RoomError, RoomRepository};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{Room, RoomError};
pub use ports::RoomRepository;
