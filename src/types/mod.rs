//! Core types for the hostel occupancy registry
//!
//! This module contains the shared enumerations, the room number identifier,
//! and the configuration structures used across the registry, the table-backed
//! store, and the CLI.

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::{CliArgs, ConfigError, ConfigValidationError, HostelCli, HostelConfig};
pub use enums::{RoomStatus, RoomType};
pub use identifiers::RoomNumber;
