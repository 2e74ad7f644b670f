//! In-memory occupancy tracking
//!
//! This module contains the in-memory variant of the room store: the Room
//! state machine, the seed layout descriptions, and the flat registry that
//! every operation traverses in seed order.
//!
//! # Usage Example
//!
//! ```rust
//! use hostel_occupancy::registry::HostelRegistry;
//! use hostel_occupancy::types::{HostelConfig, RoomType};
//!
//! let mut registry = HostelRegistry::from_config(&HostelConfig::default()).unwrap();
//!
//! // First free AC room in seed order is room 2
//! let room = registry.allocate(RoomType::Ac).unwrap();
//! assert_eq!(room.number.value(), 2);
//!
//! registry.deallocate(room.number);
//! assert_eq!(registry.dashboard().occupied, 0);
//! ```

pub mod hostel;
pub mod layout;
pub mod room;

// Re-export all public types for convenience
pub use hostel::{DashboardCounts, HostelRegistry, RoomRecord};
pub use layout::{BuildingPlan, FloorPlan, HostelLayout};
pub use room::Room;
