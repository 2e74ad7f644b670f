//! Hostel Occupancy Registry
//!
//! A single-process room-occupancy tracker for a hostel: allocate the first
//! free room of a requested type to a student, free rooms again, and report
//! per-room status or aggregate counts.
//!
//! # Overview
//!
//! Two persistence variants sit behind one operation contract
//! ([`store::OccupancyStore`]):
//!
//! - [`registry::HostelRegistry`]: a flat, insertion-ordered in-memory room
//!   collection seeded from a layout description.
//! - [`store::SqliteRoomStore`]: a SQLite `rooms` table driven by direct
//!   synchronous queries, auto-seeded the first time it is empty.
//!
//! Allocation is strictly first-match in seed order; the sole matching key
//! is the room type. A room's occupancy flag is the entire state machine,
//! and who occupies a room is never recorded — the student name is echoed in
//! the confirmation message and then dropped.
//!
//! ## Quick Start
//!
//! ```rust
//! use hostel_occupancy::ops::{execute, Command, Outcome};
//! use hostel_occupancy::registry::HostelRegistry;
//! use hostel_occupancy::types::HostelConfig;
//!
//! let mut store = HostelRegistry::from_config(&HostelConfig::default())?;
//!
//! let outcome = execute(&mut store, Command::Allocate {
//!     student_name: "Alice".to_string(),
//!     room_type: "AC".to_string(),
//! })?;
//! assert_eq!(outcome.to_string(), "Room 2 (AC) allocated to Alice.");
//! # Ok::<(), hostel_occupancy::error::HostelError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: room type/status enums, room numbers, configuration
//! - [`registry`]: the in-memory variant and its seed layouts
//! - [`store`]: the operation contract and the SQLite-backed variant
//! - [`ops`]: command values, validation, and user-facing outcomes
//! - [`account`]: the in-memory create-account/login gate
//! - [`error`]: the shared error type
//! - [`logging`]: tracing subscriber configuration

#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod account;
pub mod error;
pub mod logging;
pub mod ops;
pub mod registry;
pub mod store;
pub mod types;

// Re-export the types most callers need

// Core types and configuration
pub use types::{CliArgs, HostelCli, HostelConfig, RoomNumber, RoomStatus, RoomType};

// Registry and report types
pub use registry::{DashboardCounts, HostelLayout, HostelRegistry, Room, RoomRecord};

// Store contract and the table-backed variant
pub use store::{OccupancyStore, SqliteRoomStore};

// Commands and outcomes
pub use ops::{execute, Command, Outcome};

// Account gate
pub use account::{AccountError, AccountStore};

// Errors and logging
pub use error::{HostelError, HostelResult};
pub use logging::LoggingConfig;
