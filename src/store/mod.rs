//! Occupancy store contract and the table-backed variant
//!
//! The two persistence variants — the in-memory registry and the SQLite
//! table — expose the same five operations behind one trait, so the command
//! layer and tests can drive either interchangeably. The in-memory variant
//! never fails; the fallible signatures exist for the query-backed one.

pub mod sqlite;

use crate::error::HostelResult;
use crate::registry::{DashboardCounts, RoomRecord};
use crate::types::{RoomNumber, RoomStatus, RoomType};

pub use sqlite::SqliteRoomStore;

/// The operation contract shared by every room store variant
pub trait OccupancyStore {
    /// Allocate the first free room of the requested type
    ///
    /// `Ok(None)` means no room of the type is free; no state changes in
    /// that case.
    fn allocate(&mut self, room_type: RoomType) -> HostelResult<Option<RoomRecord>>;

    /// Mark the room with the given number free
    ///
    /// Unknown numbers are a no-op; the return value says whether a room
    /// with that number existed.
    fn deallocate(&mut self, number: RoomNumber) -> HostelResult<bool>;

    /// Free a room, then allocate the first free room of a new type
    ///
    /// The vacated room stays free even when the new allocation fails.
    fn reallocate(
        &mut self,
        current: RoomNumber,
        new_type: RoomType,
    ) -> HostelResult<Option<RoomRecord>>;

    /// One record per room matching the status filter, in seed order
    ///
    /// `None` means no filter.
    fn report_by_status(&mut self, status: Option<RoomStatus>)
        -> HostelResult<Vec<RoomRecord>>;

    /// Aggregate total/occupied/empty counts
    fn dashboard(&mut self) -> HostelResult<DashboardCounts>;

    /// One record per room, in seed order
    fn report(&mut self) -> HostelResult<Vec<RoomRecord>> {
        self.report_by_status(None)
    }
}
