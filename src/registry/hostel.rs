//! In-memory occupancy registry
//!
//! This module contains the HostelRegistry: a flat, insertion-ordered room
//! collection with a number index, seeded once from a layout. Allocation is
//! strictly first-match in seed order — no randomization and no balancing
//! across floors or buildings.

use crate::error::HostelResult;
use crate::registry::layout::HostelLayout;
use crate::registry::room::Room;
use crate::store::OccupancyStore;
use crate::types::{HostelConfig, RoomNumber, RoomStatus, RoomType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, warn};

/// One row of the per-room report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRecord {
    /// Room number
    pub number: RoomNumber,
    /// Room type
    pub room_type: RoomType,
    /// Current occupancy status
    pub status: RoomStatus,
}

impl RoomRecord {
    fn from_room(room: &Room) -> Self {
        Self { number: room.number, room_type: room.room_type, status: room.status() }
    }
}

impl fmt::Display for RoomRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Room {} - {} - {}", self.number, self.room_type, self.status)
    }
}

/// Aggregate occupancy counts across the whole registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardCounts {
    /// Total number of rooms
    pub total: usize,
    /// Number of occupied rooms
    pub occupied: usize,
    /// Number of empty rooms
    pub empty: usize,
}

impl fmt::Display for DashboardCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total Rooms: {}\nOccupied Rooms: {}\nEmpty Rooms: {}",
            self.total, self.occupied, self.empty
        )
    }
}

/// In-memory room registry
///
/// Rooms live in a single flat vector in seed order (buildings, then floors,
/// then rooms); each room carries its building and floor as tags. A number
/// index gives direct lookup for deallocation.
#[derive(Debug, Clone)]
pub struct HostelRegistry {
    rooms: Vec<Room>,
    number_index: HashMap<RoomNumber, usize>,
}

impl HostelRegistry {
    /// Build a registry from a validated seed layout
    ///
    /// Flattening preserves the layout's buildings-then-floors-then-rooms
    /// order, which is the traversal order every operation uses.
    pub fn from_layout(layout: &HostelLayout) -> HostelResult<Self> {
        layout.validate()?;

        let mut rooms = Vec::with_capacity(layout.room_count());
        for building in &layout.buildings {
            for floor in &building.floors {
                for &(number, room_type) in &floor.rooms {
                    rooms.push(Room::new(number, building.name.clone(), floor.index, room_type));
                }
            }
        }

        let number_index =
            rooms.iter().enumerate().map(|(idx, room)| (room.number, idx)).collect();

        debug!(rooms = rooms.len(), "registry seeded from layout");
        Ok(Self { rooms, number_index })
    }

    /// Build a registry from configuration using the canonical alternating layout
    pub fn from_config(config: &HostelConfig) -> HostelResult<Self> {
        Self::from_layout(&HostelLayout::alternating(config))
    }

    /// Allocate the first free room of the requested type
    ///
    /// Scans rooms in seed order and flips the first matching free room to
    /// occupied. Returns `None` when no room of the type is free, in which
    /// case no flag changes.
    pub fn allocate(&mut self, room_type: RoomType) -> Option<RoomRecord> {
        let room = self
            .rooms
            .iter_mut()
            .find(|room| room.room_type == room_type && room.is_free())?;

        room.allocate();
        debug!(room = %room.number, %room_type, "room allocated");
        Some(RoomRecord::from_room(room))
    }

    /// Mark the room with the given number free
    ///
    /// Unknown numbers are a no-op. Any room number can be freed; there is no
    /// record of who allocated it.
    pub fn deallocate(&mut self, number: RoomNumber) -> bool {
        match self.number_index.get(&number) {
            Some(&idx) => {
                self.rooms[idx].vacate();
                debug!(room = %number, "room deallocated");
                true
            }
            None => {
                warn!(room = %number, "deallocate ignored: no such room");
                false
            }
        }
    }

    /// Free a room, then allocate the first free room of a new type
    ///
    /// The vacated room stays free even when no room of the new type is
    /// available — the already-vacated state is not rolled back.
    pub fn reallocate(&mut self, current: RoomNumber, new_type: RoomType) -> Option<RoomRecord> {
        self.deallocate(current);
        self.allocate(new_type)
    }

    /// One record per room, in seed order
    pub fn report(&self) -> Vec<RoomRecord> {
        self.rooms.iter().map(RoomRecord::from_room).collect()
    }

    /// One record per room matching the status filter, in seed order
    ///
    /// `None` means no filter and is equivalent to [`Self::report`].
    pub fn report_by_status(&self, status: Option<RoomStatus>) -> Vec<RoomRecord> {
        self.rooms
            .iter()
            .filter(|room| status.map_or(true, |s| room.status() == s))
            .map(RoomRecord::from_room)
            .collect()
    }

    /// Aggregate total/occupied/empty counts
    pub fn dashboard(&self) -> DashboardCounts {
        let total = self.rooms.len();
        let occupied = self.rooms.iter().filter(|room| room.occupied).count();
        DashboardCounts { total, occupied, empty: total - occupied }
    }

    /// Number of rooms in the registry
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Look up a room by number
    pub fn get_room(&self, number: RoomNumber) -> Option<&Room> {
        self.number_index.get(&number).map(|&idx| &self.rooms[idx])
    }

    /// All rooms in seed order
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }
}

impl OccupancyStore for HostelRegistry {
    fn allocate(&mut self, room_type: RoomType) -> HostelResult<Option<RoomRecord>> {
        Ok(HostelRegistry::allocate(self, room_type))
    }

    fn deallocate(&mut self, number: RoomNumber) -> HostelResult<bool> {
        Ok(HostelRegistry::deallocate(self, number))
    }

    fn reallocate(
        &mut self,
        current: RoomNumber,
        new_type: RoomType,
    ) -> HostelResult<Option<RoomRecord>> {
        Ok(HostelRegistry::reallocate(self, current, new_type))
    }

    fn report_by_status(&mut self, status: Option<RoomStatus>) -> HostelResult<Vec<RoomRecord>> {
        Ok(HostelRegistry::report_by_status(self, status))
    }

    fn dashboard(&mut self) -> HostelResult<DashboardCounts> {
        Ok(HostelRegistry::dashboard(self))
    }
}
