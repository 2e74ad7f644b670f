//! Room state and transitions
//!
//! This module contains the Room struct: a room number, the building/floor
//! tags it was seeded under, its type, and the occupancy flag with its two
//! state transitions. The flag is the entire state machine — a room starts
//! free and only allocate/vacate move it.

use crate::types::{RoomNumber, RoomStatus, RoomType};
use serde::{Deserialize, Serialize};

/// A single room in the hostel
///
/// The occupied flag is true iff the room currently holds exactly one
/// allocation. Who holds it is never recorded: the student name is echoed in
/// the confirmation message and then dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Room number, unique within the hostel
    pub number: RoomNumber,
    /// Name of the building the room was seeded under
    pub building: String,
    /// Floor index within the building
    pub floor: u32,
    /// Room type used as the allocation-matching key
    pub room_type: RoomType,
    /// Whether the room currently holds an allocation
    pub occupied: bool,
}

impl Room {
    /// Create a new free room
    pub fn new(number: RoomNumber, building: String, floor: u32, room_type: RoomType) -> Self {
        Self { number, building, floor, room_type, occupied: false }
    }

    /// Mark the room occupied
    ///
    /// Returns whether the room was free (i.e. whether the flag changed).
    pub fn allocate(&mut self) -> bool {
        let was_free = !self.occupied;
        self.occupied = true;
        was_free
    }

    /// Mark the room free
    ///
    /// Returns whether the room was occupied (i.e. whether the flag changed).
    pub fn vacate(&mut self) -> bool {
        let was_occupied = self.occupied;
        self.occupied = false;
        was_occupied
    }

    /// Whether the room is free and eligible for allocation
    pub fn is_free(&self) -> bool {
        !self.occupied
    }

    /// The room's status as a report value
    pub fn status(&self) -> RoomStatus {
        if self.occupied {
            RoomStatus::Occupied
        } else {
            RoomStatus::Empty
        }
    }
}
