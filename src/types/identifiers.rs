//! Identifier types for the hostel occupancy registry
//!
//! Room identity is the room number, unique within the hostel. The newtype
//! keeps room numbers from being confused with other integers such as floor
//! indices or row counts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Unique identifier for a room within the hostel
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RoomNumber(pub u32);

impl RoomNumber {
    /// Create a room number from a raw integer
    pub fn new(number: u32) -> Self {
        Self(number)
    }

    /// The raw integer value
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RoomNumber {
    type Err = ParseIntError;

    /// Parse a room number from a plausible numeric string
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(Self)
    }
}

impl From<u32> for RoomNumber {
    fn from(number: u32) -> Self {
        Self(number)
    }
}
