//! Enumeration types for the hostel occupancy registry
//!
//! This module contains the room type and room status enumerations used as
//! allocation keys and report values throughout the system.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Types of rooms available for allocation
///
/// The room type is the sole allocation-matching key: an allocation request
/// names a type and the first free room of that type wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    /// Air-conditioned room
    #[serde(rename = "AC")]
    Ac,
    /// Non-air-conditioned room
    #[serde(rename = "NON-AC")]
    NonAc,
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomType::Ac => write!(f, "AC"),
            RoomType::NonAc => write!(f, "NON-AC"),
        }
    }
}

impl FromStr for RoomType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ac" => Ok(RoomType::Ac),
            "non-ac" | "nonac" | "non ac" => Ok(RoomType::NonAc),
            _ => Err(format!("Unknown room type: {}", s)),
        }
    }
}

/// Occupancy status of a room
///
/// A room is either occupied by exactly one allocation or empty; there is no
/// other state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomStatus {
    /// The room currently holds an allocation
    Occupied,
    /// The room is free and eligible for allocation
    Empty,
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomStatus::Occupied => write!(f, "Occupied"),
            RoomStatus::Empty => write!(f, "Empty"),
        }
    }
}

impl FromStr for RoomStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "occupied" => Ok(RoomStatus::Occupied),
            "empty" | "free" | "vacant" => Ok(RoomStatus::Empty),
            _ => Err(format!("Unknown room status: {}", s)),
        }
    }
}
