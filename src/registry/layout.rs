//! Seed layout descriptions
//!
//! The hostel is described for seeding as buildings containing floors
//! containing rooms. The running registry flattens this into a single tagged
//! room collection; the nested shape exists only here, as data handed to the
//! registry once at startup.

use crate::error::{HostelError, HostelResult};
use crate::types::{HostelConfig, RoomNumber, RoomType};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A floor's worth of seed rooms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorPlan {
    /// Floor index within the building
    pub index: u32,
    /// Rooms on this floor, in seed order
    pub rooms: Vec<(RoomNumber, RoomType)>,
}

impl FloorPlan {
    /// Create a floor plan
    pub fn new(index: u32, rooms: Vec<(RoomNumber, RoomType)>) -> Self {
        Self { index, rooms }
    }
}

/// A building's worth of seed floors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildingPlan {
    /// Human-readable building name
    pub name: String,
    /// Floors in this building, in seed order
    pub floors: Vec<FloorPlan>,
}

impl BuildingPlan {
    /// Create a building plan
    pub fn new(name: impl Into<String>, floors: Vec<FloorPlan>) -> Self {
        Self { name: name.into(), floors }
    }

    /// Total number of rooms across all floors
    pub fn room_count(&self) -> usize {
        self.floors.iter().map(|f| f.rooms.len()).sum()
    }
}

/// The complete seed layout for a hostel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostelLayout {
    /// Buildings in seed order
    pub buildings: Vec<BuildingPlan>,
}

impl HostelLayout {
    /// Create a layout from building plans
    pub fn new(buildings: Vec<BuildingPlan>) -> Self {
        Self { buildings }
    }

    /// Build the canonical alternating layout from configuration
    ///
    /// Rooms are numbered 1..=room_count; odd numbers are NON-AC and even
    /// numbers are AC. Rooms are grouped into floors of
    /// `config.rooms_per_floor` under a single building.
    pub fn alternating(config: &HostelConfig) -> Self {
        let mut floors = Vec::new();
        let mut current: Vec<(RoomNumber, RoomType)> = Vec::new();
        let mut floor_index = 0;

        for number in 1..=config.room_count as u32 {
            let room_type = if number % 2 == 0 { RoomType::Ac } else { RoomType::NonAc };
            current.push((RoomNumber::new(number), room_type));

            if current.len() == config.rooms_per_floor {
                floors.push(FloorPlan::new(floor_index, std::mem::take(&mut current)));
                floor_index += 1;
            }
        }
        if !current.is_empty() {
            floors.push(FloorPlan::new(floor_index, current));
        }

        Self::new(vec![BuildingPlan::new(config.building_name.clone(), floors)])
    }

    /// Total number of rooms across all buildings
    pub fn room_count(&self) -> usize {
        self.buildings.iter().map(|b| b.room_count()).sum()
    }

    /// Validate the layout
    ///
    /// A layout must contain at least one room and every room number must be
    /// unique across the whole hostel.
    pub fn validate(&self) -> HostelResult<()> {
        if self.room_count() == 0 {
            return Err(HostelError::layout("layout contains no rooms"));
        }

        let mut seen = HashSet::new();
        for building in &self.buildings {
            for floor in &building.floors {
                for (number, _) in &floor.rooms {
                    if !seen.insert(*number) {
                        return Err(HostelError::layout(format!(
                            "duplicate room number {} in building {}",
                            number, building.name
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}
