//! Immutable per-building configuration records.

use serde::{Deserialize, Serialize};

use crate::sim::occupancy::{BuildingType, OccupancyProfile};
use crate::sim::CLIENTS_PER_AP;

/// A snapshot of one building's identity, zone membership, and capacity.
///
/// Records are created once during configuration load and read-only for the
/// remainder of the run. Capacity is deterministic from the AP count; an AP
/// count of zero is valid and means the building contributes no capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingRecord {
    /// Unique identifier, formatted `Z{zone}B{row:03}`.
    pub id: String,
    /// Display name from the roster.
    pub name: String,
    /// Integer id of the zone this building belongs to.
    pub zone: u32,
    /// Category derived from the name.
    pub building_type: BuildingType,
    /// Installed access points.
    pub ap_count: u32,
    /// Maximum clients the building can host (`ap_count` × clients per AP).
    pub capacity: u32,
    profile: OccupancyProfile,
}

impl BuildingRecord {
    /// Creates a building record, classifying it and deriving its capacity
    /// and occupancy curve from the name and AP count.
    pub fn new(id: String, name: String, zone: u32, ap_count: u32) -> Self {
        let building_type = BuildingType::classify(&name);

        BuildingRecord {
            id,
            name,
            zone,
            building_type,
            ap_count,
            capacity: ap_count * CLIENTS_PER_AP,
            profile: OccupancyProfile::for_type(building_type),
        }
    }

    /// Returns the expected occupancy fraction for a given hour (0-23).
    pub fn occupancy(&self, hour: usize) -> f64 {
        self.profile.fraction(hour)
    }
}
