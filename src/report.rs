//! Report assembly and JSON persistence.
//!
//! The report mirrors the structure capacity planners consume downstream:
//! run metadata, static per-zone configuration, and the 24 hourly entries.
//! Zone ids serialize as string keys in the JSON output.

use std::collections::BTreeMap;
use std::fs::File;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::campus::Campus;
use crate::sim::engine::DistributionMode;
use crate::sim::runner::{peak_hour, HourlyRecord};
use crate::sim::DEVICES_PER_CLIENT;

/// Campus the roster describes.
pub const CAMPUS_NAME: &str = "Texas A&M University";

/// Calendar date the simulated day represents.
pub const SIMULATION_DATE: &str = "2026-02-03T00:00:00";

/// Fixed descriptors of the deployed wireless infrastructure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Infrastructure {
    pub access_points: String,
    pub edge_appliance: String,
    pub switches: String,
    pub data_centers: u32,
}

impl Default for Infrastructure {
    fn default() -> Self {
        Infrastructure {
            access_points: "Juniper AP47".to_string(),
            edge_appliance: "Mist Edge X6".to_string(),
            switches: "Juniper EX-4400-48MP".to_string(),
            data_centers: 2,
        }
    }
}

/// Run-level metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub campus: String,
    pub simulation_date: String,
    pub total_clients: u32,
    pub total_devices: u64,
    pub total_aps: u32,
    pub zones: usize,
    pub buildings: usize,
    pub full_load: bool,
    pub infrastructure: Infrastructure,
}

/// Static per-zone configuration echoed into the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneInfoEntry {
    pub buildings: usize,
    pub aps: u32,
    pub allocated_clients: u32,
}

/// The complete simulation output: metadata, zone configuration, and one
/// entry per simulated hour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub metadata: Metadata,
    pub zone_info: BTreeMap<u32, ZoneInfoEntry>,
    pub hourly_stats: Vec<HourlyRecord>,
}

impl SimulationReport {
    /// Assembles the report from a campus configuration and the hourly
    /// records the simulation produced.
    pub fn new(campus: &Campus, mode: DistributionMode, hourly_stats: Vec<HourlyRecord>) -> Self {
        let zone_info = campus
            .zones()
            .iter()
            .map(|(&zone, info)| {
                (
                    zone,
                    ZoneInfoEntry {
                        buildings: info.building_count,
                        aps: info.ap_count,
                        allocated_clients: info.client_quota,
                    },
                )
            })
            .collect();

        SimulationReport {
            metadata: Metadata {
                campus: CAMPUS_NAME.to_string(),
                simulation_date: SIMULATION_DATE.to_string(),
                total_clients: campus.client_target(),
                total_devices: u64::from(campus.client_target()) * DEVICES_PER_CLIENT,
                total_aps: campus.total_aps(),
                zones: campus.zones().len(),
                buildings: campus.buildings().len(),
                full_load: mode.is_full_load(),
                infrastructure: Infrastructure::default(),
            },
            zone_info,
            hourly_stats,
        }
    }

    /// Renders the report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Writes the report as pretty-printed JSON.
    ///
    /// Write failures propagate to the caller unmodified; a partially
    /// written file is not cleaned up.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self).map_err(io::Error::from)
    }

    /// The hourly record with the most active clients, earliest hour on a
    /// tie.
    pub fn peak(&self) -> Option<&HourlyRecord> {
        peak_hour(&self.hourly_stats)
    }

    /// Prints the peak-activity summary to stdout.
    pub fn print_summary(&self) {
        println!("{}", "=".repeat(60));
        println!("Simulation complete");
        println!("{}", "=".repeat(60));

        if let Some(peak) = self.peak() {
            println!("Peak activity:");
            println!("  Time: {}", peak.timestamp);
            println!("  Active clients: {}", peak.campus_total.active_clients);
            println!("  Total devices: {}", peak.campus_total.total_devices);
            println!(
                "  Avg WAP load: {:.1} devices/AP",
                peak.campus_total.avg_zone_load
            );
            println!(
                "  Max WAP load: {:.1} devices/AP",
                peak.campus_total.max_zone_load
            );
        }
    }
}
