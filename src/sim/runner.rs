//! 24-hour simulation driver and campus-wide rollups.
//!
//! Each hour is a pure function of the campus configuration and the hour
//! index, so the driver computes all 24 hours in parallel and collects the
//! records back in hour order; nothing is accumulated across hours.

use std::collections::BTreeMap;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::campus::Campus;
use crate::sim::engine::{DistributionMode, LoadEngine, ZoneAggregate};
use crate::sim::HOURS_PER_DAY;

/// Per-zone statistics as they appear in an hourly report entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneStats {
    pub active_clients: u64,
    pub total_devices: u64,
    pub avg_wap_load: f64,
    pub max_wap_load: f64,
    pub buildings_active: u32,
}

impl From<&ZoneAggregate> for ZoneStats {
    fn from(aggregate: &ZoneAggregate) -> Self {
        ZoneStats {
            active_clients: aggregate.active_clients,
            total_devices: aggregate.total_devices,
            avg_wap_load: aggregate.avg_wap_load(),
            max_wap_load: aggregate.max_wap_load(),
            buildings_active: aggregate.buildings_active,
        }
    }
}

/// Campus-wide rollup of one hour: zone sums for counts, the mean of zone
/// average loads, and the maximum of zone maximum loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampusTotals {
    pub active_clients: u64,
    pub total_devices: u64,
    pub avg_zone_load: f64,
    pub max_zone_load: f64,
}

/// One hour of simulated campus activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyRecord {
    /// Hour of day, 0-23.
    pub hour: usize,
    /// Wall-clock label, "00:00" through "23:00".
    pub timestamp: String,
    /// Per-zone statistics, keyed by zone id.
    pub zones: BTreeMap<u32, ZoneStats>,
    /// Campus-wide rollup of the zone statistics.
    pub campus_total: CampusTotals,
}

/// Drives the load engine across a full simulated day.
pub struct DailySimulation<'a> {
    engine: LoadEngine<'a>,
}

impl<'a> DailySimulation<'a> {
    /// Creates a simulation over a campus with a fixed distribution mode.
    pub fn new(campus: &'a Campus, mode: DistributionMode) -> Self {
        DailySimulation {
            engine: LoadEngine::new(campus, mode),
        }
    }

    /// Computes all 24 hourly records.
    ///
    /// Hours are independent, so they run in parallel and are merged back by
    /// hour index, never through a shared accumulator.
    pub fn run(&self) -> Vec<HourlyRecord> {
        (0..HOURS_PER_DAY)
            .into_par_iter()
            .map(|hour| self.simulate_hour(hour))
            .collect()
    }

    /// Computes the record for a single hour.
    fn simulate_hour(&self, hour: usize) -> HourlyRecord {
        let aggregates = self.engine.hourly_stats(hour);
        let zones: BTreeMap<u32, ZoneStats> = aggregates
            .iter()
            .map(|(&zone, aggregate)| (zone, ZoneStats::from(aggregate)))
            .collect();
        let campus_total = rollup(&zones);

        HourlyRecord {
            hour,
            timestamp: format!("{:02}:00", hour),
            zones,
            campus_total,
        }
    }
}

/// Folds per-zone statistics into the campus-wide totals for one hour.
fn rollup(zones: &BTreeMap<u32, ZoneStats>) -> CampusTotals {
    let active_clients = zones.values().map(|zone| zone.active_clients).sum();
    let total_devices = zones.values().map(|zone| zone.total_devices).sum();

    let avg_zone_load = if zones.is_empty() {
        0.0
    } else {
        zones.values().map(|zone| zone.avg_wap_load).sum::<f64>() / zones.len() as f64
    };
    let max_zone_load = zones
        .values()
        .map(|zone| zone.max_wap_load)
        .fold(0.0_f64, f64::max);

    CampusTotals {
        active_clients,
        total_devices,
        avg_zone_load,
        max_zone_load,
    }
}

/// Picks the hour with the highest campus-wide active client count.
///
/// Only a strictly larger count displaces the running best, so ties resolve
/// to the earliest hour.
pub fn peak_hour(records: &[HourlyRecord]) -> Option<&HourlyRecord> {
    records.iter().reduce(|best, record| {
        if record.campus_total.active_clients > best.campus_total.active_clients {
            record
        } else {
            best
        }
    })
}
