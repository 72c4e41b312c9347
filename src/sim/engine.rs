//! Occupancy-weighted client allocation and per-zone aggregation.
//!
//! For a single hour of the simulated day, the engine distributes the client
//! population across buildings by occupancy-weighted capacity and folds the
//! per-building results into per-zone aggregates. Two modes are supported:
//!
//! - **Full-load**: the entire client target is distributed campus-wide by
//!   weight each hour, ignoring zone quotas, so clients flow between zones as
//!   occupancy shifts (dorms at night, lecture halls mid-morning, cafeterias
//!   at meals).
//! - **Quota-based**: each zone independently distributes only its
//!   pre-assigned client quota among its own buildings.
//!
//! Every hour's computation is a pure function of the campus configuration
//! and the hour index; the engine holds no mutable state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::campus::Campus;
use crate::sim::building::BuildingRecord;
use crate::sim::{ACTIVE_OCCUPANCY_THRESHOLD, DEVICES_PER_CLIENT};

/// Strategy for distributing clients across buildings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionMode {
    /// Distribute the entire client target campus-wide by weight.
    FullLoad,
    /// Distribute each zone's quota independently within the zone.
    QuotaBased,
}

impl DistributionMode {
    /// Returns true for the campus-wide full-load strategy.
    pub fn is_full_load(&self) -> bool {
        matches!(self, DistributionMode::FullLoad)
    }
}

/// Accumulated statistics for one zone over one simulated hour.
///
/// Constructed fresh at the start of each hour's computation and discarded
/// after being folded into the hour's report entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneAggregate {
    /// Clients allocated to the zone's buildings this hour.
    pub active_clients: u64,
    /// Devices those clients carry (clients × devices per client).
    pub total_devices: u64,
    /// Buildings whose occupancy fraction exceeds the active threshold.
    pub buildings_active: u32,
    wap_loads: Vec<f64>,
}

impl ZoneAggregate {
    /// Folds one building's hourly allocation into the zone totals.
    ///
    /// Callers only pass buildings with a positive AP count, so the per-AP
    /// load division is safe.
    fn fold_building(&mut self, clients: u64, building: &BuildingRecord, occupancy: f64) {
        let devices = clients * DEVICES_PER_CLIENT;

        self.active_clients += clients;
        self.total_devices += devices;
        self.wap_loads
            .push(devices as f64 / f64::from(building.ap_count));

        if occupancy > ACTIVE_OCCUPANCY_THRESHOLD {
            self.buildings_active += 1;
        }
    }

    /// Per-building average AP loads observed this hour.
    pub fn wap_loads(&self) -> &[f64] {
        &self.wap_loads
    }

    /// Mean of the per-building average AP loads, or 0 if none were observed.
    pub fn avg_wap_load(&self) -> f64 {
        if self.wap_loads.is_empty() {
            return 0.0;
        }
        self.wap_loads.iter().sum::<f64>() / self.wap_loads.len() as f64
    }

    /// Maximum per-building average AP load, or 0 if none were observed.
    pub fn max_wap_load(&self) -> f64 {
        self.wap_loads.iter().copied().fold(0.0_f64, f64::max)
    }
}

/// The occupancy-weighted load distribution engine.
pub struct LoadEngine<'a> {
    campus: &'a Campus,
    mode: DistributionMode,
}

impl<'a> LoadEngine<'a> {
    /// Creates an engine over a campus configuration with a fixed mode.
    pub fn new(campus: &'a Campus, mode: DistributionMode) -> Self {
        LoadEngine { campus, mode }
    }

    /// Returns the distribution mode this engine was built with.
    pub fn mode(&self) -> DistributionMode {
        self.mode
    }

    /// Computes per-zone aggregates for one hour (0-23) of the simulated day.
    ///
    /// Every configured zone appears in the result, with a zero aggregate if
    /// none of its buildings contributed this hour. Buildings with a zero AP
    /// count are excluded from weights, loads, and active counts entirely.
    pub fn hourly_stats(&self, hour: usize) -> BTreeMap<u32, ZoneAggregate> {
        let mut stats: BTreeMap<u32, ZoneAggregate> = self
            .campus
            .zones()
            .keys()
            .map(|&zone| (zone, ZoneAggregate::default()))
            .collect();

        match self.mode {
            DistributionMode::FullLoad => self.distribute_campus_wide(hour, &mut stats),
            DistributionMode::QuotaBased => self.distribute_by_quota(hour, &mut stats),
        }

        stats
    }

    /// Full-load mode: weights every capable building campus-wide and splits
    /// the whole client target across them.
    ///
    /// Per-building client counts truncate, so the hour's total may fall
    /// slightly short of the target; the drift is accepted, not corrected.
    fn distribute_campus_wide(&self, hour: usize, stats: &mut BTreeMap<u32, ZoneAggregate>) {
        let weighted: Vec<(&BuildingRecord, f64)> = self
            .campus
            .buildings()
            .iter()
            .filter(|building| building.ap_count > 0)
            .map(|building| {
                (
                    building,
                    building.occupancy(hour) * f64::from(building.capacity),
                )
            })
            .collect();

        let mut total_weight: f64 = weighted.iter().map(|(_, weight)| *weight).sum();
        if total_weight == 0.0 {
            // Degenerate hour with no occupancy anywhere: every building gets
            // zero clients rather than dividing by zero.
            total_weight = 1.0;
        }

        let target = f64::from(self.campus.client_target());
        for (building, weight) in weighted {
            let clients = ((weight / total_weight) * target) as u64;
            let aggregate = stats.entry(building.zone).or_default();
            aggregate.fold_building(clients, building, building.occupancy(hour));
        }
    }

    /// Quota-based mode: each zone splits its own quota among its buildings.
    ///
    /// The occupancy fraction enters twice: once in the capacity weighting
    /// and once as an extra multiplier on the allocation, so even a building
    /// with high relative weight draws few clients during its own
    /// low-occupancy hours.
    fn distribute_by_quota(&self, hour: usize, stats: &mut BTreeMap<u32, ZoneAggregate>) {
        for (&zone_id, info) in self.campus.zones() {
            let weighted: Vec<(&BuildingRecord, f64)> = self
                .campus
                .buildings_in_zone(zone_id)
                .filter(|building| building.ap_count > 0)
                .map(|building| {
                    (
                        building,
                        building.occupancy(hour) * f64::from(building.capacity),
                    )
                })
                .collect();

            let zone_weight: f64 = weighted.iter().map(|(_, weight)| *weight).sum();
            let quota = f64::from(info.client_quota);

            let aggregate = stats.entry(zone_id).or_default();
            for (building, weight) in weighted {
                let occupancy = building.occupancy(hour);
                let clients = if zone_weight > 0.0 {
                    ((weight / zone_weight) * quota * occupancy) as u64
                } else {
                    0
                };
                aggregate.fold_building(clients, building, occupancy);
            }
        }
    }
}
