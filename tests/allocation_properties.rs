//! Allocation invariants under degenerate and adversarial configurations.

use wavecast::campus::{BuildingRow, Campus};
use wavecast::sim::engine::{DistributionMode, LoadEngine};
use wavecast::sim::runner::DailySimulation;

fn row(name: &str, zone: u32, ap_count: u32) -> BuildingRow {
    BuildingRow {
        name: name.to_string(),
        zone,
        ap_count,
    }
}

#[test]
fn all_zero_ap_campus_yields_all_zero_stats() {
    let campus = Campus::from_rows(
        vec![
            row("Kyle Field", 1, 0),
            row("Albritton Tower", 2, 0),
            row("Bonfire Memorial", 3, 0),
        ],
        90_000,
    );

    for mode in [DistributionMode::FullLoad, DistributionMode::QuotaBased] {
        let records = DailySimulation::new(&campus, mode).run();
        assert_eq!(records.len(), 24);

        for record in &records {
            assert_eq!(record.zones.len(), 3);
            for stats in record.zones.values() {
                assert_eq!(stats.active_clients, 0);
                assert_eq!(stats.total_devices, 0);
                assert_eq!(stats.avg_wap_load, 0.0);
                assert_eq!(stats.max_wap_load, 0.0);
                assert_eq!(stats.buildings_active, 0);
            }
            assert_eq!(record.campus_total.active_clients, 0);
            assert_eq!(record.campus_total.avg_zone_load, 0.0);
            assert_eq!(record.campus_total.max_zone_load, 0.0);
        }
    }
}

#[test]
fn single_dormitory_takes_whole_target() {
    // One zone, one dormitory, 10 APs (capacity 300), hour 2 (occupancy
    // 0.9), target 1000, full-load mode: the building is the entire campus
    // weight and receives every client.
    let campus = Campus::from_rows(vec![row("Hullabaloo Residence Hall", 1, 10)], 1000);
    let engine = LoadEngine::new(&campus, DistributionMode::FullLoad);

    let stats = engine.hourly_stats(2);
    let zone = &stats[&1];
    assert_eq!(zone.active_clients, 1000);
    assert_eq!(zone.total_devices, 3000);
    assert_eq!(zone.avg_wap_load(), 300.0);
    assert_eq!(zone.buildings_active, 1);
}

#[test]
fn zero_ap_sibling_is_invisible() {
    // Two buildings in the same zone, AP counts 10 and 0: the zero-AP
    // building contributes neither weight nor load at any hour, so the
    // capable building's allocation matches the single-building campus.
    let paired = Campus::from_rows(
        vec![
            row("Hullabaloo Residence Hall", 1, 10),
            row("Moses Residence Hall", 1, 0),
        ],
        1000,
    );
    let solo = Campus::from_rows(vec![row("Hullabaloo Residence Hall", 1, 10)], 1000);

    for hour in 0..24 {
        let paired_stats = LoadEngine::new(&paired, DistributionMode::FullLoad).hourly_stats(hour);
        let solo_stats = LoadEngine::new(&solo, DistributionMode::FullLoad).hourly_stats(hour);

        assert_eq!(
            paired_stats[&1].active_clients,
            solo_stats[&1].active_clients
        );
        assert_eq!(paired_stats[&1].wap_loads().len(), 1);
    }
}

#[test]
fn full_load_allocations_are_weight_monotone() {
    // A building with more APs (hence more weighted capacity) never receives
    // fewer clients than an identical-type building with fewer APs.
    let campus = Campus::from_rows(
        vec![
            row("Clements Residence Hall", 1, 5),
            row("Hullabaloo Residence Hall", 2, 50),
        ],
        10_000,
    );
    let engine = LoadEngine::new(&campus, DistributionMode::FullLoad);

    for hour in 0..24 {
        let stats = engine.hourly_stats(hour);
        assert!(stats[&2].active_clients >= stats[&1].active_clients);
    }
}

#[test]
fn quota_shortfall_lands_on_first_largest_zone() {
    let campus = Campus::from_rows(
        vec![
            row("Academic Building", 4, 7),
            row("Evans Library", 9, 7),
            row("Sbisa Dining Hall", 11, 7),
        ],
        1000,
    );

    // floor(1000 × 7 / 21) = 333 per zone; the 1-client remainder goes to
    // zone 4, the first zone of the tied maximum in id order.
    assert_eq!(campus.zones()[&4].client_quota, 334);
    assert_eq!(campus.zones()[&9].client_quota, 333);
    assert_eq!(campus.zones()[&11].client_quota, 333);
}

#[test]
fn zero_client_target_runs_clean() {
    let campus = Campus::from_rows(
        vec![
            row("Hullabaloo Residence Hall", 1, 14),
            row("Evans Library", 2, 31),
        ],
        0,
    );

    for mode in [DistributionMode::FullLoad, DistributionMode::QuotaBased] {
        let records = DailySimulation::new(&campus, mode).run();
        for record in &records {
            assert_eq!(record.campus_total.active_clients, 0);
            assert_eq!(record.campus_total.total_devices, 0);
        }
    }
}

#[test]
fn quota_mode_never_allocates_to_quota_less_zone() {
    // A zone whose buildings have no APs gets quota 0 and allocates nothing,
    // while its sibling zones are unaffected.
    let campus = Campus::from_rows(
        vec![
            row("Hullabaloo Residence Hall", 1, 20),
            row("Kyle Field", 2, 0),
        ],
        5000,
    );
    assert_eq!(campus.zones()[&2].client_quota, 0);

    let engine = LoadEngine::new(&campus, DistributionMode::QuotaBased);
    for hour in 0..24 {
        let stats = engine.hourly_stats(hour);
        assert_eq!(stats[&2].active_clients, 0);
        assert!(stats[&1].active_clients <= 5000);
    }
}
