//! End-to-end simulation over a representative campus roster.
//!
//! Exercises the full pipeline: roster text → campus assembly → 24-hour
//! simulation in both distribution modes → report structure.

use std::io::Cursor;

use wavecast::campus::{parse_roster, Campus};
use wavecast::report::SimulationReport;
use wavecast::sim::engine::DistributionMode;
use wavecast::sim::runner::DailySimulation;

fn campus_roster() -> &'static str {
    "Building Name,Zone,Total Count\n\
     Hullabaloo Residence Hall,1,42\n\
     Clements Residence Hall,1,18\n\
     Blocker Building,2,35\n\
     Academic Building,2,21\n\
     Zachry Engineering Center,2,58\n\
     Sbisa Dining Hall,3,16\n\
     Duncan Dining Center,3,12\n\
     Evans Library,4,47\n\
     Memorial Student Center,4,39\n\
     General Services Complex,5,9\n\
     Kyle Field,5,0\n\
     ,,\n"
}

fn load_campus(client_target: u32) -> Campus {
    let rows = parse_roster(Cursor::new(campus_roster())).expect("roster parses");
    Campus::from_rows(rows, client_target)
}

#[test]
fn full_load_day_covers_every_hour_and_zone() {
    let campus = load_campus(90_000);
    let records = DailySimulation::new(&campus, DistributionMode::FullLoad).run();

    assert_eq!(records.len(), 24);
    for (hour, record) in records.iter().enumerate() {
        assert_eq!(record.hour, hour);
        assert_eq!(record.timestamp, format!("{:02}:00", hour));
        assert_eq!(record.zones.len(), 5, "every zone reports every hour");

        let total: u64 = record.zones.values().map(|z| z.active_clients).sum();
        assert!(total <= 90_000, "hour {} over-allocated: {}", hour, total);
        assert_eq!(record.campus_total.active_clients, total);
        assert_eq!(
            record.campus_total.total_devices,
            record.campus_total.active_clients * 3
        );
    }
}

#[test]
fn full_load_keeps_population_nearly_whole() {
    // Truncation drops at most one client per capable building, so the
    // campus-wide total stays within that bound of the target.
    let campus = load_campus(90_000);
    let capable = campus.buildings().iter().filter(|b| b.ap_count > 0).count() as u64;
    let records = DailySimulation::new(&campus, DistributionMode::FullLoad).run();

    for record in &records {
        assert!(record.campus_total.active_clients + capable >= 90_000);
    }
}

#[test]
fn quota_mode_confines_zones_to_their_quotas() {
    let campus = load_campus(90_000);
    let records = DailySimulation::new(&campus, DistributionMode::QuotaBased).run();

    for record in &records {
        for (zone_id, stats) in &record.zones {
            let quota = u64::from(campus.zones()[zone_id].client_quota);
            assert!(
                stats.active_clients <= quota,
                "hour {} zone {}: {} over quota {}",
                record.hour,
                zone_id,
                stats.active_clients,
                quota
            );
        }
    }
}

#[test]
fn zone_quotas_cover_the_target_exactly() {
    let campus = load_campus(90_000);
    let total: u64 = campus
        .zones()
        .values()
        .map(|info| u64::from(info.client_quota))
        .sum();
    assert_eq!(total, 90_000);
}

#[test]
fn zero_ap_building_never_contributes() {
    let campus = load_campus(90_000);

    for mode in [DistributionMode::FullLoad, DistributionMode::QuotaBased] {
        let records = DailySimulation::new(&campus, mode).run();
        for record in &records {
            // Zone 5 holds one admin building with 9 APs and Kyle Field with
            // none. Kyle Field's specialty curve sits at 0.3 every hour, so
            // if zero-AP buildings were counted it would always be active;
            // overnight the admin building is at 0.02 and the count drops to
            // zero.
            let zone5 = &record.zones[&5];
            assert!(zone5.buildings_active <= 1);
            if record.hour < 8 {
                assert_eq!(zone5.buildings_active, 0);
            }
        }
    }
}

#[test]
fn nocturnal_load_concentrates_in_dormitories() {
    // At 03:00 dorms sit at 0.9 occupancy while lecture halls are at 0.05,
    // so the dormitory zone should dominate the campus allocation.
    let campus = load_campus(90_000);
    let records = DailySimulation::new(&campus, DistributionMode::FullLoad).run();

    let night = &records[3];
    let dorm_zone = night.zones[&1].active_clients;
    let lecture_zone = night.zones[&2].active_clients;
    assert!(
        dorm_zone > lecture_zone,
        "03:00 dorm zone {} should exceed lecture zone {}",
        dorm_zone,
        lecture_zone
    );
}

#[test]
fn report_carries_full_day_and_peak() {
    let campus = load_campus(90_000);
    let mode = DistributionMode::FullLoad;
    let hourly = DailySimulation::new(&campus, mode).run();
    let report = SimulationReport::new(&campus, mode, hourly);

    assert_eq!(report.hourly_stats.len(), 24);
    assert_eq!(report.metadata.buildings, 11);
    assert_eq!(report.metadata.zones, 5);
    assert!(report.metadata.full_load);

    let peak = report.peak().expect("24 records always have a peak");
    let best = report
        .hourly_stats
        .iter()
        .map(|record| record.campus_total.active_clients)
        .max()
        .unwrap();
    assert_eq!(peak.campus_total.active_clients, best);

    // Earlier hours with the same count never lose the peak slot.
    let first_best = report
        .hourly_stats
        .iter()
        .find(|record| record.campus_total.active_clients == best)
        .unwrap();
    assert_eq!(peak.hour, first_best.hour);
}

#[test]
fn identical_runs_produce_identical_reports() {
    let campus = load_campus(90_000);

    for mode in [DistributionMode::FullLoad, DistributionMode::QuotaBased] {
        let first = DailySimulation::new(&campus, mode).run();
        let second = DailySimulation::new(&campus, mode).run();
        assert_eq!(first, second);
    }
}
