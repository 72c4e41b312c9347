//! Occupancy-weighted campus WiFi load simulation.
//!
//! Models hourly network client load across a campus of zones and buildings.
//! Given a fixed client population and a roster of buildings, each with an
//! access-point count and a diurnal occupancy curve, the simulator computes
//! how clients distribute across buildings for every hour of a day and rolls
//! the results up into per-zone and campus-wide access-point load statistics
//! for capacity planning.
//!
//! # Overview
//!
//! - [`campus`]: Roster loading, zone bookkeeping, and client quota assignment
//! - [`sim`]: Building records, occupancy curves, the load distribution
//!   engine, and the 24-hour simulation driver
//! - [`report`]: Report assembly and JSON persistence
//!
//! # Example
//!
//! ```
//! use wavecast::campus::{BuildingRow, Campus};
//! use wavecast::sim::engine::DistributionMode;
//! use wavecast::sim::runner::DailySimulation;
//!
//! let campus = Campus::from_rows(
//!     vec![BuildingRow {
//!         name: "Hullabaloo Residence Hall".to_string(),
//!         zone: 1,
//!         ap_count: 10,
//!     }],
//!     1000,
//! );
//!
//! let hourly = DailySimulation::new(&campus, DistributionMode::FullLoad).run();
//! assert_eq!(hourly.len(), 24);
//! ```

pub mod campus;
pub mod report;
pub mod sim;

pub use campus::Campus;
pub use report::SimulationReport;
pub use sim::engine::DistributionMode;
