//! Campus roster loading and zone bookkeeping.
//!
//! The roster is a CSV table with one row per building. The loader locates
//! the required columns by header name, drops rows without a building name
//! (the source spreadsheets carry a totals row), and assembles immutable
//! [`BuildingRecord`]s grouped into zones. Each zone is assigned a client
//! quota proportional to its share of the campus AP count; the quota is only
//! consulted by the quota-based distribution mode.
//!
//! # Roster Format
//!
//! A header line followed by data rows:
//!
//! ```text
//! Building Name,Zone,Total Count
//! Hullabaloo Residence Hall,1,14
//! Blocker Building,1,23
//! ```
//!
//! Required columns are `Building Name`, `Zone`, and `Total Count` (the AP
//! count); extra columns are ignored and order does not matter. A blank AP
//! count is treated as zero.

use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sim::building::BuildingRecord;

/// Header of the building display name column.
pub const NAME_COLUMN: &str = "Building Name";
/// Header of the zone id column.
pub const ZONE_COLUMN: &str = "Zone";
/// Header of the AP count column.
pub const AP_COLUMN: &str = "Total Count";

/// Errors raised while loading the campus roster.
///
/// All of these are fatal: they surface before any hourly computation runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required column is absent from the header line.
    MissingColumn(String),
    /// A field failed to parse; the message names the offending line.
    ParseError(String),
    /// No usable building rows remain after filtering.
    EmptyRoster,
    /// Input/output error reading the roster file.
    IoError(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingColumn(column) => {
                write!(f, "Roster is missing required column '{}'", column)
            }
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::EmptyRoster => {
                write!(f, "Roster contains no rows with a building name")
            }
            ConfigError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// One usable roster row, prior to record construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingRow {
    /// Building display name (never blank).
    pub name: String,
    /// Zone the building belongs to.
    pub zone: u32,
    /// Installed access points; blank roster fields become 0.
    pub ap_count: u32,
}

/// Locates a column in the header by exact name.
fn find_column(columns: &[String], name: &str) -> Result<usize, ConfigError> {
    columns
        .iter()
        .position(|column| column == name)
        .ok_or_else(|| ConfigError::MissingColumn(name.to_string()))
}

/// Parses a zone id field. Spreadsheet exports sometimes render integers as
/// floats ("3.0"), so the value goes through f64 and truncates.
fn parse_zone(field: &str, line_no: usize) -> Result<u32, ConfigError> {
    let trimmed = field.trim();
    let value: f64 = trimmed.parse().map_err(|_| {
        ConfigError::ParseError(format!("Invalid zone '{}' on line {}", trimmed, line_no))
    })?;

    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::ParseError(format!(
            "Invalid zone '{}' on line {}",
            trimmed, line_no
        )));
    }

    Ok(value as u32)
}

/// Parses an AP count field. Blank fields and non-positive values become 0;
/// fractional counts truncate.
fn parse_ap_count(field: &str, line_no: usize) -> Result<u32, ConfigError> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }

    let value: f64 = trimmed.parse().map_err(|_| {
        ConfigError::ParseError(format!(
            "Invalid AP count '{}' on line {}",
            trimmed, line_no
        ))
    })?;

    if !value.is_finite() || value <= 0.0 {
        return Ok(0);
    }

    Ok(value as u32)
}

/// Parses roster rows from a reader.
///
/// Rows with a blank building name are dropped. Returns an error if the
/// header is missing a required column, any field fails to parse, or no
/// usable rows remain.
pub fn parse_roster<R: BufRead>(reader: R) -> Result<Vec<BuildingRow>, ConfigError> {
    let mut lines = reader.lines();

    let header = lines
        .next()
        .ok_or_else(|| ConfigError::ParseError("Missing header line".to_string()))?
        .map_err(|e| ConfigError::IoError(e.to_string()))?;
    let columns: Vec<String> = header.split(',').map(|c| c.trim().to_string()).collect();

    let name_idx = find_column(&columns, NAME_COLUMN)?;
    let zone_idx = find_column(&columns, ZONE_COLUMN)?;
    let ap_idx = find_column(&columns, AP_COLUMN)?;

    let mut rows = Vec::new();
    for (index, line) in lines.enumerate() {
        let line = line.map_err(|e| ConfigError::IoError(e.to_string()))?;
        if line.trim().is_empty() {
            continue;
        }

        // Header is line 1, so data lines start at 2.
        let line_no = index + 2;
        let fields: Vec<&str> = line.split(',').collect();

        let name = fields.get(name_idx).map(|f| f.trim()).unwrap_or("");
        if name.is_empty() {
            // Totals and padding rows come through without a name.
            continue;
        }

        let zone = parse_zone(fields.get(zone_idx).copied().unwrap_or(""), line_no)?;
        let ap_count = parse_ap_count(fields.get(ap_idx).copied().unwrap_or(""), line_no)?;

        rows.push(BuildingRow {
            name: name.to_string(),
            zone,
            ap_count,
        });
    }

    if rows.is_empty() {
        return Err(ConfigError::EmptyRoster);
    }

    Ok(rows)
}

/// Static per-zone configuration derived from the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneInfo {
    /// Member buildings.
    pub building_count: usize,
    /// Total access points across the zone's buildings.
    pub ap_count: u32,
    /// Clients allocated to the zone, proportional to its AP share. Only
    /// the quota-based distribution mode consults this.
    pub client_quota: u32,
}

/// The full campus configuration: buildings, zones, and allocation quotas.
///
/// Built once from roster rows and read-only afterwards. Zones iterate in
/// increasing zone-id order.
#[derive(Debug, Clone, PartialEq)]
pub struct Campus {
    buildings: Vec<BuildingRecord>,
    zones: BTreeMap<u32, ZoneInfo>,
    total_aps: u32,
    client_target: u32,
}

impl Campus {
    /// Loads a campus from a roster CSV file.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read, a required
    /// column is missing, a field fails to parse, or the roster is empty
    /// after filtering.
    pub fn from_file<P: AsRef<Path>>(path: P, client_target: u32) -> Result<Self, ConfigError> {
        let file = File::open(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        let rows = parse_roster(BufReader::new(file))?;
        Ok(Campus::from_rows(rows, client_target))
    }

    /// Assembles a campus from already-parsed roster rows.
    pub fn from_rows(rows: Vec<BuildingRow>, client_target: u32) -> Self {
        let buildings: Vec<BuildingRecord> = rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| {
                BuildingRecord::new(
                    format!("Z{}B{:03}", row.zone, index),
                    row.name,
                    row.zone,
                    row.ap_count,
                )
            })
            .collect();

        let mut zones: BTreeMap<u32, ZoneInfo> = BTreeMap::new();
        for building in &buildings {
            let info = zones.entry(building.zone).or_insert(ZoneInfo {
                building_count: 0,
                ap_count: 0,
                client_quota: 0,
            });
            info.building_count += 1;
            info.ap_count += building.ap_count;
        }

        let total_aps: u32 = zones.values().map(|info| info.ap_count).sum();
        assign_quotas(&mut zones, total_aps, client_target);

        Campus {
            buildings,
            zones,
            total_aps,
            client_target,
        }
    }

    /// All building records, in roster order.
    pub fn buildings(&self) -> &[BuildingRecord] {
        &self.buildings
    }

    /// Zone configuration keyed by zone id, in increasing id order.
    pub fn zones(&self) -> &BTreeMap<u32, ZoneInfo> {
        &self.zones
    }

    /// Buildings belonging to one zone, in roster order.
    pub fn buildings_in_zone(&self, zone: u32) -> impl Iterator<Item = &BuildingRecord> + '_ {
        self.buildings
            .iter()
            .filter(move |building| building.zone == zone)
    }

    /// Total access points across the campus.
    pub fn total_aps(&self) -> u32 {
        self.total_aps
    }

    /// Campus-wide client population target.
    pub fn client_target(&self) -> u32 {
        self.client_target
    }
}

/// Splits the client target across zones proportional to AP share.
///
/// Per-zone quotas truncate, which can leave a shortfall against the target;
/// the whole remainder goes to the zone with the most APs (the first such
/// zone in increasing zone-id order on a tie). A campus with no APs keeps
/// every quota at zero.
fn assign_quotas(zones: &mut BTreeMap<u32, ZoneInfo>, total_aps: u32, client_target: u32) {
    if total_aps == 0 {
        return;
    }

    let mut assigned: u64 = 0;
    for info in zones.values_mut() {
        let quota = u64::from(client_target) * u64::from(info.ap_count) / u64::from(total_aps);
        info.client_quota = quota as u32;
        assigned += quota;
    }

    let shortfall = u64::from(client_target) - assigned;
    if shortfall > 0 {
        let largest = zones
            .values_mut()
            .reduce(|best, info| if info.ap_count > best.ap_count { info } else { best });
        if let Some(largest) = largest {
            largest.client_quota += shortfall as u32;
        }
    }
}
