#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Fire statistics CSV ingestion and cleaning.
//!
//! Loads the national fire statistics CSV into the immutable in-memory
//! record table the dashboard queries run over. Cleaning applies the same
//! rules on every load: lossy numeric coercion, drop of records before the
//! first reliable year or without coordinates, negative durations clamped
//! to zero, and derived columns (year, month, ISO week, size class).

pub mod parsing;
pub mod paths;

use std::path::Path;

use chrono::Datelike;
use fire_map_fire_models::{FireCause, FireRecord, FireSizeClass};
use fire_map_geography_models::{AutonomousCommunity, Province};
use serde::Deserialize;
use thiserror::Error;

/// First year with reliable records. Earlier rows are dropped.
pub const MIN_YEAR: i32 = 1983;

/// Errors that can occur while loading the fire dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The CSV file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV file is structurally malformed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// A raw CSV row, before cleaning.
///
/// Every field is read as an optional string; numeric coercion is lossy and
/// happens in [`clean_row`].
#[derive(Debug, Deserialize)]
struct RawFireRow {
    id: Option<String>,
    #[serde(rename = "fecha")]
    date: Option<String>,
    lat: Option<String>,
    lng: Option<String>,
    latlng_explicit: Option<String>,
    #[serde(rename = "idcomunidad")]
    community_code: Option<String>,
    #[serde(rename = "idprovincia")]
    province_code: Option<String>,
    #[serde(rename = "municipio")]
    municipality: Option<String>,
    #[serde(rename = "causa")]
    cause_code: Option<String>,
    #[serde(rename = "superficie")]
    area_ha: Option<String>,
    #[serde(rename = "muertos")]
    deaths: Option<String>,
    #[serde(rename = "heridos")]
    injuries: Option<String>,
    time_ctrl: Option<String>,
    time_ext: Option<String>,
    #[serde(rename = "personal")]
    personnel: Option<String>,
    #[serde(rename = "medios")]
    resources: Option<String>,
    #[serde(rename = "gastos")]
    operational_cost: Option<String>,
    #[serde(rename = "perdidas")]
    economic_losses: Option<String>,
}

/// Counters for rows dropped during cleaning.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DropStats {
    /// Rows with an unparseable identifier, date, or code column.
    pub unparseable: u64,
    /// Rows before [`MIN_YEAR`].
    pub before_min_year: u64,
    /// Rows without usable coordinates.
    pub missing_coords: u64,
}

impl DropStats {
    /// Total number of dropped rows.
    #[must_use]
    pub const fn total(self) -> u64 {
        self.unparseable + self.before_min_year + self.missing_coords
    }
}

/// Loads and cleans the fire statistics CSV.
///
/// Returns the cleaned record table together with counters for the rows
/// dropped along the way.
///
/// # Errors
///
/// Returns [`DatasetError`] if the file cannot be read or is structurally
/// malformed.
pub fn load_fire_records(path: &Path) -> Result<(Vec<FireRecord>, DropStats), DatasetError> {
    let mut reader = csv::Reader::from_path(path)?;

    let mut records = Vec::new();
    let mut stats = DropStats::default();

    for row in reader.deserialize() {
        let row: RawFireRow = row?;
        if let Some(record) = clean_row(&row, &mut stats) {
            records.push(record);
        }
    }

    log::info!(
        "Loaded {} fire records from {} ({} rows dropped: {} unparseable, {} before {}, {} without coordinates)",
        records.len(),
        path.display(),
        stats.total(),
        stats.unparseable,
        stats.before_min_year,
        MIN_YEAR,
        stats.missing_coords,
    );

    Ok((records, stats))
}

/// Cleans a single raw row into a [`FireRecord`].
///
/// Returns `None` (and bumps the matching counter) for rows that fail the
/// validity rules: unparseable identifier/date/geography/cause, ignition
/// before [`MIN_YEAR`], or missing coordinates.
fn clean_row(row: &RawFireRow, stats: &mut DropStats) -> Option<FireRecord> {
    let parsed = parse_required(row);
    let Some((id, date, community, province, cause)) = parsed else {
        stats.unparseable += 1;
        return None;
    };

    if date.year() < MIN_YEAR {
        stats.before_min_year += 1;
        return None;
    }

    let latitude = parsing::parse_quoted_f64(row.lat.as_ref());
    let longitude = parsing::parse_quoted_f64(row.lng.as_ref());
    let (Some(latitude), Some(longitude)) = (latitude, longitude) else {
        stats.missing_coords += 1;
        return None;
    };

    let area_ha = parsing::parse_f64(row.area_ha.as_ref()).unwrap_or(0.0);

    Some(FireRecord {
        id,
        date,
        year: date.year(),
        month: date.month(),
        week: date.iso_week().week(),
        latitude,
        longitude,
        explicit_coords: parsing::parse_quoted_flag(row.latlng_explicit.as_ref())
            .unwrap_or(false),
        community,
        province,
        municipality: row.municipality.clone().unwrap_or_default(),
        cause,
        size_class: FireSizeClass::classify(area_ha),
        area_ha,
        deaths: parsing::parse_i64(row.deaths.as_ref()),
        injuries: parsing::parse_i64(row.injuries.as_ref()),
        control_time_min: parsing::clamp_non_negative(parsing::parse_i64(row.time_ctrl.as_ref())),
        extinction_time_min: parsing::clamp_non_negative(parsing::parse_i64(row.time_ext.as_ref())),
        personnel: parsing::parse_i64(row.personnel.as_ref()),
        resources: parsing::parse_i64(row.resources.as_ref()),
        operational_cost: parsing::parse_f64(row.operational_cost.as_ref()),
        economic_losses: parsing::parse_f64(row.economic_losses.as_ref()),
    })
}

/// Parses the columns a record cannot exist without.
fn parse_required(
    row: &RawFireRow,
) -> Option<(
    i64,
    chrono::NaiveDate,
    AutonomousCommunity,
    Province,
    FireCause,
)> {
    let id = parsing::parse_i64(row.id.as_ref())?;
    let date = parsing::parse_date(row.date.as_deref()?)?;
    let community =
        AutonomousCommunity::from_code(parsing::parse_code(row.community_code.as_ref())?).ok()?;
    let province = Province::from_code(parsing::parse_code(row.province_code.as_ref())?).ok()?;
    let cause = FireCause::from_code(parsing::parse_code(row.cause_code.as_ref())?).ok()?;
    Some((id, date, community, province, cause))
}
