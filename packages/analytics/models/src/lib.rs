#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Query parameter and result types for the fire map analytics.
//!
//! Every dashboard chart maps to one aggregation query in
//! `fire_map_analytics`; the types here are their inputs and outputs.

use chrono::NaiveDate;
use fire_map_fire_models::{FireCause, FireRecord, Trend};
use fire_map_geography_models::{AutonomousCommunity, Province};
use serde::{Deserialize, Serialize};

/// The active dashboard filter.
///
/// An unset field leaves that dimension unfiltered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FireFilter {
    /// First year to include.
    pub year_from: Option<i32>,
    /// Last year to include.
    pub year_to: Option<i32>,
    /// Restrict to a single Autonomous Community.
    pub community: Option<AutonomousCommunity>,
    /// Restrict to these causes. Empty means all causes.
    pub causes: Vec<FireCause>,
}

impl FireFilter {
    /// Whether a record passes this filter.
    #[must_use]
    pub fn matches(&self, record: &FireRecord) -> bool {
        if self.year_from.is_some_and(|from| record.year < from) {
            return false;
        }
        if self.year_to.is_some_and(|to| record.year > to) {
            return false;
        }
        if self
            .community
            .is_some_and(|community| record.community != community)
        {
            return false;
        }
        if !self.causes.is_empty() && !self.causes.contains(&record.cause) {
            return false;
        }
        true
    }
}

/// KPI card values for the active filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSummary {
    /// Number of incidents in the filtered set.
    pub total_fires: u64,
    /// Total burned area in hectares.
    pub total_area_ha: f64,
    /// Human-formatted total burned area (e.g. `>1.5M ha`).
    pub area_label: String,
    /// Year with the largest burned area, when the set is non-empty.
    pub peak_year: Option<i32>,
    /// Incident-count trend.
    pub trend: Trend,
}

/// Burned-area total for one province (one choropleth cell).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvinceBurnedArea {
    /// The province.
    pub province: Province,
    /// Number of incidents.
    pub fires: u64,
    /// Total burned area in hectares.
    pub area_ha: f64,
}

/// Which regions a ranking compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "community")]
pub enum RankingScope {
    /// Communities compared nationally.
    Communities,
    /// Provinces of a single community.
    Provinces(AutonomousCommunity),
}

/// One bar of the regional ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingRow {
    /// Region display name.
    pub label: String,
    /// Total incidents in the period.
    pub fires: u64,
    /// Total burned area in the period, hectares.
    pub area_ha: f64,
    /// Mean incidents per year.
    pub mean_annual_fires: f64,
    /// Mean burned area per year, hectares.
    pub mean_annual_area_ha: f64,
    /// Share of the filtered total burned area, percent.
    pub share_pct: f64,
}

/// The regional ranking chart data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionalRanking {
    /// What the rows compare.
    pub scope: RankingScope,
    /// Mean of the rows' mean annual burned areas (the reference line).
    pub mean_annual_area_ha: f64,
    /// Ranked rows, largest mean annual burned area first.
    pub rows: Vec<RankingRow>,
}

/// One year of one cause's share of incidents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CauseYearPoint {
    /// The year.
    pub year: i32,
    /// Incidents attributed to the cause that year.
    pub fires: u64,
    /// Percentage of that year's incidents.
    pub pct: f64,
}

/// The per-year share series of one cause.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CauseSeries {
    /// The cause.
    pub cause: FireCause,
    /// Cause display name.
    pub label: String,
    /// One point per year with incidents.
    pub points: Vec<CauseYearPoint>,
}

/// The cause-evolution chart data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CauseEvolution {
    /// Years present in the filtered set, ascending.
    pub years: Vec<i32>,
    /// Stacked series, ordered by mean share descending.
    pub series: Vec<CauseSeries>,
}

/// The seasonal burned-area density grid.
///
/// `density` has `2 * weeks.len()` rows: even rows are the per-week kernel
/// density estimates over `area_grid`, odd rows are interpolated midpoints
/// for a smoother plot. Values are square-root transformed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalGrid {
    /// ISO weeks with qualifying incidents, ascending.
    pub weeks: Vec<u32>,
    /// Burned-area sample points in hectares.
    pub area_grid: Vec<f64>,
    /// Density rows (see type docs for layout).
    pub density: Vec<Vec<f64>>,
}

/// A major fire rendered as a map marker in the community focus view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MajorFireMarker {
    /// Ignition date.
    pub date: NaiveDate,
    /// Municipality name.
    pub municipality: String,
    /// Province of the fire.
    pub province: Province,
    /// Ignition cause.
    pub cause: FireCause,
    /// Cause display name.
    pub cause_label: String,
    /// Burned area in hectares.
    pub area_ha: f64,
    /// Marker latitude.
    pub latitude: f64,
    /// Marker longitude.
    pub longitude: f64,
    /// Marker size, log-scaled from the burned area.
    pub marker_size: f64,
}
