#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the fire map server.
//!
//! These types are serialized to JSON for the dashboard frontend. They are
//! separate from the analytics result types to allow independent evolution
//! of the API contract.

use chrono::NaiveDate;
use fire_map_analytics_models::{
    CauseEvolution, CauseSeries, CauseYearPoint, KpiSummary, MajorFireMarker,
    ProvinceBurnedArea, RankingRow, RankingScope, RegionalRanking, SeasonalGrid,
};
use fire_map_fire_models::{FireCause, Trend};
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

/// Filter query parameters shared by every chart endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardQueryParams {
    /// First year to include.
    pub year_from: Option<i32>,
    /// Last year to include.
    pub year_to: Option<i32>,
    /// Autonomous Community code (1-19).
    pub community: Option<u8>,
    /// Comma-separated list of cause codes (1-6) to include.
    pub causes: Option<String>,
}

/// One selectable community in the filter controls.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCommunity {
    /// Numeric community code.
    pub code: u8,
    /// Display name.
    pub name: String,
}

/// One selectable cause in the filter controls.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCause {
    /// Numeric cause code.
    pub code: u8,
    /// Display name.
    pub name: String,
}

/// Dataset metadata backing the filter controls.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiMeta {
    /// First year with records.
    pub year_min: i32,
    /// Last year with records.
    pub year_max: i32,
    /// Total records loaded.
    pub total_records: u64,
    /// Selectable communities.
    pub communities: Vec<ApiCommunity>,
    /// Selectable causes.
    pub causes: Vec<ApiCause>,
}

/// KPI card values.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSummary {
    /// Number of incidents in the filtered set.
    pub total_fires: u64,
    /// Total burned area in hectares.
    pub total_area_ha: f64,
    /// Human-formatted total burned area.
    pub area_label: String,
    /// Year with the largest burned area.
    pub peak_year: Option<i32>,
    /// Trend variant name.
    pub trend: Trend,
    /// Trend display label.
    pub trend_label: String,
}

impl From<KpiSummary> for ApiSummary {
    fn from(kpis: KpiSummary) -> Self {
        Self {
            total_fires: kpis.total_fires,
            total_area_ha: kpis.total_area_ha,
            area_label: kpis.area_label,
            peak_year: kpis.peak_year,
            trend: kpis.trend,
            trend_label: kpis.trend.label().to_string(),
        }
    }
}

/// One choropleth cell.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiChoroplethEntry {
    /// Province display name (the choropleth join key).
    pub province: String,
    /// Number of incidents.
    pub fires: u64,
    /// Total burned area in hectares.
    pub area_ha: f64,
}

impl From<ProvinceBurnedArea> for ApiChoroplethEntry {
    fn from(entry: ProvinceBurnedArea) -> Self {
        Self {
            province: entry.province.name().to_string(),
            fires: entry.fires,
            area_ha: entry.area_ha,
        }
    }
}

/// One bar of the regional ranking.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRankingRow {
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

impl From<RankingRow> for ApiRankingRow {
    fn from(row: RankingRow) -> Self {
        Self {
            label: row.label,
            fires: row.fires,
            area_ha: row.area_ha,
            mean_annual_fires: row.mean_annual_fires,
            mean_annual_area_ha: row.mean_annual_area_ha,
            share_pct: row.share_pct,
        }
    }
}

/// The regional ranking response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRanking {
    /// `"communities"` or `"provinces"`.
    pub scope: String,
    /// The focused community name when ranking provinces.
    pub community: Option<String>,
    /// Mean of the rows' mean annual burned areas (the reference line).
    pub mean_annual_area_ha: f64,
    /// Ranked rows, largest first.
    pub rows: Vec<ApiRankingRow>,
}

impl From<RegionalRanking> for ApiRanking {
    fn from(ranking: RegionalRanking) -> Self {
        let (scope, community) = match ranking.scope {
            RankingScope::Communities => ("communities".to_string(), None),
            RankingScope::Provinces(community) => {
                ("provinces".to_string(), Some(community.name().to_string()))
            }
        };
        Self {
            scope,
            community,
            mean_annual_area_ha: ranking.mean_annual_area_ha,
            rows: ranking.rows.into_iter().map(ApiRankingRow::from).collect(),
        }
    }
}

/// One year of one cause's share of incidents.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCausePoint {
    /// The year.
    pub year: i32,
    /// Incidents attributed to the cause that year.
    pub fires: u64,
    /// Percentage of that year's incidents.
    pub pct: f64,
}

impl From<CauseYearPoint> for ApiCausePoint {
    fn from(point: CauseYearPoint) -> Self {
        Self {
            year: point.year,
            fires: point.fires,
            pct: point.pct,
        }
    }
}

/// The per-year share series of one cause.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCauseSeries {
    /// Cause variant name.
    pub cause: FireCause,
    /// Cause display name.
    pub label: String,
    /// One point per year with incidents.
    pub points: Vec<ApiCausePoint>,
}

impl From<CauseSeries> for ApiCauseSeries {
    fn from(series: CauseSeries) -> Self {
        Self {
            cause: series.cause,
            label: series.label,
            points: series.points.into_iter().map(ApiCausePoint::from).collect(),
        }
    }
}

/// The cause-evolution response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCauseEvolution {
    /// Years present in the filtered set, ascending.
    pub years: Vec<i32>,
    /// Stacked series, ordered by mean share descending.
    pub series: Vec<ApiCauseSeries>,
}

impl From<CauseEvolution> for ApiCauseEvolution {
    fn from(evolution: CauseEvolution) -> Self {
        Self {
            years: evolution.years,
            series: evolution
                .series
                .into_iter()
                .map(ApiCauseSeries::from)
                .collect(),
        }
    }
}

/// The seasonal-distribution response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSeasonality {
    /// ISO weeks with qualifying incidents, ascending.
    pub weeks: Vec<u32>,
    /// Burned-area sample points in hectares.
    pub area_grid: Vec<f64>,
    /// Density rows: even rows per week, odd rows interpolated midpoints.
    pub density: Vec<Vec<f64>>,
}

impl From<SeasonalGrid> for ApiSeasonality {
    fn from(grid: SeasonalGrid) -> Self {
        Self {
            weeks: grid.weeks,
            area_grid: grid.area_grid,
            density: grid.density,
        }
    }
}

/// A major fire rendered as a map marker.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiMajorFire {
    /// Ignition date (ISO 8601).
    pub date: NaiveDate,
    /// Municipality name.
    pub municipality: String,
    /// Province display name.
    pub province: String,
    /// Cause variant name.
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

impl From<MajorFireMarker> for ApiMajorFire {
    fn from(marker: MajorFireMarker) -> Self {
        Self {
            date: marker.date,
            municipality: marker.municipality,
            province: marker.province.name().to_string(),
            cause: marker.cause,
            cause_label: marker.cause_label,
            area_ha: marker.area_ha,
            latitude: marker.latitude,
            longitude: marker.longitude,
            marker_size: marker.marker_size,
        }
    }
}
