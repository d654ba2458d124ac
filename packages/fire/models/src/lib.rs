#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Fire taxonomy types and the canonical fire record.
//!
//! This crate defines the shared vocabulary of the fire-map system: ignition
//! causes (as coded in the national fire statistics), size classification by
//! burned area, trend direction for the KPI cards, and the cleaned in-memory
//! record that every aggregation query runs over.

use chrono::NaiveDate;
use fire_map_geography_models::{AutonomousCommunity, Province};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Burned area (hectares) at or below which an incident is an outbreak.
pub const OUTBREAK_MAX_HA: f64 = 1.0;

/// Burned area (hectares) at or above which an incident is a major fire.
pub const MAJOR_FIRE_MIN_HA: f64 = 500.0;

/// Ignition cause of a fire incident, keyed by the numeric cause codes used
/// in the fire statistics CSV.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum FireCause {
    /// Code 1: lightning strike
    Lightning = 1,
    /// Code 2: negligence
    Negligence = 2,
    /// Code 3: accident
    Accident = 3,
    /// Code 4: intentional (arson)
    Arson = 4,
    /// Code 5: cause never determined
    Unknown = 5,
    /// Code 6: rekindled from an earlier fire
    Rekindled = 6,
}

/// Error returned when a numeric code does not map to a known [`FireCause`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidCauseError {
    /// The invalid cause code that was provided.
    pub code: u8,
}

impl std::fmt::Display for InvalidCauseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid cause code {}: expected 1-6", self.code)
    }
}

impl std::error::Error for InvalidCauseError {}

impl FireCause {
    /// Returns the numeric code of this cause.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Creates a cause from its numeric code.
    ///
    /// # Errors
    ///
    /// Returns an error if the code is not in the range 1-6.
    pub const fn from_code(code: u8) -> Result<Self, InvalidCauseError> {
        match code {
            1 => Ok(Self::Lightning),
            2 => Ok(Self::Negligence),
            3 => Ok(Self::Accident),
            4 => Ok(Self::Arson),
            5 => Ok(Self::Unknown),
            6 => Ok(Self::Rekindled),
            _ => Err(InvalidCauseError { code }),
        }
    }

    /// Returns the display name used as the aggregation key in charts.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lightning => "Por rayo",
            Self::Negligence => "Negligencia",
            Self::Accident => "Accidente",
            Self::Arson => "Intencionado",
            Self::Unknown => "De origen desconocido",
            Self::Rekindled => "Reproducido",
        }
    }

    /// Returns all variants of this enum, in code order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Lightning,
            Self::Negligence,
            Self::Accident,
            Self::Arson,
            Self::Unknown,
            Self::Rekindled,
        ]
    }
}

/// Size classification of a fire incident by burned area.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum FireSizeClass {
    /// At most 1 ha burned ("conato").
    Outbreak,
    /// Between 1 and 500 ha burned.
    Fire,
    /// 500 ha or more burned.
    MajorFire,
}

impl FireSizeClass {
    /// Classifies an incident by its burned area in hectares.
    #[must_use]
    pub fn classify(area_ha: f64) -> Self {
        if area_ha <= OUTBREAK_MAX_HA {
            Self::Outbreak
        } else if area_ha < MAJOR_FIRE_MIN_HA {
            Self::Fire
        } else {
            Self::MajorFire
        }
    }

    /// Returns the display label for this size class.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Outbreak => "Conato (<1 ha)",
            Self::Fire => "Incendio (1–500 ha)",
            Self::MajorFire => "Gran incendio (>500 ha)",
        }
    }
}

/// Direction of the incident-count trend shown on the KPI cards.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Trend {
    /// The current period has more than 5% more incidents than the previous.
    Rising,
    /// The current period has more than 5% fewer incidents than the previous.
    Falling,
    /// The change between periods is within ±5%.
    Stable,
    /// There is no previous period to compare against.
    NoPriorData,
}

impl Trend {
    /// Returns the display label for this trend.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rising => "Ascendente",
            Self::Falling => "Descendente",
            Self::Stable => "Estable",
            Self::NoPriorData => "Sin datos previos",
        }
    }
}

/// A cleaned fire incident record.
///
/// Loaded once from the statistics CSV at startup and never mutated; all
/// dashboard views are read-only projections over a slice of these.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FireRecord {
    /// Source record identifier.
    pub id: i64,
    /// Ignition date.
    pub date: NaiveDate,
    /// Ignition year (derived from `date`).
    pub year: i32,
    /// Ignition month, 1-12 (derived from `date`).
    pub month: u32,
    /// ISO week of the year, 1-53 (derived from `date`).
    pub week: u32,
    /// Latitude of the ignition point.
    pub latitude: f64,
    /// Longitude of the ignition point.
    pub longitude: f64,
    /// Whether the source gave explicit coordinates rather than a
    /// municipality-level approximation.
    pub explicit_coords: bool,
    /// Autonomous Community the fire occurred in.
    pub community: AutonomousCommunity,
    /// Province the fire occurred in.
    pub province: Province,
    /// Municipality name as reported by the source.
    pub municipality: String,
    /// Ignition cause.
    pub cause: FireCause,
    /// Size classification by burned area.
    pub size_class: FireSizeClass,
    /// Burned area in hectares.
    pub area_ha: f64,
    /// Fatalities, when reported.
    pub deaths: Option<i64>,
    /// Injuries, when reported.
    pub injuries: Option<i64>,
    /// Minutes until the fire was under control, when reported.
    pub control_time_min: Option<i64>,
    /// Minutes until the fire was extinguished, when reported.
    pub extinction_time_min: Option<i64>,
    /// Personnel deployed, when reported.
    pub personnel: Option<i64>,
    /// Ground and air resources deployed, when reported.
    pub resources: Option<i64>,
    /// Extinction cost in euros, when reported.
    pub operational_cost: Option<f64>,
    /// Estimated economic losses in euros, when reported.
    pub economic_losses: Option<f64>,
}

impl FireRecord {
    /// Whether this incident is a major fire (≥ 500 ha burned).
    #[must_use]
    pub fn is_major(&self) -> bool {
        self.area_ha >= MAJOR_FIRE_MIN_HA
    }
}
