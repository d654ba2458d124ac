#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Province boundary ingestion and the dissolved community atlas.
//!
//! Parses the province-boundary `GeoJSON` once at startup, matches each
//! feature to the canonical province table, and dissolves provinces into
//! Autonomous Community boundaries. The resulting [`ProvinceAtlas`] is held
//! read-only by the server and drives the choropleth map layers.

pub mod atlas;
pub mod ingest;

pub use atlas::{CommunityShape, ProvinceAtlas, ProvinceShape};
pub use ingest::load_province_atlas;

use thiserror::Error;

/// Errors that can occur during geography operations.
#[derive(Debug, Error)]
pub enum GeoError {
    /// The boundary file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// `GeoJSON` parsing failed.
    #[error("GeoJSON error: {0}")]
    Geojson(#[from] geojson::Error),

    /// Data conversion error.
    #[error("Conversion error: {message}")]
    Conversion {
        /// Description of what went wrong.
        message: String,
    },
}
