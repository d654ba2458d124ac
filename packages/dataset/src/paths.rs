//! Canonical locations of the input data files.
//!
//! Both files are read once at process start. The data directory defaults
//! to `./data` and can be overridden with the `FIRE_DATA_DIR` environment
//! variable.

use std::path::PathBuf;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "FIRE_DATA_DIR";

/// Returns the data directory path.
#[must_use]
pub fn data_dir() -> PathBuf {
    std::env::var(DATA_DIR_ENV)
        .map_or_else(|_| PathBuf::from("data"), PathBuf::from)
}

/// Returns the path of the fire statistics CSV.
#[must_use]
pub fn fires_csv_path() -> PathBuf {
    data_dir().join("fires_all.csv")
}

/// Returns the path of the province-boundary `GeoJSON`.
#[must_use]
pub fn provinces_geojson_path() -> PathBuf {
    data_dir().join("provincias_espana.geojson")
}
