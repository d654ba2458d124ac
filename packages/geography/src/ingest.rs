//! Province boundary ingestion from the `GeoJSON` file.
//!
//! Each feature is matched to the canonical province table via its
//! `Texto_Alt` property. Features that cannot be matched or whose geometry
//! is unusable are dropped with a warning; the load only fails when no
//! usable feature remains.

use std::path::Path;

use geo::MultiPolygon;
use geojson::{FeatureCollection, GeoJson};

use fire_map_geography_models::Province;

use crate::GeoError;
use crate::atlas::{ProvinceAtlas, ProvinceShape, shape_centroid};

/// Feature property holding the province display name.
const PROVINCE_NAME_PROPERTY: &str = "Texto_Alt";

/// Loads the province-boundary `GeoJSON` and builds the [`ProvinceAtlas`].
///
/// # Errors
///
/// Returns [`GeoError`] if the file cannot be read, is not valid `GeoJSON`,
/// or contains no usable province feature.
pub fn load_province_atlas(path: &Path) -> Result<ProvinceAtlas, GeoError> {
    let raw = std::fs::read_to_string(path)?;
    let atlas = parse_province_atlas(&raw)?;
    log::info!(
        "Loaded {} province boundaries from {} ({} communities after dissolve)",
        atlas.provinces().len(),
        path.display(),
        atlas.communities().len(),
    );
    Ok(atlas)
}

/// Parses a province-boundary `GeoJSON` string into a [`ProvinceAtlas`].
///
/// # Errors
///
/// Returns [`GeoError`] if the input is not a `GeoJSON` feature collection
/// or contains no usable province feature.
pub fn parse_province_atlas(raw: &str) -> Result<ProvinceAtlas, GeoError> {
    let geojson: GeoJson = raw.parse()?;
    let GeoJson::FeatureCollection(collection) = geojson else {
        return Err(GeoError::Conversion {
            message: "Boundary file is not a GeoJSON FeatureCollection".to_string(),
        });
    };

    let provinces = collect_province_shapes(collection);
    if provinces.is_empty() {
        return Err(GeoError::Conversion {
            message: "Boundary file contains no usable province feature".to_string(),
        });
    }

    if provinces.len() < Province::all().len() {
        log::warn!(
            "Boundary file covers {} of {} provinces",
            provinces.len(),
            Province::all().len(),
        );
    }

    Ok(ProvinceAtlas::new(provinces))
}

fn collect_province_shapes(collection: FeatureCollection) -> Vec<ProvinceShape> {
    let mut provinces: Vec<ProvinceShape> = Vec::new();

    for feature in collection.features {
        let Some(name) = feature
            .properties
            .as_ref()
            .and_then(|p| p.get(PROVINCE_NAME_PROPERTY))
            .and_then(|v| v.as_str())
        else {
            log::warn!("Skipping boundary feature without a {PROVINCE_NAME_PROPERTY} property");
            continue;
        };

        let Some(province) = Province::from_name(name) else {
            log::warn!("Skipping boundary feature for unknown province {name:?}");
            continue;
        };

        let Some(geometry) = feature.geometry.and_then(to_multipolygon) else {
            log::warn!("Skipping unusable geometry for province {name}");
            continue;
        };

        if provinces.iter().any(|s| s.province == province) {
            log::warn!("Skipping duplicate boundary feature for province {name}");
            continue;
        }

        let centroid = shape_centroid(&geometry);
        provinces.push(ProvinceShape {
            province,
            geometry,
            centroid,
        });
    }

    provinces
}

/// Converts a `GeoJSON` geometry into a [`MultiPolygon`]. Handles both
/// `Polygon` and `MultiPolygon` geometry types.
fn to_multipolygon(geometry: geojson::Geometry) -> Option<MultiPolygon<f64>> {
    let geo_geom: geo::Geometry<f64> = geometry.try_into().ok()?;
    match geo_geom {
        geo::Geometry::MultiPolygon(mp) => Some(mp),
        geo::Geometry::Polygon(p) => Some(MultiPolygon(vec![p])),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fire_map_geography_models::AutonomousCommunity;

    fn feature(name: &str, x0: f64) -> String {
        format!(
            r#"{{"type": "Feature",
                "properties": {{"Texto_Alt": "{name}", "CCAA": "ignored"}},
                "geometry": {{"type": "Polygon", "coordinates":
                    [[[{x0}, 0.0], [{x1}, 0.0], [{x1}, 1.0], [{x0}, 1.0], [{x0}, 0.0]]]}}}}"#,
            x1 = x0 + 1.0,
        )
    }

    fn collection(features: &[String]) -> String {
        format!(
            r#"{{"type": "FeatureCollection", "features": [{}]}}"#,
            features.join(",")
        )
    }

    #[test]
    fn parses_known_provinces() {
        let raw = collection(&[feature("Ourense", 0.0), feature("Pontevedra", 1.0)]);
        let atlas = parse_province_atlas(&raw).unwrap();

        assert_eq!(atlas.provinces().len(), 2);
        assert!(atlas.community(AutonomousCommunity::Galicia).is_some());
    }

    #[test]
    fn skips_unknown_province_names() {
        let raw = collection(&[feature("Ourense", 0.0), feature("Atlantis", 1.0)]);
        let atlas = parse_province_atlas(&raw).unwrap();

        assert_eq!(atlas.provinces().len(), 1);
    }

    #[test]
    fn skips_duplicate_features() {
        let raw = collection(&[feature("Ourense", 0.0), feature("Ourense", 1.0)]);
        let atlas = parse_province_atlas(&raw).unwrap();

        assert_eq!(atlas.provinces().len(), 1);
    }

    #[test]
    fn rejects_collection_without_usable_features() {
        let raw = collection(&[feature("Atlantis", 0.0)]);
        assert!(parse_province_atlas(&raw).is_err());
    }

    #[test]
    fn rejects_non_feature_collection_input() {
        let raw = r#"{"type": "Point", "coordinates": [0.0, 0.0]}"#;
        assert!(parse_province_atlas(raw).is_err());
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(parse_province_atlas("not geojson").is_err());
    }
}
