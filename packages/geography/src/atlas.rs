//! The in-memory boundary atlas.
//!
//! Holds the validated province polygons with their centroids, plus the
//! community boundaries produced by dissolving (unioning) each community's
//! member provinces. Exposes both layers as `GeoJSON` feature collections
//! for the map frontend.

use geo::{BooleanOps, BoundingRect, Centroid, MultiPolygon, Point};
use geojson::{Feature, FeatureCollection, JsonObject, JsonValue};

use fire_map_geography_models::{AutonomousCommunity, Province};

/// A province polygon with its precomputed centroid.
pub struct ProvinceShape {
    /// The province this shape belongs to.
    pub province: Province,
    /// Boundary geometry in WGS84.
    pub geometry: MultiPolygon<f64>,
    /// Centroid of the boundary.
    pub centroid: Point<f64>,
}

/// A dissolved community boundary with its precomputed centroid.
pub struct CommunityShape {
    /// The community this shape belongs to.
    pub community: AutonomousCommunity,
    /// Union of the member province boundaries.
    pub geometry: MultiPolygon<f64>,
    /// Centroid of the dissolved boundary.
    pub centroid: Point<f64>,
}

/// Pre-built boundary layers for the choropleth map.
///
/// Constructed once at startup and never mutated.
pub struct ProvinceAtlas {
    provinces: Vec<ProvinceShape>,
    communities: Vec<CommunityShape>,
}

impl ProvinceAtlas {
    /// Builds the atlas from validated province shapes, dissolving them
    /// into community boundaries.
    #[must_use]
    pub fn new(provinces: Vec<ProvinceShape>) -> Self {
        let communities = dissolve_communities(&provinces);
        Self {
            provinces,
            communities,
        }
    }

    /// Returns the province layer.
    #[must_use]
    pub fn provinces(&self) -> &[ProvinceShape] {
        &self.provinces
    }

    /// Returns the dissolved community layer.
    #[must_use]
    pub fn communities(&self) -> &[CommunityShape] {
        &self.communities
    }

    /// Looks up the dissolved shape of a community, if the boundary file
    /// contained any of its provinces.
    #[must_use]
    pub fn community(&self, community: AutonomousCommunity) -> Option<&CommunityShape> {
        self.communities.iter().find(|c| c.community == community)
    }

    /// Returns the province layer as a `GeoJSON` feature collection.
    ///
    /// Each feature carries the `Texto_Alt` (province) and `CCAA`
    /// (community) display names plus the province and community centroids,
    /// matching what the map frontend keys the choropleth and the focus
    /// view on.
    #[must_use]
    pub fn provinces_feature_collection(&self) -> FeatureCollection {
        let features = self
            .provinces
            .iter()
            .map(|shape| {
                let community = shape.province.community();
                let mut properties = JsonObject::new();
                properties.insert(
                    "Texto_Alt".to_string(),
                    JsonValue::from(shape.province.name()),
                );
                properties.insert("CCAA".to_string(), JsonValue::from(community.name()));
                insert_centroid(&mut properties, shape.centroid);

                let community_centroid = self
                    .community(community)
                    .map_or(shape.centroid, |c| c.centroid);
                properties.insert(
                    "ccaaCentroidLon".to_string(),
                    JsonValue::from(community_centroid.x()),
                );
                properties.insert(
                    "ccaaCentroidLat".to_string(),
                    JsonValue::from(community_centroid.y()),
                );

                feature_with(&shape.geometry, properties)
            })
            .collect();

        FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }

    /// Returns the dissolved community layer as a `GeoJSON` feature
    /// collection.
    #[must_use]
    pub fn communities_feature_collection(&self) -> FeatureCollection {
        let features = self
            .communities
            .iter()
            .map(|shape| {
                let mut properties = JsonObject::new();
                properties.insert("CCAA".to_string(), JsonValue::from(shape.community.name()));
                insert_centroid(&mut properties, shape.centroid);
                feature_with(&shape.geometry, properties)
            })
            .collect();

        FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }
}

/// Groups province shapes by community and unions each group's polygons
/// into a single boundary.
fn dissolve_communities(provinces: &[ProvinceShape]) -> Vec<CommunityShape> {
    let mut communities = Vec::new();

    for community in AutonomousCommunity::all() {
        let mut merged: Option<MultiPolygon<f64>> = None;

        for shape in provinces
            .iter()
            .filter(|s| s.province.community() == *community)
        {
            merged = Some(match merged {
                None => shape.geometry.clone(),
                Some(acc) => acc.union(&shape.geometry),
            });
        }

        if let Some(geometry) = merged {
            let centroid = shape_centroid(&geometry);
            communities.push(CommunityShape {
                community: *community,
                geometry,
                centroid,
            });
        }
    }

    communities
}

/// Computes the centroid of a boundary, falling back to the bounding-rect
/// center for degenerate geometries.
#[must_use]
pub fn shape_centroid(geometry: &MultiPolygon<f64>) -> Point<f64> {
    geometry.centroid().unwrap_or_else(|| {
        geometry.bounding_rect().map_or_else(
            || Point::new(0.0, 0.0),
            |rect| Point::new(rect.center().x, rect.center().y),
        )
    })
}

fn insert_centroid(properties: &mut JsonObject, centroid: Point<f64>) {
    properties.insert("centroidLon".to_string(), JsonValue::from(centroid.x()));
    properties.insert("centroidLat".to_string(), JsonValue::from(centroid.y()));
}

fn feature_with(geometry: &MultiPolygon<f64>, properties: JsonObject) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(geojson::Geometry::new(geojson::Value::from(geometry))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Area, polygon};

    fn square(x0: f64, y0: f64, size: f64) -> MultiPolygon<f64> {
        MultiPolygon(vec![polygon![
            (x: x0, y: y0),
            (x: x0 + size, y: y0),
            (x: x0 + size, y: y0 + size),
            (x: x0, y: y0 + size),
            (x: x0, y: y0),
        ]])
    }

    fn shape(province: Province, geometry: MultiPolygon<f64>) -> ProvinceShape {
        let centroid = shape_centroid(&geometry);
        ProvinceShape {
            province,
            geometry,
            centroid,
        }
    }

    #[test]
    fn dissolves_adjacent_provinces_into_one_community() {
        let atlas = ProvinceAtlas::new(vec![
            shape(Province::Ourense, square(0.0, 0.0, 1.0)),
            shape(Province::Pontevedra, square(1.0, 0.0, 1.0)),
        ]);

        assert_eq!(atlas.communities().len(), 1);
        let galicia = atlas.community(AutonomousCommunity::Galicia).unwrap();
        assert!((galicia.geometry.unsigned_area() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn keeps_communities_separate() {
        let atlas = ProvinceAtlas::new(vec![
            shape(Province::Ourense, square(0.0, 0.0, 1.0)),
            shape(Province::Madrid, square(5.0, 5.0, 1.0)),
        ]);

        assert_eq!(atlas.communities().len(), 2);
        assert!(atlas.community(AutonomousCommunity::Galicia).is_some());
        assert!(atlas.community(AutonomousCommunity::Madrid).is_some());
        assert!(atlas.community(AutonomousCommunity::Canarias).is_none());
    }

    #[test]
    fn community_centroid_sits_between_member_provinces() {
        let atlas = ProvinceAtlas::new(vec![
            shape(Province::Ourense, square(0.0, 0.0, 1.0)),
            shape(Province::Pontevedra, square(1.0, 0.0, 1.0)),
        ]);

        let galicia = atlas.community(AutonomousCommunity::Galicia).unwrap();
        assert!((galicia.centroid.x() - 1.0).abs() < 1e-9);
        assert!((galicia.centroid.y() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn province_features_carry_choropleth_keys() {
        let atlas = ProvinceAtlas::new(vec![shape(Province::Ourense, square(0.0, 0.0, 1.0))]);

        let collection = atlas.provinces_feature_collection();
        assert_eq!(collection.features.len(), 1);

        let properties = collection.features[0].properties.as_ref().unwrap();
        assert_eq!(properties["Texto_Alt"], JsonValue::from("Ourense"));
        assert_eq!(properties["CCAA"], JsonValue::from("Galicia"));
        assert!(properties.contains_key("centroidLon"));
        assert!(properties.contains_key("centroidLat"));
        assert!(properties.contains_key("ccaaCentroidLon"));
        assert!(properties.contains_key("ccaaCentroidLat"));
    }

    #[test]
    fn province_features_carry_their_community_centroid() {
        let atlas = ProvinceAtlas::new(vec![
            shape(Province::Ourense, square(0.0, 0.0, 1.0)),
            shape(Province::Pontevedra, square(1.0, 0.0, 1.0)),
        ]);

        let collection = atlas.provinces_feature_collection();
        for feature in &collection.features {
            let properties = feature.properties.as_ref().unwrap();
            assert_eq!(properties["ccaaCentroidLon"], JsonValue::from(1.0));
            assert_eq!(properties["ccaaCentroidLat"], JsonValue::from(0.5));
        }
    }

    #[test]
    fn community_features_carry_community_name() {
        let atlas = ProvinceAtlas::new(vec![shape(Province::Madrid, square(0.0, 0.0, 1.0))]);

        let collection = atlas.communities_feature_collection();
        assert_eq!(collection.features.len(), 1);

        let properties = collection.features[0].properties.as_ref().unwrap();
        assert_eq!(properties["CCAA"], JsonValue::from("Comunidad de Madrid"));
    }
}
