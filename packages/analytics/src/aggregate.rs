//! Group-by aggregations: choropleth totals, regional ranking, cause
//! evolution, and the major-fire markers for the focus view.

use std::collections::{BTreeMap, BTreeSet};

use fire_map_analytics_models::{
    CauseEvolution, CauseSeries, CauseYearPoint, MajorFireMarker, ProvinceBurnedArea,
    RankingRow, RankingScope, RegionalRanking,
};
use fire_map_fire_models::{FireCause, FireRecord};
use fire_map_geography_models::AutonomousCommunity;

/// How many communities the national ranking shows.
pub const RANKING_TOP_COMMUNITIES: usize = 10;

/// Exponent shaping the log-scaled major-fire marker sizes.
const MARKER_SIZE_EXPONENT: f64 = 1.2;

/// Sums burned area and incident counts per province.
///
/// Rows are ordered by province code. Provinces without incidents are
/// omitted (they render as unshaded cells on the map).
#[must_use]
pub fn burned_area_by_province(records: &[&FireRecord]) -> Vec<ProvinceBurnedArea> {
    let mut by_province: BTreeMap<_, (u64, f64)> = BTreeMap::new();

    for record in records {
        let entry = by_province.entry(record.province).or_default();
        entry.0 += 1;
        entry.1 += record.area_ha;
    }

    by_province
        .into_iter()
        .map(|(province, (fires, area_ha))| ProvinceBurnedArea {
            province,
            fires,
            area_ha,
        })
        .collect()
}

/// Ranks regions by mean annual burned area.
///
/// Compares communities nationally (top 10), or the provinces of a single
/// community when the filtered set only spans one. Mean annual figures
/// divide by the number of distinct years in the set; shares are of the
/// set's total burned area and are computed before the top-10 cut.
#[must_use]
pub fn regional_ranking(records: &[&FireRecord]) -> RegionalRanking {
    let n_years = distinct_years(records).len().max(1);

    let communities: BTreeSet<AutonomousCommunity> =
        records.iter().map(|r| r.community).collect();

    let (scope, mut rows) = if let Some(community) = single_community(&communities) {
        let rows = ranking_rows(records, n_years, |r| r.province.name());
        (RankingScope::Provinces(community), rows)
    } else {
        let rows = ranking_rows(records, n_years, |r| r.community.name());
        (RankingScope::Communities, rows)
    };

    rows.sort_by(|a, b| b.mean_annual_area_ha.total_cmp(&a.mean_annual_area_ha));
    if scope == RankingScope::Communities {
        rows.truncate(RANKING_TOP_COMMUNITIES);
    }

    let mean_annual_area_ha = if rows.is_empty() {
        0.0
    } else {
        #[allow(clippy::cast_precision_loss)]
        let count = rows.len() as f64;
        rows.iter().map(|r| r.mean_annual_area_ha).sum::<f64>() / count
    };

    RegionalRanking {
        scope,
        mean_annual_area_ha,
        rows,
    }
}

fn single_community(communities: &BTreeSet<AutonomousCommunity>) -> Option<AutonomousCommunity> {
    if communities.len() == 1 {
        communities.iter().next().copied()
    } else {
        None
    }
}

fn ranking_rows(
    records: &[&FireRecord],
    n_years: usize,
    key: impl Fn(&FireRecord) -> &'static str,
) -> Vec<RankingRow> {
    let mut by_region: BTreeMap<&'static str, (u64, f64)> = BTreeMap::new();

    for record in records {
        let entry = by_region.entry(key(record)).or_default();
        entry.0 += 1;
        entry.1 += record.area_ha;
    }

    let total_area: f64 = by_region.values().map(|(_, area)| area).sum();
    #[allow(clippy::cast_precision_loss)]
    let n_years = n_years as f64;

    by_region
        .into_iter()
        .map(|(label, (fires, area_ha))| {
            #[allow(clippy::cast_precision_loss)]
            let fires_f = fires as f64;
            RankingRow {
                label: label.to_string(),
                fires,
                area_ha,
                mean_annual_fires: fires_f / n_years,
                mean_annual_area_ha: area_ha / n_years,
                share_pct: if total_area > 0.0 {
                    area_ha / total_area * 100.0
                } else {
                    0.0
                },
            }
        })
        .collect()
}

/// Computes each cause's per-year share of incidents.
///
/// Series are ordered by mean share descending; a cause only has points for
/// years in which it was recorded.
#[must_use]
pub fn cause_evolution(records: &[&FireRecord]) -> CauseEvolution {
    let mut by_year_cause: BTreeMap<(i32, FireCause), u64> = BTreeMap::new();
    let mut year_totals: BTreeMap<i32, u64> = BTreeMap::new();

    for record in records {
        *by_year_cause.entry((record.year, record.cause)).or_default() += 1;
        *year_totals.entry(record.year).or_default() += 1;
    }

    let years: Vec<i32> = year_totals.keys().copied().collect();

    let mut series: Vec<CauseSeries> = FireCause::all()
        .iter()
        .filter_map(|cause| {
            let points: Vec<CauseYearPoint> = years
                .iter()
                .filter_map(|year| {
                    let fires = *by_year_cause.get(&(*year, *cause))?;
                    #[allow(clippy::cast_precision_loss)]
                    let pct = fires as f64 / year_totals[year] as f64 * 100.0;
                    Some(CauseYearPoint {
                        year: *year,
                        fires,
                        pct,
                    })
                })
                .collect();

            if points.is_empty() {
                return None;
            }
            Some(CauseSeries {
                cause: *cause,
                label: cause.name().to_string(),
                points,
            })
        })
        .collect();

    series.sort_by(|a, b| mean_share(b).total_cmp(&mean_share(a)));

    CauseEvolution { years, series }
}

fn mean_share(series: &CauseSeries) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let count = series.points.len() as f64;
    series.points.iter().map(|p| p.pct).sum::<f64>() / count
}

/// Collects the major fires (≥ 500 ha) of a community as map markers.
///
/// Marker sizes grow with `ln(1 + area)^1.2` so the largest fires stand out
/// without drowning the rest.
#[must_use]
pub fn major_fires(
    records: &[&FireRecord],
    community: AutonomousCommunity,
) -> Vec<MajorFireMarker> {
    records
        .iter()
        .filter(|r| r.is_major() && r.community == community)
        .map(|r| MajorFireMarker {
            date: r.date,
            municipality: r.municipality.clone(),
            province: r.province,
            cause: r.cause,
            cause_label: r.cause.name().to_string(),
            area_ha: r.area_ha,
            latitude: r.latitude,
            longitude: r.longitude,
            marker_size: r.area_ha.ln_1p().powf(MARKER_SIZE_EXPONENT),
        })
        .collect()
}

fn distinct_years(records: &[&FireRecord]) -> BTreeSet<i32> {
    records.iter().map(|r| r.year).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;
    use fire_map_geography_models::Province;

    #[test]
    fn province_totals_sum_to_the_set_total() {
        let table = vec![
            testing::galicia(1990, 50.0),
            testing::galicia(1991, 700.0),
            testing::madrid(1991, 3.0),
        ];
        let records: Vec<&_> = table.iter().collect();

        let per_province = burned_area_by_province(&records);
        let summed: f64 = per_province.iter().map(|p| p.area_ha).sum();
        let total: f64 = records.iter().map(|r| r.area_ha).sum();

        assert!((summed - total).abs() < 1e-9);
    }

    #[test]
    fn province_totals_count_every_fire() {
        let table = vec![
            testing::galicia(1990, 50.0),
            testing::galicia(1991, 700.0),
            testing::madrid(1991, 3.0),
        ];
        let records: Vec<&_> = table.iter().collect();

        let per_province = burned_area_by_province(&records);
        let counted: u64 = per_province.iter().map(|p| p.fires).sum();
        assert_eq!(counted, 3);
    }

    #[test]
    fn ranking_compares_communities_by_default() {
        let table = vec![
            testing::galicia(1990, 100.0),
            testing::galicia(1991, 100.0),
            testing::madrid(1990, 10.0),
        ];
        let records: Vec<&_> = table.iter().collect();

        let ranking = regional_ranking(&records);
        assert_eq!(ranking.scope, RankingScope::Communities);
        assert_eq!(ranking.rows.len(), 2);
        assert_eq!(ranking.rows[0].label, "Galicia");
    }

    #[test]
    fn single_community_switches_to_provinces() {
        let table = vec![
            testing::record(
                1990,
                8,
                Province::Ourense,
                fire_map_fire_models::FireCause::Arson,
                100.0,
            ),
            testing::record(
                1990,
                8,
                Province::Lugo,
                fire_map_fire_models::FireCause::Arson,
                40.0,
            ),
        ];
        let records: Vec<&_> = table.iter().collect();

        let ranking = regional_ranking(&records);
        assert_eq!(
            ranking.scope,
            RankingScope::Provinces(fire_map_geography_models::AutonomousCommunity::Galicia)
        );
        assert_eq!(ranking.rows.len(), 2);
        assert_eq!(ranking.rows[0].label, "Ourense");
    }

    #[test]
    fn mean_annual_figures_divide_by_distinct_years() {
        let table = vec![
            testing::galicia(1990, 100.0),
            testing::galicia(1991, 100.0),
            testing::madrid(1990, 50.0),
        ];
        let records: Vec<&_> = table.iter().collect();

        let ranking = regional_ranking(&records);
        let galicia = ranking.rows.iter().find(|r| r.label == "Galicia").unwrap();
        assert!((galicia.mean_annual_area_ha - 100.0).abs() < 1e-9);
        assert!((galicia.mean_annual_fires - 1.0).abs() < 1e-9);
    }

    #[test]
    fn ranking_shares_sum_to_one_hundred() {
        let table = vec![
            testing::galicia(1990, 75.0),
            testing::madrid(1990, 25.0),
        ];
        let records: Vec<&_> = table.iter().collect();

        let ranking = regional_ranking(&records);
        let share_sum: f64 = ranking.rows.iter().map(|r| r.share_pct).sum();
        assert!((share_sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn community_ranking_is_capped_at_ten() {
        use fire_map_fire_models::FireCause;

        // One fire in a province of 11 different communities.
        let provinces = [
            Province::Ourense,
            Province::Madrid,
            Province::Sevilla,
            Province::Barcelona,
            Province::Valencia,
            Province::Zaragoza,
            Province::Toledo,
            Province::Murcia,
            Province::Navarra,
            Province::Cantabria,
            Province::Asturias,
        ];
        let table: Vec<_> = provinces
            .iter()
            .map(|p| testing::record(1990, 8, *p, FireCause::Unknown, 10.0))
            .collect();
        let records: Vec<&_> = table.iter().collect();

        let ranking = regional_ranking(&records);
        assert_eq!(ranking.rows.len(), RANKING_TOP_COMMUNITIES);
    }

    #[test]
    fn empty_set_yields_empty_ranking() {
        let ranking = regional_ranking(&[]);
        assert!(ranking.rows.is_empty());
        assert!(ranking.mean_annual_area_ha.abs() < f64::EPSILON);
    }

    #[test]
    fn cause_shares_sum_to_one_hundred_per_year() {
        use fire_map_fire_models::FireCause;

        let table = vec![
            testing::record(1990, 8, Province::Ourense, FireCause::Arson, 1.0),
            testing::record(1990, 8, Province::Ourense, FireCause::Arson, 1.0),
            testing::record(1990, 8, Province::Ourense, FireCause::Lightning, 1.0),
            testing::record(1991, 8, Province::Ourense, FireCause::Unknown, 1.0),
        ];
        let records: Vec<&_> = table.iter().collect();

        let evolution = cause_evolution(&records);
        for year in &evolution.years {
            let share_sum: f64 = evolution
                .series
                .iter()
                .flat_map(|s| s.points.iter())
                .filter(|p| p.year == *year)
                .map(|p| p.pct)
                .sum();
            assert!((share_sum - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn cause_series_are_ordered_by_mean_share() {
        use fire_map_fire_models::FireCause;

        let table = vec![
            testing::record(1990, 8, Province::Ourense, FireCause::Arson, 1.0),
            testing::record(1990, 8, Province::Ourense, FireCause::Arson, 1.0),
            testing::record(1990, 8, Province::Ourense, FireCause::Arson, 1.0),
            testing::record(1990, 8, Province::Ourense, FireCause::Lightning, 1.0),
        ];
        let records: Vec<&_> = table.iter().collect();

        let evolution = cause_evolution(&records);
        assert_eq!(evolution.series[0].cause, FireCause::Arson);
        assert_eq!(evolution.series[1].cause, FireCause::Lightning);
        assert_eq!(evolution.series.len(), 2);
    }

    #[test]
    fn major_fires_only_include_the_community_at_threshold() {
        use fire_map_geography_models::AutonomousCommunity;

        let table = vec![
            testing::galicia(1990, 499.9),
            testing::galicia(1990, 500.0),
            testing::galicia(1990, 12_000.0),
            testing::madrid(1990, 800.0),
        ];
        let records: Vec<&_> = table.iter().collect();

        let markers = major_fires(&records, AutonomousCommunity::Galicia);
        assert_eq!(markers.len(), 2);
        assert!(markers.iter().all(|m| m.area_ha >= 500.0));
    }

    #[test]
    fn marker_size_grows_with_area() {
        use fire_map_geography_models::AutonomousCommunity;

        let table = vec![
            testing::galicia(1990, 500.0),
            testing::galicia(1990, 12_000.0),
        ];
        let records: Vec<&_> = table.iter().collect();

        let markers = major_fires(&records, AutonomousCommunity::Galicia);
        assert!(markers[1].marker_size > markers[0].marker_size);
    }
}
