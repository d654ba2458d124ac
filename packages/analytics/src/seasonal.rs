//! Seasonal burned-area distribution.
//!
//! Builds a per-ISO-week Gaussian kernel density estimate of burned area,
//! the data behind the polar/cartesian seasonality chart. Only fires above
//! 20 ha contribute; the area axis is capped at the 99th percentile
//! (clamped to [100, 1000] ha) so a handful of megafires do not flatten
//! the picture.

use std::collections::BTreeMap;

use fire_map_analytics_models::SeasonalGrid;
use fire_map_fire_models::FireRecord;

/// Minimum burned area (ha) for a fire to contribute to the distribution.
pub const KDE_MIN_AREA_HA: f64 = 20.0;

/// Number of sample points along the burned-area axis.
const GRID_POINTS: usize = 500;

/// Bounds for the burned-area axis cap.
const GRID_CAP_MIN_HA: f64 = 100.0;
const GRID_CAP_MAX_HA: f64 = 1000.0;

/// Percentile of the burned areas used as the axis cap.
const GRID_CAP_PERCENTILE: f64 = 99.0;

/// Minimum number of distinct weeks needed for a meaningful distribution.
const MIN_WEEKS: usize = 3;

/// Computes the seasonal density grid for a filtered set.
///
/// Returns `None` when fewer than three distinct weeks have qualifying
/// fires. Even rows of the grid are the per-week densities (scaled by the
/// week's mean burned area), odd rows are interpolated midpoints, and the
/// whole matrix is square-root transformed for display.
#[must_use]
pub fn seasonal_distribution(records: &[&FireRecord]) -> Option<SeasonalGrid> {
    let mut by_week: BTreeMap<u32, Vec<f64>> = BTreeMap::new();
    for record in records.iter().filter(|r| r.area_ha > KDE_MIN_AREA_HA) {
        by_week.entry(record.week).or_default().push(record.area_ha);
    }

    if by_week.len() < MIN_WEEKS {
        log::debug!(
            "Seasonal distribution skipped: {} distinct weeks with fires > {KDE_MIN_AREA_HA} ha",
            by_week.len(),
        );
        return None;
    }

    let all_areas: Vec<f64> = by_week.values().flatten().copied().collect();
    let cap =
        percentile(&all_areas, GRID_CAP_PERCENTILE).clamp(GRID_CAP_MIN_HA, GRID_CAP_MAX_HA);
    let area_grid = linspace(0.0, cap, GRID_POINTS);

    let weeks: Vec<u32> = by_week.keys().copied().collect();
    let n_weeks = weeks.len();
    let mut density = vec![vec![0.0; GRID_POINTS]; 2 * n_weeks];

    for (i, areas) in by_week.values().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let mean = areas.iter().sum::<f64>() / areas.len() as f64;

        if areas.len() > 1 {
            if let Some(kde) = gaussian_kde(areas, &area_grid) {
                for (j, value) in kde.into_iter().enumerate() {
                    density[i * 2][j] = value * mean;
                }
            }
        } else {
            // A lone fire becomes a spike at the nearest grid point.
            let nearest = nearest_index(&area_grid, areas[0]);
            density[i * 2][nearest] = mean;
        }
    }

    interpolate_midpoint_rows(&mut density, n_weeks);

    for row in &mut density {
        for value in row {
            *value = value.sqrt();
        }
    }

    Some(SeasonalGrid {
        weeks,
        area_grid,
        density,
    })
}

/// Fills each odd row with the mean of its neighboring even rows; the last
/// odd row wraps around to the first week, closing the seasonal cycle.
fn interpolate_midpoint_rows(density: &mut [Vec<f64>], n_weeks: usize) {
    for i in 0..n_weeks {
        let next = if i + 1 < n_weeks { (i + 1) * 2 } else { 0 };
        for j in 0..density[0].len() {
            density[i * 2 + 1][j] = (density[i * 2][j] + density[next][j]) / 2.0;
        }
    }
}

/// Gaussian kernel density estimate over `grid`, using Scott's bandwidth.
///
/// Returns `None` when the sample has no spread (the bandwidth would be
/// zero).
fn gaussian_kde(data: &[f64], grid: &[f64]) -> Option<Vec<f64>> {
    #[allow(clippy::cast_precision_loss)]
    let n = data.len() as f64;
    let mean = data.iter().sum::<f64>() / n;
    let variance = data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
    let std_dev = variance.sqrt();
    if std_dev <= 0.0 || !std_dev.is_finite() {
        return None;
    }

    let bandwidth = n.powf(-0.2) * std_dev;
    let norm = 1.0 / (n * bandwidth * (2.0 * std::f64::consts::PI).sqrt());

    Some(
        grid.iter()
            .map(|x| {
                let sum: f64 = data
                    .iter()
                    .map(|xi| (-0.5 * ((x - xi) / bandwidth).powi(2)).exp())
                    .sum();
                norm * sum
            })
            .collect(),
    )
}

/// Linearly spaced values from `start` to `end` inclusive.
fn linspace(start: f64, end: f64, points: usize) -> Vec<f64> {
    if points < 2 {
        return vec![start];
    }
    #[allow(clippy::cast_precision_loss)]
    let step = (end - start) / (points - 1) as f64;
    (0..points)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let i = i as f64;
            step.mul_add(i, start)
        })
        .collect()
}

/// Linearly interpolated percentile, matching the conventional definition
/// over a sorted sample.
fn percentile(values: &[f64], q: f64) -> f64 {
    let mut sorted: Vec<f64> = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    if sorted.is_empty() {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let rank = (sorted.len() - 1) as f64 * q / 100.0;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let lower = rank.floor() as usize;
    let upper = (lower + 1).min(sorted.len() - 1);
    let fraction = rank - rank.floor();

    sorted[lower] + fraction * (sorted[upper] - sorted[lower])
}

fn nearest_index(grid: &[f64], value: f64) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (i, x) in grid.iter().enumerate() {
        let distance = (x - value).abs();
        if distance < best_distance {
            best = i;
            best_distance = distance;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;
    use fire_map_fire_models::{FireCause, FireRecord};
    use fire_map_geography_models::Province;

    fn week_record(year: i32, month: u32, area_ha: f64) -> FireRecord {
        testing::record(year, month, Province::Ourense, FireCause::Arson, area_ha)
    }

    #[test]
    fn needs_three_distinct_weeks() {
        let table = vec![week_record(1990, 6, 50.0), week_record(1990, 7, 80.0)];
        let records: Vec<&_> = table.iter().collect();
        assert!(seasonal_distribution(&records).is_none());
    }

    #[test]
    fn small_fires_do_not_contribute() {
        let table = vec![
            week_record(1990, 5, 5.0),
            week_record(1990, 6, 5.0),
            week_record(1990, 7, 5.0),
            week_record(1990, 8, 5.0),
        ];
        let records: Vec<&_> = table.iter().collect();
        assert!(seasonal_distribution(&records).is_none());
    }

    #[test]
    fn grid_has_two_rows_per_week() {
        let table = vec![
            week_record(1990, 5, 50.0),
            week_record(1990, 5, 70.0),
            week_record(1990, 7, 80.0),
            week_record(1990, 7, 95.0),
            week_record(1990, 9, 60.0),
            week_record(1990, 9, 40.0),
        ];
        let records: Vec<&_> = table.iter().collect();

        let grid = seasonal_distribution(&records).unwrap();
        assert_eq!(grid.weeks.len(), 3);
        assert_eq!(grid.density.len(), 6);
        assert!(grid.density.iter().all(|row| row.len() == grid.area_grid.len()));
    }

    #[test]
    fn area_axis_cap_stays_within_bounds() {
        let table = vec![
            week_record(1990, 5, 30.0),
            week_record(1990, 5, 35.0),
            week_record(1990, 7, 40.0),
            week_record(1990, 7, 45.0),
            week_record(1990, 9, 50_000.0),
            week_record(1990, 9, 25.0),
        ];
        let records: Vec<&_> = table.iter().collect();

        let grid = seasonal_distribution(&records).unwrap();
        let max_area = grid.area_grid.last().copied().unwrap();
        assert!(max_area >= 100.0);
        assert!(max_area <= 1000.0);
    }

    #[test]
    fn lone_fire_in_a_week_becomes_a_spike() {
        let table = vec![
            week_record(1990, 5, 50.0),
            week_record(1990, 7, 80.0),
            week_record(1990, 9, 60.0),
        ];
        let records: Vec<&_> = table.iter().collect();

        let grid = seasonal_distribution(&records).unwrap();
        // Even rows each hold exactly one non-zero cell.
        for week_index in 0..grid.weeks.len() {
            let non_zero = grid.density[week_index * 2]
                .iter()
                .filter(|v| **v > 0.0)
                .count();
            assert_eq!(non_zero, 1);
        }
    }

    #[test]
    fn kde_integrates_to_one() {
        let data = vec![100.0, 120.0, 140.0, 160.0, 180.0];
        let grid = linspace(-500.0, 800.0, 2_000);
        let kde = gaussian_kde(&data, &grid).unwrap();

        let step = grid[1] - grid[0];
        let integral: f64 = kde.iter().map(|v| v * step).sum();
        assert!((integral - 1.0).abs() < 0.01);
    }

    #[test]
    fn kde_of_constant_sample_is_none() {
        let data = vec![100.0, 100.0, 100.0];
        let grid = linspace(0.0, 200.0, 100);
        assert!(gaussian_kde(&data, &grid).is_none());
    }

    #[test]
    fn percentile_interpolates_linearly() {
        let values = vec![1.0, 2.0, 3.0, 4.0];
        assert!((percentile(&values, 50.0) - 2.5).abs() < 1e-9);
        assert!((percentile(&values, 0.0) - 1.0).abs() < 1e-9);
        assert!((percentile(&values, 100.0) - 4.0).abs() < 1e-9);
    }
}
