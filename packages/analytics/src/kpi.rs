//! KPI card queries: totals, formatted burned area, peak year, and the
//! incident-count trend.

use std::collections::BTreeMap;

use fire_map_analytics_models::KpiSummary;
use fire_map_fire_models::{FireRecord, Trend};

/// Relative change beyond which the trend counts as rising or falling.
pub const TREND_CHANGE_THRESHOLD: f64 = 0.05;

/// Number of monthly buckets compared on each side when the filtered set
/// spans a single year.
pub const TREND_COMPARISON_MONTHS: usize = 6;

/// Burned-area thresholds for the formatted KPI label.
const MILLION_HA: f64 = 1_000_000.0;
const THOUSAND_HA: f64 = 1_000.0;

/// Computes the KPI card values for a filtered set.
#[must_use]
pub fn summary(records: &[&FireRecord]) -> KpiSummary {
    let total_area_ha: f64 = records.iter().map(|r| r.area_ha).sum();

    KpiSummary {
        total_fires: records.len() as u64,
        total_area_ha,
        area_label: format_burned_area(total_area_ha),
        peak_year: peak_year(records),
        trend: fire_trend(records),
    }
}

/// Formats a burned-area total as the KPI label (`>1.5M ha`, `>234.5K ha`).
#[must_use]
pub fn format_burned_area(total_ha: f64) -> String {
    if total_ha >= MILLION_HA {
        format!(">{:.1}M ha", total_ha / MILLION_HA)
    } else {
        format!(">{:.1}K ha", total_ha / THOUSAND_HA)
    }
}

/// Returns the year with the largest total burned area, when the set is
/// non-empty.
#[must_use]
pub fn peak_year(records: &[&FireRecord]) -> Option<i32> {
    let mut by_year: BTreeMap<i32, f64> = BTreeMap::new();
    for record in records {
        *by_year.entry(record.year).or_default() += record.area_ha;
    }

    by_year
        .into_iter()
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(year, _)| year)
}

/// Computes the incident-count trend.
///
/// Compares the last year against the previous one when the set spans
/// multiple years; otherwise compares the last
/// [`TREND_COMPARISON_MONTHS`] monthly buckets against the preceding ones.
/// A change beyond ±[`TREND_CHANGE_THRESHOLD`] counts as rising/falling.
#[must_use]
pub fn fire_trend(records: &[&FireRecord]) -> Trend {
    let mut counts: BTreeMap<(i32, u32), u64> = BTreeMap::new();
    for record in records {
        *counts.entry((record.year, record.month)).or_default() += 1;
    }

    let years: Vec<i32> = counts
        .keys()
        .map(|(year, _)| *year)
        .collect::<std::collections::BTreeSet<_>>()
        .into_iter()
        .collect();

    let (current, previous) = if years.len() >= 2 {
        let last = years[years.len() - 1];
        let prior = years[years.len() - 2];
        (year_total(&counts, last), year_total(&counts, prior))
    } else {
        recent_month_totals(&counts)
    };

    trend_from(current, previous)
}

fn year_total(counts: &BTreeMap<(i32, u32), u64>, year: i32) -> u64 {
    counts
        .iter()
        .filter(|((y, _), _)| *y == year)
        .map(|(_, n)| n)
        .sum()
}

/// Splits the most recent monthly buckets into a (current, previous) pair.
fn recent_month_totals(counts: &BTreeMap<(i32, u32), u64>) -> (u64, u64) {
    let buckets: Vec<u64> = counts.values().copied().collect();
    let recent = &buckets[buckets.len().saturating_sub(2 * TREND_COMPARISON_MONTHS)..];

    let current: u64 = recent[recent.len().saturating_sub(TREND_COMPARISON_MONTHS)..]
        .iter()
        .sum();
    let previous: u64 = recent[..recent.len().min(TREND_COMPARISON_MONTHS)].iter().sum();

    (current, previous)
}

fn trend_from(current: u64, previous: u64) -> Trend {
    if previous == 0 {
        return Trend::NoPriorData;
    }

    #[allow(clippy::cast_precision_loss)]
    let diff_pct = (current as f64 - previous as f64) / previous as f64;

    if diff_pct > TREND_CHANGE_THRESHOLD {
        Trend::Rising
    } else if diff_pct < -TREND_CHANGE_THRESHOLD {
        Trend::Falling
    } else {
        Trend::Stable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn formats_millions_of_hectares() {
        assert_eq!(format_burned_area(1_500_000.0), ">1.5M ha");
        assert_eq!(format_burned_area(1_000_000.0), ">1.0M ha");
    }

    #[test]
    fn formats_thousands_of_hectares() {
        assert_eq!(format_burned_area(234_500.0), ">234.5K ha");
        assert_eq!(format_burned_area(0.0), ">0.0K ha");
    }

    #[test]
    fn peak_year_takes_the_largest_burned_area() {
        let table = vec![
            testing::galicia(1990, 100.0),
            testing::galicia(1991, 50.0),
            testing::galicia(1991, 40.0),
            testing::galicia(1994, 2_000.0),
        ];
        let records: Vec<&_> = table.iter().collect();
        assert_eq!(peak_year(&records), Some(1994));
    }

    #[test]
    fn peak_year_of_empty_set_is_none() {
        assert_eq!(peak_year(&[]), None);
    }

    #[test]
    fn trend_rises_on_year_over_year_growth() {
        let mut table = Vec::new();
        for _ in 0..10 {
            table.push(testing::galicia(1990, 1.0));
        }
        for _ in 0..12 {
            table.push(testing::galicia(1991, 1.0));
        }
        let records: Vec<&_> = table.iter().collect();
        assert_eq!(fire_trend(&records), Trend::Rising);
    }

    #[test]
    fn trend_falls_on_year_over_year_decline() {
        let mut table = Vec::new();
        for _ in 0..10 {
            table.push(testing::galicia(1990, 1.0));
        }
        for _ in 0..5 {
            table.push(testing::galicia(1991, 1.0));
        }
        let records: Vec<&_> = table.iter().collect();
        assert_eq!(fire_trend(&records), Trend::Falling);
    }

    #[test]
    fn trend_is_stable_within_the_threshold() {
        let mut table = Vec::new();
        for _ in 0..100 {
            table.push(testing::galicia(1990, 1.0));
        }
        for _ in 0..103 {
            table.push(testing::galicia(1991, 1.0));
        }
        let records: Vec<&_> = table.iter().collect();
        assert_eq!(fire_trend(&records), Trend::Stable);
    }

    #[test]
    fn single_year_compares_recent_months() {
        use fire_map_fire_models::FireCause;
        use fire_map_geography_models::Province;

        let mut table = Vec::new();
        for month in 1..=6 {
            table.push(testing::record(
                1990,
                month,
                Province::Ourense,
                FireCause::Arson,
                1.0,
            ));
        }
        for month in 7..=12 {
            for _ in 0..3 {
                table.push(testing::record(
                    1990,
                    month,
                    Province::Ourense,
                    FireCause::Arson,
                    1.0,
                ));
            }
        }
        let records: Vec<&_> = table.iter().collect();
        assert_eq!(fire_trend(&records), Trend::Rising);
    }

    #[test]
    fn empty_set_has_no_prior_data() {
        assert_eq!(fire_trend(&[]), Trend::NoPriorData);
    }

    #[test]
    fn summary_reports_filtered_totals() {
        let table = vec![
            testing::galicia(1990, 100.0),
            testing::galicia(1991, 400.0),
        ];
        let records: Vec<&_> = table.iter().collect();

        let kpis = summary(&records);
        assert_eq!(kpis.total_fires, 2);
        assert!((kpis.total_area_ha - 500.0).abs() < 1e-9);
        assert_eq!(kpis.area_label, ">0.5K ha");
        assert_eq!(kpis.peak_year, Some(1991));
    }
}
