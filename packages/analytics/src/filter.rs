//! Record filtering.
//!
//! The server filters the table once per request; every chart query then
//! runs over the same filtered slice.

use fire_map_analytics_models::FireFilter;
use fire_map_fire_models::FireRecord;

/// Applies a filter to the record table.
#[must_use]
pub fn apply<'a>(records: &'a [FireRecord], filter: &FireFilter) -> Vec<&'a FireRecord> {
    records.iter().filter(|r| filter.matches(r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;
    use fire_map_fire_models::FireCause;
    use fire_map_geography_models::AutonomousCommunity;

    fn table() -> Vec<fire_map_fire_models::FireRecord> {
        vec![
            testing::galicia(1990, 50.0),
            testing::galicia(1991, 700.0),
            testing::madrid(1991, 3.0),
            testing::madrid(1995, 20.0),
        ]
    }

    #[test]
    fn unfiltered_returns_everything() {
        let table = table();
        let filtered = apply(&table, &FireFilter::default());
        assert_eq!(filtered.len(), table.len());
    }

    #[test]
    fn each_constraint_narrows_the_result_set() {
        let table = table();

        let by_year = FireFilter {
            year_from: Some(1991),
            ..FireFilter::default()
        };
        let by_year_and_community = FireFilter {
            year_from: Some(1991),
            community: Some(AutonomousCommunity::Galicia),
            ..FireFilter::default()
        };
        let by_year_community_and_cause = FireFilter {
            year_from: Some(1991),
            community: Some(AutonomousCommunity::Galicia),
            causes: vec![FireCause::Lightning],
            ..FireFilter::default()
        };

        let all = apply(&table, &FireFilter::default()).len();
        let narrowed = apply(&table, &by_year).len();
        let narrower = apply(&table, &by_year_and_community).len();
        let narrowest = apply(&table, &by_year_community_and_cause).len();

        assert!(narrowed <= all);
        assert!(narrower <= narrowed);
        assert!(narrowest <= narrower);
        assert_eq!(narrowest, 0);
    }

    #[test]
    fn filtered_records_all_satisfy_the_filter() {
        let table = table();
        let filter = FireFilter {
            year_from: Some(1990),
            year_to: Some(1991),
            community: Some(AutonomousCommunity::Galicia),
            causes: vec![FireCause::Arson],
        };

        let filtered = apply(&table, &filter);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| filter.matches(r)));
    }
}
