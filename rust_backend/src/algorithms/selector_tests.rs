#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use crate::algorithms::random::RandomSource;
    use crate::algorithms::selector::ZoneSelector;
    use crate::models::TimeZone;
    use crate::test_support::zone;

    /// Random source replaying a fixed value
    struct Constant(f64);

    impl RandomSource for Constant {
        fn next_f64(&self) -> f64 {
            self.0
        }
    }

    /// One zone per whole hour from -12 to +14
    fn hourly_catalog() -> Vec<TimeZone> {
        (-12..=14)
            .map(|h| zone(&format!("Etc/Zone{:+}", h), f64::from(h)))
            .collect()
    }

    fn offsets(zones: &[TimeZone]) -> Vec<f64> {
        zones.iter().map(|z| z.offset_hours).collect()
    }

    fn assert_invariants(selection: &[TimeZone], reference: &TimeZone) {
        assert!(selection.len() % 2 == 1, "even selection {:?}", offsets(selection));
        let unique: HashSet<i32> = selection.iter().map(TimeZone::offset_minutes).collect();
        assert_eq!(unique.len(), selection.len(), "duplicate offsets");
        assert!(selection.iter().any(|z| z.id() == reference.id()));
        assert!(selection
            .windows(2)
            .all(|w| w[0].offset_hours <= w[1].offset_hours));
    }

    /// Test the requested count is raised to an odd number of at least three
    #[test]
    fn test_target_count() {
        assert_eq!(ZoneSelector::target_count(0), 3);
        assert_eq!(ZoneSelector::target_count(3), 3);
        assert_eq!(ZoneSelector::target_count(4), 5);
        assert_eq!(ZoneSelector::target_count(7), 7);
        assert_eq!(ZoneSelector::target_count(8), 9);
    }

    /// Test a centred selection takes the same number of zones on each side
    #[test]
    fn test_balanced_selection() {
        let catalog = hourly_catalog();
        let reference = zone("Etc/Zone+0", 0.0);
        for seed in 0..20 {
            let selection = ZoneSelector::seeded(seed).select(&reference, 7, &catalog);
            assert_eq!(selection.len(), 7);
            assert_invariants(&selection, &reference);
            let below = selection.iter().filter(|z| z.offset_hours < 0.0).count();
            let above = selection.iter().filter(|z| z.offset_hours > 0.0).count();
            assert_eq!((below, above), (3, 3));
        }
    }

    /// Test even counts are rounded up
    #[test]
    fn test_even_count_rounds_up() {
        let catalog = hourly_catalog();
        let reference = zone("Etc/Zone+3", 3.0);
        let selection = ZoneSelector::seeded(1).select(&reference, 4, &catalog);
        assert_eq!(selection.len(), 5);
        assert_invariants(&selection, &reference);
    }

    /// Test duplicate offsets collapse onto the reference zone
    #[test]
    fn test_duplicate_offset_collapse() {
        let mut catalog = vec![
            zone("America/Detroit", -5.0),
            zone("America/New_York", -5.0),
            zone("America/Toronto", -5.0),
        ];
        catalog.extend(hourly_catalog().into_iter().filter(|z| z.offset_hours != -5.0));
        let reference = zone("America/New_York", -5.0);

        for seed in 0..10 {
            let selection = ZoneSelector::seeded(seed).select(&reference, 5, &catalog);
            assert_eq!(selection.len(), 5);
            let at_minus_five: Vec<_> = selection
                .iter()
                .filter(|z| z.offset_minutes() == -300)
                .map(|z| z.id().into_owned())
                .collect();
            assert_eq!(at_minus_five, vec!["America/New_York".to_string()]);
        }
    }

    /// Test a reference at the date line fills from below
    #[test]
    fn test_date_line_fills_from_below() {
        let catalog = hourly_catalog();
        let reference = zone("Pacific/Kiritimati", 14.0);
        for seed in 0..10 {
            let selection = ZoneSelector::seeded(seed).select(&reference, 7, &catalog);
            assert_eq!(selection.len(), 7);
            assert_invariants(&selection, &reference);
            let above = selection.iter().filter(|z| z.offset_hours > 14.0).count();
            assert!(above <= 1);
            assert_eq!(selection.last().map(|z| z.offset_hours), Some(14.0));
        }
    }

    /// Test the nearest fill picks the closest offsets after the random half
    #[test]
    fn test_nearest_fill_is_deterministic_for_unused() {
        let catalog = hourly_catalog();
        let reference = zone("Pacific/Kiritimati", 14.0);
        // Shuffling with 0.99 keeps every slice in its original order.
        let selector = ZoneSelector::new(Arc::new(Constant(0.99)));
        let selection = selector.select(&reference, 5, &catalog);
        assert_eq!(offsets(&selection), vec![-12.0, -11.0, 12.0, 13.0, 14.0]);
    }

    /// Test a sparse catalog takes every zone and keeps the count odd
    #[test]
    fn test_sparse_catalog_edge_case() {
        let catalog = vec![
            zone("Asia/Tokyo", 9.0),
            zone("Asia/Seoul", 9.0),
            zone("Asia/Shanghai", 8.0),
            zone("Asia/Bangkok", 7.0),
        ];
        let reference = zone("Pacific/Guam", 10.0);
        let selection = ZoneSelector::seeded(3).select(&reference, 9, &catalog);
        assert_eq!(offsets(&selection), vec![8.0, 9.0, 10.0]);
        assert_invariants(&selection, &reference);
    }

    /// Test the reference is included even when absent from the catalog
    #[test]
    fn test_reference_outside_catalog() {
        let catalog = hourly_catalog();
        let reference = TimeZone::custom(5.75, Some("Base camp"), None);
        let selection = ZoneSelector::seeded(9).select(&reference, 3, &catalog);
        assert_eq!(selection.len(), 3);
        assert_invariants(&selection, &reference);
        assert_eq!(selection[1].offset_hours, 5.75);
    }

    /// Test seeded selectors reproduce the same selection
    #[test]
    fn test_seeded_selection_is_reproducible() {
        let catalog = hourly_catalog();
        let reference = zone("Etc/Zone+1", 1.0);
        let first = ZoneSelector::seeded(77).select(&reference, 9, &catalog);
        let second = ZoneSelector::seeded(77).select(&reference, 9, &catalog);
        assert_eq!(first, second);
    }
}
