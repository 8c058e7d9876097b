#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{DateTime, TimeZone as _, Utc};

    use crate::services::catalog::{ZoneCatalog, ZoneCatalogCache};
    use crate::services::grouping::ZoneVariantGrouper;
    use crate::services::resolver::OffsetResolver;
    use crate::test_support::{small_world, FixedAuthority};

    fn catalog(authority: FixedAuthority, reference: &str) -> ZoneCatalog {
        let authority = Arc::new(authority);
        ZoneCatalog::new(
            OffsetResolver::new(authority.clone()),
            authority.as_ref(),
            reference,
            Arc::new(ZoneCatalogCache::in_memory()),
        )
    }

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    /// Test a DST location exposes its summer variant as the alternate in winter
    #[test]
    fn test_winter_current_has_summer_alternate() {
        let catalog = catalog(small_world(), "America/New_York");
        let groups = ZoneVariantGrouper::new().group(&catalog, at(2026, 1, 15)).unwrap();
        let new_york = groups.iter().find(|g| g.location == "New York").unwrap();

        assert_eq!(new_york.region, "America");
        assert_eq!(new_york.current.offset_hours, -5.0);
        assert_eq!(new_york.alternate.as_ref().map(|z| z.offset_hours), Some(-4.0));
        assert_eq!(new_york.variants.len(), 2);
    }

    /// Test the pairing flips in summer
    #[test]
    fn test_summer_current_has_winter_alternate() {
        let catalog = catalog(small_world(), "America/New_York");
        let groups = ZoneVariantGrouper::new().group(&catalog, at(2026, 7, 15)).unwrap();
        let paris = groups.iter().find(|g| g.location == "Paris").unwrap();

        assert_eq!(paris.current.offset_hours, 2.0);
        assert_eq!(paris.alternate.as_ref().map(|z| z.offset_hours), Some(1.0));
    }

    /// Test a location without DST has no alternate
    #[test]
    fn test_no_alternate_without_dst() {
        let catalog = catalog(small_world(), "America/New_York");
        let groups = ZoneVariantGrouper::new().group(&catalog, at(2026, 1, 15)).unwrap();
        let tokyo = groups.iter().find(|g| g.location == "Tokyo").unwrap();

        assert!(tokyo.alternate.is_none());
        assert!(!tokyo.has_alternate());
        assert_eq!(tokyo.variants.len(), 1);
    }

    /// Test deeper identifiers collapse into their base location
    #[test]
    fn test_sub_locations_collapse() {
        let authority = FixedAuthority::new()
            .with_zone("America/Argentina/Cordoba", -3.0)
            .with_zone("America/Argentina/Buenos_Aires", -3.0)
            .with_zone("America/Bogota", -5.0);
        let catalog = catalog(authority, "America/Bogota");
        let groups = ZoneVariantGrouper::new().group(&catalog, at(2026, 1, 15)).unwrap();

        assert_eq!(groups.len(), 2);
        let argentina = groups.iter().find(|g| g.location == "Argentina").unwrap();
        assert_eq!(argentina.current.id(), "America/Argentina/Buenos_Aires");
    }

    /// Test groups run west to east around the reference
    #[test]
    fn test_group_order() {
        let catalog = catalog(small_world(), "Europe/Paris");
        let groups = ZoneVariantGrouper::new().group(&catalog, at(2026, 1, 15)).unwrap();
        let locations: Vec<&str> = groups.iter().map(|g| g.location.as_str()).collect();
        assert_eq!(locations, vec!["New York", "Paris", "Kolkata", "Tokyo"]);
    }
}
