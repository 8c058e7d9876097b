//! End-to-end tests against the bundled zone database.

mod support;

use std::collections::HashSet;

use support::{at, file_engine};
use worldclock::db::repositories::FileRepository;
use worldclock::db::CacheRepository;

#[test]
fn test_reference_zone_follows_dst() {
    let dir = tempfile::tempdir().unwrap();
    let engine = file_engine("America/New_York", dir.path());

    let winter = engine.resolve_reference_zone(at(2026, 1, 15, 12)).unwrap();
    assert_eq!(winter.offset_hours, -5.0);
    assert_eq!(winter.abbreviation, "EST");
    assert_eq!(winter.display_name, "Eastern Standard Time");
    assert_eq!(winter.generic_name.as_deref(), Some("Eastern Time"));
    assert_eq!(winter.city_name, "New York");
    assert!(winter.coordinates.is_some());

    let summer = engine.resolve_reference_zone(at(2026, 7, 15, 12)).unwrap();
    assert_eq!(summer.offset_hours, -4.0);
    assert_eq!(summer.abbreviation, "EDT");
}

#[test]
fn test_ordered_zones_start_at_reference() {
    let dir = tempfile::tempdir().unwrap();
    let engine = file_engine("Asia/Kolkata", dir.path());
    let zones = engine.ordered_zones(at(2026, 1, 15, 12)).unwrap();

    assert!(zones.len() > 300);
    assert_eq!(zones[0].id(), "Asia/Kolkata");
    assert_eq!(zones[0].offset_hours, 5.5);
    assert!(zones.iter().all(|z| z.offset_hours >= -12.0 && z.offset_hours <= 14.0));
    assert!(zones.iter().all(|z| z.region().is_some()));
}

#[test]
fn test_selection_is_centred() {
    let dir = tempfile::tempdir().unwrap();
    let engine = file_engine("America/New_York", dir.path());
    let selected = engine
        .select_zones_for_timeline(7, at(2026, 1, 15, 12))
        .unwrap();

    assert_eq!(selected.len(), 7);
    assert_eq!(selected[3].id(), "America/New_York");
    let offsets: HashSet<i32> = selected.iter().map(|z| z.offset_minutes()).collect();
    assert_eq!(offsets.len(), 7);
}

#[test]
fn test_catalog_is_persisted_and_reloaded() {
    let dir = tempfile::tempdir().unwrap();
    let first = file_engine("Europe/Paris", dir.path());
    let zones = first.ordered_zones(at(2026, 3, 1, 12)).unwrap();

    let store = FileRepository::new(dir.path());
    assert_eq!(store.years().unwrap(), vec![2026]);
    assert!(dir.path().join("zones-2026.json").exists());

    let second = file_engine("Europe/Paris", dir.path());
    let cached = second.catalog().cache().get(2026).unwrap();
    assert_eq!(cached.reference_zone_id, "Europe/Paris");
    assert_eq!(cached.summer_zones.len(), zones.len());
}

#[test]
fn test_corrupted_store_is_discarded() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("zones-2026.json"), "{\"summerZones\": []}").unwrap();
    std::fs::write(dir.path().join("zones-2027.json"), "{}").unwrap();
    std::fs::write(dir.path().join("notes.txt"), "keep me").unwrap();

    let engine = file_engine("Europe/Paris", dir.path());
    assert!(engine.catalog().cache().get(2026).is_none());
    assert!(!dir.path().join("zones-2027.json").exists());
    assert!(dir.path().join("notes.txt").exists());

    assert!(!engine.ordered_zones(at(2026, 3, 1, 12)).unwrap().is_empty());
    assert!(dir.path().join("zones-2026.json").exists());
}

#[test]
fn test_grouped_new_york_has_daylight_alternate() {
    let dir = tempfile::tempdir().unwrap();
    let engine = file_engine("America/New_York", dir.path());
    let groups = engine.grouped_zones(at(2026, 1, 15, 12)).unwrap();

    let new_york = groups
        .iter()
        .find(|g| g.current.id() == "America/New_York")
        .unwrap();
    assert_eq!(new_york.location, "New York");
    assert_eq!(new_york.current.offset_hours, -5.0);
    assert_eq!(new_york.alternate.as_ref().map(|z| z.offset_hours), Some(-4.0));

    let tokyo = groups
        .iter()
        .find(|g| g.current.id() == "Asia/Tokyo")
        .unwrap();
    assert!(tokyo.alternate.is_none());
}

#[test]
fn test_search_by_name_and_offset() {
    let dir = tempfile::tempdir().unwrap();
    let engine = file_engine("Europe/London", dir.path());
    let instant = at(2026, 1, 15, 12);

    let tokyo = engine.search("tokyo", instant).unwrap();
    assert_eq!(tokyo[0].id(), "Asia/Tokyo");

    let india = engine.search("utc+5:30", instant).unwrap();
    assert_eq!(india[0].offset_hours, 5.5);

    let japan = engine.search("utc+9", instant).unwrap();
    assert!(japan.iter().any(|z| z.id() == "Asia/Tokyo"));
    assert_eq!(japan[0].offset_hours, 9.0);
    assert!(engine.search("zzzzqqq", instant).unwrap().is_empty());
}

#[test]
fn test_kolkata_timeline() {
    let dir = tempfile::tempdir().unwrap();
    let engine = file_engine("Europe/London", dir.path());
    let instant = at(2026, 1, 15, 12);
    let kolkata = engine
        .ordered_zones(instant)
        .unwrap()
        .into_iter()
        .find(|z| z.id() == "Asia/Kolkata")
        .unwrap();

    let hours = engine.build_timeline(48, &kolkata, instant).unwrap();
    assert_eq!(hours.len(), 48);
    assert_eq!(hours[24].instant, instant);
    assert_eq!(hours[24].label_24h, "17:30");
    assert_eq!(hours[24].label_12h, "5:30pm");
    assert_eq!(hours.iter().filter(|h| h.is_sunrise_hour).count(), 2);
    assert_eq!(hours.iter().filter(|h| h.is_date_transition).count(), 2);
}
