#![forbid(unsafe_code)]

use guiinfo::domain::{BackendRecord, COUNT_UNKNOWN};
use guiinfo::samplers::BackendStatsCache;
use pretty_assertions::assert_eq;

fn record(name: &str) -> BackendRecord {
    BackendRecord {
        name: name.to_owned(),
        version: "1.0".to_owned(),
        host: format!("{name}.local"),
        num_channels: 42,
        ..BackendRecord::default()
    }
}

#[test]
fn empty_cache_shows_placeholders() {
    let mut cache = BackendStatsCache::default();
    assert!(cache.at_refresh_slot());

    cache.rotate();
    assert_eq!(cache.display().name, "Not available");
    assert_eq!(cache.display().channels, "Not available");
    assert_eq!(cache.position_label(), "Not available");
    assert!(cache.at_refresh_slot());
}

#[test]
fn rotates_through_every_record_then_wraps() {
    let mut cache = BackendStatsCache::default();
    cache.install(vec![record("a"), record("b"), record("c")]);

    let mut shown = Vec::new();
    for _ in 0..3 {
        cache.rotate();
        shown.push(cache.display().name.clone());
    }
    assert_eq!(shown, ["a", "b", "c"]);

    // Cursor is back at the refresh slot after a full round.
    assert!(cache.at_refresh_slot());
    cache.rotate();
    assert_eq!(cache.display().name, "a");
}

#[test]
fn position_label_names_the_displayed_record() {
    let mut cache = BackendStatsCache::default();
    cache.install(vec![record("a"), record("b")]);

    cache.rotate();
    assert_eq!(cache.position_label(), "1 of 2");
    cache.rotate();
    assert_eq!(cache.position_label(), "2 of 2");
    cache.rotate();
    assert_eq!(cache.position_label(), "1 of 2");
}

#[test]
fn unknown_counts_keep_the_placeholder() {
    let mut cache = BackendStatsCache::default();
    cache.install(vec![BackendRecord {
        name: "sparse".to_owned(),
        num_timers: COUNT_UNKNOWN,
        num_channels: 7,
        ..BackendRecord::default()
    }]);

    cache.rotate();
    assert_eq!(cache.display().name, "sparse");
    assert_eq!(cache.display().channels, "7");
    assert_eq!(cache.display().timers, "Not available");
    // Empty strings keep their placeholder too.
    assert_eq!(cache.display().version, "Not available");
}

#[test]
fn shrinking_list_resets_an_out_of_range_cursor() {
    let mut cache = BackendStatsCache::default();
    cache.install(vec![record("a"), record("b"), record("c")]);
    cache.rotate();
    cache.rotate();

    cache.install(vec![record("z")]);
    cache.rotate();
    assert_eq!(cache.display().name, "z");
}
