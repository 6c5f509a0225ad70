#![forbid(unsafe_code)]

use guiinfo::TimerClass;
use guiinfo::domain::TimerSched;
use guiinfo::samplers::TimerCache;
use pretty_assertions::assert_eq;
use std::sync::Arc;

const INTERVAL: u64 = 3_000;

fn timer(title: &str, start: i64) -> Arc<TimerSched> {
    Arc::new(TimerSched {
        id: 1,
        title: title.to_owned(),
        channel_name: "One".to_owned(),
        channel_icon: "one.png".to_owned(),
        start,
        end: start + 3_600,
    })
}

#[test]
fn toggle_advances_only_at_full_intervals() {
    let mut cache = TimerCache::new(TimerClass::Any);
    cache.update_counts(5, 3);

    // First call after a count update always repopulates.
    assert!(cache.update_toggle(0, INTERVAL));
    assert_eq!(cache.toggle_cursor(), 0);

    assert!(!cache.update_toggle(0, INTERVAL));
    assert_eq!(cache.toggle_cursor(), 0);

    assert!(!cache.update_toggle(INTERVAL - 1, INTERVAL));
    assert_eq!(cache.toggle_cursor(), 0);

    assert!(cache.update_toggle(INTERVAL, INTERVAL));
    assert_eq!(cache.toggle_cursor(), 1);

    assert!(cache.update_toggle(2 * INTERVAL, INTERVAL));
    assert_eq!(cache.toggle_cursor(), 2);
}

#[test]
fn cursor_wraps_at_the_recording_count() {
    let mut cache = TimerCache::new(TimerClass::Tv);
    cache.update_counts(5, 2);
    cache.update_toggle(0, INTERVAL);

    assert!(cache.update_toggle(INTERVAL, INTERVAL));
    assert_eq!(cache.toggle_cursor(), 1);
    assert!(cache.update_toggle(2 * INTERVAL, INTERVAL));
    assert_eq!(cache.toggle_cursor(), 0);
}

#[test]
fn cursor_wraps_at_the_timer_count_when_nothing_records() {
    let mut cache = TimerCache::new(TimerClass::Any);
    cache.update_counts(3, 0);
    cache.update_toggle(0, INTERVAL);

    assert!(cache.update_toggle(INTERVAL, INTERVAL));
    assert_eq!(cache.toggle_cursor(), 1);
    assert!(cache.update_toggle(2 * INTERVAL, INTERVAL));
    assert_eq!(cache.toggle_cursor(), 2);
    assert!(cache.update_toggle(3 * INTERVAL, INTERVAL));
    assert_eq!(cache.toggle_cursor(), 0);
}

#[test]
fn single_slot_never_reports_a_change_after_the_first() {
    let mut cache = TimerCache::new(TimerClass::Any);
    cache.update_counts(1, 1);

    assert!(cache.update_toggle(0, INTERVAL));
    assert!(!cache.update_toggle(INTERVAL, INTERVAL));
    assert!(!cache.update_toggle(2 * INTERVAL, INTERVAL));
}

#[test]
fn count_update_forces_repopulation() {
    let mut cache = TimerCache::new(TimerClass::Any);
    cache.update_counts(2, 2);
    cache.update_toggle(0, INTERVAL);
    cache.update_toggle(INTERVAL, INTERVAL);
    assert_eq!(cache.toggle_cursor(), 1);

    cache.update_counts(2, 1);
    // Immediately after, regardless of elapsed time.
    assert!(cache.update_toggle(INTERVAL + 1, INTERVAL));
    assert_eq!(cache.toggle_cursor(), 0);
}

#[test]
fn active_slot_strings_follow_the_cursor() {
    let mut cache = TimerCache::new(TimerClass::Any);
    cache.update_counts(2, 2);
    cache.update_toggle(0, INTERVAL);

    let recordings = vec![timer("News", 1_000_000), timer("Movie", 2_000_000)];
    cache.apply_active(&recordings);
    assert_eq!(cache.active_title, "News");
    assert_eq!(cache.active_channel_name, "One");

    cache.update_toggle(INTERVAL, INTERVAL);
    cache.apply_active(&recordings);
    assert_eq!(cache.active_title, "Movie");
}

#[test]
fn cursor_beyond_a_shrunken_list_clamps_to_the_last_entry() {
    let mut cache = TimerCache::new(TimerClass::Any);
    cache.update_counts(3, 3);
    cache.update_toggle(0, INTERVAL);
    cache.update_toggle(INTERVAL, INTERVAL);
    cache.update_toggle(2 * INTERVAL, INTERVAL);
    assert_eq!(cache.toggle_cursor(), 2);

    // The store shrank between the count query and the list fetch.
    let recordings = vec![timer("Only", 1_000_000)];
    cache.apply_active(&recordings);
    assert_eq!(cache.active_title, "Only");
}

#[test]
fn no_recordings_clears_the_active_slot() {
    let mut cache = TimerCache::new(TimerClass::Any);
    cache.update_counts(2, 0);
    cache.update_toggle(0, INTERVAL);

    cache.apply_active(&[]);
    assert_eq!(cache.active_title, "");
    assert_eq!(cache.active_start_label, "");
}

#[test]
fn next_timer_strings_and_summary() {
    let mut cache = TimerCache::new(TimerClass::Any);
    // 2024-03-01 20:15:00 UTC
    let start = 1_709_324_100;
    let sched = timer("Evening News", start);
    cache.apply_next(Some(sched.as_ref()));

    assert_eq!(cache.next_title, "Evening News");
    assert_eq!(cache.next_start_label, "2024-03-01 20:15");
    assert_eq!(cache.next_summary, "on 2024-03-01 at 20:15");

    cache.apply_next(None);
    assert_eq!(cache.next_title, "");
    assert_eq!(cache.next_summary, "");
}
