#![forbid(unsafe_code)]

use crate::domain::TimerSched;
use crate::format;
use crate::sources::TimerClass;
use std::sync::Arc;

/// Per-category timer display cache: absolute counts plus a display slot that
/// rotates through the active recordings at the configured interval.
#[derive(Debug, Default)]
pub struct TimerCache {
    class: TimerClass,
    timer_count: usize,
    recording_count: usize,
    /// None forces the next toggle call to seed and repopulate.
    toggle_started_ms: Option<u64>,
    toggle_cursor: usize,

    pub active_title: String,
    pub active_channel_name: String,
    pub active_channel_icon: String,
    pub active_start_label: String,

    pub next_title: String,
    pub next_channel_name: String,
    pub next_channel_icon: String,
    pub next_start_label: String,
    pub next_summary: String,
}

impl TimerCache {
    pub fn new(class: TimerClass) -> Self {
        Self {
            class,
            ..Self::default()
        }
    }

    pub fn class(&self) -> TimerClass {
        self.class
    }

    pub fn has_timers(&self) -> bool {
        self.timer_count > 0
    }

    pub fn has_recording_timers(&self) -> bool {
        self.recording_count > 0
    }

    pub fn has_nonrecording_timers(&self) -> bool {
        self.timer_count > self.recording_count
    }

    pub fn toggle_cursor(&self) -> usize {
        self.toggle_cursor
    }

    /// Install freshly queried counts. The next toggle call reports
    /// "advanced" so the display slot repopulates immediately.
    pub fn update_counts(&mut self, timer_count: usize, recording_count: usize) {
        self.timer_count = timer_count;
        self.recording_count = recording_count;
        self.toggle_started_ms = None;
    }

    /// Advance the display slot if a full interval has passed. Returns
    /// whether the display strings must be recomputed.
    pub fn update_toggle(&mut self, now_ms: u64, interval_ms: u64) -> bool {
        let Some(started_ms) = self.toggle_started_ms else {
            self.toggle_started_ms = Some(now_ms);
            self.toggle_cursor = 0;
            return true;
        };

        if now_ms.saturating_sub(started_ms) < interval_ms {
            return false;
        }

        self.toggle_started_ms = Some(now_ms);
        let boundary = if self.recording_count > 0 {
            self.recording_count
        } else {
            self.timer_count
        };
        if boundary == 0 {
            let moved = self.toggle_cursor != 0;
            self.toggle_cursor = 0;
            return moved;
        }

        let previous = self.toggle_cursor;
        self.toggle_cursor = (self.toggle_cursor + 1) % boundary;
        self.toggle_cursor != previous
    }

    /// Fill the "now recording" strings from the recording in the display
    /// slot. A cursor beyond the list (count shrank mid-cycle) clamps to the
    /// last entry instead of indexing out of bounds.
    pub fn apply_active(&mut self, recordings: &[Arc<TimerSched>]) {
        self.active_title.clear();
        self.active_channel_name.clear();
        self.active_channel_icon.clear();
        self.active_start_label.clear();

        if self.recording_count == 0 || recordings.is_empty() {
            return;
        }

        let index = self.toggle_cursor.min(recordings.len() - 1);
        let timer = &recordings[index];
        self.active_title = timer.title.clone();
        self.active_channel_name = timer.channel_name.clone();
        self.active_channel_icon = timer.channel_icon.clone();
        self.active_start_label = format::datetime_string(timer.start);
    }

    /// Fill the "next recording" strings from the next scheduled timer.
    pub fn apply_next(&mut self, next: Option<&TimerSched>) {
        match next {
            Some(timer) => {
                self.next_title = timer.title.clone();
                self.next_channel_name = timer.channel_name.clone();
                self.next_channel_icon = timer.channel_icon.clone();
                self.next_start_label = format::datetime_string(timer.start);
                self.next_summary = format::next_timer_summary(timer.start);
            }
            None => {
                self.next_title.clear();
                self.next_channel_name.clear();
                self.next_channel_icon.clear();
                self.next_start_label.clear();
                self.next_summary.clear();
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.class);
    }
}
