#![forbid(unsafe_code)]

use crate::domain::{Channel, EpgEvent, TimeBase};
use crate::format::{self, TimeFormat};
use crate::samplers::timeshift;
use std::sync::Arc;

/// The "now playing" schedule entry plus its duration. The duration stays
/// authoritative even with no entry attached (pseudo-event while shifting
/// without EPG data, or a recording's own length).
#[derive(Debug, Clone, Default)]
pub struct PlayingEvent {
    pub event: Option<Arc<EpgEvent>>,
    pub duration_secs: i64,
}

impl PlayingEvent {
    /// Install a freshly resolved live entry; with none available, fall back
    /// to the timeshift window width so percent queries stay meaningful.
    pub fn install_live(&mut self, event: Option<Arc<EpgEvent>>, window_width: i64) {
        match event {
            Some(event) => {
                self.duration_secs = event.duration_secs();
                self.event = Some(event);
            }
            None if window_width > 0 => {
                self.event = None;
                self.duration_secs = window_width;
            }
            None => {
                self.event = None;
                self.duration_secs = 0;
            }
        }
    }

    pub fn install_recording(&mut self, duration_secs: i64) {
        self.event = None;
        self.duration_secs = duration_secs;
    }

    pub fn reset(&mut self) {
        self.event = None;
        self.duration_secs = 0;
    }
}

/// Whether the cached entry must be re-resolved: no entry yet, the entry ran
/// out, or the channel underneath changed identity.
pub fn needs_refresh(cached: Option<&EpgEvent>, current_channel: Option<&Channel>, now: i64) -> bool {
    let Some(cached) = cached else {
        return true;
    };
    if !cached.is_active(now) {
        return true;
    }
    match (cached.channel_id, current_channel) {
        (Some(cached_id), Some(channel)) => cached_id != channel.id,
        _ => true,
    }
}

/// Derived relation between the shiftable window and the playing event,
/// recomputed once per cycle so queries are plain field reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventWindow {
    pub start_offset_secs: i64,
    pub before_event_secs: i64,
    pub after_event_secs: i64,
    pub has_before: bool,
    pub has_after: bool,
    pub before_label: String,
    pub after_label: String,
}

pub fn event_window(timebase: &TimeBase, event: Option<&EpgEvent>, now: i64) -> EventWindow {
    if !timebase.timeshifting {
        return EventWindow::default();
    }
    let start_offset_secs = timeshift::start_offset_secs(timebase, event);
    let before_event_secs = timeshift::before_event_secs(timebase, event);
    let after_event_secs = timeshift::after_event_secs(timebase, event, now);
    EventWindow {
        start_offset_secs,
        before_event_secs,
        after_event_secs,
        has_before: before_event_secs > 0,
        has_after: after_event_secs > 0,
        before_label: format::seconds_to_time_string(before_event_secs, TimeFormat::HhMm),
        after_label: format::seconds_to_time_string(after_event_secs, TimeFormat::HhMm),
    }
}
