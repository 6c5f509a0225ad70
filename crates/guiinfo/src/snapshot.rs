#![forbid(unsafe_code)]

use crate::domain::{DescrambleInfo, QualityInfo, TimeBase};
use crate::samplers::{BackendStatsCache, EventWindow, MiscFlags, PlayingEvent, TimerCache};
use crate::sources::TimerClass;

/// The full cached state. One instance, guarded by a single mutex; mutated
/// only by the sampling loop, read by any number of query calls.
#[derive(Debug, Default)]
pub struct Snapshot {
    pub misc: MiscFlags,
    pub quality: QualityInfo,
    pub descramble: DescrambleInfo,
    pub timebase: TimeBase,
    pub playing: PlayingEvent,
    pub event_window: EventWindow,
    pub backends: BackendStatsCache,
    pub timers_any: TimerCache,
    pub timers_tv: TimerCache,
    pub timers_radio: TimerCache,
}

impl Snapshot {
    pub fn new() -> Self {
        Self {
            timers_any: TimerCache::new(TimerClass::Any),
            timers_tv: TimerCache::new(TimerClass::Tv),
            timers_radio: TimerCache::new(TimerClass::Radio),
            ..Self::default()
        }
    }

    pub fn timers(&self, class: TimerClass) -> &TimerCache {
        match class {
            TimerClass::Any => &self.timers_any,
            TimerClass::Tv => &self.timers_tv,
            TimerClass::Radio => &self.timers_radio,
        }
    }

    pub fn timers_mut(&mut self, class: TimerClass) -> &mut TimerCache {
        match class {
            TimerClass::Any => &mut self.timers_any,
            TimerClass::Tv => &mut self.timers_tv,
            TimerClass::Radio => &mut self.timers_radio,
        }
    }

    /// Restore every field to its all-default state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Drop the playing-event reference and the fields derived from it.
    pub fn reset_playing_event(&mut self) {
        self.playing.reset();
        self.event_window = EventWindow::default();
    }
}
