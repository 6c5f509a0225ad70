#![forbid(unsafe_code)]

use crate::clock::Clock;
use crate::domain::{BackendRecord, Channel, DescrambleInfo, EpgEvent, QualityInfo, Recording, TimerSched};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("no playing client")]
    NotPlaying,

    #[error("not supported by backend")]
    NotSupported,

    #[error("backend request failed: {0}")]
    Backend(String),
}

/// Playback-engine time signals. All values are engine-relative; min/max are
/// only meaningful while timeshifting.
pub trait PlayerSource: Send + Sync {
    /// Wall-clock unix time the current stream started, 0 when not yet known.
    fn start_time(&self) -> i64;
    fn play_time_ms(&self) -> i64;
    fn min_time_ms(&self) -> i64;
    fn max_time_ms(&self) -> i64;
    fn speed(&self) -> f32;
}

/// Coarse playback/library state queries.
pub trait StatusSource: Send + Sync {
    fn is_started(&self) -> bool;
    fn is_playing_tv(&self) -> bool;
    fn is_playing_radio(&self) -> bool;
    fn is_playing_recording(&self) -> bool;
    fn is_playing_epg_event(&self) -> bool;
    fn is_playing_encrypted(&self) -> bool;
    fn has_tv_channels(&self) -> bool;
    fn has_radio_channels(&self) -> bool;
    fn has_tv_recordings(&self) -> bool;
    fn has_radio_recordings(&self) -> bool;
    fn can_record_playing_channel(&self) -> bool;
    fn is_recording_playing_channel(&self) -> bool;
    fn playing_client_name(&self) -> String;
    fn playing_group_name(&self, radio: bool) -> String;
    fn playing_channel(&self) -> Option<Arc<Channel>>;
    fn playing_epg_event(&self) -> Option<Arc<EpgEvent>>;
    fn playing_recording(&self) -> Option<Arc<Recording>>;
}

/// Backend client layer. `backend_properties` may block on the network and
/// must never be called with the snapshot lock held.
pub trait BackendSource: Send + Sync {
    fn is_timeshifting(&self) -> bool;
    fn signal_quality(&self) -> Result<QualityInfo, SourceError>;
    fn descramble_info(&self) -> Result<DescrambleInfo, SourceError>;
    fn backend_properties(&self) -> Vec<BackendRecord>;
}

/// Timer category selector. One generic cache serves all three, so the
/// per-category store queries take the class as a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerClass {
    #[default]
    Any,
    Tv,
    Radio,
}

impl TimerClass {
    pub const ALL: [TimerClass; 3] = [TimerClass::Any, TimerClass::Tv, TimerClass::Radio];
}

pub trait TimerSource: Send + Sync {
    fn active_timer_count(&self, class: TimerClass) -> usize;
    fn active_recording_count(&self, class: TimerClass) -> usize;
    fn active_recordings(&self, class: TimerClass) -> Vec<Arc<TimerSched>>;
    fn next_active_timer(&self, class: TimerClass) -> Option<Arc<TimerSched>>;
}

/// In-memory EPG lookups; cheap, never backend I/O.
pub trait EpgSource: Send + Sync {
    fn event_now(&self, channel_id: u64) -> Option<Arc<EpgEvent>>;
    fn next_event(&self, event_id: u64) -> Option<Arc<EpgEvent>>;
}

pub struct Services {
    pub player: Box<dyn PlayerSource + Send + Sync>,
    pub status: Box<dyn StatusSource + Send + Sync>,
    pub backend: Box<dyn BackendSource + Send + Sync>,
    pub timers: Box<dyn TimerSource + Send + Sync>,
    pub epg: Box<dyn EpgSource + Send + Sync>,
    pub clock: Box<dyn Clock + Send + Sync>,
}
