#![forbid(unsafe_code)]

use crate::domain::{DisplayItem, EpgEvent};
use crate::engine::GuiInfoCache;
use crate::format::{self, NO_INFO_AVAILABLE, NOT_AVAILABLE, TimeFormat};
use crate::samplers::timeshift;
use crate::snapshot::Snapshot;
use crate::sources::TimerClass;
use humansize::{BINARY, format_size};
use std::sync::Arc;

/// Upper bound on schedule entries a seek preview will walk across, so a
/// malformed store (zero-duration entries forming a cycle) cannot spin a
/// UI-facing query forever.
const SEEK_WALK_LIMIT: u32 = 100;

/// Boolean state queries. All answered from the last completed sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolInfo {
    HasTimers(TimerClass),
    IsRecording(TimerClass),
    HasNonRecordingTimers(TimerClass),
    HasTvChannels,
    HasRadioChannels,
    HasTvRecordings,
    HasRadioRecordings,
    IsPlayingTv,
    IsPlayingRadio,
    IsPlayingRecording,
    IsPlayingEpgEvent,
    IsStreamEncrypted,
    IsTimeshifting,
    HasTimeshiftBeforeEvent,
    HasTimeshiftAfterEvent,
    CanRecordPlayingChannel,
    IsRecordingPlayingChannel,
}

/// String queries with a fixed rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharInfo {
    NowRecordingTitle(TimerClass),
    NowRecordingChannelName(TimerClass),
    NowRecordingChannelIcon(TimerClass),
    NowRecordingDateTime(TimerClass),
    NextRecordingTitle(TimerClass),
    NextRecordingChannelName(TimerClass),
    NextRecordingChannelIcon(TimerClass),
    NextRecordingDateTime(TimerClass),
    NextTimerSummary,
    StreamClient,
    StreamDevice,
    StreamStatus,
    StreamSignal,
    StreamSnr,
    StreamBer,
    StreamUnc,
    StreamService,
    StreamMux,
    StreamProvider,
    StreamEncryption,
    BackendName,
    BackendVersion,
    BackendHost,
    BackendDiskSpace,
    BackendChannels,
    BackendTimers,
    BackendRecordings,
    BackendDeletedRecordings,
    BackendNumber,
    TotalDiskSpace,
    TimeshiftBeforeEventTime,
    TimeshiftAfterEventTime,
}

/// Percentage-style integer queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntInfo {
    EpgEventProgress,
    TimeshiftProgress,
    TimeshiftStartProgress,
    TimeshiftEndProgress,
    StreamSignalPercent,
    StreamSnrPercent,
    BackendDiskUsagePercent,
}

/// Time-span queries rendered in a caller-chosen [`TimeFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiInfo {
    EpgEventDuration,
    EpgEventElapsedTime,
    EpgEventRemainingTime,
    EpgEventFinishTime,
    TimeshiftStartTime,
    TimeshiftEndTime,
    TimeshiftPlayTime,
    TimeshiftOffset,
}

/// Labels resolved against a [`DisplayItem`], falling through recording,
/// EPG-entry and channel layers in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoLabel {
    Title,
    Genre,
    Plot,
    PlotOutline,
    StartTime,
    EndTime,
    EpisodeName,
    ImdbNumber,
    OriginalTitle,
    Year,
    Episode,
    Season,
    Cast,
    Director,
    Writer,
    ParentalRating,
    ChannelName,
    ChannelNumber,
    ChannelGroup,
    NextTitle,
    NextGenre,
    NextPlot,
    NextPlotOutline,
    NextStartTime,
    NextEndTime,
    NextDuration,
}

impl GuiInfoCache {
    pub fn bool_info(&self, info: BoolInfo) -> bool {
        let snapshot = self.lock();
        match info {
            BoolInfo::HasTimers(class) => snapshot.timers(class).has_timers(),
            BoolInfo::IsRecording(class) => snapshot.timers(class).has_recording_timers(),
            BoolInfo::HasNonRecordingTimers(class) => {
                snapshot.timers(class).has_nonrecording_timers()
            }
            BoolInfo::HasTvChannels => snapshot.misc.has_tv_channels,
            BoolInfo::HasRadioChannels => snapshot.misc.has_radio_channels,
            BoolInfo::HasTvRecordings => snapshot.misc.has_tv_recordings,
            BoolInfo::HasRadioRecordings => snapshot.misc.has_radio_recordings,
            BoolInfo::IsPlayingTv => snapshot.misc.is_playing_tv,
            BoolInfo::IsPlayingRadio => snapshot.misc.is_playing_radio,
            BoolInfo::IsPlayingRecording => snapshot.misc.is_playing_recording,
            BoolInfo::IsPlayingEpgEvent => snapshot.misc.is_playing_epg_event,
            BoolInfo::IsStreamEncrypted => snapshot.misc.is_playing_encrypted,
            BoolInfo::IsTimeshifting => snapshot.timebase.timeshifting,
            BoolInfo::HasTimeshiftBeforeEvent => snapshot.event_window.has_before,
            BoolInfo::HasTimeshiftAfterEvent => snapshot.event_window.has_after,
            BoolInfo::CanRecordPlayingChannel => snapshot.misc.can_record_playing_channel,
            BoolInfo::IsRecordingPlayingChannel => snapshot.misc.is_recording_playing_channel,
        }
    }

    pub fn char_info(&self, info: CharInfo) -> String {
        use CharInfo::*;

        // A query for backend fields arms the next coarse refresh; the list
        // is otherwise never re-fetched.
        if matches!(
            info,
            BackendName
                | BackendVersion
                | BackendHost
                | BackendDiskSpace
                | BackendChannels
                | BackendTimers
                | BackendRecordings
                | BackendDeletedRecordings
        ) {
            self.request_backend_refresh();
        }

        let snapshot = self.lock();
        match info {
            NowRecordingTitle(class) => snapshot.timers(class).active_title.clone(),
            NowRecordingChannelName(class) => snapshot.timers(class).active_channel_name.clone(),
            NowRecordingChannelIcon(class) => snapshot.timers(class).active_channel_icon.clone(),
            NowRecordingDateTime(class) => snapshot.timers(class).active_start_label.clone(),
            NextRecordingTitle(class) => snapshot.timers(class).next_title.clone(),
            NextRecordingChannelName(class) => snapshot.timers(class).next_channel_name.clone(),
            NextRecordingChannelIcon(class) => snapshot.timers(class).next_channel_icon.clone(),
            NextRecordingDateTime(class) => snapshot.timers(class).next_start_label.clone(),
            NextTimerSummary => snapshot.timers(TimerClass::Any).next_summary.clone(),
            StreamClient => text_or_unavailable(&snapshot.misc.playing_client_name),
            StreamDevice => text_or_unavailable(&snapshot.quality.adapter_name),
            StreamStatus => text_or_unavailable(&snapshot.quality.adapter_status),
            StreamSignal => format!("{} %", snapshot.quality.signal_percent()),
            StreamSnr => format!("{} %", snapshot.quality.snr_percent()),
            StreamBer => format!("{:08X}", snapshot.quality.ber),
            StreamUnc => format!("{:08X}", snapshot.quality.unc),
            StreamService => text_or_unavailable(&snapshot.quality.service_name),
            StreamMux => text_or_unavailable(&snapshot.quality.mux_name),
            StreamProvider => text_or_unavailable(&snapshot.quality.provider_name),
            StreamEncryption => {
                // Live descramble data wins over the static channel entry.
                if snapshot.descramble.available() {
                    format::encryption_name(snapshot.descramble.caid)
                } else {
                    snapshot.misc.playing_channel_encryption.clone()
                }
            }
            BackendName => snapshot.backends.display().name.clone(),
            BackendVersion => snapshot.backends.display().version.clone(),
            BackendHost => snapshot.backends.display().host.clone(),
            BackendDiskSpace => {
                let display = snapshot.backends.display();
                if display.disk_total > 0 {
                    let free = (display.disk_total - display.disk_used).max(0) as u64;
                    format!(
                        "{} of {} available",
                        format_size(free, BINARY),
                        format_size(display.disk_total as u64, BINARY)
                    )
                } else {
                    NOT_AVAILABLE.to_owned()
                }
            }
            BackendChannels => snapshot.backends.display().channels.clone(),
            BackendTimers => snapshot.backends.display().timers.clone(),
            BackendRecordings => snapshot.backends.display().recordings.clone(),
            BackendDeletedRecordings => snapshot.backends.display().deleted_recordings.clone(),
            BackendNumber => snapshot.backends.position_label(),
            TotalDiskSpace => {
                format_size(snapshot.backends.display().disk_total.max(0) as u64, BINARY)
            }
            TimeshiftBeforeEventTime => snapshot.event_window.before_label.clone(),
            TimeshiftAfterEventTime => snapshot.event_window.after_label.clone(),
        }
    }

    /// `item` widens progress queries to an arbitrary entry; `None` (or the
    /// playing entry itself) answers for the live playback position.
    pub fn int_info(&self, info: IntInfo, item: Option<&DisplayItem>) -> i32 {
        let now = self.services().clock.wall_secs();
        let snapshot = self.lock();
        match info {
            IntInfo::EpgEventProgress => play_percent(&snapshot, item, now).round() as i32,
            IntInfo::TimeshiftProgress => {
                let timebase = &snapshot.timebase;
                let width = timebase.window_width();
                if width > 0 {
                    ((timebase.play_time - timebase.window_start) as f32 / width as f32 * 100.0)
                        .round() as i32
                } else {
                    0
                }
            }
            IntInfo::TimeshiftStartProgress => {
                let duration = snapshot.playing.duration_secs;
                if duration > 0 {
                    (snapshot.event_window.start_offset_secs * 100 / duration) as i32
                } else {
                    0
                }
            }
            IntInfo::TimeshiftEndProgress => {
                if !snapshot.timebase.timeshifting {
                    0
                } else {
                    match &snapshot.playing.event {
                        Some(event) => event.progress_percent(now).round().clamp(0.0, 100.0) as i32,
                        // No schedule data: the whole window is reachable.
                        None => 100,
                    }
                }
            }
            IntInfo::StreamSignalPercent => snapshot.quality.signal_percent(),
            IntInfo::StreamSnrPercent => snapshot.quality.snr_percent(),
            IntInfo::BackendDiskUsagePercent => {
                let display = snapshot.backends.display();
                if display.disk_total > 0 {
                    (display.disk_used * 100 / display.disk_total) as i32
                } else {
                    0xFF
                }
            }
        }
    }

    pub fn multi_info(&self, info: MultiInfo, format: TimeFormat, item: Option<&DisplayItem>) -> String {
        let now = self.services().clock.wall_secs();
        let snapshot = self.lock();
        match info {
            MultiInfo::EpgEventDuration => {
                let duration = match queried_event(&snapshot, item) {
                    Some(event) => event.duration_secs(),
                    None => snapshot.playing.duration_secs,
                };
                format::seconds_to_time_string(duration, format)
            }
            MultiInfo::EpgEventElapsedTime => {
                let elapsed_secs = match queried_event(&snapshot, item) {
                    Some(event) => event.progress_secs(now),
                    None => elapsed(&snapshot),
                };
                format::seconds_to_time_string(elapsed_secs, format)
            }
            MultiInfo::EpgEventRemainingTime => {
                format::seconds_to_time_string(remaining(&snapshot, item, now), format)
            }
            MultiInfo::EpgEventFinishTime => {
                format::time_of_day_string(now + remaining(&snapshot, item, now), format)
            }
            MultiInfo::TimeshiftStartTime => {
                format::time_of_day_string(snapshot.timebase.window_start, format)
            }
            MultiInfo::TimeshiftEndTime => {
                format::time_of_day_string(snapshot.timebase.window_end, format)
            }
            MultiInfo::TimeshiftPlayTime => format::seconds_to_time_string(
                format::time_of_day_secs(snapshot.timebase.play_time),
                format,
            ),
            MultiInfo::TimeshiftOffset => {
                format::seconds_to_time_string(snapshot.timebase.drift_offset, format)
            }
        }
    }

    /// Resolve a label against an item. `None` means the label does not apply
    /// to this item at all; missing optional metadata also yields `None`.
    pub fn video_label(&self, item: &DisplayItem, label: VideoLabel) -> Option<String> {
        use VideoLabel::*;

        if let Some(recording) = item.recording() {
            return match label {
                StartTime => Some(format::time_of_day_string(recording.start, TimeFormat::HhMm)),
                EndTime => Some(format::time_of_day_string(recording.end(), TimeFormat::HhMm)),
                EpisodeName => Some(recording.episode_name.clone()),
                ChannelName => Some(recording.channel_name.clone()),
                ChannelNumber => recording
                    .channel
                    .as_ref()
                    .map(|channel| channel.formatted_number()),
                ChannelGroup => Some(self.playing_group(recording.is_radio)),
                _ => None,
            };
        }

        let event = match label {
            NextTitle | NextGenre | NextPlot | NextPlotOutline | NextStartTime | NextEndTime
            | NextDuration => item.next_event(),
            _ => item.epg_event(),
        };

        if let Some(event) = event {
            let value = match label {
                Title | NextTitle => Some(event.title.clone()),
                Genre | NextGenre => Some(event.genre.clone()),
                Plot | NextPlot => Some(event.plot.clone()),
                PlotOutline | NextPlotOutline => Some(event.plot_outline.clone()),
                StartTime | NextStartTime => {
                    Some(format::time_of_day_string(event.start, TimeFormat::HhMm))
                }
                EndTime | NextEndTime => {
                    Some(format::time_of_day_string(event.end, TimeFormat::HhMm))
                }
                NextDuration => (event.duration_secs() > 0).then(|| {
                    format::seconds_to_time_string(event.duration_secs(), TimeFormat::Guess)
                }),
                EpisodeName => Some(event.episode_name.clone()),
                ImdbNumber => Some(event.imdb_number.clone()),
                OriginalTitle => Some(event.original_title.clone()),
                Year => (event.year > 0).then(|| event.year.to_string()),
                Episode => (event.episode > 0).then(|| {
                    // Season 0 means a special; label it as such.
                    if event.season == 0 {
                        format!("S{}", event.episode)
                    } else {
                        event.episode.to_string()
                    }
                }),
                Season => (event.season > 0).then(|| event.season.to_string()),
                Cast => Some(event.cast.clone()),
                Director => Some(event.directors.clone()),
                Writer => Some(event.writers.clone()),
                ParentalRating => (event.parental_rating > 0)
                    .then(|| event.parental_rating.to_string()),
                _ => None,
            };
            if value.is_some() {
                return value;
            }
        }

        if let Some(channel) = item.channel() {
            match label {
                ChannelName => return Some(channel.name.clone()),
                ChannelNumber => return Some(channel.formatted_number()),
                ChannelGroup => return Some(self.playing_group(channel.is_radio)),
                _ => {}
            }
        }

        if event.is_none() && matches!(label, Title | NextTitle) {
            return Some(if self.config().display.hide_no_info_fallback {
                String::new()
            } else {
                NO_INFO_AVAILABLE.to_owned()
            });
        }

        None
    }

    /// Label for the position a relative seek from the live playback point
    /// would land on, walking across consecutive schedule entries. Entries
    /// crossed are counted in a "+{n}: " prefix. `None` while nothing with a
    /// schedule entry is playing.
    pub fn seek_time_label(&self, seek_secs: i64, format: TimeFormat) -> Option<String> {
        let (mut event, mut seek_time) = {
            let snapshot = self.lock();
            let event = snapshot.playing.event.clone()?;
            (event, elapsed(&snapshot) + seek_secs)
        };

        let mut crossed = 0u32;
        if seek_time > 0 {
            while seek_time > event.duration_secs() && crossed < SEEK_WALK_LIMIT {
                match self.services().epg.next_event(event.id) {
                    Some(next) => {
                        seek_time -= event.duration_secs();
                        event = next;
                        crossed += 1;
                    }
                    None => break,
                }
            }
            // No further schedule data (or the walk limit was hit): clamp at
            // the last reached entry's end.
            seek_time = seek_time.min(event.duration_secs());
        } else {
            seek_time = 0;
        }

        let time = format::seconds_to_time_string(seek_time, format);
        Some(if crossed > 0 {
            format!("+{crossed}: {time}")
        } else {
            time
        })
    }

    /// Duration of what is playing, in seconds (pseudo-event width when no
    /// schedule entry is attached).
    pub fn duration(&self) -> i64 {
        self.lock().playing.duration_secs
    }

    /// Seconds into the playing event at the cached play position.
    pub fn elapsed_time(&self) -> i64 {
        let snapshot = self.lock();
        elapsed(&snapshot)
    }

    pub fn playing_event(&self) -> Option<Arc<EpgEvent>> {
        self.lock().playing.event.clone()
    }

    fn playing_group(&self, radio: bool) -> String {
        let snapshot = self.lock();
        if radio {
            snapshot.misc.playing_radio_group.clone()
        } else {
            snapshot.misc.playing_tv_group.clone()
        }
    }
}

fn text_or_unavailable(value: &str) -> String {
    if value.is_empty() {
        NOT_AVAILABLE.to_owned()
    } else {
        value.to_owned()
    }
}

/// The event the query is about, unless the item is (or has no entry besides)
/// the one currently playing; then the live position answers instead.
fn queried_event<'a>(snapshot: &Snapshot, item: Option<&'a DisplayItem>) -> Option<&'a Arc<EpgEvent>> {
    let event = item?.epg_event()?;
    if is_playing_event(snapshot, event) {
        None
    } else {
        Some(event)
    }
}

fn is_playing_event(snapshot: &Snapshot, event: &Arc<EpgEvent>) -> bool {
    snapshot
        .playing
        .event
        .as_ref()
        .is_some_and(|playing| Arc::ptr_eq(playing, event))
}

fn elapsed(snapshot: &Snapshot) -> i64 {
    timeshift::elapsed_secs(&snapshot.timebase, snapshot.playing.event.as_deref())
}

fn play_percent(snapshot: &Snapshot, item: Option<&DisplayItem>, now: i64) -> f32 {
    if let Some(event) = queried_event(snapshot, item) {
        return event.progress_percent(now);
    }
    let duration = snapshot.playing.duration_secs;
    if duration <= 0 {
        return 0.0;
    }
    (elapsed(snapshot) as f32 / duration as f32 * 100.0).clamp(0.0, 100.0)
}

fn remaining(snapshot: &Snapshot, item: Option<&DisplayItem>, now: i64) -> i64 {
    match queried_event(snapshot, item) {
        Some(event) => event.duration_secs() - event.progress_secs(now),
        None => snapshot.playing.duration_secs - elapsed(snapshot),
    }
}
