#![forbid(unsafe_code)]

use crate::sources::StatusSource;

/// Coarse boolean/string state, sampled in one pass each cycle. Gathered
/// entirely before the snapshot lock is taken.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MiscFlags {
    pub playing_client_name: String,
    pub has_tv_recordings: bool,
    pub has_radio_recordings: bool,
    pub is_playing_tv: bool,
    pub is_playing_radio: bool,
    pub is_playing_recording: bool,
    pub is_playing_epg_event: bool,
    pub is_playing_encrypted: bool,
    pub has_tv_channels: bool,
    pub has_radio_channels: bool,
    pub can_record_playing_channel: bool,
    pub is_recording_playing_channel: bool,
    pub playing_tv_group: String,
    pub playing_radio_group: String,
    /// Static encryption name of the playing channel, the fallback when no
    /// live descramble data is reported.
    pub playing_channel_encryption: String,
}

impl MiscFlags {
    pub fn sample(status: &dyn StatusSource) -> Self {
        if !status.is_started() {
            return Self::default();
        }

        let is_playing_tv = status.is_playing_tv();
        let is_playing_radio = status.is_playing_radio();
        Self {
            playing_client_name: status.playing_client_name(),
            has_tv_recordings: status.has_tv_recordings(),
            has_radio_recordings: status.has_radio_recordings(),
            is_playing_tv,
            is_playing_radio,
            is_playing_recording: status.is_playing_recording(),
            is_playing_epg_event: status.is_playing_epg_event(),
            is_playing_encrypted: status.is_playing_encrypted(),
            has_tv_channels: status.has_tv_channels(),
            has_radio_channels: status.has_radio_channels(),
            can_record_playing_channel: status.can_record_playing_channel(),
            is_recording_playing_channel: status.is_recording_playing_channel(),
            playing_tv_group: if is_playing_tv {
                status.playing_group_name(false)
            } else {
                String::new()
            },
            playing_radio_group: if is_playing_radio {
                status.playing_group_name(true)
            } else {
                String::new()
            },
            playing_channel_encryption: status
                .playing_channel()
                .map(|channel| channel.encryption_name.clone())
                .unwrap_or_default(),
        }
    }
}
