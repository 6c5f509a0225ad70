#![forbid(unsafe_code)]

use crate::domain::{Channel, EpgEvent, Recording};
use std::sync::Arc;

/// The item a label query refers to: an EPG entry, a channel (with its
/// pre-resolved "now" and "next" events), or a recording. The label layer
/// resolves store lookups when it builds the item, so queries against the
/// cache stay free of collaborator calls.
#[derive(Debug, Clone, Default)]
pub struct DisplayItem {
    epg: Option<Arc<EpgEvent>>,
    next: Option<Arc<EpgEvent>>,
    channel: Option<Arc<Channel>>,
    recording: Option<Arc<Recording>>,
}

impl DisplayItem {
    pub fn from_epg(event: Arc<EpgEvent>) -> Self {
        Self {
            epg: Some(event),
            ..Self::default()
        }
    }

    /// A channel item; `now` is the channel's current schedule entry, if any.
    pub fn from_channel(channel: Arc<Channel>, now: Option<Arc<EpgEvent>>) -> Self {
        Self {
            epg: now,
            channel: Some(channel),
            ..Self::default()
        }
    }

    pub fn from_recording(recording: Arc<Recording>) -> Self {
        Self {
            recording: Some(recording),
            ..Self::default()
        }
    }

    /// Attach the following schedule entry, for "next playing" labels.
    pub fn with_next(mut self, next: Option<Arc<EpgEvent>>) -> Self {
        self.next = next;
        self
    }

    pub fn epg_event(&self) -> Option<&Arc<EpgEvent>> {
        self.epg.as_ref()
    }

    pub fn next_event(&self) -> Option<&Arc<EpgEvent>> {
        self.next.as_ref()
    }

    pub fn channel(&self) -> Option<&Arc<Channel>> {
        self.channel.as_ref()
    }

    pub fn recording(&self) -> Option<&Arc<Recording>> {
        self.recording.as_ref()
    }
}
