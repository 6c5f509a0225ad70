#![forbid(unsafe_code)]

use crate::domain::BackendRecord;
use crate::format::NOT_AVAILABLE;

/// Display-facing copy of the backend record currently in the rotating slot.
/// Absent fields (empty strings, negative counts) carry the "not available"
/// placeholder so queries stay total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendDisplay {
    pub name: String,
    pub version: String,
    pub host: String,
    pub channels: String,
    pub timers: String,
    pub recordings: String,
    pub deleted_recordings: String,
    pub disk_total: i64,
    pub disk_used: i64,
}

impl Default for BackendDisplay {
    fn default() -> Self {
        Self {
            name: NOT_AVAILABLE.to_owned(),
            version: NOT_AVAILABLE.to_owned(),
            host: NOT_AVAILABLE.to_owned(),
            channels: NOT_AVAILABLE.to_owned(),
            timers: NOT_AVAILABLE.to_owned(),
            recordings: NOT_AVAILABLE.to_owned(),
            deleted_recordings: NOT_AVAILABLE.to_owned(),
            disk_total: 0,
            disk_used: 0,
        }
    }
}

/// Round-robin cache over per-backend aggregate properties. The full list is
/// only re-fetched when the cursor wraps to 0 and a query path has asked for
/// backend data since the last fetch; every coarse cycle shows one record.
#[derive(Debug, Default)]
pub struct BackendStatsCache {
    records: Vec<BackendRecord>,
    cursor: usize,
    shown: usize,
    display: BackendDisplay,
}

impl BackendStatsCache {
    /// Whether this cycle is the one allowed to re-fetch the full list.
    pub fn at_refresh_slot(&self) -> bool {
        self.cursor == 0
    }

    /// Replace the cached list wholesale.
    pub fn install(&mut self, records: Vec<BackendRecord>) {
        self.records = records;
        if self.cursor >= self.records.len() {
            self.cursor = 0;
        }
    }

    /// Copy the record at the cursor into the display fields, then advance
    /// the cursor, wrapping to 0.
    pub fn rotate(&mut self) {
        self.display = BackendDisplay::default();

        if let Some(record) = self.records.get(self.cursor) {
            self.shown = self.cursor;
            set_if_present(&mut self.display.name, &record.name);
            set_if_present(&mut self.display.version, &record.version);
            set_if_present(&mut self.display.host, &record.host);
            set_count(&mut self.display.channels, record.num_channels);
            set_count(&mut self.display.timers, record.num_timers);
            set_count(&mut self.display.recordings, record.num_recordings);
            set_count(&mut self.display.deleted_recordings, record.num_deleted_recordings);
            self.display.disk_total = record.disk_total;
            self.display.disk_used = record.disk_used;
        }

        if self.records.is_empty() {
            self.cursor = 0;
        } else {
            self.cursor = (self.cursor + 1) % self.records.len();
        }
    }

    pub fn display(&self) -> &BackendDisplay {
        &self.display
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// "N of M" label for the record in the display slot.
    pub fn position_label(&self) -> String {
        if self.records.is_empty() {
            NOT_AVAILABLE.to_owned()
        } else {
            format!("{} of {}", self.shown + 1, self.records.len())
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn set_if_present(slot: &mut String, value: &str) {
    if !value.is_empty() {
        *slot = value.to_owned();
    }
}

fn set_count(slot: &mut String, count: i32) {
    if count >= 0 {
        *slot = count.to_string();
    }
}
