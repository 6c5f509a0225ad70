#![forbid(unsafe_code)]

/// Reconciled playback time base, all fields in unix seconds. Only meaningful
/// while `has_data` is set; `window_start == window_end` means the backend
/// does not support shifting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeBase {
    pub has_data: bool,
    pub timeshifting: bool,
    pub start_time: i64,
    pub window_start: i64,
    pub window_end: i64,
    pub play_time: i64,
    pub drift_offset: i64,
    pub last_update: i64,
}

impl TimeBase {
    pub fn window_width(&self) -> i64 {
        self.window_end - self.window_start
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
