#![forbid(unsafe_code)]

/// Sentinel for counts a backend does not report. Zero means "really zero".
pub const COUNT_UNKNOWN: i32 = -1;

/// Aggregate properties of one backend, as returned by the (slow) property
/// query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendRecord {
    pub name: String,
    pub version: String,
    pub host: String,
    pub disk_total: i64,
    pub disk_used: i64,
    pub num_channels: i32,
    pub num_timers: i32,
    pub num_recordings: i32,
    pub num_deleted_recordings: i32,
}

impl Default for BackendRecord {
    fn default() -> Self {
        Self {
            name: String::new(),
            version: String::new(),
            host: String::new(),
            disk_total: 0,
            disk_used: 0,
            num_channels: COUNT_UNKNOWN,
            num_timers: COUNT_UNKNOWN,
            num_recordings: COUNT_UNKNOWN,
            num_deleted_recordings: COUNT_UNKNOWN,
        }
    }
}
