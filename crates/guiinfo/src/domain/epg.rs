#![forbid(unsafe_code)]

/// One schedule entry. Owned by the EPG store and shared read-only as
/// `Arc<EpgEvent>`; the cache only ever swaps references.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EpgEvent {
    pub id: u64,
    pub channel_id: Option<u64>,
    pub title: String,
    pub episode_name: String,
    pub original_title: String,
    pub plot: String,
    pub plot_outline: String,
    pub genre: String,
    pub imdb_number: String,
    pub cast: String,
    pub directors: String,
    pub writers: String,
    pub year: i32,
    pub season: i32,
    pub episode: i32,
    pub parental_rating: i32,
    /// Scheduled start, unix seconds.
    pub start: i64,
    /// Scheduled end, unix seconds.
    pub end: i64,
}

impl EpgEvent {
    pub fn duration_secs(&self) -> i64 {
        (self.end - self.start).max(0)
    }

    pub fn is_active(&self, now: i64) -> bool {
        self.start <= now && now < self.end
    }

    /// Seconds into the event at `now`, clamped to the event bounds.
    pub fn progress_secs(&self, now: i64) -> i64 {
        (now - self.start).clamp(0, self.duration_secs())
    }

    pub fn progress_percent(&self, now: i64) -> f32 {
        let duration = self.duration_secs();
        if duration <= 0 {
            return 0.0;
        }
        self.progress_secs(now) as f32 / duration as f32 * 100.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Channel {
    pub id: u64,
    pub name: String,
    pub icon: String,
    pub number: u32,
    pub sub_number: u32,
    pub is_radio: bool,
    /// Static encryption system name from the channel list, used when no
    /// live descramble data is reported.
    pub encryption_name: String,
}

impl Channel {
    pub fn formatted_number(&self) -> String {
        if self.sub_number > 0 {
            format!("{}.{}", self.number, self.sub_number)
        } else {
            self.number.to_string()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recording {
    pub id: u64,
    pub title: String,
    pub episode_name: String,
    pub channel_name: String,
    pub channel: Option<Channel>,
    pub is_radio: bool,
    /// Recording start, unix seconds.
    pub start: i64,
    pub duration_secs: i64,
}

impl Recording {
    pub fn end(&self) -> i64 {
        self.start + self.duration_secs
    }
}

/// A scheduled or running recording timer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimerSched {
    pub id: u64,
    pub title: String,
    pub channel_name: String,
    pub channel_icon: String,
    /// Timer start, unix seconds.
    pub start: i64,
    pub end: i64,
}
