#![forbid(unsafe_code)]

use chrono::{DateTime, Datelike, Timelike};

/// Placeholder for fields the backend did not report.
pub const NOT_AVAILABLE: &str = "Not available";

/// Fallback title when a channel has no EPG data at all.
pub const NO_INFO_AVAILABLE: &str = "No information available";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFormat {
    /// Pick mm:ss below one hour, hh:mm:ss otherwise.
    #[default]
    Guess,
    Secs,
    Mm,
    MmSs,
    HhMm,
    HhMmSs,
}

/// Render a span of seconds in the requested format. Negative spans keep
/// their sign.
pub fn seconds_to_time_string(secs: i64, format: TimeFormat) -> String {
    let sign = if secs < 0 { "-" } else { "" };
    let secs = secs.abs();
    let (hh, mm, ss) = (secs / 3600, (secs % 3600) / 60, secs % 60);

    let format = match format {
        TimeFormat::Guess if secs >= 3600 => TimeFormat::HhMmSs,
        TimeFormat::Guess => TimeFormat::MmSs,
        other => other,
    };

    match format {
        TimeFormat::Secs => format!("{sign}{secs}"),
        TimeFormat::Mm => format!("{sign}{}", secs / 60),
        TimeFormat::MmSs => format!("{sign}{:02}:{ss:02}", secs / 60),
        TimeFormat::HhMm => format!("{sign}{hh:02}:{mm:02}"),
        TimeFormat::HhMmSs | TimeFormat::Guess => format!("{sign}{hh:02}:{mm:02}:{ss:02}"),
    }
}

/// Seconds since midnight (UTC) of a unix timestamp, for clock-face labels.
pub fn time_of_day_secs(unix_secs: i64) -> i64 {
    match DateTime::from_timestamp(unix_secs, 0) {
        Some(dt) => i64::from(dt.hour()) * 3600 + i64::from(dt.minute()) * 60 + i64::from(dt.second()),
        None => 0,
    }
}

/// Clock-face label of a unix timestamp ("Guess" renders as hh:mm).
pub fn time_of_day_string(unix_secs: i64, format: TimeFormat) -> String {
    let format = match format {
        TimeFormat::Guess => TimeFormat::HhMm,
        other => other,
    };
    seconds_to_time_string(time_of_day_secs(unix_secs), format)
}

/// "2024-03-01 20:15" style label for timer start times.
pub fn datetime_string(unix_secs: i64) -> String {
    match DateTime::from_timestamp(unix_secs, 0) {
        Some(dt) => format!(
            "{:04}-{:02}-{:02} {:02}:{:02}",
            dt.year(),
            dt.month(),
            dt.day(),
            dt.hour(),
            dt.minute()
        ),
        None => String::new(),
    }
}

/// "on 2024-03-01 at 20:15" summary line for the next scheduled timer.
pub fn next_timer_summary(unix_secs: i64) -> String {
    match DateTime::from_timestamp(unix_secs, 0) {
        Some(dt) => format!(
            "on {:04}-{:02}-{:02} at {:02}:{:02}",
            dt.year(),
            dt.month(),
            dt.day(),
            dt.hour(),
            dt.minute()
        ),
        None => String::new(),
    }
}

/// Conditional-access system name for a CAID, preferring well-known ranges.
pub fn encryption_name(caid: i32) -> String {
    let name = match caid as u32 >> 8 {
        0x01 => Some("Seca Mediaguard"),
        0x05 => Some("Viaccess"),
        0x06 => Some("Irdeto"),
        0x09 => Some("NDS Videoguard"),
        0x0B => Some("Conax"),
        0x0D => Some("CryptoWorks"),
        0x0E => Some("PowerVu"),
        0x10 => Some("RAS"),
        0x17 | 0x18 => Some("Nagravision"),
        0x26 => Some("BISS"),
        0x4A => Some("DRECrypt"),
        _ => None,
    };
    match name {
        Some(name) => format!("{name} (CAID: {caid:04X})"),
        None => format!("CAID: {caid:04X}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn time_string_formats() {
        assert_eq!(seconds_to_time_string(90, TimeFormat::MmSs), "01:30");
        assert_eq!(seconds_to_time_string(3700, TimeFormat::HhMm), "01:01");
        assert_eq!(seconds_to_time_string(3700, TimeFormat::HhMmSs), "01:01:40");
        assert_eq!(seconds_to_time_string(3700, TimeFormat::Guess), "01:01:40");
        assert_eq!(seconds_to_time_string(59, TimeFormat::Guess), "00:59");
        assert_eq!(seconds_to_time_string(-90, TimeFormat::MmSs), "-01:30");
        assert_eq!(seconds_to_time_string(120, TimeFormat::Mm), "2");
        assert_eq!(seconds_to_time_string(7, TimeFormat::Secs), "7");
    }

    #[test]
    fn time_of_day_wraps_at_midnight() {
        // 1970-01-02 01:30:05 UTC
        let unix = 86_400 + 3600 + 30 * 60 + 5;
        assert_eq!(time_of_day_secs(unix), 3600 + 30 * 60 + 5);
        assert_eq!(time_of_day_string(unix, TimeFormat::Guess), "01:30");
    }

    #[test]
    fn encryption_names_cover_known_ranges() {
        assert!(encryption_name(0x0B00).starts_with("Conax"));
        assert!(encryption_name(0x1801).starts_with("Nagravision"));
        assert_eq!(encryption_name(0x7F42), "CAID: 7F42");
    }
}
