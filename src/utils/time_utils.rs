use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const S_IN_MIN: i64 = 60;
    pub const S_IN_H: i64 = Self::S_IN_MIN * 60;
    pub const S_IN_4_H: i64 = Self::S_IN_H * 4;
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";
    pub const AXIS_TIME_FORMAT: &str = "%m-%d %H:%M";
    pub const AXIS_TIME_FORMAT_SECONDS: &str = "%m-%d %H:%M:%S";
    pub const AXIS_DATE_FORMAT: &str = "%Y-%m-%d";

    /// Zone-less layouts the history endpoint is known to emit. Read as UTC.
    const NAIVE_DATETIME_FORMATS: [&str; 4] = [
        "%Y-%m-%d %H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
}

/// Parse a bar timestamp sent by the history endpoint.
/// Accepts RFC 3339, RFC 2822 (Flask's default date rendering) and the
/// zone-less layouts above, which are taken to be UTC.
pub fn parse_datetime_utc(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in TimeUtils::NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Whole Unix seconds, truncated towards the past (floor, not round).
pub fn epoch_ms_to_sec(epoch_ms: i64) -> i64 {
    epoch_ms.div_euclid(TimeUtils::MS_IN_S)
}

/// Used for the chart's horizontal axis
pub fn epoch_sec_to_axis_label(epoch_sec: i64, time_visible: bool, seconds_visible: bool) -> String {
    let format = match (time_visible, seconds_visible) {
        (false, _) => TimeUtils::AXIS_DATE_FORMAT,
        (true, false) => TimeUtils::AXIS_TIME_FORMAT,
        (true, true) => TimeUtils::AXIS_TIME_FORMAT_SECONDS,
    };
    match DateTime::from_timestamp(epoch_sec, 0) {
        Some(dt) => dt.format(format).to_string(),
        None => String::new(),
    }
}

pub fn epoch_sec_to_utc(epoch_sec: i64) -> String {
    // Used for display purposes
    match DateTime::from_timestamp(epoch_sec, 0) {
        Some(dt) => dt.format(TimeUtils::STANDARD_TIME_FORMAT).to_string(),
        None => String::new(),
    }
}
