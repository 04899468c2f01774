//! Date/time stamp formatting.

use std::fmt::{self, Write};

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone};
use tracing::{debug, warn};

use crate::sanitize::capped;

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Longest date text drawn on the flag, in bytes.
pub const MAX_DATE_TEXT_LEN: usize = 63;

#[derive(Debug, thiserror::Error)]
pub enum DateFormatError {
    #[error("invalid date format {0:?}")]
    InvalidFormat(String),
}

/// Formats `timestamp` with a strftime-style `format`.
pub fn format_timestamp<Tz>(timestamp: &DateTime<Tz>, format: &str) -> Result<String, DateFormatError>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let items: Vec<Item> = StrftimeItems::new(format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(DateFormatError::InvalidFormat(format.to_string()));
    }

    let mut text = String::new();
    write!(text, "{}", timestamp.format_with_items(items.iter()))
        .map_err(|_| DateFormatError::InvalidFormat(format.to_string()))?;
    Ok(text)
}

/// Formats the current local time for display on the flag.
///
/// An invalid format falls back to [`DEFAULT_DATE_FORMAT`]; text longer than
/// [`MAX_DATE_TEXT_LEN`] is truncated.
pub fn stamp(format: &str) -> String {
    stamp_at(&Local::now(), format)
}

pub fn stamp_at<Tz>(timestamp: &DateTime<Tz>, format: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let text = match format_timestamp(timestamp, format) {
        Ok(text) => text,
        Err(e) => {
            warn!("{}, using {:?} instead", e, DEFAULT_DATE_FORMAT);
            format_timestamp(timestamp, DEFAULT_DATE_FORMAT).unwrap_or_default()
        }
    };
    debug!("Date stamp is {:?}", text);
    capped(&text, MAX_DATE_TEXT_LEN, "date text")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 31, 14, 5, 9).unwrap()
    }

    #[test]
    fn test_default_format() {
        let text = format_timestamp(&sample(), DEFAULT_DATE_FORMAT).unwrap();
        assert_eq!(text, "2024-03-31 14:05");
    }

    #[test]
    fn test_custom_format() {
        let text = format_timestamp(&sample(), "%d/%m %H:%M:%S").unwrap();
        assert_eq!(text, "31/03 14:05:09");
    }

    #[test]
    fn test_empty_format() {
        assert_eq!(format_timestamp(&sample(), "").unwrap(), "");
    }

    #[test]
    fn test_invalid_format() {
        assert!(format_timestamp(&sample(), "%Q").is_err());
    }

    #[test]
    fn test_stamp_falls_back_to_default() {
        assert_eq!(stamp_at(&sample(), "%Q"), "2024-03-31 14:05");
    }

    #[test]
    fn test_stamp_truncates() {
        let format = "%Y".repeat(20);
        let text = stamp_at(&sample(), &format);
        assert_eq!(text.len(), MAX_DATE_TEXT_LEN);
        assert!(text.starts_with("20242024"));
    }
}
