use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::record::ImageRecord;

/// Layout of EXIF timestamps: `YYYY:MM:DD HH:mm:ss`
pub const EXIF_DATETIME_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

const EXIF_DATE_FORMAT: &str = "%Y:%m:%d";

/// Date used when a photo carries no usable timestamp.
pub fn sentinel_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1999, 1, 1).expect("1999-01-01 is a valid date")
}

/// Parse an EXIF timestamp, keeping only the calendar date.
///
/// A bare `YYYY:MM:DD` without a time part still yields the date. When a
/// time part is present it must be valid too. Out-of-range values like the
/// `0000:00:00 00:00:00` some cameras write are rejected.
pub fn parse_exif_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    if let Ok(dt) = NaiveDateTime::parse_from_str(s, EXIF_DATETIME_FORMAT) {
        return Some(dt.date());
    }

    let mut parts = s.split_whitespace();
    let date = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::parse_from_str(date, EXIF_DATE_FORMAT).ok()
}

/// Pick the best date for a record: capture time, then modification time,
/// then the 1999-01-01 sentinel. Never fails.
pub fn resolve(record: &ImageRecord) -> NaiveDate {
    record
        .created
        .as_deref()
        .and_then(parse_exif_date)
        .or_else(|| record.modified.as_deref().and_then(parse_exif_date))
        .unwrap_or_else(sentinel_date)
}

/// `<target_root>/<year>/<year>-<MM>-<DD>`
pub fn build_path(date: NaiveDate, target_root: &Path) -> PathBuf {
    let year = date.year();
    target_root
        .join(year.to_string())
        .join(format!("{}-{:02}-{:02}", year, date.month(), date.day()))
}
