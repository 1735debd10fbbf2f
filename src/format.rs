//! Timestamp conversion and subtitle rendering.
//!
//! Stored timestamps are seconds relative to the store's reference epoch
//! (2001-01-01T00:00:00Z); display formatting happens in the local timezone.

use chrono::TimeZone;

/// Seconds between the Unix epoch and the store's reference epoch.
pub const REFERENCE_EPOCH_OFFSET_SECS: i64 = 978_307_200;

/// Convert a stored timestamp to Unix seconds.
///
/// Values below the offset are reference-relative and get the offset added;
/// values at or above it are treated as already Unix-relative.
pub fn to_unix_timestamp(stored: i64) -> i64 {
    if stored < REFERENCE_EPOCH_OFFSET_SECS {
        stored + REFERENCE_EPOCH_OFFSET_SECS
    } else {
        stored
    }
}

/// Render a Unix timestamp in the local timezone as
/// `YYYY-MM-DD H:MM:SS AM/PM`, with no leading zero on the hour.
pub fn format_copied_at(unix_ts: i64) -> String {
    format_copied_at_in(unix_ts, &chrono::Local)
}

/// Timezone-generic variant of [`format_copied_at`]; tests pass a fixed
/// zone so assertions don't depend on the host timezone.
pub fn format_copied_at_in<Tz: TimeZone>(unix_ts: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    tz.timestamp_opt(unix_ts, 0)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %-I:%M:%S %p").to_string())
        .unwrap_or_else(|| unix_ts.to_string())
}

/// Build the result subtitle: an optional line-count prefix, the character
/// count, the formatted copy time, and the source application when known.
pub fn subtitle(content: &str, unix_ts: i64, source_app: Option<&str>) -> String {
    subtitle_with_time(content, &format_copied_at(unix_ts), source_app)
}

/// Subtitle with the copy time already rendered.
///
/// The line-count prefix appears only when the content spans more than one
/// line; counts are characters, not bytes.
pub fn subtitle_with_time(content: &str, copied_at: &str, source_app: Option<&str>) -> String {
    let mut out = String::new();

    let line_breaks = content.matches('\n').count();
    if line_breaks > 0 {
        out.push_str(&format!("{} lines, ", line_breaks + 1));
    }

    out.push_str(&format!(
        "{} characters, copied at {}",
        content.chars().count(),
        copied_at
    ));

    if let Some(app) = source_app {
        out.push_str(&format!(" from {}", app));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_reference_relative_timestamp_gets_offset() {
        assert_eq!(
            to_unix_timestamp(700_000_000),
            700_000_000 + REFERENCE_EPOCH_OFFSET_SECS
        );
    }

    #[test]
    fn test_unix_relative_timestamp_passes_through() {
        assert_eq!(to_unix_timestamp(1_700_000_000), 1_700_000_000);
    }

    #[test]
    fn test_offset_boundary_passes_through() {
        assert_eq!(
            to_unix_timestamp(REFERENCE_EPOCH_OFFSET_SECS),
            REFERENCE_EPOCH_OFFSET_SECS
        );
    }

    #[test]
    fn test_format_morning_has_no_leading_zero() {
        let ts = Utc
            .with_ymd_and_hms(2023, 3, 15, 9, 5, 7)
            .unwrap()
            .timestamp();
        assert_eq!(format_copied_at_in(ts, &Utc), "2023-03-15 9:05:07 AM");
    }

    #[test]
    fn test_format_afternoon_is_twelve_hour() {
        let ts = Utc
            .with_ymd_and_hms(2023, 3, 15, 15, 5, 7)
            .unwrap()
            .timestamp();
        assert_eq!(format_copied_at_in(ts, &Utc), "2023-03-15 3:05:07 PM");
    }

    #[test]
    fn test_format_midnight_is_twelve_am() {
        let ts = Utc
            .with_ymd_and_hms(2024, 1, 1, 0, 30, 0)
            .unwrap()
            .timestamp();
        assert_eq!(format_copied_at_in(ts, &Utc), "2024-01-01 12:30:00 AM");
    }

    #[test]
    fn test_subtitle_single_line() {
        assert_eq!(
            subtitle_with_time("hello world", "2023-03-15 9:05:07 AM", None),
            "11 characters, copied at 2023-03-15 9:05:07 AM"
        );
    }

    #[test]
    fn test_subtitle_single_line_with_app() {
        assert_eq!(
            subtitle_with_time("hello world", "2023-03-15 9:05:07 AM", Some("Notes")),
            "11 characters, copied at 2023-03-15 9:05:07 AM from Notes"
        );
    }

    #[test]
    fn test_subtitle_multiline_has_line_count_prefix() {
        // The newline itself counts as a character
        assert_eq!(
            subtitle_with_time("a\nb", "2023-03-15 9:05:07 AM", None),
            "2 lines, 3 characters, copied at 2023-03-15 9:05:07 AM"
        );
    }

    #[test]
    fn test_subtitle_trailing_newline_counts_as_line_break() {
        let s = subtitle_with_time("one line\n", "t", None);
        assert!(s.starts_with("2 lines, "));
    }

    #[test]
    fn test_subtitle_counts_characters_not_bytes() {
        assert_eq!(
            subtitle_with_time("こんにちは", "t", None),
            "5 characters, copied at t"
        );
    }

    #[test]
    fn test_subtitle_empty_content() {
        assert_eq!(subtitle_with_time("", "t", None), "0 characters, copied at t");
    }
}
