// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Display formatting for values shown in tables and headers.

use chrono::{DateTime, Local, Utc};

/// Formats a timestamp in local time as `YYYY-MM-DD HH:MM`.
///
/// Tags that no song carries have no timestamp and format as a dash.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_timestamp(None), "-");
/// ```
pub(crate) fn format_timestamp(timestamp: Option<DateTime<Utc>>) -> String {
    match timestamp {
        Some(ts) => ts.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
        None => "-".to_string(),
    }
}

/// Formats a count with a noun, pluralised when needed.
pub(crate) fn format_count(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn missing_timestamp_is_a_dash() {
        assert_eq!(format_timestamp(None), "-");
    }

    #[test]
    fn timestamp_has_minute_precision() {
        let ts = Utc.with_ymd_and_hms(2026, 3, 14, 15, 9, 26).unwrap();
        let formatted = format_timestamp(Some(ts));

        assert_eq!(formatted.len(), "2026-03-14 15:09".len());
        assert!(formatted.starts_with("2026-03-1"));
    }

    #[test]
    fn counts_pluralise() {
        assert_eq!(format_count(1, "song"), "1 song");
        assert_eq!(format_count(0, "song"), "0 songs");
        assert_eq!(format_count(12, "tag"), "12 tags");
    }
}
