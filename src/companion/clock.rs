//! Date and time strings shown on the scoreboard.

use std::fmt::Display;

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Offset, TimeZone};

/// `H:MM AM TZ`, e.g. `7:05 PM EST`.
pub fn time_string<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    let offset = at.offset().fix().local_minus_utc();
    // Minutes west of UTC, positive in the Americas.
    let minutes_west = -offset / 60;
    format!(
        "{} {}",
        at.format("%-I:%M %p"),
        timezone_label(minutes_west)
    )
}

/// Short name for a UTC offset given in minutes west of UTC.
pub fn timezone_label(minutes_west: i32) -> String {
    let named = match minutes_west {
        240 => Some("AST"),
        300 => Some("EST"),
        360 => Some("CST"),
        420 => Some("MST"),
        480 => Some("PST"),
        540 => Some("AKST"),
        600 => Some("HAST"),
        0 => Some("UTC"),
        _ => None,
    };
    if let Some(name) = named {
        return name.to_string();
    }

    let sign = if minutes_west < 0 { '+' } else { '-' };
    let east = minutes_west.unsigned_abs();
    let (hours, minutes) = (east / 60, east % 60);
    if minutes == 0 {
        format!("UTC{sign}{hours}")
    } else {
        format!("UTC{sign}{hours}:{minutes:02}")
    }
}

/// Day `offset` days away from `today`, saturating at the calendar bounds.
pub fn schedule_date(today: NaiveDate, offset: i64) -> NaiveDate {
    Duration::try_days(offset)
        .and_then(|delta| today.checked_add_signed(delta))
        .unwrap_or(if offset < 0 {
            NaiveDate::MIN
        } else {
            NaiveDate::MAX
        })
}

/// Query-string form, `2023-10-16`.
pub fn query_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Label form, `Mon Oct 16`.
pub fn date_label(date: NaiveDate) -> String {
    date.format("%a %b %-d").to_string()
}

/// Start time of a game in `local`, from the API's RFC 3339 timestamp.
pub fn start_time(game_date: &str, local: &FixedOffset) -> Option<String> {
    let parsed = DateTime::parse_from_rfc3339(game_date).ok()?;
    Some(time_string(&parsed.with_timezone(local)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn west(hours: i32) -> FixedOffset {
        FixedOffset::west_opt(hours * 3600).unwrap()
    }

    #[test]
    fn named_zones() {
        assert_eq!(timezone_label(300), "EST");
        assert_eq!(timezone_label(600), "HAST");
        assert_eq!(timezone_label(0), "UTC");
    }

    #[test]
    fn unnamed_zones_carry_a_single_sign() {
        assert_eq!(timezone_label(-60), "UTC+1");
        assert_eq!(timezone_label(-330), "UTC+5:30");
        assert_eq!(timezone_label(180), "UTC-3");
    }

    #[test]
    fn twelve_hour_clock() {
        let evening = west(5).with_ymd_and_hms(2023, 10, 16, 19, 5, 0).unwrap();
        assert_eq!(time_string(&evening), "7:05 PM EST");

        let midnight = west(6).with_ymd_and_hms(2023, 10, 16, 0, 30, 0).unwrap();
        assert_eq!(time_string(&midnight), "12:30 AM CST");

        let noon = west(8).with_ymd_and_hms(2023, 10, 16, 12, 0, 0).unwrap();
        assert_eq!(time_string(&noon), "12:00 PM PST");
    }

    #[test]
    fn start_time_converts_to_local() {
        assert_eq!(
            start_time("2023-10-16T23:00:00Z", &west(4)).as_deref(),
            Some("7:00 PM AST")
        );
        assert_eq!(start_time("soon", &west(4)), None);
    }

    #[test]
    fn dates_move_by_days() {
        let today = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        assert_eq!(query_date(schedule_date(today, 1)), "2024-01-01");
        assert_eq!(date_label(schedule_date(today, -1)), "Sat Dec 30");
        assert_eq!(schedule_date(today, i64::MAX), NaiveDate::MAX);
    }
}
