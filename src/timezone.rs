use chrono::{DateTime, Datelike, Duration, Local, NaiveDateTime, Offset, TimeZone, Timelike, Utc};

use crate::types::WallClock;

/// Offset hours as whole seconds; fractional offsets such as +5.5 are kept.
pub fn offset_seconds(hours: f64) -> i64 {
    (hours * 3600.0).round() as i64
}

pub fn utc_offset_hours_of<Tz: TimeZone>(instant: &DateTime<Tz>) -> f64 {
    f64::from(instant.offset().fix().local_minus_utc()) / 3600.0
}

pub fn local_utc_offset_hours() -> f64 {
    utc_offset_hours_of(&Local::now())
}

/// Host wall-clock time moved to `target_utc_offset`. A shift chrono
/// cannot represent leaves the time unchanged.
pub fn rotate_to_offset(
    wall_clock: NaiveDateTime,
    browser_utc_offset: f64,
    target_utc_offset: f64,
) -> NaiveDateTime {
    Duration::try_seconds(offset_seconds(target_utc_offset - browser_utc_offset))
        .and_then(|shift| wall_clock.checked_add_signed(shift))
        .unwrap_or(wall_clock)
}

pub fn wall_clock_from(dt: NaiveDateTime) -> WallClock {
    WallClock {
        date: dt.date(),
        hour: dt.hour(),
        minute: dt.minute(),
        second: dt.second(),
        nanosecond: dt.nanosecond().min(999_999_999),
        weekday: dt.weekday(),
    }
}

pub fn resolve_wall_clock(
    browser_wall_clock: NaiveDateTime,
    browser_utc_offset: f64,
    target_utc_offset: f64,
) -> WallClock {
    wall_clock_from(rotate_to_offset(
        browser_wall_clock,
        browser_utc_offset,
        target_utc_offset,
    ))
}

pub fn wall_clock_at_offset(instant: DateTime<Utc>, utc_offset_hours: f64) -> WallClock {
    resolve_wall_clock(instant.naive_utc(), 0.0, utc_offset_hours)
}
