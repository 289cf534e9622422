use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};

use crate::error::Result;
use crate::types::ClockInputs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DstRule {
    None,
    /// Second Sunday of March 02:00 to first Sunday of November 02:00.
    UnitedStates,
    /// Last Sunday of March 01:00 to last Sunday of October 02:00.
    Europe,
    /// First Sunday of October 02:00 to first Sunday of April 03:00.
    Australia,
}

fn nth_sunday(year: i32, month: u32, n: u8) -> Option<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, month, Weekday::Sun, n)
}

fn last_sunday(year: i32, month: u32) -> Option<NaiveDate> {
    let last_day = if month == 12 {
        NaiveDate::from_ymd_opt(year, 12, 31)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?.pred_opt()?
    };
    let back = last_day.weekday().num_days_from_sunday();
    last_day.checked_sub_signed(Duration::days(i64::from(back)))
}

fn at_hour(date: Option<NaiveDate>, hour: u32) -> Option<NaiveDateTime> {
    date?.and_hms_opt(hour, 0, 0)
}

// local wall-clock window; for Australia it is the standard-time gap
fn window(rule: DstRule, year: i32) -> Option<(NaiveDateTime, NaiveDateTime)> {
    match rule {
        DstRule::None => None,
        DstRule::UnitedStates => Some((
            at_hour(nth_sunday(year, 3, 2), 2)?,
            at_hour(nth_sunday(year, 11, 1), 2)?,
        )),
        DstRule::Europe => Some((
            at_hour(last_sunday(year, 3), 1)?,
            at_hour(last_sunday(year, 10), 2)?,
        )),
        // the gap between the two dates is standard time
        DstRule::Australia => Some((
            at_hour(nth_sunday(year, 4, 1), 3)?,
            at_hour(nth_sunday(year, 10, 1), 2)?,
        )),
    }
}

impl DstRule {
    pub fn is_active(&self, now: NaiveDateTime) -> bool {
        let Some((start, end)) = window(*self, now.year()) else {
            return false;
        };
        let inside = now >= start && now < end;
        match self {
            DstRule::Australia => !inside,
            _ => inside,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub standard_offset_hours: f64,
    pub dst_rule: DstRule,
}

impl Preset {
    pub fn utc_offset_at(&self, now: NaiveDateTime) -> f64 {
        if self.dst_rule.is_active(now) {
            self.standard_offset_hours + 1.0
        } else {
            self.standard_offset_hours
        }
    }

    pub fn inputs(&self, now: NaiveDateTime) -> Result<ClockInputs> {
        ClockInputs::new(self.latitude, self.longitude, self.utc_offset_at(now))
    }
}

const fn preset(
    name: &'static str,
    latitude: f64,
    longitude: f64,
    standard_offset_hours: f64,
    dst_rule: DstRule,
) -> Preset {
    Preset {
        name,
        latitude,
        longitude,
        standard_offset_hours,
        dst_rule,
    }
}

pub const AUBURN: Preset = preset("Auburn", 38.89, -121.07, -8.0, DstRule::UnitedStates);
pub const ST_LOUIS: Preset = preset("St Louis", 38.627, -90.199, -6.0, DstRule::UnitedStates);
pub const IRVINE: Preset = preset("Irvine", 33.74, -117.64, -8.0, DstRule::UnitedStates);
pub const BOULDER: Preset = preset("Boulder", 40.015, -105.27, -7.0, DstRule::UnitedStates);
pub const LONDON: Preset = preset("London", 51.5, -0.127, 0.0, DstRule::Europe);
pub const BERKELEY: Preset = preset("Berkeley", 37.87, -122.27, -8.0, DstRule::UnitedStates);
pub const KANSAS_CITY: Preset = preset("Kansas City", 39.1, -94.578, -6.0, DstRule::UnitedStates);
pub const MELBOURNE: Preset = preset("Melbourne", -37.8, 144.96, 10.0, DstRule::Australia);
pub const SAN_DIEGO: Preset = preset("San Diego", 33.15, -117.3, -8.0, DstRule::UnitedStates);

/// Used when the host location cannot be determined.
pub const FALLBACK: Preset = preset("Melbourne", -37.8, 144.96, 10.0, DstRule::None);

pub const PRESETS: [Preset; 9] = [
    AUBURN,
    ST_LOUIS,
    IRVINE,
    BOULDER,
    LONDON,
    BERKELEY,
    KANSAS_CITY,
    MELBOURNE,
    SAN_DIEGO,
];

pub fn find_preset(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name.trim()))
}
