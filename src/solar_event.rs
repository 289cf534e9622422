//! Low-precision sunrise/sunset times after the 1984 *Astronomy* magazine
//! series.
//!
//! The series works in a west-positive longitude convention: the
//! calculator negates the east-positive longitude it is given before use.
//! That negation is part of the approximation. Dropping it without
//! re-deriving the series shifts every result by twice the longitude.
//!
//! Accuracy is a few minutes at mid latitudes. Close to the polar circles
//! the result can flip between a clock time and a polar sentinel within a
//! fraction of a degree, and with a daylight-saving offset the sunset can
//! land just after midnight. Both are properties of the approximation.

use std::f64::consts::PI;

use chrono::{Datelike, Duration, NaiveDate};
use log::trace;

use crate::angles::{deg_to_rad, normalize_radians, radians_to_hours};
use crate::types::{ClockInputs, DayTimeline, SolarEvent, SunTimes};

// keeps tan(mm) finite at exact multiples of π/2
const TANGENT_NUDGE: f64 = 4.84814e-6;

const COS_OBLIQUITY: f64 = 0.91746;
const SIN_OBLIQUITY: f64 = 0.39782;
// cos(90°50'): refraction plus solar semi-diameter
const COS_HORIZON_ZENITH: f64 = -0.014539;

/// Approximate day of year.
///
/// `floor(275*m/9) + d - k*floor((m+9)/12) - 30` with `k = 1` in years
/// divisible by four and `k = 2` otherwise. Century years are treated as
/// leap years, so 1900 and 2100 are one day off from March onwards.
pub fn day_number(year: i32, month: u32, day: u32) -> i32 {
    let month = month as i32;
    let mut correction = (month + 9) / 12;
    if year % 4 != 0 {
        correction *= 2;
    }
    275 * month / 9 + day as i32 - correction - 30
}

/// `is_daylight_saving` adds a further hour for callers that pass a
/// standard-time offset. Inputs are not validated.
pub fn solar_event_on(
    want_sunrise: bool,
    date: NaiveDate,
    latitude: f64,
    longitude: f64,
    utc_offset_hours: f64,
    is_daylight_saving: bool,
) -> SolarEvent {
    let lat = deg_to_rad(latitude);
    let lon = deg_to_rad(-longitude);
    let gmt_offset = if is_daylight_saving {
        (-utc_offset_hours - 1.0) * 2.0 * PI / 24.0
    } else {
        -utc_offset_hours * 2.0 * PI / 24.0
    };

    let daynum = day_number(date.year(), date.month(), date.day());
    let jj = if want_sunrise { PI / 2.0 } else { PI * 2.0 };
    let kk = f64::from(daynum) + ((jj + lon) / (2.0 * PI));

    // mean anomaly, then true longitude
    let ll = kk * 0.017202 - 0.0574039;
    let mut mm = ll + 0.0334405 * ll.sin() + 0.000349066 * (2.0 * ll).sin() + 4.93289;
    mm = normalize_radians(mm);
    let quarter_turns = 2.0 * mm / PI;
    if quarter_turns - quarter_turns.trunc() == 0.0 {
        mm += TANGENT_NUDGE;
    }

    // right ascension, same quadrant as mm
    let mut pp = (COS_OBLIQUITY * (mm.sin() / mm.cos())).atan();
    if mm > PI / 2.0 {
        if mm > 3.0 * PI / 2.0 {
            pp += 2.0 * PI;
        } else {
            pp += PI;
        }
    }

    let sin_decl = SIN_OBLIQUITY * mm.sin();
    let qq = (sin_decl / (1.0 - sin_decl * sin_decl).sqrt()).atan();

    let ss = (COS_HORIZON_ZENITH - (qq.sin() * lat.sin())) / (qq.cos() * lat.cos());
    if ss > 1.0 {
        trace!("cos(hour angle) {ss} > 1 at latitude {latitude}: no sunrise");
        return SolarEvent::AlwaysDark;
    }
    if ss < -1.0 {
        trace!("cos(hour angle) {ss} < -1 at latitude {latitude}: no sunset");
        return SolarEvent::AlwaysLight;
    }

    let mut hour_angle = -(ss / (1.0 - ss * ss).sqrt()).atan() + PI / 2.0;
    if want_sunrise {
        hour_angle = 2.0 * PI - hour_angle;
    }

    let local_apparent = hour_angle + pp - 0.0172028 * kk - 1.73364;
    let wall_clock = local_apparent + lon - gmt_offset;
    clock_time(wall_clock)
}

fn clock_time(rad: f64) -> SolarEvent {
    let hours = radians_to_hours(normalize_radians(rad));
    let mut hour = hours.trunc();
    let minutes = (hours - hour) * 60.0;
    let mut minute = minutes.trunc();
    if minutes - minute >= 0.5 {
        minute += 1.0;
    }
    if minute >= 60.0 {
        hour += 1.0;
        minute = 0.0;
    }
    // 23:59.5 and later rounds onto the next midnight
    if hour >= 24.0 {
        hour -= 24.0;
    }
    SolarEvent::Normal {
        hour: hour as i32,
        minute: minute as i32,
    }
}

pub fn shift_date(date: NaiveDate, day_offset: i32) -> NaiveDate {
    date.checked_add_signed(Duration::days(i64::from(day_offset)))
        .unwrap_or(date)
}

pub fn calc_solar_event(
    want_sunrise: bool,
    day_offset: i32,
    today: NaiveDate,
    inputs: &ClockInputs,
) -> SolarEvent {
    solar_event_on(
        want_sunrise,
        shift_date(today, day_offset),
        inputs.latitude(),
        inputs.longitude(),
        inputs.utc_offset_hours,
        inputs.is_daylight_saving,
    )
}

pub fn sun_times(inputs: &ClockInputs, date: NaiveDate) -> SunTimes {
    SunTimes {
        sunrise: calc_solar_event(true, 0, date, inputs),
        sunset: calc_solar_event(false, 0, date, inputs),
    }
}

pub fn day_timeline(inputs: &ClockInputs, today: NaiveDate) -> DayTimeline {
    DayTimeline {
        yesterday_sunset: calc_solar_event(false, -1, today, inputs),
        today: sun_times(inputs, today),
        tomorrow_sunrise: calc_solar_event(true, 1, today, inputs),
    }
}
