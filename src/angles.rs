use std::f64::consts::{FRAC_PI_2, PI, TAU};

pub const SECONDS_PER_DAY: f64 = 86_400.0;
pub const SECONDS_PER_HALF_DAY: f64 = 43_200.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / PI)
}

// Whole-turn steps, not rem_euclid: the sunrise series is pinned to these values.
pub fn normalize_radians(angle: f64) -> f64 {
    let mut a = angle;
    while a < 0.0 {
        a += 2.0 * PI;
    }
    while a >= 2.0 * PI {
        a -= 2.0 * PI;
    }
    a
}

pub fn radians_to_hours(rad: f64) -> f64 {
    rad * (24.0 / (2.0 * PI))
}

pub fn hours_to_radians(hours: f64) -> f64 {
    hours * 2.0 * PI / 24.0
}

// two turns per day, 12 o'clock at -π/2
pub fn hour_hand_radians(hours: f64) -> f64 {
    let rad = hours / 24.0 * (2.0 * TAU) - FRAC_PI_2;
    if rad > TAU {
        rad - TAU
    } else {
        rad
    }
}

pub fn timeline_radians(seconds: f64) -> f64 {
    seconds / SECONDS_PER_DAY * (2.0 * TAU) - FRAC_PI_2
}
