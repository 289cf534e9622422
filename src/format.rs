use crate::error::{check_latitude, check_longitude, check_utc_offset, Error, Result};
use crate::types::SolarEvent;

/// `"05:40 AM"`, `"12:00 PM"`, `"12:15 AM"`.
pub fn format_12h(hour: i32, minute: i32) -> String {
    let suffix = if hour.rem_euclid(24) < 12 { "AM" } else { "PM" };
    let hour12 = match hour.rem_euclid(12) {
        0 => 12,
        h => h,
    };
    format!("{:02}:{:02} {}", hour12, minute, suffix)
}

pub fn format_solar_event(event: &SolarEvent) -> String {
    match *event {
        SolarEvent::Normal { hour, minute } => format_12h(hour, minute),
        SolarEvent::AlwaysDark => "No Daylight".to_string(),
        SolarEvent::AlwaysLight => "No Night".to_string(),
    }
}

pub fn format_utc_offset(hours: f64) -> String {
    if hours > 0.0 {
        format!("+{}", hours)
    } else {
        format!("{}", hours)
    }
}

pub fn parse_number(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(Error::InvalidNumber(trimmed.to_string())),
    }
}

pub fn parse_latitude(text: &str) -> Result<f64> {
    check_latitude(parse_number(text)?)
}

pub fn parse_longitude(text: &str) -> Result<f64> {
    check_longitude(parse_number(text)?)
}

pub fn parse_utc_offset(text: &str) -> Result<f64> {
    check_utc_offset(parse_number(text)?)
}
