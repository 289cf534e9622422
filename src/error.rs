//! Errors raised at the input boundary. The numeric core never fails.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("invalid latitude {0}° (must be between -90° and +90°)")]
    InvalidLatitude(f64),

    #[error("invalid longitude {0}° (must be between -180° and +180°)")]
    InvalidLongitude(f64),

    #[error("invalid UTC offset {0}h (must be between -13h and +13h)")]
    InvalidUtcOffset(f64),

    #[error("invalid host UTC offset {0}h (must be between -14h and +14h)")]
    InvalidHostUtcOffset(f64),

    #[error("not a number: {0:?}")]
    InvalidNumber(String),

    #[error("invalid spiral shape: {0}")]
    InvalidSpiral(&'static str),
}

pub const MAX_UTC_OFFSET_HOURS: f64 = 13.0;
/// Widest offset a host clock can report (Line Islands).
pub const MAX_HOST_UTC_OFFSET_HOURS: f64 = 14.0;

pub fn check_latitude(latitude: f64) -> Result<f64> {
    if latitude.is_finite() && (-90.0..=90.0).contains(&latitude) {
        Ok(latitude)
    } else {
        Err(Error::InvalidLatitude(latitude))
    }
}

pub fn check_longitude(longitude: f64) -> Result<f64> {
    if longitude.is_finite() && (-180.0..=180.0).contains(&longitude) {
        Ok(longitude)
    } else {
        Err(Error::InvalidLongitude(longitude))
    }
}

pub fn check_utc_offset(hours: f64) -> Result<f64> {
    if hours.is_finite() && (-MAX_UTC_OFFSET_HOURS..=MAX_UTC_OFFSET_HOURS).contains(&hours) {
        Ok(hours)
    } else {
        Err(Error::InvalidUtcOffset(hours))
    }
}

pub fn check_host_utc_offset(hours: f64) -> Result<f64> {
    if hours.is_finite() && hours.abs() <= MAX_HOST_UTC_OFFSET_HOURS {
        Ok(hours)
    } else {
        Err(Error::InvalidHostUtcOffset(hours))
    }
}
