use chrono::{NaiveDate, Weekday};

use crate::error::{check_latitude, check_longitude, check_utc_offset, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        Ok(Self {
            latitude: check_latitude(latitude)?,
            longitude: check_longitude(longitude)?,
        })
    }
}

/// `utc_offset_hours` already includes any daylight-saving shift; presets
/// and the clock leave `is_daylight_saving` false.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockInputs {
    pub location: Location,
    pub utc_offset_hours: f64,
    pub is_daylight_saving: bool,
}

impl ClockInputs {
    pub fn new(latitude: f64, longitude: f64, utc_offset_hours: f64) -> Result<Self> {
        Ok(Self {
            location: Location::new(latitude, longitude)?,
            utc_offset_hours: check_utc_offset(utc_offset_hours)?,
            is_daylight_saving: false,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.location.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.location.longitude
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarEventKind {
    Normal,
    AlwaysDark,
    AlwaysLight,
}

/// Sunrise or sunset on one calendar day.
///
/// The polar variants are classifications, not clock times: the sun never
/// rises (`AlwaysDark`) or never sets (`AlwaysLight`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarEvent {
    Normal { hour: i32, minute: i32 },
    AlwaysDark,
    AlwaysLight,
}

impl SolarEvent {
    pub fn kind(&self) -> SolarEventKind {
        match self {
            Self::Normal { .. } => SolarEventKind::Normal,
            Self::AlwaysDark => SolarEventKind::AlwaysDark,
            Self::AlwaysLight => SolarEventKind::AlwaysLight,
        }
    }

    pub fn is_normal(&self) -> bool {
        matches!(self, Self::Normal { .. })
    }

    pub fn hour_minute(&self) -> Option<(i32, i32)> {
        match *self {
            Self::Normal { hour, minute } => Some((hour, minute)),
            _ => None,
        }
    }

    /// Seconds from local midnight, `None` for the polar sentinels.
    pub fn seconds_since_midnight(&self) -> Option<f64> {
        self.hour_minute()
            .map(|(hour, minute)| f64::from(hour * 3600 + minute * 60))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SunTimes {
    pub sunrise: SolarEvent,
    pub sunset: SolarEvent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayState {
    PreSunrise,
    Daytime,
    PostSunset,
}

impl DayState {
    pub fn is_day(&self) -> bool {
        *self == Self::Daytime
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayTimeline {
    pub yesterday_sunset: SolarEvent,
    pub today: SunTimes,
    pub tomorrow_sunrise: SolarEvent,
}

impl DayTimeline {
    pub fn from_today(today: SunTimes) -> Self {
        Self {
            yesterday_sunset: today.sunset,
            today,
            tomorrow_sunrise: today.sunrise,
        }
    }
}

/// Previous and next sunrise/sunset around "now", in seconds from today's
/// local midnight. `previous_seconds` is negative when the event was
/// yesterday; `next_seconds` exceeds 86400 when it is tomorrow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventBounds {
    pub previous_seconds: f64,
    pub next_seconds: f64,
    pub previous_within_12h: bool,
    pub next_within_12h: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DaySegments {
    pub state: DayState,
    pub bounds: Option<EventBounds>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralPoint {
    pub radius: f64,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralConfig {
    pub turns: u32,
    pub points_per_turn: u32,
    /// Fraction of half the smaller window dimension.
    pub inner_radius_frac: f64,
    pub outer_radius_frac: f64,
}

impl Default for SpiralConfig {
    fn default() -> Self {
        Self {
            turns: 2,
            points_per_turn: 360,
            inner_radius_frac: 0.51,
            outer_radius_frac: 0.68,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpiralTable {
    pub config: SpiralConfig,
    pub width: f64,
    pub height: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub points: Vec<SpiralPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArcRun {
    pub start: usize,
    pub end: usize,
    pub lit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallClock {
    pub date: NaiveDate,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub nanosecond: u32,
    pub weekday: Weekday,
}

impl WallClock {
    pub fn seconds_since_midnight(&self) -> f64 {
        f64::from(self.hour * 3600 + self.minute * 60 + self.second)
            + f64::from(self.nanosecond) / 1e9
    }

    pub fn fractional_hours(&self) -> f64 {
        self.seconds_since_midnight() / 3600.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayEvents {
    pub date: NaiveDate,
    pub day_offset: i32,
    pub sun_times: SunTimes,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableMetadata {
    pub generated_at: String,
    pub total_days: usize,
    pub polar_days: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SolarEventTable {
    pub inputs: ClockInputs,
    pub days: Vec<DayEvents>,
    pub metadata: TableMetadata,
}
