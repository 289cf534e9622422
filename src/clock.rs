//! Latitude, longitude and UTC offset arrive independently. Until all three
//! are known the clock is pending and produces no frame.

use chrono::{NaiveDate, NaiveDateTime};
use log::{debug, info, warn};

use crate::angles::hour_hand_radians;
use crate::day_segment::resolve_day_segments;
use crate::error::{
    check_host_utc_offset, check_latitude, check_longitude, check_utc_offset, Result,
};
use crate::solar_event::day_timeline;
use crate::timezone::resolve_wall_clock;
use crate::types::{
    ClockInputs, DaySegments, DayTimeline, Location, SpiralConfig, SpiralTable, SunTimes,
    WallClock,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockFrame {
    pub wall_clock: WallClock,
    pub inputs: ClockInputs,
    pub timeline: DayTimeline,
    pub segments: DaySegments,
    pub hour_hand_radians: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct SunCache {
    date: NaiveDate,
    inputs: ClockInputs,
    timeline: DayTimeline,
}

#[derive(Debug, Clone, Default)]
pub struct DaySpiralClock {
    browser_utc_offset: f64,
    latitude: Option<f64>,
    longitude: Option<f64>,
    utc_offset: Option<f64>,
    daylight_saving: bool,
    local: Option<ClockInputs>,
    cache: Option<SunCache>,
    recomputations: usize,
    spiral: Option<SpiralTable>,
}

impl DaySpiralClock {
    pub fn new(browser_utc_offset: f64) -> Result<Self> {
        let browser_utc_offset = check_host_utc_offset(browser_utc_offset).map_err(|e| {
            warn!("host offset rejected: {e}");
            e
        })?;
        Ok(Self {
            browser_utc_offset,
            ..Self::default()
        })
    }

    pub fn browser_utc_offset(&self) -> f64 {
        self.browser_utc_offset
    }

    pub fn inputs(&self) -> Option<ClockInputs> {
        Some(ClockInputs {
            location: Location {
                latitude: self.latitude?,
                longitude: self.longitude?,
            },
            utc_offset_hours: self.utc_offset?,
            is_daylight_saving: self.daylight_saving,
        })
    }

    pub fn is_pending(&self) -> bool {
        self.inputs().is_none()
    }

    pub fn recomputations(&self) -> usize {
        self.recomputations
    }

    pub fn sun_times(&self) -> Option<SunTimes> {
        let inputs = self.inputs()?;
        self.cache
            .filter(|c| c.inputs == inputs)
            .map(|c| c.timeline.today)
    }

    fn invalidate(&mut self) {
        self.cache = None;
    }

    pub fn set_latitude(&mut self, latitude: f64) -> Result<()> {
        let latitude = check_latitude(latitude).map_err(|e| {
            warn!("{e}; keeping latitude {:?}", self.latitude);
            e
        })?;
        self.latitude = Some(latitude);
        self.invalidate();
        Ok(())
    }

    pub fn set_longitude(&mut self, longitude: f64) -> Result<()> {
        let longitude = check_longitude(longitude).map_err(|e| {
            warn!("{e}; keeping longitude {:?}", self.longitude);
            e
        })?;
        self.longitude = Some(longitude);
        self.invalidate();
        Ok(())
    }

    pub fn set_utc_offset(&mut self, hours: f64) -> Result<()> {
        let hours = check_utc_offset(hours).map_err(|e| {
            warn!("{e}; keeping UTC offset {:?}", self.utc_offset);
            e
        })?;
        self.utc_offset = Some(hours);
        self.invalidate();
        Ok(())
    }

    pub fn set_inputs(&mut self, inputs: ClockInputs) {
        info!(
            "location {:.3}, {:.3} at UTC{:+}",
            inputs.latitude(),
            inputs.longitude(),
            inputs.utc_offset_hours
        );
        self.latitude = Some(inputs.latitude());
        self.longitude = Some(inputs.longitude());
        self.utc_offset = Some(inputs.utc_offset_hours);
        self.daylight_saving = inputs.is_daylight_saving;
        self.invalidate();
    }

    pub fn set_local(&mut self, inputs: ClockInputs) {
        self.local = Some(inputs);
        self.set_inputs(inputs);
    }

    /// Returns to the host location; false when none is known yet.
    pub fn reset_to_local(&mut self) -> bool {
        match self.local {
            Some(local) => {
                self.set_inputs(local);
                true
            }
            None => false,
        }
    }

    pub fn clear_location(&mut self) {
        info!("location cleared, clock pending");
        self.latitude = None;
        self.longitude = None;
        self.utc_offset = None;
        self.invalidate();
    }

    fn timeline(&mut self, inputs: ClockInputs, date: NaiveDate) -> DayTimeline {
        if let Some(cache) = self.cache.filter(|c| c.date == date && c.inputs == inputs) {
            return cache.timeline;
        }
        let timeline = day_timeline(&inputs, date);
        self.recomputations += 1;
        debug!(
            "solar events for {date}: sunrise {:?}, sunset {:?}",
            timeline.today.sunrise, timeline.today.sunset
        );
        self.cache = Some(SunCache {
            date,
            inputs,
            timeline,
        });
        timeline
    }

    pub fn frame(&mut self, browser_wall_clock: NaiveDateTime) -> Option<ClockFrame> {
        let inputs = self.inputs()?;
        let wall_clock = resolve_wall_clock(
            browser_wall_clock,
            self.browser_utc_offset,
            inputs.utc_offset_hours,
        );
        let timeline = self.timeline(inputs, wall_clock.date);
        let segments = resolve_day_segments(wall_clock.seconds_since_midnight(), &timeline);
        Some(ClockFrame {
            wall_clock,
            inputs,
            timeline,
            segments,
            hour_hand_radians: hour_hand_radians(wall_clock.fractional_hours()),
        })
    }

    // rebuilt only when the window or the shape changed
    pub fn spiral(&mut self, config: SpiralConfig, width: f64, height: f64) -> Result<&SpiralTable> {
        let table = match self.spiral.take() {
            Some(table) if !table.is_stale(&config, width, height) => table,
            _ => SpiralTable::new(config, width, height)?,
        };
        Ok(self.spiral.insert(table))
    }
}
