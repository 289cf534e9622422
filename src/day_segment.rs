use log::trace;

use crate::angles::{SECONDS_PER_DAY, SECONDS_PER_HALF_DAY};
use crate::types::{DaySegments, DayState, DayTimeline, EventBounds, SolarEvent, SunTimes};

pub fn classify_day_state(now: f64, sunrise: f64, sunset: f64) -> DayState {
    if now < sunrise {
        DayState::PreSunrise
    } else if now > sunset {
        DayState::PostSunset
    } else {
        DayState::Daytime
    }
}

fn constant_state(event: SolarEvent) -> Option<DayState> {
    match event {
        SolarEvent::AlwaysDark => Some(DayState::PostSunset),
        SolarEvent::AlwaysLight => Some(DayState::Daytime),
        SolarEvent::Normal { .. } => None,
    }
}

// a sunset sentinel outranks a sunrise sentinel
fn today_seconds(today: &SunTimes) -> Result<(f64, f64), DayState> {
    match (
        today.sunrise.seconds_since_midnight(),
        today.sunset.seconds_since_midnight(),
    ) {
        (Some(sunrise), Some(sunset)) => Ok((sunrise, sunset)),
        _ => Err(constant_state(today.sunset)
            .or_else(|| constant_state(today.sunrise))
            .unwrap_or(DayState::PostSunset)),
    }
}

/// `now` is seconds since local midnight. A polar sentinel in yesterday's
/// sunset or tomorrow's sunrise falls back to today's event of that kind.
pub fn resolve_day_segments(now: f64, timeline: &DayTimeline) -> DaySegments {
    let (sunrise, sunset) = match today_seconds(&timeline.today) {
        Ok(seconds) => seconds,
        Err(state) => {
            trace!("polar {state:?} at {now}s");
            return DaySegments { state, bounds: None };
        }
    };
    let yesterday_sunset = timeline
        .yesterday_sunset
        .seconds_since_midnight()
        .unwrap_or(sunset);
    let tomorrow_sunrise = timeline
        .tomorrow_sunrise
        .seconds_since_midnight()
        .unwrap_or(sunrise);

    let state = classify_day_state(now, sunrise, sunset);
    let (previous_seconds, next_seconds) = match state {
        DayState::PreSunrise => (yesterday_sunset - SECONDS_PER_DAY, sunrise),
        DayState::Daytime => (sunrise, sunset),
        DayState::PostSunset => (sunset, tomorrow_sunrise + SECONDS_PER_DAY),
    };
    let bounds = EventBounds {
        previous_seconds,
        next_seconds,
        previous_within_12h: now - previous_seconds <= SECONDS_PER_HALF_DAY,
        next_within_12h: next_seconds - now <= SECONDS_PER_HALF_DAY,
    };
    trace!("{state:?} at {now}s, previous {previous_seconds}s, next {next_seconds}s");

    DaySegments {
        state,
        bounds: Some(bounds),
    }
}

impl DayTimeline {
    // days beyond yesterday and tomorrow reuse today's events
    pub fn state_at(&self, t: f64) -> DayState {
        let (sunrise, sunset) = match today_seconds(&self.today) {
            Ok(seconds) => seconds,
            Err(state) => return state,
        };
        let day = (t / SECONDS_PER_DAY).floor();
        let local = t - day * SECONDS_PER_DAY;
        let (sunrise, sunset) = match day as i64 {
            -1 => (
                sunrise,
                self.yesterday_sunset.seconds_since_midnight().unwrap_or(sunset),
            ),
            1 => (
                self.tomorrow_sunrise
                    .seconds_since_midnight()
                    .unwrap_or(sunrise),
                sunset,
            ),
            _ => (sunrise, sunset),
        };
        classify_day_state(local, sunrise, sunset)
    }

    pub fn is_lit_at(&self, t: f64) -> bool {
        self.state_at(t).is_day()
    }
}
