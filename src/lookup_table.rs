use chrono::{NaiveDate, Utc};
use log::debug;

use crate::solar_event::{calc_solar_event, shift_date};
use crate::types::{
    ClockInputs, DayEvents, DayTimeline, SolarEvent, SolarEventTable, SunTimes, TableMetadata,
};

pub const WEEK_DAYS: i32 = 7;

pub fn minutes_to_time(total_minutes: i32) -> (i32, i32) {
    (total_minutes / 60, total_minutes % 60)
}

pub fn time_to_minutes(time: (i32, i32)) -> i32 {
    time.0 * 60 + time.1
}

pub fn event_minutes(event: &SolarEvent) -> Option<i32> {
    event.hour_minute().map(time_to_minutes)
}

pub fn generate_event_table(inputs: &ClockInputs, start: NaiveDate, days: i32) -> SolarEventTable {
    let mut entries: Vec<DayEvents> = Vec::with_capacity(days.max(0) as usize);
    for day_offset in 0..days {
        entries.push(DayEvents {
            date: shift_date(start, day_offset),
            day_offset,
            sun_times: SunTimes {
                sunrise: calc_solar_event(true, day_offset, start, inputs),
                sunset: calc_solar_event(false, day_offset, start, inputs),
            },
        });
    }

    let polar_days = entries
        .iter()
        .filter(|d| !d.sun_times.sunrise.is_normal() || !d.sun_times.sunset.is_normal())
        .count();
    debug!(
        "event table from {start}: {} days, {polar_days} polar, lat {} lon {} offset {}",
        entries.len(),
        inputs.latitude(),
        inputs.longitude(),
        inputs.utc_offset_hours
    );

    SolarEventTable {
        inputs: *inputs,
        metadata: TableMetadata {
            generated_at: Utc::now().format("%Y-%m-%dT%H:%M:%S+00:00").to_string(),
            total_days: entries.len(),
            polar_days,
        },
        days: entries,
    }
}

pub fn generate_week_table(inputs: &ClockInputs, today: NaiveDate) -> SolarEventTable {
    generate_event_table(inputs, today, WEEK_DAYS)
}

impl SolarEventTable {
    pub fn get(&self, date: NaiveDate) -> Option<&DayEvents> {
        self.days.iter().find(|d| d.date == date)
    }

    pub fn sun_times_on(&self, date: NaiveDate) -> Option<SunTimes> {
        self.get(date).map(|d| d.sun_times)
    }

    /// Timeline for `date`; needs the day before and after in the table.
    pub fn timeline_for(&self, date: NaiveDate) -> Option<DayTimeline> {
        let yesterday = self.sun_times_on(shift_date(date, -1))?;
        let today = self.sun_times_on(date)?;
        let tomorrow = self.sun_times_on(shift_date(date, 1))?;
        Some(DayTimeline {
            yesterday_sunset: yesterday.sunset,
            today,
            tomorrow_sunrise: tomorrow.sunrise,
        })
    }
}

pub fn table_to_compact(table: &SolarEventTable) -> Vec<(Option<i32>, Option<i32>)> {
    table
        .days
        .iter()
        .map(|d| {
            (
                event_minutes(&d.sun_times.sunrise),
                event_minutes(&d.sun_times.sunset),
            )
        })
        .collect()
}
