pub mod angles;
pub mod clock;
pub mod day_segment;
pub mod error;
pub mod format;
pub mod lookup_table;
pub mod presets;
pub mod solar_event;
pub mod spiral;
pub mod timezone;
pub mod types;

pub use angles::{
    deg_to_rad, hour_hand_radians, hours_to_radians, normalize_radians, rad_to_deg,
    radians_to_hours, timeline_radians, SECONDS_PER_DAY, SECONDS_PER_HALF_DAY,
};

pub use clock::{ClockFrame, DaySpiralClock};

pub use day_segment::{classify_day_state, resolve_day_segments};

pub use error::{Error, Result};

pub use format::{
    format_12h, format_solar_event, format_utc_offset, parse_latitude, parse_longitude,
    parse_number, parse_utc_offset,
};

pub use lookup_table::{
    event_minutes, generate_event_table, generate_week_table, minutes_to_time,
    table_to_compact, time_to_minutes, WEEK_DAYS,
};

pub use presets::{find_preset, DstRule, Preset, FALLBACK, PRESETS};

pub use solar_event::{
    calc_solar_event, day_number, day_timeline, shift_date, solar_event_on, sun_times,
};

pub use spiral::{generate_spiral, SECONDS_PER_TURN};

pub use timezone::{
    local_utc_offset_hours, resolve_wall_clock, rotate_to_offset, utc_offset_hours_of,
    wall_clock_at_offset,
};

pub use types::{
    ArcRun, ClockInputs, DayEvents, DaySegments, DayState, DayTimeline, EventBounds, Location,
    SolarEvent, SolarEventKind, SolarEventTable, SpiralConfig, SpiralPoint, SpiralTable,
    SunTimes, TableMetadata, WallClock,
};
