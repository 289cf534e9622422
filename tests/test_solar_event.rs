use chrono::NaiveDate;

use day_spiral::solar_event::*;
use day_spiral::types::{ClockInputs, SolarEvent, SolarEventKind};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(hour: i32, minute: i32) -> SolarEvent {
    SolarEvent::Normal { hour, minute }
}

fn rise_set(d: NaiveDate, lat: f64, lon: f64, offset: f64) -> (SolarEvent, SolarEvent) {
    (
        solar_event_on(true, d, lat, lon, offset, false),
        solar_event_on(false, d, lat, lon, offset, false),
    )
}

// ── Day number ──

#[test]
fn test_day_number_non_leap_year() {
    assert_eq!(day_number(2025, 1, 1), 1);
    assert_eq!(day_number(2025, 2, 10), 41);
    assert_eq!(day_number(2025, 3, 1), 60);
    assert_eq!(day_number(2025, 12, 31), 365);
}

#[test]
fn test_day_number_leap_year() {
    assert_eq!(day_number(2024, 2, 29), 60);
    assert_eq!(day_number(2024, 3, 1), 61);
    assert_eq!(day_number(2024, 12, 31), 366);
}

#[test]
fn test_day_number_january_february_ignore_leap() {
    for day in 1..=28 {
        assert_eq!(day_number(2024, 2, day), day_number(2025, 2, day));
    }
}

#[test]
fn test_day_number_first_of_each_month_non_leap() {
    let expected = [1, 32, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335];
    for (i, &exp) in expected.iter().enumerate() {
        let month = i as u32 + 1;
        assert_eq!(day_number(2026, month, 1), exp, "Month {}", month);
    }
}

// ── Golden baselines ──

#[test]
fn test_san_diego_early_summer() {
    let (rise, set) = rise_set(date(2025, 6, 1), 33.1, -117.1, -7.0);
    assert_eq!(rise, at(5, 40));
    assert_eq!(set, at(19, 52));
}

#[test]
fn test_san_diego_mid_may() {
    let (rise, set) = rise_set(date(2025, 5, 15), 33.1, -117.1, -7.0);
    assert_eq!(rise, at(5, 49));
    assert_eq!(set, at(19, 41));
}

#[test]
fn test_san_diego_solstice_leap_year() {
    let (rise, set) = rise_set(date(2024, 6, 21), 33.1, -117.1, -7.0);
    assert_eq!(rise, at(5, 40));
    assert_eq!(set, at(20, 1));
}

#[test]
fn test_melbourne_summer_sunset_after_eight() {
    let (rise, set) = rise_set(date(2025, 1, 15), -37.8, 144.96, 11.0);
    assert_eq!(rise, at(6, 14));
    assert_eq!(set, at(20, 44));

    let (rise, set) = rise_set(date(2025, 12, 21), -37.8, 144.96, 11.0);
    assert_eq!(rise, at(5, 54));
    assert_eq!(set, at(20, 42));
    let (hour, _) = set.hour_minute().unwrap();
    assert!(hour >= 20);
}

#[test]
fn test_melbourne_standard_offset_is_one_hour_earlier() {
    let (rise, set) = rise_set(date(2025, 1, 15), -37.8, 144.96, 10.0);
    assert_eq!(rise, at(5, 14));
    assert_eq!(set, at(19, 44));
}

#[test]
fn test_equator_equinox() {
    let (rise, set) = rise_set(date(2025, 3, 20), 0.0, 0.0, 0.0);
    assert_eq!(rise, at(6, 4));
    assert_eq!(set, at(18, 11));
}

#[test]
fn test_london_winter_solstice() {
    let (rise, set) = rise_set(date(2025, 12, 21), 51.5, -0.127, 0.0);
    assert_eq!(rise, at(8, 4));
    assert_eq!(set, at(15, 54));
}

#[test]
fn test_tokyo_autumn_equinox() {
    let (rise, set) = rise_set(date(2025, 9, 23), 35.68, 139.69, 9.0);
    assert_eq!(rise, at(5, 29));
    assert_eq!(set, at(17, 37));
}

// ── Polar sentinels ──

#[test]
fn test_north_pole_summer_always_light() {
    let (rise, set) = rise_set(date(2025, 6, 21), 89.9, 0.0, 0.0);
    assert_eq!(rise, SolarEvent::AlwaysLight);
    assert_eq!(set, SolarEvent::AlwaysLight);
}

#[test]
fn test_north_pole_winter_always_dark() {
    let (rise, set) = rise_set(date(2025, 12, 21), 89.9, 0.0, 0.0);
    assert_eq!(rise, SolarEvent::AlwaysDark);
    assert_eq!(set, SolarEvent::AlwaysDark);
}

#[test]
fn test_south_pole_june_always_dark() {
    let (rise, _) = rise_set(date(2025, 6, 21), -89.9, 0.0, 0.0);
    assert_eq!(rise.kind(), SolarEventKind::AlwaysDark);
}

#[test]
fn test_sentinels_carry_no_time() {
    assert_eq!(SolarEvent::AlwaysDark.hour_minute(), None);
    assert_eq!(SolarEvent::AlwaysLight.seconds_since_midnight(), None);
    assert_eq!(at(5, 40).seconds_since_midnight(), Some(20_400.0));
}

// ── Accuracy band near the polar circle ──

#[test]
fn test_sunset_flips_to_always_light_within_narrow_band() {
    let d = date(2022, 4, 22);
    // with a daylight-saving offset the last sunset lands after midnight
    let (rise, set) = rise_set(d, 76.70, -117.1, -7.0);
    assert_eq!(rise, at(1, 33));
    assert_eq!(set, at(0, 39));

    let (rise, set) = rise_set(d, 76.71, -117.1, -7.0);
    assert_eq!(rise, at(1, 32));
    assert_eq!(set, SolarEvent::AlwaysLight);
}

#[test]
fn test_sunset_flips_to_always_dark_near_75_8() {
    let d = date(2022, 11, 2);
    let (rise, set) = rise_set(d, 75.8, -117.1, -7.0);
    assert_eq!(rise, at(11, 46));
    assert_eq!(set, at(12, 50));

    let (rise, set) = rise_set(d, 75.9, -117.1, -7.0);
    assert_eq!(rise, at(11, 55));
    assert_eq!(set, SolarEvent::AlwaysDark);
}

#[test]
fn test_sunrise_flips_further_north() {
    let d = date(2022, 4, 22);
    let (rise, _) = rise_set(d, 76.95, -117.1, -7.0);
    assert!(rise.is_normal());
    let (rise, set) = rise_set(d, 76.97, -117.1, -7.0);
    assert_eq!(rise, SolarEvent::AlwaysLight);
    assert_eq!(set, SolarEvent::AlwaysLight);
}

// ── Properties ──

#[test]
fn test_results_are_clock_times_or_sentinels() {
    let dates = [date(2025, 1, 5), date(2025, 3, 20), date(2025, 6, 21), date(2025, 9, 30)];
    for d in dates {
        for lat in (-85..=85).step_by(5) {
            for lon in [-179.0, -117.1, -45.0, 0.0, 60.0, 144.96, 179.0] {
                for offset in [-12.0, -7.0, 0.0, 5.5, 10.0, 13.0] {
                    for want_sunrise in [true, false] {
                        let event = solar_event_on(want_sunrise, d, lat as f64, lon, offset, false);
                        if let Some((hour, minute)) = event.hour_minute() {
                            assert!((0..=23).contains(&hour), "{:?} {} {} {}", d, lat, lon, hour);
                            assert!((0..=59).contains(&minute), "{:?} {} {} {}", d, lat, lon, minute);
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn test_equator_never_polar() {
    let mut d = date(2025, 1, 1);
    while d <= date(2025, 12, 31) {
        for lon in [-170.0, -60.0, 0.0, 60.0, 170.0] {
            let (rise, set) = rise_set(d, 0.0, lon, 0.0);
            assert!(rise.is_normal(), "{} {}", d, lon);
            assert!(set.is_normal(), "{} {}", d, lon);
        }
        d = d.succ_opt().unwrap();
    }
}

#[test]
fn test_daylight_saving_flag_adds_an_hour() {
    let d = date(2025, 6, 1);
    assert_eq!(solar_event_on(true, d, 33.1, -117.1, -8.0, true), at(5, 40));
    assert_eq!(solar_event_on(false, d, 33.1, -117.1, -8.0, true), at(19, 52));
}

#[test]
fn test_longitude_sign_matters() {
    let d = date(2025, 6, 1);
    let west = solar_event_on(true, d, 33.1, -117.1, -7.0, false);
    let east = solar_event_on(true, d, 33.1, 117.1, -7.0, false);
    assert_ne!(west, east);
}

// ── Day offsets ──

#[test]
fn test_day_offset_matches_explicit_date() {
    let inputs = ClockInputs::new(33.1, -117.1, -7.0).unwrap();
    let today = date(2025, 5, 31);
    assert_eq!(calc_solar_event(true, 1, today, &inputs), at(5, 40));
    assert_eq!(calc_solar_event(false, 1, today, &inputs), at(19, 52));
    assert_eq!(
        calc_solar_event(false, -1, date(2025, 6, 2), &inputs),
        calc_solar_event(false, 0, date(2025, 6, 1), &inputs)
    );
}

#[test]
fn test_shift_date_crosses_year() {
    assert_eq!(shift_date(date(2025, 1, 1), -1), date(2024, 12, 31));
    assert_eq!(shift_date(date(2024, 12, 31), 1), date(2025, 1, 1));
    assert_eq!(shift_date(date(2024, 2, 28), 1), date(2024, 2, 29));
}

#[test]
fn test_sun_times_and_timeline() {
    let inputs = ClockInputs::new(33.1, -117.1, -7.0).unwrap();
    let today = date(2025, 6, 2);
    let times = sun_times(&inputs, today);
    assert_eq!(times.sunrise, at(5, 40));
    assert_eq!(times.sunset, at(19, 53));

    let timeline = day_timeline(&inputs, today);
    assert_eq!(timeline.today, times);
    assert_eq!(timeline.yesterday_sunset, at(19, 52));
    assert_eq!(timeline.tomorrow_sunrise, at(5, 40));
}
