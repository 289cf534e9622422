//! Usage: clock_frame [preset] [log level]

use chrono::Local;
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use day_spiral::{
    find_preset, format_12h, format_solar_event, format_utc_offset, generate_week_table,
    local_utc_offset_hours, DaySpiralClock, SpiralConfig, FALLBACK,
};

fn main() {
    let level = std::env::args()
        .nth(2)
        .and_then(|arg| arg.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .unwrap_or_else(|e| eprintln!("Unable to initiate logger: {}", e));

    let name = std::env::args().nth(1).unwrap_or_else(|| "San Diego".to_string());
    let preset = find_preset(&name).copied().unwrap_or(FALLBACK);
    let now = Local::now().naive_local();

    let mut clock = match DaySpiralClock::new(local_utc_offset_hours()) {
        Ok(clock) => clock,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };
    let inputs = match preset.inputs(now) {
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };
    clock.set_inputs(inputs);

    let Some(frame) = clock.frame(now) else {
        println!("Location pending");
        return;
    };

    println!("=== Day Spiral Clock ===");
    println!(
        "Location: {} ({:.3}, {:.3}), GMT offset {}",
        preset.name,
        inputs.latitude(),
        inputs.longitude(),
        format_utc_offset(inputs.utc_offset_hours)
    );
    let wc = frame.wall_clock;
    println!(
        "Current time: {} {:?} {}",
        format_12h(wc.hour as i32, wc.minute as i32),
        wc.weekday,
        wc.date
    );
    println!("Sunrise: {}", format_solar_event(&frame.timeline.today.sunrise));
    println!("Sunset: {}", format_solar_event(&frame.timeline.today.sunset));
    println!("Day state: {:?}", frame.segments.state);
    if let Some(bounds) = frame.segments.bounds {
        println!(
            "Previous event {:.0}s (within 12h: {}), next event {:.0}s (within 12h: {})",
            bounds.previous_seconds,
            bounds.previous_within_12h,
            bounds.next_seconds,
            bounds.next_within_12h
        );
    }
    println!("Hour hand: {:.3} rad", frame.hour_hand_radians);
    println!();

    println!("--- Next 7 days ---");
    let table = generate_week_table(&inputs, wc.date);
    for day in &table.days {
        println!(
            "{}  {:>11}  {:>11}",
            day.date,
            format_solar_event(&day.sun_times.sunrise),
            format_solar_event(&day.sun_times.sunset)
        );
    }
    println!();

    match clock.spiral(SpiralConfig::default(), 900.0, 900.0) {
        Ok(spiral) => {
            println!("--- Spiral band ({} points) ---", spiral.len());
            for run in spiral.shade_runs(&frame.timeline) {
                println!(
                    "{:>4}..={:<4} {}",
                    run.start,
                    run.end,
                    if run.lit { "light" } else { "dark" }
                );
            }
        }
        Err(e) => eprintln!("{}", e),
    }
}
