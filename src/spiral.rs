//! Spiral lookup table for the day/night band.
//!
//! Step `i` sits at face angle `2π·i/points_per_turn − π/2` (12 o'clock
//! first, clockwise) with a radius that falls linearly from the outer to
//! the inner radius over all turns. Index 0 is the outermost point and
//! stands for local midnight, the earliest time on the table, not the
//! latest. One turn spans twelve hours, so the table and the hour hand
//! share angles.

use std::f64::consts::{FRAC_PI_2, PI};

use log::debug;

use crate::angles::SECONDS_PER_HALF_DAY;
use crate::error::{Error, Result};
use crate::types::{ArcRun, DayTimeline, SpiralConfig, SpiralPoint, SpiralTable};

pub const SECONDS_PER_TURN: f64 = SECONDS_PER_HALF_DAY;

pub fn generate_spiral(
    turns: u32,
    points_per_turn: u32,
    inner_radius: f64,
    outer_radius: f64,
) -> Result<Vec<SpiralPoint>> {
    if turns == 0 {
        return Err(Error::InvalidSpiral("at least one turn is required"));
    }
    if points_per_turn == 0 {
        return Err(Error::InvalidSpiral("at least one point per turn is required"));
    }
    if !inner_radius.is_finite() || !outer_radius.is_finite() {
        return Err(Error::InvalidSpiral("radii must be finite"));
    }
    if inner_radius > outer_radius {
        return Err(Error::InvalidSpiral("inner radius exceeds outer radius"));
    }

    let steps = turns as usize * points_per_turn as usize;
    let per_turn = f64::from(points_per_turn);
    let decay_per_turn = (outer_radius - inner_radius) / f64::from(turns);

    Ok((0..=steps)
        .map(|i| {
            let turn = i as f64 / per_turn;
            let theta = 2.0 * PI * turn - FRAC_PI_2;
            let radius = outer_radius - decay_per_turn * turn;
            SpiralPoint {
                radius,
                x: radius * theta.cos(),
                y: radius * theta.sin(),
            }
        })
        .collect())
}

impl SpiralTable {
    pub fn new(config: SpiralConfig, width: f64, height: f64) -> Result<Self> {
        if !(width > 0.0 && height > 0.0) {
            return Err(Error::InvalidSpiral("window dimensions must be positive"));
        }
        let half = width.min(height) / 2.0;
        let inner_radius = half * config.inner_radius_frac;
        let outer_radius = half * config.outer_radius_frac;
        let points = generate_spiral(
            config.turns,
            config.points_per_turn,
            inner_radius,
            outer_radius,
        )?;
        debug!(
            "spiral: {} points over {} turns for {width}x{height}",
            points.len(),
            config.turns
        );
        Ok(Self {
            config,
            width,
            height,
            inner_radius,
            outer_radius,
            points,
        })
    }

    pub fn is_stale(&self, config: &SpiralConfig, width: f64, height: f64) -> bool {
        self.config != *config || self.width != width || self.height != height
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn span_seconds(&self) -> f64 {
        f64::from(self.config.turns) * SECONDS_PER_TURN
    }

    pub fn seconds_per_step(&self) -> f64 {
        SECONDS_PER_TURN / f64::from(self.config.points_per_turn)
    }

    pub fn seconds_at_index(&self, index: usize) -> f64 {
        index as f64 * self.seconds_per_step()
    }

    /// Nearest step for a time of day, wrapping over the table span.
    pub fn index_for_seconds(&self, seconds: f64) -> usize {
        let wrapped = seconds.rem_euclid(self.span_seconds());
        let index = (wrapped / self.seconds_per_step()).round() as usize;
        index.min(self.points.len().saturating_sub(1))
    }

    pub fn point_at_seconds(&self, seconds: f64) -> Option<SpiralPoint> {
        self.points.get(self.index_for_seconds(seconds)).copied()
    }

    pub fn shade_runs(&self, timeline: &DayTimeline) -> Vec<ArcRun> {
        let mut runs: Vec<ArcRun> = Vec::new();
        for index in 0..self.points.len() {
            let lit = timeline.is_lit_at(self.seconds_at_index(index));
            match runs.last_mut() {
                Some(run) if run.lit == lit => run.end = index,
                _ => runs.push(ArcRun {
                    start: index,
                    end: index,
                    lit,
                }),
            }
        }
        runs
    }
}
