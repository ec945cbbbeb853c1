//! Lantern light simulation: a dual-radius approach-to-threshold state machine.
//!
//! The lantern drives a point light with two linked radii (outer = 4x inner).
//! Each tick:
//! 1. Oil drains into a pool proportionally to the current inner radius;
//!    every time the pool fills, one unit of oil is consumed.
//! 2. The radii step toward the player-set thresholds (or the dim "off"
//!    radii when the lantern is off), clamping on overshoot.
//! 3. Once both radii sit exactly on their thresholds, the light enters a
//!    flicker sub-state: intensity sweeps between two bounds on a sawtooth
//!    timer, swapping the bounds at the end of each sweep.
//!
//! Everything here is plain data; the ECS runtime owns the light component,
//! the inventory and the audio layer.

use serde::{Deserialize, Serialize};

use crate::config::LanternTuning;
use crate::math::lerp;

/// The point-light values the lantern animates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightRadii {
    pub inner: f32,
    pub outer: f32,
    pub intensity: f32,
}

impl LightRadii {
    pub fn new(inner: f32, outer: f32, intensity: f32) -> Self {
        Self {
            inner,
            outer,
            intensity,
        }
    }

    /// A light resting at the dim "off" radii.
    pub fn off(tuning: &LanternTuning) -> Self {
        Self {
            inner: tuning.inner_radius_off,
            outer: tuning.outer_radius_off(),
            intensity: tuning.min_intensity,
        }
    }

    /// Both radii sit exactly on the given targets.
    pub fn is_at(&self, inner: f32, outer: f32) -> bool {
        self.inner == inner && self.outer == outer
    }
}

/// Sawtooth flicker timer and its two (swapping) bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Flicker {
    /// Progress through the current sweep, 0..=1
    pub factor: f32,
    /// Bound the current sweep ends on
    pub high: f32,
    /// Bound the current sweep starts from
    pub low: f32,
}

impl Flicker {
    pub fn new(tuning: &LanternTuning) -> Self {
        Self {
            factor: 0.0,
            high: tuning.max_intensity,
            low: tuning.min_intensity,
        }
    }

    /// Intensity for the current point of the sweep.
    pub fn intensity(&self) -> f32 {
        lerp(self.low, self.high, self.factor)
    }

    /// Advance the sweep; returns true when the bounds swapped.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.factor += dt;
        if self.factor > 1.0 {
            std::mem::swap(&mut self.high, &mut self.low);
            self.factor = 0.0;
            return true;
        }
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LanternToggle {
    Lit,
    Extinguished,
}

/// What the fuel dial shows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DialReading {
    Off,
    /// Threshold position as a fraction of the adjustable range
    At(f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrainOutcome {
    /// No oil left; the lantern was forced off
    OutOfOil,
    /// Pool accumulated but has not filled yet
    Accumulated,
    /// Pool filled; one unit of oil must be removed from the inventory
    ConsumeUnit,
}

/// Which branch of the state machine a tick took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanternPhase {
    /// On, radii moving toward the thresholds
    Approaching,
    /// On, radii at the thresholds
    Flickering,
    /// Off, radii shrinking toward the off radii
    Dimming,
    /// Off, radii at the off radii
    Resting,
}

/// Player-controlled lantern state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LanternState {
    pub is_on: bool,
    pub adjustment_mode: bool,
    pub inner_threshold: f32,
    pub outer_threshold: f32,
    pub drain_pool: f32,
    pub flicker: Flicker,
}

impl LanternState {
    pub fn new(tuning: &LanternTuning) -> Self {
        Self {
            is_on: false,
            adjustment_mode: false,
            inner_threshold: tuning.default_inner_radius,
            outer_threshold: tuning.default_outer_radius(),
            drain_pool: 0.0,
            flicker: Flicker::new(tuning),
        }
    }

    /// Off, thresholds at their defaults, flicker restarted from the low bound.
    ///
    /// Adjustment mode and the drain pool are left alone.
    pub fn reset_to_default(&mut self, tuning: &LanternTuning) {
        self.is_on = false;
        self.inner_threshold = tuning.default_inner_radius;
        self.outer_threshold = tuning.default_outer_radius();
        self.flicker = Flicker::new(tuning);
    }

    pub fn toggle(&mut self) -> LanternToggle {
        self.is_on = !self.is_on;
        if self.is_on {
            LanternToggle::Lit
        } else {
            LanternToggle::Extinguished
        }
    }

    /// Flip adjustment mode and return the new value.
    pub fn toggle_adjustment_mode(&mut self) -> bool {
        self.adjustment_mode = !self.adjustment_mode;
        self.adjustment_mode
    }

    /// Move both thresholds one step per scroll direction.
    ///
    /// Only applies while the lantern is on and in adjustment mode. Returns
    /// true when the scroll was applied (the dial needs refreshing), even if
    /// the thresholds were already pinned at a limit.
    pub fn adjust_threshold(&mut self, scroll_y: f32, tuning: &LanternTuning) -> bool {
        if !self.is_on || !self.adjustment_mode || scroll_y == 0.0 {
            return false;
        }

        let inner_step = tuning.threshold_step;
        let outer_step = tuning.outer_threshold_step();

        if scroll_y > 0.0 {
            self.inner_threshold = (self.inner_threshold + inner_step).min(tuning.max_inner_radius);
            self.outer_threshold = (self.outer_threshold + outer_step).min(tuning.max_outer_radius());
        } else {
            self.inner_threshold = (self.inner_threshold - inner_step).max(tuning.min_inner_radius);
            self.outer_threshold = (self.outer_threshold - outer_step).max(tuning.min_outer_radius());
        }
        true
    }

    pub fn threshold_percentage(&self, tuning: &LanternTuning) -> f32 {
        (self.inner_threshold - tuning.min_inner_radius)
            / (tuning.max_inner_radius - tuning.min_inner_radius)
    }

    pub fn dial_reading(&self, tuning: &LanternTuning) -> DialReading {
        if self.is_on {
            DialReading::At(self.threshold_percentage(tuning))
        } else {
            DialReading::Off
        }
    }

    /// Accumulate this tick's oil consumption.
    ///
    /// With no oil left the lantern is forced off. Otherwise the pool grows
    /// by [`drain_rate`]; when it reaches capacity it empties (any excess is
    /// discarded) and the caller must remove one unit of oil.
    pub fn drain(&mut self, light: &LightRadii, oil_quantity: u32, tuning: &LanternTuning) -> DrainOutcome {
        if oil_quantity == 0 {
            self.is_on = false;
            return DrainOutcome::OutOfOil;
        }

        self.drain_pool += drain_rate(light, tuning);
        if self.drain_pool < tuning.drain_pool_capacity {
            return DrainOutcome::Accumulated;
        }

        self.drain_pool = 0.0;
        DrainOutcome::ConsumeUnit
    }

    /// Charge extra consumption against the oil supply.
    ///
    /// Only positive, finite amounts are charged; the pool never goes negative.
    pub fn charge_drain_pool(&mut self, amount: f32) {
        if amount.is_finite() && amount > 0.0 {
            self.drain_pool += amount;
        }
    }

    /// Advance the radii (or the flicker) by `dt` seconds.
    pub fn step(&mut self, light: &mut LightRadii, dt: f32, tuning: &LanternTuning) -> LanternPhase {
        let outer_step = dt * tuning.outer_approach_speed;
        let inner_step = dt * tuning.inner_approach_speed();

        if self.is_on {
            if light.is_at(self.inner_threshold, self.outer_threshold) {
                self.flicker(light, dt);
                return LanternPhase::Flickering;
            }

            light.inner = approach(light.inner, self.inner_threshold, inner_step);
            light.outer = approach(light.outer, self.outer_threshold, outer_step);
            LanternPhase::Approaching
        } else {
            let inner_off = tuning.inner_radius_off;
            let outer_off = tuning.outer_radius_off();

            if light.is_at(inner_off, outer_off) {
                self.reset_flicker(light, tuning);
                return LanternPhase::Resting;
            }

            // Off only ever shrinks the light; a light already dimmer stays put.
            if light.inner > inner_off {
                light.inner = approach(light.inner, inner_off, inner_step);
            }
            if light.outer > outer_off {
                light.outer = approach(light.outer, outer_off, outer_step);
            }
            LanternPhase::Dimming
        }
    }

    fn flicker(&mut self, light: &mut LightRadii, dt: f32) {
        if !self.is_on {
            return;
        }
        light.intensity = self.flicker.intensity();
        self.flicker.advance(dt);
    }

    fn reset_flicker(&mut self, light: &mut LightRadii, tuning: &LanternTuning) {
        light.intensity = tuning.min_intensity;
        self.flicker = Flicker::new(tuning);
    }
}

/// Oil drained per tick at the light's current inner radius.
pub fn drain_rate(light: &LightRadii, tuning: &LanternTuning) -> f32 {
    if light.inner <= tuning.inner_radius_off {
        return 0.0;
    }
    tuning.max_drain_rate * (light.inner / tuning.max_inner_radius)
}

/// Step `current` toward `target`, landing exactly on it instead of overshooting.
pub fn approach(current: f32, target: f32, step: f32) -> f32 {
    if current < target {
        (current + step).min(target)
    } else if current > target {
        (current - step).max(target)
    } else {
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuning() -> LanternTuning {
        LanternTuning::default()
    }

    fn lit(t: &LanternTuning) -> LanternState {
        let mut state = LanternState::new(t);
        state.toggle();
        state
    }

    #[test]
    fn test_approach_clamps_on_overshoot() {
        assert_eq!(approach(1.0, 1.5, 0.25), 1.25);
        assert_eq!(approach(1.4, 1.5, 0.25), 1.5);
        assert_eq!(approach(2.0, 1.5, 0.25), 1.75);
        assert_eq!(approach(1.6, 1.5, 0.25), 1.5);
        assert_eq!(approach(1.5, 1.5, 0.25), 1.5);
    }

    #[test]
    fn test_toggle_reports_edge() {
        let t = tuning();
        let mut state = LanternState::new(&t);
        assert_eq!(state.toggle(), LanternToggle::Lit);
        assert!(state.is_on);
        assert_eq!(state.toggle(), LanternToggle::Extinguished);
        assert!(!state.is_on);
    }

    #[test]
    fn test_adjust_requires_on_and_adjustment_mode() {
        let t = tuning();
        let mut state = LanternState::new(&t);
        state.adjustment_mode = true;
        assert!(!state.adjust_threshold(1.0, &t));
        assert_eq!(state.inner_threshold, 1.5);

        let mut state = lit(&t);
        assert!(!state.adjust_threshold(1.0, &t));
        state.toggle_adjustment_mode();
        assert!(!state.adjust_threshold(0.0, &t));
        assert!(state.adjust_threshold(1.0, &t));
        assert_eq!(state.inner_threshold, 1.75);
        assert_eq!(state.outer_threshold, 7.0);
    }

    #[test]
    fn test_adjust_clamps_to_limits() {
        let t = tuning();
        let mut state = lit(&t);
        state.toggle_adjustment_mode();

        for _ in 0..10 {
            state.adjust_threshold(3.0, &t);
        }
        assert_eq!(state.inner_threshold, 2.0);
        assert_eq!(state.outer_threshold, 8.0);
        assert_eq!(state.threshold_percentage(&t), 1.0);

        for _ in 0..10 {
            state.adjust_threshold(-1.0, &t);
        }
        assert_eq!(state.inner_threshold, 0.5);
        assert_eq!(state.outer_threshold, 2.0);
        assert_eq!(state.threshold_percentage(&t), 0.0);
        assert_eq!(state.outer_threshold, state.inner_threshold * 4.0);
    }

    #[test]
    fn test_dial_reading() {
        let t = tuning();
        let mut state = LanternState::new(&t);
        assert_eq!(state.dial_reading(&t), DialReading::Off);
        state.toggle();
        match state.dial_reading(&t) {
            DialReading::At(pct) => assert!((pct - 2.0 / 3.0).abs() < 1e-6),
            other => panic!("unexpected reading {:?}", other),
        }
    }

    #[test]
    fn test_drain_rate_scales_with_inner_radius() {
        let t = tuning();
        assert_eq!(drain_rate(&LightRadii::off(&t), &t), 0.0);
        assert_eq!(drain_rate(&LightRadii::new(2.0, 8.0, 0.65), &t), 0.1);
        assert!((drain_rate(&LightRadii::new(1.0, 4.0, 0.65), &t) - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_drain_consumes_one_unit_per_full_pool() {
        let t = tuning();
        let mut state = lit(&t);
        let light = LightRadii::new(2.0, 8.0, 0.65);

        let mut consumed = 0;
        for _ in 0..2500 {
            if state.drain(&light, 5, &t) == DrainOutcome::ConsumeUnit {
                consumed += 1;
            }
        }
        // 0.1 per tick fills the pool roughly every 1000 ticks
        assert_eq!(consumed, 2);
        assert!(state.drain_pool < t.drain_pool_capacity);
    }

    #[test]
    fn test_drain_without_oil_forces_off() {
        let t = tuning();
        let mut state = lit(&t);
        let light = LightRadii::new(2.0, 8.0, 0.65);
        assert_eq!(state.drain(&light, 0, &t), DrainOutcome::OutOfOil);
        assert!(!state.is_on);
        assert_eq!(state.drain_pool, 0.0);
    }

    #[test]
    fn test_charge_drain_pool_triggers_next_consumption() {
        let t = tuning();
        let mut state = LanternState::new(&t);
        state.charge_drain_pool(150.0);
        assert_eq!(state.drain(&LightRadii::off(&t), 1, &t), DrainOutcome::ConsumeUnit);
        assert_eq!(state.drain_pool, 0.0);
    }

    #[test]
    fn test_step_approaches_threshold_then_flickers() {
        let t = tuning();
        let mut state = lit(&t);
        let mut light = LightRadii::off(&t);

        // outer moves 1.0 and inner 0.25 per 0.1s tick
        assert_eq!(state.step(&mut light, 0.1, &t), LanternPhase::Approaching);
        assert!((light.inner - 0.55).abs() < 1e-6);
        assert!((light.outer - 2.2).abs() < 1e-6);

        let mut ticks = 1;
        while state.step(&mut light, 0.1, &t) == LanternPhase::Approaching {
            ticks += 1;
            assert!(light.inner <= state.inner_threshold);
            assert!(light.outer <= state.outer_threshold);
            assert!(ticks < 100, "never reached threshold");
        }
        assert_eq!(light.inner, 1.5);
        assert_eq!(light.outer, 6.0);
        assert_eq!(light.intensity, t.min_intensity);
    }

    #[test]
    fn test_lowering_threshold_shrinks_radii() {
        let t = tuning();
        let mut state = lit(&t);
        let mut light = LightRadii::new(2.0, 8.0, 0.7);

        assert_eq!(state.step(&mut light, 0.1, &t), LanternPhase::Approaching);
        assert!((light.inner - 1.75).abs() < 1e-6);
        assert!((light.outer - 7.0).abs() < 1e-6);

        state.step(&mut light, 1.0, &t);
        assert_eq!(light.inner, 1.5);
        assert_eq!(light.outer, 6.0);
        assert_eq!(state.step(&mut light, 0.1, &t), LanternPhase::Flickering);
    }

    #[test]
    fn test_flicker_is_sawtooth_with_swapping_bounds() {
        let t = tuning();
        let mut state = lit(&t);
        let mut light = LightRadii::new(1.5, 6.0, 0.0);

        state.step(&mut light, 0.5, &t);
        assert_eq!(light.intensity, 0.65);
        state.step(&mut light, 0.5, &t);
        assert!((light.intensity - 0.75).abs() < 1e-6);
        state.step(&mut light, 0.5, &t);
        assert!((light.intensity - 0.85).abs() < 1e-6);
        // factor passed 1.0: bounds swapped, sweep restarts from the old high
        assert_eq!(state.flicker.factor, 0.0);
        assert_eq!(state.flicker.low, 0.85);
        assert_eq!(state.flicker.high, 0.65);

        state.step(&mut light, 0.5, &t);
        assert_eq!(light.intensity, 0.85);
        state.step(&mut light, 0.5, &t);
        assert!((light.intensity - 0.75).abs() < 1e-6);

        for _ in 0..50 {
            state.step(&mut light, 0.37, &t);
            assert!(light.intensity >= t.min_intensity - 1e-6);
            assert!(light.intensity <= t.max_intensity + 1e-6);
        }
    }

    #[test]
    fn test_off_dims_then_resets_flicker() {
        let t = tuning();
        let mut state = LanternState::new(&t);
        state.flicker.factor = 0.4;
        std::mem::swap(&mut state.flicker.high, &mut state.flicker.low);
        let mut light = LightRadii::new(1.5, 6.0, 0.8);

        assert_eq!(state.step(&mut light, 0.1, &t), LanternPhase::Dimming);
        assert!((light.inner - 1.25).abs() < 1e-6);
        assert!((light.outer - 5.0).abs() < 1e-6);
        // intensity is untouched while dimming
        assert_eq!(light.intensity, 0.8);

        state.step(&mut light, 10.0, &t);
        assert!(light.is_at(t.inner_radius_off, t.outer_radius_off()));

        assert_eq!(state.step(&mut light, 0.1, &t), LanternPhase::Resting);
        assert_eq!(light.intensity, t.min_intensity);
        assert_eq!(state.flicker, Flicker::new(&t));
    }

    #[test]
    fn test_off_never_grows_a_dimmer_light() {
        let t = tuning();
        let mut state = LanternState::new(&t);
        let mut light = LightRadii::new(0.1, 0.4, 0.65);
        assert_eq!(state.step(&mut light, 1.0, &t), LanternPhase::Dimming);
        assert_eq!(light.inner, 0.1);
        assert_eq!(light.outer, 0.4);
    }

    #[test]
    fn test_reset_to_default_keeps_pool() {
        let t = tuning();
        let mut state = lit(&t);
        state.toggle_adjustment_mode();
        state.adjust_threshold(1.0, &t);
        state.charge_drain_pool(42.0);

        state.reset_to_default(&t);
        assert!(!state.is_on);
        assert_eq!(state.inner_threshold, t.default_inner_radius);
        assert_eq!(state.outer_threshold, t.default_outer_radius());
        assert_eq!(state.drain_pool, 42.0);
    }

    #[test]
    fn test_reset_to_default_restarts_flicker_sweep() {
        let t = tuning();
        let mut state = lit(&t);
        let mut light = LightRadii::new(t.default_inner_radius, t.default_outer_radius(), t.min_intensity);

        assert_eq!(state.step(&mut light, 0.4, &t), LanternPhase::Flickering);
        assert!((state.flicker.factor - 0.4).abs() < 1e-6);

        state.reset_to_default(&t);
        assert_eq!(state.flicker, Flicker::new(&t));
        assert_eq!(state.flicker.factor, 0.0);
    }

    #[test]
    fn test_charge_drain_pool_ignores_non_positive_amounts() {
        let t = tuning();
        let mut state = LanternState::new(&t);
        state.charge_drain_pool(-50.0);
        assert_eq!(state.drain_pool, 0.0);
        state.charge_drain_pool(f32::NAN);
        assert_eq!(state.drain_pool, 0.0);
        state.charge_drain_pool(0.0);
        assert_eq!(state.drain_pool, 0.0);

        state.charge_drain_pool(10.0);
        assert_eq!(state.drain_pool, 10.0);
        state.charge_drain_pool(-5.0);
        assert_eq!(state.drain_pool, 10.0);
    }
}
