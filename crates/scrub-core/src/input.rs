//! Conditioning of raw input into smoothed per-frame state.
//!
//! Wheel deltas become a sticky direction sign plus a decaying magnitude;
//! the press toggle becomes a speed multiplier ramping between the base
//! scrub rate and a stop. Both sides hand their live values to the timeline
//! integrator every frame.

use crate::ease;
use crate::tween::SmoothedScalar;

/// Scrub direction latched from the most recent wheel event.
///
/// Sticky: persists between events and never decays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }

    #[inline]
    pub fn from_delta(delta: f64) -> Self {
        if delta < 0.0 {
            Direction::Backward
        } else {
            Direction::Forward
        }
    }
}

/// Turns raw wheel deltas into a direction sign and a decaying magnitude.
pub struct ScrollConditioner {
    direction: Direction,
    magnitude: SmoothedScalar,
    dead_zone: f64,
    settle_secs: f64,
}

impl ScrollConditioner {
    pub fn new(dead_zone: f64, settle_secs: f64) -> Self {
        Self {
            direction: Direction::default(),
            magnitude: SmoothedScalar::new(0.0),
            dead_zone,
            settle_secs,
        }
    }

    /// Handle one raw wheel event carrying a signed vertical delta.
    ///
    /// The direction latches from the delta's sign. Deltas at or below the
    /// dead zone retarget the magnitude to zero instead of `-delta`.
    pub fn on_scroll(&mut self, delta: f64) {
        self.direction = Direction::from_delta(delta);
        let target = if delta.abs() > self.dead_zone {
            -delta
        } else {
            0.0
        };
        self.magnitude
            .animate(target, self.settle_secs, ease::expo_out);
    }

    /// Advance the magnitude tween by `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.magnitude.advance(dt);
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Live smoothed magnitude, in raw wheel units.
    pub fn magnitude(&self) -> f64 {
        self.magnitude.current()
    }

    pub fn magnitude_target(&self) -> f64 {
        self.magnitude.target()
    }
}

/// Ramps the scrub speed multiplier between the base rate and a stop.
pub struct PressDamper {
    pressed: bool,
    speed: SmoothedScalar,
    base_factor: f64,
    ramp_secs: f64,
}

impl PressDamper {
    /// The multiplier starts at 1.0 and eases up to `base_factor`, so
    /// playback ramps in at mount rather than starting at full scrub speed.
    pub fn new(base_factor: f64, ramp_secs: f64) -> Self {
        let mut speed = SmoothedScalar::new(1.0);
        speed.animate(base_factor, ramp_secs, ease::expo_out);
        Self {
            pressed: false,
            speed,
            base_factor,
            ramp_secs,
        }
    }

    /// Retarget the multiplier on a press-state edge: toward zero while
    /// pressed, back to the base factor on release. Setting the same state
    /// twice does not restart the ramp.
    pub fn set_pressed(&mut self, pressed: bool) {
        if pressed == self.pressed {
            return;
        }
        self.pressed = pressed;
        let target = if pressed { 0.0 } else { self.base_factor };
        self.speed.animate(target, self.ramp_secs, ease::expo_out);
    }

    pub fn toggle(&mut self) {
        self.set_pressed(!self.pressed);
    }

    /// Advance the speed tween by `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.speed.advance(dt);
    }

    pub fn pressed(&self) -> bool {
        self.pressed
    }

    /// Live speed multiplier.
    pub fn speed(&self) -> f64 {
        self.speed.current()
    }
}
