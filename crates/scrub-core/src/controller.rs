//! The frame-driven scrub controller.

use crate::constants::{
    BASE_TIME_FACTOR, MS_PER_SEC, PRESS_RAMP_SECS, SCROLL_DEAD_ZONE, SCROLL_SETTLE_SECS,
};
use crate::input::{Direction, PressDamper, ScrollConditioner};
use crate::timeline::Timeline;

/// Runtime scrub tuning. Defaults mirror `constants`.
#[derive(Clone, Copy, Debug)]
pub struct ScrubParams {
    pub base_time_factor: f64,
    pub scroll_dead_zone: f64,
    pub scroll_settle_secs: f64,
    pub press_ramp_secs: f64,
}

impl Default for ScrubParams {
    fn default() -> Self {
        Self {
            base_time_factor: BASE_TIME_FACTOR,
            scroll_dead_zone: SCROLL_DEAD_ZONE,
            scroll_settle_secs: SCROLL_SETTLE_SECS,
            press_ramp_secs: PRESS_RAMP_SECS,
        }
    }
}

/// Fuses scroll and press input into one playback position per frame.
///
/// Input events retarget the smoothed state between ticks; `tick` advances
/// that state and integrates it into the timeline. All state lives as plain
/// mutable fields here for the controller's whole lifetime.
pub struct ScrubController {
    scroll: ScrollConditioner,
    damper: PressDamper,
    timeline: Timeline,
}

impl ScrubController {
    pub fn new(params: ScrubParams) -> Self {
        Self {
            scroll: ScrollConditioner::new(params.scroll_dead_zone, params.scroll_settle_secs),
            damper: PressDamper::new(params.base_time_factor, params.press_ramp_secs),
            timeline: Timeline::new(),
        }
    }

    /// Raw wheel event carrying a signed vertical delta.
    pub fn on_scroll(&mut self, delta: f64) {
        self.scroll.on_scroll(delta);
    }

    pub fn set_pressed(&mut self, pressed: bool) {
        self.damper.set_pressed(pressed);
    }

    pub fn toggle_pressed(&mut self) {
        self.damper.toggle();
    }

    /// One frame-clock tick.
    ///
    /// `dt_ms` is the elapsed time since the previous tick in milliseconds;
    /// the frame clock must not call this for its very first frame. Returns
    /// the position to apply to the media element, or `None` while its
    /// duration is unknown.
    pub fn tick(&mut self, dt_ms: f64, duration: Option<f64>) -> Option<f64> {
        let dt = dt_ms / MS_PER_SEC;
        self.scroll.advance(dt);
        self.damper.advance(dt);
        self.timeline.advance(
            dt_ms,
            self.scroll.direction().sign(),
            self.damper.speed(),
            self.scroll.magnitude(),
            duration,
        )
    }

    pub fn direction(&self) -> Direction {
        self.scroll.direction()
    }

    pub fn speed(&self) -> f64 {
        self.damper.speed()
    }

    pub fn scroll_magnitude(&self) -> f64 {
        self.scroll.magnitude()
    }

    pub fn pressed(&self) -> bool {
        self.damper.pressed()
    }

    /// Raw timeline accumulator, mainly for tests and diagnostics.
    pub fn position(&self) -> f64 {
        self.timeline.position()
    }
}
