//! Per-frame integration of scrub inputs into a wrapping playback position.

use crate::constants::MS_PER_SEC;

/// Free-running position accumulator, in media seconds.
///
/// The accumulator itself is unbounded; it is reduced into `[0, duration)`
/// only when producing a value to apply. While the duration is unknown the
/// accumulator keeps advancing and nothing is applied.
#[derive(Clone, Copy, Debug, Default)]
pub struct Timeline {
    position: f64,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw accumulator value, not reduced into the media's range.
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Integrate one frame and produce the position to apply, if any.
    ///
    /// `dt_ms` is the frame-clock delta in milliseconds; `duration` is the
    /// externally-reported media duration, `None` while unknown. The wrap
    /// from below adds at most one duration, so a backward overshoot past a
    /// full duration in a single frame wraps incorrectly; at realistic frame
    /// rates that would take an extreme scroll velocity.
    pub fn advance(
        &mut self,
        dt_ms: f64,
        direction_sign: f64,
        speed: f64,
        scroll_magnitude: f64,
        duration: Option<f64>,
    ) -> Option<f64> {
        let time_input = (dt_ms / MS_PER_SEC) * direction_sign * speed;
        let scroll_input = scroll_magnitude / MS_PER_SEC;
        self.position += time_input + scroll_input;

        let duration = duration.filter(|d| d.is_finite() && *d > 0.0)?;
        if self.position < 0.0 {
            self.position += duration;
        }
        Some(self.position % duration)
    }
}
