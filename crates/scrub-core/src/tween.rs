//! A scalar that glides toward its target instead of snapping.

use crate::ease::Easing;

/// Numeric value approaching a target over time via eased interpolation.
///
/// Holds at most one tween. Retargeting mid-flight replaces the tween and
/// restarts interpolation from the live `current` value, so the value stays
/// continuous through a re-aim. Consumers always read `current`; there is no
/// completion signal.
#[derive(Clone, Copy, Debug)]
pub struct SmoothedScalar {
    current: f64,
    target: f64,
    tween: Option<Tween>,
}

#[derive(Clone, Copy, Debug)]
struct Tween {
    from: f64,
    elapsed: f64,
    duration: f64,
    easing: Easing,
}

impl SmoothedScalar {
    pub fn new(value: f64) -> Self {
        Self {
            current: value,
            target: value,
            tween: None,
        }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Start interpolating from the live `current` value toward `target`
    /// over `duration` seconds. Overwrites any in-flight tween.
    ///
    /// A non-positive duration snaps straight to the target.
    pub fn animate(&mut self, target: f64, duration: f64, easing: Easing) {
        self.target = target;
        if duration <= 0.0 {
            self.current = target;
            self.tween = None;
            return;
        }
        self.tween = Some(Tween {
            from: self.current,
            elapsed: 0.0,
            duration,
            easing,
        });
    }

    /// Advance the active tween by `dt` seconds. No-op once settled.
    pub fn advance(&mut self, dt: f64) {
        let Some(tw) = self.tween.as_mut() else {
            return;
        };
        tw.elapsed += dt;
        let t = tw.elapsed / tw.duration;
        if t >= 1.0 {
            self.current = self.target;
            self.tween = None;
        } else {
            self.current = tw.from + (self.target - tw.from) * (tw.easing)(t);
        }
    }

    pub fn is_settled(&self) -> bool {
        self.tween.is_none()
    }
}
