//! Pure easing curves.
//!
//! Tweens sample these on a normalized `t` in \[0, 1\]. Only the
//! exponential-out curve is used today; the alias keeps the tween generic
//! over the curve without pulling in an animation library.

/// An easing curve mapping normalized progress to eased progress.
pub type Easing = fn(f64) -> f64;

/// Exponential-out: steepest at the start, flattening toward the target.
///
/// `1 - 2^(-10 t)`, clamped so `t >= 1` lands exactly on 1.
#[inline]
pub fn expo_out(t: f64) -> f64 {
    if t <= 0.0 {
        0.0
    } else if t >= 1.0 {
        1.0
    } else {
        1.0 - 2f64.powf(-10.0 * t)
    }
}

/// Identity curve, useful in tests where eased and linear progress coincide.
#[inline]
pub fn linear(t: f64) -> f64 {
    t.clamp(0.0, 1.0)
}
