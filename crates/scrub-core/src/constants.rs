// Scrub feel tuning shared by the web frontend and tests.

// Playback rate
pub const BASE_TIME_FACTOR: f64 = 1.5; // idle scrub rate, media-seconds per wall-second

// Wheel input
pub const SCROLL_DEAD_ZONE: f64 = 6.0; // deltas at or below this magnitude are trackpad jitter
pub const SCROLL_SETTLE_SECS: f64 = 2.0; // how long a wheel impulse takes to visually settle

// Press damping
pub const PRESS_RAMP_SECS: f64 = 1.0; // ramp between full speed and a stop

// Unit conversion
pub const MS_PER_SEC: f64 = 1000.0; // frame deltas and wheel units both divide by this
