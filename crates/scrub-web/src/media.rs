//! Media sink: applies computed positions to the video's playback cursor.

use web_sys as web;

/// The media duration, if the element currently reports a usable one.
///
/// Before metadata loads `duration` is NaN; streams can report infinity.
/// Both count as unknown, as does a zero-length file.
#[inline]
pub fn known_duration(video: &web::HtmlVideoElement) -> Option<f64> {
    let d = video.duration();
    (d.is_finite() && d > 0.0).then_some(d)
}

/// Set the playback cursor, skipping the frame while duration is unknown.
pub fn apply_position(video: &web::HtmlVideoElement, position: f64) {
    if known_duration(video).is_some() {
        video.set_current_time(position);
    }
}
