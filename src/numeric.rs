//! Numeric conversion helpers for frame timing.
//!
//! Clocks report seconds as `f64` while the simulation runs in `f32`. These
//! helpers keep the narrowing casts in one place and guard them with debug
//! assertions.

use std::time::Duration;

/// Convert a finite `f64` into `f32`, asserting that it fits the target type.
#[expect(
    clippy::cast_possible_truncation,
    reason = "Callers assert that the value fits within f32 bounds."
)]
#[must_use]
pub fn expect_f32(value: f64) -> f32 {
    debug_assert!(value.is_finite(), "expected finite f64 for f32 conversion");
    debug_assert!(
        value <= f64::from(f32::MAX),
        "f64 value {value} exceeds f32::MAX"
    );
    debug_assert!(
        value >= f64::from(f32::MIN),
        "f64 value {value} is below f32::MIN"
    );
    value as f32
}

/// Seconds elapsed between two clock readings.
///
/// A clock that steps backwards, or a non-finite reading, yields zero
/// rather than a negative or NaN delta.
///
/// # Examples
/// ```
/// use exit_strategy::numeric::frame_delta;
/// assert!((frame_delta(1.0, 1.25) - 0.25).abs() < 1e-6);
/// assert_eq!(frame_delta(2.0, 1.0), 0.0);
/// ```
#[must_use]
pub fn frame_delta(last: f64, now: f64) -> f32 {
    let delta = now - last;
    if !delta.is_finite() || delta <= 0.0 {
        return 0.0;
    }
    expect_f32(delta.min(f64::from(f32::MAX)))
}

/// Truncate a non-negative rate to a whole number for display.
///
/// Negative and non-finite values map to zero; values beyond `u32::MAX`
/// saturate.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "The value is validated against the u32 domain before casting."
)]
#[must_use]
pub fn truncate_to_u32(value: f32) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    let whole = f64::from(value).trunc().min(f64::from(u32::MAX));
    whole as u32
}

/// Wall-clock pause for a frame of `seconds`.
///
/// Returns `None` for zero, negative, non-finite or out-of-range lengths.
///
/// # Examples
/// ```
/// use exit_strategy::numeric::frame_pause;
/// assert!(frame_pause(1.0 / 60.0).is_some());
/// assert!(frame_pause(1e20).is_none());
/// ```
#[must_use]
pub fn frame_pause(seconds: f32) -> Option<Duration> {
    if seconds <= 0.0 {
        return None;
    }
    Duration::try_from_secs_f32(seconds).ok()
}
