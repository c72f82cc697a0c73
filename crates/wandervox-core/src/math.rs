//! Math helpers shared across the viewer.

/// Frame-rate independent exponential damping toward a target.
///
/// Returns a value strictly between `current` and `target` for any positive
/// `delta`, converging at `rate` per second:
/// `current + (target - current) * (1 - e^(-rate * delta))`.
///
/// Unlike a plain lerp with a fixed factor, the result is independent of the
/// tick rate: damping twice with `delta / 2` lands on the same value as
/// damping once with `delta`.
#[inline]
#[must_use]
pub fn damp(current: f32, target: f32, rate: f32, delta: f32) -> f32 {
    current + (target - current) * (1.0 - (-rate * delta).exp())
}
