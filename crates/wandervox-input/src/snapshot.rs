//! The normalized per-tick input snapshot.

use glam::Vec2;

/// Device-agnostic input for one animation tick.
///
/// Whatever the source (keyboard/mouse, gamepad, or an immersive session's
/// controllers overriding it), the locomotion controller sees exactly this.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputSnapshot {
    /// Planar movement intent: `x` strafes, `y` moves along the view
    /// direction. Magnitude never exceeds 1.
    pub movement: Vec2,
    /// Look deltas for this tick: `x` adds yaw, `y` adds pitch.
    pub look: Vec2,
    /// Level flag: double movement speed while held.
    pub run: bool,
    /// Edge flag: toggle between walking and flying this tick.
    pub interact_down: bool,
    /// Base movement speed in world units per second.
    pub speed: f32,
}

impl InputSnapshot {
    /// A snapshot with no input and the given base speed.
    #[must_use]
    pub const fn idle(speed: f32) -> Self {
        Self {
            movement: Vec2::ZERO,
            look: Vec2::ZERO,
            run: false,
            interact_down: false,
            speed,
        }
    }
}
