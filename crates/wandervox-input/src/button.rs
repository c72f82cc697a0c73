//! Edge-tracking state for keys and buttons.

/// State of a single button across tick boundaries.
///
/// Distinguishes the tick a press or release happened on from the steady
/// held/idle states, so edge-triggered actions (like the walk/fly toggle)
/// fire exactly once per press:
///
/// ```text
/// Released ─press()─> JustPressed ─end_frame()─> Pressed
///     ^                                             │
///     │                                          release()
///     │                                             v
///     └────────────end_frame()───────────── JustReleased
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    /// Pressed this tick.
    JustPressed,
    /// Held down.
    Pressed,
    /// Released this tick.
    JustReleased,
    /// Not pressed.
    #[default]
    Released,
}

impl ButtonState {
    /// Returns `true` while the button is down.
    #[inline]
    #[must_use]
    pub const fn is_pressed(self) -> bool {
        matches!(self, Self::JustPressed | Self::Pressed)
    }

    /// Returns `true` only on the tick the press happened.
    #[inline]
    #[must_use]
    pub const fn is_just_pressed(self) -> bool {
        matches!(self, Self::JustPressed)
    }

    /// Record a press. Held buttons stay held.
    #[inline]
    pub fn press(&mut self) {
        if !self.is_pressed() {
            *self = Self::JustPressed;
        }
    }

    /// Record a release.
    #[inline]
    pub fn release(&mut self) {
        if self.is_pressed() {
            *self = Self::JustReleased;
        }
    }

    /// Advance past the edge states at the end of a tick.
    #[inline]
    pub fn end_frame(&mut self) {
        match *self {
            Self::JustPressed => *self = Self::Pressed,
            Self::JustReleased => *self = Self::Released,
            _ => {}
        }
    }
}
