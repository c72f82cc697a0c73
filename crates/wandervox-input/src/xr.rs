//! Immersive-session input model.
//!
//! The host's XR binding fills one [`XrFrame`] per tick with the tracked
//! head pose and whatever controllers are currently connected. Poses are
//! local to the player's reference frame; the locomotion controller composes
//! them with the player transform to get world-space camera and hand poses.

use glam::{Quat, Vec2, Vec3};

/// Which hand a tracked controller belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handedness {
    Left,
    Right,
}

/// A tracked pose local to the player frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XrPose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for XrPose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

/// Button flags reported by one controller for the current tick.
///
/// `*_down` flags are edges (true only on the tick the press happened);
/// `tertiary` is a level flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct XrButtons {
    pub primary_down: bool,
    pub secondary_down: bool,
    pub tertiary: bool,
    pub leftwards_down: bool,
    pub rightwards_down: bool,
}

/// One hand-tracked controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XrController {
    /// `None` until the runtime has resolved which hand holds it.
    pub handedness: Option<Handedness>,
    pub joystick: Vec2,
    pub buttons: XrButtons,
}

impl XrController {
    /// A connected but idle controller for the given hand.
    #[must_use]
    pub const fn idle(handedness: Handedness) -> Self {
        Self {
            handedness: Some(handedness),
            joystick: Vec2::ZERO,
            buttons: XrButtons {
                primary_down: false,
                secondary_down: false,
                tertiary: false,
                leftwards_down: false,
                rightwards_down: false,
            },
        }
    }
}

/// Everything the immersive regime needs for one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct XrFrame {
    /// Tracked head pose, local to the player frame.
    pub head: XrPose,
    pub controllers: Vec<XrController>,
}

impl XrFrame {
    /// A frame with the head at the given local position and no controllers.
    #[must_use]
    pub fn with_head(position: Vec3, rotation: Quat) -> Self {
        Self {
            head: XrPose { position, rotation },
            controllers: Vec::new(),
        }
    }

    /// Iterate over controllers whose hand is known.
    pub fn hands(&self) -> impl Iterator<Item = (Handedness, &XrController)> {
        self.controllers
            .iter()
            .filter_map(|controller| controller.handedness.map(|hand| (hand, controller)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hands_skips_unresolved_controllers() {
        let mut frame = XrFrame::with_head(Vec3::new(0.0, 1.6, 0.0), Quat::IDENTITY);
        frame.controllers.push(XrController {
            handedness: None,
            joystick: Vec2::ONE,
            buttons: XrButtons::default(),
        });
        frame.controllers.push(XrController::idle(Handedness::Left));
        let hands: Vec<_> = frame.hands().collect();
        assert_eq!(hands.len(), 1);
        assert_eq!(hands[0].0, Handedness::Left);
    }
}
