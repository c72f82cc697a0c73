//! Input handling for the Wandervox viewer.
//!
//! Raw devices are translated into one normalized [`InputSnapshot`] per tick:
//! a planar movement vector (magnitude ≤ 1), look deltas, edge/level button
//! flags, and the base speed scalar. The locomotion controller consumes
//! snapshots without caring which device produced them.
//!
//! Immersive sessions additionally provide an [`XrFrame`] with the tracked
//! head pose and per-hand controllers.

pub mod button;
pub mod desktop;
pub mod snapshot;
pub mod xr;

pub use button::ButtonState;
pub use desktop::DesktopInput;
pub use snapshot::InputSnapshot;
pub use xr::{Handedness, XrButtons, XrController, XrFrame, XrPose};
