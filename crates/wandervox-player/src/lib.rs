//! Player locomotion and ground collision.
//!
//! Three pieces compose here:
//! - [`Player`] holds the damped position/orientation state and its targets.
//! - [`GroundProbe`] answers "what is the floor height under this point?"
//!   against the sparse chunk store.
//! - [`LocomotionController`] integrates one tick of normalized input into
//!   the player, constraining walking by the probe.

pub mod locomotion;
pub mod player;
pub mod probe;

pub use locomotion::{LocomotionConfig, LocomotionController, ViewInput};
pub use player::{Camera, Player, EYE_HEIGHT};
pub use probe::GroundProbe;
