//! Scene composition for the Wandervox viewer.
//!
//! [`Scene`] wires the chunk store, the player, the locomotion controller,
//! and the world loader into the per-frame contract a host drives:
//! `on_animation_tick` every frame, `load` whenever a new world is wanted,
//! and the VR session lifecycle hooks.

pub mod scene;

pub use scene::{Scene, SceneConfig};
