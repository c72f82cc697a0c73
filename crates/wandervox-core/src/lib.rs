//! Core types and math for the Wandervox viewer.
//!
//! This crate provides the foundational pieces shared by the world store,
//! the locomotion controller, and the loader:
//! - Chunk coordinates and voxel-grid splitting
//! - Frame-rate independent damping

pub mod coords;
pub mod math;

pub use coords::ChunkPos;
pub use math::damp;

/// Shared constants
pub mod constants {
    /// Default chunk edge length in voxels when no world has been imported
    pub const DEFAULT_CHUNK_SIZE: u32 = 32;
    /// Channels stored per voxel (density + RGB)
    pub const VOXEL_CHANNELS: usize = 4;
    /// Density at or above which a voxel counts as solid
    pub const SOLID_DENSITY: u8 = 0x80;
}
