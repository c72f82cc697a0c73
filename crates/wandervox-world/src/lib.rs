//! Sparse voxel world store for the Wandervox viewer.
//!
//! Worlds are sparse mappings from integer chunk coordinates to dense
//! per-voxel buffers. Chunks arrive through the binary world-file codec;
//! a coordinate missing from the mapping means "not yet streamed", never
//! "empty".

pub mod chunk;
pub mod codec;
pub mod error;
pub mod store;

pub use chunk::ChunkData;
pub use codec::{ChunkRecord, WorldFile, WorldMetadata, WORLD_FORMAT_VERSION};
pub use error::WorldError;
pub use store::VoxelWorld;
