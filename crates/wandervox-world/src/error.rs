//! Error types for the world store.

use thiserror::Error;

/// Failures raised by the world-file codec and chunk import.
#[derive(Error, Debug)]
pub enum WorldError {
    /// World file carries a format version this build does not understand
    #[error("unsupported world format version {0}")]
    UnsupportedVersion(u32),

    /// Payload could not be decoded at all
    #[error("malformed world payload: {0}")]
    Malformed(String),

    /// Chunk size outside the supported range
    #[error("invalid chunk size {0}")]
    InvalidChunkSize(u32),

    /// Imported file disagrees with chunks already in the store
    #[error("world chunk size {incoming} does not match loaded world ({current})")]
    ChunkSizeMismatch { current: u32, incoming: u32 },

    /// A chunk record's voxel buffer has the wrong length
    #[error("chunk at {pos:?} carries {got} bytes, expected {expected}")]
    ChunkLength {
        pos: [i32; 3],
        got: usize,
        expected: usize,
    },
}
