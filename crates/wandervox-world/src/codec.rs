//! Binary world-file codec.
//!
//! A world file is a bincode-encoded [`WorldFile`]: format version, chunk
//! size, spawn point, optional name/author strings, and a list of chunk
//! records. On the wire the file travels DEFLATE-compressed; compression is
//! the loader's concern, this codec only sees the inflated bytes.

use serde::{Deserialize, Serialize};

use crate::error::WorldError;

/// Current world file format version.
pub const WORLD_FORMAT_VERSION: u32 = 1;

/// One chunk's worth of voxel data at an integer chunk coordinate.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChunkRecord {
    pub pos: [i32; 3],
    pub voxels: Vec<u8>,
}

/// Decoded world file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorldFile {
    pub version: u32,
    pub chunk_size: u32,
    pub spawn: [f32; 3],
    pub name: Option<String>,
    pub author: Option<String>,
    pub chunks: Vec<ChunkRecord>,
}

impl WorldFile {
    /// Decode a world file from inflated payload bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, WorldError> {
        bincode::deserialize(bytes).map_err(|err| WorldError::Malformed(err.to_string()))
    }

    /// Encode this world file to payload bytes (not yet compressed).
    pub fn to_bytes(&self) -> Result<Vec<u8>, WorldError> {
        bincode::serialize(self).map_err(|err| WorldError::Malformed(err.to_string()))
    }
}

/// Metadata handed back to the caller after a successful import.
#[derive(Clone, Debug, PartialEq)]
pub struct WorldMetadata {
    pub spawn: [f32; 3],
    pub name: Option<String>,
    pub author: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_roundtrip() {
        let file = WorldFile {
            version: WORLD_FORMAT_VERSION,
            chunk_size: 16,
            spawn: [0.0, 5.0, 0.0],
            name: Some("Museum".into()),
            author: None,
            chunks: vec![ChunkRecord {
                pos: [0, 0, 0],
                voxels: vec![1, 2, 3, 4],
            }],
        };
        let bytes = file.to_bytes().unwrap();
        let decoded = WorldFile::from_bytes(&bytes).unwrap();
        assert_eq!(decoded.chunk_size, 16);
        assert_eq!(decoded.spawn, [0.0, 5.0, 0.0]);
        assert_eq!(decoded.name.as_deref(), Some("Museum"));
        assert_eq!(decoded.chunks.len(), 1);
        assert_eq!(decoded.chunks[0].voxels, vec![1, 2, 3, 4]);
    }

    #[test]
    fn truncated_payload_is_malformed() {
        let file = WorldFile {
            version: WORLD_FORMAT_VERSION,
            chunk_size: 16,
            spawn: [0.0; 3],
            name: None,
            author: None,
            chunks: Vec::new(),
        };
        let mut bytes = file.to_bytes().unwrap();
        bytes.truncate(bytes.len() / 2);
        assert!(matches!(
            WorldFile::from_bytes(&bytes),
            Err(WorldError::Malformed(_))
        ));
    }

    #[test]
    fn garbage_is_malformed() {
        assert!(matches!(
            WorldFile::from_bytes(&[0xde, 0xad, 0xbe, 0xef]),
            Err(WorldError::Malformed(_))
        ));
    }
}
