//! Dense per-chunk voxel storage.

use glam::IVec3;
use wandervox_core::constants::VOXEL_CHANNELS;

use crate::error::WorldError;

/// A fully populated cube of voxel samples.
///
/// Stores `size³` voxels of [`VOXEL_CHANNELS`] bytes each, laid out as
/// `(z * size² + y * size + x) * VOXEL_CHANNELS`. Channel 0 is density
/// (0-255); channels 1-3 carry color and are unused by the locomotion core.
pub struct ChunkData {
    size: u32,
    data: Box<[u8]>,
}

impl ChunkData {
    /// Create an all-air chunk of the given edge length.
    #[must_use]
    pub fn new(size: u32) -> Self {
        let len = (size as usize).pow(3) * VOXEL_CHANNELS;
        Self {
            size,
            data: vec![0; len].into_boxed_slice(),
        }
    }

    /// Wrap an existing voxel buffer, validating its length.
    pub fn from_bytes(pos: [i32; 3], size: u32, bytes: Vec<u8>) -> Result<Self, WorldError> {
        let expected = (size as usize).pow(3) * VOXEL_CHANNELS;
        if bytes.len() != expected {
            return Err(WorldError::ChunkLength {
                pos,
                got: bytes.len(),
                expected,
            });
        }
        Ok(Self {
            size,
            data: bytes.into_boxed_slice(),
        })
    }

    /// Edge length in voxels.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Raw channel buffer.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Density (channel 0) of the voxel at a local offset.
    ///
    /// Offsets must lie in `0..size` per axis.
    #[must_use]
    pub fn density(&self, local: IVec3) -> u8 {
        self.data[self.index(local)]
    }

    /// Write density (channel 0) of the voxel at a local offset.
    pub fn set_density(&mut self, local: IVec3, density: u8) {
        let index = self.index(local);
        self.data[index] = density;
    }

    /// Write the color channels of the voxel at a local offset.
    pub fn set_color(&mut self, local: IVec3, color: [u8; 3]) {
        let index = self.index(local);
        self.data[index + 1..index + 4].copy_from_slice(&color);
    }

    fn index(&self, local: IVec3) -> usize {
        debug_assert!(
            local.cmpge(IVec3::ZERO).all() && local.cmplt(IVec3::splat(self.size as i32)).all()
        );
        let size = self.size as usize;
        ((local.z as usize * size + local.y as usize) * size + local.x as usize) * VOXEL_CHANNELS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_chunk_is_air() {
        let chunk = ChunkData::new(8);
        assert_eq!(chunk.density(IVec3::new(0, 0, 0)), 0);
        assert_eq!(chunk.density(IVec3::new(7, 7, 7)), 0);
        assert_eq!(chunk.bytes().len(), 8 * 8 * 8 * VOXEL_CHANNELS);
    }

    #[test]
    fn density_roundtrip() {
        let mut chunk = ChunkData::new(4);
        chunk.set_density(IVec3::new(1, 2, 3), 0xff);
        assert_eq!(chunk.density(IVec3::new(1, 2, 3)), 0xff);
        assert_eq!(chunk.density(IVec3::new(3, 2, 1)), 0);
    }

    #[test]
    fn color_does_not_clobber_density() {
        let mut chunk = ChunkData::new(4);
        chunk.set_density(IVec3::ONE, 0x90);
        chunk.set_color(IVec3::ONE, [1, 2, 3]);
        assert_eq!(chunk.density(IVec3::ONE), 0x90);
    }

    #[test]
    fn from_bytes_rejects_wrong_length() {
        let err = ChunkData::from_bytes([0, 0, 0], 4, vec![0; 7]);
        assert!(matches!(err, Err(WorldError::ChunkLength { got: 7, .. })));
    }
}
