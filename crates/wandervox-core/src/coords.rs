//! Coordinate systems for the streamed voxel world.

use bytemuck::{Pod, Zeroable};
use glam::IVec3;
use serde::{Deserialize, Serialize};

/// Chunk position in chunk coordinates.
///
/// Used as the key into the sparse chunk store. The world's voxel grid is
/// carved into cubes of `chunk_size` voxels per axis; a voxel coordinate maps
/// to its owning chunk by floored division.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize,
)]
#[repr(C)]
pub struct ChunkPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub _pad: i32,
}

impl ChunkPos {
    /// Create a new chunk position
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z, _pad: 0 }
    }

    /// Split a voxel-grid coordinate into its owning chunk and the offset
    /// within that chunk.
    ///
    /// Floored division keeps negative coordinates in the correct chunk
    /// (voxel -1 belongs to chunk -1, offset `chunk_size - 1`).
    #[inline]
    pub fn split_voxel(voxel: IVec3, chunk_size: u32) -> (Self, IVec3) {
        let size = IVec3::splat(chunk_size as i32);
        let chunk = voxel.div_euclid(size);
        let local = voxel.rem_euclid(size);
        (Self::new(chunk.x, chunk.y, chunk.z), local)
    }

    /// Chebyshev distance to another chunk position
    #[inline]
    pub const fn chebyshev(self, other: Self) -> i32 {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        let dz = (self.z - other.z).abs();
        let mut max = dx;
        if dy > max {
            max = dy;
        }
        if dz > max {
            max = dz;
        }
        max
    }

    /// Convert to glam `IVec3`
    #[inline]
    pub const fn to_ivec3(self) -> IVec3 {
        IVec3::new(self.x, self.y, self.z)
    }
}

impl From<IVec3> for ChunkPos {
    fn from(v: IVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_voxel_positive() {
        let (chunk, local) = ChunkPos::split_voxel(IVec3::new(33, 0, 31), 32);
        assert_eq!(chunk, ChunkPos::new(1, 0, 0));
        assert_eq!(local, IVec3::new(1, 0, 31));
    }

    #[test]
    fn split_voxel_negative() {
        let (chunk, local) = ChunkPos::split_voxel(IVec3::new(-1, -32, -33), 32);
        assert_eq!(chunk, ChunkPos::new(-1, -1, -2));
        assert_eq!(local, IVec3::new(31, 0, 31));
    }

    #[test]
    fn split_voxel_reassembles() {
        let size = 16;
        for voxel in [
            IVec3::new(0, 0, 0),
            IVec3::new(100, -50, 200),
            IVec3::new(-1, -1, -1),
        ] {
            let (chunk, local) = ChunkPos::split_voxel(voxel, size);
            assert_eq!(chunk.to_ivec3() * size as i32 + local, voxel);
        }
    }

    #[test]
    fn chebyshev_distance() {
        let a = ChunkPos::new(0, 0, 0);
        let b = ChunkPos::new(3, -1, 2);
        assert_eq!(a.chebyshev(b), 3);
        assert_eq!(b.chebyshev(a), 3);
        assert_eq!(a.chebyshev(a), 0);
    }
}
