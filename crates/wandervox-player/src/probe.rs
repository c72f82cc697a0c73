//! Ground probing against the sparse chunk store.

use glam::{IVec3, Vec3};
use wandervox_core::constants::SOLID_DENSITY;
use wandervox_core::ChunkPos;
use wandervox_world::VoxelWorld;

/// Answers "what is the floor height under this point?".
///
/// Read-only over the world; the locomotion controller creates one per query
/// site. `None` means no resolvable floor with the currently streamed chunks:
/// the point is embedded in solid matter, the downward scan ran out of world,
/// or the data simply has not arrived. Callers treat it as a sentinel, never
/// an error.
pub struct GroundProbe<'a> {
    world: &'a VoxelWorld,
}

impl<'a> GroundProbe<'a> {
    #[must_use]
    pub const fn new(world: &'a VoxelWorld) -> Self {
        Self { world }
    }

    /// Floor height below a world-space point, or `None`.
    ///
    /// The point is floored into the voxel grid; if that voxel is solid the
    /// probe gives up. Otherwise it scans straight down and reports the top
    /// surface of the first solid voxel it meets, back in world space.
    #[must_use]
    pub fn height(&self, position: Vec3) -> Option<f32> {
        let grid = self.world.world_to_local(position).floor().as_ivec3();
        if self.is_solid(grid) {
            return None;
        }
        let mut voxel = grid;
        voxel.y -= 1;
        while voxel.y >= 0 {
            if self.is_solid(voxel) {
                voxel.y += 1;
                return Some(self.world.local_to_world(voxel.as_vec3()).y);
            }
            voxel.y -= 1;
        }
        None
    }

    /// Solidity of the 2x2x2 voxel neighborhood anchored at `anchor`.
    ///
    /// Sampling all eight corners absorbs floor/rounding mismatches at chunk
    /// and voxel seams, so the player does not catch on grid boundaries. A
    /// corner whose chunk has not streamed in counts as open air.
    #[must_use]
    pub fn is_solid(&self, anchor: IVec3) -> bool {
        let chunk_size = self.world.chunk_size();
        for i in 0..2 {
            for j in 0..2 {
                for k in 0..2 {
                    let corner = anchor + IVec3::new(i, j, k);
                    let (chunk, local) = ChunkPos::split_voxel(corner, chunk_size);
                    let Some(data) = self.world.chunk(chunk) else {
                        continue;
                    };
                    if data.density(local) >= SOLID_DENSITY {
                        return true;
                    }
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use wandervox_world::ChunkData;

    const SIZE: u32 = 8;

    /// Chunk filled solid for local `y < top`, air above.
    fn slab_chunk(top: i32) -> ChunkData {
        let mut chunk = ChunkData::new(SIZE);
        for z in 0..SIZE as i32 {
            for y in 0..top {
                for x in 0..SIZE as i32 {
                    chunk.set_density(IVec3::new(x, y, z), 0xff);
                }
            }
        }
        chunk
    }

    fn slab_world(top: i32) -> VoxelWorld {
        let mut world = VoxelWorld::new(4);
        world.insert_chunk(ChunkPos::new(0, 0, 0), slab_chunk(top));
        world
    }

    #[test]
    fn solidity_threshold_is_128() {
        let mut world = VoxelWorld::new(4);
        let mut chunk = ChunkData::new(SIZE);
        chunk.set_density(IVec3::new(2, 2, 2), 0x7f);
        world.insert_chunk(ChunkPos::new(0, 0, 0), chunk);
        assert!(!GroundProbe::new(&world).is_solid(IVec3::new(2, 2, 2)));

        let mut world = VoxelWorld::new(4);
        let mut chunk = ChunkData::new(SIZE);
        chunk.set_density(IVec3::new(2, 2, 2), 0x80);
        world.insert_chunk(ChunkPos::new(0, 0, 0), chunk);
        assert!(GroundProbe::new(&world).is_solid(IVec3::new(2, 2, 2)));
    }

    #[test]
    fn neighborhood_catches_adjacent_corners() {
        // Solid voxel at (3,3,3); anchors offset by -1 on any axis still see
        // it through the 2x2x2 corner sweep.
        let mut world = VoxelWorld::new(4);
        let mut chunk = ChunkData::new(SIZE);
        chunk.set_density(IVec3::new(3, 3, 3), 0xff);
        world.insert_chunk(ChunkPos::new(0, 0, 0), chunk);
        let probe = GroundProbe::new(&world);
        assert!(probe.is_solid(IVec3::new(2, 2, 2)));
        assert!(probe.is_solid(IVec3::new(3, 2, 3)));
        assert!(!probe.is_solid(IVec3::new(1, 1, 1)));
    }

    #[test]
    fn height_reports_top_surface() {
        // Solid up to voxel y=3: the walkable surface is at height 4.
        let world = slab_world(4);
        let height = GroundProbe::new(&world).height(Vec3::new(3.5, 6.5, 3.5));
        assert_relative_eq!(height.unwrap(), 4.0);
    }

    #[test]
    fn embedded_point_is_unknown() {
        let world = slab_world(4);
        assert_eq!(
            GroundProbe::new(&world).height(Vec3::new(3.5, 2.0, 3.5)),
            None
        );
    }

    #[test]
    fn empty_column_is_unknown() {
        let world = VoxelWorld::new(4);
        assert_eq!(GroundProbe::new(&world).height(Vec3::new(0.5, 5.0, 0.5)), None);
    }

    #[test]
    fn probe_falls_through_unstreamed_chunk() {
        // The chunk that would hold terrain between y=8 and y=15 has not
        // streamed in; its absence reads as open air, so the scan falls
        // through to the lower chunk's floor. Current behavior, kept on
        // purpose: streaming gaps can report ground far below the player.
        let world = slab_world(4);
        let height = GroundProbe::new(&world).height(Vec3::new(3.5, 14.0, 3.5));
        assert_relative_eq!(height.unwrap(), 4.0);
    }

    #[test]
    fn height_honors_world_transform() {
        let mut world = VoxelWorld::new(4).with_transform(Vec3::new(0.0, 10.0, 0.0), 1.0);
        world.insert_chunk(ChunkPos::new(0, 0, 0), slab_chunk(4));
        let height = GroundProbe::new(&world).height(Vec3::new(3.5, 16.0, 3.5));
        assert_relative_eq!(height.unwrap(), 14.0);
    }

    #[test]
    fn scan_spans_chunk_boundaries_downward() {
        // Floor lives in the chunk below the query point's chunk.
        let mut world = VoxelWorld::new(4);
        world.insert_chunk(ChunkPos::new(0, 0, 0), slab_chunk(2));
        world.insert_chunk(ChunkPos::new(0, 1, 0), ChunkData::new(SIZE));
        let height = GroundProbe::new(&world).height(Vec3::new(3.5, 12.0, 3.5));
        assert_relative_eq!(height.unwrap(), 2.0);
    }
}
