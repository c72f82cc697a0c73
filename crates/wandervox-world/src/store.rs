//! The sparse chunk store and its streaming bookkeeping.

use glam::Vec3;
use hashbrown::{HashMap, HashSet};
use tracing::{debug, info};
use wandervox_core::constants::DEFAULT_CHUNK_SIZE;
use wandervox_core::ChunkPos;

use crate::chunk::ChunkData;
use crate::codec::{WorldFile, WorldMetadata, WORLD_FORMAT_VERSION};
use crate::error::WorldError;

/// Largest chunk edge length a world file may declare.
const MAX_CHUNK_SIZE: u32 = 128;

/// Sparse voxel world.
///
/// Maps integer chunk coordinates to fully populated voxel buffers. A present
/// chunk is always complete; an absent chunk has not been streamed in. Reads
/// come from the ground probe and locomotion every tick; mutation happens
/// only through [`VoxelWorld::import_chunks`] and [`VoxelWorld::reset`].
pub struct VoxelWorld {
    chunk_size: u32,
    render_radius: i32,
    origin: Vec3,
    scale: f32,
    chunks: HashMap<ChunkPos, ChunkData>,
    /// Streaming anchor from the most recent [`VoxelWorld::update_chunks`].
    anchor: Option<ChunkPos>,
    /// Chunks within `render_radius` of the anchor, for the renderer's use.
    resident: HashSet<ChunkPos>,
}

impl VoxelWorld {
    /// Create an empty world with the given render radius.
    #[must_use]
    pub fn new(render_radius: i32) -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            render_radius,
            origin: Vec3::ZERO,
            scale: 1.0,
            chunks: HashMap::new(),
            anchor: None,
            resident: HashSet::new(),
        }
    }

    /// Place the world at an origin with a uniform scale.
    #[must_use]
    pub fn with_transform(mut self, origin: Vec3, scale: f32) -> Self {
        self.origin = origin;
        self.scale = scale;
        self
    }

    /// Chunk edge length in voxels.
    #[must_use]
    pub const fn chunk_size(&self) -> u32 {
        self.chunk_size
    }

    /// Streaming radius in chunks.
    #[must_use]
    pub const fn render_radius(&self) -> i32 {
        self.render_radius
    }

    /// Number of chunks in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Whether the store holds no chunks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Look up a chunk's voxel buffer.
    #[must_use]
    pub fn chunk(&self, pos: ChunkPos) -> Option<&ChunkData> {
        self.chunks.get(&pos)
    }

    /// Insert or replace a chunk.
    pub fn insert_chunk(&mut self, pos: ChunkPos, chunk: ChunkData) {
        self.chunks.insert(pos, chunk);
    }

    /// Transform a world-space point into the voxel grid.
    #[must_use]
    pub fn world_to_local(&self, point: Vec3) -> Vec3 {
        (point - self.origin) / self.scale
    }

    /// Transform a voxel-grid point back into world space.
    #[must_use]
    pub fn local_to_world(&self, point: Vec3) -> Vec3 {
        point * self.scale + self.origin
    }

    /// Decode an inflated world payload and merge its chunks into the store.
    ///
    /// Returns the file's spawn point and name/author metadata. Every record
    /// is validated before anything is inserted, so a failed import leaves
    /// the store untouched.
    pub fn import_chunks(&mut self, payload: &[u8]) -> Result<WorldMetadata, WorldError> {
        let file = WorldFile::from_bytes(payload)?;
        if file.version != WORLD_FORMAT_VERSION {
            return Err(WorldError::UnsupportedVersion(file.version));
        }
        if file.chunk_size == 0 || file.chunk_size > MAX_CHUNK_SIZE {
            return Err(WorldError::InvalidChunkSize(file.chunk_size));
        }
        if !self.chunks.is_empty() && file.chunk_size != self.chunk_size {
            return Err(WorldError::ChunkSizeMismatch {
                current: self.chunk_size,
                incoming: file.chunk_size,
            });
        }

        let mut incoming = Vec::with_capacity(file.chunks.len());
        for record in file.chunks {
            let pos = ChunkPos::new(record.pos[0], record.pos[1], record.pos[2]);
            incoming.push((pos, ChunkData::from_bytes(record.pos, file.chunk_size, record.voxels)?));
        }

        self.chunk_size = file.chunk_size;
        let count = incoming.len();
        for (pos, chunk) in incoming {
            self.chunks.insert(pos, chunk);
        }
        info!(chunks = count, chunk_size = self.chunk_size, "imported world payload");

        Ok(WorldMetadata {
            spawn: file.spawn,
            name: file.name,
            author: file.author,
        })
    }

    /// Re-anchor streaming around a world-space point.
    ///
    /// Recomputes the set of chunks within `render_radius` of the anchor
    /// chunk. The renderer collaborator consumes that set; the probe always
    /// reads the full store.
    pub fn update_chunks(&mut self, center: Vec3) {
        let local = self.world_to_local(center) / self.chunk_size as f32;
        let anchor = ChunkPos::new(
            local.x.floor() as i32,
            local.y.floor() as i32,
            local.z.floor() as i32,
        );
        if self.anchor == Some(anchor) {
            return;
        }
        self.anchor = Some(anchor);
        self.resident = self
            .chunks
            .keys()
            .filter(|pos| pos.chebyshev(anchor) <= self.render_radius)
            .copied()
            .collect();
        debug!(
            anchor = ?(anchor.x, anchor.y, anchor.z),
            resident = self.resident.len(),
            "re-anchored chunk streaming"
        );
    }

    /// Current streaming anchor chunk, if any update has run.
    #[must_use]
    pub const fn anchor(&self) -> Option<ChunkPos> {
        self.anchor
    }

    /// Chunks inside the render radius of the current anchor.
    #[must_use]
    pub const fn resident(&self) -> &HashSet<ChunkPos> {
        &self.resident
    }

    /// Drop every chunk and forget the streaming anchor.
    pub fn reset(&mut self) {
        self.chunks.clear();
        self.resident.clear();
        self.anchor = None;
        self.chunk_size = DEFAULT_CHUNK_SIZE;
    }
}
