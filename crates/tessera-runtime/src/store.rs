use std::sync::Arc;

use hashbrown::HashMap;
use tessera_blocks::{BlockCatalog, BlockId, ids};
use tessera_chunk::{BlockAccess, ChunkBuf, ChunkKey, ChunkSize, LightLayer, MAX_LIGHT};
use tessera_lighting::LightStorage;
use tessera_mesh_cpu::ChunkMesh;

#[derive(Clone, Debug)]
pub struct Chunk {
    pub buf: ChunkBuf,
    pub dirty: bool,
    /// Last built geometry; `None` until the first rebuild.
    pub mesh: Option<ChunkMesh>,
    /// World mesh revision at which `mesh` was built.
    pub mesh_revision: u64,
}

impl Chunk {
    pub fn new(buf: ChunkBuf) -> Self {
        Chunk {
            buf,
            dirty: false,
            mesh: None,
            mesh_revision: 0,
        }
    }

    #[inline]
    pub fn key(&self) -> ChunkKey {
        self.buf.coord.key()
    }
}

/// Loaded chunks by packed key, addressed in world coordinates.
pub struct ChunkStore {
    size: ChunkSize,
    catalog: Arc<BlockCatalog>,
    chunks: HashMap<ChunkKey, Chunk>,
}

impl ChunkStore {
    pub fn new(size: ChunkSize, catalog: Arc<BlockCatalog>) -> Self {
        Self {
            size,
            catalog,
            chunks: HashMap::new(),
        }
    }

    #[inline]
    pub fn size(&self) -> ChunkSize {
        self.size
    }

    #[inline]
    pub fn catalog_arc(&self) -> &Arc<BlockCatalog> {
        &self.catalog
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    #[inline]
    pub fn contains(&self, key: ChunkKey) -> bool {
        self.chunks.contains_key(&key)
    }

    #[inline]
    pub fn get(&self, key: ChunkKey) -> Option<&Chunk> {
        self.chunks.get(&key)
    }

    #[inline]
    pub fn get_mut(&mut self, key: ChunkKey) -> Option<&mut Chunk> {
        self.chunks.get_mut(&key)
    }

    pub fn insert(&mut self, chunk: Chunk) -> Option<Chunk> {
        self.chunks.insert(chunk.key(), chunk)
    }

    pub fn remove(&mut self, key: ChunkKey) -> Option<Chunk> {
        self.chunks.remove(&key)
    }

    pub fn keys(&self) -> impl Iterator<Item = ChunkKey> + '_ {
        self.chunks.keys().copied()
    }

    #[inline]
    fn y_in_range(&self, y: i32) -> bool {
        y >= 0 && (y as usize) < self.size.y
    }

    /// Chunk key and local coordinates of a world cell, or `None` when `y` is outside the slab.
    #[inline]
    pub fn locate(&self, x: i32, y: i32, z: i32) -> Option<(ChunkKey, i32, i32)> {
        if !self.y_in_range(y) {
            return None;
        }
        let (coord, lx, lz) = self.size.world_to_chunk(x, z);
        Some((coord.key(), lx as i32, lz as i32))
    }

    fn cell(&self, x: i32, y: i32, z: i32) -> Option<(&Chunk, i32, i32)> {
        let (key, lx, lz) = self.locate(x, y, z)?;
        self.chunks.get(&key).map(|c| (c, lx, lz))
    }

    /// `None` for missing chunks and out-of-range `y`.
    pub fn block(&self, x: i32, y: i32, z: i32) -> Option<BlockId> {
        self.cell(x, y, z).map(|(c, lx, lz)| c.buf.get_local(lx, y, lz))
    }

    /// Writes into a loaded chunk; false when the chunk is missing or `y` is out of range.
    pub fn set_block(&mut self, x: i32, y: i32, z: i32, id: BlockId) -> bool {
        let Some((key, lx, lz)) = self.locate(x, y, z) else {
            return false;
        };
        match self.chunks.get_mut(&key) {
            Some(c) => c.buf.set_local(lx, y, lz, id),
            None => false,
        }
    }
}

impl LightStorage for ChunkStore {
    fn light(&self, layer: LightLayer, x: i32, y: i32, z: i32) -> u8 {
        self.cell(x, y, z)
            .map_or(0, |(c, lx, lz)| c.buf.light_local(layer, lx, y, lz))
    }

    fn set_light(&mut self, layer: LightLayer, x: i32, y: i32, z: i32, level: u8) -> bool {
        let Some((key, lx, lz)) = self.locate(x, y, z) else {
            return false;
        };
        match self.chunks.get_mut(&key) {
            Some(c) => c.buf.set_light_local(layer, lx, y, lz, level),
            None => false,
        }
    }

    fn is_transparent(&self, x: i32, y: i32, z: i32) -> bool {
        self.block(x, y, z)
            .is_some_and(|id| !self.catalog.occludes(id))
    }

    fn emission(&self, x: i32, y: i32, z: i32) -> u8 {
        self.block(x, y, z)
            .map_or(0, |id| self.catalog.emit_light(id))
    }

    fn height(&self) -> i32 {
        self.size.y as i32
    }
}

impl BlockAccess for ChunkStore {
    fn catalog(&self) -> &BlockCatalog {
        &self.catalog
    }

    fn block_at(&self, wx: i32, wy: i32, wz: i32) -> BlockId {
        self.block(wx, wy, wz).unwrap_or(ids::AIR)
    }

    /// Open sky above the slab reads as full light.
    fn light_at(&self, wx: i32, wy: i32, wz: i32) -> u8 {
        if wy >= self.size.y as i32 {
            return MAX_LIGHT;
        }
        let sky = self.light(LightLayer::Sky, wx, wy, wz);
        let block = self.light(LightLayer::Block, wx, wy, wz);
        sky.max(block)
    }
}
