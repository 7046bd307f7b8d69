use std::sync::Arc;

use hashbrown::HashSet;

use tessera_blocks::{BlockCatalog, BlockId, ids};
use tessera_chunk::{BlockAccess, ChunkCoord, ChunkKey, ChunkSize, LightLayer};
use tessera_lighting::{LightQueue, LightStorage, on_block_changed, seed_chunk};
use tessera_mesh_cpu::build_chunk_mesh;
use tessera_world::{DEFAULT_SEA_LEVEL, GenerationConfig, TerrainGenerator};

use crate::dirty::DirtyQueue;
use crate::store::{Chunk, ChunkStore};

/// Calls `f` with the chunk owning column `(x, z)` and with each neighbor whose
/// border faces read that column.
fn for_meshes_sampling(size: ChunkSize, x: i32, z: i32, mut f: impl FnMut(ChunkKey)) {
    let (coord, lx, lz) = size.world_to_chunk(x, z);
    f(coord.key());
    if lx == 0 {
        f(coord.offset(-1, 0).key());
    }
    if lx == size.x - 1 {
        f(coord.offset(1, 0).key());
    }
    if lz == 0 {
        f(coord.offset(0, -1).key());
    }
    if lz == size.z - 1 {
        f(coord.offset(0, 1).key());
    }
}

/// Per-tick work limits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PerfBudgets {
    pub light_ops_per_tick: usize,
    pub chunk_rebuilds_per_tick: usize,
    /// Extra chunk rings kept loaded beyond the view distance before pruning.
    pub unload_margin: i32,
}

impl Default for PerfBudgets {
    fn default() -> Self {
        Self {
            light_ops_per_tick: 20_000,
            chunk_rebuilds_per_tick: 4,
            unload_margin: 2,
        }
    }
}

#[derive(Clone, Debug)]
pub struct WorldOptions {
    pub seed: u32,
    pub view_distance_chunks: i32,
    pub chunk_size: ChunkSize,
    pub generation: Option<GenerationConfig>,
    pub sea_level: Option<i32>,
    pub budgets: Option<PerfBudgets>,
}

impl Default for WorldOptions {
    fn default() -> Self {
        Self {
            seed: 1337,
            view_distance_chunks: 4,
            chunk_size: ChunkSize::default(),
            generation: None,
            sea_level: None,
            budgets: None,
        }
    }
}

pub struct World {
    seed: u32,
    view_distance: i32,
    sea_level: i32,
    budgets: PerfBudgets,
    generator: TerrainGenerator,
    store: ChunkStore,
    light: LightQueue,
    dirty: DirtyQueue,
    mesh_revision: u64,
}

impl World {
    pub fn new(opts: WorldOptions) -> Self {
        Self::with_catalog(opts, BlockCatalog::builtin())
    }

    pub fn with_catalog(opts: WorldOptions, catalog: BlockCatalog) -> Self {
        let catalog = Arc::new(catalog);
        let size = ChunkSize::new(
            opts.chunk_size.x.max(1),
            opts.chunk_size.y,
            opts.chunk_size.z.max(1),
        );
        let sea_level = opts.sea_level.unwrap_or(DEFAULT_SEA_LEVEL);
        let generation = opts.generation.unwrap_or_default();
        let generator = TerrainGenerator::new(opts.seed, size, &generation, sea_level, &catalog);
        World {
            seed: opts.seed,
            view_distance: opts.view_distance_chunks.max(0),
            sea_level,
            budgets: opts.budgets.unwrap_or_default(),
            generator,
            store: ChunkStore::new(size, catalog),
            light: LightQueue::new(),
            dirty: DirtyQueue::new(),
            mesh_revision: 0,
        }
    }

    #[inline]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    #[inline]
    pub fn chunk_size(&self) -> ChunkSize {
        self.store.size()
    }

    #[inline]
    pub fn view_distance(&self) -> i32 {
        self.view_distance
    }

    #[inline]
    pub fn sea_level(&self) -> i32 {
        self.sea_level
    }

    #[inline]
    pub fn budgets(&self) -> PerfBudgets {
        self.budgets
    }

    #[inline]
    pub fn catalog(&self) -> &BlockCatalog {
        self.store.catalog_arc()
    }

    #[inline]
    pub fn generator(&self) -> &TerrainGenerator {
        &self.generator
    }

    /// Read-only world view for picking and meshing.
    #[inline]
    pub fn access(&self) -> &ChunkStore {
        &self.store
    }

    // Loading

    /// Generates and lights the chunk if it is not loaded. Returns whether it was created.
    pub fn ensure_chunk(&mut self, cx: i32, cz: i32) -> bool {
        let coord = ChunkCoord::new(cx, cz);
        let key = coord.key();
        if self.store.contains(key) {
            return false;
        }
        let buf = self.generator.generate(coord);
        self.store.insert(Chunk::new(buf));
        let size = self.store.size();
        seed_chunk(&mut self.store, &mut self.light, coord, size);
        self.mark_dirty_key(key);
        for n in coord.neighbors4() {
            self.mark_dirty_key(n.key());
        }
        log::debug!("loaded chunk {coord} ({} loaded)", self.store.len());
        true
    }

    /// Loads every chunk within the view distance (chessboard) of the given chunk.
    /// Returns how many were created.
    pub fn generate_initial_area(&mut self, center_cx: i32, center_cz: i32) -> usize {
        let r = self.view_distance;
        let mut created = 0;
        for dz in -r..=r {
            for dx in -r..=r {
                if self.ensure_chunk(center_cx + dx, center_cz + dz) {
                    created += 1;
                }
            }
        }
        created
    }

    pub fn ensure_chunks_around(&mut self, world_x: f32, world_z: f32) -> usize {
        let center = self.chunk_at(world_x, world_z);
        self.generate_initial_area(center.cx, center.cz)
    }

    /// Drops chunks beyond view distance plus the unload margin and returns their keys so
    /// the caller can release geometry.
    pub fn prune_far_chunks(&mut self, world_x: f32, world_z: f32) -> Vec<ChunkKey> {
        let center = self.chunk_at(world_x, world_z);
        let keep = self.view_distance + self.budgets.unload_margin.max(0);
        let mut far: Vec<ChunkKey> = self
            .store
            .keys()
            .filter(|k| k.coord().chebyshev(center) > keep)
            .collect();
        far.sort_unstable();
        for key in &far {
            self.store.remove(*key);
        }
        if !far.is_empty() {
            log::debug!(
                "unloaded {} chunks around {center} ({} loaded)",
                far.len(),
                self.store.len()
            );
        }
        far
    }

    fn chunk_at(&self, world_x: f32, world_z: f32) -> ChunkCoord {
        let size = self.store.size();
        let wx = world_x.floor() as i32;
        let wz = world_z.floor() as i32;
        size.world_to_chunk(wx, wz).0
    }

    // Blocks

    /// Air for unloaded chunks and `y` outside the slab.
    pub fn get_block(&self, x: i32, y: i32, z: i32) -> BlockId {
        self.store.block(x, y, z).unwrap_or(ids::AIR)
    }

    /// Writes a block, generating its chunk first when needed. Does no dirtying or light
    /// work; see `apply_block_edit` for the full edit sequence.
    pub fn set_block(&mut self, x: i32, y: i32, z: i32, id: BlockId) -> bool {
        let sy = self.store.size().y as i32;
        if y < 0 || y >= sy {
            debug_assert!(false, "set_block y={y} outside 0..{sy}");
            log::error!("set_block at ({x},{y},{z}) outside the world height {sy}; ignored");
            return false;
        }
        let (coord, _, _) = self.store.size().world_to_chunk(x, z);
        self.ensure_chunk(coord.cx, coord.cz);
        self.store.set_block(x, y, z, id)
    }

    /// Flags the chunk holding the cell, plus neighbors sharing a face with it.
    pub fn mark_dirty_at(&mut self, x: i32, y: i32, z: i32) {
        if self.store.locate(x, y, z).is_none() {
            return;
        }
        let size = self.store.size();
        for_meshes_sampling(size, x, z, |key| self.mark_dirty_key(key));
    }

    /// Queues the light work implied by a block change. Call after `set_block` and
    /// `mark_dirty_at`.
    pub fn handle_block_changed(&mut self, x: i32, y: i32, z: i32, old: BlockId, new: BlockId) {
        if old == new {
            return;
        }
        let catalog = Arc::clone(self.store.catalog_arc());
        on_block_changed(&mut self.store, &mut self.light, &catalog, (x, y, z), old, new);
    }

    /// Sets a block and runs the dirty and light steps. Returns false when nothing changed.
    pub fn apply_block_edit(&mut self, x: i32, y: i32, z: i32, id: BlockId) -> bool {
        let sy = self.store.size().y as i32;
        if y >= 0 && y < sy {
            let (coord, _, _) = self.store.size().world_to_chunk(x, z);
            self.ensure_chunk(coord.cx, coord.cz);
        }
        let old = self.get_block(x, y, z);
        if old == id || !self.set_block(x, y, z, id) {
            return false;
        }
        self.mark_dirty_at(x, y, z);
        self.handle_block_changed(x, y, z, old, id);
        true
    }

    // Light

    pub fn get_light(&self, layer: LightLayer, x: i32, y: i32, z: i32) -> u8 {
        self.store.light(layer, x, y, z)
    }

    /// Direct light write, clamped to 15. Marks the owning chunk dirty on change.
    pub fn set_light(&mut self, layer: LightLayer, x: i32, y: i32, z: i32, level: u8) -> bool {
        let changed = self.store.set_light(layer, x, y, z, level);
        if changed {
            self.mark_dirty_at(x, y, z);
        }
        changed
    }

    /// Brighter of the sky and block layers.
    pub fn get_light_at(&self, x: i32, y: i32, z: i32) -> u8 {
        self.get_light(LightLayer::Sky, x, y, z)
            .max(self.get_light(LightLayer::Block, x, y, z))
    }

    #[inline]
    pub fn pending_light_updates(&self) -> usize {
        self.light.pending()
    }

    // Maintenance

    /// Drains up to `max_ops` light updates (the per-tick budget by default) and dirties
    /// every chunk whose light changed, plus neighbors whose border faces sample it. Returns the number of updates run.
    pub fn process_light_queue(&mut self, max_ops: Option<usize>) -> usize {
        let max_ops = max_ops.unwrap_or(self.budgets.light_ops_per_tick);
        let size = self.store.size();
        let mut seen: HashSet<ChunkKey> = HashSet::new();
        let mut touched: Vec<ChunkKey> = Vec::new();
        let ops = self.light.process(&mut self.store, max_ops, |x, _y, z| {
            for_meshes_sampling(size, x, z, |key| {
                if seen.insert(key) {
                    touched.push(key);
                }
            });
        });
        for key in touched {
            self.mark_dirty_key(key);
        }
        ops
    }

    /// Rebuilds up to `chunk_rebuilds_per_tick` dirty chunks in the order they were flagged.
    /// Keys of chunks unloaded since flagging are dropped. Returns the rebuilt keys.
    pub fn rebuild_dirty_chunks(&mut self) -> Vec<ChunkKey> {
        let budget = self.budgets.chunk_rebuilds_per_tick;
        let mut rebuilt = Vec::new();
        while rebuilt.len() < budget {
            let Some(key) = self.dirty.pop() else {
                break;
            };
            let Some(chunk) = self.store.get(key) else {
                continue;
            };
            let mesh = build_chunk_mesh(&chunk.buf, &self.store);
            self.mesh_revision += 1;
            if let Some(chunk) = self.store.get_mut(key) {
                chunk.mesh = Some(mesh);
                chunk.dirty = false;
                chunk.mesh_revision = self.mesh_revision;
            }
            rebuilt.push(key);
        }
        if !rebuilt.is_empty() {
            log::debug!(
                "rebuilt {} chunk meshes ({} still dirty)",
                rebuilt.len(),
                self.dirty.len()
            );
        }
        rebuilt
    }

    fn mark_dirty_key(&mut self, key: ChunkKey) {
        if let Some(chunk) = self.store.get_mut(key) {
            chunk.dirty = true;
            self.dirty.push(key);
        }
    }

    // Introspection

    #[inline]
    pub fn chunk_count(&self) -> usize {
        self.store.len()
    }

    /// Loaded keys in ascending order.
    pub fn chunk_keys(&self) -> Vec<ChunkKey> {
        let mut keys: Vec<ChunkKey> = self.store.keys().collect();
        keys.sort_unstable();
        keys
    }

    #[inline]
    pub fn chunk_by_key(&self, key: ChunkKey) -> Option<&Chunk> {
        self.store.get(key)
    }

    #[inline]
    pub fn dirty_count(&self) -> usize {
        self.dirty.len()
    }

    #[inline]
    pub fn is_dirty(&self, key: ChunkKey) -> bool {
        self.dirty.contains(key)
    }

    #[inline]
    pub fn mesh_revision(&self) -> u64 {
        self.mesh_revision
    }
}

impl BlockAccess for World {
    fn catalog(&self) -> &BlockCatalog {
        self.store.catalog()
    }

    fn block_at(&self, wx: i32, wy: i32, wz: i32) -> BlockId {
        self.get_block(wx, wy, wz)
    }

    fn light_at(&self, wx: i32, wy: i32, wz: i32) -> u8 {
        self.store.light_at(wx, wy, wz)
    }
}
