use hashbrown::HashMap;
use tessera_blocks::{BlockId, ItemId, ToolId, ToolStack, ids};
use tessera_chunk::{BlockAccess, ChunkCoord};
use tessera_edit::{break_time, pick, resolve_drops};
use tessera_geom::Vec3;
use tessera_rng::SeededRng;
use tessera_runtime::World;

use crate::event::{Event, EventEnvelope, EventQueue};

const WALK_SPEED: f32 = 0.75; // blocks per tick along +X
const EYE_HEIGHT: f32 = 1.6;
const REACH: f32 = 6.0;
const MINE_EVERY: u64 = 10;
const PLACE_EVERY: u64 = 25;

/// Scripted headless session: a walker strides east, mines what it looks at, and drops
/// torches behind it while the world streams and relights around it.
pub struct App {
    world: World,
    queue: EventQueue,
    rng: SeededRng,
    pos: Vec3,
    center: ChunkCoord,
    tool: Option<ToolStack>,
    inventory: HashMap<ItemId, u32>,
    blocks_broken: u32,
    blocks_placed: u32,
    chunks_unloaded: usize,
    meshes_built: usize,
}

impl App {
    pub fn new(mut world: World) -> Self {
        world.generate_initial_area(0, 0);
        let rng = SeededRng::new(world.seed()).fork("session");
        let mut app = App {
            world,
            queue: EventQueue::new(),
            rng,
            pos: Vec3::new(0.5, 0.0, 0.5),
            center: ChunkCoord::new(0, 0),
            tool: Some(ToolStack::new(ToolId::StonePickaxe, 1)),
            inventory: HashMap::new(),
            blocks_broken: 0,
            blocks_placed: 0,
            chunks_unloaded: 0,
            meshes_built: 0,
        };
        app.pos.y = app.ground_y(0, 0) as f32 + 1.0;
        app.inventory.insert(ItemId::Block(ids::TORCH), 8);
        app
    }

    /// Runs one tick: drains this tick's events, then the bounded light and mesh work.
    pub fn step(&mut self) {
        self.queue.emit_now(Event::Tick);
        let mut last_id = None;
        while let Some(env) = self.queue.pop_ready() {
            Self::log_event(env.tick, &env.kind);
            last_id = Some(env.id);
            self.handle_event(env);
        }
        if let Some(id) = last_id {
            log::trace!(target: "events", "[tick {}] handled through #{}, {} queued",
                self.queue.now, id, self.queue.pending());
        }
        self.world.process_light_queue(None);
        let rebuilt = self.world.rebuild_dirty_chunks();
        if !rebuilt.is_empty() {
            log::debug!(target: "events", "[tick {}] ChunksRebuilt n={} rev={}",
                self.queue.now, rebuilt.len(), self.world.mesh_revision());
        }
        self.meshes_built += rebuilt.len();
        self.queue.advance_tick();
    }

    fn handle_event(&mut self, env: EventEnvelope) {
        let tick = env.tick;
        match env.kind {
            Event::Tick => {
                let x = self.pos.x + WALK_SPEED;
                self.queue.emit_now(Event::WalkerMoved { x, z: self.pos.z });
                if tick > 0 && tick % MINE_EVERY == 0 {
                    self.queue.emit_now(Event::MineRequested);
                }
                if tick > 0 && tick % PLACE_EVERY == 0 {
                    self.queue.emit_after(1, Event::PlaceRequested { block: ids::TORCH });
                }
            }
            Event::WalkerMoved { x, z } => {
                self.pos.x = x;
                self.pos.z = z;
                let (wx, wz) = (x.floor() as i32, z.floor() as i32);
                self.pos.y = self.ground_y(wx, wz) as f32 + 1.0;
                let size = self.world.chunk_size();
                let (coord, _, _) = size.world_to_chunk(wx, wz);
                if coord != self.center {
                    self.center = coord;
                    self.queue.emit_now(Event::ViewCenterChanged {
                        ccx: coord.cx,
                        ccz: coord.cz,
                    });
                }
            }
            Event::ViewCenterChanged { .. } => {
                self.world.ensure_chunks_around(self.pos.x, self.pos.z);
                let keys = self.world.prune_far_chunks(self.pos.x, self.pos.z);
                if !keys.is_empty() {
                    self.queue.emit_now(Event::ChunksUnloaded { keys });
                }
            }
            Event::ChunksUnloaded { keys } => {
                self.chunks_unloaded += keys.len();
            }
            Event::MineRequested => self.mine(),
            Event::PlaceRequested { block } => self.place(block),
            Event::BlockBroken { drops, .. } => {
                for d in drops {
                    *self.inventory.entry(d.item).or_insert(0) += d.count;
                }
            }
            Event::BlockPlaced { .. } | Event::ToolWornOut { .. } => {}
        }
    }

    fn eye(&self) -> Vec3 {
        self.pos + Vec3::new(0.0, EYE_HEIGHT, 0.0)
    }

    /// Highest non-air cell of a loaded column, or 0.
    fn ground_y(&self, wx: i32, wz: i32) -> i32 {
        let top = self.world.chunk_size().y as i32 - 1;
        (0..=top)
            .rev()
            .find(|&y| self.world.get_block(wx, y, wz) != ids::AIR)
            .unwrap_or(0)
    }

    fn mine(&mut self) {
        let dir = Vec3::new(1.0, -1.0, 0.0);
        let Some(hit) = pick(&self.world, self.eye(), dir, REACH) else {
            return;
        };
        let tool = self.tool.map(|t| t.tool);
        let seconds = break_time(self.world.catalog(), hit.id, tool);
        if !seconds.is_finite() {
            log::info!(target: "events", "[tick {}] Unbreakable {} at ({},{},{})",
                self.queue.now, self.world.catalog().def(hit.id).name, hit.block.x, hit.block.y, hit.block.z);
            return;
        }
        let drops = resolve_drops(self.world.catalog(), hit.id, tool, &mut self.rng);
        let (x, y, z) = (hit.block.x, hit.block.y, hit.block.z);
        if !self.world.apply_block_edit(x, y, z, ids::AIR) {
            return;
        }
        self.blocks_broken += 1;
        if let Some(stack) = self.tool {
            self.tool = stack.apply_damage(1);
            if self.tool.is_none() {
                self.queue.emit_now(Event::ToolWornOut { tool: stack.tool });
            }
        }
        self.queue.emit_now(Event::BlockBroken { hit, seconds, drops });
    }

    fn place(&mut self, block: BlockId) {
        let item = ItemId::Block(block);
        let have = self.inventory.get(&item).copied().unwrap_or(0);
        if have == 0 {
            return;
        }
        let dir = Vec3::new(-1.0, -1.0, 0.0);
        let Some(hit) = pick(&self.world, self.eye(), dir, REACH) else {
            return;
        };
        let c = hit.place_cell();
        if self.world.block_at(c.x, c.y, c.z) != ids::AIR {
            return;
        }
        if self.world.apply_block_edit(c.x, c.y, c.z, block) {
            self.inventory.insert(item, have - 1);
            self.blocks_placed += 1;
            self.queue.emit_now(Event::BlockPlaced {
                x: c.x,
                y: c.y,
                z: c.z,
                block,
            });
        }
    }

    fn log_event(tick: u64, ev: &Event) {
        match ev {
            Event::Tick => {
                log::trace!(target: "events", "[tick {}] Tick", tick);
            }
            Event::WalkerMoved { x, z } => {
                log::trace!(target: "events", "[tick {}] WalkerMoved ({:.2}, {:.2})", tick, x, z);
            }
            Event::ViewCenterChanged { ccx, ccz } => {
                log::info!(target: "events", "[tick {}] ViewCenterChanged cc=({}, {})", tick, ccx, ccz);
            }
            Event::ChunksUnloaded { keys } => {
                log::info!(target: "events", "[tick {}] ChunksUnloaded n={}", tick, keys.len());
            }
            Event::MineRequested => {
                log::debug!(target: "events", "[tick {}] MineRequested", tick);
            }
            Event::PlaceRequested { block } => {
                log::debug!(target: "events", "[tick {}] PlaceRequested block={}", tick, block);
            }
            Event::BlockBroken { hit, seconds, drops } => {
                log::info!(target: "events", "[tick {}] BlockBroken id={} at ({},{},{}) face={:?} t={:.2} time={:.2}s drops={:?}",
                    tick, hit.id, hit.block.x, hit.block.y, hit.block.z, hit.normal, hit.t, seconds, drops);
            }
            Event::BlockPlaced { x, y, z, block } => {
                log::info!(target: "events", "[tick {}] BlockPlaced id={} at ({},{},{})", tick, block, x, y, z);
            }
            Event::ToolWornOut { tool } => {
                log::info!(target: "events", "[tick {}] ToolWornOut {}", tick, tool.key());
            }
        }
    }

    pub fn report(&self) {
        log::info!(
            "session over: {} chunks loaded, {} unloaded, {} meshes built, {} broken, {} placed, {} light updates pending",
            self.world.chunk_count(),
            self.chunks_unloaded,
            self.meshes_built,
            self.blocks_broken,
            self.blocks_placed,
            self.world.pending_light_updates()
        );
        let mut items: Vec<_> = self.inventory.iter().filter(|(_, n)| **n > 0).collect();
        items.sort_by_key(|(item, _)| format!("{item:?}"));
        for (item, n) in items {
            log::info!("  {:?} x{}", item, n);
        }
    }
}
