use std::collections::{BTreeMap, VecDeque};

use tessera_blocks::{BlockId, ToolId};
use tessera_chunk::ChunkKey;
use tessera_edit::{BlockHit, Drop};

pub enum Event {
    Tick,

    WalkerMoved { x: f32, z: f32 },
    ViewCenterChanged { ccx: i32, ccz: i32 },
    ChunksUnloaded { keys: Vec<ChunkKey> },

    MineRequested,
    PlaceRequested { block: BlockId },

    BlockBroken { hit: BlockHit, seconds: f32, drops: Vec<Drop> },
    BlockPlaced { x: i32, y: i32, z: i32, block: BlockId },
    ToolWornOut { tool: ToolId },
}

pub struct EventEnvelope {
    pub id: u64,
    pub tick: u64,
    pub kind: Event,
}

/// Events bucketed by the tick they fire on; within a tick, first in first out.
pub struct EventQueue {
    by_tick: BTreeMap<u64, VecDeque<EventEnvelope>>,
    pub now: u64,
    next_id: u64,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self {
            by_tick: BTreeMap::new(),
            now: 0,
            next_id: 1,
        }
    }
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1).max(1);
        id
    }

    pub fn emit_now(&mut self, kind: Event) -> u64 {
        self.emit_at(self.now, kind)
    }

    pub fn emit_at(&mut self, tick: u64, kind: Event) -> u64 {
        let id = self.alloc_id();
        let tick = tick.max(self.now);
        let env = EventEnvelope { id, tick, kind };
        self.by_tick.entry(tick).or_default().push_back(env);
        id
    }

    pub fn emit_after(&mut self, delta: u64, kind: Event) -> u64 {
        self.emit_at(self.now + delta, kind)
    }

    pub fn pop_ready(&mut self) -> Option<EventEnvelope> {
        self.by_tick.get_mut(&self.now)?.pop_front()
    }

    pub fn advance_tick(&mut self) {
        self.by_tick.remove(&self.now);
        self.now = self.now.wrapping_add(1);
    }

    pub fn pending(&self) -> usize {
        self.by_tick.values().map(VecDeque::len).sum()
    }
}
