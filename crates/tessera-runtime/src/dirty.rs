use std::collections::VecDeque;

use hashbrown::HashSet;
use tessera_chunk::ChunkKey;

/// FIFO of chunk keys awaiting a mesh rebuild; each key is queued at most once.
#[derive(Default, Debug)]
pub struct DirtyQueue {
    order: VecDeque<ChunkKey>,
    queued: HashSet<ChunkKey>,
}

impl DirtyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the key was already queued.
    pub fn push(&mut self, key: ChunkKey) -> bool {
        if !self.queued.insert(key) {
            return false;
        }
        self.order.push_back(key);
        true
    }

    pub fn pop(&mut self) -> Option<ChunkKey> {
        let key = self.order.pop_front()?;
        self.queued.remove(&key);
        Some(key)
    }

    #[inline]
    pub fn contains(&self, key: ChunkKey) -> bool {
        self.queued.contains(&key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
