use crate::{LightLayer, LightStorage, MAX_LIGHT, NEIGHBORS};

// Consumed prefixes longer than this are dropped after a process call
const COMPACT_AFTER: usize = 1024;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum UpdateKind {
    Add,
    Remove,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LightUpdate {
    pub layer: LightLayer,
    pub kind: UpdateKind,
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub level: u8,
}

/// Append-only add/remove queues with read cursors, resumable across calls.
#[derive(Default, Debug)]
pub struct LightQueue {
    adds: Vec<LightUpdate>,
    removes: Vec<LightUpdate>,
    add_at: usize,
    remove_at: usize,
}

impl LightQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue_add(&mut self, layer: LightLayer, x: i32, y: i32, z: i32, level: u8) {
        if level == 0 {
            return;
        }
        self.adds.push(LightUpdate {
            layer,
            kind: UpdateKind::Add,
            x,
            y,
            z,
            level: level.min(MAX_LIGHT),
        });
    }

    pub fn enqueue_remove(&mut self, layer: LightLayer, x: i32, y: i32, z: i32, level: u8) {
        if level == 0 {
            return;
        }
        self.removes.push(LightUpdate {
            layer,
            kind: UpdateKind::Remove,
            x,
            y,
            z,
            level: level.min(MAX_LIGHT),
        });
    }

    #[inline]
    pub fn has_pending(&self) -> bool {
        self.add_at < self.adds.len() || self.remove_at < self.removes.len()
    }

    #[inline]
    pub fn pending(&self) -> usize {
        (self.adds.len() - self.add_at) + (self.removes.len() - self.remove_at)
    }

    pub fn clear(&mut self) {
        self.adds.clear();
        self.removes.clear();
        self.add_at = 0;
        self.remove_at = 0;
    }

    /// Runs up to `max_ops` updates, every pending remove before any add, and returns how
    /// many ran. `on_change` sees each cell whose stored light changed.
    pub fn process<S, F>(&mut self, storage: &mut S, max_ops: usize, mut on_change: F) -> usize
    where
        S: LightStorage + ?Sized,
        F: FnMut(i32, i32, i32),
    {
        let mut ops = 0;
        while ops < max_ops {
            let update = if self.remove_at < self.removes.len() {
                self.remove_at += 1;
                self.removes[self.remove_at - 1]
            } else if self.add_at < self.adds.len() {
                self.add_at += 1;
                self.adds[self.add_at - 1]
            } else {
                break;
            };
            ops += 1;
            match update.kind {
                UpdateKind::Remove => self.spread_remove(storage, update, &mut on_change),
                UpdateKind::Add => self.spread_add(storage, update, &mut on_change),
            }
        }
        self.compact();
        ops
    }

    fn spread_add<S, F>(&mut self, storage: &mut S, u: LightUpdate, on_change: &mut F)
    where
        S: LightStorage + ?Sized,
        F: FnMut(i32, i32, i32),
    {
        if !storage.is_transparent(u.x, u.y, u.z) {
            return;
        }
        let next = u.level.saturating_sub(1);
        if next == 0 {
            return;
        }
        for (dx, dy, dz) in NEIGHBORS {
            let (nx, ny, nz) = (u.x + dx, u.y + dy, u.z + dz);
            if !storage.is_transparent(nx, ny, nz) {
                continue;
            }
            if next <= storage.light(u.layer, nx, ny, nz) {
                continue;
            }
            if storage.set_light(u.layer, nx, ny, nz, next) {
                on_change(nx, ny, nz);
            }
            self.enqueue_add(u.layer, nx, ny, nz, next);
        }
    }

    fn spread_remove<S, F>(&mut self, storage: &mut S, u: LightUpdate, on_change: &mut F)
    where
        S: LightStorage + ?Sized,
        F: FnMut(i32, i32, i32),
    {
        for (dx, dy, dz) in NEIGHBORS {
            let (nx, ny, nz) = (u.x + dx, u.y + dy, u.z + dz);
            if !storage.is_transparent(nx, ny, nz) {
                continue;
            }
            let level = storage.light(u.layer, nx, ny, nz);
            if level == 0 {
                continue;
            }
            if level < u.level {
                if storage.set_light(u.layer, nx, ny, nz, 0) {
                    on_change(nx, ny, nz);
                }
                self.enqueue_remove(u.layer, nx, ny, nz, level);
            } else {
                // Lit by something at least as bright; let it re-spread
                self.enqueue_add(u.layer, nx, ny, nz, level);
            }
        }
    }

    fn compact(&mut self) {
        if self.add_at > COMPACT_AFTER {
            self.adds.drain(..self.add_at);
            self.add_at = 0;
        }
        if self.remove_at > COMPACT_AFTER {
            self.removes.drain(..self.remove_at);
            self.remove_at = 0;
        }
    }
}
