//! Sky and block light: bounded BFS add/remove queues and column sunlight.
#![forbid(unsafe_code)]

mod queue;
mod seed;

pub use queue::{LightQueue, LightUpdate, UpdateKind};
pub use seed::{on_block_changed, seed_chunk, update_sunlight_column};
pub use tessera_chunk::{LightLayer, MAX_LIGHT};

/// World-coordinate view the propagation engine reads and writes.
///
/// Implementations must fail soft: cells in chunks that are not loaded read as
/// dark and opaque, and writes to them return `false`.
pub trait LightStorage {
    fn light(&self, layer: LightLayer, x: i32, y: i32, z: i32) -> u8;

    /// Returns whether the stored value changed.
    fn set_light(&mut self, layer: LightLayer, x: i32, y: i32, z: i32, level: u8) -> bool;

    /// True when light can enter the cell (loaded and non-occluding).
    fn is_transparent(&self, x: i32, y: i32, z: i32) -> bool;

    fn emission(&self, _x: i32, _y: i32, _z: i32) -> u8 {
        0
    }

    /// Number of vertical cells; columns span `0..height`.
    fn height(&self) -> i32;
}

pub(crate) const NEIGHBORS: [(i32, i32, i32); 6] = [
    (1, 0, 0),
    (-1, 0, 0),
    (0, 1, 0),
    (0, -1, 0),
    (0, 0, 1),
    (0, 0, -1),
];
