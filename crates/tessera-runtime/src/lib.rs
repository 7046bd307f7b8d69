//! The World: chunk map, dirty queue, light queue, and the per-tick maintenance entry points.
#![forbid(unsafe_code)]

mod dirty;
mod store;
mod world;

pub use dirty::DirtyQueue;
pub use store::{Chunk, ChunkStore};
pub use world::{PerfBudgets, World, WorldOptions};
