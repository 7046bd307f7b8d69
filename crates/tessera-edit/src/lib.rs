//! Player-facing edit helpers: voxel picking and mining rules.
#![forbid(unsafe_code)]

pub mod mining;
pub mod raycast;

pub use mining::{Drop, break_time, is_tool_effective, resolve_drops};
pub use raycast::{BlockHit, pick};
