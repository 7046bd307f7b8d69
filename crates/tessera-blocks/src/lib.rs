//! Block catalog, tool table, and TOML catalog loading.
#![forbid(unsafe_code)]

mod builtin;
pub mod catalog;
pub mod config;
pub mod tools;
pub mod types;

pub use catalog::{BlockCatalog, BlockDef, DropEntry};
pub use tools::{ToolDef, ToolId, ToolStack, ToolType};
pub use types::{BlockId, FaceRole, ItemId, RenderFaces, ids};
