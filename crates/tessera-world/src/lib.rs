//! Deterministic terrain generation: heightmap, caves, ore veins, trees.
#![forbid(unsafe_code)]

pub mod config;
mod generator;
mod noise;
pub mod params;

pub use config::{CavesConfig, GenerationConfig, OreConfig, TerrainConfig, TreesConfig};
pub use generator::TerrainGenerator;
pub use params::GenParams;

pub const DEFAULT_SEA_LEVEL: i32 = 18;
