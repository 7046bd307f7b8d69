use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

use tessera_blocks::config::BlockRef;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct GenerationConfig {
    #[serde(default)]
    pub terrain: TerrainConfig,
    #[serde(default)]
    pub caves: CavesConfig,
    #[serde(default = "default_ores")]
    pub ores: Vec<OreConfig>,
    #[serde(default)]
    pub trees: TreesConfig,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            terrain: TerrainConfig::default(),
            caves: CavesConfig::default(),
            ores: default_ores(),
            trees: TreesConfig::default(),
        }
    }
}

impl GenerationConfig {
    pub fn from_toml_str(src: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(src)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Fractal {
    #[serde(default = "d_oct")]
    pub octaves: i32,
    #[serde(default = "d_freq")]
    pub frequency: f32,
    #[serde(default = "d_amp")]
    pub amplitude: f32,
}
fn d_oct() -> i32 {
    4
}
fn d_freq() -> f32 {
    0.02
}
fn d_amp() -> f32 {
    16.0
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct TerrainConfig {
    #[serde(default = "default_base_height")]
    pub base_height: f32,
    #[serde(default = "default_detail")]
    pub detail: Fractal,
    #[serde(default = "default_hills")]
    pub hills: Fractal,
    #[serde(default = "default_persistence")]
    pub persistence: f32,
    #[serde(default = "default_lacunarity")]
    pub lacunarity: f32,
    // Columns at most this far above sea level get beaches
    #[serde(default = "default_beach_margin")]
    pub beach_margin: i32,
    #[serde(default = "default_soil_depth")]
    pub soil_depth: i32,
}
fn default_base_height() -> f32 {
    16.0
}
fn default_detail() -> Fractal {
    Fractal {
        octaves: 5,
        frequency: 0.02,
        amplitude: 18.0,
    }
}
fn default_hills() -> Fractal {
    Fractal {
        octaves: 3,
        frequency: 0.006,
        amplitude: 26.0,
    }
}
fn default_persistence() -> f32 {
    0.5
}
fn default_lacunarity() -> f32 {
    2.0
}
fn default_beach_margin() -> i32 {
    1
}
fn default_soil_depth() -> i32 {
    3
}
impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            base_height: default_base_height(),
            detail: default_detail(),
            hills: default_hills(),
            persistence: default_persistence(),
            lacunarity: default_lacunarity(),
            beach_margin: default_beach_margin(),
            soil_depth: default_soil_depth(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CavesConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_cave_scale")]
    pub noise_scale: f32,
    #[serde(default = "default_cave_threshold")]
    pub threshold: f32,
    #[serde(default = "default_cave_min_y")]
    pub min_y: i32,
    #[serde(default = "default_cave_max_y")]
    pub max_y: i32,
    #[serde(default = "default_true")]
    pub protect_surface: bool,
}
fn default_true() -> bool {
    true
}
fn default_cave_scale() -> f32 {
    0.08
}
fn default_cave_threshold() -> f32 {
    0.35
}
fn default_cave_min_y() -> i32 {
    6
}
fn default_cave_max_y() -> i32 {
    56
}
impl Default for CavesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            noise_scale: default_cave_scale(),
            threshold: default_cave_threshold(),
            min_y: default_cave_min_y(),
            max_y: default_cave_max_y(),
            protect_surface: true,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct OreConfig {
    pub id: BlockRef,
    pub min_y: i32,
    pub max_y: i32,
    pub attempts_per_chunk: i32,
    pub vein_size_min: i32,
    pub vein_size_max: i32,
    // Stone only when absent or empty
    #[serde(default)]
    pub replaceable: Option<Vec<BlockRef>>,
}

impl OreConfig {
    pub fn new(id: &str, min_y: i32, max_y: i32, attempts: i32, vein: (i32, i32)) -> Self {
        Self {
            id: BlockRef::Name(id.to_string()),
            min_y,
            max_y,
            attempts_per_chunk: attempts,
            vein_size_min: vein.0,
            vein_size_max: vein.1,
            replaceable: None,
        }
    }
}

fn default_ores() -> Vec<OreConfig> {
    vec![
        OreConfig::new("coal_ore", 8, 60, 18, (3, 7)),
        OreConfig::new("iron_ore", 6, 48, 12, (3, 6)),
        OreConfig::new("gold_ore", 5, 36, 8, (2, 5)),
        OreConfig::new("diamond_ore", 4, 20, 4, (2, 4)),
    ]
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct TreesConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_tree_chance")]
    pub chance: f32,
    #[serde(default = "default_tree_chance_near_sea")]
    pub near_sea_chance: f32,
    #[serde(default = "default_trunk_min")]
    pub trunk_min: i32,
    #[serde(default = "default_trunk_max")]
    pub trunk_max: i32,
}
fn default_tree_chance() -> f32 {
    0.035
}
fn default_tree_chance_near_sea() -> f32 {
    0.01
}
fn default_trunk_min() -> i32 {
    4
}
fn default_trunk_max() -> i32 {
    6
}
impl Default for TreesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            chance: default_tree_chance(),
            near_sea_chance: default_tree_chance_near_sea(),
            trunk_min: default_trunk_min(),
            trunk_max: default_trunk_max(),
        }
    }
}
