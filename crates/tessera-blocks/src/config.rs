use serde::Deserialize;

use crate::tools::ToolType;
use crate::types::RenderFaces;

// Top-level catalog file
#[derive(Deserialize, Debug, Clone, Default)]
pub struct CatalogConfig {
    #[serde(default)]
    pub blocks: Vec<BlockConfig>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct BlockConfig {
    pub name: String,
    // Defaults to the entry's position in the list
    #[serde(default)]
    pub id: Option<u16>,
    #[serde(default = "default_true")]
    pub solid: bool,
    #[serde(default)]
    pub transparent: bool,
    // Defaults to `solid`
    #[serde(default)]
    pub occludes: Option<bool>,
    #[serde(default)]
    pub emit_light: u8,
    #[serde(default)]
    pub hardness: Option<f32>,
    #[serde(default)]
    pub breakable: Option<bool>,
    #[serde(default)]
    pub required_tool: Option<ToolType>,
    #[serde(default)]
    pub required_tier: u8,
    #[serde(default)]
    pub drops: Vec<DropConfig>,
    #[serde(default)]
    pub tiles: TilesConfig,
    #[serde(default)]
    pub render_faces: RenderFaces,
    #[serde(default)]
    pub pickable: Option<bool>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct TilesConfig {
    #[serde(default)]
    pub all: Option<u16>,
    #[serde(default)]
    pub top: Option<u16>,
    #[serde(default)]
    pub bottom: Option<u16>,
    #[serde(default)]
    pub side: Option<u16>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct DropConfig {
    pub item: ItemRef,
    #[serde(default = "default_one")]
    pub min: i32,
    #[serde(default)]
    pub max: Option<i32>,
    #[serde(default = "default_chance")]
    pub chance: f32,
}

/// Block referenced by numeric id or by name.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum BlockRef {
    Id(u16),
    Name(String),
}

/// Item referenced by block id, block name, or tool key.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ItemRef {
    Id(u16),
    Name(String),
}

fn default_true() -> bool {
    true
}
fn default_one() -> i32 {
    1
}
fn default_chance() -> f32 {
    1.0
}
