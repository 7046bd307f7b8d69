use serde::Deserialize;

use crate::tools::ToolId;

pub type BlockId = u16;

/// Ids of the built-in catalog.
pub mod ids {
    use super::BlockId;

    pub const AIR: BlockId = 0;
    pub const GRASS: BlockId = 1;
    pub const DIRT: BlockId = 2;
    pub const STONE: BlockId = 3;
    pub const WATER: BlockId = 4;
    pub const SAND: BlockId = 5;
    pub const WOOD: BlockId = 6;
    pub const LEAVES: BlockId = 7;
    pub const PLANKS: BlockId = 8;
    pub const BRICK: BlockId = 9;
    pub const GLASS: BlockId = 10;
    pub const TORCH: BlockId = 11;
    pub const BEDROCK: BlockId = 12;
    pub const COAL_ORE: BlockId = 13;
    pub const IRON_ORE: BlockId = 14;
    pub const GOLD_ORE: BlockId = 15;
    pub const DIAMOND_ORE: BlockId = 16;
}

/// Face orientation used for tile lookup.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum FaceRole {
    Top = 0,
    Bottom = 1,
    Side = 2,
}

impl FaceRole {
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderFaces {
    #[default]
    All,
    TopOnly,
}

/// Anything that can appear in an inventory slot or drop stack.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ItemId {
    Block(BlockId),
    Tool(ToolId),
}

impl From<ToolId> for ItemId {
    fn from(t: ToolId) -> Self {
        ItemId::Tool(t)
    }
}
