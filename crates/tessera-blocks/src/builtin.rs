use crate::catalog::{BlockDef, DropEntry};
use crate::tools::ToolType;
use crate::types::{BlockId, ItemId, RenderFaces, ids};

fn cube(id: BlockId, name: &str, tile: u16, hardness: f32) -> BlockDef {
    BlockDef {
        id,
        name: name.into(),
        solid: true,
        transparent: false,
        occludes: true,
        emit_light: 0,
        hardness,
        breakable: true,
        required_tool: None,
        required_tier: 0,
        drops: Vec::new(),
        tiles: [tile; 3],
        render_faces: RenderFaces::All,
        pickable: true,
    }
}

impl BlockDef {
    fn see_through(mut self) -> Self {
        self.transparent = true;
        self.occludes = false;
        self
    }

    fn non_solid(mut self) -> Self {
        self.solid = false;
        self
    }

    fn tiles(mut self, top: u16, bottom: u16, side: u16) -> Self {
        self.tiles = [top, bottom, side];
        self
    }

    fn needs(mut self, tool: ToolType, tier: u8) -> Self {
        self.required_tool = Some(tool);
        self.required_tier = tier;
        self
    }

    fn drops_self(mut self) -> Self {
        self.drops = vec![DropEntry {
            item: ItemId::Block(self.id),
            min: 1,
            max: 1,
            chance: 1.0,
        }];
        self
    }
}

pub(crate) fn defs() -> Vec<BlockDef> {
    let mut air = cube(ids::AIR, "air", 0, 0.0).see_through().non_solid();
    air.pickable = false;
    let mut water = cube(ids::WATER, "water", 5, 0.0).see_through().non_solid();
    water.render_faces = RenderFaces::TopOnly;
    water.pickable = false;
    let mut torch = cube(ids::TORCH, "torch", 13, 0.2).see_through().non_solid();
    torch.emit_light = 14;
    let mut bedrock = cube(ids::BEDROCK, "bedrock", 14, f32::INFINITY);
    bedrock.breakable = false;

    vec![
        air,
        cube(ids::GRASS, "grass", 0, 0.9).tiles(1, 3, 2),
        cube(ids::DIRT, "dirt", 3, 0.8),
        cube(ids::STONE, "stone", 4, 3.0).needs(ToolType::Pickaxe, 1),
        water,
        cube(ids::SAND, "sand", 6, 0.7),
        cube(ids::WOOD, "wood", 0, 1.8).tiles(8, 8, 7),
        cube(ids::LEAVES, "leaves", 9, 0.4).see_through(),
        cube(ids::PLANKS, "planks", 10, 1.5),
        cube(ids::BRICK, "brick", 11, 3.2),
        cube(ids::GLASS, "glass", 12, 0.6).see_through(),
        torch,
        bedrock,
        cube(ids::COAL_ORE, "coal_ore", 15, 3.2).needs(ToolType::Pickaxe, 1).drops_self(),
        cube(ids::IRON_ORE, "iron_ore", 16, 3.6).needs(ToolType::Pickaxe, 2).drops_self(),
        cube(ids::GOLD_ORE, "gold_ore", 17, 3.8).needs(ToolType::Pickaxe, 2).drops_self(),
        cube(ids::DIAMOND_ORE, "diamond_ore", 18, 4.2).needs(ToolType::Pickaxe, 3).drops_self(),
    ]
}
