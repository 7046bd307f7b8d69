use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use crate::config::{BlockConfig, BlockRef, CatalogConfig, DropConfig, ItemRef, TilesConfig};
use crate::tools::{ToolId, ToolType};
use crate::types::{BlockId, FaceRole, ItemId, RenderFaces, ids};

const DEFAULT_HARDNESS: f32 = 1.0;

#[derive(Clone, Debug, PartialEq)]
pub struct DropEntry {
    pub item: ItemId,
    pub min: i32,
    pub max: i32,
    pub chance: f32,
}

impl DropEntry {
    /// Chance clamped to `[0, 1]`, counts ordered and floored at zero.
    pub fn normalized(&self) -> DropEntry {
        let chance = if self.chance.is_finite() {
            self.chance.clamp(0.0, 1.0)
        } else {
            1.0
        };
        DropEntry {
            item: self.item,
            min: self.min.min(self.max).max(0),
            max: self.min.max(self.max).max(0),
            chance,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BlockDef {
    pub id: BlockId,
    pub name: String,
    pub solid: bool,
    pub transparent: bool,
    pub occludes: bool,
    pub emit_light: u8,
    /// Break-time scalar; `INFINITY` for unbreakable blocks.
    pub hardness: f32,
    pub breakable: bool,
    pub required_tool: Option<ToolType>,
    pub required_tier: u8,
    pub drops: Vec<DropEntry>,
    /// Tile per `FaceRole`, already resolved against the `all` fallback.
    pub tiles: [u16; 3],
    pub render_faces: RenderFaces,
    pub pickable: bool,
}

impl BlockDef {
    #[inline]
    pub fn tile(&self, role: FaceRole) -> u16 {
        self.tiles[role.index()]
    }

    #[inline]
    pub fn is_air(&self) -> bool {
        self.id == ids::AIR
    }

    fn placeholder(id: BlockId) -> Self {
        BlockDef {
            id,
            name: "unknown".into(),
            solid: true,
            transparent: false,
            occludes: true,
            emit_light: 0,
            hardness: DEFAULT_HARDNESS,
            breakable: true,
            required_tool: None,
            required_tier: 0,
            drops: Vec::new(),
            tiles: [0; 3],
            render_faces: RenderFaces::All,
            pickable: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct BlockCatalog {
    defs: Vec<BlockDef>,
    by_name: HashMap<String, BlockId>,
    placeholder: BlockDef,
}

impl BlockCatalog {
    /// The stock catalog (air through diamond ore).
    pub fn builtin() -> Self {
        Self::from_defs(crate::builtin::defs())
    }

    fn from_defs(defs: Vec<BlockDef>) -> Self {
        let by_name = defs.iter().map(|d| (d.name.clone(), d.id)).collect();
        BlockCatalog {
            defs,
            by_name,
            placeholder: BlockDef::placeholder(BlockId::MAX),
        }
    }

    pub fn from_toml_str(src: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: CatalogConfig = toml::from_str(src)?;
        Self::from_config(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let src = fs::read_to_string(path)?;
        Self::from_toml_str(&src)
    }

    pub fn from_config(cfg: CatalogConfig) -> Result<Self, Box<dyn Error>> {
        let mut slots: Vec<Option<BlockConfig>> = Vec::new();
        for (i, block) in cfg.blocks.into_iter().enumerate() {
            let id = block.id.unwrap_or(i as u16) as usize;
            if slots.len() <= id {
                slots.resize(id + 1, None);
            }
            if let Some(prev) = &slots[id] {
                return Err(format!("block id {id} used by both '{}' and '{}'", prev.name, block.name).into());
            }
            slots[id] = Some(block);
        }
        match slots.first() {
            Some(Some(air)) if !air.solid && air.occludes != Some(true) => {}
            _ => return Err("block id 0 must be a non-solid, non-occluding air entry".into()),
        }

        let names: HashMap<String, BlockId> = slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|b| (b.name.clone(), i as BlockId)))
            .collect();

        let defs = slots
            .into_iter()
            .enumerate()
            .map(|(i, slot)| match slot {
                Some(block) => compile_block(i as BlockId, block, &names, i),
                None => {
                    log::warn!("block catalog: id {i} has no entry; using placeholder");
                    BlockDef::placeholder(i as BlockId)
                }
            })
            .collect::<Vec<_>>();
        let count = defs.len();
        let cat = Self::from_defs(defs);
        log::debug!("block catalog compiled with {count} entries");
        Ok(cat)
    }

    #[inline]
    pub fn get(&self, id: BlockId) -> Option<&BlockDef> {
        self.defs.get(id as usize)
    }

    /// Definition for `id`, or an opaque placeholder for ids outside the table.
    #[inline]
    pub fn def(&self, id: BlockId) -> &BlockDef {
        self.defs.get(id as usize).unwrap_or(&self.placeholder)
    }

    pub fn id_by_name(&self, name: &str) -> Option<BlockId> {
        self.by_name.get(name).copied()
    }

    pub fn resolve(&self, r: &BlockRef) -> Option<BlockId> {
        match r {
            BlockRef::Id(id) => self.get(*id).map(|d| d.id),
            BlockRef::Name(n) => self.id_by_name(n),
        }
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BlockDef> {
        self.defs.iter()
    }

    #[inline]
    pub fn is_solid(&self, id: BlockId) -> bool {
        self.def(id).solid
    }

    #[inline]
    pub fn occludes(&self, id: BlockId) -> bool {
        self.def(id).occludes
    }

    #[inline]
    pub fn emit_light(&self, id: BlockId) -> u8 {
        self.def(id).emit_light
    }
}

fn compile_block(
    id: BlockId,
    b: BlockConfig,
    names: &HashMap<String, BlockId>,
    index: usize,
) -> BlockDef {
    let unbreakable = b.breakable == Some(false) || b.hardness == Some(f32::INFINITY);
    let hardness = if unbreakable {
        f32::INFINITY
    } else {
        match b.hardness {
            Some(h) if h.is_finite() => h.max(0.0),
            _ => DEFAULT_HARDNESS,
        }
    };
    let drops = b
        .drops
        .iter()
        .filter_map(|d| compile_drop(d, names, &b.name))
        .collect();
    if b.emit_light > 15 {
        log::warn!("block '{}' (#{index}) emit_light {} clamped to 15", b.name, b.emit_light);
    }
    BlockDef {
        id,
        solid: b.solid,
        transparent: b.transparent,
        occludes: b.occludes.unwrap_or(b.solid),
        emit_light: b.emit_light.min(15),
        hardness,
        breakable: !unbreakable,
        required_tool: b.required_tool,
        required_tier: b.required_tier,
        drops,
        tiles: compile_tiles(&b.tiles),
        render_faces: b.render_faces,
        pickable: b.pickable.unwrap_or(id != ids::AIR),
        name: b.name,
    }
}

fn compile_tiles(t: &TilesConfig) -> [u16; 3] {
    let all = t.all.unwrap_or(0);
    let mut out = [all; 3];
    out[FaceRole::Top.index()] = t.top.unwrap_or(all);
    out[FaceRole::Bottom.index()] = t.bottom.unwrap_or(all);
    out[FaceRole::Side.index()] = t.side.unwrap_or(all);
    out
}

fn compile_drop(d: &DropConfig, names: &HashMap<String, BlockId>, owner: &str) -> Option<DropEntry> {
    let item = match &d.item {
        ItemRef::Id(id) => ItemId::Block(*id),
        ItemRef::Name(n) => match names.get(n) {
            Some(id) => ItemId::Block(*id),
            None => match ToolId::from_key(n) {
                Some(t) => ItemId::Tool(t),
                None => {
                    log::warn!("block '{owner}': unknown drop item '{n}' skipped");
                    return None;
                }
            },
        },
    };
    Some(DropEntry {
        item,
        min: d.min,
        max: d.max.unwrap_or(d.min),
        chance: d.chance,
    })
}
