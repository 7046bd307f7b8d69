use tessera_blocks::{BlockCatalog, BlockDef, BlockId, ItemId, ToolId};
use tessera_rng::SeededRng;

pub const BASE_SECONDS: f32 = 0.75;
pub const INEFFECTIVE_MULTIPLIER: f32 = 3.5;
pub const MIN_BREAK_SECONDS: f32 = 0.15;
const MIN_EFFICIENCY: f32 = 0.1;
const HAND_EFFICIENCY: f32 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Drop {
    pub item: ItemId,
    pub count: u32,
}

fn tool_satisfies(def: &BlockDef, tool: Option<ToolId>) -> bool {
    let Some(required) = def.required_tool else {
        return true;
    };
    match tool {
        Some(t) => {
            let td = t.def();
            td.tool_type == required && td.tier >= def.required_tier
        }
        None => false,
    }
}

/// Seconds to break `block`; `INFINITY` when it cannot be broken.
pub fn break_time(catalog: &BlockCatalog, block: BlockId, tool: Option<ToolId>) -> f32 {
    let Some(def) = catalog.get(block) else {
        return f32::INFINITY;
    };
    if !def.breakable || def.hardness.is_infinite() {
        return f32::INFINITY;
    }
    if def.hardness <= 0.0 || def.hardness.is_nan() {
        return 0.0;
    }
    let base = BASE_SECONDS * def.hardness;
    let seconds = if tool_satisfies(def, tool) {
        let efficiency = tool.map_or(HAND_EFFICIENCY, |t| t.def().efficiency);
        base / efficiency.max(MIN_EFFICIENCY)
    } else {
        base * INEFFECTIVE_MULTIPLIER
    };
    seconds.max(MIN_BREAK_SECONDS)
}

/// True when the block needs no tool, or the tool's type matches and its tier is high enough.
pub fn is_tool_effective(catalog: &BlockCatalog, block: BlockId, tool: Option<ToolId>) -> bool {
    catalog.get(block).is_some_and(|def| tool_satisfies(def, tool))
}

/// Items produced by breaking `block`. Rolls consume `rng` in drop-table order, so a given
/// block, tool and rng state always yield the same result.
pub fn resolve_drops(
    catalog: &BlockCatalog,
    block: BlockId,
    tool: Option<ToolId>,
    rng: &mut SeededRng,
) -> Vec<Drop> {
    let Some(def) = catalog.get(block) else {
        return Vec::new();
    };
    if def.is_air() || !def.breakable {
        return Vec::new();
    }
    if def.required_tool.is_some() && !tool_satisfies(def, tool) {
        return Vec::new();
    }
    if def.drops.is_empty() {
        return vec![Drop {
            item: ItemId::Block(block),
            count: 1,
        }];
    }
    let mut out = Vec::new();
    for entry in &def.drops {
        let e = entry.normalized();
        if e.chance < 1.0 && rng.float() > e.chance as f64 {
            continue;
        }
        let count = rng.int(e.min, e.max);
        if count > 0 {
            out.push(Drop {
                item: e.item,
                count: count as u32,
            });
        }
    }
    out
}
