use tessera_blocks::config::BlockRef;
use tessera_blocks::{BlockCatalog, BlockId, ids};

use crate::config::{Fractal, GenerationConfig};

#[derive(Clone, Debug, PartialEq)]
pub struct FractalParams {
    pub octaves: u32,
    pub frequency: f32,
    pub amplitude: f32,
}

impl FractalParams {
    fn from_config(f: &Fractal) -> Self {
        Self {
            octaves: f.octaves.clamp(1, 8) as u32,
            frequency: finite_or(f.frequency, 0.01).max(0.0001),
            amplitude: finite_or(f.amplitude, 0.0),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CaveParams {
    pub enabled: bool,
    pub noise_scale: f32,
    pub threshold: f32,
    pub min_y: i32,
    pub max_y: i32,
    /// Cells within this many blocks below the surface are never carved.
    pub surface_buffer: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OreParams {
    pub id: BlockId,
    pub min_y: i32,
    pub max_y: i32,
    pub attempts: u32,
    pub vein_min: i32,
    pub vein_max: i32,
    pub replaceable: Vec<BlockId>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TreeParams {
    pub enabled: bool,
    pub chance: f32,
    pub near_sea_chance: f32,
    pub trunk_min: i32,
    pub trunk_max: i32,
}

/// Block ids the generator writes, resolved once against the catalog.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub air: BlockId,
    pub bedrock: BlockId,
    pub stone: BlockId,
    pub dirt: BlockId,
    pub grass: BlockId,
    pub sand: BlockId,
    pub water: BlockId,
    pub wood: BlockId,
    pub leaves: BlockId,
}

impl Palette {
    pub fn resolve(catalog: &BlockCatalog) -> Self {
        let id = |name: &str| resolve_block_id(catalog, name);
        Self {
            air: ids::AIR,
            bedrock: id("bedrock"),
            stone: id("stone"),
            dirt: id("dirt"),
            grass: id("grass"),
            sand: id("sand"),
            water: id("water"),
            wood: id("wood"),
            leaves: id("leaves"),
        }
    }
}

// Flattened, normalized snapshot of GenerationConfig used by the generator loops
#[derive(Clone, Debug, PartialEq)]
pub struct GenParams {
    pub sea_level: i32,
    pub base_height: f32,
    pub detail: FractalParams,
    pub hills: FractalParams,
    pub persistence: f32,
    pub lacunarity: f32,
    pub beach_margin: i32,
    pub soil_depth: i32,
    pub caves: CaveParams,
    pub ores: Vec<OreParams>,
    pub trees: TreeParams,
    pub palette: Palette,
}

impl GenParams {
    /// Normalizes `cfg` for a world `size_y` cells tall. Never fails: bad values are clamped.
    pub fn from_config(
        cfg: &GenerationConfig,
        size_y: usize,
        sea_level: i32,
        catalog: &BlockCatalog,
    ) -> Self {
        let top = size_y.saturating_sub(1) as i32;
        let palette = Palette::resolve(catalog);

        let c = &cfg.caves;
        let (cave_lo, cave_hi) = band(c.min_y, c.max_y, top);
        let caves = CaveParams {
            enabled: c.enabled,
            noise_scale: finite_or(c.noise_scale, 0.0001).max(0.0001),
            threshold: finite_or(c.threshold, -1.0).clamp(-1.0, 1.0),
            min_y: cave_lo,
            max_y: cave_hi,
            surface_buffer: if c.protect_surface {
                cfg.terrain.soil_depth.max(0)
            } else {
                0
            },
        };

        let ores = cfg
            .ores
            .iter()
            .filter_map(|o| {
                let Some(id) = catalog.resolve(&o.id) else {
                    log::warn!("worldgen: unknown ore block {:?} skipped", o.id);
                    return None;
                };
                let (min_y, max_y) = band(o.min_y, o.max_y, top);
                let vein_min = o.vein_size_min.max(1);
                let replaceable = match &o.replaceable {
                    Some(list) if !list.is_empty() => list.iter().map(|r| resolve_ref(catalog, r)).collect(),
                    _ => vec![palette.stone],
                };
                Some(OreParams {
                    id,
                    min_y,
                    max_y,
                    attempts: o.attempts_per_chunk.max(0) as u32,
                    vein_min,
                    vein_max: o.vein_size_max.max(vein_min),
                    replaceable,
                })
            })
            .collect();

        let t = &cfg.trees;
        let trunk_min = t.trunk_min.max(1);
        let trees = TreeParams {
            enabled: t.enabled,
            chance: finite_or(t.chance, 0.0).clamp(0.0, 1.0),
            near_sea_chance: finite_or(t.near_sea_chance, 0.0).clamp(0.0, 1.0),
            trunk_min,
            trunk_max: t.trunk_max.max(trunk_min),
        };

        let tc = &cfg.terrain;
        Self {
            sea_level,
            base_height: finite_or(tc.base_height, 16.0),
            detail: FractalParams::from_config(&tc.detail),
            hills: FractalParams::from_config(&tc.hills),
            persistence: finite_or(tc.persistence, 0.5),
            lacunarity: finite_or(tc.lacunarity, 2.0),
            beach_margin: tc.beach_margin,
            soil_depth: tc.soil_depth.max(0),
            caves,
            ores,
            trees,
            palette,
        }
    }
}

/// Orders a `[a, b]` band and clamps both ends into `[0, top]`.
fn band(a: i32, b: i32, top: i32) -> (i32, i32) {
    let a = a.clamp(0, top);
    let b = b.clamp(0, top);
    (a.min(b), a.max(b))
}

#[inline]
fn finite_or(v: f32, fallback: f32) -> f32 {
    if v.is_finite() { v } else { fallback }
}

fn resolve_block_id(catalog: &BlockCatalog, name: &str) -> BlockId {
    match catalog.id_by_name(name) {
        Some(id) => id,
        None => {
            log::warn!("worldgen: block '{name}' missing from catalog; using air");
            ids::AIR
        }
    }
}

fn resolve_ref(catalog: &BlockCatalog, r: &BlockRef) -> BlockId {
    match catalog.resolve(r) {
        Some(id) => id,
        None => {
            log::warn!("worldgen: replaceable block {r:?} unknown; using air");
            ids::AIR
        }
    }
}
