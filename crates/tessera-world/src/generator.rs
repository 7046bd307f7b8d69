use tessera_blocks::{BlockCatalog, BlockId};
use tessera_chunk::{ChunkBuf, ChunkCoord, ChunkSize};
use tessera_rng::{SeededRng, hash2_01};

use crate::config::GenerationConfig;
use crate::noise::Fbm;
use crate::params::{GenParams, OreParams};

const CAVE_OCTAVES: u32 = 4;
// Trees this close to the ceiling are skipped so the canopy fits
const TREE_CLEARANCE: i32 = 8;
const LEAF_RADIUS: i32 = 2;
const LEAF_REACH: i32 = 4;

/// Pure function of `(seed, chunk coordinate)`; never reads other chunks.
pub struct TerrainGenerator {
    seed: u32,
    size: ChunkSize,
    params: GenParams,
    detail: Fbm,
    hills: Fbm,
    caves: Fbm,
}

struct Column {
    height: i32,
    near_sea: bool,
}

impl TerrainGenerator {
    pub fn new(
        seed: u32,
        size: ChunkSize,
        cfg: &GenerationConfig,
        sea_level: i32,
        catalog: &BlockCatalog,
    ) -> Self {
        let params = GenParams::from_config(cfg, size.y, sea_level, catalog);
        Self::from_params(seed, size, params)
    }

    pub fn from_params(seed: u32, size: ChunkSize, params: GenParams) -> Self {
        let s = seed as i32;
        let (pers, lac) = (params.persistence, params.lacunarity);
        let detail = Fbm::from_params(s, &params.detail, pers, lac);
        let hills = Fbm::from_params(s ^ 99_173, &params.hills, pers, lac);
        let caves = Fbm::new(s ^ 41_337, CAVE_OCTAVES, params.caves.noise_scale, 0.5, 2.0);
        Self {
            seed,
            size,
            params,
            detail,
            hills,
            caves,
        }
    }

    #[inline]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    #[inline]
    pub fn size(&self) -> ChunkSize {
        self.size
    }

    #[inline]
    pub fn params(&self) -> &GenParams {
        &self.params
    }

    /// Surface height of world column `(wx, wz)`, clamped to `[2, size.y - 2]`.
    pub fn height_at(&self, wx: i32, wz: i32) -> i32 {
        let (x, z) = (wx as f32, wz as f32);
        let n = self.detail.sample2(x, z);
        let hills = self.hills.sample2(x, z);
        let h = (self.params.base_height + n * self.params.detail.amplitude + hills * self.params.hills.amplitude)
            .floor() as i32;
        let top = (self.size.y as i32 - 2).max(2);
        h.clamp(2, top)
    }

    pub fn generate(&self, coord: ChunkCoord) -> ChunkBuf {
        let mut buf = ChunkBuf::new(coord, self.size);
        let columns = self.heightmap(coord);
        self.fill_columns(&mut buf, &columns);
        self.carve_caves(&mut buf, &columns);
        self.place_ores(&mut buf);
        self.place_trees(&mut buf, &columns);
        buf
    }

    fn heightmap(&self, coord: ChunkCoord) -> Vec<Column> {
        let (sx, sz) = (self.size.x, self.size.z);
        let mut cols = Vec::with_capacity(sx * sz);
        for z in 0..sz {
            for x in 0..sx {
                let (wx, wz) = self.size.chunk_to_world(coord, x, z);
                let height = self.height_at(wx, wz);
                cols.push(Column {
                    height,
                    near_sea: height <= self.params.sea_level + self.params.beach_margin,
                });
            }
        }
        cols
    }

    fn surface_block(&self, y: i32, col: &Column) -> BlockId {
        let p = &self.params.palette;
        if y == 0 {
            return p.bedrock;
        }
        if y > col.height {
            return if y <= self.params.sea_level { p.water } else { p.air };
        }
        if y == col.height {
            return if col.near_sea { p.sand } else { p.grass };
        }
        if y >= col.height - self.params.soil_depth {
            return if col.near_sea { p.sand } else { p.dirt };
        }
        p.stone
    }

    fn fill_columns(&self, buf: &mut ChunkBuf, cols: &[Column]) {
        let (sx, sy, sz) = (self.size.x, self.size.y, self.size.z);
        for z in 0..sz {
            for x in 0..sx {
                let col = &cols[x + sx * z];
                for y in 0..sy {
                    let i = buf.idx(x, y, z);
                    buf.blocks[i] = self.surface_block(y as i32, col);
                }
            }
        }
    }

    fn carve_caves(&self, buf: &mut ChunkBuf, cols: &[Column]) {
        let c = &self.params.caves;
        if !c.enabled || self.size.y == 0 {
            return;
        }
        let p = &self.params.palette;
        let (sx, sz) = (self.size.x, self.size.z);
        let (bx, bz) = buf.origin();
        for y in c.min_y..=c.max_y {
            for z in 0..sz {
                for x in 0..sx {
                    let col = &cols[x + sx * z];
                    if c.surface_buffer > 0 && y >= col.height - c.surface_buffer {
                        continue;
                    }
                    let i = buf.idx(x, y as usize, z);
                    let existing = buf.blocks[i];
                    if existing == p.air || existing == p.bedrock || existing == p.water {
                        continue;
                    }
                    let (wx, wz) = (bx + x as i32, bz + z as i32);
                    if self.caves.sample3(wx as f32, y as f32, wz as f32) > c.threshold {
                        buf.blocks[i] = p.air;
                    }
                }
            }
        }
    }

    fn place_ores(&self, buf: &mut ChunkBuf) {
        if self.params.ores.is_empty() {
            return;
        }
        let chunk_rng = SeededRng::new(self.seed).fork(&format!("chunk:{}", buf.coord));
        for ore in &self.params.ores {
            let ore_rng = chunk_rng.fork(&format!("ore:{}", ore.id));
            for attempt in 0..ore.attempts {
                let mut rng = ore_rng.fork(attempt);
                self.walk_vein(buf, ore, &mut rng);
            }
        }
    }

    fn walk_vein(&self, buf: &mut ChunkBuf, ore: &OreParams, rng: &mut SeededRng) {
        let mut x = rng.int(0, self.size.x as i32 - 1);
        let mut z = rng.int(0, self.size.z as i32 - 1);
        let mut y = rng.int(ore.min_y, ore.max_y);
        let steps = rng.int(ore.vein_min, ore.vein_max);
        for _ in 0..steps {
            y = y.clamp(ore.min_y, ore.max_y);
            let existing = buf.get_local(x, y, z);
            if buf.in_bounds(x, y, z) && ore.replaceable.contains(&existing) {
                buf.set_local(x, y, z, ore.id);
            }
            match rng.int(0, 5) {
                0 => x += 1,
                1 => x -= 1,
                2 => y += 1,
                3 => y -= 1,
                4 => z += 1,
                _ => z -= 1,
            }
        }
    }

    fn place_trees(&self, buf: &mut ChunkBuf, cols: &[Column]) {
        let t = &self.params.trees;
        if !t.enabled {
            return;
        }
        let (sx, sz) = (self.size.x, self.size.z);
        for z in 0..sz {
            for x in 0..sx {
                let col = &cols[x + sx * z];
                let (wx, wz) = self.size.chunk_to_world(buf.coord, x, z);
                let chance = if col.near_sea { t.near_sea_chance } else { t.chance };
                if hash2_01(wx, wz, self.seed) < chance {
                    self.place_tree(buf, x as i32, col.height + 1, z as i32, wx, wz);
                }
            }
        }
    }

    fn place_tree(&self, buf: &mut ChunkBuf, lx: i32, y: i32, lz: i32, wx: i32, wz: i32) {
        let sy = self.size.y as i32;
        if y <= 0 || y >= sy - TREE_CLEARANCE {
            return;
        }
        if y <= self.params.sea_level + 1 {
            return;
        }
        let t = &self.params.trees;
        let p = &self.params.palette;
        let span = (t.trunk_max - t.trunk_min + 1) as f32;
        let trunk = t.trunk_min + (hash2_01(wx + 99, wz - 17, self.seed) * span) as i32;
        for ty in y..(y + trunk).min(sy) {
            buf.set_local(lx, ty, lz, p.wood);
        }

        // Leaves past the chunk edge are clipped
        let top = y + trunk;
        for dy in -LEAF_RADIUS..=LEAF_RADIUS {
            for dz in -LEAF_RADIUS..=LEAF_RADIUS {
                for dx in -LEAF_RADIUS..=LEAF_RADIUS {
                    if dx.abs() + dy.abs() + dz.abs() > LEAF_REACH {
                        continue;
                    }
                    let (px, py, pz) = (lx + dx, top + dy, lz + dz);
                    if buf.in_bounds(px, py, pz) && buf.get_local(px, py, pz) == p.air {
                        buf.set_local(px, py, pz, p.leaves);
                    }
                }
            }
        }
    }
}
