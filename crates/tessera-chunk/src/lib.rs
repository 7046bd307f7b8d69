//! Chunk storage: block ids plus sky and block light per cell.
#![forbid(unsafe_code)]

mod access;
mod coord;

pub use access::BlockAccess;
pub use coord::{ChunkCoord, ChunkKey};

use tessera_blocks::{BlockId, ids};

pub const MAX_LIGHT: u8 = 15;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum LightLayer {
    Sky,
    Block,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ChunkSize {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl ChunkSize {
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn volume(&self) -> usize {
        self.x * self.y * self.z
    }

    /// Chunk containing world column `(wx, wz)` and the local offsets within it.
    #[inline]
    pub fn world_to_chunk(&self, wx: i32, wz: i32) -> (ChunkCoord, usize, usize) {
        let (sx, sz) = (self.x as i32, self.z as i32);
        let coord = ChunkCoord::new(wx.div_euclid(sx), wz.div_euclid(sz));
        (coord, wx.rem_euclid(sx) as usize, wz.rem_euclid(sz) as usize)
    }

    #[inline]
    pub fn chunk_to_world(&self, coord: ChunkCoord, lx: usize, lz: usize) -> (i32, i32) {
        (
            coord.cx * self.x as i32 + lx as i32,
            coord.cz * self.z as i32 + lz as i32,
        )
    }
}

impl Default for ChunkSize {
    fn default() -> Self {
        ChunkSize::new(16, 64, 16)
    }
}

#[derive(Clone, Debug)]
pub struct ChunkBuf {
    pub coord: ChunkCoord,
    pub size: ChunkSize,
    pub blocks: Vec<BlockId>,
    pub sky: Vec<u8>,
    pub block_light: Vec<u8>,
}

impl ChunkBuf {
    /// All-air chunk with both light fields dark.
    pub fn new(coord: ChunkCoord, size: ChunkSize) -> Self {
        let n = size.volume();
        ChunkBuf {
            coord,
            size,
            blocks: vec![ids::AIR; n],
            sky: vec![0; n],
            block_light: vec![0; n],
        }
    }

    pub fn from_blocks_local(coord: ChunkCoord, size: ChunkSize, mut blocks: Vec<BlockId>) -> Self {
        let n = size.volume();
        if blocks.len() != n {
            blocks.resize(n, ids::AIR);
        }
        ChunkBuf {
            coord,
            size,
            blocks,
            sky: vec![0; n],
            block_light: vec![0; n],
        }
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize, z: usize) -> usize {
        x + self.size.x * (z + self.size.z * y)
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0
            && y >= 0
            && z >= 0
            && (x as usize) < self.size.x
            && (y as usize) < self.size.y
            && (z as usize) < self.size.z
    }

    /// Block at local coordinates; air outside the chunk.
    #[inline]
    pub fn get_local(&self, x: i32, y: i32, z: i32) -> BlockId {
        if !self.in_bounds(x, y, z) {
            return ids::AIR;
        }
        self.blocks[self.idx(x as usize, y as usize, z as usize)]
    }

    /// Returns false when the cell is outside the chunk.
    #[inline]
    pub fn set_local(&mut self, x: i32, y: i32, z: i32, id: BlockId) -> bool {
        if !self.in_bounds(x, y, z) {
            return false;
        }
        let i = self.idx(x as usize, y as usize, z as usize);
        self.blocks[i] = id;
        true
    }

    #[inline]
    pub fn light_local(&self, layer: LightLayer, x: i32, y: i32, z: i32) -> u8 {
        if !self.in_bounds(x, y, z) {
            return 0;
        }
        let i = self.idx(x as usize, y as usize, z as usize);
        match layer {
            LightLayer::Sky => self.sky[i],
            LightLayer::Block => self.block_light[i],
        }
    }

    /// Stores `level` clamped to `MAX_LIGHT`; returns whether the stored value changed.
    #[inline]
    pub fn set_light_local(&mut self, layer: LightLayer, x: i32, y: i32, z: i32, level: u8) -> bool {
        if !self.in_bounds(x, y, z) {
            return false;
        }
        let i = self.idx(x as usize, y as usize, z as usize);
        let slot = match layer {
            LightLayer::Sky => &mut self.sky[i],
            LightLayer::Block => &mut self.block_light[i],
        };
        let level = level.min(MAX_LIGHT);
        if *slot == level {
            return false;
        }
        *slot = level;
        true
    }

    #[inline]
    pub fn origin(&self) -> (i32, i32) {
        self.size.chunk_to_world(self.coord, 0, 0)
    }

    #[inline]
    pub fn contains_world(&self, wx: i32, wy: i32, wz: i32) -> bool {
        let (bx, bz) = self.origin();
        self.in_bounds(wx - bx, wy, wz - bz)
    }

    #[inline]
    pub fn get_world(&self, wx: i32, wy: i32, wz: i32) -> Option<BlockId> {
        if !self.contains_world(wx, wy, wz) {
            return None;
        }
        let (bx, bz) = self.origin();
        Some(self.get_local(wx - bx, wy, wz - bz))
    }

    #[inline]
    pub fn has_non_air(&self) -> bool {
        self.blocks.iter().any(|b| *b != ids::AIR)
    }
}
