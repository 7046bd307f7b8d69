use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkCoord {
    pub cx: i32,
    pub cz: i32,
}

impl ChunkCoord {
    #[inline]
    pub const fn new(cx: i32, cz: i32) -> Self {
        Self { cx, cz }
    }

    #[inline]
    pub fn offset(self, dx: i32, dz: i32) -> Self {
        Self::new(self.cx + dx, self.cz + dz)
    }

    /// Chessboard distance in chunk units.
    #[inline]
    pub fn chebyshev(self, other: ChunkCoord) -> i32 {
        (self.cx - other.cx).abs().max((self.cz - other.cz).abs())
    }

    #[inline]
    pub fn key(self) -> ChunkKey {
        ChunkKey::from(self)
    }

    /// The four horizontal neighbors.
    pub fn neighbors4(self) -> [ChunkCoord; 4] {
        [
            self.offset(-1, 0),
            self.offset(1, 0),
            self.offset(0, -1),
            self.offset(0, 1),
        ]
    }
}

impl From<(i32, i32)> for ChunkCoord {
    fn from(value: (i32, i32)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl fmt::Display for ChunkCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.cx, self.cz)
    }
}

/// Packed `(cx, cz)`: high 32 bits hold `cx`, low 32 bits hold `cz`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkKey(pub u64);

impl ChunkKey {
    #[inline]
    pub const fn new(cx: i32, cz: i32) -> Self {
        ChunkKey(((cx as u32 as u64) << 32) | (cz as u32 as u64))
    }

    #[inline]
    pub const fn cx(self) -> i32 {
        (self.0 >> 32) as u32 as i32
    }

    #[inline]
    pub const fn cz(self) -> i32 {
        self.0 as u32 as i32
    }

    #[inline]
    pub const fn coord(self) -> ChunkCoord {
        ChunkCoord::new(self.cx(), self.cz())
    }
}

impl From<ChunkCoord> for ChunkKey {
    fn from(c: ChunkCoord) -> Self {
        ChunkKey::new(c.cx, c.cz)
    }
}

impl fmt::Display for ChunkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.coord(), f)
    }
}
