#[inline]
pub fn mix32(mut n: u32) -> u32 {
    n ^= n >> 16;
    n = n.wrapping_mul(0x7feb_352d);
    n ^= n >> 15;
    n = n.wrapping_mul(0x846c_a68b);
    n ^= n >> 16;
    n
}

/// FNV-1a over UTF-16 code units.
pub fn hash_str(s: &str) -> u32 {
    let mut h: u32 = 2_166_136_261;
    for unit in s.encode_utf16() {
        h ^= unit as u32;
        h = h.wrapping_mul(16_777_619);
    }
    h
}

#[inline]
pub fn hash2(ix: i32, iz: i32, seed: u32) -> u32 {
    let h = (ix as u32).wrapping_mul(0x85eb_ca6b)
        ^ (iz as u32).wrapping_mul(0xc2b2_ae35)
        ^ seed.wrapping_mul(0x27d4_eb2d);
    mix32(h)
}

/// Column hash mapped to `[0, 1)` using the low 24 bits.
#[inline]
pub fn hash2_01(ix: i32, iz: i32, seed: u32) -> f32 {
    ((hash2(ix, iz, seed) & 0x00FF_FFFF) as f32) / 16_777_216.0
}
