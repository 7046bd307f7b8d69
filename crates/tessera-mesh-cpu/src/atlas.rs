pub const ATLAS_TILES_PER_ROW: u16 = 16;
/// Inward inset in tile units; keeps samples off the neighboring tile's texels.
pub const UV_INSET: f32 = 0.001;

/// Maps an in-tile coordinate in `[0,1]^2` to atlas UV space. V is flipped so row 0 sits at the top.
#[inline]
pub fn tile_uv(tile: u16, u: f32, v: f32) -> [f32; 2] {
    let tile_size = 1.0 / ATLAS_TILES_PER_ROW as f32;
    let tx = (tile % ATLAS_TILES_PER_ROW) as f32;
    let ty = (tile / ATLAS_TILES_PER_ROW) as f32;
    let lerp = |t: f32| UV_INSET + (1.0 - 2.0 * UV_INSET) * t;
    [
        (tx + lerp(u)) * tile_size,
        1.0 - (ty + lerp(v)) * tile_size,
    ]
}
