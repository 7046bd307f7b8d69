use super::*;
use tessera_blocks::{BlockCatalog, ids};
use tessera_geom::Vec3;

#[test]
fn tile_uv_stays_inside_its_tile() {
    let step = 1.0 / ATLAS_TILES_PER_ROW as f32;
    for tile in [0u16, 1, 15, 16, 17, 255] {
        let tx = (tile % ATLAS_TILES_PER_ROW) as f32 * step;
        let ty = (tile / ATLAS_TILES_PER_ROW) as f32 * step;
        for (u, v) in [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)] {
            let [au, av] = tile_uv(tile, u, v);
            assert!(au > tx && au < tx + step, "tile {tile} u {au}");
            let flipped = 1.0 - av;
            assert!(flipped > ty && flipped < ty + step, "tile {tile} v {av}");
        }
    }
}

#[test]
fn tile_uv_applies_inset() {
    let [u, v] = tile_uv(0, 0.0, 0.0);
    assert!((u - UV_INSET / 16.0).abs() < 1e-6);
    assert!((v - (1.0 - UV_INSET / 16.0)).abs() < 1e-6);
}

#[test]
fn visibility_rules() {
    let cat = BlockCatalog::builtin();
    assert!(face_visible(&cat, ids::STONE, ids::AIR));
    assert!(!face_visible(&cat, ids::STONE, ids::DIRT));
    assert!(face_visible(&cat, ids::STONE, ids::GLASS));
    assert!(face_visible(&cat, ids::STONE, ids::WATER));
    assert!(!face_visible(&cat, ids::GLASS, ids::GLASS));
    assert!(!face_visible(&cat, ids::WATER, ids::WATER));
    assert!(face_visible(&cat, ids::GLASS, ids::WATER));
}

#[test]
fn add_quad_uv_orients_triangles_along_normal() {
    let n = Vec3::UP;
    let ccw = [
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.0, 1.0, 1.0),
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(1.0, 1.0, 0.0),
    ];
    let mut cw = ccw;
    cw.swap(1, 3);
    let uvs = [[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]];
    for verts in [ccw, cw] {
        let mut mb = MeshBuild::default();
        mb.add_quad_uv(verts, n, uvs, [255; 4]);
        assert_eq!(mb.quad_count(), 1);
        let p = |i: u32| {
            let i = i as usize * 3;
            Vec3::new(mb.pos[i], mb.pos[i + 1], mb.pos[i + 2])
        };
        for tri in mb.idx.chunks(3) {
            let (a, b, c) = (p(tri[0]), p(tri[1]), p(tri[2]));
            assert!((b - a).cross(c - a).dot(n) > 0.0);
        }
    }
}

#[test]
fn face_table_is_consistent() {
    for (i, f) in Face::ALL.iter().enumerate() {
        assert_eq!(f.index(), i);
        assert_eq!(Face::from_index(i), Some(*f));
    }
    assert_eq!(Face::from_index(6), None);
}
