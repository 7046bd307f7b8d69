use std::collections::HashMap;

use tessera_blocks::{BlockCatalog, BlockId, ids};
use tessera_chunk::BlockAccess;
use tessera_edit::pick;
use tessera_geom::{IVec3, Vec3};

struct Cells {
    catalog: BlockCatalog,
    cells: HashMap<(i32, i32, i32), BlockId>,
}

impl Cells {
    fn with(cells: &[(i32, i32, i32, BlockId)]) -> Self {
        Cells {
            catalog: BlockCatalog::builtin(),
            cells: cells.iter().map(|&(x, y, z, id)| ((x, y, z), id)).collect(),
        }
    }
}

impl BlockAccess for Cells {
    fn catalog(&self) -> &BlockCatalog {
        &self.catalog
    }

    fn block_at(&self, wx: i32, wy: i32, wz: i32) -> BlockId {
        self.cells.get(&(wx, wy, wz)).copied().unwrap_or(ids::AIR)
    }
}

#[test]
fn hits_block_from_outside_with_entry_distance() {
    let w = Cells::with(&[(0, 0, 0, ids::STONE)]);
    let hit = pick(&w, Vec3::new(0.5, 0.5, -3.0), Vec3::new(0.0, 0.0, 1.0), 10.0).unwrap();
    assert_eq!(hit.block, IVec3::new(0, 0, 0));
    assert_eq!(hit.normal, IVec3::new(0, 0, -1));
    assert_eq!(hit.id, ids::STONE);
    assert!((hit.t - 3.0).abs() < 1e-4);
    assert_eq!(hit.place_cell(), IVec3::new(0, 0, -1));
}

#[test]
fn hits_from_above_with_upward_normal() {
    let w = Cells::with(&[(2, 0, 2, ids::DIRT)]);
    let hit = pick(&w, Vec3::new(2.5, 5.5, 2.5), Vec3::new(0.0, -1.0, 0.0), 10.0).unwrap();
    assert_eq!(hit.block, IVec3::new(2, 0, 2));
    assert_eq!(hit.normal, IVec3::new(0, 1, 0));
    assert!((hit.t - 4.5).abs() < 1e-4);
}

#[test]
fn diagonal_ray_finds_target() {
    let w = Cells::with(&[(3, 3, 3, ids::STONE)]);
    let origin = Vec3::new(0.5, 0.5, 0.5);
    let hit = pick(&w, origin, Vec3::new(1.0, 1.0, 1.0), 20.0).unwrap();
    assert_eq!(hit.block, IVec3::new(3, 3, 3));
    assert!(hit.t > 4.0 && hit.t < 5.3);
}

#[test]
fn air_only_ray_misses() {
    let w = Cells::with(&[(0, 0, 10, ids::STONE)]);
    assert!(pick(&w, Vec3::new(0.5, 0.5, 0.5), Vec3::new(0.0, 0.0, 1.0), 5.0).is_none());
    assert!(pick(&w, Vec3::new(0.5, 0.5, 0.5), Vec3::new(1.0, 0.0, 0.0), 50.0).is_none());
}

#[test]
fn hit_beyond_max_distance_is_ignored() {
    let w = Cells::with(&[(0, 0, 5, ids::STONE)]);
    let d = Vec3::new(0.0, 0.0, 1.0);
    assert!(pick(&w, Vec3::new(0.5, 0.5, 0.5), d, 4.0).is_none());
    assert!(pick(&w, Vec3::new(0.5, 0.5, 0.5), d, 4.5).is_some());
}

#[test]
fn starting_inside_a_block_hits_immediately() {
    let w = Cells::with(&[(1, 1, 1, ids::STONE)]);
    let hit = pick(&w, Vec3::new(1.2, 1.7, 1.4), Vec3::new(1.0, 0.0, 0.0), 5.0).unwrap();
    assert_eq!(hit.block, IVec3::new(1, 1, 1));
    assert_eq!(hit.normal, IVec3::new(0, 1, 0));
    assert_eq!(hit.t, 0.0);
}

#[test]
fn zero_direction_does_not_march() {
    let w = Cells::with(&[(0, 0, 1, ids::STONE)]);
    assert!(pick(&w, Vec3::new(0.5, 0.5, 0.5), Vec3::ZERO, 10.0).is_none());
}

#[test]
fn water_is_transparent_to_picking() {
    let w = Cells::with(&[(0, 0, 1, ids::WATER), (0, 0, 2, ids::WATER), (0, 0, 3, ids::SAND)]);
    let hit = pick(&w, Vec3::new(0.5, 0.5, 0.5), Vec3::new(0.0, 0.0, 1.0), 10.0).unwrap();
    assert_eq!(hit.block, IVec3::new(0, 0, 3));
    assert_eq!(hit.id, ids::SAND);
}

#[test]
fn negative_direction_crosses_into_negative_cells() {
    let w = Cells::with(&[(-3, 0, 0, ids::BRICK)]);
    let hit = pick(&w, Vec3::new(0.5, 0.5, 0.5), Vec3::new(-1.0, 0.0, 0.0), 10.0).unwrap();
    assert_eq!(hit.block, IVec3::new(-3, 0, 0));
    assert_eq!(hit.normal, IVec3::new(1, 0, 0));
    assert!((hit.t - 2.5).abs() < 1e-4);
}
