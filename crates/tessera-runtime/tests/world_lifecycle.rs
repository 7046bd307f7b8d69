use tessera_blocks::config::BlockRef;
use tessera_blocks::ids;
use tessera_chunk::{ChunkKey, ChunkSize, LightLayer};
use tessera_runtime::{PerfBudgets, World, WorldOptions};
use tessera_world::{GenerationConfig, OreConfig};

fn world(seed: u32, view: i32) -> World {
    World::new(WorldOptions {
        seed,
        view_distance_chunks: view,
        chunk_size: ChunkSize::new(16, 48, 16),
        ..WorldOptions::default()
    })
}

fn blocks(w: &World, key: ChunkKey) -> Vec<u16> {
    w.chunk_by_key(key).map(|c| c.buf.blocks.clone()).unwrap_or_default()
}

#[test]
fn same_seed_same_world() {
    let mut a = world(99, 1);
    let mut b = world(99, 1);
    a.generate_initial_area(0, 0);
    b.generate_initial_area(0, 0);
    assert_eq!(a.chunk_keys(), b.chunk_keys());
    for key in a.chunk_keys() {
        assert_eq!(blocks(&a, key), blocks(&b, key));
    }
}

#[test]
fn load_order_does_not_change_chunks() {
    let mut a = world(5, 0);
    let mut b = world(5, 0);
    a.ensure_chunk(0, 0);
    a.ensure_chunk(1, 0);
    b.ensure_chunk(1, 0);
    b.ensure_chunk(0, 0);
    for key in [ChunkKey::new(0, 0), ChunkKey::new(1, 0)] {
        assert!(!blocks(&a, key).is_empty());
        assert_eq!(blocks(&a, key), blocks(&b, key));
    }
}

#[test]
fn ensure_chunk_is_idempotent() {
    let mut w = world(1, 0);
    assert!(w.ensure_chunk(2, -3));
    assert!(!w.ensure_chunk(2, -3));
    assert_eq!(w.chunk_count(), 1);
    assert_eq!(w.chunk_keys(), vec![ChunkKey::new(2, -3)]);
}

#[test]
fn initial_area_covers_view_square() {
    let mut w = world(1, 2);
    assert_eq!(w.generate_initial_area(0, 0), 25);
    assert_eq!(w.chunk_count(), 25);
    assert!(w.chunk_by_key(ChunkKey::new(-2, 2)).is_some());
    assert!(w.chunk_by_key(ChunkKey::new(3, 0)).is_none());
}

#[test]
fn ensure_chunks_around_uses_world_position() {
    let mut w = world(1, 0);
    assert_eq!(w.ensure_chunks_around(-0.5, 33.0), 1);
    assert_eq!(w.chunk_keys(), vec![ChunkKey::new(-1, 2)]);
}

#[test]
fn prune_drops_far_chunks_and_reports_them() {
    let mut w = World::new(WorldOptions {
        seed: 3,
        view_distance_chunks: 1,
        chunk_size: ChunkSize::new(16, 32, 16),
        budgets: Some(PerfBudgets {
            unload_margin: 0,
            ..PerfBudgets::default()
        }),
        ..WorldOptions::default()
    });
    w.generate_initial_area(0, 0);
    w.ensure_chunks_around(16.0 * 5.0 + 1.0, 0.0);
    assert_eq!(w.chunk_count(), 18);
    let removed = w.prune_far_chunks(16.0 * 5.0 + 1.0, 0.0);
    assert_eq!(removed.len(), 9);
    assert!(removed.windows(2).all(|p| p[0] < p[1]));
    assert!(removed.iter().all(|k| k.cx() <= 1));
    assert_eq!(w.chunk_count(), 9);
    assert!(w.prune_far_chunks(81.0, 0.0).is_empty());
}

#[test]
fn prune_keeps_unload_margin() {
    let mut w = world(3, 1);
    w.generate_initial_area(0, 0);
    // Default margin of 2 keeps everything within 3 chunks.
    assert!(w.prune_far_chunks(16.0 * 2.0, 0.0).is_empty());
    assert_eq!(w.prune_far_chunks(16.0 * 3.0, 0.0).len(), 3);
}

#[test]
fn loading_a_neighbor_dirties_existing_chunk() {
    let mut w = world(1, 0);
    w.ensure_chunk(0, 0);
    while !w.rebuild_dirty_chunks().is_empty() {}
    assert!(!w.is_dirty(ChunkKey::new(0, 0)));
    w.ensure_chunk(1, 0);
    assert!(w.is_dirty(ChunkKey::new(0, 0)));
    assert!(w.is_dirty(ChunkKey::new(1, 0)));
    assert!(w.chunk_by_key(ChunkKey::new(0, 0)).is_some_and(|c| c.dirty));
}

#[test]
fn rebuild_respects_per_tick_budget() {
    let mut w = world(1, 1);
    w.generate_initial_area(0, 0);
    assert_eq!(w.dirty_count(), 9);
    let first = w.rebuild_dirty_chunks();
    assert_eq!(first.len(), 4);
    assert_eq!(w.rebuild_dirty_chunks().len(), 4);
    assert_eq!(w.rebuild_dirty_chunks().len(), 1);
    assert!(w.rebuild_dirty_chunks().is_empty());
    assert_eq!(w.mesh_revision(), 9);
    for key in w.chunk_keys() {
        let c = w.chunk_by_key(key).unwrap();
        assert!(!c.dirty);
        assert!(c.mesh.as_ref().is_some_and(|m| !m.is_empty()));
    }
    assert_eq!(first[0], ChunkKey::new(-1, -1));
}

#[test]
fn rebuild_skips_unloaded_chunks() {
    let mut w = world(1, 0);
    w.ensure_chunk(0, 0);
    w.prune_far_chunks(16.0 * 10.0, 0.0);
    assert_eq!(w.chunk_count(), 0);
    assert!(w.rebuild_dirty_chunks().is_empty());
    assert_eq!(w.dirty_count(), 0);
}

#[test]
fn border_edit_dirties_neighbor() {
    let mut w = world(1, 1);
    w.generate_initial_area(0, 0);
    while !w.rebuild_dirty_chunks().is_empty() {}
    let top = w.generator().height_at(0, 4) + 1;
    assert!(w.apply_block_edit(0, top, 4, ids::PLANKS));
    assert_eq!(w.get_block(0, top, 4), ids::PLANKS);
    assert!(w.is_dirty(ChunkKey::new(0, 0)));
    assert!(w.is_dirty(ChunkKey::new(-1, 0)));
    assert!(!w.is_dirty(ChunkKey::new(1, 0)));
    assert!(!w.apply_block_edit(0, top, 4, ids::PLANKS));
}

#[test]
fn set_block_generates_missing_chunk() {
    let mut w = world(1, 0);
    assert_eq!(w.get_block(100, 5, 100), ids::AIR);
    assert!(w.set_block(100, 40, 100, ids::BRICK));
    assert_eq!(w.chunk_count(), 1);
    assert_eq!(w.get_block(100, 40, 100), ids::BRICK);
}

#[test]
fn reads_outside_height_are_air() {
    let mut w = world(1, 0);
    w.ensure_chunk(0, 0);
    assert_eq!(w.get_block(0, -1, 0), ids::AIR);
    assert_eq!(w.get_block(0, 48, 0), ids::AIR);
    assert_eq!(w.get_block(0, 0, 0), ids::BEDROCK);
}

#[test]
fn reversed_ore_band_is_contained() {
    let mut generation = GenerationConfig::default();
    let mut gold = OreConfig::new("gold_ore", 18, 6, 40, (2, 5));
    gold.replaceable = Some(vec![BlockRef::Name("stone".into())]);
    generation.ores = vec![gold];
    let mut w = World::new(WorldOptions {
        seed: 11,
        view_distance_chunks: 1,
        generation: Some(generation),
        ..WorldOptions::default()
    });
    w.generate_initial_area(0, 0);
    let size = w.chunk_size();
    let mut found = 0;
    for key in w.chunk_keys() {
        let buf = &w.chunk_by_key(key).unwrap().buf;
        for (i, &b) in buf.blocks.iter().enumerate() {
            if b == ids::GOLD_ORE {
                let y = i / (size.x * size.z);
                assert!((6..=18).contains(&y), "gold at y={y}");
                found += 1;
            }
        }
    }
    assert!(found > 0);
}

#[test]
fn zero_width_chunks_are_widened() {
    let mut w = World::new(WorldOptions {
        seed: 3,
        view_distance_chunks: 0,
        chunk_size: ChunkSize::new(0, 24, 0),
        ..WorldOptions::default()
    });
    assert_eq!(w.chunk_size(), ChunkSize::new(1, 24, 1));
    assert!(w.ensure_chunk(-2, 3));
    assert_eq!(w.get_block(-2, 0, 3), ids::BEDROCK);
    assert!(w.apply_block_edit(-2, 20, 3, ids::TORCH));
    w.process_light_queue(None);
    assert_eq!(w.get_light(LightLayer::Block, -2, 20, 3), 14);
}
