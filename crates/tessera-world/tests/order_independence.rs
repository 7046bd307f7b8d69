use tessera_blocks::BlockCatalog;
use tessera_chunk::{ChunkCoord, ChunkSize};
use tessera_world::{GenerationConfig, TerrainGenerator};

#[test]
fn adjacent_chunks_do_not_depend_on_generation_order() {
    let cat = BlockCatalog::builtin();
    let cfg = GenerationConfig::default();
    let size = ChunkSize::new(12, 40, 12);

    let ga = TerrainGenerator::new(4242, size, &cfg, 18, &cat);
    let a0 = ga.generate(ChunkCoord::new(0, 0));
    let a1 = ga.generate(ChunkCoord::new(1, 0));

    let gb = TerrainGenerator::new(4242, size, &cfg, 18, &cat);
    let b1 = gb.generate(ChunkCoord::new(1, 0));
    let b0 = gb.generate(ChunkCoord::new(0, 0));

    assert_eq!(a0.blocks, b0.blocks);
    assert_eq!(a1.blocks, b1.blocks);
}

#[test]
fn heights_are_continuous_across_chunk_seams() {
    let cat = BlockCatalog::builtin();
    let size = ChunkSize::new(16, 64, 16);
    let g = TerrainGenerator::new(11, size, &GenerationConfig::default(), 18, &cat);
    for wz in -32..32 {
        let a = g.height_at(15, wz);
        let b = g.height_at(16, wz);
        assert!((a - b).abs() <= 8, "seam jump {a} -> {b} at z {wz}");
    }
}

#[test]
fn shipped_worldgen_matches_defaults() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../assets/worldgen.toml");
    let cfg = GenerationConfig::from_path(path).expect("assets/worldgen.toml");
    assert_eq!(cfg, GenerationConfig::default());
}

#[test]
fn partial_toml_keeps_other_defaults() {
    let cfg = GenerationConfig::from_toml_str(
        r#"
        [caves]
        enabled = false
        "#,
    )
    .unwrap();
    assert!(!cfg.caves.enabled);
    assert_eq!(cfg.caves.threshold, 0.35);
    assert_eq!(cfg.ores.len(), 4);
}
