use tessera_blocks::{BlockCatalog, ids};

fn asset_path() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../assets/blocks.toml")
}

#[test]
fn shipped_catalog_matches_builtin() {
    let loaded = BlockCatalog::from_path(asset_path()).expect("assets/blocks.toml");
    let builtin = BlockCatalog::builtin();
    assert_eq!(loaded.len(), builtin.len());
    for (a, b) in loaded.iter().zip(builtin.iter()) {
        assert_eq!(a, b, "block {} differs", b.name);
    }
}

#[test]
fn shipped_catalog_water_is_not_pickable() {
    let loaded = BlockCatalog::from_path(asset_path()).expect("assets/blocks.toml");
    let water = loaded.def(ids::WATER);
    assert!(!water.pickable && !water.solid && !water.occludes);
}
