use proptest::prelude::*;
use tessera_blocks::{BlockCatalog, BlockId, ids};
use tessera_chunk::{BlockAccess, ChunkBuf, ChunkCoord, ChunkSize};
use tessera_mesh_cpu::build_chunk_mesh;

struct Solo {
    catalog: BlockCatalog,
    buf: ChunkBuf,
}

impl BlockAccess for Solo {
    fn catalog(&self) -> &BlockCatalog {
        &self.catalog
    }

    fn block_at(&self, wx: i32, wy: i32, wz: i32) -> BlockId {
        self.buf.get_world(wx, wy, wz).unwrap_or(ids::AIR)
    }
}

proptest! {
    #[test]
    fn buffers_stay_parallel(cells in proptest::collection::vec(
        (0i32..6, 0i32..6, 0i32..6, prop_oneof![
            Just(ids::STONE), Just(ids::GLASS), Just(ids::WATER), Just(ids::LEAVES)
        ]),
        0..40,
    )) {
        let mut buf = ChunkBuf::new(ChunkCoord::new(-1, 2), ChunkSize::new(6, 6, 6));
        for (x, y, z, id) in cells {
            buf.set_local(x, y, z, id);
        }
        let s = Solo { catalog: BlockCatalog::builtin(), buf };
        let m = build_chunk_mesh(&s.buf, &s);
        for part in [&m.opaque, &m.transparent] {
            let verts = part.vertex_count();
            prop_assert_eq!(part.norm.len(), verts * 3);
            prop_assert_eq!(part.uv.len(), verts * 2);
            prop_assert_eq!(part.col.len(), verts * 4);
            prop_assert_eq!(part.idx.len(), verts / 4 * 6);
            prop_assert!(part.idx.iter().all(|&i| (i as usize) < verts));
            prop_assert!(part.uv.iter().all(|&u| (0.0..=1.0).contains(&u)));
        }
    }
}
