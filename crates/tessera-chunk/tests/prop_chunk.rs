use proptest::prelude::*;
use tessera_chunk::{ChunkBuf, ChunkCoord, ChunkKey, ChunkSize, LightLayer};

fn dim() -> impl Strategy<Value = usize> {
    1usize..=8
}

fn small_i32() -> impl Strategy<Value = i32> {
    -1_000_000i32..=1_000_000
}

proptest! {
    #[test]
    fn idx_is_unique_and_in_range(sx in dim(), sy in dim(), sz in dim()) {
        let size = ChunkSize::new(sx, sy, sz);
        let buf = ChunkBuf::new(ChunkCoord::new(0, 0), size);
        let mut seen = vec![false; size.volume()];
        for y in 0..sy { for z in 0..sz { for x in 0..sx {
            let i = buf.idx(x, y, z);
            prop_assert!(i < seen.len());
            prop_assert!(!seen[i]);
            seen[i] = true;
        }}}
        prop_assert!(seen.into_iter().all(|b| b));
    }

    #[test]
    fn world_to_chunk_inverts_chunk_to_world(wx in small_i32(), wz in small_i32(), sx in dim(), sz in dim()) {
        let size = ChunkSize::new(sx, 4, sz);
        let (coord, lx, lz) = size.world_to_chunk(wx, wz);
        prop_assert!(lx < sx && lz < sz);
        prop_assert_eq!(size.chunk_to_world(coord, lx, lz), (wx, wz));
    }

    #[test]
    fn key_packs_both_halves(cx in any::<i32>(), cz in any::<i32>()) {
        let k = ChunkKey::new(cx, cz);
        prop_assert_eq!((k.cx(), k.cz()), (cx, cz));
        prop_assert_eq!(k, ChunkCoord::new(cx, cz).key());
    }

    #[test]
    fn light_writes_clamp(level in any::<u8>(), x in 0i32..4, y in 0i32..4, z in 0i32..4) {
        let mut buf = ChunkBuf::new(ChunkCoord::new(3, -2), ChunkSize::new(4, 4, 4));
        buf.set_light_local(LightLayer::Block, x, y, z, level);
        prop_assert_eq!(buf.light_local(LightLayer::Block, x, y, z), level.min(15));
        prop_assert_eq!(buf.light_local(LightLayer::Sky, x, y, z), 0);
    }

    #[test]
    fn get_world_agrees_with_contains(cx in -100i32..100, cz in -100i32..100, dx in -2i32..6, dy in -2i32..6, dz in -2i32..6) {
        let size = ChunkSize::new(4, 4, 4);
        let mut buf = ChunkBuf::new(ChunkCoord::new(cx, cz), size);
        for (i, b) in buf.blocks.iter_mut().enumerate() {
            *b = i as u16;
        }
        let (bx, bz) = buf.origin();
        let (wx, wz) = (bx + dx, bz + dz);
        match buf.get_world(wx, dy, wz) {
            Some(id) => {
                prop_assert!(buf.contains_world(wx, dy, wz));
                prop_assert_eq!(id, buf.get_local(dx, dy, dz));
            }
            None => prop_assert!(!buf.contains_world(wx, dy, wz)),
        }
    }
}
