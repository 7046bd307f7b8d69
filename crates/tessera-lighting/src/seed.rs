use tessera_blocks::{BlockCatalog, BlockId};
use tessera_chunk::{ChunkCoord, ChunkSize};

use crate::{LightLayer, LightQueue, LightStorage, MAX_LIGHT, NEIGHBORS};

const HORIZONTAL: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Lights a freshly inserted chunk: sky columns, emitters, and seams with loaded neighbors.
pub fn seed_chunk<S>(storage: &mut S, queue: &mut LightQueue, coord: ChunkCoord, size: ChunkSize)
where
    S: LightStorage + ?Sized,
{
    let (bx, bz) = size.chunk_to_world(coord, 0, 0);
    let (sx, sz) = (size.x as i32, size.z as i32);
    let h = storage.height();

    for z in bz..bz + sz {
        for x in bx..bx + sx {
            let mut open = true;
            for y in (0..h).rev() {
                open = open && storage.is_transparent(x, y, z);
                storage.set_light(LightLayer::Sky, x, y, z, if open { MAX_LIGHT } else { 0 });
            }
        }
    }

    let mut emitters = 0usize;
    let mut shaded = 0usize;
    for y in 0..h {
        for z in bz..bz + sz {
            for x in bx..bx + sx {
                let e = storage.emission(x, y, z);
                if e > 0 {
                    storage.set_light(LightLayer::Block, x, y, z, e);
                    queue.enqueue_add(LightLayer::Block, x, y, z, e);
                    emitters += 1;
                }
                if storage.light(LightLayer::Sky, x, y, z) == MAX_LIGHT {
                    let borders_shade = HORIZONTAL.iter().any(|&(dx, dz)| {
                        storage.is_transparent(x + dx, y, z + dz)
                            && storage.light(LightLayer::Sky, x + dx, y, z + dz) < MAX_LIGHT - 1
                    });
                    if borders_shade {
                        queue.enqueue_add(LightLayer::Sky, x, y, z, MAX_LIGHT);
                        shaded += 1;
                    }
                }
            }
        }
    }

    let mut pulled = 0usize;
    let mut pull = |storage: &mut S, queue: &mut LightQueue, inside: (i32, i32), outside: (i32, i32)| {
        for y in 0..h {
            if !storage.is_transparent(inside.0, y, inside.1) {
                continue;
            }
            for layer in [LightLayer::Sky, LightLayer::Block] {
                let lvl = storage.light(layer, outside.0, y, outside.1);
                if lvl > 1 && storage.light(layer, inside.0, y, inside.1) < lvl - 1 {
                    queue.enqueue_add(layer, outside.0, y, outside.1, lvl);
                    pulled += 1;
                }
            }
        }
    };
    for z in bz..bz + sz {
        pull(storage, queue, (bx, z), (bx - 1, z));
        pull(storage, queue, (bx + sx - 1, z), (bx + sx, z));
    }
    for x in bx..bx + sx {
        pull(storage, queue, (x, bz), (x, bz - 1));
        pull(storage, queue, (x, bz + sz - 1), (x, bz + sz));
    }
    log::trace!("light seed {coord}: {emitters} emitters, {shaded} shaded sky, {pulled} seam pulls");
}

/// Rescans one column top-down and queues the difference against the stored sky light.
pub fn update_sunlight_column<S>(storage: &mut S, queue: &mut LightQueue, x: i32, z: i32)
where
    S: LightStorage + ?Sized,
{
    let mut open = true;
    for y in (0..storage.height()).rev() {
        let transparent = storage.is_transparent(x, y, z);
        let prev = storage.light(LightLayer::Sky, x, y, z);
        if open && transparent {
            if prev != MAX_LIGHT {
                storage.set_light(LightLayer::Sky, x, y, z, MAX_LIGHT);
                queue.enqueue_add(LightLayer::Sky, x, y, z, MAX_LIGHT);
            }
            continue;
        }
        open = false;
        // Below the first occluder only direct sun is retracted; side light stays
        if prev > 0 && (!transparent || prev == MAX_LIGHT) {
            storage.set_light(LightLayer::Sky, x, y, z, 0);
            queue.enqueue_remove(LightLayer::Sky, x, y, z, prev);
        }
    }
}

/// Light bookkeeping after the block at `(x, y, z)` went from `old` to `new`.
pub fn on_block_changed<S>(
    storage: &mut S,
    queue: &mut LightQueue,
    catalog: &BlockCatalog,
    (x, y, z): (i32, i32, i32),
    old: BlockId,
    new: BlockId,
) where
    S: LightStorage + ?Sized,
{
    let (old_def, new_def) = (catalog.def(old), catalog.def(new));

    if old_def.emit_light > 0 {
        storage.set_light(LightLayer::Block, x, y, z, 0);
        queue.enqueue_remove(LightLayer::Block, x, y, z, old_def.emit_light);
    }

    if !old_def.occludes && new_def.occludes {
        let prev = storage.light(LightLayer::Block, x, y, z);
        if prev > 0 {
            storage.set_light(LightLayer::Block, x, y, z, 0);
            queue.enqueue_remove(LightLayer::Block, x, y, z, prev);
        }
    } else if old_def.occludes && !new_def.occludes {
        for (dx, dy, dz) in NEIGHBORS {
            let (nx, ny, nz) = (x + dx, y + dy, z + dz);
            for layer in [LightLayer::Sky, LightLayer::Block] {
                let lvl = storage.light(layer, nx, ny, nz);
                queue.enqueue_add(layer, nx, ny, nz, lvl);
            }
        }
    }

    if new_def.emit_light > 0 {
        storage.set_light(LightLayer::Block, x, y, z, new_def.emit_light);
        queue.enqueue_add(LightLayer::Block, x, y, z, new_def.emit_light);
    }

    if old_def.occludes != new_def.occludes {
        update_sunlight_column(storage, queue, x, z);
    }
}
