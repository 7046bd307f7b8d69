use tessera_blocks::BlockId;
use tessera_chunk::BlockAccess;
use tessera_geom::{IVec3, Vec3};

/// Upper bound on DDA steps; keeps an infinite `max_distance` from spinning.
const MAX_STEPS: usize = 4096;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlockHit {
    pub block: IVec3,
    /// Outward normal of the face the ray entered through.
    pub normal: IVec3,
    pub t: f32,
    pub id: BlockId,
}

impl BlockHit {
    /// Empty cell in front of the hit face, where a placed block goes.
    #[inline]
    pub fn place_cell(&self) -> IVec3 {
        self.block + self.normal
    }
}

fn hittable<A: BlockAccess + ?Sized>(access: &A, c: IVec3) -> Option<BlockId> {
    let id = access.block_at(c.x, c.y, c.z);
    let def = access.catalog().def(id);
    (!def.is_air() && def.pickable).then_some(id)
}

#[inline]
fn axis_setup(o: f32, d: f32) -> (i32, f32, f32) {
    if d == 0.0 {
        return (0, f32::INFINITY, f32::INFINITY);
    }
    let delta = (1.0 / d).abs();
    let frac = o - o.floor();
    if d > 0.0 {
        (1, delta, (1.0 - frac) * delta)
    } else {
        (-1, delta, frac * delta)
    }
}

/// First pickable block along the ray within `max_distance`, by 3D DDA over unit cells.
/// A ray starting inside a pickable block reports it at `t = 0` with an upward normal.
pub fn pick<A: BlockAccess + ?Sized>(
    access: &A,
    origin: Vec3,
    dir: Vec3,
    max_distance: f32,
) -> Option<BlockHit> {
    let mut cell = origin.floor_cell();
    if let Some(id) = hittable(access, cell) {
        return Some(BlockHit {
            block: cell,
            normal: IVec3::new(0, 1, 0),
            t: 0.0,
            id,
        });
    }
    let d = dir.normalized();
    if !d.is_finite() || d == Vec3::ZERO || !origin.is_finite() {
        return None;
    }

    let (sx, tdx, mut tmx) = axis_setup(origin.x, d.x);
    let (sy, tdy, mut tmy) = axis_setup(origin.y, d.y);
    let (sz, tdz, mut tmz) = axis_setup(origin.z, d.z);
    let mut t = 0.0f32;

    for _ in 0..MAX_STEPS {
        if t > max_distance {
            break;
        }
        let normal;
        if tmx < tmy {
            if tmx < tmz {
                cell.x += sx;
                t = tmx;
                tmx += tdx;
                normal = IVec3::new(-sx, 0, 0);
            } else {
                cell.z += sz;
                t = tmz;
                tmz += tdz;
                normal = IVec3::new(0, 0, -sz);
            }
        } else if tmy < tmz {
            cell.y += sy;
            t = tmy;
            tmy += tdy;
            normal = IVec3::new(0, -sy, 0);
        } else {
            cell.z += sz;
            t = tmz;
            tmz += tdz;
            normal = IVec3::new(0, 0, -sz);
        }
        if t > max_distance {
            break;
        }
        if let Some(id) = hittable(access, cell) {
            return Some(BlockHit {
                block: cell,
                normal,
                t,
                id,
            });
        }
    }
    None
}
