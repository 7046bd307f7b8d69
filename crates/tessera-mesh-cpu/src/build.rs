use tessera_blocks::{BlockCatalog, BlockId, RenderFaces, ids};
use tessera_chunk::{BlockAccess, ChunkBuf, ChunkKey, MAX_LIGHT};
use tessera_geom::{Aabb, Vec3};

use crate::atlas::tile_uv;
use crate::constants::{OPAQUE_ALPHA, VISUAL_LIGHT_MIN};
use crate::face::Face;
use crate::mesh_build::MeshBuild;

/// CPU geometry for one chunk, in world space. Transparent blocks go to their own part so a
/// renderer can draw them after the opaque pass.
#[derive(Clone, Debug, PartialEq)]
pub struct ChunkMesh {
    pub key: ChunkKey,
    pub bbox: Aabb,
    pub opaque: MeshBuild,
    pub transparent: MeshBuild,
}

impl ChunkMesh {
    pub fn quad_count(&self) -> usize {
        self.opaque.quad_count() + self.transparent.quad_count()
    }

    pub fn is_empty(&self) -> bool {
        self.opaque.is_empty() && self.transparent.is_empty()
    }
}

/// Whether the face of `id` toward a cell holding `neighbor` is drawn.
pub fn face_visible(catalog: &BlockCatalog, id: BlockId, neighbor: BlockId) -> bool {
    if neighbor == ids::AIR {
        return true;
    }
    let n = catalog.def(neighbor);
    if neighbor == id && n.transparent {
        return false;
    }
    !n.occludes
}

#[inline]
fn shade(level: u8) -> [u8; 4] {
    let l = level.min(MAX_LIGHT) as u16;
    let v = ((l * 255) / MAX_LIGHT as u16) as u8;
    let v = v.max(VISUAL_LIGHT_MIN);
    [v, v, v, OPAQUE_ALPHA]
}

/// Builds the mesh for `buf`. Cells inside the chunk are read from `buf`; faces on the chunk
/// border consult `access` for the neighbor, which is also the source of vertex light.
pub fn build_chunk_mesh<A: BlockAccess + ?Sized>(buf: &ChunkBuf, access: &A) -> ChunkMesh {
    let catalog = access.catalog();
    let (bx, bz) = buf.origin();
    let (sx, sy, sz) = (buf.size.x as i32, buf.size.y as i32, buf.size.z as i32);
    let mut opaque = MeshBuild::default();
    let mut transparent = MeshBuild::default();
    let mut bbox = Aabb::EMPTY;

    for y in 0..sy {
        for z in 0..sz {
            for x in 0..sx {
                let id = buf.get_local(x, y, z);
                if id == ids::AIR {
                    continue;
                }
                let def = catalog.def(id);
                let (wx, wz) = (bx + x, bz + z);
                let part = if def.transparent {
                    &mut transparent
                } else {
                    &mut opaque
                };
                for face in Face::ALL {
                    if def.render_faces == RenderFaces::TopOnly && face != Face::PosY {
                        continue;
                    }
                    let d = face.delta();
                    let (nx, ny, nz) = (x + d.x, y + d.y, z + d.z);
                    let neighbor = if buf.in_bounds(nx, ny, nz) {
                        buf.get_local(nx, ny, nz)
                    } else if ny < 0 || ny >= sy {
                        ids::AIR
                    } else {
                        access.block_at(wx + d.x, ny, wz + d.z)
                    };
                    if !face_visible(catalog, id, neighbor) {
                        continue;
                    }
                    let light = access.light_at(wx + d.x, ny, wz + d.z);
                    let tile = def.tile(face.role());
                    let origin = Vec3::new(wx as f32, y as f32, wz as f32);
                    let corners = face.corners();
                    let verts = corners.map(|(p, _)| origin + Vec3::new(p[0], p[1], p[2]));
                    let uvs = corners.map(|(_, uv)| tile_uv(tile, uv[0], uv[1]));
                    for v in verts {
                        bbox.include(v);
                    }
                    part.add_quad_uv(verts, face.normal(), uvs, shade(light));
                }
            }
        }
    }

    log::trace!(
        "meshed chunk {}: {} opaque, {} transparent quads",
        buf.coord,
        opaque.quad_count(),
        transparent.quad_count()
    );
    ChunkMesh {
        key: buf.coord.key(),
        bbox,
        opaque,
        transparent,
    }
}
