//! CPU meshing: face-culled quads with atlas UVs for one chunk at a time.
#![forbid(unsafe_code)]

mod atlas;
mod build;
mod constants;
mod face;
mod mesh_build;

pub use atlas::{ATLAS_TILES_PER_ROW, UV_INSET, tile_uv};
pub use build::{ChunkMesh, build_chunk_mesh, face_visible};
pub use face::Face;
pub use mesh_build::MeshBuild;

#[cfg(test)]
mod tests;
