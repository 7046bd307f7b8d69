use tessera_blocks::FaceRole;
use tessera_geom::{IVec3, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    PosY = 0,
    NegY = 1,
    PosX = 2,
    NegX = 3,
    PosZ = 4,
    NegZ = 5,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::PosY,
        Face::NegY,
        Face::PosX,
        Face::NegX,
        Face::PosZ,
        Face::NegZ,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_index(i: usize) -> Option<Face> {
        Face::ALL.get(i).copied()
    }

    #[inline]
    pub fn normal(self) -> Vec3 {
        self.delta().as_vec3()
    }

    /// Offset to the neighbor cell across this face.
    #[inline]
    pub const fn delta(self) -> IVec3 {
        match self {
            Face::PosY => IVec3::new(0, 1, 0),
            Face::NegY => IVec3::new(0, -1, 0),
            Face::PosX => IVec3::new(1, 0, 0),
            Face::NegX => IVec3::new(-1, 0, 0),
            Face::PosZ => IVec3::new(0, 0, 1),
            Face::NegZ => IVec3::new(0, 0, -1),
        }
    }

    #[inline]
    pub const fn role(self) -> FaceRole {
        match self {
            Face::PosY => FaceRole::Top,
            Face::NegY => FaceRole::Bottom,
            _ => FaceRole::Side,
        }
    }

    /// Unit-cube corners of this face paired with their in-tile `(u, v)` coordinates.
    /// Winding is not guaranteed; `MeshBuild::add_quad_uv` orients against the normal.
    pub(crate) const fn corners(self) -> [([f32; 3], [f32; 2]); 4] {
        match self {
            Face::PosY => [
                ([0.0, 1.0, 1.0], [0.0, 0.0]),
                ([1.0, 1.0, 1.0], [1.0, 0.0]),
                ([1.0, 1.0, 0.0], [1.0, 1.0]),
                ([0.0, 1.0, 0.0], [0.0, 1.0]),
            ],
            Face::NegY => [
                ([0.0, 0.0, 0.0], [0.0, 0.0]),
                ([1.0, 0.0, 0.0], [1.0, 0.0]),
                ([1.0, 0.0, 1.0], [1.0, 1.0]),
                ([0.0, 0.0, 1.0], [0.0, 1.0]),
            ],
            Face::PosX => [
                ([1.0, 0.0, 0.0], [0.0, 0.0]),
                ([1.0, 1.0, 0.0], [0.0, 1.0]),
                ([1.0, 1.0, 1.0], [1.0, 1.0]),
                ([1.0, 0.0, 1.0], [1.0, 0.0]),
            ],
            Face::NegX => [
                ([0.0, 0.0, 1.0], [0.0, 0.0]),
                ([0.0, 1.0, 1.0], [0.0, 1.0]),
                ([0.0, 1.0, 0.0], [1.0, 1.0]),
                ([0.0, 0.0, 0.0], [1.0, 0.0]),
            ],
            Face::PosZ => [
                ([1.0, 0.0, 1.0], [0.0, 0.0]),
                ([1.0, 1.0, 1.0], [0.0, 1.0]),
                ([0.0, 1.0, 1.0], [1.0, 1.0]),
                ([0.0, 0.0, 1.0], [1.0, 0.0]),
            ],
            Face::NegZ => [
                ([0.0, 0.0, 0.0], [0.0, 0.0]),
                ([0.0, 1.0, 0.0], [0.0, 1.0]),
                ([1.0, 1.0, 0.0], [1.0, 1.0]),
                ([1.0, 0.0, 0.0], [1.0, 0.0]),
            ],
        }
    }
}
