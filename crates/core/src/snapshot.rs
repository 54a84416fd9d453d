use serde::Serialize;

use crate::cube::FaceletCube;
use crate::scheme::ColorScheme;
use crate::types::{Color, Face, STICKERS_PER_FACE};

type FaceStickers = [Color; STICKERS_PER_FACE];

/// Read-only copy of a cube for renderers and JSON output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CubeSnapshot {
    pub up: FaceStickers,
    pub down: FaceStickers,
    pub front: FaceStickers,
    pub back: FaceStickers,
    pub right: FaceStickers,
    pub left: FaceStickers,
    pub cross_solved: bool,
}

impl CubeSnapshot {
    pub fn capture(cube: &FaceletCube, scheme: &ColorScheme) -> Self {
        Self {
            up: *cube.face(Face::Up),
            down: *cube.face(Face::Down),
            front: *cube.face(Face::Front),
            back: *cube.face(Face::Back),
            right: *cube.face(Face::Right),
            left: *cube.face(Face::Left),
            cross_solved: cube.is_cross_solved(scheme),
        }
    }

    pub fn face(&self, face: Face) -> &FaceStickers {
        match face {
            Face::Up => &self.up,
            Face::Down => &self.down,
            Face::Front => &self.front,
            Face::Back => &self.back,
            Face::Right => &self.right,
            Face::Left => &self.left,
        }
    }
}

impl From<&FaceletCube> for CubeSnapshot {
    fn from(cube: &FaceletCube) -> Self {
        Self::capture(cube, &ColorScheme::default())
    }
}
