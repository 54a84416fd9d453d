//! Cube module - the facelet model
//!
//! The cube is 54 stickers stored as six 9-sticker blocks, one per face in
//! [`Face::ALL`] order. Within a block stickers are row-major
//! (index 4 is the center).
//!
//! Sticker orientation: Up is viewed from above with Back at its top edge;
//! the four side faces have row 0 against Up and row 2 against Down; Down is
//! viewed from below with Front at its top edge.
//!
//! There is no way to write an individual sticker. The only mutations are
//! face turns (see [`crate::engine`]) and [`FaceletCube::reset`], so every
//! value of this type is reachable from the solved state.

use crate::scheme::ColorScheme;
use crate::types::{Color, Face, Move, CENTER_INDEX, FACE_COUNT, STICKERS_PER_FACE};

/// Full sticker state of a 3x3x3 cube
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceletCube {
    /// One 9-sticker block per face, indexed by `Face::index()`
    faces: [[Color; STICKERS_PER_FACE]; FACE_COUNT],
}

impl FaceletCube {
    /// Create a solved cube using the standard face colors
    pub fn solved() -> Self {
        Self {
            faces: Face::ALL.map(|face| [face.solved_color(); STICKERS_PER_FACE]),
        }
    }

    /// Flat sticker index for (face, i), in the order of [`FaceletCube::stickers`]
    #[inline(always)]
    pub fn index(face: Face, i: usize) -> Option<usize> {
        if i >= STICKERS_PER_FACE {
            return None;
        }
        Some(face.index() * STICKERS_PER_FACE + i)
    }

    /// Get sticker `i` of `face`
    /// Returns None if `i` is out of range
    pub fn get(&self, face: Face, i: usize) -> Option<Color> {
        self.faces[face.index()].get(i).copied()
    }

    /// All 9 stickers of one face
    pub fn face(&self, face: Face) -> &[Color; STICKERS_PER_FACE] {
        &self.faces[face.index()]
    }

    /// Center color of `face` (constant for the life of the cube)
    pub fn center(&self, face: Face) -> Color {
        self.faces[face.index()][CENTER_INDEX]
    }

    /// All 54 stickers, face by face in [`Face::ALL`] order
    pub fn stickers(&self) -> impl Iterator<Item = Color> + '_ {
        self.faces.iter().flatten().copied()
    }

    pub(crate) fn faces_mut(&mut self) -> &mut [[Color; STICKERS_PER_FACE]; FACE_COUNT] {
        &mut self.faces
    }

    /// True if every face is a single color
    pub fn is_solved(&self) -> bool {
        Face::ALL.iter().all(|&face| {
            let center = self.center(face);
            self.face(face).iter().all(|&c| c == center)
        })
    }

    /// Discard the current state and start over from solved
    pub fn reset(&mut self) {
        *self = Self::solved();
    }

    /// Count of stickers per color, in [`Color::ALL`] order
    pub fn color_counts(&self) -> [usize; FACE_COUNT] {
        let mut counts = [0usize; FACE_COUNT];
        for c in self.stickers() {
            // Color::ALL lists the solved colors in face storage order.
            counts[Face::with_solved_color(c).index()] += 1;
        }
        counts
    }

    /// Apply a single face turn in place
    pub fn apply(&mut self, mv: Move) {
        crate::engine::apply(self, mv);
    }

    /// Apply moves left to right
    pub fn apply_all(&mut self, moves: &[Move]) {
        crate::engine::apply_all(self, moves);
    }

    /// Check the cross under `scheme`
    pub fn is_cross_solved(&self, scheme: &ColorScheme) -> bool {
        crate::cross::is_cross_solved(self, scheme)
    }
}

impl Default for FaceletCube {
    fn default() -> Self {
        Self::solved()
    }
}
