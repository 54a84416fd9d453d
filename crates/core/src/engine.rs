//! Move engine - table-driven face turns
//!
//! Every face turn is the same law applied to different tables. A clockwise
//! quarter turn of face `X` is five disjoint 4-cycles of stickers:
//!
//! - the corner cycle of `X` itself (0 -> 2 -> 8 -> 6 -> 0)
//! - the edge cycle of `X` itself (1 -> 5 -> 7 -> 3 -> 1)
//! - three cycles across the ring of four neighbouring faces, one per
//!   sticker position along the shared edges
//!
//! The ring around each face is given by [`RINGS`]: four slots in turning
//! order, each naming a neighbour and the three stickers on it that touch
//! the turning face. A clockwise turn moves the stickers of slot `k` into
//! slot `k + 1`.
//!
//! Modifiers compose clockwise quarter turns (`R` = 1, `R2` = 2, `R'` = 3).
//! [`turn_counter_clockwise`] and [`turn_half`] are direct forms of the same
//! permutations and must agree with the composed ones exactly.

use crate::cube::FaceletCube;
use crate::types::{Color, Face, Move, FACE_COUNT, STICKERS_PER_FACE};

/// A sticker address: (face, index within the face)
pub type Sticker = (Face, usize);

/// Own-face corner cycle of a clockwise quarter turn
pub const CORNER_CYCLE: [usize; 4] = [0, 2, 8, 6];

/// Own-face edge cycle of a clockwise quarter turn
pub const EDGE_CYCLE: [usize; 4] = [1, 5, 7, 3];

/// One neighbour's share of the ring around a turning face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingSlot {
    pub face: Face,
    /// Stickers on `face` touching the turning face, aligned across slots
    pub stickers: [usize; 3],
}

const fn slot(face: Face, stickers: [usize; 3]) -> RingSlot {
    RingSlot { face, stickers }
}

/// Adjacent-face rings, indexed by `Face::index()`
///
/// On a clockwise turn, sticker `stickers[j]` of slot `k` moves to
/// `stickers[j]` of slot `(k + 1) % 4`.
pub const RINGS: [[RingSlot; 4]; FACE_COUNT] = [
    // Up
    [
        slot(Face::Front, [0, 1, 2]),
        slot(Face::Left, [0, 1, 2]),
        slot(Face::Back, [0, 1, 2]),
        slot(Face::Right, [0, 1, 2]),
    ],
    // Down
    [
        slot(Face::Front, [6, 7, 8]),
        slot(Face::Right, [6, 7, 8]),
        slot(Face::Back, [6, 7, 8]),
        slot(Face::Left, [6, 7, 8]),
    ],
    // Front
    [
        slot(Face::Up, [6, 7, 8]),
        slot(Face::Right, [0, 3, 6]),
        slot(Face::Down, [2, 1, 0]),
        slot(Face::Left, [8, 5, 2]),
    ],
    // Back
    [
        slot(Face::Up, [2, 1, 0]),
        slot(Face::Left, [0, 3, 6]),
        slot(Face::Down, [6, 7, 8]),
        slot(Face::Right, [8, 5, 2]),
    ],
    // Right
    [
        slot(Face::Front, [2, 5, 8]),
        slot(Face::Up, [2, 5, 8]),
        slot(Face::Back, [6, 3, 0]),
        slot(Face::Down, [2, 5, 8]),
    ],
    // Left
    [
        slot(Face::Up, [0, 3, 6]),
        slot(Face::Front, [0, 3, 6]),
        slot(Face::Down, [0, 3, 6]),
        slot(Face::Back, [8, 5, 2]),
    ],
];

/// Number of disjoint 4-cycles in one quarter turn
const CYCLES_PER_TURN: usize = 5;

/// The cycles of each face's clockwise quarter turn, derived from the tables
static TURN_CYCLES: [[[Sticker; 4]; CYCLES_PER_TURN]; FACE_COUNT] = build_turn_cycles();

const fn build_turn_cycles() -> [[[Sticker; 4]; CYCLES_PER_TURN]; FACE_COUNT] {
    let mut out = [[[(Face::Up, 0); 4]; CYCLES_PER_TURN]; FACE_COUNT];
    let mut f = 0;
    while f < FACE_COUNT {
        let face = Face::ALL[f];
        let ring = RINGS[f];
        let mut k = 0;
        while k < 4 {
            out[f][0][k] = (face, CORNER_CYCLE[k]);
            out[f][1][k] = (face, EDGE_CYCLE[k]);
            let mut j = 0;
            while j < 3 {
                out[f][2 + j][k] = (ring[k].face, ring[k].stickers[j]);
                j += 1;
            }
            k += 1;
        }
        f += 1;
    }
    out
}

/// Ring of neighbours around `face`, in turning order
pub fn ring(face: Face) -> [RingSlot; 4] {
    RINGS[face.index()]
}

type Faces = [[Color; STICKERS_PER_FACE]; FACE_COUNT];

#[inline(always)]
fn read(faces: &Faces, (face, i): Sticker) -> Color {
    faces[face.index()][i]
}

#[inline(always)]
fn write(faces: &mut Faces, (face, i): Sticker, color: Color) {
    faces[face.index()][i] = color;
}

/// Apply one move in place
pub fn apply(cube: &mut FaceletCube, mv: Move) {
    for _ in 0..mv.modifier.quarter_turns() {
        turn_clockwise(cube, mv.face);
    }
}

/// Apply moves left to right
pub fn apply_all(cube: &mut FaceletCube, moves: &[Move]) {
    for &mv in moves {
        apply(cube, mv);
    }
}

/// Clockwise quarter turn: every cycle shifts one step forward
pub fn turn_clockwise(cube: &mut FaceletCube, face: Face) {
    let faces = cube.faces_mut();
    for c in &TURN_CYCLES[face.index()] {
        let last = read(faces, c[3]);
        write(faces, c[3], read(faces, c[2]));
        write(faces, c[2], read(faces, c[1]));
        write(faces, c[1], read(faces, c[0]));
        write(faces, c[0], last);
    }
}

/// Counter-clockwise quarter turn: every cycle shifts one step back
pub fn turn_counter_clockwise(cube: &mut FaceletCube, face: Face) {
    let faces = cube.faces_mut();
    for c in &TURN_CYCLES[face.index()] {
        let first = read(faces, c[0]);
        write(faces, c[0], read(faces, c[1]));
        write(faces, c[1], read(faces, c[2]));
        write(faces, c[2], read(faces, c[3]));
        write(faces, c[3], first);
    }
}

/// Half turn: opposite positions of every cycle swap
pub fn turn_half(cube: &mut FaceletCube, face: Face) {
    let faces = cube.faces_mut();
    for c in &TURN_CYCLES[face.index()] {
        let a = read(faces, c[0]);
        let b = read(faces, c[1]);
        write(faces, c[0], read(faces, c[2]));
        write(faces, c[1], read(faces, c[3]));
        write(faces, c[2], a);
        write(faces, c[3], b);
    }
}
