//! Scramble module - WCA-style random move sequences
//!
//! A scramble never contains a redundant pair of moves. Two rules are
//! checked over faces only (the turn amount never matters):
//!
//! - no two consecutive moves turn the same face (`R R'`)
//! - no `A, opposite(A), A` triple (`R L R`): opposite faces commute, so the
//!   outer moves could be merged
//!
//! The generator draws faces uniformly and rejects candidates that break a
//! rule. After [`MAX_FACE_ATTEMPTS`] rejections it picks uniformly among the
//! faces known to be allowed. At most two faces are ever excluded, so that
//! set is never empty and generation always terminates.

use arrayvec::ArrayVec;

use crate::cube::FaceletCube;
use crate::rng::RandomSource;
use crate::types::{Face, Modifier, Move, DEFAULT_SCRAMBLE_LENGTH, FACE_COUNT};

/// Rejection-sampling bound before falling back to the allowed subset
pub const MAX_FACE_ATTEMPTS: u32 = 100;

/// Moves used by cross-training scrambles
pub const CROSS_TRAINING_MOVES: [Move; 6] = [
    Move::new(Face::Front, Modifier::Clockwise),
    Move::new(Face::Right, Modifier::Clockwise),
    Move::new(Face::Up, Modifier::Clockwise),
    Move::new(Face::Front, Modifier::Prime),
    Move::new(Face::Right, Modifier::Prime),
    Move::new(Face::Up, Modifier::Prime),
];

/// Length of a cross-training scramble
pub const CROSS_TRAINING_LENGTH: usize = 8;

/// True if `face` may follow `last` (and `second_last` before it)
///
/// This is the single rule check shared by the generator and
/// [`is_well_formed`].
pub fn accepts(face: Face, last: Option<Face>, second_last: Option<Face>) -> bool {
    let Some(last) = last else {
        return true;
    };
    if face == last {
        return false;
    }
    !(second_last == Some(face) && last == face.opposite())
}

/// True if no move in `moves` breaks either redundancy rule
pub fn is_well_formed(moves: &[Move]) -> bool {
    moves.iter().enumerate().all(|(i, mv)| {
        let last = i.checked_sub(1).map(|j| moves[j].face);
        let second_last = i.checked_sub(2).map(|j| moves[j].face);
        accepts(mv.face, last, second_last)
    })
}

/// Faces that may follow the given history, in [`Face::ALL`] order
pub fn allowed_faces(last: Option<Face>, second_last: Option<Face>) -> ArrayVec<Face, FACE_COUNT> {
    Face::ALL
        .into_iter()
        .filter(|&face| accepts(face, last, second_last))
        .collect()
}

/// Scramble generator over an injected random source
#[derive(Debug, Clone)]
pub struct ScrambleGenerator<R> {
    rng: R,
}

impl<R: RandomSource> ScrambleGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate `length` moves satisfying both redundancy rules
    pub fn generate(&mut self, length: usize) -> Vec<Move> {
        let mut moves = Vec::with_capacity(length);
        let mut last: Option<Face> = None;
        let mut second_last: Option<Face> = None;

        for _ in 0..length {
            let mv = self.next_move(last, second_last);
            moves.push(mv);
            second_last = last;
            last = Some(mv.face);
        }

        moves
    }

    /// Generate a scramble of [`DEFAULT_SCRAMBLE_LENGTH`] moves
    pub fn generate_default(&mut self) -> Vec<Move> {
        self.generate(DEFAULT_SCRAMBLE_LENGTH)
    }

    /// Pick one move given the two most recent faces
    pub fn next_move(&mut self, last: Option<Face>, second_last: Option<Face>) -> Move {
        let face = self.next_face(last, second_last);
        let modifier = Modifier::ALL[self.rng.next_below(Modifier::ALL.len() as u32) as usize];
        Move::new(face, modifier)
    }

    fn next_face(&mut self, last: Option<Face>, second_last: Option<Face>) -> Face {
        for _ in 0..MAX_FACE_ATTEMPTS {
            let face = Face::ALL[self.rng.next_below(FACE_COUNT as u32) as usize];
            if accepts(face, last, second_last) {
                return face;
            }
        }

        // Never empty: each redundancy rule excludes at most one face.
        let allowed = allowed_faces(last, second_last);
        allowed[self.rng.next_below(allowed.len() as u32) as usize]
    }

    /// Cross-training scramble: moves drawn from [`CROSS_TRAINING_MOVES`]
    ///
    /// These are short practice sequences and are not held to the
    /// redundancy rules.
    pub fn cross_training(&mut self) -> Vec<Move> {
        (0..CROSS_TRAINING_LENGTH)
            .map(|_| {
                let i = self.rng.next_below(CROSS_TRAINING_MOVES.len() as u32) as usize;
                CROSS_TRAINING_MOVES[i]
            })
            .collect()
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    pub fn into_rng(self) -> R {
        self.rng
    }
}

/// Generate a scramble, apply it to `cube`, and return it
pub fn scramble_cube<R: RandomSource>(cube: &mut FaceletCube, length: usize, rng: R) -> Vec<Move> {
    let moves = ScrambleGenerator::new(rng).generate(length);
    cube.apply_all(&moves);
    moves
}
