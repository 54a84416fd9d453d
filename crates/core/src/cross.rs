//! Cross detection - the first sub-goal of a layer-by-layer solve
//!
//! The cross is built on the Down face. It is solved when the Down center
//! and the four Down edge stickers carry the scheme's top color, and the
//! bottom edge sticker (index 7) of each side face carries the matching side
//! color. Centers never move, so a scheme whose top color is not the Down
//! center can never report a solved cross on this cube.

use std::fmt;

use arrayvec::ArrayVec;

use crate::cube::FaceletCube;
use crate::scheme::ColorScheme;
use crate::types::{Color, Face, Move, CENTER_INDEX};

/// Sticker index on each side face that touches the Down face edge
pub const SIDE_EDGE_INDEX: usize = 7;

/// The four edge slots of the cross, in scheme side order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrossEdge {
    Front,
    Right,
    Back,
    Left,
}

impl CrossEdge {
    pub const ALL: [CrossEdge; 4] = [
        CrossEdge::Front,
        CrossEdge::Right,
        CrossEdge::Back,
        CrossEdge::Left,
    ];

    /// Side face holding the edge's second sticker
    pub fn side_face(self) -> Face {
        match self {
            CrossEdge::Front => Face::Front,
            CrossEdge::Right => Face::Right,
            CrossEdge::Back => Face::Back,
            CrossEdge::Left => Face::Left,
        }
    }

    /// Index of the edge's sticker on the Down face
    pub fn down_index(self) -> usize {
        match self {
            CrossEdge::Front => 1,
            CrossEdge::Right => 5,
            CrossEdge::Back => 7,
            CrossEdge::Left => 3,
        }
    }

    /// Position in [`ColorScheme::side_colors`]
    fn side_slot(self) -> usize {
        match self {
            CrossEdge::Front => 0,
            CrossEdge::Right => 1,
            CrossEdge::Back => 2,
            CrossEdge::Left => 3,
        }
    }

    /// Notation-style slot name (`DF`, `DR`, `DB`, `DL`)
    pub fn as_str(self) -> &'static str {
        match self {
            CrossEdge::Front => "DF",
            CrossEdge::Right => "DR",
            CrossEdge::Back => "DB",
            CrossEdge::Left => "DL",
        }
    }

    fn is_placed(self, cube: &FaceletCube, top: Color, sides: &[Color; 4]) -> bool {
        cube.face(Face::Down)[self.down_index()] == top
            && cube.face(self.side_face())[SIDE_EDGE_INDEX] == sides[self.side_slot()]
    }
}

/// True if the cross is solved under `scheme`
pub fn is_cross_solved(cube: &FaceletCube, scheme: &ColorScheme) -> bool {
    let top = scheme.top();
    let down = cube.face(Face::Down);

    if down[CENTER_INDEX] != top {
        return false;
    }
    if CrossEdge::ALL
        .iter()
        .any(|edge| down[edge.down_index()] != top)
    {
        return false;
    }

    let sides = scheme.side_colors();
    CrossEdge::ALL
        .iter()
        .all(|edge| cube.face(edge.side_face())[SIDE_EDGE_INDEX] == sides[edge.side_slot()])
}

/// Which parts of the cross are still missing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossHint {
    /// Down center carries the cross color
    pub center_matches: bool,
    /// Edge slots whose two stickers are not both correct
    pub unsolved: ArrayVec<CrossEdge, 4>,
}

impl CrossHint {
    pub fn is_complete(&self) -> bool {
        self.center_matches && self.unsolved.is_empty()
    }
}

impl fmt::Display for CrossHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_complete() {
            return f.write_str("cross complete");
        }
        if !self.center_matches {
            f.write_str("down center does not match the cross color")?;
        }
        if !self.unsolved.is_empty() {
            if !self.center_matches {
                f.write_str("; ")?;
            }
            f.write_str("edges to fix:")?;
            for edge in &self.unsolved {
                write!(f, " {}", edge.as_str())?;
            }
        }
        Ok(())
    }
}

/// Report the unsolved cross edges under `scheme`
pub fn cross_hint(cube: &FaceletCube, scheme: &ColorScheme) -> CrossHint {
    let top = scheme.top();
    let sides = scheme.side_colors();
    let unsolved = CrossEdge::ALL
        .into_iter()
        .filter(|edge| !edge.is_placed(cube, top, &sides))
        .collect();
    CrossHint {
        center_matches: cube.center(Face::Down) == top,
        unsolved,
    }
}

/// True if applying `moves` to a copy of `cube` solves the cross
///
/// `cube` itself is left untouched.
pub fn verify_cross_solution(cube: &FaceletCube, moves: &[Move], scheme: &ColorScheme) -> bool {
    let mut trial = *cube;
    trial.apply_all(moves);
    is_cross_solved(&trial, scheme)
}
