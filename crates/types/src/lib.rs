//! Core types module - shared data structures and constants
//!
//! This module defines the vocabulary shared by the cube engine, the scramble
//! generator and the terminal front end. All types are small `Copy` values
//! with no behaviour beyond parsing and formatting.
//!
//! # Facelet Addressing
//!
//! Each of the six faces carries 9 stickers laid out row-major as a 3x3 grid:
//!
//! ```text
//! 0 1 2
//! 3 4 5
//! 6 7 8
//! ```
//!
//! - **Center**: index 4 (never moves)
//! - **Corners**: indices 0, 2, 6, 8
//! - **Edges**: indices 1, 3, 5, 7
//!
//! # Move Notation
//!
//! A move is a face letter followed by an optional modifier:
//!
//! | Token | Meaning |
//! |-------|---------|
//! | `R` | 90° clockwise, viewed from outside the face |
//! | `R'` | 90° counter-clockwise |
//! | `R2` | 180° |
//!
//! Exactly 18 tokens are legal. Anything else is rejected at parse time with
//! [`MoveError`], so the engine never sees an out-of-domain value.
//!
//! # Examples
//!
//! ```
//! use cube_cross_types::{parse_sequence, Face, Modifier, Move};
//!
//! let mv: Move = "R'".parse().unwrap();
//! assert_eq!(mv.face, Face::Right);
//! assert_eq!(mv.modifier, Modifier::Prime);
//! assert_eq!(mv.to_string(), "R'");
//!
//! let seq = parse_sequence("R U R' U'").unwrap();
//! assert_eq!(seq.len(), 4);
//!
//! assert!("X2".parse::<Move>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of faces on the cube
pub const FACE_COUNT: usize = 6;

/// Number of stickers on a single face (3x3)
pub const STICKERS_PER_FACE: usize = 9;

/// Total sticker count (6 faces x 9 stickers)
pub const STICKER_COUNT: usize = FACE_COUNT * STICKERS_PER_FACE;

/// Index of the center sticker on every face
pub const CENTER_INDEX: usize = 4;

/// Corner sticker indices on every face
pub const CORNER_INDICES: [usize; 4] = [0, 2, 6, 8];

/// Edge sticker indices on every face
pub const EDGE_INDICES: [usize; 4] = [1, 3, 5, 7];

/// Default scramble length (WCA practice standard)
pub const DEFAULT_SCRAMBLE_LENGTH: usize = 20;


/// The six face axes of the cube
///
/// Each face has a unique opposite sharing its rotation axis:
/// Up/Down, Front/Back, Right/Left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    Up,
    Down,
    Front,
    Back,
    Right,
    Left,
}

impl Face {
    /// All faces, in storage order
    pub const ALL: [Face; FACE_COUNT] = [
        Face::Up,
        Face::Down,
        Face::Front,
        Face::Back,
        Face::Right,
        Face::Left,
    ];

    /// Storage index of this face (position in [`Face::ALL`])
    #[inline(always)]
    pub const fn index(self) -> usize {
        match self {
            Face::Up => 0,
            Face::Down => 1,
            Face::Front => 2,
            Face::Back => 3,
            Face::Right => 4,
            Face::Left => 5,
        }
    }

    /// The face sharing this face's rotation axis
    pub fn opposite(self) -> Self {
        match self {
            Face::Up => Face::Down,
            Face::Down => Face::Up,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
            Face::Right => Face::Left,
            Face::Left => Face::Right,
        }
    }

    /// Color of this face on a solved cube
    ///
    /// Up=white, Down=yellow, Front=green, Back=blue, Right=red, Left=orange.
    pub fn solved_color(self) -> Color {
        match self {
            Face::Up => Color::White,
            Face::Down => Color::Yellow,
            Face::Front => Color::Green,
            Face::Back => Color::Blue,
            Face::Right => Color::Red,
            Face::Left => Color::Orange,
        }
    }

    /// Face whose solved color is `color`
    pub fn with_solved_color(color: Color) -> Self {
        match color {
            Color::White => Face::Up,
            Color::Yellow => Face::Down,
            Color::Green => Face::Front,
            Color::Blue => Face::Back,
            Color::Red => Face::Right,
            Color::Orange => Face::Left,
        }
    }

    /// Notation letter (`U`, `D`, `F`, `B`, `R`, `L`)
    pub fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Front => 'F',
            Face::Back => 'B',
            Face::Right => 'R',
            Face::Left => 'L',
        }
    }

    /// Parse a notation letter (uppercase only, as in standard notation)
    pub fn from_letter(c: char) -> Option<Self> {
        match c {
            'U' => Some(Face::Up),
            'D' => Some(Face::Down),
            'F' => Some(Face::Front),
            'B' => Some(Face::Back),
            'R' => Some(Face::Right),
            'L' => Some(Face::Left),
            _ => None,
        }
    }
}

/// Sticker colors
///
/// Opposite pairs follow the standard Western scheme:
/// white/yellow, green/blue, red/orange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Yellow,
    Green,
    Blue,
    Red,
    Orange,
}

impl Color {
    pub const ALL: [Color; FACE_COUNT] = [
        Color::White,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Red,
        Color::Orange,
    ];

    /// The color on the opposite face of a solved cube
    pub fn opposite(self) -> Self {
        Face::with_solved_color(self).opposite().solved_color()
    }

    /// Parse color from its name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use cube_cross_types::Color;
    ///
    /// assert_eq!(Color::from_str("yellow"), Some(Color::Yellow));
    /// assert_eq!(Color::from_str("Red"), Some(Color::Red));
    /// assert_eq!(Color::from_str("pink"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "white" => Some(Color::White),
            "yellow" => Some(Color::Yellow),
            "green" => Some(Color::Green),
            "blue" => Some(Color::Blue),
            "red" => Some(Color::Red),
            "orange" => Some(Color::Orange),
            _ => None,
        }
    }

    /// Lowercase color name
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Red => "red",
            Color::Orange => "orange",
        }
    }

    /// Single uppercase letter used by plain-text renderings
    pub fn initial(&self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Red => 'R',
            Color::Orange => 'O',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Turn amount applied to a face
///
/// - **Clockwise**: 90° as seen from outside the face (no suffix)
/// - **Prime**: 90° counter-clockwise (`'`)
/// - **Double**: 180° (`2`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modifier {
    Clockwise,
    Prime,
    Double,
}

impl Modifier {
    pub const ALL: [Modifier; 3] = [Modifier::Clockwise, Modifier::Prime, Modifier::Double];

    /// Number of clockwise quarter turns this modifier composes
    ///
    /// Prime is three clockwise quarter turns.
    pub fn quarter_turns(self) -> u8 {
        match self {
            Modifier::Clockwise => 1,
            Modifier::Double => 2,
            Modifier::Prime => 3,
        }
    }

    /// Notation suffix
    pub fn suffix(self) -> &'static str {
        match self {
            Modifier::Clockwise => "",
            Modifier::Prime => "'",
            Modifier::Double => "2",
        }
    }

    pub fn inverse(self) -> Self {
        match self {
            Modifier::Clockwise => Modifier::Prime,
            Modifier::Prime => Modifier::Clockwise,
            Modifier::Double => Modifier::Double,
        }
    }
}

/// A single face turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub face: Face,
    pub modifier: Modifier,
}

impl Move {
    /// All 18 legal moves, grouped by face
    pub const ALL: [Move; 18] = {
        let mut out = [Move::new(Face::Up, Modifier::Clockwise); 18];
        let mut i = 0;
        while i < 18 {
            out[i] = Move::new(Face::ALL[i / 3], Modifier::ALL[i % 3]);
            i += 1;
        }
        out
    };

    pub const fn new(face: Face, modifier: Modifier) -> Self {
        Self { face, modifier }
    }

    /// Move that undoes this one
    pub fn inverse(self) -> Self {
        Self::new(self.face, self.modifier.inverse())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face.letter(), self.modifier.suffix())
    }
}

impl FromStr for Move {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MoveError::InvalidToken {
            token: s.to_string(),
        };

        let mut chars = s.chars();
        let face = chars.next().and_then(Face::from_letter).ok_or_else(invalid)?;
        let modifier = match chars.as_str() {
            "" => Modifier::Clockwise,
            "'" => Modifier::Prime,
            "2" => Modifier::Double,
            _ => return Err(invalid()),
        };
        Ok(Move::new(face, modifier))
    }
}

/// Errors raised at the move parsing boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("invalid move: {token:?}")]
    InvalidToken { token: String },
    #[error("invalid move at position {position}: {token:?}")]
    InvalidSequenceToken { position: usize, token: String },
}

/// Parse a whitespace-separated move sequence
///
/// Fails on the first token outside the 18-token domain, reporting its
/// zero-based position in the sequence.
pub fn parse_sequence(s: &str) -> Result<Vec<Move>, MoveError> {
    s.split_whitespace()
        .enumerate()
        .map(|(position, token)| {
            token
                .parse::<Move>()
                .map_err(|_| MoveError::InvalidSequenceToken {
                    position,
                    token: token.to_string(),
                })
        })
        .collect()
}

/// Render a move sequence as space-separated tokens
pub fn format_sequence(moves: &[Move]) -> String {
    let mut out = String::with_capacity(moves.len() * 3);
    for (i, mv) in moves.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&mv.to_string());
    }
    out
}

/// Sequence that undoes `moves` (reversed, each move inverted)
pub fn invert_sequence(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(|mv| mv.inverse()).collect()
}
