//! Color scheme - which colors the cross is checked against
//!
//! A scheme names the cross color (`top`, the color that belongs on the
//! solving face) and the color expected in front. The remaining side colors
//! follow from a fixed ring per axis, rotated so `front` comes first. The
//! ring for white/yellow is green, red, blue, orange; the other axes read
//! their ring off the solved cube in the same turning order.
//!
//! Schemes are validated on construction: a front color on the same axis as
//! the top color has no rotation and is rejected.

use thiserror::Error;

use crate::types::{Color, Face};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemeError {
    #[error("front color {front} shares an axis with top color {top}")]
    SameAxis { top: Color, front: Color },
    #[error("unknown color: {0:?}")]
    UnknownColor(String),
}

/// A validated (top, front) pairing with its resolved side colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorScheme {
    top: Color,
    front: Color,
    /// front, right, back, left
    sides: [Color; 4],
}

impl ColorScheme {
    pub fn new(top: Color, front: Color) -> Result<Self, SchemeError> {
        let ring = side_ring(top);
        let start = ring
            .iter()
            .position(|&c| c == front)
            .ok_or(SchemeError::SameAxis { top, front })?;
        let sides = [0, 1, 2, 3].map(|k| ring[(start + k) % 4]);
        Ok(Self { top, front, sides })
    }

    /// Build from color names, as read from configuration
    pub fn from_names(top: &str, front: &str) -> Result<Self, SchemeError> {
        let parse = |s: &str| {
            Color::from_str(s).ok_or_else(|| SchemeError::UnknownColor(s.to_string()))
        };
        Self::new(parse(top)?, parse(front)?)
    }

    /// Every valid scheme (six top colors x four fronts)
    pub fn all() -> impl Iterator<Item = ColorScheme> {
        Color::ALL.into_iter().flat_map(|top| {
            side_ring(top)
                .into_iter()
                .filter_map(move |front| Self::new(top, front).ok())
        })
    }

    /// Color of the cross
    pub fn top(&self) -> Color {
        self.top
    }

    pub fn front(&self) -> Color {
        self.front
    }

    /// Side colors in order front, right, back, left
    pub fn side_colors(&self) -> [Color; 4] {
        self.sides
    }
}

impl Default for ColorScheme {
    /// Yellow cross, green front: the solved cube's own Down layer
    fn default() -> Self {
        Self {
            top: Color::Yellow,
            front: Color::Green,
            sides: [Color::Green, Color::Red, Color::Blue, Color::Orange],
        }
    }
}

/// The four colors around `top`'s axis, in turning order
fn side_ring(top: Color) -> [Color; 4] {
    let faces = match Face::with_solved_color(top) {
        Face::Up | Face::Down => [Face::Front, Face::Right, Face::Back, Face::Left],
        Face::Front | Face::Back => [Face::Up, Face::Right, Face::Down, Face::Left],
        Face::Right | Face::Left => [Face::Front, Face::Up, Face::Back, Face::Down],
    };
    faces.map(Face::solved_color)
}
