//! Terminal output for the cube CLI.
//!
//! Renders a [`core::CubeSnapshot`] as an unfolded net into a small
//! framebuffer, then encodes it either with 24-bit colors (crossterm) or as
//! plain sticker letters for pipes and logs.

pub mod fb;
pub mod net_view;
pub mod renderer;

pub use cube_cross_core as core;
pub use cube_cross_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use net_view::{net_block, NetView};
pub use renderer::{encode_full_into, encode_plain_into, print_frame};
