//! NetView: lays a cube snapshot out as an unfolded net.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! ```text
//!        U
//!     L  F  R  B
//!        D
//! ```

use crate::core::CubeSnapshot;
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::Face;

/// Face position in the net, in face-sized blocks (column, row)
pub fn net_block(face: Face) -> (u16, u16) {
    match face {
        Face::Up => (1, 0),
        Face::Left => (0, 1),
        Face::Front => (1, 1),
        Face::Right => (2, 1),
        Face::Back => (3, 1),
        Face::Down => (1, 2),
    }
}

/// Renders the net into a framebuffer.
pub struct NetView {
    /// Sticker width in terminal columns.
    cell_w: u16,
    /// Blank columns between neighbouring faces.
    gap: u16,
}

impl Default for NetView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2, gap: 1 }
    }
}

impl NetView {
    pub fn new(cell_w: u16, gap: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            gap,
        }
    }

    fn face_width(&self) -> u16 {
        self.cell_w * 3 + self.gap
    }

    /// Framebuffer size needed for the net plus one status line.
    pub fn size(&self) -> (u16, u16) {
        (self.face_width() * 4, 3 * 3 + 2)
    }

    /// Render `snap` into a freshly allocated framebuffer.
    pub fn render(&self, snap: &CubeSnapshot) -> FrameBuffer {
        let (w, h) = self.size();
        let mut fb = FrameBuffer::new(w, h);
        self.render_into(snap, &mut fb);
        fb
    }

    pub fn render_into(&self, snap: &CubeSnapshot, fb: &mut FrameBuffer) {
        for face in Face::ALL {
            let (bx, by) = net_block(face);
            let x0 = bx * self.face_width();
            let y0 = by * 3;
            for (i, &color) in snap.face(face).iter().enumerate() {
                let x = x0 + (i as u16 % 3) * self.cell_w;
                let y = y0 + i as u16 / 3;
                let style = CellStyle::sticker(color);
                fb.put_char(x, y, color.initial(), style);
                for dx in 1..self.cell_w {
                    fb.put_char(x + dx, y, ' ', style);
                }
            }
        }

        let status = if snap.cross_solved {
            "cross: solved"
        } else {
            "cross: unsolved"
        };
        fb.put_str(0, 3 * 3 + 1, status, CellStyle::default());
    }
}
