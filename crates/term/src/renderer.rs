//! Encoders that turn a framebuffer into terminal output.
//!
//! Output is inline (no alternate screen): the CLI prints one net and exits.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Encode the framebuffer with 24-bit colors into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut current_style: Option<CellStyle> = None;
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        // Reset before the newline so colors do not bleed to the edge.
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
        current_style = None;
        out.queue(Print("\n"))?;
    }
    Ok(())
}

/// Encode the framebuffer as plain text (sticker letters only).
pub fn encode_plain_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    for y in 0..fb.height() {
        out.extend_from_slice(fb.row_text(y).as_bytes());
        out.push(b'\n');
    }
    Ok(())
}

/// Write a framebuffer to stdout, colored or plain.
pub fn print_frame(fb: &FrameBuffer, color: bool) -> Result<()> {
    let mut buf = Vec::with_capacity(4 * 1024);
    if color {
        encode_full_into(fb, &mut buf)?;
    } else {
        encode_plain_into(fb, &mut buf)?;
    }
    let mut stdout = io::stdout().lock();
    stdout.write_all(&buf)?;
    stdout.flush()?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
