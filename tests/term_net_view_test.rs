use cube_cross::core::{ColorScheme, CubeSnapshot, FaceletCube};
use cube_cross::term::{encode_plain_into, net_block, NetView, Rgb};
use cube_cross::types::{parse_sequence, Color, Face};

fn snapshot_after(moves: &str) -> CubeSnapshot {
    let mut cube = FaceletCube::solved();
    cube.apply_all(&parse_sequence(moves).unwrap());
    CubeSnapshot::capture(&cube, &ColorScheme::default())
}

#[test]
fn term_view_places_faces_in_a_cross_shaped_net() {
    let fb = NetView::new(1, 1).render(&snapshot_after(""));
    let text: Vec<String> = (0..fb.height()).map(|y| fb.row_text(y)).collect();
    assert_eq!(text[0], "    WWW");
    assert_eq!(text[4], "OOO GGG RRR BBB");
    assert_eq!(text[6], "    YYY");
    assert_eq!(text[9], "");
    assert_eq!(text[10], "cross: solved");
}

#[test]
fn term_view_renders_stickers_two_columns_wide_by_default() {
    let fb = NetView::default().render(&snapshot_after(""));
    let (bx, by) = net_block(Face::Front);
    // Block (1, 1) starts at column 7, row 3.
    let x0 = bx * 7;
    let y0 = by * 3;
    let first = fb.get(x0, y0).unwrap();
    let pad = fb.get(x0 + 1, y0).unwrap();
    assert_eq!(first.ch, 'G');
    assert_eq!(pad.ch, ' ');
    assert_eq!(first.style.bg, Rgb::sticker(Color::Green));
    assert_eq!(pad.style.bg, Rgb::sticker(Color::Green));
}

#[test]
fn term_view_reports_broken_cross() {
    let fb = NetView::new(1, 1).render(&snapshot_after("F"));
    assert_eq!(fb.row_text(10), "cross: unsolved");
    // F moves the left column of R onto the bottom row of U.
    assert_eq!(fb.row_text(2), "    OOO");
}

#[test]
fn term_plain_output_has_one_line_per_row() {
    let fb = NetView::new(1, 1).render(&snapshot_after("R U R' U'"));
    let mut out = Vec::new();
    encode_plain_into(&fb, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), fb.height() as usize);
    assert!(text.ends_with("cross: solved\n"));
}
