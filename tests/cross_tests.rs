//! Cross detection tests - predicate, hints and solution checks

use cube_cross::core::{
    cross_hint, is_cross_solved, verify_cross_solution, ColorScheme, CrossEdge, FaceletCube,
};
use cube_cross::types::{parse_sequence, Color};

fn cube_after(moves: &str) -> FaceletCube {
    let mut cube = FaceletCube::solved();
    cube.apply_all(&parse_sequence(moves).unwrap());
    cube
}

#[test]
fn test_solved_cube_has_cross_under_default_scheme() {
    assert!(is_cross_solved(&FaceletCube::solved(), &ColorScheme::default()));
}

#[test]
fn test_upper_layer_moves_keep_the_cross() {
    let scheme = ColorScheme::default();
    for moves in ["U", "U2", "U'", "U R U' R'"] {
        assert!(is_cross_solved(&cube_after(moves), &scheme), "{moves}");
    }
}

#[test]
fn test_side_quarter_turn_breaks_the_cross() {
    let scheme = ColorScheme::default();
    for moves in ["F", "R", "B", "L", "D"] {
        assert!(!is_cross_solved(&cube_after(moves), &scheme), "{moves}");
    }
}

#[test]
fn test_four_quarter_turns_restore_the_cross() {
    let scheme = ColorScheme::default();
    assert!(is_cross_solved(&cube_after("F F F F"), &scheme));
    assert!(is_cross_solved(&cube_after("D D D D"), &scheme));
}

#[test]
fn test_white_top_scheme_never_matches_yellow_down_center() {
    let scheme = ColorScheme::new(Color::White, Color::Green).unwrap();
    assert!(!is_cross_solved(&FaceletCube::solved(), &scheme));
    let hint = cross_hint(&FaceletCube::solved(), &scheme);
    assert!(!hint.center_matches);
    assert!(!hint.is_complete());
}

#[test]
fn test_hint_names_each_broken_slot() {
    let scheme = ColorScheme::default();

    let hint = cross_hint(&cube_after("F2"), &scheme);
    assert_eq!(hint.unsolved.as_slice(), &[CrossEdge::Front]);
    assert_eq!(hint.to_string(), "edges to fix: DF");

    let hint = cross_hint(&cube_after("L2 B2"), &scheme);
    assert_eq!(hint.unsolved.as_slice(), &[CrossEdge::Back, CrossEdge::Left]);

    let hint = cross_hint(&FaceletCube::solved(), &scheme);
    assert!(hint.is_complete());
    assert_eq!(hint.to_string(), "cross complete");
}

#[test]
fn test_verify_solution_leaves_cube_untouched() {
    let scheme = ColorScheme::default();
    let cube = cube_after("F2 R'");
    let before = cube;

    assert!(verify_cross_solution(&cube, &parse_sequence("R F2").unwrap(), &scheme));
    assert!(!verify_cross_solution(&cube, &parse_sequence("R").unwrap(), &scheme));
    assert_eq!(cube, before);
}

#[test]
fn test_every_scheme_resolves_four_distinct_sides() {
    let schemes: Vec<ColorScheme> = ColorScheme::all().collect();
    assert_eq!(schemes.len(), 24);
    for scheme in schemes {
        let sides = scheme.side_colors();
        assert_eq!(sides[0], scheme.front());
        for side in sides {
            assert_ne!(side, scheme.top());
            assert_ne!(side, scheme.top().opposite());
        }
        assert_eq!(sides[0].opposite(), sides[2]);
        assert_eq!(sides[1].opposite(), sides[3]);
    }
}

#[test]
fn test_scheme_rejects_same_axis_front() {
    assert!(ColorScheme::new(Color::Yellow, Color::White).is_err());
    assert!(ColorScheme::new(Color::Yellow, Color::Yellow).is_err());
    assert!(ColorScheme::from_names("yellow", "purple").is_err());
}
