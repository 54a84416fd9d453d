//! Scramble generator tests - redundancy rules and determinism

use cube_cross::core::scramble::{accepts, CROSS_TRAINING_MOVES};
use cube_cross::core::{is_well_formed, scramble_cube, FaceletCube, ScrambleGenerator, SimpleRng};
use cube_cross::types::{parse_sequence, DEFAULT_SCRAMBLE_LENGTH};

#[test]
fn test_generated_scrambles_are_well_formed() {
    for seed in 0..200 {
        let moves = ScrambleGenerator::new(SimpleRng::new(seed)).generate(40);
        assert_eq!(moves.len(), 40);
        assert!(is_well_formed(&moves), "seed {seed}");
        for window in moves.windows(2) {
            assert_ne!(window[0].face, window[1].face);
        }
        for window in moves.windows(3) {
            let sandwich = window[0].face == window[2].face
                && window[1].face == window[2].face.opposite();
            assert!(!sandwich, "seed {seed}: {window:?}");
        }
    }
}

#[test]
fn test_same_seed_same_scramble() {
    let a = ScrambleGenerator::new(SimpleRng::new(12345)).generate_default();
    let b = ScrambleGenerator::new(SimpleRng::new(12345)).generate_default();
    assert_eq!(a.len(), DEFAULT_SCRAMBLE_LENGTH);
    assert_eq!(a, b);
}

#[test]
fn test_different_seeds_usually_differ() {
    let a = ScrambleGenerator::new(SimpleRng::new(1)).generate(20);
    let b = ScrambleGenerator::new(SimpleRng::new(2)).generate(20);
    assert_ne!(a, b);
}

#[test]
fn test_zero_length_scramble_is_empty() {
    let moves = ScrambleGenerator::new(SimpleRng::new(5)).generate(0);
    assert!(moves.is_empty());
    assert!(is_well_formed(&moves));
}

#[test]
fn test_validator_rejects_redundant_sequences() {
    for bad in ["R R", "U U'", "R L R", "U D U'", "F B2 F"] {
        assert!(!is_well_formed(&parse_sequence(bad).unwrap()), "{bad}");
    }
    for good in ["", "R", "R L", "R L U", "R U R", "F B U F"] {
        assert!(is_well_formed(&parse_sequence(good).unwrap()), "{good}");
    }
}

#[test]
fn test_accepts_matches_rules() {
    use cube_cross::types::Face::*;
    assert!(accepts(Up, None, None));
    assert!(!accepts(Up, Some(Up), None));
    assert!(!accepts(Up, Some(Down), Some(Up)));
    assert!(accepts(Up, Some(Down), Some(Front)));
    assert!(accepts(Up, Some(Right), Some(Up)));
}

#[test]
fn test_scramble_cube_applies_what_it_returns() {
    let mut cube = FaceletCube::solved();
    let moves = scramble_cube(&mut cube, 20, SimpleRng::new(7));

    let mut replay = FaceletCube::solved();
    replay.apply_all(&moves);
    assert_eq!(cube, replay);
    assert!(!cube.is_solved());
}

#[test]
fn test_cross_training_uses_the_training_set() {
    let mut gen = ScrambleGenerator::new(SimpleRng::new(31));
    for _ in 0..10 {
        let moves = gen.cross_training();
        assert_eq!(moves.len(), 8);
        assert!(moves.iter().all(|mv| CROSS_TRAINING_MOVES.contains(mv)));
    }
}

#[test]
fn test_generator_borrowing_rng_advances_it() {
    let mut rng = SimpleRng::new(8);
    let first = ScrambleGenerator::new(&mut rng).generate(10);
    let second = ScrambleGenerator::new(&mut rng).generate(10);
    assert_ne!(first, second);
}
