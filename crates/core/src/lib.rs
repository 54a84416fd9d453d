//! Core cube logic - pure, deterministic, and testable
//!
//! This crate holds everything with real invariants: the facelet model, the
//! move engine, cross detection and the scramble generator. It has **zero
//! dependencies** on terminals or I/O:
//!
//! - **Deterministic**: Same seed produces identical scrambles
//! - **Closed**: A cube can only change through face turns, so every state
//!   is a legal permutation of the solved cube
//! - **Fast**: Face turns are allocation-free table lookups
//!
//! # Module Structure
//!
//! - [`cube`]: 54-sticker facelet model
//! - [`engine`]: table-driven face turns
//! - [`scheme`]: color scheme resolution for the cross
//! - [`cross`]: cross predicate, hints and solution checks
//! - [`scramble`]: redundancy-free scramble generation and validation
//! - [`rng`]: injectable random source with a seeded LCG
//! - [`snapshot`]: read-only view for renderers
//!
//! # Example
//!
//! ```
//! use cube_cross_core::{is_well_formed, ColorScheme, FaceletCube, ScrambleGenerator, SimpleRng};
//!
//! let mut cube = FaceletCube::solved();
//! let scheme = ColorScheme::default();
//! assert!(cube.is_cross_solved(&scheme));
//!
//! let scramble = ScrambleGenerator::new(SimpleRng::new(12345)).generate(20);
//! assert!(is_well_formed(&scramble));
//!
//! cube.apply_all(&scramble);
//! assert!(!cube.is_solved());
//! ```

pub mod cross;
pub mod cube;
pub mod engine;
pub mod rng;
pub mod scheme;
pub mod scramble;
pub mod snapshot;

pub use cube_cross_types as types;

// Re-export commonly used types for convenience
pub use cross::{cross_hint, is_cross_solved, verify_cross_solution, CrossEdge, CrossHint};
pub use cube::FaceletCube;
pub use rng::{RandomSource, SimpleRng};
pub use scheme::{ColorScheme, SchemeError};
pub use scramble::{is_well_formed, scramble_cube, ScrambleGenerator};
pub use snapshot::CubeSnapshot;
