//! Cube cross trainer (workspace facade crate).
//!
//! Re-exports `cube_cross::{core,term,types}` from the dedicated crates under
//! `crates/` and holds the CLI layer: argument parsing, environment
//! configuration, command execution and the session log.

pub use cube_cross_core as core;
pub use cube_cross_term as term;
pub use cube_cross_types as types;

pub mod app;
pub mod cli;
pub mod config;
pub mod session_log;
