//! Runtime configuration for the CLI.
//!
//! Read from environment variables, then overridden by command-line flags:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `CUBE_CROSS_TOP_COLOR` | `yellow` | cross color |
//! | `CUBE_CROSS_FRONT_COLOR` | `green` | color expected in front |
//! | `CUBE_CROSS_SCRAMBLE_LENGTH` | `20` | scramble length |
//! | `CUBE_CROSS_SEED` | unset | fixed seed (unset: clock entropy) |
//! | `CUBE_CROSS_LOG_PATH` | unset | append a JSON line per command |
//! | `CUBE_CROSS_NO_COLOR` | unset | `1`/`true` prints plain letters |

use anyhow::{Context, Result};

use crate::core::ColorScheme;
use crate::types::{Color, DEFAULT_SCRAMBLE_LENGTH};

pub const ENV_TOP_COLOR: &str = "CUBE_CROSS_TOP_COLOR";
pub const ENV_FRONT_COLOR: &str = "CUBE_CROSS_FRONT_COLOR";
pub const ENV_SCRAMBLE_LENGTH: &str = "CUBE_CROSS_SCRAMBLE_LENGTH";
pub const ENV_SEED: &str = "CUBE_CROSS_SEED";
pub const ENV_LOG_PATH: &str = "CUBE_CROSS_LOG_PATH";
pub const ENV_NO_COLOR: &str = "CUBE_CROSS_NO_COLOR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub scheme: ColorScheme,
    pub scramble_length: usize,
    pub seed: Option<u32>,
    pub log_path: Option<String>,
    pub color: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            scheme: ColorScheme::default(),
            scramble_length: DEFAULT_SCRAMBLE_LENGTH,
            seed: None,
            log_path: None,
            color: true,
        }
    }
}

impl CliConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (environment, or a map in tests)
    ///
    /// An unparseable color scheme is an error. Unparseable numbers fall back
    /// to their defaults with a warning on stderr.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let top = non_empty(ENV_TOP_COLOR);
        let front = non_empty(ENV_FRONT_COLOR);
        let scheme = if top.is_some() || front.is_some() {
            let top = top.unwrap_or_else(|| defaults.scheme.top().as_str().to_string());
            let front = front.unwrap_or_else(|| default_front(&top).to_string());
            ColorScheme::from_names(&top, &front).with_context(|| {
                format!("invalid color scheme in {ENV_TOP_COLOR}/{ENV_FRONT_COLOR}")
            })?
        } else {
            defaults.scheme
        };

        let scramble_length = non_empty(ENV_SCRAMBLE_LENGTH)
            .and_then(|s| parse_or_warn(ENV_SCRAMBLE_LENGTH, &s))
            .unwrap_or(defaults.scramble_length);

        let seed = non_empty(ENV_SEED).and_then(|s| parse_or_warn(ENV_SEED, &s));

        let log_path = non_empty(ENV_LOG_PATH);

        let color = !non_empty(ENV_NO_COLOR)
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        Ok(Self {
            scheme,
            scramble_length,
            seed,
            log_path,
            color,
        })
    }
}

/// Green in front unless the top color sits on the green/blue axis
pub(crate) fn default_front(top: &str) -> &'static str {
    match Color::from_str(top) {
        Some(Color::Green) | Some(Color::Blue) => "red",
        _ => "green",
    }
}

fn parse_or_warn<T: std::str::FromStr>(key: &str, value: &str) -> Option<T> {
    match value.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            eprintln!("[cube-cross] ignoring invalid {key}={value:?}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = CliConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let config = CliConfig::from_lookup(lookup(&[
            (ENV_TOP_COLOR, "white"),
            (ENV_FRONT_COLOR, "blue"),
            (ENV_SCRAMBLE_LENGTH, "25"),
            (ENV_SEED, "42"),
            (ENV_LOG_PATH, " /tmp/cube.jsonl "),
            (ENV_NO_COLOR, "TRUE"),
        ]))
        .unwrap();
        assert_eq!(config.scheme.top(), Color::White);
        assert_eq!(config.scheme.front(), Color::Blue);
        assert_eq!(config.scramble_length, 25);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_path.as_deref(), Some("/tmp/cube.jsonl"));
        assert!(!config.color);
    }

    #[test]
    fn invalid_scheme_is_an_error() {
        assert!(CliConfig::from_lookup(lookup(&[
            (ENV_TOP_COLOR, "yellow"),
            (ENV_FRONT_COLOR, "white"),
        ]))
        .is_err());
        assert!(CliConfig::from_lookup(lookup(&[(ENV_TOP_COLOR, "magenta")])).is_err());
    }

    #[test]
    fn top_only_picks_a_valid_front() {
        let config = CliConfig::from_lookup(lookup(&[(ENV_TOP_COLOR, "blue")])).unwrap();
        assert_eq!(config.scheme.top(), Color::Blue);
        assert_eq!(config.scheme.front(), Color::Red);
    }

    #[test]
    fn bad_numbers_fall_back() {
        let config = CliConfig::from_lookup(lookup(&[
            (ENV_SCRAMBLE_LENGTH, "many"),
            (ENV_SEED, "-3"),
            (ENV_LOG_PATH, "   "),
        ]))
        .unwrap();
        assert_eq!(config.scramble_length, DEFAULT_SCRAMBLE_LENGTH);
        assert_eq!(config.seed, None);
        assert_eq!(config.log_path, None);
    }
}
