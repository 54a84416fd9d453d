//! Command-line parsing.
//!
//! ```text
//! cube-cross scramble [--length N] [--seed S] [--json]
//! cube-cross apply "<moves>" [--json]
//! cube-cross cross-scramble [--seed S] [--json]
//! cube-cross hint "<moves>"
//! cube-cross check "<moves>"
//! ```
//!
//! Every command also accepts `--top COLOR`, `--front COLOR` and
//! `--no-color`, which override the environment configuration.

use anyhow::{anyhow, Context, Result};

use crate::config::{default_front, CliConfig};
use crate::core::ColorScheme;
use crate::types::{parse_sequence, Color, Move};

pub const USAGE: &str = "\
usage: cube-cross <command> [options]

commands:
  scramble            generate a WCA-style scramble and show the cube
  apply \"<moves>\"     apply a move sequence to a solved cube
  cross-scramble      generate a short cross-training scramble
  hint \"<moves>\"      list the cross edges left unsolved after the moves
  check \"<moves>\"     report whether a sequence is redundancy-free

options:
  --length N          scramble length (scramble only)
  --seed S            fixed random seed
  --json              print a JSON report instead of the net
  --top COLOR         cross color
  --front COLOR       front color
  --no-color          plain letters instead of colored stickers";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Scramble,
    Apply(Vec<Move>),
    CrossScramble,
    Hint(Vec<Move>),
    Check(Vec<Move>),
    Help,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Scramble => "scramble",
            Command::Apply(_) => "apply",
            Command::CrossScramble => "cross-scramble",
            Command::Hint(_) => "hint",
            Command::Check(_) => "check",
            Command::Help => "help",
        }
    }
}

/// Flags that override [`CliConfig`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub length: Option<usize>,
    pub seed: Option<u32>,
    pub json: bool,
    pub top: Option<String>,
    pub front: Option<String>,
    pub no_color: bool,
}

impl Overrides {
    /// Fold the flags into `config`
    pub fn apply(&self, config: &mut CliConfig) -> Result<()> {
        if let Some(length) = self.length {
            config.scramble_length = length;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.no_color {
            config.color = false;
        }
        if self.top.is_some() || self.front.is_some() {
            let top = self
                .top
                .clone()
                .unwrap_or_else(|| config.scheme.top().as_str().to_string());
            let front = match &self.front {
                Some(front) => front.clone(),
                None => {
                    let configured = config.scheme.front();
                    match Color::from_str(&top) {
                        Some(c) if c == configured || c == configured.opposite() => {
                            default_front(&top).to_string()
                        }
                        _ => configured.as_str().to_string(),
                    }
                }
            };
            config.scheme = ColorScheme::from_names(&top, &front)
                .with_context(|| format!("invalid color scheme --top {top} --front {front}"))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    pub overrides: Overrides,
}

pub fn parse_args(args: &[String]) -> Result<Invocation> {
    let Some(first) = args.first() else {
        return Ok(Invocation {
            command: Command::Help,
            overrides: Overrides::default(),
        });
    };

    let mut i = 1usize;
    let mut take_moves = |name: &str| -> Result<Vec<Move>> {
        let raw = args
            .get(1)
            .ok_or_else(|| anyhow!("{name}: missing move sequence"))?;
        i = 2;
        parse_sequence(raw).with_context(|| format!("{name}: could not parse {raw:?}"))
    };

    let command = match first.as_str() {
        "scramble" => Command::Scramble,
        "apply" => Command::Apply(take_moves("apply")?),
        "cross-scramble" => Command::CrossScramble,
        "hint" => Command::Hint(take_moves("hint")?),
        "check" => Command::Check(take_moves("check")?),
        "help" | "--help" | "-h" => Command::Help,
        other => return Err(anyhow!("unknown command: {other}")),
    };

    let mut overrides = Overrides::default();
    while i < args.len() {
        let flag = args[i].as_str();
        let mut value = || {
            i += 1;
            args.get(i)
                .ok_or_else(|| anyhow!("{}: missing value for {flag}", command.name()))
        };
        match flag {
            "--length" => {
                let v = value()?;
                overrides.length = Some(
                    v.parse::<usize>()
                        .map_err(|_| anyhow!("invalid --length value: {v}"))?,
                );
            }
            "--seed" => {
                let v = value()?;
                overrides.seed = Some(
                    v.parse::<u32>()
                        .map_err(|_| anyhow!("invalid --seed value: {v}"))?,
                );
            }
            "--top" => overrides.top = Some(value()?.clone()),
            "--front" => overrides.front = Some(value()?.clone()),
            "--json" => overrides.json = true,
            "--no-color" => overrides.no_color = true,
            other => {
                return Err(anyhow!("{}: unknown argument: {other}", command.name()));
            }
        }
        i += 1;
    }

    Ok(Invocation { command, overrides })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_arguments_is_help() {
        assert_eq!(parse_args(&[]).unwrap().command, Command::Help);
    }

    #[test]
    fn scramble_with_flags() {
        let inv = parse_args(&args(&["scramble", "--length", "25", "--seed", "7", "--json"])).unwrap();
        assert_eq!(inv.command, Command::Scramble);
        assert_eq!(inv.overrides.length, Some(25));
        assert_eq!(inv.overrides.seed, Some(7));
        assert!(inv.overrides.json);
    }

    #[test]
    fn apply_parses_moves() {
        let inv = parse_args(&args(&["apply", "R U R' U'", "--no-color"])).unwrap();
        assert_eq!(inv.command, Command::Apply(parse_sequence("R U R' U'").unwrap()));
        assert!(inv.overrides.no_color);
    }

    #[test]
    fn invalid_move_is_rejected() {
        let err = parse_args(&args(&["apply", "R X"])).unwrap_err();
        assert!(format!("{err:#}").contains("invalid move"));
    }

    #[test]
    fn missing_values_and_unknown_flags() {
        assert!(parse_args(&args(&["hint"])).is_err());
        assert!(parse_args(&args(&["scramble", "--seed"])).is_err());
        assert!(parse_args(&args(&["scramble", "--seed", "x"])).is_err());
        assert!(parse_args(&args(&["scramble", "--fast"])).is_err());
        assert!(parse_args(&args(&["solve"])).is_err());
    }

    #[test]
    fn overrides_replace_config_values() {
        let mut config = CliConfig::default();
        let inv = parse_args(&args(&["check", "R", "--top", "white", "--front", "red", "--seed", "3"])).unwrap();
        inv.overrides.apply(&mut config).unwrap();
        assert_eq!(config.scheme.top(), Color::White);
        assert_eq!(config.scheme.front(), Color::Red);
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn top_override_on_front_axis_picks_a_valid_front() {
        let mut config = CliConfig::default();
        let inv = parse_args(&args(&["scramble", "--top", "green"])).unwrap();
        inv.overrides.apply(&mut config).unwrap();
        assert_eq!(config.scheme.top(), Color::Green);
        assert_eq!(config.scheme.front(), Color::Red);
    }

    #[test]
    fn invalid_override_scheme_fails() {
        let mut config = CliConfig::default();
        let inv = parse_args(&args(&["scramble", "--front", "white"])).unwrap();
        assert!(inv.overrides.apply(&mut config).is_err());
    }
}
