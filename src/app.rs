//! Command execution, separated from printing so it can be tested.

use crate::cli::Command;
use crate::config::CliConfig;
use crate::core::rng::entropy_seed;
use crate::core::{
    cross_hint, is_well_formed, CrossHint, CubeSnapshot, FaceletCube, ScrambleGenerator, SimpleRng,
};
use crate::session_log::{now_ms, SessionRecord};
use crate::types::{format_sequence, Move};

/// Result of running one command against a fresh solved cube
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub command: &'static str,
    /// Seed used for generated scrambles
    pub seed: Option<u32>,
    pub moves: Vec<Move>,
    pub well_formed: bool,
    pub hint: CrossHint,
    pub snapshot: CubeSnapshot,
    /// Whether the text output includes the cube net
    pub show_net: bool,
}

impl Outcome {
    pub fn cross_solved(&self) -> bool {
        self.snapshot.cross_solved
    }

    /// Text printed above the net (or instead of it)
    pub fn summary(&self) -> String {
        let moves = format_sequence(&self.moves);
        match self.command {
            "hint" => self.hint.to_string(),
            "check" => format!(
                "well-formed: {}\ncross: {}",
                if self.well_formed { "yes" } else { "no" },
                if self.cross_solved() { "solved" } else { "unsolved" }
            ),
            _ => match self.seed {
                Some(seed) => format!("{moves}  (seed {seed})"),
                None => moves,
            },
        }
    }

    pub fn record(&self, with_snapshot: bool) -> SessionRecord<'_> {
        SessionRecord {
            ts: now_ms(),
            command: self.command,
            seed: self.seed,
            moves: format_sequence(&self.moves),
            well_formed: self.well_formed,
            cross_solved: self.cross_solved(),
            hint: (!self.hint.is_complete()).then(|| self.hint.to_string()),
            snapshot: with_snapshot.then_some(&self.snapshot),
        }
    }
}

/// Run `command`; returns `None` for [`Command::Help`]
pub fn execute(command: &Command, config: &CliConfig) -> Option<Outcome> {
    let (moves, seed, show_net) = match command {
        Command::Help => return None,
        Command::Scramble => {
            let seed = config.seed.unwrap_or_else(entropy_seed);
            let mut gen = ScrambleGenerator::new(SimpleRng::new(seed));
            (gen.generate(config.scramble_length), Some(seed), true)
        }
        Command::CrossScramble => {
            let seed = config.seed.unwrap_or_else(entropy_seed);
            let mut gen = ScrambleGenerator::new(SimpleRng::new(seed));
            (gen.cross_training(), Some(seed), true)
        }
        Command::Apply(moves) => (moves.clone(), None, true),
        Command::Hint(moves) | Command::Check(moves) => (moves.clone(), None, false),
    };

    let mut cube = FaceletCube::solved();
    cube.apply_all(&moves);

    Some(Outcome {
        command: command.name(),
        seed,
        well_formed: is_well_formed(&moves),
        hint: cross_hint(&cube, &config.scheme),
        snapshot: CubeSnapshot::capture(&cube, &config.scheme),
        moves,
        show_net,
    })
}
