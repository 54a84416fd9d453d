//! Cube cross trainer (default binary).
//!
//! Prints scrambles, applies move sequences and checks the cross, then
//! shows the cube as an unfolded net.

use anyhow::Result;

use cube_cross::app::{execute, Outcome};
use cube_cross::cli::{parse_args, USAGE};
use cube_cross::config::CliConfig;
use cube_cross::session_log::SessionLog;
use cube_cross::term::{print_frame, NetView};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let invocation = parse_args(&args)?;

    let mut config = CliConfig::from_env()?;
    invocation.overrides.apply(&mut config)?;

    let Some(outcome) = execute(&invocation.command, &config) else {
        println!("{USAGE}");
        return Ok(());
    };

    if invocation.overrides.json {
        println!("{}", serde_json::to_string(&outcome.record(true))?);
    } else {
        print_text(&outcome, config.color)?;
    }

    if let Some(path) = config.log_path.as_deref() {
        // Logging never changes the command's result.
        let written = SessionLog::open(path).and_then(|mut log| log.write(&outcome.record(true)));
        if let Err(e) = written {
            eprintln!("[cube-cross] session log disabled: {e:#}");
        }
    }

    Ok(())
}

fn print_text(outcome: &Outcome, color: bool) -> Result<()> {
    println!("{}", outcome.summary());
    if outcome.show_net {
        let fb = NetView::default().render(&outcome.snapshot);
        print_frame(&fb, color)?;
    }
    Ok(())
}
