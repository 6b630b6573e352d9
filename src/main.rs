use anyhow::Result;

use padel_progression::cli::Command;
use padel_progression::{handle_score, handle_thresholds, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Score { file } => handle_score(file),
        Command::Thresholds { gender } => handle_thresholds(gender),
    }
}
