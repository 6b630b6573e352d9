pub mod cli;
pub mod domain;
pub mod loader;
pub mod scoring;

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use crate::cli::{Cli, Command};
use crate::scoring::threshold_table;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_score(file: &Path) -> Result<()> {
    let matches = loader::load_matches(file)?;
    let result = scoring::score_matches(&matches)?;

    println!(
        "{} {}",
        "Ratio de victoires pondéré :".bold(),
        format!("{:.2}%", result.ratio).cyan()
    );
    println!("{}", result.recommendation.message());
    Ok(())
}

pub fn handle_thresholds(gender: &str) -> Result<()> {
    let table = threshold_table(gender);

    println!("{:<8} {:>8} {:>8} {:>8}", "Tier".bold(), "drop", "up1", "up2");
    for (category, limits) in table {
        println!(
            "{:<8} {:>7}% {:>7}% {:>7}%",
            category, limits.drop, limits.up1, limits.up2
        );
    }
    Ok(())
}
