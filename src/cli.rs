use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "padel progression advisor")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Score a match table and print the progression recommendation
    Score {
        /// Match table file (.csv or .json)
        file: PathBuf,
    },
    /// Print the promotion/relegation thresholds for a ladder
    Thresholds {
        /// Gender selecting the ladder ("Dames" for the women's tiers)
        #[arg(short, long, default_value = "Messieurs")]
        gender: String,
    },
}
