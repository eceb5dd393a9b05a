use crate::players::Strategy;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Rock, paper, scissors over seven rounds", long_about = None)]
pub struct Args {
    /// Strategy for player 1 (default: random, or chosen from a menu)
    #[arg(long, value_enum)]
    pub p1: Option<Strategy>,
    /// Strategy for player 2 (default: human)
    #[arg(long, value_enum)]
    pub p2: Option<Strategy>,
    /// Seed for every random choice in the game
    #[arg(long)]
    pub seed: Option<u64>,
    /// Print the transcript as JSON instead of the colored play-by-play
    #[arg(long)]
    pub json: bool,
    /// Log debug output to the terminal
    #[arg(short, long)]
    pub verbose: bool,
    /// Also write debug logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
