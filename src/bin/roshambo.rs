//! Rock, Paper, Scissors
//!
//! Plays one seven-round game between two strategies in the terminal.
//! Ctrl+C leaves the table cleanly; a second Ctrl+C exits immediately.

use clap::Parser;
use roshambo::console::*;
use roshambo::play::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(&args)?;
    let cancel = Cancel::default();
    interrupts(cancel.clone());
    match tokio::task::spawn_blocking(move || Table::new(args, cancel).run()).await?? {
        Ending::Finished(verdict) => log::info!("{:?} {:?}", verdict.winner, verdict.score),
        Ending::Cancelled { played } => log::info!("left after {} rounds", played.len()),
    }
    Ok(())
}
