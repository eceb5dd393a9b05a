use super::*;
use crate::play::*;
use crate::players::*;
use anyhow::Context;
use dialoguer::Select;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::cell::OnceCell;
use std::io::IsTerminal;
use std::io::Write;

/// Seats two strategies from the command line and plays one game.
#[derive(Debug)]
pub struct Table {
    args: Args,
    cancel: Cancel,
}

impl Table {
    pub fn new(args: Args, cancel: Cancel) -> Self {
        Self { args, cancel }
    }

    pub fn run(self) -> anyhow::Result<Ending> {
        self.run_to(&mut std::io::stdout())
    }

    /// Play one game, writing the play-by-play or the JSON transcript to
    /// `out`. Prompts never go to `out` when it carries JSON.
    fn run_to<W: Write>(self, out: &mut W) -> anyhow::Result<Ending> {
        let Some((p1, p2)) = self.lineup()? else {
            log::warn!("no opponent chosen, leaving the table");
            return Ok(Ending::Cancelled { played: vec![] });
        };
        let ref mut rng = self.rng();
        let stdin = OnceCell::new();
        let prompt = |label: &str| -> Box<dyn Prompt> {
            Box::new(
                stdin
                    .get_or_init(|| Terminal::stdin(self.echo(), self.cancel.clone()))
                    .labelled(label),
            )
        };
        let game = Game::new(
            p1.seat(rng, || prompt("Player 1")),
            p2.seat(rng, || prompt("Player 2")),
        )
        .with_cancel(self.cancel.clone());
        match self.args.json {
            false => Ok(game.play(&mut Printer::new(&mut *out, p1, p2))),
            true => {
                let ending = game.play(&mut Silent);
                serde_json::to_writer_pretty(&mut *out, &ending).context("serialize transcript")?;
                writeln!(out).context("write transcript")?;
                Ok(ending)
            }
        }
    }

    /// Stdout belongs to the transcript under `--json`, so prompts move to stderr.
    fn echo(&self) -> Echo {
        match self.args.json {
            true => Echo::Stderr,
            false => Echo::Stdout,
        }
    }

    /// Strategies for both seats. Without any choice on the command line an
    /// interactive player picks an opponent from a menu and plays seat two.
    fn lineup(&self) -> anyhow::Result<Option<(Strategy, Strategy)>> {
        match (self.args.p1, self.args.p2) {
            (None, None) if !self.args.json && std::io::stdin().is_terminal() => {
                let opponent = Self::menu()?.filter(|_| !self.cancel.is_cancelled());
                Ok(opponent.map(|p1| (p1, Strategy::Human)))
            }
            (p1, p2) => Ok(Some((
                p1.unwrap_or(Strategy::Random),
                p2.unwrap_or(Strategy::Human),
            ))),
        }
    }

    fn menu() -> anyhow::Result<Option<Strategy>> {
        let choices = Strategy::ALL
            .into_iter()
            .filter(|s| !s.is_human())
            .collect::<Vec<Strategy>>();
        match Select::new()
            .with_prompt("Choose your opponent")
            .items(&choices)
            .default(1)
            .interact_opt()
        {
            Ok(choice) => Ok(choice.and_then(|i| choices.get(i).copied())),
            Err(dialoguer::Error::IO(e)) if e.kind() == std::io::ErrorKind::Interrupted => Ok(None),
            Err(e) => Err(e).context("choose opponent"),
        }
    }

    /// One generator for the whole table. The seed is logged so any game
    /// can be replayed with `--seed`.
    fn rng(&self) -> SmallRng {
        let seed = self.args.seed.unwrap_or_else(rand::random);
        log::info!("seed {}", seed);
        SmallRng::seed_from_u64(seed)
    }
}
