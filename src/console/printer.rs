use crate::ROUNDS;
use crate::play::*;
use colored::Colorize;
use std::fmt::Display;
use std::io::Write;

/// Colored play-by-play for a game, one block per round.
pub struct Printer<W: Write> {
    out: W,
    p1: String,
    p2: String,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, p1: impl Display, p2: impl Display) -> Self {
        Self {
            out,
            p1: p1.to_string(),
            p2: p2.to_string(),
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, line: impl Display) {
        if let Err(e) = writeln!(self.out, "{}", line) {
            log::warn!("failed to print: {}", e);
        }
    }

    fn banner(&mut self, title: &str) {
        let rule = "~".repeat(title.len() + 10);
        self.emit("");
        self.emit(rule.yellow().bold());
        self.emit(format!("~~~~ {} ~~~~", title).yellow().bold());
        self.emit(rule.yellow().bold());
    }

    fn scores(&mut self, (s1, s2): (crate::Score, crate::Score)) {
        self.emit(format!("Player 1 Score: {}", s1).green());
        self.emit(format!("Player 2 Score: {}", s2).magenta());
    }
}

impl<W: Write> Observer for Printer<W> {
    fn started(&mut self) {
        self.banner("Welcome to a new Rock, Paper, Scissors game!");
        self.emit(format!("\nPlayer 1 ({}) vs Player 2 ({})", self.p1, self.p2).yellow());
        self.emit("Let's get started!".yellow());
    }

    fn round(&mut self, index: usize, round: &Round) {
        self.emit("");
        self.emit(format!("Round {} of {}:", index, ROUNDS).yellow().bold());
        self.emit(format!("Player 1: {}  Player 2: {}", round.p1, round.p2));
        match round.outcome {
            Outcome::P1 => self.emit(
                format!("{} beats {}! Player 1 wins this round!", round.p1, round.p2).green(),
            ),
            Outcome::P2 => self.emit(
                format!("{} beats {}! Player 2 wins this round!", round.p2, round.p1).magenta(),
            ),
            Outcome::Tie => self.emit("This was a tie!".cyan()),
        }
        self.scores(round.score);
    }

    fn finished(&mut self, verdict: &Verdict) {
        self.banner("GAME OVER!");
        self.scores(verdict.score);
        match verdict.winner {
            Winner::P1 => self.emit("And the winner is... PLAYER 1!".green().bold()),
            Winner::P2 => self.emit("And the winner is... PLAYER 2!".magenta().bold()),
            Winner::Draw => self.emit("There is no winner! It was a draw!".cyan().bold()),
        }
    }

    fn cancelled(&mut self, played: &[Round]) {
        self.emit("");
        self.emit(
            format!(
                "Game cancelled after {} of {} rounds. No winner declared.",
                played.len(),
                ROUNDS
            )
            .yellow(),
        );
    }
}
