use super::*;
use crate::ROUNDS;
use crate::Score;
use crate::players::Seat;

/// Final call on a finished game.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    P1,
    P2,
    Draw,
}

impl From<(Score, Score)> for Winner {
    fn from((p1, p2): (Score, Score)) -> Self {
        match p1.cmp(&p2) {
            std::cmp::Ordering::Greater => Self::P1,
            std::cmp::Ordering::Less => Self::P2,
            std::cmp::Ordering::Equal => Self::Draw,
        }
    }
}

/// Result of a game that ran all its rounds.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Verdict {
    pub winner: Winner,
    /// Final scores, (p1, p2).
    pub score: (Score, Score),
    /// Every round, in the order played.
    pub rounds: Vec<Round>,
}

/// How a game ended. Cancellation is an ordinary ending, not an error.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "ending", rename_all = "lowercase")]
pub enum Ending {
    Finished(Verdict),
    Cancelled { played: Vec<Round> },
}

impl Ending {
    pub fn verdict(&self) -> Option<&Verdict> {
        match self {
            Self::Finished(verdict) => Some(verdict),
            Self::Cancelled { .. } => None,
        }
    }
}

/// Two seats, a fixed number of rounds, and a way to stop early.
///
/// Rounds run strictly one after another. The cancel token is checked
/// before every round; a human prompt also watches it while waiting for
/// input, so an interrupt never has to wait for someone to type.
#[derive(Debug)]
pub struct Game {
    p1: Seat,
    p2: Seat,
    cancel: Cancel,
}

impl Game {
    pub fn new(p1: Seat, p2: Seat) -> Self {
        Self {
            p1,
            p2,
            cancel: Cancel::default(),
        }
    }

    pub fn with_cancel(mut self, cancel: Cancel) -> Self {
        self.cancel = cancel;
        self
    }

    /// Play every round and settle the game. Seats only live for one game,
    /// so this consumes it.
    pub fn play(mut self, observer: &mut dyn Observer) -> Ending {
        log::info!("starting game {} vs {}", self.p1, self.p2);
        observer.started();
        let mut rounds = Vec::with_capacity(ROUNDS);
        for index in 1..=ROUNDS {
            if self.cancel.is_cancelled() {
                log::warn!("game cancelled before round {}", index);
                return Self::abandon(rounds, observer);
            }
            match Round::play(&mut self.p1, &mut self.p2) {
                Some(round) => {
                    observer.round(index, &round);
                    rounds.push(round);
                }
                None => {
                    log::warn!("a seat walked away during round {}", index);
                    return Self::abandon(rounds, observer);
                }
            }
        }
        let score = (self.p1.score(), self.p2.score());
        let verdict = Verdict {
            winner: Winner::from(score),
            score,
            rounds,
        };
        log::info!("game over {:?} {}-{}", verdict.winner, score.0, score.1);
        observer.finished(&verdict);
        Ending::Finished(verdict)
    }

    fn abandon(played: Vec<Round>, observer: &mut dyn Observer) -> Ending {
        observer.cancelled(&played);
        Ending::Cancelled { played }
    }
}
