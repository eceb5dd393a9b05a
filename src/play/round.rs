use super::moves::*;
use crate::Score;
use crate::players::Seat;

/// Who took a single round.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    P1,
    P2,
    Tie,
}

impl From<(Move, Move)> for Outcome {
    fn from((m1, m2): (Move, Move)) -> Self {
        if beats(m1, m2) {
            Self::P1
        } else if beats(m2, m1) {
            Self::P2
        } else {
            Self::Tie
        }
    }
}

/// Record of one exchange, emitted once both seats have scored and learned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Round {
    pub p1: Move,
    pub p2: Move,
    pub outcome: Outcome,
    /// Scores after this round, (p1, p2).
    pub score: (Score, Score),
}

impl Round {
    /// Plays one exchange. The first seat is always asked before the second,
    /// so a human in the first seat commits before the second seat decides.
    ///
    /// Returns None if either seat walks away; in that case neither seat
    /// scores or learns anything from the abandoned round.
    pub fn play(p1: &mut Seat, p2: &mut Seat) -> Option<Self> {
        let m1 = p1.decide()?;
        let m2 = p2.decide()?;
        let outcome = Outcome::from((m1, m2));
        match outcome {
            Outcome::P1 => p1.reward(),
            Outcome::P2 => p2.reward(),
            Outcome::Tie => {}
        }
        p1.learn(m1, m2);
        p2.learn(m2, m1);
        let round = Self {
            p1: m1,
            p2: m2,
            outcome,
            score: (p1.score(), p2.score()),
        };
        log::debug!("{} vs {} -> {:?} {:?}", m1, m2, outcome, round.score);
        Some(round)
    }
}
