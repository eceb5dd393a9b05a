use super::Dice;
use crate::Score;
use crate::play::Move;

/// Everything a seat remembers: its running score and the moves of the
/// most recent round. Nothing older than one round is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Memory {
    score: Score,
    own: Move,
    other: Move,
}

impl Memory {
    pub fn new(own: Move, other: Move) -> Self {
        Self {
            score: 0,
            own,
            other,
        }
    }

    /// History seeded from the dice, so history-driven players have a
    /// defined (random) first move.
    pub fn seeded<D>(dice: &mut D) -> Self
    where
        D: Dice + ?Sized,
    {
        let own = Move::roll(dice);
        let other = Move::roll(dice);
        Self::new(own, other)
    }

    pub fn score(&self) -> Score {
        self.score
    }
    pub fn own(&self) -> Move {
        self.own
    }
    pub fn other(&self) -> Move {
        self.other
    }

    pub fn reward(&mut self) {
        self.score += 1;
    }
    pub fn learn(&mut self, own: Move, other: Move) {
        self.own = own;
        self.other = other;
    }
}
