use super::*;
use crate::play::Move;

/// Throws uniformly at random, independent of history.
pub struct Fish {
    dice: Box<dyn Dice + Send>,
}

impl Fish {
    pub fn new<D>(dice: D) -> Self
    where
        D: Dice + Send + 'static,
    {
        Self {
            dice: Box::new(dice),
        }
    }
}

impl Player for Fish {
    fn decide(&mut self, _: &Memory) -> Option<Move> {
        Some(Move::roll(self.dice.as_mut()))
    }
}

impl std::fmt::Debug for Fish {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Fish")
    }
}
