use super::*;
use crate::Score;
use crate::play::Move;

/// A participant: one strategy plus the memory it plays from.
/// Lives for exactly one game.
#[derive(Debug)]
pub struct Seat {
    player: Box<dyn Player>,
    memory: Memory,
}

impl Seat {
    pub fn new(player: Box<dyn Player>, memory: Memory) -> Self {
        Self { player, memory }
    }

    pub fn seeded<D>(player: Box<dyn Player>, dice: &mut D) -> Self
    where
        D: Dice + ?Sized,
    {
        Self::new(player, Memory::seeded(dice))
    }

    pub fn decide(&mut self) -> Option<Move> {
        self.player.decide(&self.memory)
    }
    pub fn learn(&mut self, own: Move, other: Move) {
        self.memory.learn(own, other);
    }
    pub fn reward(&mut self) {
        self.memory.reward();
    }

    pub fn score(&self) -> Score {
        self.memory.score()
    }
    #[cfg(test)]
    pub fn memory(&self) -> &Memory {
        &self.memory
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} ({})", self.player, self.memory.score())
    }
}
