use super::*;
use crate::play::Move;

/// Always throws rock, whatever happened last round.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rock;

impl Player for Rock {
    fn decide(&mut self, _: &Memory) -> Option<Move> {
        Some(Move::Rock)
    }
}
