use super::*;
use crate::play::Move;

/// Throws whatever the opponent threw last round.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mirror;

impl Player for Mirror {
    fn decide(&mut self, memory: &Memory) -> Option<Move> {
        Some(memory.other())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_the_last_opponent_move() {
        let mut seat = Seat::new(Box::new(Mirror), Memory::new(Move::Rock, Move::Rock));
        for (own, other) in [
            (Move::Rock, Move::Paper),
            (Move::Paper, Move::Scissors),
            (Move::Scissors, Move::Rock),
        ] {
            seat.learn(own, other);
            assert_eq!(seat.decide(), Some(other));
        }
    }

    #[test]
    fn first_move_comes_from_seeding() {
        let ref mut dice = Loaded::from(vec![0, 2]);
        let mut seat = Seat::seeded(Box::new(Mirror), dice);
        assert_eq!(seat.decide(), Some(Move::Scissors));
    }
}
