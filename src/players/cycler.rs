use super::*;
use crate::play::Move;

/// Walks rock, paper, scissors in order, starting after its own last move.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cycler;

impl Player for Cycler {
    fn decide(&mut self, memory: &Memory) -> Option<Move> {
        Some(memory.own().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_from_own_previous_move() {
        let mut cycler = Cycler;
        let mut decide = |own| cycler.decide(&Memory::new(own, Move::Rock));
        assert_eq!(decide(Move::Rock), Some(Move::Paper));
        assert_eq!(decide(Move::Paper), Some(Move::Scissors));
        assert_eq!(decide(Move::Scissors), Some(Move::Rock));
    }

    #[test]
    fn cycles_through_a_game() {
        let mut seat = Seat::new(Box::new(Cycler), Memory::new(Move::Scissors, Move::Rock));
        let mut moves = Vec::new();
        for _ in 0..6 {
            let own = seat.decide().unwrap();
            seat.learn(own, Move::Rock);
            moves.push(own);
        }
        assert_eq!(
            moves,
            vec![
                Move::Rock,
                Move::Paper,
                Move::Scissors,
                Move::Rock,
                Move::Paper,
                Move::Scissors
            ]
        );
    }
}
