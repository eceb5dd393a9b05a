use super::Memory;
use crate::play::Move;

/// Trait for the strategies that sit at a seat.
///
/// A strategy reads the seat's [`Memory`] and whatever collaborators it was
/// built with (dice, a prompt). It never sees the opponent directly.
pub trait Player: std::fmt::Debug + Send {
    /// Choose the next move. None means the player walked away from the
    /// table, either because its input closed or the game was cancelled.
    fn decide(&mut self, memory: &Memory) -> Option<Move>;
}
