//! Rock, paper, scissors between two strategy-driven seats.
//!
//! The core is split the same way a table game is:
//! - [`play`] holds the rules, a single round, and the seven-round game.
//! - [`players`] holds the seats and the strategies that sit in them.
//! - [`console`] wires the core to a terminal (feature `console`).

pub mod play;
pub mod players;

#[cfg(feature = "console")]
pub mod console;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Rounds won by a seat over the course of one game.
pub type Score = u32;

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Rounds in a game. No early termination except cancellation.
pub const ROUNDS: usize = 7;
/// How long the terminal prompt waits on stdin before rechecking cancellation.
pub const POLL_INTERVAL: std::time::Duration = std::time::Duration::from_millis(100);
