//! Rules, rounds, and the seven-round game.
mod cancel;
mod game;
mod moves;
mod observer;
mod round;

pub use cancel::*;
pub use game::*;
pub use moves::*;
pub use observer::*;
pub use round::*;
