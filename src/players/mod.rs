//! Seats and the strategies that fill them.
mod cycler;
mod dice;
mod fish;
mod human;
mod memory;
mod mirror;
mod player;
mod prompt;
mod rock;
mod seat;
mod strategy;

pub use cycler::*;
pub use dice::*;
pub use fish::*;
pub use human::*;
pub use memory::*;
pub use mirror::*;
pub use player::*;
pub use prompt::*;
pub use rock::*;
pub use seat::*;
pub use strategy::*;
