//! Terminal front end: arguments, logging, interrupts, prompt and printer.
mod args;
mod interrupt;
mod logs;
mod printer;
mod table;
mod terminal;

pub use args::*;
pub use interrupt::*;
pub use logs::*;
pub use printer::*;
pub use table::*;
pub use terminal::*;
