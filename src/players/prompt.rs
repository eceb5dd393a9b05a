/// Line-oriented input for interactive players.
pub trait Prompt: Send {
    /// Block until a line is available. None once the input is closed
    /// or the game was cancelled while waiting.
    fn ask(&mut self) -> Option<String>;
    /// Tell whoever is typing that the last line was not a move.
    fn reject(&mut self, line: &str);
}

#[cfg(test)]
pub use script::Script;
