use super::*;
use crate::play::Move;

/// A person at the keyboard. Keeps asking until it gets a legal move.
pub struct Human {
    prompt: Box<dyn Prompt>,
}

impl Human {
    pub fn new(prompt: Box<dyn Prompt>) -> Self {
        Self { prompt }
    }
}

impl Player for Human {
    fn decide(&mut self, _: &Memory) -> Option<Move> {
        loop {
            let line = self.prompt.ask()?;
            match Move::try_from(line.as_str()) {
                Ok(choice) => return Some(choice),
                Err(e) => {
                    log::debug!("{}", e);
                    self.prompt.reject(line.trim());
                }
            }
        }
    }
}

impl std::fmt::Debug for Human {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Human")
    }
}
