use super::*;

/// Rendering hook. The game hands structured results to an observer and
/// never formats anything itself.
pub trait Observer {
    fn started(&mut self) {}
    /// Called after each completed round; `index` counts from 1.
    fn round(&mut self, _index: usize, _round: &Round) {}
    fn finished(&mut self, _verdict: &Verdict) {}
    fn cancelled(&mut self, _played: &[Round]) {}
}

/// Observer that renders nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Observer for Silent {}
