/// Source of randomness for anything that needs to pick one of N items.
/// Blanket implemented for every [`rand::Rng`] so seeded generators drop in,
/// while tests can load the dice with a fixed sequence.
pub trait Dice {
    /// Uniform index in `0..n`.
    fn roll(&mut self, n: usize) -> usize;
}

impl<R> Dice for R
where
    R: rand::Rng + ?Sized,
{
    fn roll(&mut self, n: usize) -> usize {
        self.random_range(0..n)
    }
}

/// Dice that replay a fixed sequence of faces, cycling when exhausted.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct Loaded {
    faces: Vec<usize>,
    cursor: usize,
}

#[cfg(test)]
impl From<Vec<usize>> for Loaded {
    fn from(faces: Vec<usize>) -> Self {
        Self { faces, cursor: 0 }
    }
}

#[cfg(test)]
impl Dice for Loaded {
    fn roll(&mut self, n: usize) -> usize {
        match self.faces.get(self.cursor % self.faces.len().max(1)) {
            None => 0,
            Some(face) => {
                self.cursor += 1;
                face % n
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn loaded_replays_and_cycles() {
        let ref mut dice = Loaded::from(vec![2, 0, 1]);
        let rolls = (0..6).map(|_| dice.roll(3)).collect::<Vec<_>>();
        assert_eq!(rolls, vec![2, 0, 1, 2, 0, 1]);
    }

    #[test]
    fn empty_loaded_rolls_zero() {
        assert_eq!(Loaded::default().roll(3), 0);
    }

    #[test]
    fn rng_stays_in_range() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        assert!((0..1000).map(|_| rng.roll(3)).all(|i| i < 3));
    }

    #[test]
    fn seeded_rng_is_repeatable() {
        let mut a = SmallRng::seed_from_u64(42);
        let mut b = SmallRng::seed_from_u64(42);
        let a = (0..32).map(|_| a.roll(3)).collect::<Vec<_>>();
        let b = (0..32).map(|_| b.roll(3)).collect::<Vec<_>>();
        assert_eq!(a, b);
    }
}
