use super::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// The closed set of strategies a seat can be filled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "console", derive(clap::ValueEnum))]
pub enum Strategy {
    /// Always rock
    Rock,
    /// Uniformly random
    Random,
    /// Copies the opponent's last move
    Mirror,
    /// Rock, paper, scissors, in order
    Cycle,
    /// Typed at the keyboard
    Human,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::Rock,
        Strategy::Random,
        Strategy::Mirror,
        Strategy::Cycle,
        Strategy::Human,
    ];

    pub fn is_human(&self) -> bool {
        matches!(self, Self::Human)
    }

    /// Build the player behind this strategy. Random players get their own
    /// generator forked from `rng`; the prompt is only built for humans.
    pub fn player<F>(self, rng: &mut SmallRng, prompt: F) -> Box<dyn Player>
    where
        F: FnOnce() -> Box<dyn Prompt>,
    {
        match self {
            Self::Rock => Box::new(Rock),
            Self::Random => Box::new(Fish::new(SmallRng::from_rng(rng))),
            Self::Mirror => Box::new(Mirror),
            Self::Cycle => Box::new(Cycler),
            Self::Human => Box::new(Human::new(prompt())),
        }
    }

    /// Build a seat with freshly seeded memory.
    pub fn seat<F>(self, rng: &mut SmallRng, prompt: F) -> Seat
    where
        F: FnOnce() -> Box<dyn Prompt>,
    {
        let player = self.player(rng, prompt);
        Seat::seeded(player, rng)
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rock => write!(f, "rock"),
            Self::Random => write!(f, "random"),
            Self::Mirror => write!(f, "mirror"),
            Self::Cycle => write!(f, "cycle"),
            Self::Human => write!(f, "human"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::play::Move;

    fn closed() -> Box<dyn Prompt> {
        Box::new(Script::default())
    }

    #[test]
    fn builds_matching_players() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let names = Strategy::ALL
            .into_iter()
            .map(|s| format!("{:?}", s.player(rng, closed)))
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Rock", "Fish", "Mirror", "Cycler", "Human"]);
    }

    #[test]
    fn prompt_only_built_for_humans() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        for strategy in Strategy::ALL.into_iter().filter(|s| !s.is_human()) {
            strategy.player(rng, || unreachable!("no prompt for {}", strategy));
        }
    }

    #[test]
    fn same_seed_same_seats() {
        let build = || {
            let ref mut rng = SmallRng::seed_from_u64(11);
            let mut seat = Strategy::Random.seat(rng, closed);
            (0..10).filter_map(|_| seat.decide()).collect::<Vec<Move>>()
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn scripted_human_seat() {
        let ref mut rng = SmallRng::seed_from_u64(5);
        let mut seat = Strategy::Human.seat(rng, || {
            Box::new(["paper"].into_iter().collect::<Script>()) as Box<dyn Prompt>
        });
        assert_eq!(seat.decide(), Some(Move::Paper));
        assert_eq!(seat.score(), 0);
    }
}
