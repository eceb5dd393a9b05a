use crate::players::Dice;

/// One of the three legal throws.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// Canonical ordering. Cycling players walk this list.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Position in the canonical ordering.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The move after this one, wrapping from scissors back to rock.
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Uniform draw from an injected source of randomness.
    pub fn roll<D>(dice: &mut D) -> Self
    where
        D: Dice + ?Sized,
    {
        Self::ALL[dice.roll(Self::ALL.len())]
    }
}

/// rock > scissors > paper > rock
pub fn beats(a: Move, b: Move) -> bool {
    matches!(
        (a, b),
        (Move::Rock, Move::Scissors) | (Move::Scissors, Move::Paper) | (Move::Paper, Move::Rock)
    )
}

/// str isomorphism, ignoring surrounding whitespace and case
impl TryFrom<&str> for Move {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "rock" => Ok(Self::Rock),
            "paper" => Ok(Self::Paper),
            "scissors" => Ok(Self::Scissors),
            _ => Err(format!("invalid move: {}", s.trim())),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Rock => write!(f, "rock"),
            Self::Paper => write!(f, "paper"),
            Self::Scissors => write!(f, "scissors"),
        }
    }
}
