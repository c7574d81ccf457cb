use super::choice::Choice;

/// round result, seen from the player's side of the table
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Outcome {
    Win,
    Lose,
    Tie,
}

impl Outcome {
    /// the same round seen from the opponent's side
    pub const fn flip(self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Tie => Outcome::Tie,
        }
    }
}

/// (player, opponent) resolution. exhaustive for three mutually cyclic
/// options: ties arise only on equality, otherwise the beats-relation
/// decides. pure and deterministic.
impl From<(Choice, Choice)> for Outcome {
    fn from((player, opponent): (Choice, Choice)) -> Self {
        if player == opponent {
            Outcome::Tie
        } else if player.beats() == opponent {
            Outcome::Win
        } else {
            Outcome::Lose
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Outcome::Win => "win",
                Outcome::Lose => "lose",
                Outcome::Tie => "tie",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHOICES: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    #[test]
    fn tie_iff_equal() {
        for a in CHOICES {
            for b in CHOICES {
                assert!((Outcome::from((a, b)) == Outcome::Tie) == (a == b));
            }
        }
    }

    #[test]
    fn antisymmetric() {
        for a in CHOICES {
            for b in CHOICES {
                assert!(Outcome::from((a, b)).flip() == Outcome::from((b, a)));
            }
        }
    }

    #[test]
    fn resolves_the_classic_pairs() {
        assert_eq!(Outcome::from((Choice::Rock, Choice::Scissors)), Outcome::Win);
        assert_eq!(Outcome::from((Choice::Scissors, Choice::Rock)), Outcome::Lose);
        assert_eq!(Outcome::from((Choice::Paper, Choice::Paper)), Outcome::Tie);
    }
}
