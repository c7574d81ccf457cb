use super::error::Error;

#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Choice {
    #[default]
    Rock = 0,
    Paper = 1,
    Scissors = 2,
}

impl Choice {
    pub const COUNT: u8 = 3;

    /// the fixed beats-relation. each option defeats exactly one other,
    /// forming a 3-cycle.
    pub const fn beats(self) -> Choice {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Paper => Choice::Rock,
            Choice::Scissors => Choice::Paper,
        }
    }
}

/// u8 isomorphism
impl From<u8> for Choice {
    fn from(n: u8) -> Choice {
        match n {
            0 => Choice::Rock,
            1 => Choice::Paper,
            2 => Choice::Scissors,
            _ => panic!("Invalid choice u8: {}", n),
        }
    }
}
impl From<Choice> for u8 {
    fn from(c: Choice) -> u8 {
        c as u8
    }
}

/// str normalization
///
/// case-insensitive, whitespace-trimmed. unrecognized text is an
/// InvalidChoice, never a panic: this is the user-input boundary.
impl TryFrom<&str> for Choice {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "rock" => Ok(Choice::Rock),
            "paper" => Ok(Choice::Paper),
            "scissors" => Ok(Choice::Scissors),
            _ => Err(Error::InvalidChoice(s.trim().to_string())),
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Choice::Rock => "rock",
                Choice::Paper => "paper",
                Choice::Scissors => "scissors",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for n in 0..Choice::COUNT {
            assert!(n == u8::from(Choice::from(n)));
        }
    }

    #[test]
    fn beats_is_a_three_cycle() {
        for n in 0..Choice::COUNT {
            let choice = Choice::from(n);
            assert!(choice.beats() != choice);
            assert!(choice.beats().beats() != choice);
            assert!(choice.beats().beats().beats() == choice);
        }
    }

    #[test]
    fn normalizes_case() {
        assert_eq!(Choice::try_from("ROCK"), Choice::try_from("rock"));
        assert_eq!(Choice::try_from("Paper"), Ok(Choice::Paper));
        assert_eq!(Choice::try_from("  scissors "), Ok(Choice::Scissors));
    }

    #[test]
    fn rejects_unrecognized() {
        assert_eq!(
            Choice::try_from("lizard"),
            Err(Error::InvalidChoice("lizard".to_string()))
        );
        assert!(Choice::try_from("").is_err());
    }
}
