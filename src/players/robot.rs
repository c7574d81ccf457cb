pub struct Robot;

impl Player for Robot {
    fn choose(&self) -> Option<Choice> {
        Some(self.draw())
    }
}

impl Robot {
    /// uniform draw from the three options off the thread-local generator.
    /// each call is independent; no seeding, no reproducibility contract.
    fn draw(&self) -> Choice {
        Choice::from(rand::rng().random_range(0..Choice::COUNT))
    }
}

impl Debug for Robot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Computer")
    }
}

use crate::game::choice::Choice;
use crate::game::player::Player;
use rand::Rng;
use std::fmt::{Debug, Formatter};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn always_throws_something() {
        assert!((0..100).all(|_| Robot.choose().is_some()));
    }

    #[test]
    fn covers_all_three_options() {
        let draws = (0..999)
            .filter_map(|_| Robot.choose())
            .collect::<HashSet<Choice>>();
        assert_eq!(draws.len(), Choice::COUNT as usize);
    }
}
