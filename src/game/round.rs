use super::choice::Choice;
use super::outcome::Outcome;
use super::session::Session;
use colored::Colorize;

/// everything the presentation layer needs to render one resolved round:
/// both throws, the structured outcome, and the refreshed score snapshot.
/// the message below is derived from the Outcome value, never the other
/// way around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub player: Choice,
    pub opponent: Choice,
    pub outcome: Outcome,
    pub session: Session,
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.outcome {
            Outcome::Tie => write!(f, "Tie! Both chose {}.", self.player),
            Outcome::Win => write!(
                f,
                "{} {} beats {}.",
                "You win!".green(),
                self.player,
                self.opponent
            ),
            Outcome::Lose => write!(
                f,
                "{} {} beats {}.",
                "You lose!".red(),
                self.opponent,
                self.player
            ),
        }
    }
}
