use super::choice::Choice;
use super::error::Error;
use super::outcome::Outcome;
use super::round::Round;
use crate::Score;
use crate::WINNING_SCORE;

/// which side took the match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    You,
    Computer,
}

/// Session is the one piece of mutable state in a running game: two
/// scores and the threshold that ends the match. it is Copy, so any
/// Session handed back to a caller doubles as an immutable snapshot.
///
/// scores only ever move up, one at a time, and the terminal check runs
/// after every single increment. both sides reaching the threshold in
/// the same round is therefore impossible, and neither score can exceed
/// the threshold: once over, the session refuses further rounds until
/// reset, regardless of caller discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    player: Score,
    opponent: Score,
    threshold: Score,
}

impl Session {
    pub fn new() -> Self {
        Self::until(WINNING_SCORE)
    }

    pub fn until(threshold: Score) -> Self {
        debug_assert!(threshold > 0);
        Self {
            player: 0,
            opponent: 0,
            threshold,
        }
    }

    pub fn player(&self) -> Score {
        self.player
    }
    pub fn opponent(&self) -> Score {
        self.opponent
    }
    pub fn threshold(&self) -> Score {
        self.threshold
    }

    pub fn is_over(&self) -> bool {
        self.player >= self.threshold || self.opponent >= self.threshold
    }

    /// the side that reached the threshold, if any
    pub fn winner(&self) -> Option<Side> {
        if self.player >= self.threshold {
            Some(Side::You)
        } else if self.opponent >= self.threshold {
            Some(Side::Computer)
        } else {
            None
        }
    }

    /// fold one resolved outcome into the scores.
    /// rejected without mutation once the match is over.
    pub fn apply(&mut self, outcome: Outcome) -> Result<(), Error> {
        if self.is_over() {
            return Err(Error::GameAlreadyOver);
        }
        match outcome {
            Outcome::Win => self.player += 1,
            Outcome::Lose => self.opponent += 1,
            Outcome::Tie => {}
        }
        Ok(())
    }

    /// resolve and apply one round atomically. there is no observable
    /// state in between: either the whole round lands or none of it does.
    pub fn play(&mut self, player: Choice, opponent: Choice) -> Result<Round, Error> {
        let outcome = Outcome::from((player, opponent));
        self.apply(outcome)?;
        Ok(Round {
            player,
            opponent,
            outcome,
            session: *self,
        })
    }

    /// inbound boundary operation: free text in, resolved round out.
    /// nothing mutates unless the text normalizes to a real choice.
    pub fn submit(&mut self, raw: &str, opponent: Choice) -> Result<Round, Error> {
        let player = Choice::try_from(raw)?;
        self.play(player, opponent)
    }

    /// back to zero-zero and in progress. idempotent, legal in any state.
    pub fn reset(&mut self) {
        self.player = 0;
        self.opponent = 0;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "You {} - {} Computer", self.player, self.opponent)
    }
}
