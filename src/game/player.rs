pub trait Player: Debug {
    /// the next throw, or None when the prompt was abandoned.
    /// an abandoned prompt must leave the session untouched, so the
    /// driver bails out before anything is resolved or applied.
    fn choose(&self) -> Option<Choice>;
}

use super::choice::Choice;
use std::fmt::Debug;
