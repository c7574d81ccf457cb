pub struct Human {
    typing: bool,
}

impl Human {
    pub fn new(typing: bool) -> Self {
        Self { typing }
    }

    /// arrow-key menu over the three options. Esc abandons the round.
    fn select(&self) -> Option<Choice> {
        Select::new()
            .with_prompt("Your throw")
            .report(false)
            .items(&["Rock", "Paper", "Scissors"])
            .default(0)
            .interact_opt()
            .ok()
            .flatten()
            .map(|i| Choice::from(i as u8))
    }

    /// free-text entry, re-prompting until the text normalizes to a
    /// recognized choice. interrupting the prompt abandons the round.
    fn input(&self) -> Option<Choice> {
        Input::new()
            .with_prompt("Your throw (rock/paper/scissors)")
            .report(false)
            .validate_with(|i: &String| -> Result<(), String> {
                match Choice::try_from(i.as_str()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(e.to_string()),
                }
            })
            .interact_text()
            .ok()
            .and_then(|i: String| Choice::try_from(i.as_str()).ok())
    }
}

impl Player for Human {
    fn choose(&self) -> Option<Choice> {
        match self.typing {
            true => self.input(),
            false => self.select(),
        }
    }
}

impl Debug for Human {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Human")
    }
}

use crate::game::choice::Choice;
use crate::game::player::Player;
use dialoguer::{Input, Select};
use std::fmt::{Debug, Formatter};
