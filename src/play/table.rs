/// console match driver. owns the one Session per running game, loops
/// rounds until a side reaches the threshold, then offers a rematch.
/// all I/O lives here; the game core underneath never prints or prompts.
pub struct Table {
    session: Session,
    human: Human,
    robot: Robot,
    n_rounds: u32,
}

impl Table {
    pub fn new(threshold: Score, typing: bool) -> Self {
        Table {
            session: Session::until(threshold),
            human: Human::new(typing),
            robot: Robot,
            n_rounds: 0,
        }
    }

    pub fn play(&mut self) -> Result<()> {
        self.begin_match();
        loop {
            match self.end_turn() {
                Some(round) => self.render(round),
                None => break,
            }
            if self.session.is_over() {
                self.end_match();
                match self.rematch()? {
                    true => {
                        self.session.reset();
                        self.n_rounds = 0;
                        self.begin_match();
                    }
                    false => break,
                }
            }
        }
        Ok(())
    }

    fn begin_match(&self) {
        println!(
            "\n{}\nFirst to {} wins the match",
            "-".repeat(21),
            self.session.threshold()
        );
    }

    fn end_turn(&mut self) -> Option<Round> {
        let player = self.human.choose()?;
        let opponent = self.robot.choose()?;
        self.n_rounds += 1;
        match self.session.play(player, opponent) {
            Ok(round) => Some(round),
            Err(e) => {
                // prompts are closed once the match concludes, so a
                // refused round only means the loop is out of sync
                log::warn!("round {} refused: {}", self.n_rounds, e);
                None
            }
        }
    }

    fn render(&self, round: Round) {
        log::debug!(
            "round {}: {} vs {} -> {}",
            self.n_rounds,
            round.player,
            round.opponent,
            round.outcome
        );
        println!("{}", round);
        println!("   {}", round.session);
    }

    fn end_match(&self) {
        let winner = match self.session.winner() {
            Some(Side::You) => "You win the game!".green().bold(),
            Some(Side::Computer) => "Computer wins the game!".red().bold(),
            None => unreachable!(),
        };
        log::info!(
            "match over after {} rounds: {}",
            self.n_rounds,
            self.session
        );
        println!("\nGame over! {}", winner);
    }

    fn rematch(&self) -> Result<bool> {
        Ok(Confirm::new()
            .with_prompt("Play again?")
            .default(true)
            .interact_opt()?
            .unwrap_or(false))
    }
}

use crate::game::player::Player;
use crate::game::round::Round;
use crate::game::session::Session;
use crate::game::session::Side;
use crate::players::human::Human;
use crate::players::robot::Robot;
use crate::Score;
use anyhow::Result;
use colored::Colorize;
use dialoguer::Confirm;
