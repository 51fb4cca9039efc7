use akn_core::*;
use akn_dataset::Table;
use akn_engine::Guess;
use akn_session::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::collections::HashMap;

/// A simulated player thinking of one champion from the table.
///
/// Answers every question truthfully from the champion's row, confirms a
/// guess only if it names the champion, and never asks for a replay. With
/// `doubt > 0` it answers "idk" to that share of questions instead.
#[derive(Debug, Clone)]
pub struct Oracle {
    secret: String,
    answers: HashMap<String, bool>,
    doubt: Probability,
    rng: SmallRng,
    asked: usize,
    guesses: Vec<Guess>,
}

impl Oracle {
    /// `None` if the table has no champion with this label.
    pub fn new(table: &Table, secret: &str) -> Option<Self> {
        let row = table.find(secret)?;
        let answers = table
            .attributes()
            .iter()
            .cloned()
            .zip(table.row(row).iter().copied())
            .collect();
        Some(Self {
            secret: secret.to_string(),
            answers,
            doubt: 0.,
            rng: SmallRng::seed_from_u64(0),
            asked: 0,
            guesses: Vec::new(),
        })
    }
    /// Answer "idk" with probability `doubt`, drawn from a seeded generator.
    pub fn with_doubt(mut self, doubt: Probability, seed: u64) -> Self {
        self.doubt = doubt.clamp(0., 1.);
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }
    pub fn secret(&self) -> &str {
        &self.secret
    }
    /// Questions answered so far, "idk" included.
    pub fn asked(&self) -> usize {
        self.asked
    }
    /// Every guess presented to this player, in order.
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }
}

impl Player for Oracle {
    fn prompt(&mut self, prompt: &Prompt) -> String {
        if let Prompt::Question(_) = prompt {
            self.asked += 1;
        }
        let response = match prompt {
            Prompt::Question(_) if self.doubt > 0. && self.rng.random_bool(self.doubt as f64) => "idk",
            Prompt::Question(attribute) => match self.answers.get(attribute) {
                Some(true) => "yes",
                Some(false) => "no",
                None => "idk",
            },
            Prompt::Confirmation(guess) if guess.label() == self.secret => "yes",
            Prompt::Confirmation(_) => "no",
            Prompt::Replay => "no",
        };
        response.to_string()
    }
    fn notify(&mut self, event: &Event) {
        if let Event::Guess(guess) = event {
            self.guesses.push(guess.clone());
        }
    }
}
