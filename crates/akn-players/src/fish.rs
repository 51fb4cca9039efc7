use akn_session::*;
use rand::seq::IndexedRandom;

/// Answers every prompt at random, garbage included.
/// Useful for shaking out the session loop.
#[derive(Debug, Default)]
pub struct Fish;

impl Fish {
    const QUESTION: [&'static str; 5] = ["yes", "no", "idk", "???", "no"];
    const VERDICT: [&'static str; 4] = ["yes", "no", "no", "meh"];
}

impl Player for Fish {
    fn prompt(&mut self, prompt: &Prompt) -> String {
        let ref mut rng = rand::rng();
        let choices: &[&str] = match prompt {
            Prompt::Question(_) => &Self::QUESTION,
            Prompt::Confirmation(_) => &Self::VERDICT,
            Prompt::Replay => &["no"],
        };
        choices
            .choose(rng)
            .copied()
            .unwrap_or("quit")
            .to_string()
    }
    fn notify(&mut self, _: &Event) {}
}
