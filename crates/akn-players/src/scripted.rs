use akn_session::*;
use std::collections::VecDeque;

/// Replays canned responses in order and records every prompt and event.
/// Responds "quit" once the script runs out.
#[derive(Debug, Default, Clone)]
pub struct Scripted {
    script: VecDeque<String>,
    prompts: Vec<Prompt>,
    events: Vec<Event>,
}

impl Scripted {
    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }
    pub fn events(&self) -> &[Event] {
        &self.events
    }
    /// Responses not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl<S> FromIterator<S> for Scripted
where
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            script: iter.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }
}

impl Player for Scripted {
    fn prompt(&mut self, prompt: &Prompt) -> String {
        self.prompts.push(prompt.clone());
        self.script.pop_front().unwrap_or_else(|| String::from("quit"))
    }
    fn notify(&mut self, event: &Event) {
        self.events.push(event.clone());
    }
}
