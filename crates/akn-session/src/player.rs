use super::*;

/// Anyone who can play a session: a human at a terminal, a scripted test
/// double, or a simulated player that knows the answer.
///
/// At most one prompt is outstanding at a time.
pub trait Player {
    /// Blocks until the player responds to `prompt` with raw text.
    fn prompt(&mut self, prompt: &Prompt) -> String;
    /// Receives everything the session wants shown.
    fn notify(&mut self, event: &Event);
}

impl<P> Player for &mut P
where
    P: Player + ?Sized,
{
    fn prompt(&mut self, prompt: &Prompt) -> String {
        (**self).prompt(prompt)
    }
    fn notify(&mut self, event: &Event) {
        (**self).notify(event)
    }
}
