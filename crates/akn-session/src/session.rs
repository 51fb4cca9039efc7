use super::*;
use akn_engine::*;
use akn_tree::Tree;

/// Tally of a finished session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub rounds: usize,
    pub correct: usize,
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {} rounds guessed", self.correct, self.rounds)
    }
}

/// Explicit game context: the fitted tree, the player, and where to find
/// champion pictures.
///
/// Rounds repeat while the player keeps confirming guesses and asking to
/// play again. Quitting at any prompt ends the session.
pub struct Session<'t, P>
where
    P: Player,
{
    tree: &'t Tree,
    player: P,
    portraits: Portraits,
    summary: Summary,
}

impl<'t, P> Session<'t, P>
where
    P: Player,
{
    pub fn new(tree: &'t Tree, player: P) -> Self {
        Self {
            tree,
            player,
            portraits: Portraits::default(),
            summary: Summary::default(),
        }
    }
    pub fn with_portraits(mut self, portraits: Portraits) -> Self {
        self.portraits = portraits;
        self
    }
    pub fn player(&self) -> &P {
        &self.player
    }
    pub fn into_player(self) -> P {
        self.player
    }
    pub fn summary(&self) -> Summary {
        self.summary
    }

    /// Plays rounds until the player stops.
    /// A round that runs out of tree aborts the whole session.
    pub fn run(&mut self) -> Result<Summary, Exhausted> {
        loop {
            self.summary.rounds += 1;
            log::info!("{:<32}{:<32}", "starting    round", self.summary.rounds);
            self.player.notify(&Event::Round(self.summary.rounds));
            match self.round() {
                Err(e) => {
                    log::error!("round {} aborted: {}", self.summary.rounds, e);
                    return Err(e);
                }
                Ok(Outcome::Abandoned) => {
                    log::info!("round {} abandoned", self.summary.rounds);
                    return Ok(self.summary);
                }
                Ok(Outcome::Correct(guess)) => {
                    self.summary.correct += 1;
                    log::info!(
                        "round {} guessed {} ({:.4})",
                        self.summary.rounds,
                        guess.label(),
                        guess.probability()
                    );
                    if !self.replay() {
                        return Ok(self.summary);
                    }
                }
            }
        }
    }

    /// One round from the root to a confirmed guess or a quit.
    pub fn round(&mut self) -> Result<Outcome, Exhausted> {
        let mut engine = Engine::new(self.tree)?;
        loop {
            match engine.state().clone() {
                State::AwaitingAnswer(node) => {
                    let attribute = self.tree.question(node).unwrap_or_default();
                    let raw = self.player.prompt(&Prompt::Question(attribute.to_string()));
                    match Answer::try_from(raw.as_str()) {
                        Ok(answer) => {
                            engine.answer(answer)?;
                        }
                        Err(_) => self.unrecognized(raw),
                    }
                }
                State::Guessed(guess) => {
                    self.player.notify(&Event::Guess(guess.clone()));
                    self.portrait(guess.label());
                    engine.present();
                }
                State::AwaitingConfirmation(guess) => {
                    let raw = self.player.prompt(&Prompt::Confirmation(guess));
                    match Reply::try_from(raw.as_str()) {
                        Ok(Reply::No) => {
                            self.player.notify(&Event::Continue);
                            engine.confirm(Reply::No)?;
                        }
                        Ok(reply) => {
                            engine.confirm(reply)?;
                        }
                        Err(_) => self.unrecognized(raw),
                    }
                }
                State::Finished(Outcome::Correct(guess)) => {
                    self.player.notify(&Event::Correct(guess.clone()));
                    return Ok(Outcome::Correct(guess));
                }
                State::Finished(Outcome::Abandoned) => return Ok(Outcome::Abandoned),
            }
        }
    }

    fn replay(&mut self) -> bool {
        loop {
            let raw = self.player.prompt(&Prompt::Replay);
            match Reply::try_from(raw.as_str()) {
                Ok(Reply::Yes) => return true,
                Ok(Reply::No) => {
                    self.player.notify(&Event::Farewell);
                    return false;
                }
                Ok(Reply::Quit) => return false,
                Err(_) => self.unrecognized(raw),
            }
        }
    }

    fn portrait(&mut self, label: &str) {
        match self.portraits.locate(label) {
            None => {}
            Some(Portrait::Found(path)) => {
                self.player.notify(&Event::Portrait(Portrait::Found(path)));
            }
            Some(Portrait::Missing(path)) => {
                log::warn!("no portrait for {} at {}", label, path.display());
                self.player.notify(&Event::Portrait(Portrait::Missing(path)));
            }
        }
    }

    fn unrecognized(&mut self, raw: String) {
        log::debug!("[session] unrecognized response {:?}", raw);
        self.player.notify(&Event::Unrecognized(raw));
    }
}
