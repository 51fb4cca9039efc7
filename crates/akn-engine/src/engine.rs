use super::*;
use akn_core::*;
use akn_tree::Branch;
use akn_tree::Tree;

/// One round of guessing over a borrowed tree.
///
/// Holds the only mutable traversal state: where we are and the running
/// prior. Inputs that do not fit the current [`State`] are ignored.
///
/// # Transitions
///
/// - `answer(Yes | No)` — prior becomes 1 or 0, follow that branch
/// - `answer(Unknown)` — jump to the next split in traversal order
/// - `present()` — a shown guess now awaits confirmation
/// - `confirm(No)` — resume at the node after the rejected leaf
/// - `answer(Quit)` / `confirm(Quit)` — abandon the round
#[derive(Debug, Clone)]
pub struct Engine<'t> {
    tree: &'t Tree,
    state: State,
    prior: Probability,
}

impl<'t> Engine<'t> {
    /// Starts a round at the root.
    pub fn new(tree: &'t Tree) -> Result<Self, Exhausted> {
        Self::resume(tree, tree.root())
    }
    /// Starts a round at an arbitrary node with a fresh prior.
    pub fn resume(tree: &'t Tree, node: Index) -> Result<Self, Exhausted> {
        let mut engine = Self {
            tree,
            state: State::AwaitingAnswer(node),
            prior: PRIOR,
        };
        engine.settle(node, node)?;
        Ok(engine)
    }

    pub fn state(&self) -> &State {
        &self.state
    }
    pub fn prior(&self) -> Probability {
        self.prior
    }
    pub fn tree(&self) -> &'t Tree {
        self.tree
    }
    /// The attribute being asked about, while an answer is outstanding.
    pub fn question(&self) -> Option<&'t str> {
        match self.state {
            State::AwaitingAnswer(node) => self.tree.question(node),
            _ => None,
        }
    }

    /// Consumes an answer to the outstanding question.
    pub fn answer(&mut self, answer: Answer) -> Result<&State, Exhausted> {
        let State::AwaitingAnswer(node) = self.state else {
            log::debug!("[engine] ignoring {} while {}", answer, self.state);
            return Ok(&self.state);
        };
        match answer {
            Answer::Yes => {
                self.prior = PRIOR_YES;
                self.branch(node, Branch::Yes)?;
            }
            Answer::No => {
                self.prior = PRIOR_NO;
                self.branch(node, Branch::No)?;
            }
            Answer::Unknown => {
                let next = self.tree.successor(node).ok_or(Exhausted {
                    from: node,
                    nodes: self.tree.n(),
                })?;
                self.settle(node, next)?;
            }
            Answer::Quit => self.state = State::Finished(Outcome::Abandoned),
        }
        log::debug!("[engine] {} at node {} -> {}", answer, node, self.state);
        Ok(&self.state)
    }

    /// Marks a guess as shown; it now awaits confirmation.
    pub fn present(&mut self) -> &State {
        if let State::Guessed(guess) = &self.state {
            self.state = State::AwaitingConfirmation(guess.clone());
        }
        &self.state
    }

    /// Consumes the player's verdict on the presented guess.
    pub fn confirm(&mut self, reply: Reply) -> Result<&State, Exhausted> {
        let State::AwaitingConfirmation(guess) = &self.state else {
            log::debug!("[engine] ignoring {} while {}", reply, self.state);
            return Ok(&self.state);
        };
        let guess = guess.clone();
        match reply {
            Reply::Yes => self.state = State::Finished(Outcome::Correct(guess.clone())),
            Reply::Quit => self.state = State::Finished(Outcome::Abandoned),
            Reply::No => {
                self.prior = PRIOR;
                self.settle(guess.node(), guess.node() + 1)?;
            }
        }
        log::debug!("[engine] {} on {} -> {}", reply, guess.label(), self.state);
        Ok(&self.state)
    }

    fn branch(&mut self, node: Index, branch: Branch) -> Result<(), Exhausted> {
        let child = self.tree.follow(node, branch).ok_or(Exhausted {
            from: node,
            nodes: self.tree.n(),
        })?;
        self.settle(node, child)
    }

    /// Moves to `next`, scoring it straight away if it is a leaf.
    fn settle(&mut self, from: Index, next: Index) -> Result<(), Exhausted> {
        if next >= self.tree.n() {
            return Err(Exhausted {
                from,
                nodes: self.tree.n(),
            });
        }
        self.state = match Guess::score(self.tree, next, self.prior) {
            Some(guess) => State::Guessed(guess),
            None => State::AwaitingAnswer(next),
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use akn_dataset::Table;
    use rand::Rng;
    use rand::SeedableRng;

    fn ranged() -> Tree {
        Tree::fit(&Table::parse("champion,ranged\nA,1\nB,0\n", "champion").unwrap())
    }

    fn square() -> Tree {
        Tree::fit(&Table::parse("champion,a,b\nW,0,0\nX,0,1\nY,1,0\nZ,1,1\n", "champion").unwrap())
    }

    #[test]
    fn starts_at_root() {
        let tree = ranged();
        let engine = Engine::new(&tree).unwrap();
        assert_eq!(engine.state(), &State::AwaitingAnswer(0));
        assert_eq!(engine.question(), Some("ranged"));
        assert_eq!(engine.prior(), PRIOR);
    }

    #[test]
    fn yes_reaches_certain_guess() {
        let tree = ranged();
        let mut engine = Engine::new(&tree).unwrap();
        let state = engine.answer(Answer::Yes).unwrap();
        let State::Guessed(guess) = state else {
            panic!("expected a guess, got {}", state)
        };
        assert_eq!(guess.label(), "A");
        assert_eq!(guess.node(), 2);
        assert_eq!(guess.likelihood(), 1.);
        assert_eq!(guess.prior(), 1.);
        assert_eq!(guess.probability(), 1.);
    }

    #[test]
    fn no_sets_zero_prior() {
        let tree = ranged();
        let mut engine = Engine::new(&tree).unwrap();
        engine.answer(Answer::No).unwrap();
        let guess = engine.state().guess().unwrap();
        assert_eq!(guess.label(), "B");
        assert_eq!(guess.prior(), 0.);
        assert_eq!(guess.probability(), 1.);
    }

    #[test]
    fn unknown_until_exhausted() {
        let tree = ranged();
        let mut engine = Engine::new(&tree).unwrap();
        assert_eq!(
            engine.answer(Answer::Unknown),
            Err(Exhausted { from: 0, nodes: 3 })
        );
    }

    #[test]
    fn unknown_skips_to_next_question() {
        let tree = square();
        let mut engine = Engine::new(&tree).unwrap();
        assert_eq!(engine.answer(Answer::Unknown), Ok(&State::AwaitingAnswer(1)));
        assert_eq!(engine.prior(), PRIOR);
        assert_eq!(engine.answer(Answer::Unknown), Ok(&State::AwaitingAnswer(4)));
        assert!(engine.answer(Answer::Unknown).is_err());
    }

    #[test]
    fn unknown_keeps_last_prior() {
        let tree = square();
        let mut engine = Engine::new(&tree).unwrap();
        engine.answer(Answer::No).unwrap();
        assert_eq!(engine.state(), &State::AwaitingAnswer(1));
        engine.answer(Answer::Unknown).unwrap();
        assert_eq!(engine.state(), &State::AwaitingAnswer(4));
        engine.answer(Answer::Yes).unwrap();
        assert_eq!(engine.state().guess().unwrap().prior(), 1.);
    }

    #[test]
    fn rejection_resumes_at_next_node() {
        let tree = ranged();
        let mut engine = Engine::new(&tree).unwrap();
        engine.answer(Answer::No).unwrap();
        assert!(matches!(engine.present(), State::AwaitingConfirmation(_)));
        let state = engine.confirm(Reply::No).unwrap();
        let State::Guessed(guess) = state else {
            panic!("expected a guess, got {}", state)
        };
        assert_eq!(guess.node(), 2);
        assert_eq!(guess.label(), "A");
        assert_eq!(guess.prior(), PRIOR);
    }

    #[test]
    fn rejection_resumes_mid_tree_not_at_root() {
        let tree = square();
        let mut engine = Engine::new(&tree).unwrap();
        engine.answer(Answer::No).unwrap();
        engine.answer(Answer::Yes).unwrap();
        assert_eq!(engine.state().guess().unwrap().node(), 3);
        engine.present();
        assert_eq!(engine.confirm(Reply::No), Ok(&State::AwaitingAnswer(4)));
    }

    #[test]
    fn rejecting_last_leaf_exhausts() {
        let tree = ranged();
        let mut engine = Engine::new(&tree).unwrap();
        engine.answer(Answer::Yes).unwrap();
        engine.present();
        assert_eq!(engine.confirm(Reply::No), Err(Exhausted { from: 2, nodes: 3 }));
    }

    #[test]
    fn confirmation_finishes() {
        let tree = ranged();
        let mut engine = Engine::new(&tree).unwrap();
        engine.answer(Answer::Yes).unwrap();
        engine.present();
        let state = engine.confirm(Reply::Yes).unwrap();
        assert!(state.is_finished());
        assert_eq!(state.guess().unwrap().label(), "A");
    }

    #[test]
    fn quit_abandons_without_scoring() {
        let tree = ranged();
        let mut engine = Engine::new(&tree).unwrap();
        assert_eq!(
            engine.answer(Answer::Quit),
            Ok(&State::Finished(Outcome::Abandoned))
        );
        let mut engine = Engine::new(&tree).unwrap();
        engine.answer(Answer::Yes).unwrap();
        engine.present();
        assert_eq!(
            engine.confirm(Reply::Quit),
            Ok(&State::Finished(Outcome::Abandoned))
        );
    }

    #[test]
    fn out_of_turn_inputs_ignored() {
        let tree = ranged();
        let mut engine = Engine::new(&tree).unwrap();
        assert_eq!(engine.confirm(Reply::Yes), Ok(&State::AwaitingAnswer(0)));
        assert_eq!(engine.present(), &State::AwaitingAnswer(0));
        engine.answer(Answer::Yes).unwrap();
        let guessed = engine.state().clone();
        assert_eq!(engine.answer(Answer::No), Ok(&guessed));
        assert_eq!(engine.confirm(Reply::No), Ok(&guessed));
    }

    #[test]
    fn single_champion_guesses_immediately() {
        let tree = Tree::fit(&Table::parse("champion,ranged\nAshe,1\n", "champion").unwrap());
        let engine = Engine::new(&tree).unwrap();
        let guess = engine.state().guess().unwrap();
        assert_eq!(guess.label(), "Ashe");
        assert_eq!(guess.prior(), PRIOR);
        assert_eq!(guess.probability(), 1.);
        assert_eq!(engine.question(), None);
    }

    #[test]
    fn resume_past_end_exhausts() {
        let tree = ranged();
        assert!(Engine::resume(&tree, 3).is_err());
        assert_eq!(Engine::resume(&tree, 1).unwrap().state().guess().unwrap().label(), "B");
    }

    #[test]
    fn last_answer_sets_prior() {
        let ref mut rng = rand::rngs::SmallRng::seed_from_u64(5);
        let labels = (0..32).map(|i| format!("c{:02}", i)).collect::<Vec<_>>();
        let rows = (0..32)
            .map(|_| (0..6).map(|_| rng.random_bool(0.5)).collect())
            .collect();
        let attributes = (0..6).map(|a| format!("a{}", a)).collect();
        let tree = Tree::fit(&Table::new(attributes, labels, rows).unwrap());
        for _ in 0..256 {
            let mut engine = Engine::new(&tree).unwrap();
            let mut last = None;
            while let State::AwaitingAnswer(_) = engine.state() {
                let answer = match rng.random_bool(0.5) {
                    true => Answer::Yes,
                    false => Answer::No,
                };
                last = Some(answer);
                engine.answer(answer).unwrap();
            }
            let guess = engine.state().guess().unwrap();
            match last {
                Some(Answer::Yes) => assert_eq!(guess.prior(), 1.),
                Some(Answer::No) => assert_eq!(guess.prior(), 0.),
                _ => assert_eq!(guess.prior(), PRIOR),
            }
            assert!((0. ..=1.).contains(&guess.probability()));
        }
    }

    #[test]
    fn guess_announcement() {
        let tree = ranged();
        let mut engine = Engine::new(&tree).unwrap();
        engine.answer(Answer::Yes).unwrap();
        assert_eq!(
            engine.state().guess().unwrap().to_string(),
            "I think the champion is A with a probability of 100.00%."
        );
    }
}
