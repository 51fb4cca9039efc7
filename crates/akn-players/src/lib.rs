//! Player implementations for the game session.
//!
//! Concrete types implementing the `Player` trait from [`akn_session`],
//! providing different ways of answering questions.
//!
//! ## Implementations
//!
//! - [`Human`] — Interactive terminal player (requires `cli` feature)
//! - [`Oracle`] — Knows the secret champion and answers truthfully, with optional doubt
//! - [`Fish`] — Random player for testing and simulation
//! - [`Scripted`] — Replays canned responses and records everything it is shown
mod fish;
#[cfg(feature = "cli")]
mod human;
mod oracle;
mod scripted;

pub use fish::*;
#[cfg(feature = "cli")]
pub use human::*;
pub use oracle::*;
pub use scripted::*;

#[cfg(test)]
mod tests {
    use super::*;
    use akn_core::*;
    use akn_dataset::Table;
    use akn_engine::*;
    use akn_session::*;
    use akn_tree::*;

    fn champions() -> Table {
        include_str!("../../../data/champions.csv").parse::<Table>().unwrap()
    }

    /// Truthful yes/no answers for one champion and the leaf they reach.
    fn walk(table: &Table, tree: &Tree, label: &str) -> (Vec<&'static str>, usize) {
        let row = table.find(label).unwrap();
        let mut answers = Vec::new();
        let mut index = tree.root();
        while let Some(attribute) = tree.attribute(index) {
            let value = table.value(row, attribute);
            answers.push(if value { "yes" } else { "no" });
            index = tree.follow(index, Branch::from(value)).unwrap();
        }
        (answers, index)
    }

    #[test]
    fn bundled_champions_are_distinguishable() {
        let table = champions();
        let tree = Tree::fit(&table);
        assert_eq!(tree.leaves().count(), table.n());
        assert!(tree.leaves().all(|i| tree.counts(i).unwrap().is_pure()));
    }

    #[test]
    fn oracle_guesses_every_champion_first_time() {
        let table = champions();
        let tree = Tree::fit(&table);
        for label in table.labels() {
            let mut session = Session::new(&tree, Oracle::new(&table, label).unwrap());
            assert_eq!(session.run(), Ok(Summary { rounds: 1, correct: 1 }));
            let oracle = session.into_player();
            assert_eq!(oracle.guesses().len(), 1);
            assert_eq!(oracle.guesses()[0].label(), label);
            assert_eq!(oracle.guesses()[0].probability(), 1.);
        }
    }

    #[test]
    fn scripted_round_then_farewell() {
        let table = champions();
        let tree = Tree::fit(&table);
        let (mut script, _) = walk(&table, &tree, "Lux");
        let questions = script.len();
        script.extend(["yes", "no"]);
        let mut session = Session::new(&tree, script.into_iter().collect::<Scripted>());
        assert_eq!(session.run(), Ok(Summary { rounds: 1, correct: 1 }));
        let player = session.into_player();
        assert_eq!(player.remaining(), 0);
        assert_eq!(
            player.prompts()[0].to_string(),
            format!("The champion {}?", tree.question(0).unwrap())
        );
        let asked = player
            .prompts()
            .iter()
            .filter(|p| matches!(p, Prompt::Question(_)))
            .count();
        assert_eq!(asked, questions);
        assert!(player.events().iter().any(|e| matches!(e, Event::Correct(g) if g.label() == "Lux")));
        assert_eq!(player.events().last().unwrap().to_string(), "Thank you for playing! <3");
    }

    #[test]
    fn two_rounds_back_to_back() {
        let table = champions();
        let tree = Tree::fit(&table);
        let (mut script, _) = walk(&table, &tree, "Teemo");
        script.extend(["y", "y"]);
        script.extend(walk(&table, &tree, "Garen").0);
        script.extend(["y", "n"]);
        let mut session = Session::new(&tree, script.into_iter().collect::<Scripted>());
        assert_eq!(session.run(), Ok(Summary { rounds: 2, correct: 2 }));
        let guessed = session
            .player()
            .events()
            .iter()
            .filter_map(|e| match e {
                Event::Correct(g) => Some(g.label().to_string()),
                _ => None,
            })
            .collect::<Vec<_>>();
        assert_eq!(guessed, vec!["Teemo", "Garen"]);
    }

    #[test]
    fn rejected_guess_resumes_after_its_leaf() {
        let table = champions();
        let tree = Tree::fit(&table);
        let (answers, leaf) = walk(&table, &tree, "Yasuo");
        assert!(leaf + 1 < tree.n());

        let mut engine = Engine::new(&tree).unwrap();
        for answer in &answers {
            engine.answer(Answer::try_from(*answer).unwrap()).unwrap();
        }
        assert_eq!(engine.present().guess().map(|g| g.node()), Some(leaf));
        let state = engine.confirm(Reply::No).unwrap();
        match state {
            State::AwaitingAnswer(node) => assert_eq!(*node, leaf + 1),
            State::Guessed(guess) => assert_eq!(guess.node(), leaf + 1),
            other => panic!("unexpected state {}", other),
        }
        assert_eq!(engine.prior(), PRIOR);

        let mut script = answers;
        script.extend(["no", "quit"]);
        let mut session = Session::new(&tree, script.into_iter().collect::<Scripted>());
        assert_eq!(session.run(), Ok(Summary { rounds: 1, correct: 0 }));
        let player = session.into_player();
        assert!(player.events().contains(&Event::Continue));
        assert!(player.events().iter().any(|e| e.to_string() == "Let me continue guessing."));
    }

    #[test]
    fn quitting_straight_away() {
        let tree = Tree::fit(&champions());
        let mut session = Session::new(&tree, ["s"].into_iter().collect::<Scripted>());
        assert_eq!(session.run(), Ok(Summary { rounds: 1, correct: 0 }));
        assert_eq!(session.player().prompts().len(), 1);
    }

    #[test]
    fn never_knowing_exhausts_the_tree() {
        let tree = Tree::fit(&champions());
        let script = std::iter::repeat_n("idk", tree.n()).collect::<Scripted>();
        let mut session = Session::new(&tree, script);
        let Err(Exhausted { nodes, .. }) = session.run() else {
            panic!("answering idk everywhere should run out of tree")
        };
        assert_eq!(nodes, tree.n());
    }

    #[test]
    fn fish_never_panics() {
        let tree = Tree::fit(&champions());
        for _ in 0..256 {
            match Session::new(&tree, Fish).run() {
                Ok(summary) => assert!(summary.correct <= summary.rounds),
                Err(e) => assert_eq!(e.nodes, tree.n()),
            }
        }
    }
}
