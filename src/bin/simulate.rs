//! Simulate Binary
//!
//! Plays one round per champion against an oracle that knows the answer.
//!
//! Options: --dataset, --label, --doubt, --seed, --quiet

use akinator::*;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Guess every champion in the table", long_about = None)]
struct Args {
    #[command(flatten)]
    options: Options,
    /// Chance the oracle answers "I don't know" to any question
    #[arg(long, default_value_t = 0.)]
    doubt: Probability,
    /// Seed for the oracle's doubt
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    args.options.log()?;
    let (table, tree) = args.options.fit()?;
    let mut correct = 0;
    let mut exhausted = 0;
    let mut confidence = 0.;
    let mut questions = 0;
    for (i, label) in table.labels().iter().enumerate() {
        let oracle = players::Oracle::new(&table, label)
            .ok_or_else(|| anyhow::anyhow!("{} missing from table", label))?
            .with_doubt(args.doubt, args.seed.wrapping_add(i as u64));
        let mut session = session::Session::new(&tree, oracle);
        let result = session.run();
        let oracle = session.into_player();
        questions += oracle.asked();
        match result {
            Ok(summary) if summary.correct > 0 => {
                correct += 1;
                let guess = oracle.guesses().last().map(|g| g.probability()).unwrap_or_default();
                confidence += guess;
                log::debug!("{:<32}{:<32}", label, format!("{} guesses", oracle.guesses().len()));
            }
            Ok(_) => log::warn!("{} abandoned", label),
            Err(e) => {
                exhausted += 1;
                log::warn!("{:<32}{}", label, e);
            }
        }
    }
    let n = table.n().max(1);
    log::info!("{:<32}{:<32}", "champions", table.n());
    log::info!("{:<32}{:<32}", "guessed", correct);
    log::info!("{:<32}{:<32}", "exhausted", exhausted);
    log::info!("{:<32}{:<32.4}", "accuracy", correct as Probability / n as Probability);
    log::info!("{:<32}{:<32.4}", "mean confidence", confidence / correct.max(1) as Probability);
    log::info!("{:<32}{:<32.2}", "mean questions", questions as Probability / n as Probability);
    Ok(())
}
