//! Play Binary
//!
//! Interactive champion guessing at the terminal.
//!
//! Options: --dataset, --label, --portraits, --quiet

use akinator::*;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Think of a champion and answer the questions", long_about = None)]
struct Args {
    #[command(flatten)]
    options: Options,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    args.options.log()?;
    let (_, tree) = args.options.fit()?;
    let mut session = session::Session::new(&tree, players::Human).with_portraits(args.options.portraits());
    let summary = session.run()?;
    log::info!("{:<32}{:<32}", "session complete", summary);
    Ok(())
}
