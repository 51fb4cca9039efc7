//! Inspect Binary
//!
//! Prints the fitted decision tree as an outline or as JSON.
//!
//! Options: --dataset, --label, --json

use akinator::*;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Print the fitted decision tree", long_about = None)]
struct Args {
    #[command(flatten)]
    options: Options,
    /// Emit the tree as pretty-printed JSON instead of an outline
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    args.options.log()?;
    let (table, tree) = args.options.fit()?;
    log::info!("{:<32}{:<32}", "champions", table.n());
    log::info!("{:<32}{:<32}", "attributes", table.width());
    match args.json {
        true => println!("{}", serde_json::to_string_pretty(&tree)?),
        false => println!("{}", tree),
    }
    Ok(())
}
