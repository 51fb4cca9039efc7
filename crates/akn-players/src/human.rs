use akn_session::*;
use colored::Colorize;
use dialoguer::Input;

/// Interactive player at a terminal.
///
/// Single keys work: y, n, i for "I don't know", s to stop.
/// Anything else is passed through and re-asked.
#[derive(Debug, Default)]
pub struct Human;

impl Player for Human {
    fn prompt(&mut self, prompt: &Prompt) -> String {
        let hint = match prompt {
            Prompt::Question(_) => "[y]es [n]o [i] don't know [s]top",
            Prompt::Confirmation(_) | Prompt::Replay => "[y]es [n]o [s]top",
        };
        Input::<String>::new()
            .with_prompt(format!("{} {}", prompt.to_string().bold(), hint.dimmed()))
            .allow_empty(true)
            .report(false)
            .interact_text()
            .unwrap_or_else(|e| {
                log::warn!("input closed ({}), quitting", e);
                String::from("quit")
            })
    }
    fn notify(&mut self, event: &Event) {
        match event {
            Event::Round(n) => println!("\n{}", format!("ROUND {}", n).cyan()),
            Event::Guess(_) => println!("{}", event.to_string().green().bold()),
            Event::Portrait(Portrait::Found(_)) => println!("{}", event.to_string().blue()),
            Event::Portrait(Portrait::Missing(_)) => println!("{}", event.to_string().dimmed()),
            Event::Correct(_) => println!("{}", event.to_string().green()),
            Event::Continue => println!("{}", event.to_string().yellow()),
            Event::Unrecognized(_) => println!("{}", event.to_string().red()),
            Event::Farewell => println!("{}", event.to_string().magenta()),
        }
    }
}
