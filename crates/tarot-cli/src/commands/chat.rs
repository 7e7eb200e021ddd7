use std::io::Write;

use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::Options;
use crate::output::print_replies;

pub async fn run(options: &Options, prefix: &str) -> Result<(), String> {
    let bot = super::build_bot(options, prefix)?;
    let prefix = bot.config().prefix.clone();

    println!(
        "  {} Tarot chat ({} cards loaded)",
        "Starting".bold(),
        bot.deck().size()
    );
    println!("  Try '{prefix}help'. Type 'quit' to exit.\n");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush().map_err(|e| e.to_string())?;

        let Some(line) = lines.next_line().await.map_err(|e| e.to_string())? else {
            break; // EOF
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            break;
        }

        let replies = bot.handle_message(&options.user, input).await;
        if let Err(e) = print_replies(&replies, options.out.as_deref()) {
            println!("{}\n", e.yellow());
        }
    }

    Ok(())
}
