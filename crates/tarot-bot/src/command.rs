//! Command parsing.
//!
//! Grammar, with `!` standing for the configured prefix:
//!
//! ```text
//! !tarot [spread] [question...]
//! !card [name...]
//! !cards
//! !daily
//! !help
//! ```

use crate::error::{BotError, BotResult};

/// Spread used when `tarot` is given no spread.
pub const DEFAULT_SPREAD: &str = "single";

/// A parsed chat command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Draw a reading.
    Tarot {
        /// Spread identifier (lowercased).
        spread: String,
        /// Optional question, the rest of the message.
        question: Option<String>,
    },
    /// Show one card by name, or a random card without a query.
    Card {
        /// Name query.
        query: Option<String>,
    },
    /// List the deck.
    Cards,
    /// Draw the daily card.
    Daily,
    /// Show the help menu.
    Help,
}

/// Parse a chat message.
///
/// Returns `None` when the message does not start with `prefix`, so ordinary
/// chatter is ignored. Command names are case-insensitive.
pub fn parse_message(content: &str, prefix: &str) -> Option<BotResult<Command>> {
    let body = content.trim().strip_prefix(prefix)?;
    let (name, rest) = split_word(body);
    let name = name.to_lowercase();

    let command = match name.as_str() {
        "tarot" => {
            let (spread, question) = split_word(rest);
            let spread = if spread.is_empty() {
                DEFAULT_SPREAD.to_string()
            } else {
                spread.to_lowercase()
            };
            Ok(Command::Tarot {
                spread,
                question: non_empty(question),
            })
        }
        "card" => Ok(Command::Card {
            query: non_empty(rest),
        }),
        "cards" => Ok(Command::Cards),
        "daily" => Ok(Command::Daily),
        "help" => Ok(Command::Help),
        _ => Err(BotError::UnknownCommand(name)),
    };
    Some(command)
}

/// First whitespace-delimited word and the trimmed remainder.
fn split_word(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    match text.find(char::is_whitespace) {
        Some(i) => (&text[..i], text[i..].trim()),
        None => (text, ""),
    }
}

fn non_empty(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
