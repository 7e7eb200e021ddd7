//! Chat-command dispatcher for the tarot bot.
//!
//! Turns prefixed chat messages (`!tarot three_card Will I get the job?`)
//! into transport-agnostic replies: embeds with fields plus PNG
//! attachments. Connecting to a chat gateway and delivering replies is the
//! caller's job.

pub mod bot;
pub mod command;
pub mod config;
pub mod error;
pub mod reply;

pub use bot::TarotBot;
pub use command::{Command, parse_message};
pub use config::BotConfig;
pub use error::{BotError, BotResult};
pub use reply::{Accent, Attachment, Embed, Reply};
