//! Error types for command dispatch.

use thiserror::Error;

/// Result type for command dispatch.
pub type BotResult<T> = Result<T, BotError>;

/// Failures while handling a command. All are turned into user-visible replies.
#[derive(Debug, Error)]
pub enum BotError {
    /// The message named a command the bot does not know.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A draw or lookup failed.
    #[error(transparent)]
    Reading(#[from] tarot_core::ReadingError),

    /// A card image could not be encoded.
    #[error(transparent)]
    Render(#[from] tarot_render::RenderError),

    /// A rendering task did not finish.
    #[error("image task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
