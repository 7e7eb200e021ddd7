//! Error types for deck loading, catalog loading, and drawing.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for deck loading.
pub type DeckResult<T> = Result<T, DeckLoadError>;

/// Result type for spread catalog loading.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Result type for draws and lookups.
pub type ReadingResult<T> = Result<T, ReadingError>;

/// A deck source could not be turned into a well-formed deck.
///
/// These are fatal at startup: sampling assumes a validated deck.
#[derive(Debug, Error)]
pub enum DeckLoadError {
    /// The deck file could not be read.
    #[error("could not read deck file {path}: {source}")]
    Io {
        /// Path that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The deck source is not valid JSON or a record is missing a field.
    #[error("malformed deck source: {0}")]
    Parse(#[from] serde_json::Error),

    /// The deck source contains no cards.
    #[error("deck contains no cards")]
    Empty,

    /// Two cards share a name.
    #[error("duplicate card name '{0}'")]
    DuplicateName(String),

    /// Two cards share arcana, suit and number.
    #[error("duplicate card identity: {0}")]
    DuplicateIdentity(String),

    /// A minor arcana card has no suit.
    #[error("minor arcana card '{0}' has no suit")]
    MissingSuit(String),

    /// A major arcana card carries a suit.
    #[error("major arcana card '{0}' must not have a suit")]
    UnexpectedSuit(String),

    /// A required text field is blank.
    #[error("card '{card}' has an empty {field}")]
    EmptyField {
        /// Name of the offending card (or its position when the name is blank).
        card: String,
        /// Which field is empty.
        field: &'static str,
    },
}

/// A spread catalog source is inconsistent.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("could not read spread catalog {path}: {source}")]
    Io {
        /// Path that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The catalog source is not valid JSON.
    #[error("malformed spread catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// The catalog defines no spreads.
    #[error("spread catalog is empty")]
    Empty,

    /// A spread has no positions.
    #[error("spread '{0}' has no positions")]
    EmptySpread(String),

    /// Two spreads share an identifier.
    #[error("duplicate spread '{0}'")]
    DuplicateSpread(String),
}

/// Per-request failures. Each message is fit to show a chat user directly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadingError {
    /// The spread identifier is not in the catalog.
    #[error("unknown spread '{id}'")]
    UnknownSpread {
        /// The identifier that was asked for.
        id: String,
    },

    /// The spread needs more cards than the deck holds.
    #[error("the {spread} spread needs {needed} cards but the deck only has {available}")]
    InsufficientCards {
        /// Spread identifier.
        spread: String,
        /// Number of positions in the spread.
        needed: usize,
        /// Number of cards in the deck.
        available: usize,
    },

    /// No card name contains the query.
    #[error("card '{query}' not found")]
    CardNotFound {
        /// The lookup query as given.
        query: String,
    },
}
