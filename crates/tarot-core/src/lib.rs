//! Reading engine for the tarot bot.
//!
//! Provides the card model, deck loading and validation, the spread catalog,
//! and the drawer that samples distinct cards with independent orientations.
//! Deck and catalog are immutable once built and are passed by reference into
//! every draw.

pub mod card;
pub mod deck;
pub mod error;
pub mod reading;
pub mod spread;

pub use card::{Arcana, Card, CardNumber, Suit};
pub use deck::Deck;
pub use error::{
    CatalogError, CatalogResult, DeckLoadError, DeckResult, ReadingError, ReadingResult,
};
pub use reading::{DrawnCard, Drawer, Orientation, Reading};
pub use spread::{Spread, SpreadCatalog, title_case};
