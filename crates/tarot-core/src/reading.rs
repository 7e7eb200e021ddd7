//! Drawing readings.
//!
//! Card selection and orientation are two independent random decisions fed
//! by two separate RNG streams: cards are sampled uniformly without
//! replacement, then each drawn card gets its own fair coin flip.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{ReadingError, ReadingResult};
use crate::spread::{Spread, SpreadCatalog};

/// Offset between the card stream seed and the orientation stream seed.
const ORIENTATION_STREAM: u64 = 0x9E37_79B9_7F4A_7C15;

/// Whether a drawn card is read upright or reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Read as printed.
    Upright,
    /// Rotated; read with the reversed meaning.
    Reversed,
}

impl Orientation {
    /// Whether this is [`Orientation::Reversed`].
    pub fn is_reversed(self) -> bool {
        self == Self::Reversed
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Upright => write!(f, "Upright"),
            Self::Reversed => write!(f, "Reversed"),
        }
    }
}

/// A card placed at a spread position with an orientation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawnCard {
    /// The card drawn.
    pub card: Card,
    /// Position label from the spread.
    pub position: String,
    /// Upright or reversed.
    pub orientation: Orientation,
}

impl DrawnCard {
    /// The meaning that applies to this orientation.
    pub fn meaning(&self) -> &str {
        self.card.meaning(self.orientation.is_reversed())
    }
}

/// The result of one draw request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    /// Spread identifier the reading was drawn for.
    pub spread_id: String,
    /// The question asked, if any.
    pub question: Option<String>,
    /// Drawn cards in position order.
    pub cards: Vec<DrawnCard>,
}

impl Reading {
    /// Human-cased spread name.
    pub fn spread_name(&self) -> String {
        crate::spread::title_case(&self.spread_id.replace('_', " "))
    }
}

/// Pick `count` distinct cards uniformly at random, or `None` when the deck
/// holds fewer than `count` cards. Nothing is drawn from `rng` in that case.
fn sample_cards<'a, R: Rng + ?Sized>(
    deck: &'a Deck,
    count: usize,
    rng: &mut R,
) -> Option<Vec<&'a Card>> {
    if count > deck.size() {
        return None;
    }
    let picked = rand::seq::index::sample(rng, deck.size(), count)
        .into_iter()
        .map(|i| &deck.cards()[i])
        .collect();
    Some(picked)
}

/// A fair coin flip for orientation.
pub fn flip_orientation<R: Rng + ?Sized>(rng: &mut R) -> Orientation {
    if rng.random_bool(0.5) {
        Orientation::Reversed
    } else {
        Orientation::Upright
    }
}

/// Draws readings and single cards.
///
/// Holds the only mutable state of the engine: the card stream and the
/// orientation stream. Deck and catalog are borrowed per call.
#[derive(Debug, Clone)]
pub struct Drawer {
    cards: StdRng,
    orientations: StdRng,
}

impl Drawer {
    /// Reproducible drawer; both streams derive from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rngs(
            StdRng::seed_from_u64(seed),
            StdRng::seed_from_u64(seed.wrapping_add(ORIENTATION_STREAM)),
        )
    }

    /// Drawer seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::from_rngs(StdRng::from_os_rng(), StdRng::from_os_rng())
    }

    /// Drawer from explicit card and orientation streams.
    pub fn from_rngs(cards: StdRng, orientations: StdRng) -> Self {
        Self {
            cards,
            orientations,
        }
    }

    /// Draw a reading for a catalog spread.
    ///
    /// Fails with [`ReadingError::UnknownSpread`] before touching the deck,
    /// and with [`ReadingError::InsufficientCards`] before sampling anything.
    pub fn draw(
        &mut self,
        deck: &Deck,
        catalog: &SpreadCatalog,
        spread_id: &str,
        question: Option<&str>,
    ) -> ReadingResult<Reading> {
        let spread = catalog
            .resolve(spread_id)
            .ok_or_else(|| ReadingError::UnknownSpread {
                id: spread_id.to_string(),
            })?;
        self.draw_spread(deck, spread, question)
    }

    /// Draw a reading for an already resolved spread.
    pub fn draw_spread(
        &mut self,
        deck: &Deck,
        spread: &Spread,
        question: Option<&str>,
    ) -> ReadingResult<Reading> {
        let needed = spread.card_count();
        let picked = sample_cards(deck, needed, &mut self.cards).ok_or_else(|| {
            ReadingError::InsufficientCards {
                spread: spread.id.clone(),
                needed,
                available: deck.size(),
            }
        })?;
        let cards: Vec<DrawnCard> = picked
            .into_iter()
            .zip(&spread.positions)
            .map(|(card, position)| DrawnCard {
                card: card.clone(),
                position: position.clone(),
                orientation: flip_orientation(&mut self.orientations),
            })
            .collect();
        debug_assert_eq!(cards.len(), spread.positions.len());

        tracing::debug!(spread = %spread.id, cards = cards.len(), "drew reading");
        Ok(Reading {
            spread_id: spread.id.clone(),
            question: question
                .map(str::trim)
                .filter(|q| !q.is_empty())
                .map(str::to_string),
            cards,
        })
    }

    /// One random card with its own coin flip, outside any spread.
    pub fn draw_one(&mut self, deck: &Deck, position: &str) -> DrawnCard {
        let card = self.random_card(deck).clone();
        DrawnCard {
            card,
            position: position.to_string(),
            orientation: self.flip(),
        }
    }

    /// A uniformly random card from the card stream.
    pub fn random_card<'a>(&mut self, deck: &'a Deck) -> &'a Card {
        deck.random_card(&mut self.cards)
    }

    /// A coin flip from the orientation stream.
    pub fn flip(&mut self) -> Orientation {
        flip_orientation(&mut self.orientations)
    }
}
