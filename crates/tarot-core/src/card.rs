//! Card definitions.
//!
//! A card record mirrors the deck file format: `number`, `name`, `arcana`,
//! nullable `suit`, ordered `keywords`, `meaning_up` and `meaning_rev`.

use serde::{Deserialize, Serialize};

use crate::spread::title_case;

/// The two card categories of a tarot deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arcana {
    /// The 22 thematic trump cards.
    Major,
    /// The 56 suited cards.
    Minor,
}

impl std::fmt::Display for Arcana {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Major => write!(f, "major"),
            Self::Minor => write!(f, "minor"),
        }
    }
}

/// A minor arcana suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    /// Fire, will, ambition.
    Wands,
    /// Water, feeling, relationships.
    Cups,
    /// Air, thought, conflict.
    Swords,
    /// Earth, work, material matters.
    Pentacles,
}

impl Suit {
    /// All suits in conventional order.
    pub const ALL: [Suit; 4] = [Suit::Wands, Suit::Cups, Suit::Swords, Suit::Pentacles];
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wands => write!(f, "wands"),
            Self::Cups => write!(f, "cups"),
            Self::Swords => write!(f, "swords"),
            Self::Pentacles => write!(f, "pentacles"),
        }
    }
}

/// A card number as written in the deck file: an integer or a numeric string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CardNumber {
    /// A plain integer (`0`, `14`).
    Int(u32),
    /// A string identifier (`"0"`, `"XIV"`).
    Text(String),
}

impl std::fmt::Display for CardNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

/// One card definition. Immutable once the deck is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Identifier, unique within arcana and suit.
    pub number: CardNumber,
    /// Display name, unique across the deck.
    pub name: String,
    /// Major or minor arcana.
    pub arcana: Arcana,
    /// Suit, present iff the card is minor arcana.
    pub suit: Option<Suit>,
    /// Keywords in display order.
    pub keywords: Vec<String>,
    /// Meaning when drawn upright.
    #[serde(rename = "meaning_up")]
    pub meaning_upright: String,
    /// Meaning when drawn reversed.
    #[serde(rename = "meaning_rev")]
    pub meaning_reversed: String,
}

impl Card {
    /// The meaning for the given orientation.
    pub fn meaning(&self, reversed: bool) -> &str {
        if reversed {
            &self.meaning_reversed
        } else {
            &self.meaning_upright
        }
    }

    /// Keywords joined for display.
    pub fn keyword_line(&self) -> String {
        self.keywords.join(", ")
    }

    /// Title-cased arcana label ("Major", "Minor").
    pub fn arcana_label(&self) -> String {
        title_case(&self.arcana.to_string())
    }

    /// Title-cased suit label, if the card has a suit.
    pub fn suit_label(&self) -> Option<String> {
        self.suit.map(|s| title_case(&s.to_string()))
    }

    /// File stem of the card art: `{number}_{lowercased name with underscores}`.
    pub fn asset_stem(&self) -> String {
        format!("{}_{}", self.number, self.name.to_lowercase().replace(' ', "_"))
    }

    /// Whether this is a major arcana card.
    pub fn is_major(&self) -> bool {
        self.arcana == Arcana::Major
    }
}
