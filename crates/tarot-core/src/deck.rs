//! Deck loading, validation, and lookup.

use std::collections::HashSet;
use std::path::Path;

use rand::Rng;

use crate::card::{Arcana, Card, Suit};
use crate::error::{DeckLoadError, DeckResult, ReadingError, ReadingResult};

/// The standard 78-card deck, embedded at build time.
const STANDARD_DECK: &str = include_str!("../data/tarot_cards.json");

/// An immutable, validated collection of cards in declaration order.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The built-in 78-card deck.
    pub fn standard() -> DeckResult<Self> {
        Self::from_json(STANDARD_DECK)
    }

    /// Read and validate a deck file.
    pub fn load(path: &Path) -> DeckResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| DeckLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let deck = Self::from_json(&source)?;
        tracing::info!(path = %path.display(), cards = deck.size(), "loaded deck");
        Ok(deck)
    }

    /// Parse and validate a JSON array of card records.
    pub fn from_json(source: &str) -> DeckResult<Self> {
        let cards: Vec<Card> = serde_json::from_str(source)?;
        Self::from_cards(cards)
    }

    /// Validate a list of cards into a deck.
    ///
    /// Rejects an empty list, blank names or meanings, suit/arcana mismatches,
    /// duplicate names (case-insensitive), and duplicate (arcana, suit, number).
    pub fn from_cards(cards: Vec<Card>) -> DeckResult<Self> {
        if cards.is_empty() {
            return Err(DeckLoadError::Empty);
        }

        let mut names = HashSet::new();
        let mut identities = HashSet::new();
        for (i, card) in cards.iter().enumerate() {
            if card.name.trim().is_empty() {
                return Err(DeckLoadError::EmptyField {
                    card: format!("#{}", i + 1),
                    field: "name",
                });
            }
            for (field, text) in [
                ("meaning_up", &card.meaning_upright),
                ("meaning_rev", &card.meaning_reversed),
            ] {
                if text.trim().is_empty() {
                    return Err(DeckLoadError::EmptyField {
                        card: card.name.clone(),
                        field,
                    });
                }
            }
            match (card.arcana, card.suit) {
                (Arcana::Major, Some(_)) => {
                    return Err(DeckLoadError::UnexpectedSuit(card.name.clone()));
                }
                (Arcana::Minor, None) => {
                    return Err(DeckLoadError::MissingSuit(card.name.clone()));
                }
                _ => {}
            }
            if !names.insert(card.name.to_lowercase()) {
                return Err(DeckLoadError::DuplicateName(card.name.clone()));
            }
            if !identities.insert((card.arcana, card.suit, card.number.to_string())) {
                let suit = card
                    .suit
                    .map(|s| format!(" of {s}"))
                    .unwrap_or_default();
                return Err(DeckLoadError::DuplicateIdentity(format!(
                    "{} {}{}",
                    card.arcana, card.number, suit
                )));
            }
        }

        Ok(Self { cards })
    }

    /// Number of cards.
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    /// All cards in declaration order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Card at a declaration index.
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// First card whose name contains `query`, ignoring case.
    ///
    /// Matching is substring-based and follows declaration order, not best
    /// match: "king" finds the first king declared. A blank query matches
    /// nothing.
    pub fn find(&self, query: &str) -> Option<&Card> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.cards
            .iter()
            .find(|c| c.name.to_lowercase().contains(&needle))
    }

    /// Like [`Deck::find`], reporting a miss as [`ReadingError::CardNotFound`].
    pub fn lookup(&self, query: &str) -> ReadingResult<&Card> {
        self.find(query).ok_or_else(|| ReadingError::CardNotFound {
            query: query.trim().to_string(),
        })
    }

    /// A uniformly random card.
    pub fn random_card<R: Rng + ?Sized>(&self, rng: &mut R) -> &Card {
        &self.cards[rng.random_range(0..self.cards.len())]
    }

    /// Major arcana cards in declaration order.
    pub fn majors(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(|c| c.arcana == Arcana::Major)
    }

    /// Minor arcana cards of one suit in declaration order.
    pub fn by_suit(&self, suit: Suit) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(move |c| c.suit == Some(suit))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::card::CardNumber;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// A small valid deck: `count` minor cards of wands named "Card N".
    pub(crate) fn fixture_deck(count: u32) -> Deck {
        let cards = (1..=count)
            .map(|n| Card {
                number: CardNumber::Int(n),
                name: format!("Card {n}"),
                arcana: Arcana::Minor,
                suit: Some(Suit::Wands),
                keywords: vec![format!("kw{n}")],
                meaning_upright: format!("up {n}"),
                meaning_reversed: format!("rev {n}"),
            })
            .collect();
        Deck::from_cards(cards).unwrap()
    }

    fn standard() -> Deck {
        Deck::standard().unwrap()
    }

    #[test]
    fn standard_deck_shape() {
        let deck = standard();
        assert_eq!(deck.size(), 78);
        assert_eq!(deck.majors().count(), 22);
        for suit in Suit::ALL {
            assert_eq!(deck.by_suit(suit).count(), 14, "suit {suit}");
        }
    }

    #[test]
    fn standard_deck_names_unique() {
        let deck = standard();
        let names: HashSet<&str> = deck.cards().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names.len(), deck.size());
    }

    #[test]
    fn find_fool() {
        let deck = standard();
        assert_eq!(deck.find("fool").unwrap().name, "The Fool");
        assert_eq!(deck.find("  FOOL ").unwrap().name, "The Fool");
    }

    #[test]
    fn find_is_first_substring_match() {
        let deck = standard();
        assert_eq!(deck.find("king").unwrap().name, "King of Wands");
        assert_eq!(deck.find("e").unwrap().name, "The Fool");
        assert_eq!(deck.find("mag").unwrap().name, "The Magician");
    }

    #[test]
    fn find_miss_is_none() {
        let deck = standard();
        assert!(deck.find("zzzznotacard").is_none());
        assert!(deck.find("   ").is_none());
    }

    #[test]
    fn lookup_miss_is_card_not_found() {
        let deck = standard();
        let err = deck.lookup("zzzznotacard").unwrap_err();
        assert_eq!(
            err,
            ReadingError::CardNotFound {
                query: "zzzznotacard".to_string()
            }
        );
        assert_eq!(err.to_string(), "card 'zzzznotacard' not found");
    }

    #[test]
    fn random_card_is_from_deck() {
        let deck = fixture_deck(5);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let card = deck.random_card(&mut rng);
            assert!(deck.cards().contains(card));
        }
    }

    #[test]
    fn size_matches_record_count() {
        assert_eq!(fixture_deck(3).size(), 3);
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(Deck::from_json("[]"), Err(DeckLoadError::Empty)));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            Deck::from_json("{not json"),
            Err(DeckLoadError::Parse(_))
        ));
    }

    #[test]
    fn rejects_missing_field() {
        let json = r#"[{"number": 0, "name": "The Fool", "arcana": "major",
            "suit": null, "meaning_up": "a", "meaning_rev": "b"}]"#;
        assert!(matches!(Deck::from_json(json), Err(DeckLoadError::Parse(_))));
    }

    #[test]
    fn rejects_duplicate_name() {
        let mut cards = fixture_deck(2).cards().to_vec();
        cards[1].name = "card 1".to_string();
        assert!(matches!(
            Deck::from_cards(cards),
            Err(DeckLoadError::DuplicateName(name)) if name == "card 1"
        ));
    }

    #[test]
    fn rejects_duplicate_identity() {
        let mut cards = fixture_deck(2).cards().to_vec();
        cards[1].number = CardNumber::Text("1".to_string());
        let err = Deck::from_cards(cards).unwrap_err();
        assert!(matches!(err, DeckLoadError::DuplicateIdentity(_)));
        assert_eq!(err.to_string(), "duplicate card identity: minor 1 of wands");
    }

    #[test]
    fn same_number_in_other_suit_is_fine() {
        let mut cards = fixture_deck(2).cards().to_vec();
        cards[1].number = CardNumber::Int(1);
        cards[1].suit = Some(Suit::Cups);
        assert!(Deck::from_cards(cards).is_ok());
    }

    #[test]
    fn rejects_suit_mismatch() {
        let mut cards = fixture_deck(1).cards().to_vec();
        cards[0].suit = None;
        assert!(matches!(
            Deck::from_cards(cards.clone()),
            Err(DeckLoadError::MissingSuit(_))
        ));
        cards[0].arcana = Arcana::Major;
        cards[0].suit = Some(Suit::Cups);
        assert!(matches!(
            Deck::from_cards(cards),
            Err(DeckLoadError::UnexpectedSuit(_))
        ));
    }

    #[test]
    fn rejects_blank_meaning() {
        let mut cards = fixture_deck(1).cards().to_vec();
        cards[0].meaning_reversed = "  ".to_string();
        let err = Deck::from_cards(cards).unwrap_err();
        assert_eq!(err.to_string(), "card 'Card 1' has an empty meaning_rev");
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("deck.json");
        std::fs::write(&path, STANDARD_DECK).unwrap();
        assert_eq!(Deck::load(&path).unwrap().size(), 78);
        assert!(matches!(
            Deck::load(&dir.path().join("missing.json")),
            Err(DeckLoadError::Io { .. })
        ));
    }
}
