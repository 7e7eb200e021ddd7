//! Text rendering for readings, card details, and listings.
//!
//! Output uses chat-style markdown. Nothing here truncates; display limits
//! belong to the transport.

use std::fmt::Write;

use tarot_core::{Card, Deck, DrawnCard, Orientation, Reading, SpreadCatalog, Suit, title_case};

/// Suit listings show at most this many card names.
const SUIT_LISTING_LIMIT: usize = 10;

/// A titled block of text, shown as one field of a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Field title.
    pub title: String,
    /// Field body.
    pub body: String,
    /// Whether the transport may lay this field out side by side.
    pub inline: bool,
}

impl Section {
    /// A full-width section.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            inline: false,
        }
    }

    /// A section that may sit beside its neighbours.
    pub fn inline(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            inline: true,
            ..Self::new(title, body)
        }
    }
}

/// Orientation label with its marker emoji.
pub fn orientation_label(orientation: Orientation) -> &'static str {
    match orientation {
        Orientation::Upright => "Upright ⬆️",
        Orientation::Reversed => "Reversed 🔄",
    }
}

/// Render a full reading: a header, the question line if one was asked,
/// and one section per drawn card in draw order.
pub fn render_reading(reading: &Reading) -> String {
    let mut out = format!("## 🔮 Tarot Reading - {}\n", reading.spread_name());
    if let Some(question) = &reading.question {
        let _ = write!(out, "**Question:** {question}\n\n");
    }
    for drawn in &reading.cards {
        out.push_str(&render_drawn(drawn));
    }
    out
}

fn render_drawn(drawn: &DrawnCard) -> String {
    let card = &drawn.card;
    let mut out = format!("### {}\n", drawn.position);
    let _ = writeln!(
        out,
        "**Card:** {} ({})",
        card.name,
        orientation_label(drawn.orientation)
    );
    let _ = writeln!(out, "**Arcana:** {}", card.arcana_label());
    if let Some(suit) = card.suit_label() {
        let _ = writeln!(out, "**Suit:** {suit}");
    }
    let _ = writeln!(out, "**Keywords:** {}", card.keyword_line());
    let _ = write!(out, "**Interpretation:** {}\n\n", drawn.meaning());
    out
}

/// Fields describing one card in full, both meanings included.
pub fn card_sections(card: &Card) -> Vec<Section> {
    let mut sections = vec![
        Section::inline("Number", card.number.to_string()),
        Section::inline("Arcana", card.arcana_label()),
    ];
    if let Some(suit) = card.suit_label() {
        sections.push(Section::inline("Suit", suit));
    }
    sections.push(Section::new("Keywords", card.keyword_line()));
    sections.push(Section::new("Upright Meaning", card.meaning_upright.clone()));
    sections.push(Section::new("Reversed Meaning", card.meaning_reversed.clone()));
    sections
}

/// Headline for a daily card: bold name plus orientation.
pub fn daily_headline(drawn: &DrawnCard) -> String {
    format!(
        "**{}** ({})",
        drawn.card.name,
        orientation_label(drawn.orientation)
    )
}

/// Advice line for a daily card.
pub fn daily_advice(orientation: Orientation) -> &'static str {
    match orientation {
        Orientation::Upright => "This card upright is a positive sign. Embrace its energy today.",
        Orientation::Reversed => {
            "This card reversed suggests you may need to reconsider this area of your life."
        }
    }
}

/// Fields for a daily card: message, keywords, advice.
pub fn daily_sections(drawn: &DrawnCard) -> Vec<Section> {
    vec![
        Section::new("Message for Today", drawn.meaning()),
        Section::new("Keywords", drawn.card.keyword_line()),
        Section::new("Advice", daily_advice(drawn.orientation)),
    ]
}

/// Deck contents: major arcana with numbers, then each suit present in the deck.
pub fn deck_sections(deck: &Deck) -> Vec<Section> {
    let majors: Vec<&Card> = deck.majors().collect();
    let mut sections = Vec::new();
    if !majors.is_empty() {
        let lines: Vec<String> = majors
            .iter()
            .map(|c| format!("{}. {}", c.number, c.name))
            .collect();
        sections.push(Section::inline(
            format!("Major Arcana ({} cards)", majors.len()),
            lines.join("\n"),
        ));
    }
    for suit in Suit::ALL {
        let cards: Vec<&Card> = deck.by_suit(suit).collect();
        if cards.is_empty() {
            continue;
        }
        let names: Vec<&str> = cards
            .iter()
            .take(SUIT_LISTING_LIMIT)
            .map(|c| c.name.as_str())
            .collect();
        sections.push(Section::inline(
            format!("{} ({} cards)", title_case(&suit.to_string()), cards.len()),
            names.join("\n"),
        ));
    }
    sections
}

/// One field per spread: card count and the command that draws it.
pub fn spread_sections(catalog: &SpreadCatalog, prefix: &str) -> Vec<Section> {
    catalog
        .list_all()
        .iter()
        .map(|spread| {
            let count = spread.card_count();
            Section::inline(
                spread.display_name(),
                format!(
                    "{count} card{}\n`{prefix}tarot {} [question]`",
                    if count == 1 { "" } else { "s" },
                    spread.id
                ),
            )
        })
        .collect()
}

/// Flatten sections into plain markdown, one bold title per block.
pub fn sections_to_markdown(sections: &[Section]) -> String {
    sections
        .iter()
        .map(|s| format!("**{}**\n{}", s.title, s.body))
        .collect::<Vec<_>>()
        .join("\n\n")
}
