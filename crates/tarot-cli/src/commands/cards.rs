use comfy_table::{ContentArrangement, Table};
use tarot_bot::Command;

use crate::Options;

pub async fn list(options: &Options) -> Result<(), String> {
    super::run_one(options, Command::Cards).await
}

pub fn table(options: &Options) -> Result<(), String> {
    let deck = super::load_deck(options)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Name", "Arcana", "Suit", "Keywords"]);

    for card in deck.cards() {
        let suit = card.suit_label().unwrap_or_else(|| "—".to_string());
        table.add_row(vec![
            card.number.to_string(),
            card.name.clone(),
            card.arcana_label(),
            suit,
            card.keyword_line(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} cards", deck.size());

    Ok(())
}
