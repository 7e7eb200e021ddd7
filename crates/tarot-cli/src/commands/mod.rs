pub mod cards;
pub mod chat;

use tarot_bot::{BotConfig, Command, TarotBot};
use tarot_core::{Deck, SpreadCatalog};
use tarot_render::RenderConfig;

use crate::Options;
use crate::output::print_replies;

/// Load the deck named by `--deck`, or the built-in one.
fn load_deck(options: &Options) -> Result<Deck, String> {
    let deck = match &options.deck {
        Some(path) => Deck::load(path),
        None => Deck::standard(),
    };
    deck.map_err(|e| format!("failed to load deck: {e}"))
}

/// Load the catalog named by `--spreads`, or the built-in one.
fn load_catalog(options: &Options) -> Result<SpreadCatalog, String> {
    match &options.spreads {
        Some(path) => SpreadCatalog::load(path).map_err(|e| format!("failed to load spreads: {e}")),
        None => Ok(SpreadCatalog::standard()),
    }
}

/// Build a dispatcher from the shared options.
pub fn build_bot(options: &Options, prefix: &str) -> Result<TarotBot, String> {
    let deck = load_deck(options)?;
    let catalog = load_catalog(options)?;
    let render = RenderConfig::default()
        .with_asset_dir(&options.assets)
        .with_extension(&options.extension);
    let mut config = BotConfig::default().with_prefix(prefix).with_render(render);
    if let Some(seed) = options.seed {
        config = config.with_seed(seed);
    }
    tracing::debug!(
        cards = deck.size(),
        spreads = catalog.list_all().len(),
        seed = ?options.seed,
        "bot ready"
    );
    Ok(TarotBot::new(deck, catalog, config))
}

/// Run one command and print what the bot would send.
async fn run_one(options: &Options, command: Command) -> Result<(), String> {
    let bot = build_bot(options, "!")?;
    let replies = bot.execute(command, &options.user).await;
    print_replies(&replies, options.out.as_deref())
}

pub async fn read(options: &Options, spread: &str, question: &str) -> Result<(), String> {
    let question = question.trim();
    let command = Command::Tarot {
        spread: spread.to_lowercase(),
        question: (!question.is_empty()).then(|| question.to_string()),
    };
    run_one(options, command).await
}

pub async fn card(options: &Options, name: &str) -> Result<(), String> {
    let name = name.trim();
    let command = Command::Card {
        query: (!name.is_empty()).then(|| name.to_string()),
    };
    run_one(options, command).await
}

pub async fn daily(options: &Options) -> Result<(), String> {
    run_one(options, Command::Daily).await
}

pub async fn spreads(options: &Options) -> Result<(), String> {
    let command = Command::Tarot {
        spread: "help".to_string(),
        question: None,
    };
    run_one(options, command).await
}
