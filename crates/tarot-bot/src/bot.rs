//! The command dispatcher.
//!
//! `TarotBot` keeps the drawer (the only mutable state) behind a mutex that
//! is held only for the draw itself, and shares the deck, catalog and image
//! renderer with rendering tasks, so one bot serves concurrent requests. Every per-request error
//! becomes a user-visible reply; nothing here panics or propagates to the
//! transport.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tarot_core::{Card, Deck, DrawnCard, Drawer, ReadingError, SpreadCatalog};
use tarot_render::text::{
    card_sections, daily_headline, daily_sections, deck_sections, render_reading, spread_sections,
};
use tarot_render::{CardImageRenderer, Section};

use crate::command::{Command, parse_message};
use crate::config::BotConfig;
use crate::error::{BotError, BotResult};
use crate::reply::{Accent, Embed, Reply, truncate_chars};

/// Position label of the daily card.
const DAILY_POSITION: &str = "Today";

/// Dispatches chat commands against a loaded deck and catalog.
pub struct TarotBot {
    deck: Arc<Deck>,
    catalog: Arc<SpreadCatalog>,
    renderer: Arc<CardImageRenderer>,
    drawer: Mutex<Drawer>,
    config: BotConfig,
}

impl TarotBot {
    /// Create a dispatcher. The deck and catalog are never mutated afterwards.
    pub fn new(deck: Deck, catalog: SpreadCatalog, config: BotConfig) -> Self {
        let drawer = match config.seed {
            Some(seed) => Drawer::seeded(seed),
            None => Drawer::from_os_rng(),
        };
        Self {
            deck: Arc::new(deck),
            catalog: Arc::new(catalog),
            renderer: Arc::new(CardImageRenderer::new(config.render.clone())),
            drawer: Mutex::new(drawer),
            config,
        }
    }

    /// The loaded deck.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The spread catalog.
    pub fn catalog(&self) -> &SpreadCatalog {
        &self.catalog
    }

    /// The active configuration.
    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    /// Exclusive access to the RNG streams. Never held across an await.
    fn drawer(&self) -> MutexGuard<'_, Drawer> {
        // A panic mid-draw leaves the RNG state usable.
        self.drawer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Handle one chat message from `author`.
    ///
    /// Messages without the command prefix produce no replies.
    pub async fn handle_message(&self, author: &str, content: &str) -> Vec<Reply> {
        match parse_message(content, &self.config.prefix) {
            None => Vec::new(),
            Some(Ok(command)) => self.execute(command, author).await,
            Some(Err(err)) => vec![self.error_reply(&err)],
        }
    }

    /// Run a parsed command for `author`.
    pub async fn execute(&self, command: Command, author: &str) -> Vec<Reply> {
        tracing::debug!(?command, author, "executing command");
        let result = match command {
            Command::Tarot { spread, question } => {
                self.tarot(&spread, question.as_deref(), author).await
            }
            Command::Card { query } => self.card(query.as_deref()).await,
            Command::Cards => Ok(vec![self.cards()]),
            Command::Daily => Ok(vec![self.daily(author)]),
            Command::Help => Ok(vec![self.help()]),
        };
        result.unwrap_or_else(|err| vec![self.error_reply(&err)])
    }

    async fn tarot(
        &self,
        spread_id: &str,
        question: Option<&str>,
        author: &str,
    ) -> BotResult<Vec<Reply>> {
        if spread_id == "help" {
            return Ok(vec![self.spread_listing()]);
        }
        let drawn = self
            .drawer()
            .draw(&self.deck, &self.catalog, spread_id, question);
        let reading = match drawn {
            Ok(reading) => reading,
            Err(ReadingError::UnknownSpread { id }) => {
                tracing::warn!(spread = %id, "unknown spread requested");
                return Ok(vec![self.spread_listing()]);
            }
            Err(err) => return Err(err.into()),
        };

        let text = render_reading(&reading);
        let mut embed = Embed::new(
            format!("🔮 Tarot Reading - {}", reading.spread_name()),
            Accent::DarkPurple,
        )
        .description(truncate_chars(&text, self.config.display_limit))
        .footer(format!("Reading for {author}"));
        if let Some(question) = &reading.question {
            embed = embed.field(Section::new("Question", question.clone()));
        }

        let mut replies = vec![Reply::embed(embed)];
        let images = self.render_images(reading.cards).await?;
        replies.extend(
            images
                .into_iter()
                .enumerate()
                .map(|(i, png)| Reply::file(format!("card_{}.png", i + 1), png)),
        );
        Ok(replies)
    }

    /// Render every card on a blocking task, then collect in position order.
    async fn render_images(&self, cards: Vec<DrawnCard>) -> BotResult<Vec<Vec<u8>>> {
        let handles: Vec<_> = cards
            .into_iter()
            .map(|drawn| {
                let renderer = Arc::clone(&self.renderer);
                tokio::task::spawn_blocking(move || renderer.render_png(&drawn))
            })
            .collect();

        let mut images = Vec::with_capacity(handles.len());
        for handle in handles {
            images.push(handle.await??);
        }
        Ok(images)
    }

    async fn card(&self, query: Option<&str>) -> BotResult<Vec<Reply>> {
        let card = match query {
            Some(query) => self.deck.lookup(query)?.clone(),
            None => self.random_card(),
        };

        let accent = if card.is_major() {
            Accent::Gold
        } else {
            Accent::Blue
        };
        let embed = Embed::new(format!("🃏 {}", card.name), accent)
            .fields(card_sections(&card))
            .footer(format!("Draw this card with {}tarot command", self.config.prefix));
        let mut replies = vec![Reply::embed(embed)];

        if let Some(path) = self.renderer.existing_asset(&card) {
            match tokio::fs::read(&path).await {
                Ok(data) => {
                    let filename = format!("tarot_card.{}", self.renderer.config().extension);
                    replies.push(Reply::file(filename, data));
                }
                Err(err) => {
                    tracing::debug!(path = %path.display(), error = %err, "card art not sent");
                }
            }
        }
        Ok(replies)
    }

    fn random_card(&self) -> Card {
        self.drawer().random_card(&self.deck).clone()
    }

    fn cards(&self) -> Reply {
        let embed = Embed::new("🃏 Tarot Deck Contents", Accent::DarkGreen)
            .fields(deck_sections(&self.deck))
            .footer(format!("Total: {} cards", self.deck.size()));
        Reply::embed(embed)
    }

    fn daily(&self, author: &str) -> Reply {
        let drawn = self.drawer().draw_one(&self.deck, DAILY_POSITION);
        let embed = Embed::new("📅 Your Daily Tarot Card", Accent::DarkBlue)
            .description(daily_headline(&drawn))
            .fields(daily_sections(&drawn))
            .footer(format!("For {author}"));
        Reply::embed(embed)
    }

    fn help(&self) -> Reply {
        let p = &self.config.prefix;
        let spreads: Vec<&str> = self.catalog.ids().collect();
        let commands = [
            (
                format!("{p}tarot [spread] [question]"),
                format!("Get a tarot reading\nSpreads: {}", spreads.join(", ")),
            ),
            (format!("{p}tarot help"), "Show available spreads".to_string()),
            (
                format!("{p}card [name]"),
                "Get information about a specific card".to_string(),
            ),
            (
                format!("{p}cards"),
                "List all tarot cards in the deck".to_string(),
            ),
            (format!("{p}daily"), "Get your daily tarot card".to_string()),
            (format!("{p}help"), "Show this help menu".to_string()),
        ];

        let usage = format!(
            "1. Use `{p}tarot three_card` for a simple reading\n\
             2. Add your question: `{p}tarot career What path should I take?`\n\
             3. The bot will send both text interpretation and card images"
        );
        let embed = Embed::new("🔮 Tarot Reading Bot - Help Guide", Accent::DarkPurple)
            .description("A spiritual guide to your questions through tarot cards")
            .fields(commands.into_iter().map(|(c, d)| Section::new(c, d)))
            .field(Section::new("📚 How to Use", usage))
            .footer("Remember: Tarot is a guide, not destiny. Trust your intuition.");
        Reply::embed(embed)
    }

    fn spread_listing(&self) -> Reply {
        let embed = Embed::new("🔮 Available Tarot Spreads", Accent::Purple)
            .description("Choose a spread type:")
            .fields(spread_sections(&self.catalog, &self.config.prefix));
        Reply::embed(embed)
    }

    fn error_reply(&self, err: &BotError) -> Reply {
        let p = &self.config.prefix;
        let message = match err {
            BotError::UnknownCommand(_) => {
                format!("❌ Command not found. Use `{p}help` to see available commands.")
            }
            BotError::Reading(ReadingError::CardNotFound { query }) => {
                format!("❌ Card '{query}' not found. Try `{p}cards` to see all cards.")
            }
            BotError::Reading(err) => format!("❌ {}", capitalize(&err.to_string())),
            other => {
                tracing::warn!(error = %other, "command failed");
                format!("❌ An error occurred: {other}")
            }
        };
        Reply::text(message)
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
