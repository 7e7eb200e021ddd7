//! Configuration for the command dispatcher.

use tarot_render::RenderConfig;

/// Dispatcher settings.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Prefix that marks a message as a command.
    pub prefix: String,
    /// Longest embed description the transport accepts, in characters.
    pub display_limit: usize,
    /// RNG seed for reproducible draws; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Card image settings.
    pub render: RenderConfig,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            prefix: "!".to_string(),
            display_limit: 4096,
            seed: None,
            render: RenderConfig::default(),
        }
    }
}

impl BotConfig {
    /// Set the command prefix. A blank prefix keeps the current one.
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        if !prefix.trim().is_empty() {
            self.prefix = prefix.trim().to_string();
        }
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the display limit (at least 1).
    pub fn with_display_limit(mut self, limit: usize) -> Self {
        self.display_limit = limit.max(1);
        self
    }

    /// Set the card image settings.
    pub fn with_render(mut self, render: RenderConfig) -> Self {
        self.render = render;
        self
    }
}
