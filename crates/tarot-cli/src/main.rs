//! Terminal front end for the tarot bot.

mod commands;
mod output;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tarot",
    about = "Tarot readings: draw spreads, look up cards, render card images",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(flatten)]
    options: Options,

    #[command(subcommand)]
    command: Commands,
}

/// Settings shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct Options {
    /// Deck file (JSON array of cards); the built-in deck when unset
    #[arg(long, global = true, env = "TAROT_DECK")]
    deck: Option<PathBuf>,

    /// Spread catalog file (JSON array of {id, positions}); the built-in catalog when unset
    #[arg(long, global = true, env = "TAROT_SPREADS")]
    spreads: Option<PathBuf>,

    /// Directory holding card art
    #[arg(long, global = true, env = "TAROT_ASSETS", default_value = "card_images")]
    assets: PathBuf,

    /// Card art file extension
    #[arg(long, global = true, default_value = "jpg")]
    extension: String,

    /// RNG seed for reproducible draws
    #[arg(long, global = true, env = "TAROT_SEED")]
    seed: Option<u64>,

    /// Directory to write card images into
    #[arg(short, long, global = true)]
    out: Option<PathBuf>,

    /// Name the replies are addressed to
    #[arg(long, global = true, default_value = "you")]
    user: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw a reading
    Read {
        /// Spread to draw (see `tarot spreads`)
        #[arg(default_value = "single")]
        spread: String,

        /// Question to ask
        question: Vec<String>,
    },

    /// Show a card by name, or a random card
    Card {
        /// Part of the card name (case-insensitive)
        name: Vec<String>,
    },

    /// List every card in the deck
    Cards {
        /// Print a table with arcana, suit and keywords
        #[arg(short, long)]
        table: bool,
    },

    /// Draw the daily card
    Daily,

    /// List the available spreads
    Spreads,

    /// Read chat messages from stdin and answer them like the bot would
    Chat {
        /// Command prefix
        #[arg(long, default_value = "!")]
        prefix: String,
    },
}

#[tokio::main]
async fn main() {
    init_logging();
    let cli = Cli::parse();
    let options = cli.options;

    let result = match cli.command {
        Commands::Read { spread, question } => {
            commands::read(&options, &spread, &question.join(" ")).await
        }
        Commands::Card { name } => commands::card(&options, &name.join(" ")).await,
        Commands::Cards { table } => {
            if table {
                commands::cards::table(&options)
            } else {
                commands::cards::list(&options).await
            }
        }
        Commands::Daily => commands::daily(&options).await,
        Commands::Spreads => commands::spreads(&options).await,
        Commands::Chat { prefix } => commands::chat::run(&options, &prefix).await,
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default: warnings only).
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
