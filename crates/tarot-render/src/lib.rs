//! Rendering for tarot readings.
//!
//! Text rendering is deterministic and transport-agnostic: it never
//! truncates. Image rendering composes one fixed-size PNG per drawn card,
//! falling back to a drawn placeholder whenever the card art is missing or
//! unreadable.

pub mod card_image;
pub mod config;
pub mod error;
pub mod glyph;
pub mod text;

pub use card_image::CardImageRenderer;
pub use config::RenderConfig;
pub use error::{RenderError, RenderResult};
pub use text::{Section, render_reading};
