//! Error types for rendering.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for rendering.
pub type RenderResult<T> = Result<T, RenderError>;

/// The only failure surfaced by the image renderer: encoding the canvas.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The composed canvas could not be encoded.
    #[error("could not encode card image: {0}")]
    Encode(#[from] image::ImageError),
}

/// Why card art could not be used. Never leaves the renderer.
#[derive(Debug, Error)]
pub enum AssetError {
    /// No file at the expected path.
    #[error("no card art at {0}")]
    Missing(PathBuf),

    /// The file exists but could not be decoded.
    #[error("unreadable card art: {0}")]
    Decode(#[from] image::ImageError),
}
