//! Configuration for card image rendering.

use std::path::{Path, PathBuf};

use image::Rgb;

/// Canvas geometry, palette, and card-art location.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Inset of the card art and placeholder frame.
    pub margin: u32,
    /// Height of the position caption bar at the bottom.
    pub caption_height: u32,
    /// Vertical center of the orientation caption.
    pub orientation_y: u32,
    /// Placeholder frame thickness.
    pub border_width: u32,
    /// Directory holding card art.
    pub asset_dir: PathBuf,
    /// Card art file extension, without the dot.
    pub extension: String,
    /// Canvas background.
    pub background: Rgb<u8>,
    /// Placeholder frame.
    pub border: Rgb<u8>,
    /// Card name on the placeholder.
    pub name_color: Rgb<u8>,
    /// Position caption bar.
    pub caption_bar: Rgb<u8>,
    /// Position caption text.
    pub caption_color: Rgb<u8>,
    /// Orientation caption text.
    pub orientation_color: Rgb<u8>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 600,
            margin: 10,
            caption_height: 50,
            orientation_y: 25,
            border_width: 3,
            asset_dir: PathBuf::from("card_images"),
            extension: "jpg".to_string(),
            background: Rgb([30, 30, 40]),
            border: Rgb([100, 100, 150]),
            name_color: Rgb([200, 200, 255]),
            caption_bar: Rgb([50, 50, 70]),
            caption_color: Rgb([255, 255, 200]),
            orientation_color: Rgb([255, 200, 200]),
        }
    }
}

impl RenderConfig {
    /// Set the card art directory.
    pub fn with_asset_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.asset_dir = dir.into();
        self
    }

    /// Set the card art extension (leading dot is stripped).
    pub fn with_extension(mut self, ext: &str) -> Self {
        self.extension = ext.trim_start_matches('.').to_string();
        self
    }

    /// Set the canvas size. Dimensions are raised so the margins and
    /// caption bar still fit.
    pub fn with_canvas(mut self, width: u32, height: u32) -> Self {
        let min_side = self.margin * 2 + 1;
        self.width = width.max(min_side);
        self.height = height.max(min_side + self.caption_height);
        self
    }

    /// The card art directory.
    pub fn asset_dir(&self) -> &Path {
        &self.asset_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = RenderConfig::default();
        assert_eq!((cfg.width, cfg.height), (400, 600));
        assert_eq!(cfg.margin, 10);
        assert_eq!(cfg.extension, "jpg");
        assert_eq!(cfg.asset_dir(), Path::new("card_images"));
    }

    #[test]
    fn builder_methods() {
        let cfg = RenderConfig::default()
            .with_asset_dir("/tmp/art")
            .with_extension(".png")
            .with_canvas(200, 300);
        assert_eq!(cfg.asset_dir(), Path::new("/tmp/art"));
        assert_eq!(cfg.extension, "png");
        assert_eq!((cfg.width, cfg.height), (200, 300));
    }

    #[test]
    fn canvas_clamped() {
        let cfg = RenderConfig::default().with_canvas(0, 0);
        assert_eq!(cfg.width, 21);
        assert_eq!(cfg.height, 71);
    }
}
