//! Card image composition.
//!
//! One call renders one drawn card: background, then card art (rotated for
//! reversed cards) or a framed placeholder, then the orientation caption at
//! the top and the position caption bar at the bottom. Card art problems
//! never reach the caller.

use std::io::Cursor;
use std::path::PathBuf;

use image::imageops::{self, FilterType};
use image::{ImageFormat, Rgb, RgbImage};
use tarot_core::{Card, DrawnCard, Orientation};

use crate::config::RenderConfig;
use crate::error::{AssetError, RenderResult};
use crate::glyph::draw_text_centered;

/// Largest glyph scale used for captions and placeholder names.
const TEXT_SCALE: u32 = 2;

/// Renders drawn cards to fixed-size images.
#[derive(Debug, Clone, Default)]
pub struct CardImageRenderer {
    config: RenderConfig,
}

impl CardImageRenderer {
    /// Create a renderer.
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Where the art for `card` is expected:
    /// `{asset_dir}/{number}_{lowercased_name}.{extension}`.
    pub fn asset_path(&self, card: &Card) -> PathBuf {
        self.config
            .asset_dir
            .join(format!("{}.{}", card.asset_stem(), self.config.extension))
    }

    /// Card art path if the file exists.
    pub fn existing_asset(&self, card: &Card) -> Option<PathBuf> {
        let path = self.asset_path(card);
        path.is_file().then_some(path)
    }

    /// Compose the canvas for a drawn card. Never fails.
    pub fn compose(&self, drawn: &DrawnCard) -> RgbImage {
        let cfg = &self.config;
        let mut canvas = RgbImage::from_pixel(cfg.width, cfg.height, cfg.background);

        match self.load_art(&drawn.card) {
            Ok(art) => self.paste_art(&mut canvas, &art, drawn.orientation),
            Err(err) => {
                tracing::debug!(card = %drawn.card.name, error = %err, "drawing placeholder");
                self.draw_placeholder(&mut canvas, &drawn.card);
            }
        }

        self.draw_captions(&mut canvas, drawn);
        canvas
    }

    /// Compose and encode as PNG.
    pub fn render_png(&self, drawn: &DrawnCard) -> RenderResult<Vec<u8>> {
        let canvas = self.compose(drawn);
        let mut bytes = Vec::new();
        canvas.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    fn load_art(&self, card: &Card) -> Result<RgbImage, AssetError> {
        let path = self.asset_path(card);
        if !path.is_file() {
            return Err(AssetError::Missing(path));
        }
        Ok(image::open(&path)?.to_rgb8())
    }

    fn paste_art(&self, canvas: &mut RgbImage, art: &RgbImage, orientation: Orientation) {
        let cfg = &self.config;
        let inner_w = cfg.width.saturating_sub(cfg.margin.saturating_mul(2));
        let inner_h = cfg.height.saturating_sub(cfg.margin.saturating_mul(2));
        if inner_w == 0 || inner_h == 0 {
            tracing::debug!(margin = cfg.margin, "margins leave no room for card art");
            return;
        }
        let oriented = match orientation {
            Orientation::Reversed => imageops::rotate180(art),
            Orientation::Upright => art.clone(),
        };
        let fitted = imageops::resize(&oriented, inner_w, inner_h, FilterType::Triangle);
        imageops::overlay(canvas, &fitted, i64::from(cfg.margin), i64::from(cfg.margin));
    }

    fn draw_placeholder(&self, canvas: &mut RgbImage, card: &Card) {
        let cfg = &self.config;
        let (left, top) = (cfg.margin, cfg.margin);
        let right = cfg.width.saturating_sub(cfg.margin);
        let bottom = cfg.height.saturating_sub(cfg.margin);
        let bw = cfg.border_width;
        fill_rect(canvas, left, top, right, top.saturating_add(bw), cfg.border);
        fill_rect(canvas, left, bottom.saturating_sub(bw), right, bottom, cfg.border);
        fill_rect(canvas, left, top, left.saturating_add(bw), bottom, cfg.border);
        fill_rect(canvas, right.saturating_sub(bw), top, right, bottom, cfg.border);

        let text_room = right.saturating_sub(left.saturating_add(bw.saturating_mul(4)));
        draw_text_centered(
            canvas,
            &card.name,
            cfg.width / 2,
            cfg.height / 2,
            text_room,
            cfg.name_color,
            TEXT_SCALE,
        );
    }

    fn draw_captions(&self, canvas: &mut RgbImage, drawn: &DrawnCard) {
        let cfg = &self.config;
        let bar_top = cfg.height.saturating_sub(cfg.caption_height);
        fill_rect(canvas, 0, bar_top, cfg.width, cfg.height, cfg.caption_bar);

        let text_room = cfg.width.saturating_sub(cfg.margin.saturating_mul(2));
        draw_text_centered(
            canvas,
            &drawn.position,
            cfg.width / 2,
            bar_top + cfg.caption_height / 2,
            text_room,
            cfg.caption_color,
            TEXT_SCALE,
        );
        draw_text_centered(
            canvas,
            &drawn.orientation.to_string(),
            cfg.width / 2,
            cfg.orientation_y,
            text_room,
            cfg.orientation_color,
            TEXT_SCALE,
        );
    }
}

/// Fill the half-open rectangle [x0, x1) x [y0, y1), clipped to the canvas.
fn fill_rect(canvas: &mut RgbImage, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgb<u8>) {
    let x1 = x1.min(canvas.width());
    let y1 = y1.min(canvas.height());
    for y in y0..y1 {
        for x in x0..x1 {
            canvas.put_pixel(x, y, color);
        }
    }
}
