use std::io::Cursor;
use std::sync::Arc;

use image::{ImageFormat, RgbaImage};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree, fontdb};

use super::palette::palette_color;
use crate::application::ports::{WordCloudError, WordCloudRenderer};
use crate::domain::{WordCloudImage, word_frequencies};

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 400;
pub const DEFAULT_MAX_WORDS: usize = 100;

const MIN_FONT_SIZE: f64 = 14.0;
const MAX_FONT_SIZE: f64 = 72.0;
const PADDING: f64 = 8.0;
// Rough advance width of a glyph relative to the font size.
const GLYPH_ADVANCE: f64 = 0.6;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlacedWord {
    pub text: String,
    pub font_size: f64,
    pub x: f64,
    /// Top edge of the word's row.
    pub y: f64,
}

/// Word cloud drawn as SVG text and rasterised with resvg onto a white
/// canvas. Larger type means a more frequent word.
pub struct ResvgWordCloud {
    width: u32,
    height: u32,
    max_words: usize,
    font_family: String,
    fontdb: Arc<fontdb::Database>,
}

impl ResvgWordCloud {
    pub fn new(width: u32, height: u32, max_words: usize, font_family: impl Into<String>) -> Self {
        let mut database = fontdb::Database::new();
        database.load_system_fonts();
        tracing::debug!(faces = database.len(), "Loaded fonts for word cloud");

        Self {
            width,
            height,
            max_words,
            font_family: font_family.into(),
            fontdb: Arc::new(database),
        }
    }

    /// Packs words into rows from the top, largest first, until the canvas
    /// is full. Words that do not fit are dropped.
    pub(crate) fn layout(&self, text: &str) -> Vec<PlacedWord> {
        let ranked = word_frequencies(text, self.max_words);
        let Some(top_count) = ranked.first().map(|(_, c)| *c as f64) else {
            return Vec::new();
        };
        let low_count = ranked.last().map(|(_, c)| *c as f64).unwrap_or(top_count);
        let spread = (top_count - low_count).max(1.0);

        let width = f64::from(self.width);
        let height = f64::from(self.height);
        let mut placed = Vec::new();
        let mut cursor_x = PADDING;
        let mut row_top = PADDING;
        let mut row_height = 0.0_f64;

        for (word, count) in ranked {
            let weight = (count as f64 - low_count) / spread;
            let mut font_size = MIN_FONT_SIZE + weight * (MAX_FONT_SIZE - MIN_FONT_SIZE);
            let mut advance = word.chars().count() as f64 * font_size * GLYPH_ADVANCE;

            // A single word wider than the canvas is shrunk to fit.
            if advance > width - 2.0 * PADDING {
                font_size *= (width - 2.0 * PADDING) / advance;
                advance = width - 2.0 * PADDING;
            }

            if cursor_x + advance > width - PADDING {
                row_top += row_height + PADDING;
                cursor_x = PADDING;
                row_height = 0.0;
            }
            if row_top + font_size > height - PADDING {
                break;
            }

            placed.push(PlacedWord {
                text: word,
                font_size,
                x: cursor_x,
                y: row_top,
            });
            cursor_x += advance + PADDING;
            row_height = row_height.max(font_size);
        }

        placed
    }

    pub(crate) fn to_svg(&self, words: &[PlacedWord]) -> Result<String, WordCloudError> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (self.width, self.height))
                .into_drawing_area();
            root.fill(&WHITE)
                .map_err(|e| WordCloudError::Svg(e.to_string()))?;

            for (i, word) in words.iter().enumerate() {
                let style = (self.font_family.as_str(), word.font_size)
                    .into_font()
                    .color(&palette_color(i))
                    .pos(Pos::new(HPos::Left, VPos::Top));
                root.draw_text(&word.text, &style, (word.x as i32, word.y as i32))
                    .map_err(|e| WordCloudError::Svg(e.to_string()))?;
            }

            root.present()
                .map_err(|e| WordCloudError::Svg(e.to_string()))?;
        }
        Ok(svg)
    }

    fn rasterize(&self, svg: &str) -> Result<Vec<u8>, WordCloudError> {
        let mut options = Options::default();
        options.fontdb = Arc::clone(&self.fontdb);

        let tree = Tree::from_str(svg, &options).map_err(|e| WordCloudError::Svg(e.to_string()))?;

        let mut pixmap = Pixmap::new(self.width, self.height)
            .ok_or_else(|| WordCloudError::Raster("invalid canvas size".to_string()))?;
        resvg::render(&tree, Transform::default(), &mut pixmap.as_mut());

        let img = RgbaImage::from_raw(self.width, self.height, pixmap.data().to_vec())
            .ok_or_else(|| WordCloudError::Raster("pixel buffer size mismatch".to_string()))?;

        let mut buffer = Cursor::new(Vec::new());
        img.write_to(&mut buffer, ImageFormat::Png)
            .map_err(|e| WordCloudError::Encoding(e.to_string()))?;

        Ok(buffer.into_inner())
    }
}

impl Default for ResvgWordCloud {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, DEFAULT_MAX_WORDS, "sans-serif")
    }
}

impl WordCloudRenderer for ResvgWordCloud {
    fn render(&self, text: &str) -> Result<WordCloudImage, WordCloudError> {
        let words = self.layout(text);
        if words.is_empty() {
            return Err(WordCloudError::EmptyText);
        }

        let png = self.rasterize(&self.to_svg(&words)?)?;
        tracing::debug!(words = words.len(), bytes = png.len(), "Word cloud rendered");

        Ok(WordCloudImage::from_png(self.width, self.height, &png))
    }
}
