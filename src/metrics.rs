//! Font metrics provider consumed by scrolling and render queries.
//!
//! The field never rasterizes glyphs itself; it only asks for advance widths
//! and kerning through the [`Metrics`] trait. [`FontdueMetrics`] backs it
//! with real fonts, [`MonospaceMetrics`] gives deterministic widths for tests
//! and headless hosts.

use std::collections::HashMap;

use fontdue::{Font, FontSettings};
use serde::{Deserialize, Serialize};

/// Font handle passed to every metrics query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontStyle {
    Normal,
    #[default]
    Bold,
    Italic,
    Fixed,
}

/// Pixel measurements for codepoints and strings in a given font.
pub trait Metrics {
    /// Advance width of a single codepoint
    fn glyph_width(&self, ch: char, font: FontStyle) -> i32;

    /// Horizontal kerning adjustment between two adjacent codepoints
    fn kerning(&self, prev: char, cur: char, font: FontStyle) -> i32;

    /// Width of a run of codepoints, including kerning between neighbours
    fn string_width(&self, text: &str, font: FontStyle) -> i32 {
        let mut width = 0;
        let mut prev: Option<char> = None;
        for ch in text.chars() {
            if let Some(p) = prev {
                width += self.kerning(p, ch, font);
            }
            width += self.glyph_width(ch, font);
            prev = Some(ch);
        }
        width
    }
}

// =============================================================================
// MonospaceMetrics
// =============================================================================

/// Every glyph has the same advance; optional per-pair kerning table.
#[derive(Debug, Clone)]
pub struct MonospaceMetrics {
    advance: i32,
    kerning_pairs: HashMap<(char, char), i32>,
}

impl MonospaceMetrics {
    pub fn new(advance: i32) -> Self {
        Self {
            advance,
            kerning_pairs: HashMap::new(),
        }
    }

    /// Add a kerning pair (builder pattern)
    pub fn with_kerning(mut self, prev: char, cur: char, adjust: i32) -> Self {
        self.kerning_pairs.insert((prev, cur), adjust);
        self
    }

    pub fn advance(&self) -> i32 {
        self.advance
    }
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self::new(8)
    }
}

impl Metrics for MonospaceMetrics {
    fn glyph_width(&self, _ch: char, _font: FontStyle) -> i32 {
        self.advance
    }

    fn kerning(&self, prev: char, cur: char, _font: FontStyle) -> i32 {
        self.kerning_pairs.get(&(prev, cur)).copied().unwrap_or(0)
    }
}

// =============================================================================
// FontdueMetrics
// =============================================================================

/// Metrics backed by fontdue fonts, one per style.
///
/// Styles without a registered font fall back to the first font added.
pub struct FontdueMetrics {
    fonts: HashMap<FontStyle, Font>,
    fallback: FontStyle,
    font_size: f32,
}

impl FontdueMetrics {
    /// Load the fallback font from raw TTF/OTF bytes
    pub fn from_bytes(style: FontStyle, bytes: &[u8], font_size: f32) -> Result<Self, String> {
        let font = Font::from_bytes(bytes, FontSettings::default())
            .map_err(|e| format!("Failed to load font: {}", e))?;
        let mut fonts = HashMap::new();
        fonts.insert(style, font);
        Ok(Self {
            fonts,
            fallback: style,
            font_size,
        })
    }

    /// Register an additional style
    pub fn add_style(&mut self, style: FontStyle, bytes: &[u8]) -> Result<(), String> {
        let font = Font::from_bytes(bytes, FontSettings::default())
            .map_err(|e| format!("Failed to load font for {:?}: {}", style, e))?;
        self.fonts.insert(style, font);
        Ok(())
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    fn font(&self, style: FontStyle) -> Option<&Font> {
        self.fonts
            .get(&style)
            .or_else(|| self.fonts.get(&self.fallback))
    }
}

impl Metrics for FontdueMetrics {
    fn glyph_width(&self, ch: char, font: FontStyle) -> i32 {
        match self.font(font) {
            Some(f) => f.metrics(ch, self.font_size).advance_width.round() as i32,
            None => 0,
        }
    }

    fn kerning(&self, prev: char, cur: char, font: FontStyle) -> i32 {
        self.font(font)
            .and_then(|f| f.horizontal_kern(prev, cur, self.font_size))
            .map(|k| k.round() as i32)
            .unwrap_or(0)
    }
}
