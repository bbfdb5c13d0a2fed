//! Brightness-to-character quantization (ASCII art generation).
//!
//! Maps each pixel of a grayscale grid onto an ordered darkest-to-lightest
//! character palette, after resizing the grid to a character-cell-corrected
//! target. The quantization contract is exact: real-valued bucket width
//! `255 / palette_len`, floor division, and a clamp to the last index.

use crate::error::{Error, Result};
use crate::grayscale::PixelGrid;

/// Correction for monospace character cells being taller than wide.
///
/// Keeps the text rendering visually proportional to the source image.
pub const CHAR_ASPECT: f64 = 0.55;

/// Ordered character palette, darkest to lightest.
///
/// Immutable once constructed; [`Palette::normalize`] returns a new value
/// rather than mutating in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    chars: Vec<char>,
}

impl Palette {
    /// Parse a comma-separated palette spec such as `"@,#,."`.
    ///
    /// Each comma-separated entry contributes its first character; empty
    /// entries are skipped (so `"@,"` is a one-character palette).
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPalette`] if no characters remain.
    pub fn parse(spec: &str) -> Result<Self> {
        let chars: Vec<char> = spec
            .split(',')
            .filter_map(|entry| entry.chars().next())
            .collect();

        if chars.is_empty() {
            return Err(Error::EmptyPalette);
        }
        Ok(Self { chars })
    }

    /// Copy of this palette with the sea character `'.'` appended as the
    /// new lightest entry (renders low-density background as water).
    #[must_use]
    pub fn with_sea(&self) -> Self {
        let mut chars = self.chars.clone();
        chars.push('.');
        Self { chars }
    }

    /// Normalized copy: a single-character palette gets a blank appended as
    /// the lightest entry, so the palette always spans at least two
    /// brightness buckets.
    #[must_use]
    pub fn normalize(&self) -> Self {
        let mut chars = self.chars.clone();
        if chars.len() == 1 {
            chars.push(' ');
        }
        Self { chars }
    }

    /// Number of characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the palette is empty (never true for parsed palettes).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Characters in darkest-to-lightest order.
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Map a brightness value in [0, 255] to a palette index.
    ///
    /// Bucket width is `255 / len` with real division; the floor result is
    /// clamped to the last index because 255 can land exactly on `len`.
    #[must_use]
    pub fn index_for(&self, brightness: u8) -> usize {
        let base = 255.0 / self.chars.len() as f64;
        let idx = (f64::from(brightness) / base) as usize;
        idx.min(self.chars.len() - 1)
    }

    /// Map a brightness value to its character.
    #[must_use]
    pub fn char_for(&self, brightness: u8) -> char {
        self.chars[self.index_for(brightness)]
    }
}

/// Renders grayscale pixel grids as ASCII art text blocks.
#[derive(Debug, Clone)]
pub struct AsciiRenderer {
    width: u32,
    palette: Palette,
}

impl AsciiRenderer {
    /// Create a renderer producing `width` characters per line.
    ///
    /// The palette is normalized on construction.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` is zero.
    pub fn new(width: u32, palette: &Palette) -> Result<Self> {
        if width == 0 {
            return Err(Error::InvalidDimensions { width, height: 1 });
        }
        Ok(Self {
            width,
            palette: palette.normalize(),
        })
    }

    /// Output width in characters.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Normalized palette in use.
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Number of output lines for a source of the given dimensions:
    /// `floor(width * (orig_height / orig_width) * CHAR_ASPECT)`, min 1.
    #[must_use]
    pub fn target_height(&self, orig_width: u32, orig_height: u32) -> u32 {
        let aspect_ratio = f64::from(orig_height) / f64::from(orig_width);
        let h = (f64::from(self.width) * aspect_ratio * CHAR_ASPECT) as u32;
        h.max(1)
    }

    /// Render a grid as an ASCII art block.
    ///
    /// Lines are `width` characters long, joined by `'\n'`, one character
    /// per resized pixel.
    ///
    /// # Errors
    ///
    /// Returns an error if the resize target is degenerate.
    pub fn render(&self, grid: &PixelGrid) -> Result<String> {
        let new_height = self.target_height(grid.width(), grid.height());
        let resized = grid.resize(self.width, new_height)?;

        let width = self.width as usize;
        let mut out = String::with_capacity((width + 1) * new_height as usize);

        for (i, &pixel) in resized.data().iter().enumerate() {
            if i > 0 && i % width == 0 {
                out.push('\n');
            }
            out.push(self.palette.char_for(pixel));
        }

        Ok(out)
    }
}
