//! Error types for geoglyph operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in geoglyph operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// CSV reader error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// PNG decoding error.
    #[error("PNG decoding error: {0}")]
    PngDecoding(#[from] png::DecodingError),

    /// Invalid dimensions for a framebuffer, pixel grid, or ASCII target.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Palette spec parsed to zero characters.
    #[error("Palette contains no characters")]
    EmptyPalette,

    /// Empty data provided where non-empty is required.
    #[error("Empty data provided")]
    EmptyData,

    /// CSV header lacks a required column.
    #[error("Missing required column: {name}")]
    MissingColumn {
        /// Name of the column that was not found.
        name: String,
    },
}
