//! # geoglyph
//!
//! Renders geographic point data as Mercator-projected ASCII-art maps.
//!
//! The pipeline loads latitude/longitude records from a CSV file, projects
//! them to planar coordinates, rasterizes a scatter plot into an RGBA
//! framebuffer, collapses that raster to grayscale, and quantizes pixel
//! brightness onto an ordered character palette.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use geoglyph::config::PipelineConfig;
//!
//! let config = PipelineConfig::default();
//! let art = geoglyph::pipeline::run(&config)?;
//! println!("{art}");
//! ```
//!
//! The two numerically exact transforms live in [`projection`] (geographic
//! to planar) and [`ascii`] (brightness to character); everything else is
//! plumbing around them.

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]

/// Brightness-to-character quantization.
pub mod ascii;

/// Color types for framebuffer pixels.
pub mod color;

/// Pipeline configuration and defaults.
pub mod config;

/// CSV loading and row validation.
pub mod dataset;

/// Error types.
pub mod error;

/// RGBA framebuffer.
pub mod framebuffer;

/// Geographic and planar point types.
pub mod geometry;

/// Grayscale pixel grids.
pub mod grayscale;

/// Output encoders (PNG, text).
pub mod output;

/// End-to-end batch pipeline.
pub mod pipeline;

/// Mercator projection.
pub mod projection;

/// Linear data-to-pixel scales.
pub mod scale;

/// Scatter plot rasterization.
pub mod scatter;

/// Commonly used types.
pub mod prelude {
    pub use crate::ascii::{AsciiRenderer, Palette, CHAR_ASPECT};
    pub use crate::color::Rgba;
    pub use crate::config::PipelineConfig;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{GeoPoint, PlanarPoint};
    pub use crate::grayscale::PixelGrid;
    pub use crate::output::PngEncoder;
    pub use crate::projection::MercatorProjection;
    pub use crate::scatter::ScatterPlot;
}
