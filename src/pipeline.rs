//! End-to-end batch pipeline: CSV to ASCII art.
//!
//! Strictly sequential, one pass per stage: load, project, rasterize,
//! decode to grayscale, quantize, write outputs.

use crate::ascii::{AsciiRenderer, Palette};
use crate::config::PipelineConfig;
use crate::dataset;
use crate::error::Result;
use crate::grayscale::PixelGrid;
use crate::output::{write_text, PngEncoder};
use crate::projection::MercatorProjection;
use crate::scatter::ScatterPlot;

/// Run the full pipeline described by `config`.
///
/// Writes the scatter raster, the grayscale intermediate, and the ASCII
/// text file, and returns the ASCII art for display.
///
/// # Errors
///
/// Returns an error on structural failures: unreadable input, missing
/// columns, zero valid points, empty palette, or unwritable outputs.
/// Invalid rows are dropped silently during loading.
pub fn run(config: &PipelineConfig) -> Result<String> {
    let points = dataset::load_points(&config.file_path, &config.lat_column, &config.lon_column)?;

    let projection = MercatorProjection::new(config.map_width, config.map_height);
    let planar = projection.project_all(&points);
    log::debug!("projected {} points", planar.len());

    let fb = ScatterPlot::new()
        .points(&planar)
        .canvas_width(config.canvas_width)
        .point_size(config.point_size)
        .alpha(config.point_alpha)
        .aspect(config.plot_aspect)
        .build()?
        .to_framebuffer()?;
    PngEncoder::write_rgba(&fb, &config.plot_path)?;
    log::info!(
        "wrote {} ({}x{})",
        config.plot_path.display(),
        fb.width(),
        fb.height()
    );

    // Decode the saved raster rather than reusing the framebuffer, so the
    // quantizer sees exactly what landed on disk.
    let grid = PixelGrid::from_png_file(&config.plot_path)?;
    PngEncoder::write_luma(&grid, &config.grayscale_path)?;
    log::info!("wrote {}", config.grayscale_path.display());

    let mut palette = Palette::parse(&config.palette_spec)?;
    if config.sea {
        palette = palette.with_sea();
    }

    let renderer = AsciiRenderer::new(config.ascii_width, &palette)?;
    let art = renderer.render(&grid)?;

    write_text(&art, &config.ascii_path)?;
    log::info!("wrote {}", config.ascii_path.display());

    Ok(art)
}
