//! Pipeline configuration with enumerated defaults.
//!
//! Every stage takes its parameters from this value struct; there is no
//! ambient or global configuration.

use std::path::PathBuf;

/// Configuration for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Input CSV path.
    pub file_path: PathBuf,
    /// Latitude column name in the CSV header.
    pub lat_column: String,
    /// Longitude column name in the CSV header.
    pub lon_column: String,

    /// Projection map width in planar units.
    pub map_width: f64,
    /// Projection map height in planar units.
    pub map_height: f64,

    /// Scatter raster canvas width in pixels.
    pub canvas_width: u32,
    /// Marker diameter in pixels.
    pub point_size: f64,
    /// Marker fill transparency.
    pub point_alpha: f64,
    /// y-unit to x-unit display ratio of the plot.
    pub plot_aspect: f64,

    /// ASCII output width in characters.
    pub ascii_width: u32,
    /// Comma-separated palette spec, darkest to lightest.
    pub palette_spec: String,
    /// Append the sea character `'.'` to the palette.
    pub sea: bool,

    /// Intermediate scatter raster path.
    pub plot_path: PathBuf,
    /// Intermediate grayscale image path.
    pub grayscale_path: PathBuf,
    /// Final ASCII art path.
    pub ascii_path: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            file_path: PathBuf::from("ukpostcodes.csv"),
            lat_column: "latitude".to_string(),
            lon_column: "longitude".to_string(),
            map_width: 110.0,
            map_height: 100.0,
            canvas_width: 1100,
            point_size: 9.0,
            point_alpha: 0.5,
            plot_aspect: 1.1,
            ascii_width: 100,
            palette_spec: "@".to_string(),
            sea: false,
            plot_path: PathBuf::from("scatter_plot.png"),
            grayscale_path: PathBuf::from("grayscale_img.png"),
            ascii_path: PathBuf::from("ascii_image.txt"),
        }
    }
}
