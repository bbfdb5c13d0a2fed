//! geoglyph CLI: scatter plot to ASCII art converter.

use anyhow::{Context, Result};
use clap::Parser;
use geoglyph::config::PipelineConfig;
use geoglyph::pipeline;
use std::path::PathBuf;

/// Render a CSV of latitude/longitude points as an ASCII-art map.
#[derive(Parser, Debug)]
#[command(name = "geoglyph")]
#[command(version)]
#[command(about = "Scatter plot to ASCII art converter", long_about = None)]
struct Cli {
    /// Comma-separated list of ASCII characters, darkest to lightest
    #[arg(long, default_value = "@")]
    chars: String,

    /// Add a '.' character to the palette to fill the ocean
    #[arg(long)]
    sea: bool,

    /// Path to the input CSV file
    #[arg(long, default_value = "ukpostcodes.csv")]
    file_path: PathBuf,

    /// ASCII output width in characters
    #[arg(long, default_value = "100")]
    width: u32,

    /// Latitude column name
    #[arg(long, default_value = "latitude")]
    lat_column: String,

    /// Longitude column name
    #[arg(long, default_value = "longitude")]
    lon_column: String,
}

impl Cli {
    fn into_config(self) -> PipelineConfig {
        PipelineConfig {
            file_path: self.file_path,
            lat_column: self.lat_column,
            lon_column: self.lon_column,
            ascii_width: self.width,
            palette_spec: self.chars,
            sea: self.sea,
            ..PipelineConfig::default()
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let config = Cli::parse().into_config();
    let input = config.file_path.clone();

    let art = pipeline::run(&config)
        .with_context(|| format!("failed to render {}", input.display()))?;
    println!("{art}");

    Ok(())
}
