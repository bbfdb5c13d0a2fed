//! PNG output encoder.
//!
//! Pure Rust PNG encoding using the `png` crate, for both the RGBA scatter
//! raster and the grayscale intermediate image.

use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::grayscale::PixelGrid;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// PNG encoder for framebuffers and luma grids.
pub struct PngEncoder;

impl PngEncoder {
    /// Write an RGBA framebuffer to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn write_rgba<P: AsRef<Path>>(fb: &Framebuffer, path: P) -> Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);

        let mut encoder = png::Encoder::new(writer, fb.width(), fb.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(fb.pixels())?;

        Ok(())
    }

    /// Write a grayscale pixel grid to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn write_luma<P: AsRef<Path>>(grid: &PixelGrid, path: P) -> Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);

        let mut encoder = png::Encoder::new(writer, grid.width(), grid.height());
        encoder.set_color(png::ColorType::Grayscale);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(grid.data())?;

        Ok(())
    }

    /// Encode an RGBA framebuffer to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn rgba_to_bytes(fb: &Framebuffer) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();

        {
            let mut encoder = png::Encoder::new(&mut buffer, fb.width(), fb.height());
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);

            let mut writer = encoder.write_header()?;
            writer.write_image_data(fb.pixels())?;
        }

        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use tempfile::tempdir;

    #[test]
    fn test_png_to_bytes() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::MARKER);

        let bytes = PngEncoder::rgba_to_bytes(&fb).unwrap();
        // PNG magic bytes
        assert_eq!(&bytes[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
    }

    #[test]
    fn test_write_files() {
        let dir = tempdir().unwrap();
        let rgba_path = dir.path().join("plot.png");
        let luma_path = dir.path().join("gray.png");

        let mut fb = Framebuffer::new(4, 4).unwrap();
        fb.clear(Rgba::WHITE);
        PngEncoder::write_rgba(&fb, &rgba_path).unwrap();

        let grid = PixelGrid::from_framebuffer(&fb);
        PngEncoder::write_luma(&grid, &luma_path).unwrap();

        assert!(rgba_path.exists());
        assert!(luma_path.exists());
    }
}
