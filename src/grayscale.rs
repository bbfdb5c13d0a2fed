//! Grayscale pixel grids: PNG decode, luma conversion, and resizing.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Immutable grid of brightness values in [0, 255], row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelGrid {
    /// Create a grid from raw luma data.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or `data` does not hold
    /// exactly `width * height` values.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 || data.len() != (width as usize) * (height as usize) {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Decode a PNG file to a luma grid.
    ///
    /// Any 8/16-bit color type is accepted; color images are collapsed with
    /// the BT.601 weights of [`Rgba::luma`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a decodable PNG.
    pub fn from_png_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let mut decoder = png::Decoder::new(BufReader::new(file));
        // Expand palette/low-bit-depth images and strip 16-bit channels so
        // every pixel arrives as 8-bit Gray/GrayAlpha/RGB/RGBA.
        decoder.set_transformations(png::Transformations::normalize_to_color8());

        let mut reader = decoder.read_info()?;
        let mut buf = vec![0u8; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf)?;
        buf.truncate(info.buffer_size());

        let (width, height) = (info.width, info.height);
        let pixel_count = (width as usize) * (height as usize);

        let data: Vec<u8> = match info.color_type {
            png::ColorType::Grayscale => buf,
            png::ColorType::GrayscaleAlpha => buf.chunks_exact(2).map(|p| p[0]).collect(),
            png::ColorType::Rgb => buf
                .chunks_exact(3)
                .map(|p| Rgba::rgb(p[0], p[1], p[2]).luma())
                .collect(),
            png::ColorType::Rgba => buf
                .chunks_exact(4)
                .map(|p| Rgba::rgb(p[0], p[1], p[2]).luma())
                .collect(),
            // normalize_to_color8 expands indexed images.
            png::ColorType::Indexed => {
                return Err(Error::InvalidDimensions { width, height });
            }
        };

        if data.len() != pixel_count {
            return Err(Error::InvalidDimensions { width, height });
        }

        Self::new(width, height, data)
    }

    /// Collapse an RGBA framebuffer to a luma grid.
    #[must_use]
    pub fn from_framebuffer(fb: &Framebuffer) -> Self {
        let mut data = Vec::with_capacity(fb.pixel_count());
        for y in 0..fb.height() {
            if let Some(row) = fb.row(y) {
                for px in row.chunks_exact(4) {
                    data.push(Rgba::rgb(px[0], px[1], px[2]).luma());
                }
            }
        }
        Self {
            width: fb.width(),
            height: fb.height(),
            data,
        }
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Raw luma values, row-major.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Brightness at (x, y), or `None` out of bounds.
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[(y as usize) * (self.width as usize) + (x as usize)])
    }

    /// Resample to new dimensions with bilinear interpolation.
    ///
    /// # Errors
    ///
    /// Returns an error if either target dimension is zero.
    pub fn resize(&self, new_width: u32, new_height: u32) -> Result<Self> {
        if new_width == 0 || new_height == 0 {
            return Err(Error::InvalidDimensions {
                width: new_width,
                height: new_height,
            });
        }

        let mut data = Vec::with_capacity((new_width as usize) * (new_height as usize));
        let x_step = f64::from(self.width) / f64::from(new_width);
        let y_step = f64::from(self.height) / f64::from(new_height);

        for y in 0..new_height {
            // Sample at source-cell centers.
            let sy = ((f64::from(y) + 0.5) * y_step - 0.5).max(0.0);
            let y0 = (sy.floor() as u32).min(self.height - 1);
            let y1 = (y0 + 1).min(self.height - 1);
            let ty = sy - f64::from(y0);

            for x in 0..new_width {
                let sx = ((f64::from(x) + 0.5) * x_step - 0.5).max(0.0);
                let x0 = (sx.floor() as u32).min(self.width - 1);
                let x1 = (x0 + 1).min(self.width - 1);
                let tx = sx - f64::from(x0);

                let p00 = f64::from(self.data[self.index(x0, y0)]);
                let p10 = f64::from(self.data[self.index(x1, y0)]);
                let p01 = f64::from(self.data[self.index(x0, y1)]);
                let p11 = f64::from(self.data[self.index(x1, y1)]);

                let top = p00 + (p10 - p00) * tx;
                let bottom = p01 + (p11 - p01) * tx;
                let value = top + (bottom - top) * ty;
                data.push(value.round().clamp(0.0, 255.0) as u8);
            }
        }

        Self::new(new_width, new_height, data)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::PngEncoder;
    use tempfile::tempdir;

    fn uniform(width: u32, height: u32, value: u8) -> PixelGrid {
        PixelGrid::new(width, height, vec![value; (width * height) as usize]).unwrap()
    }

    #[test]
    fn test_new_validates_dimensions() {
        assert!(PixelGrid::new(0, 10, vec![]).is_err());
        assert!(PixelGrid::new(2, 2, vec![0; 3]).is_err());
        assert!(PixelGrid::new(2, 2, vec![0; 4]).is_ok());
    }

    #[test]
    fn test_from_framebuffer_luma() {
        let mut fb = Framebuffer::new(4, 2).unwrap();
        fb.clear(Rgba::WHITE);
        fb.set_pixel(0, 0, Rgba::BLACK);

        let grid = PixelGrid::from_framebuffer(&fb);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.get(0, 0), Some(0));
        assert_eq!(grid.get(3, 1), Some(255));
    }

    #[test]
    fn test_resize_uniform_stays_uniform() {
        let grid = uniform(10, 10, 200);
        let resized = grid.resize(4, 3).unwrap();

        assert_eq!(resized.width(), 4);
        assert_eq!(resized.height(), 3);
        assert!(resized.data().iter().all(|&v| v == 200));
    }

    #[test]
    fn test_resize_rejects_zero() {
        let grid = uniform(10, 10, 0);
        assert!(grid.resize(0, 5).is_err());
        assert!(grid.resize(5, 0).is_err());
    }

    #[test]
    fn test_resize_interpolates_between_extremes() {
        // Left half black, right half white.
        let mut data = Vec::new();
        for _ in 0..8 {
            data.extend_from_slice(&[0, 0, 0, 0, 255, 255, 255, 255]);
        }
        let grid = PixelGrid::new(8, 8, data).unwrap();

        let resized = grid.resize(4, 4).unwrap();
        let row: Vec<u8> = (0..4).map(|x| resized.get(x, 0).unwrap()).collect();

        // Dark on the left, bright on the right, no inversion.
        assert!(row[0] < 64);
        assert!(row[3] > 191);
        assert!(row.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_png_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plot.png");

        let mut fb = Framebuffer::new(6, 4).unwrap();
        fb.clear(Rgba::WHITE);
        fb.set_pixel(2, 1, Rgba::BLACK);
        PngEncoder::write_rgba(&fb, &path).unwrap();

        let grid = PixelGrid::from_png_file(&path).unwrap();
        assert_eq!(grid.width(), 6);
        assert_eq!(grid.height(), 4);
        assert_eq!(grid.get(2, 1), Some(0));
        assert_eq!(grid.get(0, 0), Some(255));
    }

    #[test]
    fn test_luma_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gray.png");

        let grid = uniform(5, 5, 128);
        PngEncoder::write_luma(&grid, &path).unwrap();

        let decoded = PixelGrid::from_png_file(&path).unwrap();
        assert_eq!(decoded, grid);
    }

    #[test]
    fn test_undecodable_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("not_a.png");
        std::fs::write(&path, b"plain text, not a PNG").unwrap();

        assert!(matches!(
            PixelGrid::from_png_file(&path),
            Err(Error::PngDecoding(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(PixelGrid::from_png_file("/nonexistent/image.png").is_err());
    }
}
