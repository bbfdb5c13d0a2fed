//! Scatter plot rasterization for projected map points.
//!
//! Renders a point set into a [`Framebuffer`] with the styling of the map
//! pipeline: semi-transparent circular markers with dark edges on a white
//! background, no axes or frame, inverted y axis so north is up, and a
//! canvas sized tightly around the data extent.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::PlanarPoint;
use crate::scale::LinearScale;

/// Builder for rasterizing scatter plots of planar points.
#[derive(Debug, Clone)]
pub struct ScatterPlot {
    points: Vec<PlanarPoint>,
    color: Rgba,
    point_size: f64,
    alpha: f64,
    canvas_width: u32,
    margin: u32,
    aspect: f64,
    invert_y: bool,
}

impl Default for ScatterPlot {
    fn default() -> Self {
        Self::new()
    }
}

impl ScatterPlot {
    /// Create a new scatter plot builder with map-pipeline defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            color: Rgba::MARKER,
            point_size: 9.0,
            alpha: 0.5,
            canvas_width: 1100,
            margin: 32,
            aspect: 1.1,
            invert_y: true,
        }
    }

    /// Set the points to plot.
    #[must_use]
    pub fn points(mut self, points: &[PlanarPoint]) -> Self {
        self.points = points.to_vec();
        self
    }

    /// Set the marker fill color.
    #[must_use]
    pub fn color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    /// Set the marker diameter in pixels.
    #[must_use]
    pub fn point_size(mut self, size: f64) -> Self {
        self.point_size = size;
        self
    }

    /// Set the marker fill transparency (0.0 - 1.0).
    #[must_use]
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    /// Set the canvas width in pixels. Height is derived from the data
    /// extent and the aspect ratio.
    #[must_use]
    pub fn canvas_width(mut self, width: u32) -> Self {
        self.canvas_width = width;
        self
    }

    /// Set the y-unit to x-unit display ratio (default 1.1).
    #[must_use]
    pub fn aspect(mut self, aspect: f64) -> Self {
        self.aspect = aspect;
        self
    }

    /// Invert the y axis so smaller y values render at the top.
    ///
    /// On by default: the Mercator ordinate grows southward, so inversion
    /// puts north at the top of the image.
    #[must_use]
    pub fn invert_y(mut self, invert: bool) -> Self {
        self.invert_y = invert;
        self
    }

    /// Get the number of points.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Validate the builder.
    ///
    /// # Errors
    ///
    /// Returns an error if no points were supplied or the canvas width is
    /// too small to hold the margins.
    pub fn build(self) -> Result<Self> {
        if self.points.is_empty() {
            return Err(Error::EmptyData);
        }
        if self.canvas_width <= 2 * self.margin {
            return Err(Error::InvalidDimensions {
                width: self.canvas_width,
                height: 0,
            });
        }
        Ok(self)
    }

    /// Rasterize to a new framebuffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the derived canvas dimensions are invalid.
    pub fn to_framebuffer(&self) -> Result<Framebuffer> {
        let plot_width = self.canvas_width - 2 * self.margin;

        // Tight canvas: plot height follows the data extent, with y units
        // drawn `aspect` times the size of x units.
        let x_scale_src = LinearScale::from_data(self.points.iter().map(|p| p.x), (0.0, 1.0))
            .ok_or(Error::EmptyData)?;
        let y_scale_src = LinearScale::from_data(self.points.iter().map(|p| p.y), (0.0, 1.0))
            .ok_or(Error::EmptyData)?;

        let (x_min, x_max) = x_scale_src.domain();
        let (y_min, y_max) = y_scale_src.domain();
        let x_range = (x_max - x_min).max(f64::EPSILON);
        let y_range = y_max - y_min;

        let plot_height =
            ((f64::from(plot_width) * (y_range / x_range) * self.aspect).round() as u32).max(1);
        let canvas_height = plot_height + 2 * self.margin;

        let mut fb = Framebuffer::new(self.canvas_width, canvas_height)?;
        fb.clear(Rgba::WHITE);

        let m = f64::from(self.margin);
        let x_scale = LinearScale::from_data(
            self.points.iter().map(|p| p.x),
            (m, m + f64::from(plot_width)),
        )
        .ok_or(Error::EmptyData)?;
        let y_range_px = if self.invert_y {
            // Smaller y (north) at the top of the image.
            (m, m + f64::from(plot_height))
        } else {
            (m + f64::from(plot_height), m)
        };
        let y_scale = LinearScale::from_data(self.points.iter().map(|p| p.y), y_range_px)
            .ok_or(Error::EmptyData)?;

        let fill = self.color.with_alpha((self.alpha * 255.0) as u8);
        let edge = Rgba::rgb(20, 20, 20);
        let radius = (self.point_size / 2.0).max(1.0) as i64;

        for p in &self.points {
            let px = x_scale.scale(p.x).round() as i64;
            let py = y_scale.scale(p.y).round() as i64;
            Self::draw_marker(&mut fb, px, py, radius, fill, edge);
        }

        Ok(fb)
    }

    /// Draw one circular marker: blended fill with a dark edge ring.
    fn draw_marker(fb: &mut Framebuffer, px: i64, py: i64, radius: i64, fill: Rgba, edge: Rgba) {
        let r2 = radius * radius;
        let inner = radius - 1;
        let inner2 = inner * inner;

        for dy in -radius..=radius {
            for dx in -radius..=radius {
                let d2 = dx * dx + dy * dy;
                if d2 > r2 {
                    continue;
                }
                let (x, y) = (px + dx, py + dy);
                if x < 0 || y < 0 {
                    continue;
                }
                if d2 > inner2 {
                    fb.set_pixel(x as u32, y as u32, edge);
                } else {
                    fb.blend_pixel(x as u32, y as u32, fill);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> Vec<PlanarPoint> {
        vec![
            PlanarPoint::new(10.0, 20.0),
            PlanarPoint::new(50.0, 60.0),
            PlanarPoint::new(90.0, 40.0),
        ]
    }

    #[test]
    fn test_builder_defaults() {
        let plot = ScatterPlot::new().points(&sample_points()).build().unwrap();
        assert_eq!(plot.point_count(), 3);
    }

    #[test]
    fn test_empty_points_rejected() {
        let result = ScatterPlot::new().build();
        assert!(matches!(result, Err(Error::EmptyData)));
    }

    #[test]
    fn test_canvas_too_small_rejected() {
        let result = ScatterPlot::new()
            .points(&sample_points())
            .canvas_width(10)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_render_produces_non_white_pixels() {
        let fb = ScatterPlot::new()
            .points(&sample_points())
            .canvas_width(200)
            .build()
            .unwrap()
            .to_framebuffer()
            .unwrap();

        assert_eq!(fb.width(), 200);
        let marked = (0..fb.height())
            .flat_map(|y| (0..fb.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| fb.get_pixel(x, y) != Some(Rgba::WHITE))
            .count();
        assert!(marked > 0, "markers should darken some pixels");
    }

    #[test]
    fn test_aspect_stretches_canvas_height() {
        let points = vec![PlanarPoint::new(0.0, 0.0), PlanarPoint::new(100.0, 100.0)];

        let tall = ScatterPlot::new()
            .points(&points)
            .canvas_width(200)
            .aspect(2.0)
            .build()
            .unwrap()
            .to_framebuffer()
            .unwrap();
        let square = ScatterPlot::new()
            .points(&points)
            .canvas_width(200)
            .aspect(1.0)
            .build()
            .unwrap()
            .to_framebuffer()
            .unwrap();

        assert!(tall.height() > square.height());
    }

    #[test]
    fn test_invert_y_flips_vertical_placement() {
        // Northern point (small y) at the right edge, southern at the left.
        let points = vec![PlanarPoint::new(50.0, 0.0), PlanarPoint::new(0.0, 100.0)];

        // First dark pixel scanning top-down.
        let top_dark = |fb: &Framebuffer| -> (u32, u32) {
            for y in 0..fb.height() {
                for x in 0..fb.width() {
                    if fb.get_pixel(x, y).is_some_and(|c| c.luma() < 250) {
                        return (x, y);
                    }
                }
            }
            panic!("no dark pixels rendered");
        };

        let render = |invert: bool| {
            ScatterPlot::new()
                .points(&points)
                .canvas_width(200)
                .invert_y(invert)
                .build()
                .unwrap()
                .to_framebuffer()
                .unwrap()
        };

        let inverted = render(true);
        let (x, _) = top_dark(&inverted);
        // With invert_y, the y=0 (northern, right-edge) point is on top.
        assert!(x > inverted.width() / 2);

        let natural = render(false);
        let (x, _) = top_dark(&natural);
        assert!(x < natural.width() / 2);
    }

    #[test]
    fn test_single_point_renders() {
        let fb = ScatterPlot::new()
            .points(&[PlanarPoint::new(5.0, 5.0)])
            .canvas_width(100)
            .build()
            .unwrap()
            .to_framebuffer()
            .unwrap();

        // Degenerate extent collapses to a minimal-height canvas.
        assert!(fb.height() >= 65);
    }
}
