use image::GrayImage;

use crate::raster;

/// Canvas drawing constants.
pub mod defaults {
    /// Stroke width of laid-down ink, in pixels.
    pub const STROKE_THICKNESS: i32 = 3;
    /// Radius of the eraser disc, in pixels.
    pub const ERASE_RADIUS: i32 = 24;
    /// Pixel value of untouched canvas.
    pub const BACKGROUND: u8 = 0;
    /// Pixel value of ink.
    pub const INK: u8 = 255;
    /// Default canvas dimensions (matches the camera frame).
    pub const WIDTH: u32 = 640;
    pub const HEIGHT: u32 = 480;
}

/// Integer canvas coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Map a normalized (0..1) position into canvas pixels, clamped to bounds.
    pub fn from_normalized(nx: f32, ny: f32, width: u32, height: u32) -> Self {
        let x = (nx * width as f32) as i32;
        let y = (ny * height as f32) as i32;
        Self {
            x: x.clamp(0, width as i32 - 1),
            y: y.clamp(0, height as i32 - 1),
        }
    }
}

/// The persistent ink buffer.
///
/// Background-valued until strokes are applied; mutated only by draw/erase and
/// reset only by clear. Single-writer: all mutation happens inside one
/// processing tick, so no locking lives here.
#[derive(Debug, Clone)]
pub struct Canvas {
    buffer: GrayImage,
    stroke_thickness: i32,
    erase_radius: i32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_style(
            width,
            height,
            defaults::STROKE_THICKNESS,
            defaults::ERASE_RADIUS,
        )
    }

    /// Canvas with configured stroke and eraser sizes.
    pub fn with_style(width: u32, height: u32, stroke_thickness: i32, erase_radius: i32) -> Self {
        Self {
            buffer: GrayImage::new(width, height),
            stroke_thickness,
            erase_radius,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// Draw a full-intensity stroke segment between two points.
    pub fn draw_segment(&mut self, from: Point, to: Point) {
        raster::stroke_line(
            &mut self.buffer,
            (from.x, from.y),
            (to.x, to.y),
            self.stroke_thickness,
            defaults::INK,
        );
    }

    /// Paint a background disc at `center`, removing any ink under it.
    pub fn erase(&mut self, center: Point) {
        self.erase_with_radius(center, self.erase_radius);
    }

    pub fn erase_with_radius(&mut self, center: Point, radius: i32) {
        raster::fill_circle(
            &mut self.buffer,
            center.x,
            center.y,
            radius,
            defaults::BACKGROUND,
        );
    }

    /// Reset the whole buffer to background.
    pub fn clear(&mut self) {
        for px in self.buffer.pixels_mut() {
            px.0[0] = defaults::BACKGROUND;
        }
    }

    /// True when no ink is present anywhere.
    pub fn is_blank(&self) -> bool {
        self.buffer.pixels().all(|p| p.0[0] == defaults::BACKGROUND)
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> u8 {
        self.buffer.get_pixel(x, y).0[0]
    }

    /// Borrow the underlying buffer (for rendering and OCR preprocessing).
    pub fn image(&self) -> &GrayImage {
        &self.buffer
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(defaults::WIDTH, defaults::HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_is_blank() {
        let canvas = Canvas::new(64, 48);
        assert!(canvas.is_blank());
    }

    #[test]
    fn segment_lays_ink_and_clear_restores_background() {
        let mut canvas = Canvas::new(64, 48);
        canvas.draw_segment(Point::new(5, 5), Point::new(30, 20));
        assert!(!canvas.is_blank());

        canvas.clear();
        assert!(canvas.is_blank());
        for y in 0..48 {
            for x in 0..64 {
                assert_eq!(canvas.pixel(x, y), defaults::BACKGROUND);
            }
        }
    }

    #[test]
    fn erase_removes_ink_under_the_disc() {
        let mut canvas = Canvas::new(100, 100);
        canvas.draw_segment(Point::new(10, 50), Point::new(90, 50));
        canvas.erase(Point::new(50, 50));
        assert_eq!(canvas.pixel(50, 50), defaults::BACKGROUND);
        // Ink outside the 24px disc survives.
        assert_eq!(canvas.pixel(10, 50), defaults::INK);
        assert_eq!(canvas.pixel(90, 50), defaults::INK);
    }

    #[test]
    fn repeated_operations_are_safe() {
        let mut canvas = Canvas::new(32, 32);
        let p = Point::new(10, 10);
        canvas.erase(p);
        canvas.erase(p);
        canvas.clear();
        canvas.clear();
        assert!(canvas.is_blank());
    }

    #[test]
    fn normalized_points_clamp_to_bounds() {
        let p = Point::from_normalized(1.5, -0.2, 640, 480);
        assert_eq!(p, Point::new(639, 0));
    }
}
