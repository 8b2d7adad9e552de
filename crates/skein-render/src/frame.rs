//! The render target.

use crate::texture::Rgba;

/// A CPU pixel buffer, row-major, top-left origin.
///
/// Writes clip silently: the render pass paints wall sight lines on
/// tile boundaries, and the outermost boundary lands one pixel past
/// the last row and column.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Frame {
    /// A frame cleared to `fill`.
    pub fn new(width: u32, height: u32, fill: Rgba) -> Frame {
        Frame {
            width,
            height,
            pixels: vec![fill; (width as usize) * (height as usize)],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Overwrite one pixel; writes outside the frame are dropped.
    pub fn set(&mut self, x: i64, y: i64, color: Rgba) {
        if (0..self.width as i64).contains(&x) && (0..self.height as i64).contains(&y) {
            self.pixels[(y as usize) * (self.width as usize) + x as usize] = color;
        }
    }

    /// The pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the frame.
    pub fn get(&self, x: u32, y: u32) -> Rgba {
        assert!(x < self.width && y < self.height);
        self.pixels[(y * self.width + x) as usize]
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }
}
