//! Screen geometry for a render pass.

use num_rational::Rational64;

/// How much of the graph one pass paints, and at what scale.
///
/// The eye tile sits in the center cell of a `(2 * view_dist + 1)`
/// square of cells, each `tile_size` pixels on a side.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Viewport {
    /// Pixels per tile edge.
    pub tile_size: u32,
    /// Tiles visible in each direction from the eye.
    pub view_dist: u32,
}

impl Viewport {
    /// A viewport `view_dist` tiles deep at `tile_size` pixels per
    /// tile. `tile_size` must be at least 1.
    pub fn new(tile_size: u32, view_dist: u32) -> Viewport {
        assert!(tile_size >= 1);
        Viewport {
            tile_size,
            view_dist,
        }
    }

    /// Cells along each axis of the frame.
    pub fn tiles_across(&self) -> u32 {
        2 * self.view_dist + 1
    }

    /// Frame side length in pixels.
    pub fn frame_len(&self) -> u32 {
        self.tiles_across() * self.tile_size
    }

    /// Pixel coordinate of the eye point along either axis.
    ///
    /// The eye sits on the exact center of the middle cell, which for
    /// an even `tile_size` is a half-pixel position; sight-ray
    /// intersections stay exact rationals because of it.
    pub fn center_offset(&self) -> Rational64 {
        let to_cell = (self.view_dist * self.tile_size) as i64;
        Rational64::from_integer(to_cell) + Rational64::new(self.tile_size as i64 - 1, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_covers_the_full_square() {
        let vp = Viewport::new(16, 3);
        assert_eq!(vp.tiles_across(), 7);
        assert_eq!(vp.frame_len(), 112);
    }

    #[test]
    fn center_offset_is_the_middle_of_the_center_cell() {
        let vp = Viewport::new(4, 1);
        assert_eq!(vp.center_offset(), Rational64::new(11, 2));
        let vp = Viewport::new(5, 2);
        assert_eq!(vp.center_offset(), Rational64::from_integer(12));
    }
}
