//! Pixel colors, tile textures, and the provider seam.

use skein_core::TileKind;

/// One 8-bit RGBA pixel.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);

    /// An opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Rgba {
        Rgba { r, g, b, a: 255 }
    }
}

/// A square texture, `size` pixels on a side.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Texture {
    size: u32,
    pixels: Vec<Rgba>,
}

impl Texture {
    /// A texture filled with one color.
    pub fn solid(size: u32, fill: Rgba) -> Texture {
        Texture {
            size,
            pixels: vec![fill; (size * size) as usize],
        }
    }

    /// Side length in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// The pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside the texture.
    pub fn get(&self, x: u32, y: u32) -> Rgba {
        assert!(x < self.size && y < self.size);
        self.pixels[(y * self.size + x) as usize]
    }

    /// Overwrite the pixel at `(x, y)`; out-of-range writes are
    /// ignored.
    pub fn set(&mut self, x: u32, y: u32, color: Rgba) {
        if x < self.size && y < self.size {
            self.pixels[(y * self.size + x) as usize] = color;
        }
    }

    /// Paint a `width`-pixel frame just inside the texture edge.
    pub fn border(&mut self, width: u32, color: Rgba) {
        for y in 0..self.size {
            for x in 0..self.size {
                let inset = x.min(y).min(self.size - 1 - x).min(self.size - 1 - y);
                if inset < width {
                    self.pixels[(y * self.size + x) as usize] = color;
                }
            }
        }
    }

    /// Paint a filled disc centered at `(cx, cy)`.
    pub fn disc(&mut self, cx: u32, cy: u32, radius: u32, color: Rgba) {
        self.ring_inner(cx, cy, radius, radius, color);
    }

    /// Paint a circle outline of the given stroke width.
    pub fn ring(&mut self, cx: u32, cy: u32, radius: u32, width: u32, color: Rgba) {
        self.ring_inner(cx, cy, radius, width.min(radius), color);
    }

    fn ring_inner(&mut self, cx: u32, cy: u32, radius: u32, width: u32, color: Rgba) {
        let (cx, cy) = (cx as i64, cy as i64);
        let outer = (radius as i64) * (radius as i64);
        let hole = radius as i64 - width as i64;
        let inner = hole * hole;
        for y in 0..self.size {
            for x in 0..self.size {
                let (dx, dy) = (x as i64 - cx, y as i64 - cy);
                let d2 = dx * dx + dy * dy;
                if d2 <= outer && (width >= radius || d2 > inner) {
                    self.pixels[(y * self.size + x) as usize] = color;
                }
            }
        }
    }
}

/// Source of tile art for a render pass.
///
/// Every texture must be square with side equal to
/// [`Viewport::tile_size`](crate::Viewport::tile_size); the pass
/// indexes them with tile-local coordinates and checks the side in
/// debug builds.
/// Providers are expected to memoize per `(kind, rot)`; rotation-
/// symmetric art may ignore `rot` entirely.
pub trait TextureProvider {
    /// The texture painted for tiles of `kind` seen at rotation `rot`.
    fn texture(&self, kind: TileKind, rot: u8) -> &Texture;

    /// The color of the one-pixel sight lines drawn where walls cut
    /// off the view.
    fn wall_color(&self) -> Rgba;
}
