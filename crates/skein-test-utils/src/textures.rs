//! Flat-color texture sets for pixel-exact renderer assertions.

use skein_core::TileKind;
use skein_render::{Rgba, Texture, TextureProvider};

/// One solid color per tile kind, plus a distinct wall-line color, so
/// a test can map any frame pixel straight back to what painted it.
#[derive(Clone, Debug)]
pub struct SolidTextures {
    by_kind: [Texture; TileKind::ALL.len()],
}

impl SolidTextures {
    /// The wall sight-line color; never used for any tile fill.
    pub const WALL_LINE: Rgba = Rgba::rgb(255, 0, 255);

    /// Build the set for `size`-pixel tiles.
    pub fn new(size: u32) -> SolidTextures {
        SolidTextures {
            by_kind: TileKind::ALL.map(|kind| Texture::solid(size, Self::fill(kind))),
        }
    }

    /// The fill color tiles of `kind` are painted with.
    pub const fn fill(kind: TileKind) -> Rgba {
        match kind {
            TileKind::Empty => Rgba::rgb(0, 0, 255),
            TileKind::Glass => Rgba::rgb(0, 255, 0),
            TileKind::Wall => Rgba::rgb(255, 0, 0),
            TileKind::Portal => Rgba::rgb(0, 255, 255),
            TileKind::Player => Rgba::rgb(255, 255, 0),
            TileKind::Goal => Rgba::rgb(255, 255, 255),
        }
    }
}

impl TextureProvider for SolidTextures {
    fn texture(&self, kind: TileKind, _rot: u8) -> &Texture {
        &self.by_kind[kind.slot()]
    }

    fn wall_color(&self) -> Rgba {
        Self::WALL_LINE
    }
}
