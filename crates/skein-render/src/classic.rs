//! The stock tile art.
//!
//! Flat fills with a thin border and a marker dot where the tile has
//! one; enough to tell every kind apart at any tile size.

use skein_core::TileKind;

use crate::texture::{Rgba, Texture, TextureProvider};

/// Aubergine used for walls, sight lines, and the player body.
pub const WALL: Rgba = Rgba::rgb(0x77, 0x29, 0x53);
/// Near-black floor of empty tiles.
pub const FLOOR: Rgba = Rgba::rgb(0x10, 0x10, 0x10);
/// Slightly lighter floor of glass blocks.
pub const GLASS_FLOOR: Rgba = Rgba::rgb(0x18, 0x18, 0x18);
/// Goal floor.
pub const GOAL_FLOOR: Rgba = Rgba::rgb(0x20, 0x20, 0x20);
/// Bright outline color.
pub const OUTLINE: Rgba = Rgba::rgb(0xFF, 0xFF, 0xFF);
/// Goal outline, a touch dimmer than [`OUTLINE`].
pub const GOAL_OUTLINE: Rgba = Rgba::rgb(0xF0, 0xF0, 0xF0);
/// Portal ring color.
pub const PORTAL_RING: Rgba = Rgba::rgb(0x10, 0x10, 0xFF);

/// The built-in [`TextureProvider`], one texture per kind at a fixed
/// tile size.
#[derive(Clone, Debug)]
pub struct ClassicTextures {
    by_kind: [Texture; TileKind::ALL.len()],
}

impl ClassicTextures {
    /// Build the full set for `size`-pixel tiles.
    pub fn new(size: u32) -> ClassicTextures {
        ClassicTextures {
            by_kind: TileKind::ALL.map(|kind| draw(kind, size)),
        }
    }
}

impl TextureProvider for ClassicTextures {
    // The stock art is rotation symmetric, so `rot` is ignored.
    fn texture(&self, kind: TileKind, _rot: u8) -> &Texture {
        &self.by_kind[kind.slot()]
    }

    fn wall_color(&self) -> Rgba {
        WALL
    }
}

fn draw(kind: TileKind, size: u32) -> Texture {
    let mid = size / 2;
    match kind {
        TileKind::Empty => Texture::solid(size, FLOOR),
        TileKind::Glass => {
            let mut t = Texture::solid(size, GLASS_FLOOR);
            t.border(2, OUTLINE);
            t
        }
        TileKind::Wall => Texture::solid(size, WALL),
        TileKind::Portal => {
            let mut t = Texture::solid(size, Rgba::BLACK);
            t.border(2, OUTLINE);
            t.ring(mid, mid, mid, 2, PORTAL_RING);
            t
        }
        TileKind::Player => {
            let mut t = Texture::solid(size, WALL);
            t.border(2, OUTLINE);
            t.disc(mid, mid, 5, Rgba::BLACK);
            t
        }
        TileKind::Goal => {
            let mut t = Texture::solid(size, GOAL_FLOOR);
            t.border(2, GOAL_OUTLINE);
            t.disc(mid, mid, 5, OUTLINE);
            t
        }
    }
}
