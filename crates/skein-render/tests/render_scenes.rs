//! Frame-level scenes rendered with flat-color textures.
//!
//! Solid fills make every pixel attributable: a frame coordinate maps
//! to exactly one tile kind or to the wall sight-line color, so the
//! scenes assert pixels directly instead of comparing golden images.

use skein_render::{render, Rgba, Viewport};
use skein_test_utils::{load, open_room, SolidTextures};

const PLAYER: Rgba = SolidTextures::fill(skein_core::TileKind::Player);
const EMPTY: Rgba = SolidTextures::fill(skein_core::TileKind::Empty);
const LINE: Rgba = SolidTextures::WALL_LINE;

#[test]
fn an_open_room_is_fully_visible() {
    let level = load(&open_room(3, 3));
    let viewport = Viewport::new(4, 2);
    let frame = render(
        &level.graph,
        level.players[0],
        viewport,
        &SolidTextures::new(4),
    );
    assert_eq!(frame.width(), 20);

    // The eye cell and the four cardinal neighbors.
    assert_eq!(frame.get(9, 9), PLAYER);
    assert_eq!(frame.get(9, 5), EMPTY);
    assert_eq!(frame.get(9, 13), EMPTY);
    assert_eq!(frame.get(5, 9), EMPTY);
    assert_eq!(frame.get(13, 9), EMPTY);
    // Diagonal neighbors are reached around the corner.
    assert_eq!(frame.get(5, 5), EMPTY);
    assert_eq!(frame.get(13, 13), EMPTY);

    // The border walls paint sight lines on the cell boundaries
    // facing the eye.
    assert_eq!(frame.get(16, 9), LINE);
    assert_eq!(frame.get(4, 9), LINE);
    assert_eq!(frame.get(9, 16), LINE);
    assert_eq!(frame.get(9, 4), LINE);
}

#[test]
fn nothing_leaks_past_the_corner_walls() {
    let level = load(&open_room(3, 3));
    let viewport = Viewport::new(4, 2);
    let frame = render(
        &level.graph,
        level.players[0],
        viewport,
        &SolidTextures::new(4),
    );
    // The corner wall cells are unreachable (their cardinal
    // approaches are walls), so their pixels keep the clear color.
    assert_eq!(frame.get(0, 0), Rgba::BLACK);
    assert_eq!(frame.get(19, 0), Rgba::BLACK);
    assert_eq!(frame.get(0, 19), Rgba::BLACK);
    assert_eq!(frame.get(19, 19), Rgba::BLACK);
}

#[test]
fn a_looped_corridor_shows_the_eye_its_own_tile() {
    // One player tile whose forward and backward edges wrap onto each
    // other: walking the view up the corridor lands on the same tile
    // again, so every cell in the column paints the player.
    let level = load(concat!(
        "skein neighbors\n",
        "p player 2p 0 0p 0\n",
    ));
    assert!(level.singularities.is_empty());
    let viewport = Viewport::new(4, 2);
    let frame = render(
        &level.graph,
        level.players[0],
        viewport,
        &SolidTextures::new(4),
    );

    for cell_y in 0..5 {
        assert_eq!(frame.get(9, cell_y * 4 + 1), PLAYER);
    }
    // Side walls repeat with the corridor.
    assert_eq!(frame.get(8, 9), LINE);
    assert_eq!(frame.get(12, 9), LINE);
    assert_eq!(frame.get(8, 5), LINE);
    assert_eq!(frame.get(12, 13), LINE);
}
