//! Deterministic level layouts.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use skein_level::{compile_grid, parse_level, LoadedLevel};

/// Parse level text that a fixture produced.
///
/// # Panics
///
/// Panics on any load error; fixtures are expected to be well formed.
pub fn load(text: &str) -> LoadedLevel {
    match parse_level(text) {
        Ok(level) => level,
        Err(e) => panic!("fixture level failed to load: {e}"),
    }
}

/// Level text for a wall-bordered room of empties, `width` by
/// `height` interior cells, with the player in the middle cell.
///
/// # Panics
///
/// Panics if either dimension is zero.
pub fn open_room(width: usize, height: usize) -> String {
    assert!(width > 0 && height > 0);
    let mut layout = String::new();
    layout.push_str(&"#".repeat(width + 2));
    layout.push('\n');
    for y in 0..height {
        layout.push('#');
        for x in 0..width {
            layout.push(if (x, y) == (width / 2, height / 2) {
                'p'
            } else {
                ' '
            });
        }
        layout.push('#');
        layout.push('\n');
    }
    layout.push_str(&"#".repeat(width + 2));
    match compile_grid(&layout, "r") {
        Ok(text) => text,
        Err(e) => panic!("open_room layout failed to compile: {e}"),
    }
}

/// Level text for a seeded random square room: bordered, roughly one
/// glass block per ten cells, player in the middle, goal in the
/// corner cell nearest the border.
pub fn random_room(seed: u64, size: usize) -> String {
    assert!(size >= 2);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut layout = String::new();
    layout.push_str(&"#".repeat(size + 2));
    layout.push('\n');
    for y in 0..size {
        layout.push('#');
        for x in 0..size {
            layout.push(if (x, y) == (size / 2, size / 2) {
                'p'
            } else if (x, y) == (0, 0) {
                '='
            } else if rng.random_range(0..10) == 0 {
                '*'
            } else {
                ' '
            });
        }
        layout.push('#');
        layout.push('\n');
    }
    layout.push_str(&"#".repeat(size + 2));
    match compile_grid(&layout, "r") {
        Ok(text) => text,
        Err(e) => panic!("random_room layout failed to compile: {e}"),
    }
}
