//! Benchmark profiles for the Skein puzzle engine.
//!
//! Pre-built levels and sessions sized for measurement rather than
//! play: open rooms for renderer sweeps, and corridors long enough to
//! make push-chain recursion the dominant cost.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use skein_engine::Session;
use skein_level::{compile_grid, parse_level};

/// Level text for a wall-bordered `size` by `size` room of empties
/// with the player in the middle.
///
/// # Panics
///
/// Panics on a zero `size`; profile construction is infallible
/// otherwise.
pub fn open_room_text(size: usize) -> String {
    assert!(size > 0);
    let mut layout = String::new();
    layout.push_str(&"#".repeat(size + 2));
    layout.push('\n');
    for y in 0..size {
        layout.push('#');
        for x in 0..size {
            layout.push(if (x, y) == (size / 2, size / 2) { 'p' } else { ' ' });
        }
        layout.push('#');
        layout.push('\n');
    }
    layout.push_str(&"#".repeat(size + 2));
    match compile_grid(&layout, "b") {
        Ok(text) => text,
        Err(e) => panic!("profile layout failed to compile: {e}"),
    }
}

/// A ready session over [`open_room_text`].
///
/// # Panics
///
/// Panics if the generated level fails to load.
pub fn room_session(size: usize) -> Session {
    let level = match parse_level(&open_room_text(size)) {
        Ok(level) => level,
        Err(e) => panic!("profile level failed to load: {e}"),
    };
    match Session::new(level.graph, level.players) {
        Ok(session) => session,
        Err(e) => panic!("profile session failed to build: {e}"),
    }
}
