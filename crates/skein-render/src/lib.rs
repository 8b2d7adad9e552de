//! Software renderer for Skein graphs.
//!
//! The graph has no global coordinates, so the renderer cannot place
//! tiles; it can only walk. From the eye tile it floods outward one
//! edge at a time, carrying a pair of sight rays that clip each tile
//! to the angular window its path stays visible through. The same
//! screen cell can legitimately be reached along several paths with
//! different windows, which is exactly how overlapping space shows up
//! on screen.
//!
//! Everything here is CPU-side: a [`Frame`] is a plain pixel buffer
//! the caller can blit, encode, or diff in tests.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod classic;
pub mod frame;
pub mod pass;
pub mod span;
pub mod texture;
pub mod viewport;

pub use frame::Frame;
pub use pass::render;
pub use texture::{Rgba, Texture, TextureProvider};
pub use viewport::Viewport;
