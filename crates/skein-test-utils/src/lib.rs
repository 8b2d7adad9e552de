//! Shared fixtures for Skein development.
//!
//! Deterministic level layouts and flat-color texture sets, so engine
//! and renderer tests can assert exact graph shapes and exact pixels.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod textures;

pub use fixtures::{load, open_room, random_room};
pub use textures::SolidTextures;
