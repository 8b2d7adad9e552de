//! Exact-rational ray comparison for the Skein visibility renderer.
//!
//! The renderer clips an angular field of view at every hop of its
//! recursive graph walk. Floating point would accumulate error across
//! that recursion and make adjacent branches disagree about boundary
//! pixels, so directions from the viewpoint are compared with exact
//! rational arithmetic instead: a [`Ray`] is a signed slope plus a
//! half-plane flag, totally ordered clockwise around the origin.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod ray;

pub use ray::{Ray, Slope};
