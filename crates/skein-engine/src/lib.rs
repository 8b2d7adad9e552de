//! The Skein move engine: speculative graph rewiring with
//! commit-or-rollback semantics.
//!
//! A push is a single synchronous transaction. The recursive chain
//! walk marks tiles, rewires edges through the graph's copy-on-write
//! overlay, and either every touched tile relocates or none does. The
//! verifier runs after every attempt as a correctness assertion: a
//! defect surfacing after a commit is a bug in this crate, not a
//! playable outcome.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod push;
pub mod session;

pub use push::{move_player, MoveResult};
pub use session::{MoveDir, Session, SessionError, StepOutcome};
