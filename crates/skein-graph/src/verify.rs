//! Topological invariant checks over the tile graph.
//!
//! Two severities come out of verification:
//!
//! - [`GraphDefect`]: hard failures (arity mismatch, broken mutual
//!   adjacency, references to removed tiles). After a committed move
//!   these indicate a bug in the editing code, never a playable
//!   outcome.
//! - [`Singularity`]: degenerate vertex configurations found by the
//!   edge-1 walk. The graph is still playable (a wedge vertex is
//!   locally valid, just geometrically unusual), so these are collected
//!   diagnostics rather than control flow.

use std::error::Error;
use std::fmt;

use skein_core::{Facing, TileId, TileKind};

use crate::graph::Graph;

// ── Defects ──────────────────────────────────────────────────────

/// A hard invariant violation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphDefect {
    /// A tile's edge list length does not match its kind's arity.
    ArityMismatch {
        /// The malformed tile.
        tile: TileId,
        /// The arity its kind requires.
        expected: u8,
        /// The number of edges actually present.
        found: usize,
    },
    /// A non-wall edge does not point back where it came from.
    BrokenReciprocity {
        /// The facing whose edge 0 was followed.
        from: Facing,
        /// Where that edge led.
        via: Facing,
        /// Where the far side's edge 0 leads instead of `from`.
        back: Facing,
    },
    /// An edge references a tile that is no longer live.
    StaleReference {
        /// The tile holding the dangling edge.
        from: TileId,
        /// The removed tile it still references.
        to: TileId,
    },
}

impl fmt::Display for GraphDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArityMismatch {
                tile,
                expected,
                found,
            } => write!(
                f,
                "tile {tile} has {found} edges, its kind requires {expected}"
            ),
            Self::BrokenReciprocity { from, via, back } => write!(
                f,
                "incorrect connectivity: {from} -> {via} -> {back}"
            ),
            Self::StaleReference { from, to } => {
                write!(f, "removed tile {to} still referenced from {from}")
            }
        }
    }
}

impl Error for GraphDefect {}

// ── Singularities ────────────────────────────────────────────────

/// How a vertex walk degenerated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SingularityKind {
    /// The first turn step came straight back (a 90° closure).
    QuarterTurn,
    /// The second turn step came back (a 180° closure).
    HalfTurn,
    /// Four wall-free turn steps failed to close the vertex.
    OpenVertex,
}

impl fmt::Display for SingularityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QuarterTurn => write!(f, "90 degree closure"),
            Self::HalfTurn => write!(f, "180 degree closure"),
            Self::OpenVertex => write!(f, "unclosed vertex"),
        }
    }
}

/// A non-fatal degenerate vertex diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Singularity {
    /// The facing the degenerate walk started from.
    pub at: Facing,
    /// The degeneracy observed.
    pub kind: SingularityKind,
}

impl fmt::Display for Singularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in vertex near {}", self.kind, self.at)
    }
}

/// The result of a clean verification pass.
#[derive(Clone, Debug, Default)]
pub struct VerifyReport {
    /// Degenerate-but-playable vertices, in scan order.
    pub singularities: Vec<Singularity>,
}

// ── Checks ───────────────────────────────────────────────────────

/// Follow edge `i` in the frame of `f`, with the target tile's edge
/// list length validated before indexing.
fn hop(graph: &Graph, f: Facing, i: i32) -> Result<Facing, GraphDefect> {
    let tile = graph.tile(f.tile);
    let arity = tile.arity();
    if tile.edges.len() != arity as usize {
        return Err(GraphDefect::ArityMismatch {
            tile: f.tile,
            expected: arity,
            found: tile.edges.len(),
        });
    }
    let idx = (i + f.rot as i32).rem_euclid(arity as i32) as usize;
    Ok(tile.edges[idx])
}

/// Verify one tile: arity, edge liveness, edge-0 reciprocity from
/// every rotation, and the edge-1 vertex walk.
///
/// Wall tiles are sentinels and always pass. Returns the singularities
/// observed around this tile.
pub fn verify_tile(graph: &Graph, id: TileId) -> Result<Vec<Singularity>, GraphDefect> {
    let Some(tile) = graph.get(id) else {
        return Err(GraphDefect::StaleReference { from: id, to: id });
    };
    if tile.kind == TileKind::Wall {
        return Ok(Vec::new());
    }
    let arity = tile.arity();
    if tile.edges.len() != arity as usize {
        return Err(GraphDefect::ArityMismatch {
            tile: id,
            expected: arity,
            found: tile.edges.len(),
        });
    }
    for edge in &tile.edges {
        if !graph.contains(edge.tile) {
            return Err(GraphDefect::StaleReference {
                from: id,
                to: edge.tile,
            });
        }
    }

    let mut singularities = Vec::new();
    for rot in 0..arity {
        let f = Facing::new(id, rot);

        let n0 = hop(graph, f, 0)?;
        if !graph.is_wall(n0) {
            let back = hop(graph, n0, 0)?;
            if back != f {
                return Err(GraphDefect::BrokenReciprocity { from: f, via: n0, back });
            }
        }

        // Walk the vertex shared across edge 1: four wall-free quarter
        // turns must close exactly back to the start; early closure is
        // a wedge-style singularity.
        let n1 = hop(graph, f, 1)?;
        if graph.is_wall(n1) {
            continue;
        }
        if n1 == f {
            singularities.push(Singularity {
                at: f,
                kind: SingularityKind::QuarterTurn,
            });
            continue;
        }
        let n2 = hop(graph, n1, 1)?;
        if n2 == f {
            singularities.push(Singularity {
                at: f,
                kind: SingularityKind::HalfTurn,
            });
            continue;
        }
        if graph.is_wall(n2) {
            continue;
        }
        let n3 = hop(graph, n2, 1)?;
        if !graph.is_wall(n3) && hop(graph, n3, 1)? != f {
            singularities.push(Singularity {
                at: f,
                kind: SingularityKind::OpenVertex,
            });
        }
    }
    Ok(singularities)
}

/// Verify every live tile.
///
/// Must pass immediately after a level load and after every committed
/// move; a failure after a commit is a defect in the move engine, not
/// a player-reachable state.
pub fn verify_all(graph: &Graph) -> Result<VerifyReport, GraphDefect> {
    let mut report = VerifyReport::default();
    for (id, _) in graph.tiles() {
        report.singularities.extend(verify_tile(graph, id)?);
    }
    Ok(report)
}
