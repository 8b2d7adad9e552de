//! The speculative push transaction.
//!
//! All rewiring happens through the graph's pending overlay, so
//! every read inside the transaction sees earlier writes of the same
//! transaction, and a failed chain discards wholesale. The chain walk
//! is the source's recursion bounded by the tile count: each tile is
//! marked once per transaction and a revisit fails that branch.

use skein_core::{Facing, TileId, TileKind};
use skein_graph::{verify, Graph, GraphDefect, Singularity, Tile};
use smallvec::smallvec;

/// Outcome of one attempted push.
#[derive(Clone, Debug)]
pub struct MoveResult {
    /// Whether the chain relocated. `false` is a blocked move: an
    /// ordinary game outcome, with the graph left untouched.
    pub moved: bool,
    /// Vertex diagnostics from the post-transaction verification.
    pub singularities: Vec<Singularity>,
}

/// Book-keeping for one transaction.
#[derive(Debug, Default)]
struct MoveTxn {
    /// Tiles visited by the chain walk; their flags are cleared
    /// unconditionally afterwards.
    moving: Vec<TileId>,
    /// Empty tiles synthesized into vacated positions; despawned on
    /// rollback.
    spawned: Vec<TileId>,
    /// Empty tiles bridged over by the chain; removed from the live
    /// set only when the whole chain commits.
    consumed: Vec<TileId>,
}

/// Attempt to relocate the tile at `f` one step forward (edge 2 in
/// its own frame), recursively displacing whatever stands there.
///
/// Only the top-level call carries the win callback: a player pushed
/// around by a portal does not win by facing a goal.
fn move_tile(
    graph: &mut Graph,
    txn: &mut MoveTxn,
    f: Facing,
    mut on_win: Option<&mut dyn FnMut()>,
) -> bool {
    if graph.tile(f.tile).is_moving {
        return false;
    }
    graph.tile_mut(f.tile).is_moving = true;
    txn.moving.push(f.tile);

    let kind = graph.kind(f.tile);
    if !kind.can_move() {
        return false;
    }
    let next1 = graph.neighbor(f, 2);
    let next2 = graph.neighbor(f, 6);

    if kind == TileKind::Empty {
        // The space ahead becomes walkable: reattach the predecessor
        // straight to the successor and consume this tile.
        let back = graph.neighbor(f, 0);
        graph.set_edge_mutual(back, 0, next1);
        txn.consumed.push(f.tile);
        return true;
    }
    if graph.is_wall(next1) || graph.is_wall(next2) {
        return false;
    }

    // A fresh empty takes over the four edges the mover vacates. For
    // an arity-4 mover the 4/5 indices wrap onto 0/1; for a portal
    // they address the second occupied slot.
    let wall = graph.wall();
    let mut vacated = Tile::new("", TileKind::Empty);
    vacated.edges = smallvec![wall, wall, wall, wall];
    let vacated = Facing::new(graph.insert(vacated), 0);
    txn.spawned.push(vacated.tile);
    graph.set_edge_mutual(vacated, 0, graph.neighbor(f, 4));
    graph.set_edge_mutual(vacated, 1, graph.neighbor(f, 5));
    graph.set_edge_mutual(vacated, 2, graph.rotate(f, 4));
    graph.set_edge_mutual(vacated, 3, graph.neighbor(f, 3));

    // The mover's lateral edges pick up the displaced neighbors'
    // former laterals.
    graph.set_edge_mutual(f, 1, graph.neighbor(next1, 1));
    graph.set_edge_mutual(f, 7, graph.neighbor(next2, 7));

    if kind == TileKind::Player {
        if graph.kind(next1.tile) == TileKind::Goal {
            if let Some(cb) = on_win.as_mut() {
                cb();
            }
        }
        return move_tile(graph, txn, next1, None);
    }
    graph.set_edge_mutual(f, 3, graph.neighbor(next1, -1));
    graph.set_edge_mutual(f, 5, graph.neighbor(next2, 1));
    move_tile(graph, txn, next1, None) && move_tile(graph, txn, next2, None)
}

/// Run one push transaction for the player (or any mover) at `f`.
///
/// On success every pending overlay commits, consumed tiles leave the
/// live set, and synthesized tiles stay; on failure all of it unwinds
/// and the committed graph is byte-identical to before the call. The
/// verifier runs either way; `Err` from it after a commit indicates a
/// defect in this engine, never a player-reachable state.
pub fn move_player(
    graph: &mut Graph,
    f: Facing,
    mut on_win: impl FnMut(),
) -> Result<MoveResult, GraphDefect> {
    let mut txn = MoveTxn::default();
    let moved = move_tile(graph, &mut txn, f, Some(&mut on_win));
    for id in &txn.moving {
        graph.tile_mut(*id).is_moving = false;
    }
    if moved {
        graph.commit_edits();
        for id in txn.consumed {
            graph.remove(id);
        }
    } else {
        graph.discard_edits();
        for id in txn.spawned {
            graph.remove(id);
        }
    }
    let report = verify::verify_all(graph)?;
    Ok(MoveResult {
        moved,
        singularities: report.singularities,
    })
}
