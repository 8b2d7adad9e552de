//! Serializing a graph's committed edge lists back to the neighbors
//! format.

use skein_graph::Graph;

use crate::parse::FORMAT_TAG;

/// Serialize the committed edge lists of every live tile.
///
/// Output is deterministic (arena slot order) and reads back through
/// [`parse_level`](crate::parse_level). Only committed state is
/// written: a pending overlay does not appear, which is what makes
/// this the round-trip witness for rollback tests. Wall edges are
/// written as a bare `0`, the empty-name wall encoding.
pub fn write_level(graph: &Graph) -> String {
    let mut out = String::from(FORMAT_TAG);
    out.push('\n');
    for (id, tile) in graph.tiles() {
        if id == Graph::WALL {
            continue;
        }
        out.push_str(&tile.name);
        out.push(' ');
        out.push_str(tile.kind.token());
        for edge in &tile.edges {
            out.push(' ');
            if graph.kind(edge.tile) == skein_core::TileKind::Wall {
                out.push('0');
            } else {
                out.push(char::from(b'0' + edge.rot));
                out.push_str(&graph.tile(edge.tile).name);
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_level;

    #[test]
    fn write_read_write_is_stable() {
        let text = [
            FORMAT_TAG,
            "p0 player 0 0 0e1 0",
            "e1 empty 2p0 0 0g2 0",
            "g2 goal 2e1 0 0 0",
            "",
        ]
        .join("\n");
        let level = parse_level(&text).unwrap();
        let written = write_level(&level.graph);
        assert_eq!(written, text);
        let reloaded = parse_level(&written).unwrap();
        assert_eq!(write_level(&reloaded.graph), written);
    }

    #[test]
    fn pending_edits_do_not_leak_into_output() {
        let text = [
            FORMAT_TAG,
            "p0 player 0 0 0e1 0",
            "e1 empty 2p0 0 0 0",
            "",
        ]
        .join("\n");
        let mut level = parse_level(&text).unwrap();
        let before = write_level(&level.graph);
        let player = level.players[0];
        let wall = level.graph.wall();
        level.graph.set_edge_one_way(player, 2, wall);
        assert_eq!(write_level(&level.graph), before);
        level.graph.discard_edits();
        assert_eq!(write_level(&level.graph), before);
    }
}
