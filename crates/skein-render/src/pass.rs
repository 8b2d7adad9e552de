//! The recursive visibility walk.

use skein_core::{Facing, TileKind};
use skein_graph::Graph;
use skein_ray::Ray;

use crate::frame::Frame;
use crate::span::range_bounds;
use crate::texture::{Rgba, TextureProvider};
use crate::viewport::Viewport;

/// Paint the view from `eye` into a fresh frame.
///
/// `eye` is the tile the camera sits on, in the frame the camera
/// faces; edge 2 of that frame points up the screen. Tiles are never
/// placed globally: the walk re-derives each screen cell from the
/// eye by following edges, so a cell can be painted several times
/// along different paths when space overlaps itself.
pub fn render<P: TextureProvider>(
    graph: &Graph,
    eye: Facing,
    viewport: Viewport,
    provider: &P,
) -> Frame {
    let len = viewport.frame_len();
    let mut pass = RenderPass {
        graph,
        provider,
        viewport,
        frame: Frame::new(len, len, Rgba::BLACK),
    };
    let seed = Ray::new(1, 0);
    pass.part(eye, 0, 0, seed, seed);
    pass.frame
}

struct RenderPass<'a, P> {
    graph: &'a Graph,
    provider: &'a P,
    viewport: Viewport,
    frame: Frame,
}

impl<P: TextureProvider> RenderPass<'_, P> {
    /// Paint the tile `(x, y)` cells from the eye, clipped to the
    /// window between `left0` and `right0`, then recurse outward.
    fn part(&mut self, f: Facing, x: i64, y: i64, left0: Ray, right0: Ray) {
        let across = self.viewport.tiles_across() as i64;
        let x_cell = self.viewport.view_dist as i64 + x;
        let y_cell = self.viewport.view_dist as i64 + y;

        let (left, right) = if x != 0 || y != 0 {
            if !(0..across).contains(&x_cell) || !(0..across).contains(&y_cell) {
                return;
            }
            // Corner rays of this cell as seen from the eye; the
            // offsets pick the corner nearest the eye on each axis.
            let left1 = Ray::new(
                x * 2 + if (y, x) < (0, 0) { 1 } else { -1 },
                y * 2 + if (-x, y) < (0, 0) { 1 } else { -1 },
            );
            let right1 = Ray::new(
                x * 2 + if (-y, x) < (0, 0) { 1 } else { -1 },
                y * 2 + if (x, y) < (0, 0) { 1 } else { -1 },
            );
            // Visible only if the cell's own window overlaps the
            // inherited one.
            if !(left1.is_between(&left0, &right0)
                || !left0.is_between(&right1, &right0)
                || left0.is_between(&left1, &right1))
            {
                return;
            }
            (
                if left1.is_between(&left0, &right0) {
                    left1
                } else {
                    left0
                },
                if right1.is_between(&left0, &right0) {
                    right1
                } else {
                    right0
                },
            )
        } else {
            let all = Ray::new(1, 0);
            (all, all)
        };

        let ts = self.viewport.tile_size as i64;
        let x_min = ts * x_cell;
        let x_max = x_min + ts;
        let y_min = ts * y_cell;
        let y_max = y_min + ts;
        let eye = self.viewport.center_offset();

        let kind = self.graph.kind(f.tile);
        if kind == TileKind::Wall {
            // Walls are never entered; only the sight line where the
            // view is cut off gets drawn, on the boundary facing the
            // eye. Vertical extents come from the transposed rays.
            let left_t = left.transpose();
            let right_t = right.transpose();
            let color = self.provider.wall_color();
            if x < 0 {
                for (start, end) in range_bounds(eye, eye, right_t, left_t, x_max, y_min, y_max) {
                    for py in start..=end {
                        self.frame.set(x_max, py, color);
                    }
                }
            } else if x > 0 {
                for (start, end) in range_bounds(eye, eye, right_t, left_t, x_min, y_min, y_max) {
                    for py in start..=end {
                        self.frame.set(x_min, py, color);
                    }
                }
            }
            if y < 0 {
                for (start, end) in range_bounds(eye, eye, left, right, y_max, x_min, x_max) {
                    for px in start..=end {
                        self.frame.set(px, y_max, color);
                    }
                }
            } else if y > 0 {
                for (start, end) in range_bounds(eye, eye, left, right, y_min, x_min, x_max) {
                    for px in start..=end {
                        self.frame.set(px, y_min, color);
                    }
                }
            }
            return;
        }

        let texture = self.provider.texture(kind, f.rot);
        debug_assert_eq!(
            texture.size(),
            self.viewport.tile_size,
            "provider art must match the viewport tile size"
        );
        for (row, py) in (y_min..y_max).enumerate() {
            for (start, end) in range_bounds(eye, eye, left, right, py, x_min, x_max) {
                for px in start.max(x_min)..end.min(x_max) {
                    let local = (px - x_min) as u32;
                    self.frame.set(px, py, texture.get(local, row as u32));
                }
            }
        }

        // Recurse away from the eye only, each hop re-expressed in
        // the neighbor's frame so "up the screen" stays edge 2.
        if kind.see_through() {
            let g = self.graph;
            if y >= 0 {
                self.part(g.rotate(g.neighbor(f, 0), 2), x, y + 1, left, right);
            }
            if x >= 0 {
                self.part(g.rotate(g.neighbor(f, 1), 1), x + 1, y, left, right);
            }
            if y <= 0 {
                self.part(g.neighbor(f, 2), x, y - 1, left, right);
            }
            if x <= 0 {
                self.part(g.rotate(g.neighbor(f, 3), 3), x - 1, y, left, right);
            }
        }
    }
}
