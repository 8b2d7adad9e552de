//! Pixel spans cut by an angular window.
//!
//! One scan row of one tile is the half-open pixel range
//! `[x_min, x_max)`. [`range_bounds`] intersects that range with the
//! wedge between two sight rays anchored at the eye point, entirely in
//! exact rational arithmetic. A wedge that opens away from the row
//! yields nothing; a wedge that wraps behind the eye can yield two
//! disjoint spans.

use num_rational::Rational64;
use skein_ray::{Ray, Slope};
use smallvec::{smallvec, SmallVec};

/// A half-open pixel range along one scan row.
pub type Span = (i64, i64);

/// Spans of `[x_min, x_max)` on row `py` that fall inside the wedge
/// from `left` to `right`, as seen from `(offset_x, offset_y)`.
///
/// Equal rays mean an unclipped window and return the full range.
/// Span starts may undershoot `x_min` on rows behind the eye; callers
/// clamp when they index tile-local storage.
pub fn range_bounds(
    offset_x: Rational64,
    offset_y: Rational64,
    left: Ray,
    right: Ray,
    py: i64,
    x_min: i64,
    x_max: i64,
) -> SmallVec<[Span; 2]> {
    raw_bounds(offset_x, offset_y, left, right, py, x_min, x_max)
        .into_iter()
        .filter(|&(start, end)| start < end)
        .collect()
}

fn raw_bounds(
    offset_x: Rational64,
    offset_y: Rational64,
    left: Ray,
    right: Ray,
    py: i64,
    x_min: i64,
    x_max: i64,
) -> SmallVec<[Span; 2]> {
    if left == right {
        return smallvec![(x_min, x_max)];
    }
    let (ls, rs) = match (left.slope, right.slope) {
        (Slope::Finite(ls), Slope::Finite(rs)) => (ls, rs),
        // A clipped window is bounded by tile-corner rays, whose odd
        // coordinates keep both slopes finite.
        _ => return smallvec![(x_min, x_max)],
    };
    let zero = Rational64::from_integer(0);
    let one = Rational64::from_integer(1);
    let lo = Rational64::from_integer(x_min);
    let hi = Rational64::from_integer(x_max);
    let y1 = Rational64::from_integer(py) - offset_y;
    let left1 = y1 * ls + offset_x;
    let right1 = y1 * rs + offset_x;
    let int = |v: Rational64| v.to_integer();

    if left.is_lower == right.is_lower {
        if left.is_lower == (y1 > zero) {
            if ls < rs {
                // A wedge narrower than a half-plane.
                if y1 > zero {
                    smallvec![(int(left1.max(lo)), int(right1.min(hi)))]
                } else {
                    smallvec![(int((right1 + one).max(lo)), int((left1 + one).min(hi)))]
                }
            } else if y1 > zero {
                // The wedge wraps behind the eye; the row may carry
                // two disjoint pieces.
                if right1 < lo {
                    if left1 > hi {
                        smallvec![]
                    } else {
                        smallvec![(int(left1), x_max)]
                    }
                } else if left1 > hi {
                    smallvec![(x_min, int(right1))]
                } else {
                    smallvec![(x_min, int(right1)), (int(left1), x_max)]
                }
            } else if left1 < lo {
                if right1 > hi {
                    smallvec![]
                } else {
                    smallvec![(int(left1), x_max)]
                }
            } else if right1 > hi {
                smallvec![(x_min, int(left1))]
            } else {
                smallvec![(int(left1), x_max), (x_min, int(left1))]
            }
        } else if ls < rs {
            // Both rays point at the other side of the eye row.
            smallvec![]
        } else {
            smallvec![(x_min, x_max)]
        }
    } else if left.is_lower {
        if y1 > zero {
            smallvec![(int(left1.max(lo)), x_max)]
        } else {
            smallvec![(int(right1.max(lo)), x_max)]
        }
    } else if y1 > zero {
        smallvec![(x_min, int(right1.min(hi)))]
    } else {
        smallvec![(x_min, int(left1.min(hi)))]
    }
}
