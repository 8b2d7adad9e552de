//! The [`Ray`] type and its clockwise total order.

use num_rational::Rational64;

/// A ray's slope: exact, or the axis-aligned sentinel.
///
/// Axis-aligned directions have a zero denominator, so they carry an
/// explicit sentinel instead of a raw ratio. `Infinite` sorts after
/// every finite slope, which places the axis-aligned ray at the end of
/// its half-plane in the clockwise order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slope {
    /// An exact finite slope `x / y`.
    Finite(Rational64),
    /// The axis-aligned (zero-denominator) direction.
    Infinite,
}

/// A direction from a fixed viewpoint.
///
/// Constructed from an integer direction vector `(x, y)` in screen
/// coordinates (y grows downward). `is_lower` records which half-plane
/// the ray points into, and [`Slope`] the exact ratio within it. The
/// derived lexicographic order `(is_lower, slope)` is a total clockwise
/// order around the viewpoint; every angular-clipping decision in the
/// renderer reduces to comparisons in this order, so it is
/// deterministic at any recursion depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ray {
    /// Half-plane flag: `y > 0` for finite slopes, `x > 0` for
    /// axis-aligned rays.
    pub is_lower: bool,
    /// The exact slope within the half-plane.
    pub slope: Slope,
}

impl Ray {
    /// The ray through the integer direction `(x, y)`.
    pub fn new(x: i64, y: i64) -> Ray {
        if y != 0 {
            Ray {
                is_lower: y > 0,
                slope: Slope::Finite(Rational64::new(x, y)),
            }
        } else {
            Ray {
                is_lower: x > 0,
                slope: Slope::Infinite,
            }
        }
    }

    /// Whether `self` lies on the clockwise arc from `a` to `b`.
    ///
    /// Endpoints resolve asymmetrically, so that adjacent arcs tile the
    /// circle without double-counting: `a` is always inside its own arc
    /// (and a degenerate arc with `a == b` contains everything), while
    /// `self == b` with `a` distinct is outside. With those ties
    /// settled, the three rays are pairwise distinct and the answer is
    /// whether `self`, `b`, `a` occur in cyclic ascending order.
    pub fn is_between(&self, a: &Ray, b: &Ray) -> bool {
        if a == self || a == b {
            return true;
        }
        if self == b {
            return false;
        }
        let sb = self < b;
        let ba = b < a;
        let a_s = a < self;
        (sb && ba) || (ba && a_s) || (a_s && sb)
    }

    /// The ray reflected across the screen diagonal (x and y swapped).
    ///
    /// Used when re-deriving wall-edge extents from tile-passage
    /// extents: a span over pixel columns becomes a span over pixel
    /// rows by transposing both bounding rays.
    pub fn transpose(&self) -> Ray {
        match self.slope {
            Slope::Infinite => Ray {
                is_lower: self.is_lower,
                slope: Slope::Finite(Rational64::from_integer(0)),
            },
            Slope::Finite(r) if r == Rational64::from_integer(0) => Ray {
                is_lower: self.is_lower,
                slope: Slope::Infinite,
            },
            Slope::Finite(r) => Ray {
                is_lower: self.is_lower == (r > Rational64::from_integer(0)),
                slope: Slope::Finite(r.recip()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn cardinal_sweep() -> [Ray; 8] {
        // Ascending in the (is_lower, slope) order, starting up-right
        // in screen coordinates. Arcs run in this cyclic direction.
        [
            Ray::new(1, -1),
            Ray::new(0, -1),
            Ray::new(-1, -1),
            Ray::new(-1, 0),
            Ray::new(-1, 1),
            Ray::new(0, 1),
            Ray::new(1, 1),
            Ray::new(1, 0),
        ]
    }

    #[test]
    fn equality_is_exact() {
        assert_eq!(Ray::new(1, 2), Ray::new(2, 4));
        assert_eq!(Ray::new(-3, 0), Ray::new(-5, 0));
        assert_ne!(Ray::new(1, 2), Ray::new(1, -2));
        assert_ne!(Ray::new(1, 0), Ray::new(-1, 0));
    }

    #[test]
    fn sweep_is_cyclically_ordered() {
        let rays = cardinal_sweep();
        for i in 0..rays.len() {
            let a = rays[i];
            let b = rays[(i + 1) % rays.len()];
            let c = rays[(i + 3) % rays.len()];
            assert!(b.is_between(&a, &c), "{b:?} not between {a:?} and {c:?}");
            assert!(!c.is_between(&a, &b), "{c:?} between {a:?} and {b:?}");
        }
    }

    #[test]
    fn endpoint_tie_break() {
        let a = Ray::new(1, -1);
        let b = Ray::new(1, 1);
        let c = Ray::new(-1, 1);
        // The left endpoint owns its boundary ray; the right does not.
        assert!(a.is_between(&a, &b));
        assert!(!b.is_between(&a, &b));
        // Unless the arc is degenerate, which contains everything.
        assert!(c.is_between(&a, &a));
        assert!(a.is_between(&a, &a));
    }

    #[test]
    fn transpose_swaps_axes() {
        assert_eq!(Ray::new(2, 1).transpose(), Ray::new(1, 2));
        assert_eq!(Ray::new(2, -1).transpose(), Ray::new(-1, 2));
        assert_eq!(Ray::new(1, 0).transpose(), Ray::new(0, 1));
        assert_eq!(Ray::new(-1, 0).transpose(), Ray::new(0, -1));
        assert_eq!(Ray::new(0, -3).transpose(), Ray::new(-3, 0));
    }

    proptest! {
        #[test]
        fn left_endpoint_always_inside(x in -9i64..=9, y in -9i64..=9,
                                       bx in -9i64..=9, by in -9i64..=9) {
            let r = Ray::new(x, y);
            let b = Ray::new(bx, by);
            prop_assert!(r.is_between(&r, &b));
        }

        #[test]
        fn distinct_rays_split_the_circle(ax in -9i64..=9, ay in -9i64..=9,
                                          bx in -9i64..=9, by in -9i64..=9,
                                          cx in -9i64..=9, cy in -9i64..=9) {
            let a = Ray::new(ax, ay);
            let b = Ray::new(bx, by);
            let c = Ray::new(cx, cy);
            prop_assume!(a != b && b != c && a != c);
            // A ray is in exactly one of the two arcs a->b and b->a.
            prop_assert_ne!(c.is_between(&a, &b), c.is_between(&b, &a));
        }

        #[test]
        fn transpose_is_an_involution(x in -9i64..=9, y in -9i64..=9) {
            let r = Ray::new(x, y);
            prop_assert_eq!(r.transpose().transpose(), r);
        }
    }
}
