//! Canonical corner ordering.
//!
//! The quad selector returns corners in whatever order the boundary walk
//! produced them. Rectification needs them labeled, so each corner is picked
//! by an extreme of a separable key: the coordinate sum is smallest at the
//! top-left and largest at the bottom-right, the difference `y - x` is
//! smallest at the top-right and largest at the bottom-left.
//!
//! Exact key ties (a perfectly diagonal quad) are broken lexicographically on
//! `(x, y)`, minima taking the smaller pair and maxima the larger, so the
//! labeling never depends on the order the corners arrive in.
use crate::types::{CornerSet, Point};

/// Label four corners as top-left, top-right, bottom-right, bottom-left.
pub fn order_corners(points: &[Point; 4]) -> CornerSet {
    let sum = |p: Point| p.x + p.y;
    let diff = |p: Point| p.y - p.x;
    CornerSet {
        top_left: extreme_by_key(points, sum, false),
        top_right: extreme_by_key(points, diff, false),
        bottom_right: extreme_by_key(points, sum, true),
        bottom_left: extreme_by_key(points, diff, true),
    }
}

fn extreme_by_key(points: &[Point; 4], key: impl Fn(Point) -> f32, take_max: bool) -> Point {
    let beats = |cand: Point, best: Point| -> bool {
        let (kc, kb) = (key(cand), key(best));
        if kc != kb {
            return if take_max { kc > kb } else { kc < kb };
        }
        let (tc, tb) = ((cand.x, cand.y), (best.x, best.y));
        if take_max {
            tc > tb
        } else {
            tc < tb
        }
    };

    let mut best = points[0];
    for &p in &points[1..] {
        if beats(p, best) {
            best = p;
        }
    }
    best
}
