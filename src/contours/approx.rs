//! Closed-polygon simplification (Ramer-Douglas-Peucker).
//!
//! A traced boundary carries one point per pixel; rectifying needs only the
//! dominant vertices. The contour is anchored at its start point and at the
//! point farthest from it, the two chains in between are simplified
//! independently, and survivors are emitted in trace order so the result is
//! still a closed ring.
use crate::types::Point;

/// Perimeter of a closed contour, including the closing segment.
pub fn arc_length_closed(contour: &[Point]) -> f32 {
    let n = contour.len();
    if n < 2 {
        return 0.0;
    }
    (0..n).map(|i| contour[i].distance(&contour[(i + 1) % n])).sum()
}

/// Absolute enclosed area of a closed contour (shoelace formula).
pub fn contour_area(contour: &[Point]) -> f32 {
    let n = contour.len();
    if n < 3 {
        return 0.0;
    }
    let twice: f32 = (0..n)
        .map(|i| {
            let a = contour[i];
            let b = contour[(i + 1) % n];
            a.x * b.y - b.x * a.y
        })
        .sum();
    twice.abs() * 0.5
}

/// Simplify a closed contour, dropping every vertex whose deviation from the
/// simplified outline stays within `epsilon` pixels.
pub fn approx_polygon_closed(contour: &[Point], epsilon: f32) -> Vec<Point> {
    let n = contour.len();
    if n < 3 {
        return contour.to_vec();
    }

    let anchor = contour[0];
    let mut far = 0;
    let mut far_dist = 0.0f32;
    for (i, p) in contour.iter().enumerate().skip(1) {
        let d = p.distance(&anchor);
        if d > far_dist {
            far_dist = d;
            far = i;
        }
    }
    if far == 0 {
        return vec![anchor]; // all points coincide
    }

    let mut keep = vec![false; n];
    keep[0] = true;
    keep[far] = true;
    // Indices past n - 1 wrap, so the second chain closes the ring at 0.
    simplify_chain(contour, 0, far, epsilon, &mut keep);
    simplify_chain(contour, far, n, epsilon, &mut keep);

    contour
        .iter()
        .zip(&keep)
        .filter(|(_, &k)| k)
        .map(|(p, _)| *p)
        .collect()
}

/// Iterative Douglas-Peucker over the open chain `start..=end` (virtual
/// indices, resolved modulo the contour length).
fn simplify_chain(contour: &[Point], start: usize, end: usize, epsilon: f32, keep: &mut [bool]) {
    let n = contour.len();
    let mut ranges = vec![(start, end)];
    while let Some((s, e)) = ranges.pop() {
        if e <= s + 1 {
            continue;
        }
        let a = contour[s % n];
        let b = contour[e % n];
        let mut best = 0.0f32;
        let mut best_i = s;
        for i in s + 1..e {
            let d = point_line_distance(contour[i % n], a, b);
            if d > best {
                best = d;
                best_i = i;
            }
        }
        if best > epsilon {
            keep[best_i % n] = true;
            ranges.push((s, best_i));
            ranges.push((best_i, e));
        }
    }
}

/// Perpendicular distance from `p` to the line through `a` and `b`; falls
/// back to the point distance when the anchors coincide.
fn point_line_distance(p: Point, a: Point, b: Point) -> f32 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len = (dx * dx + dy * dy).sqrt();
    if len <= f32::EPSILON {
        return p.distance(&a);
    }
    ((p.x - a.x) * dy - (p.y - a.y) * dx).abs() / len
}
