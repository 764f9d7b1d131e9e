//! External boundary extraction from a binary edge map.
//!
//! Connected components are collected with a stack-based flood fill over the
//! 8-neighborhood; each component contributes exactly one closed boundary,
//! traced clockwise with Moore neighbor tracing and terminated by Jacob's
//! stopping criterion (the walk re-enters its start about to repeat its first
//! move). Contours whose start pixel lies strictly inside another contour are
//! nested and get discarded, so only external outlines remain.
//!
//! Thin structures are walked along both sides, so a boundary may revisit a
//! pixel; the walk itself never crosses.
use crate::image::ImageU8;
use crate::types::{Contour, Point};

/// Clockwise Moore neighborhood starting east.
const MOORE_DIRS: [(isize, isize); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Trace the external boundaries of all "on" regions.
pub fn find_external_contours(edges: &ImageU8) -> Vec<Contour> {
    let contours = trace_component_boundaries(edges);
    discard_nested(contours)
}

/// One boundary per 8-connected component, in scan order of its start pixel.
fn trace_component_boundaries(edges: &ImageU8) -> Vec<Contour> {
    let w = edges.w;
    let h = edges.h;
    let mut visited = vec![false; w * h];
    let mut stack: Vec<usize> = Vec::with_capacity(256);
    let mut contours = Vec::new();

    for y in 0..h {
        for x in 0..w {
            let idx = y * w + x;
            if visited[idx] || edges.get(x, y) == 0 {
                continue;
            }

            // Claim the whole component so it yields exactly one contour.
            visited[idx] = true;
            stack.push(idx);
            while let Some(i) = stack.pop() {
                let cx = (i % w) as isize;
                let cy = (i / w) as isize;
                for (dx, dy) in MOORE_DIRS {
                    let nx = cx + dx;
                    let ny = cy + dy;
                    if nx < 0 || ny < 0 || nx >= w as isize || ny >= h as isize {
                        continue;
                    }
                    let ni = ny as usize * w + nx as usize;
                    if !visited[ni] && edges.get(nx as usize, ny as usize) != 0 {
                        visited[ni] = true;
                        stack.push(ni);
                    }
                }
            }

            // (x, y) is the topmost-leftmost pixel: its west and north
            // neighbors are off, which anchors the clockwise walk.
            contours.push(trace_boundary(edges, x, y));
        }
    }
    contours
}

/// Moore boundary walk from the component's topmost-leftmost pixel.
fn trace_boundary(edges: &ImageU8, sx: usize, sy: usize) -> Contour {
    let w = edges.w as isize;
    let h = edges.h as isize;
    let on = |x: isize, y: isize| -> bool {
        x >= 0 && y >= 0 && x < w && y < h && edges.get(x as usize, y as usize) != 0
    };
    let probe = |px: isize, py: isize, from: usize| -> Option<usize> {
        (0..8).map(|k| (from + k) % 8).find(|&d| {
            let (dx, dy) = MOORE_DIRS[d];
            on(px + dx, py + dy)
        })
    };

    let start = (sx as isize, sy as isize);
    let mut contour = vec![Point::new(sx as f32, sy as f32)];

    // The west neighbor is background, so the sweep begins at northwest.
    let Some(first_dir) = probe(start.0, start.1, 5) else {
        return contour; // isolated pixel
    };

    let mut cur = (start.0 + MOORE_DIRS[first_dir].0, start.1 + MOORE_DIRS[first_dir].1);
    let mut prev_dir = first_dir;
    // A closed walk visits each pixel at most four times.
    let max_steps = 4 * (edges.w * edges.h) + 8;
    for _ in 0..max_steps {
        let Some(next_dir) = probe(cur.0, cur.1, (prev_dir + 6) % 8) else {
            break;
        };
        if cur == start && next_dir == first_dir {
            break; // about to repeat the first move: the walk is closed
        }
        contour.push(Point::new(cur.0 as f32, cur.1 as f32));
        cur = (cur.0 + MOORE_DIRS[next_dir].0, cur.1 + MOORE_DIRS[next_dir].1);
        prev_dir = next_dir;
    }
    contour
}

/// Keep only contours that are not enclosed by another contour.
fn discard_nested(contours: Vec<Contour>) -> Vec<Contour> {
    let boxes: Vec<[f32; 4]> = contours.iter().map(|c| bounding_box(c)).collect();
    contours
        .iter()
        .enumerate()
        .filter(|(i, contour)| {
            let start = contour[0];
            !contours.iter().enumerate().any(|(j, outer)| {
                j != *i && box_contains(&boxes[j], start) && point_in_polygon(start, outer)
            })
        })
        .map(|(_, c)| c.clone())
        .collect()
}

fn bounding_box(contour: &[Point]) -> [f32; 4] {
    let mut bb = [f32::MAX, f32::MAX, f32::MIN, f32::MIN];
    for p in contour {
        bb[0] = bb[0].min(p.x);
        bb[1] = bb[1].min(p.y);
        bb[2] = bb[2].max(p.x);
        bb[3] = bb[3].max(p.y);
    }
    bb
}

#[inline]
fn box_contains(bb: &[f32; 4], p: Point) -> bool {
    p.x > bb[0] && p.y > bb[1] && p.x < bb[2] && p.y < bb[3]
}

/// Even-odd ray casting. Components never touch, so boundary cases cannot
/// flip the verdict for a start pixel of another component.
fn point_in_polygon(p: Point, polygon: &[Point]) -> bool {
    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let a = polygon[i];
        let b = polygon[j];
        if (a.y > p.y) != (b.y > p.y) {
            let t = (p.y - a.y) / (b.y - a.y);
            let x_cross = a.x + t * (b.x - a.x);
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
