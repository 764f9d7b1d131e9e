use serde::{Deserialize, Serialize};

pub use crate::image::{GrayImageU8, ImageRgb8, ImageU8, RgbImageU8};

/// Planar point in image-pixel coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Scale both coordinates by `factor` (working → full resolution).
    pub fn scaled(&self, factor: f32) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }
}

impl From<[f32; 2]> for Point {
    fn from(p: [f32; 2]) -> Self {
        Point::new(p[0], p[1])
    }
}

/// Closed boundary traced from a binary image, in traversal order.
pub type Contour = Vec<Point>;

/// Four-vertex polygon approximation, tagged with the area of the contour it
/// was reduced from (the ranking key of the quad selector).
#[derive(Clone, Debug, Serialize)]
pub struct QuadCandidate {
    /// Corners in contour-traversal order, not yet canonicalized.
    pub corners: [Point; 4],
    /// Enclosed area of the source contour, in squared working pixels.
    pub area: f32,
}

/// Canonically labeled document corners.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CornerSet {
    pub top_left: Point,
    pub top_right: Point,
    pub bottom_right: Point,
    pub bottom_left: Point,
}

impl CornerSet {
    /// Corners in (TL, TR, BR, BL) order.
    pub fn as_array(&self) -> [Point; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
    }

    /// Map every corner by a uniform scale factor.
    pub fn scaled(&self, factor: f32) -> CornerSet {
        CornerSet {
            top_left: self.top_left.scaled(factor),
            top_right: self.top_right.scaled(factor),
            bottom_right: self.bottom_right.scaled(factor),
            bottom_left: self.bottom_left.scaled(factor),
        }
    }
}

/// Outcome of the detection stages: the selected quad in working-space
/// coordinates plus the ratio that maps them back to the full-resolution
/// image.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineDetection {
    pub quad: QuadCandidate,
    /// `original_height / working_height`.
    pub scale_ratio: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_symmetric_and_euclidean() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);
    }

    #[test]
    fn corner_set_scaling_maps_every_corner() {
        let corners = CornerSet {
            top_left: Point::new(1.0, 2.0),
            top_right: Point::new(10.0, 2.0),
            bottom_right: Point::new(10.0, 20.0),
            bottom_left: Point::new(1.0, 20.0),
        };
        let scaled = corners.scaled(2.0);
        assert_eq!(scaled.top_left, Point::new(2.0, 4.0));
        assert_eq!(scaled.bottom_right, Point::new(20.0, 40.0));
    }
}
