use nalgebra::{Matrix3, SMatrix, SVector, Vector3};

const EPS: f64 = 1e-9;

/// Exact plane homography mapping the four `src` points onto the four `dst`
/// points (direct linear transform, `h33` fixed at 1). Returns `None` when
/// the correspondences are degenerate, e.g. three collinear corners.
pub fn quad_homography(src: &[[f64; 2]; 4], dst: &[[f64; 2]; 4]) -> Option<Matrix3<f64>> {
    let mut a = SMatrix::<f64, 8, 8>::zeros();
    let mut b = SVector::<f64, 8>::zeros();
    for i in 0..4 {
        let [x, y] = src[i];
        let [u, v] = dst[i];
        let r = 2 * i;
        a[(r, 0)] = x;
        a[(r, 1)] = y;
        a[(r, 2)] = 1.0;
        a[(r, 6)] = -u * x;
        a[(r, 7)] = -u * y;
        b[r] = u;
        a[(r + 1, 3)] = x;
        a[(r + 1, 4)] = y;
        a[(r + 1, 5)] = 1.0;
        a[(r + 1, 6)] = -v * x;
        a[(r + 1, 7)] = -v * y;
        b[r + 1] = v;
    }
    let h = a.lu().solve(&b)?;
    Some(Matrix3::new(
        h[0], h[1], h[2], h[3], h[4], h[5], h[6], h[7], 1.0,
    ))
}

/// Apply `h` to a point. `None` when the point projects to infinity.
pub fn project_point(h: &Matrix3<f64>, x: f64, y: f64) -> Option<(f64, f64)> {
    let v = h * Vector3::new(x, y, 1.0);
    let w = v[2];
    if !w.is_finite() || w.abs() <= EPS || !v[0].is_finite() || !v[1].is_finite() {
        return None;
    }
    Some((v[0] / w, v[1] / w))
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIT: [[f64; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

    #[test]
    fn identity_correspondence_gives_identity_matrix() {
        let h = quad_homography(&UNIT, &UNIT).expect("well posed");
        assert!((h - Matrix3::identity()).abs().max() < 1e-9, "{h}");
    }

    #[test]
    fn corners_map_exactly() {
        let src = [[120.0, 80.0], [520.0, 140.0], [560.0, 540.0], [90.0, 480.0]];
        let dst = [[0.0, 0.0], [399.0, 0.0], [399.0, 449.0], [0.0, 449.0]];
        let h = quad_homography(&src, &dst).expect("well posed");
        for (s, d) in src.iter().zip(&dst) {
            let (u, v) = project_point(&h, s[0], s[1]).expect("finite");
            assert!((u - d[0]).abs() < 1e-6, "u {u} vs {}", d[0]);
            assert!((v - d[1]).abs() < 1e-6, "v {v} vs {}", d[1]);
        }
    }

    #[test]
    fn pure_scaling_maps_interior_points() {
        let dst = [[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0]];
        let h = quad_homography(&UNIT, &dst).expect("well posed");
        let (u, v) = project_point(&h, 0.5, 0.5).expect("finite");
        assert!((u - 1.0).abs() < 1e-9);
        assert!((v - 1.0).abs() < 1e-9);
    }

    #[test]
    fn coincident_corners_are_rejected() {
        let src = [[10.0, 10.0], [10.0, 10.0], [50.0, 50.0], [10.0, 50.0]];
        assert!(quad_homography(&src, &UNIT).is_none());
    }
}
