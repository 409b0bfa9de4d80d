use nalgebra::{DMatrix, SymmetricEigen};

/// Get a set of n Gauss-Legendre-Quadrature integration points and weights over `(-1, 1)`
///
/// ```
/// use conv_diff_2d::integration::glq::gauss_quadrature_points;
///
/// let (points, weights) = gauss_quadrature_points(10);
/// assert_eq!(points.len(), 10);
/// assert_eq!(weights.len(), 10);
///
/// // points are symmetric about zero; weights sum to the interval length
/// assert!(points.iter().sum::<f64>().abs() < 1e-12);
/// assert!((weights.iter().sum::<f64>() - 2.0).abs() < 1e-12);
/// ```
// https://en.wikipedia.org/wiki/Gaussian_quadrature#Gauss%E2%80%93Legendre_quadrature
pub fn gauss_quadrature_points(n: usize) -> (Vec<f64>, Vec<f64>) {
    let betas: Vec<f64> = (1..n)
        .map(|i| 0.5 / (1.0 - (2.0 * i as f64).powi(-2)).sqrt())
        .collect();

    let polymat: DMatrix<f64> = DMatrix::from_fn(n, n, |r, c| {
        if r == c + 1 {
            betas[r - 1]
        } else if c == r + 1 {
            betas[c - 1]
        } else {
            0.0
        }
    });

    let eigen_decomp = SymmetricEigen::new(polymat);

    let mut xw: Vec<(f64, f64)> = eigen_decomp
        .eigenvalues
        .iter()
        .cloned()
        .zip(
            eigen_decomp
                .eigenvectors
                .row(0)
                .iter()
                .map(|weight| (*weight).powi(2) * 2.0),
        )
        .collect();

    xw.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());

    xw.drain(0..).unzip()
}

/// Scale a set of Gauss-Legendre-Quadrature integration points to fall within a specific range
///
/// Returns the scale factor (half the interval length) along with the scaled points.
///
/// ```
/// use conv_diff_2d::integration::glq::{gauss_quadrature_points, scale_gauss_quad_points};
///
/// let (points, _) = gauss_quadrature_points(10);
/// let (scale, points_scaled) = scale_gauss_quad_points(&points, 0.25, 0.5);
///
/// assert!((scale - 0.125).abs() < 1e-14);
/// assert!(points_scaled.iter().all(|p| *p > 0.25 && *p < 0.5));
/// ```
pub fn scale_gauss_quad_points(points: &[f64], min: f64, max: f64) -> (f64, Vec<f64>) {
    let scale_factor = (max - min) / 2.0;
    let offset = (max + min) / 2.0;

    (
        scale_factor,
        points
            .iter()
            .map(|x| x * scale_factor + offset)
            .collect::<Vec<f64>>(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const GLQ_ACCURACY: f64 = 1e-9;

    // reference 10-point Gauss-Legendre nodes and weights
    const X_10: [f64; 10] = [
        -0.973906528517172,
        -0.865063366688985,
        -0.679409568299024,
        -0.433395394129247,
        -0.148874338981631,
        0.148874338981631,
        0.433395394129247,
        0.679409568299024,
        0.865063366688985,
        0.973906528517172,
    ];
    const W_10: [f64; 10] = [
        0.066671344308688,
        0.149451349150581,
        0.219086362515982,
        0.269266719309996,
        0.295524224714753,
        0.295524224714753,
        0.269266719309996,
        0.219086362515982,
        0.149451349150581,
        0.066671344308688,
    ];

    #[test]
    fn glq_point_generation() {
        let (glq_points, glq_weights) = gauss_quadrature_points(10);

        for (glq_ref, glq_test) in X_10.iter().zip(glq_points.iter()) {
            assert!((glq_ref - glq_test).abs() < GLQ_ACCURACY);
        }

        for (glq_w_ref, glq_w_test) in W_10.iter().zip(glq_weights.iter()) {
            assert!((glq_w_ref - glq_w_test).abs() < GLQ_ACCURACY);
        }
    }

    #[test]
    fn glq_point_scaling() {
        let (glq_points, _) = gauss_quadrature_points(10);
        let (glq_scale, glq_scaled_points) = scale_gauss_quad_points(&glq_points, 0.25, 0.5);

        assert!((glq_scale - 0.125).abs() < 1e-14);

        for (glq_ref, glq_s_test) in X_10.iter().zip(glq_scaled_points.iter()) {
            let expected = glq_ref * 0.125 + 0.375;
            assert!((expected - glq_s_test).abs() < GLQ_ACCURACY);
        }
    }

    #[test]
    fn glq_exactly_integrates_polynomials() {
        // an n-point rule is exact up to degree 2n - 1
        let (points, weights) = gauss_quadrature_points(4);

        let integral: f64 = points
            .iter()
            .zip(weights.iter())
            .map(|(x, w)| w * (x.powi(7) + 3.0 * x.powi(6) - x.powi(2)))
            .sum();

        // ∫ over (-1,1): 0 + 6/7 - 2/3
        assert!((integral - (6.0 / 7.0 - 2.0 / 3.0)).abs() < 1e-12);
    }
}
