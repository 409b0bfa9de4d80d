/// Gauss-Legendre-Quadrature point generation and scaling
pub mod glq;

use crate::problem::functions::Geom;
use glq::{gauss_quadrature_points, scale_gauss_quad_points};

/// A tensor-product Gauss-Legendre-Quadrature rule over a rectangle
///
/// The 2D rule is flattened to parallel point/weight arrays; the weights carry the cell
/// Jacobian, so a weighted sum of integrand samples is the integral over the rectangle.
///
/// ```
/// use conv_diff_2d::integration::QuadGrid;
///
/// let grid = QuadGrid::on_rectangle(10, [-1.0, 1.0], [-1.0, 1.0]);
///
/// // compute the integral of (x² y²) over (-1,1)²
/// let solution = grid.integrate(|x, y| x.powi(2) * y.powi(2));
/// assert!((solution - 4.0 / 9.0).abs() < 1e-12);
/// ```
#[derive(Clone, Debug)]
pub struct QuadGrid {
    geom: Geom,
    weights: Vec<f64>,
}

impl QuadGrid {
    /// An n×n Gauss-Legendre rule over `[x_min, x_max] × [y_min, y_max]`
    pub fn on_rectangle(n: usize, [x_min, x_max]: [f64; 2], [y_min, y_max]: [f64; 2]) -> Self {
        let (points, weights) = gauss_quadrature_points(n);

        let (x_scale, x_points) = scale_gauss_quad_points(&points, x_min, x_max);
        let (y_scale, y_points) = scale_gauss_quad_points(&points, y_min, y_max);
        let jacobian = x_scale * y_scale;

        let mut x = Vec::with_capacity(n * n);
        let mut y = Vec::with_capacity(n * n);
        let mut wt = Vec::with_capacity(n * n);

        for (xp, xw) in x_points.iter().zip(weights.iter()) {
            for (yp, yw) in y_points.iter().zip(weights.iter()) {
                x.push(*xp);
                y.push(*yp);
                wt.push(jacobian * xw * yw);
            }
        }

        Self {
            geom: Geom { x, y },
            weights: wt,
        }
    }

    /// A rule sized to exactly integrate polynomials up to the given order
    ///
    /// Problem definitions expose their required order through
    /// [SourceTerm::quadrature_order](crate::problem::functions::SourceTerm::quadrature_order).
    pub fn for_order(order: usize, x_range: [f64; 2], y_range: [f64; 2]) -> Self {
        // n Gauss points are exact up to degree 2n - 1
        let n = order / 2 + 1;
        Self::on_rectangle(n, x_range, y_range)
    }

    /// Physical coordinates of the quadrature points
    pub fn geom(&self) -> &Geom {
        &self.geom
    }

    /// Quadrature weights, scaled by the cell Jacobian
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn num_points(&self) -> usize {
        self.weights.len()
    }

    /// Integrate a pointwise function over the rectangle
    pub fn integrate<F>(&self, integrand: F) -> f64
    where
        F: Fn(f64, f64) -> f64,
    {
        self.geom
            .x
            .iter()
            .zip(self.geom.y.iter())
            .zip(self.weights.iter())
            .map(|((x, y), w)| w * integrand(*x, *y))
            .sum()
    }
}
