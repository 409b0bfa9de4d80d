use crate::integration::QuadGrid;
use crate::problem::{functions::Func, weak_form::WeakForm};
use nalgebra::{DMatrix, DVector};
use rayon::prelude::*;
use std::fmt;

// TODO: add a sparse fill path once basis sets grow beyond a few hundred functions
const MAX_DENSE_SIZE: usize = 1000;

/// Fill a dense system matrix and load vector from a [WeakForm] over a set of basis functions
///
/// Every trial/test pair of basis `Func`s is passed through the weak form's registered
/// matrix forms; every test function through its vector forms. Entry `(k, l)` of the matrix
/// is a(basis[l], basis[k]) and entry `k` of the vector is l(basis[k]).
///
/// Rows are computed in parallel over the Rayon global threadpool.
///
/// # Returns
/// * An `Err` if the basis is empty
/// * An `Err` if the weak form has no registered matrix forms
/// * An `Err` if any basis `Func` was not sampled on the supplied [QuadGrid]
/// * The system matrix and load vector, otherwise
pub fn galerkin_sample_system(
    weak_form: &WeakForm,
    grid: &QuadGrid,
    basis: &[Func],
) -> Result<(DMatrix<f64>, DVector<f64>), GalerkinError> {
    if basis.is_empty() {
        return Err(GalerkinError::EmptyBasis);
    }
    if weak_form.matrix_forms().is_empty() {
        return Err(GalerkinError::EmptyWeakForm);
    }

    let num_points = grid.num_points();
    for func in basis.iter() {
        if func.len() != num_points {
            return Err(GalerkinError::SampleLengthMismatch(func.len(), num_points));
        }
    }

    let wt = grid.weights();
    let e = grid.geom();
    let n = basis.len();

    let rows: Vec<Vec<f64>> = (0..n)
        .into_par_iter()
        .map(|k| {
            let v = &basis[k];
            basis
                .iter()
                .map(|u| weak_form.eval_matrix(wt, u, v, e))
                .collect()
        })
        .collect();

    let a = DMatrix::from_fn(n, n, |r, c| rows[r][c]);
    let b = DVector::from_iterator(n, basis.iter().map(|v| weak_form.eval_vector(wt, v, e)));

    Ok((a, b))
}

/// Solve a dense linear system with Nalgebra's LU decomposition
///
/// Only intended for the small systems produced by [galerkin_sample_system]; a host
/// framework with a real mesh should use its own sparse backend instead.
pub fn solve_dense(a: DMatrix<f64>, b: DVector<f64>) -> Result<Vec<f64>, SolveError> {
    if a.nrows() > MAX_DENSE_SIZE {
        return Err(SolveError::ProblemTooLarge);
    }

    match a.lu().solve(&b) {
        Some(coefficients) => Ok(coefficients.iter().cloned().collect()),
        None => Err(SolveError::SingularSystem),
    }
}

/// Error type for Galerkin sampling functions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalerkinError {
    EmptyBasis,
    EmptyWeakForm,
    SampleLengthMismatch(usize, usize),
}

impl std::error::Error for GalerkinError {}

impl fmt::Display for GalerkinError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::EmptyBasis => write!(
                f,
                "No Basis Functions provided; cannot execute Galerkin Sampling!"
            ),
            Self::EmptyWeakForm => write!(
                f,
                "Weak Form has no Matrix Forms; cannot execute Galerkin Sampling!"
            ),
            Self::SampleLengthMismatch(found, expected) => write!(
                f,
                "Basis Function sampled at {} points but the Quadrature Grid has {}; cannot execute Galerkin Sampling!",
                found, expected
            ),
        }
    }
}

/// Error type for the dense solver
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    SingularSystem,
    ProblemTooLarge,
}

impl std::error::Error for SolveError {}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::SingularSystem => write!(f, "System Matrix is singular; cannot solve!"),
            Self::ProblemTooLarge => write!(
                f,
                "Matrices exceeded maximum size ({}x{}); cannot solve!",
                MAX_DENSE_SIZE, MAX_DENSE_SIZE
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmarks::boundary_layer::BoundaryLayerMatrixForm;
    use crate::problem::functions::{SourceTerm, V2D};
    use crate::problem::weak_form::SourceVectorForm;

    const EPSILON: f64 = 0.5;

    // source term manufactured from ũ = (1 - x²)(1 - y²):
    // f = -ε∆ũ + 2ũₓ + ũ_y
    struct ManufacturedRhs;

    impl SourceTerm for ManufacturedRhs {
        fn value(&self, x: f64, y: f64) -> f64 {
            2.0 * EPSILON * ((1.0 - x * x) + (1.0 - y * y))
                - 4.0 * x * (1.0 - y * y)
                - 2.0 * y * (1.0 - x * x)
        }

        fn quadrature_order(&self) -> usize {
            4
        }
    }

    // bubble basis φᵢⱼ = xⁱ yʲ (1 - x²)(1 - y²), vanishing on ∂(-1,1)²
    fn bubble_basis(grid: &QuadGrid, max_order: usize) -> Vec<Func> {
        let mut basis = Vec::new();
        for i in 0..=max_order {
            for j in 0..=max_order {
                basis.push(Func::sample(grid, move |x, y| {
                    let bx = 1.0 - x * x;
                    let by = 1.0 - y * y;
                    let xi = x.powi(i as i32);
                    let yj = y.powi(j as i32);

                    let dxi = if i == 0 {
                        0.0
                    } else {
                        i as f64 * x.powi(i as i32 - 1)
                    };
                    let dyj = if j == 0 {
                        0.0
                    } else {
                        j as f64 * y.powi(j as i32 - 1)
                    };

                    (
                        xi * yj * bx * by,
                        V2D::from([
                            (dxi * bx - 2.0 * x * xi) * yj * by,
                            (dyj * by - 2.0 * y * yj) * xi * bx,
                        ]),
                    )
                }));
            }
        }
        basis
    }

    fn manufactured_weak_form() -> WeakForm {
        let mut wf = WeakForm::new();
        wf.add_matrix_form(Box::new(BoundaryLayerMatrixForm::new(EPSILON)));
        wf.add_vector_form(Box::new(SourceVectorForm::new(ManufacturedRhs)));
        wf
    }

    #[test]
    fn galerkin_recovers_manufactured_solution() {
        let grid = QuadGrid::on_rectangle(12, [-1.0, 1.0], [-1.0, 1.0]);
        let basis = bubble_basis(&grid, 2);
        let wf = manufactured_weak_form();

        let (a, b) = galerkin_sample_system(&wf, &grid, &basis).unwrap();
        assert_eq!(a.nrows(), 9);
        assert_eq!(b.len(), 9);

        let coefficients = solve_dense(a, b).unwrap();

        // ũ = φ₀₀ lies in the trial space, so the Galerkin solution is exact
        assert!((coefficients[0] - 1.0).abs() < 1e-9);
        for c in coefficients.iter().skip(1) {
            assert!(c.abs() < 1e-9);
        }
    }

    #[test]
    fn empty_basis_is_rejected() {
        let grid = QuadGrid::on_rectangle(4, [-1.0, 1.0], [-1.0, 1.0]);
        let wf = manufactured_weak_form();

        assert_eq!(
            galerkin_sample_system(&wf, &grid, &[]).unwrap_err(),
            GalerkinError::EmptyBasis
        );
    }

    #[test]
    fn empty_weak_form_is_rejected() {
        let grid = QuadGrid::on_rectangle(4, [-1.0, 1.0], [-1.0, 1.0]);
        let basis = bubble_basis(&grid, 0);

        assert_eq!(
            galerkin_sample_system(&WeakForm::new(), &grid, &basis).unwrap_err(),
            GalerkinError::EmptyWeakForm
        );
    }

    #[test]
    fn mismatched_samples_are_rejected() {
        let grid = QuadGrid::on_rectangle(4, [-1.0, 1.0], [-1.0, 1.0]);
        let other_grid = QuadGrid::on_rectangle(5, [-1.0, 1.0], [-1.0, 1.0]);
        let basis = bubble_basis(&other_grid, 0);
        let wf = manufactured_weak_form();

        assert_eq!(
            galerkin_sample_system(&wf, &grid, &basis).unwrap_err(),
            GalerkinError::SampleLengthMismatch(25, 16)
        );
    }
}
