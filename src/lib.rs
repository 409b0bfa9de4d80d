//! A singularly-perturbed convection-diffusion benchmark problem for 2D Finite Element solvers
//!
//! Encodes the "boundary layer" test case from the NIST adaptive-refinement benchmark suite:
//!
//! > -ε∆u + 2uₓ + u_y = f  on  Ω = (-1, 1)²
//!
//! with the exact solution
//!
//! > u(x, y) = (1 - e^(-(1-x)/ε)) (1 - e^(-(1-y)/ε)) cos(π(x + y))
//!
//! which develops boundary layers of width O(ε) along the edges x = 1 and y = 1.
//!
//! The crate provides the four objects a host FEM framework needs to run the benchmark —
//! a right-hand-side source term, the exact solution with its analytic partials, a volume
//! weak form, and a non-constant essential boundary condition — along with the
//! extension-point traits they implement and the quadrature / Galerkin-sampling machinery
//! needed to evaluate and verify them.
//!
//! # Example
//! ```
//! use conv_diff_2d::{BoundaryLayerRhs, BoundaryLayerSolution, QuadGrid};
//! use conv_diff_2d::problem::functions::{ExactSolution, SourceTerm};
//!
//! let epsilon = 0.25;
//! let rhs = BoundaryLayerRhs::new(epsilon);
//! let exact = BoundaryLayerSolution::new(epsilon);
//!
//! // the solution vanishes along the layer edges x = 1 and y = 1
//! assert!(exact.value(1.0, 0.3).abs() < 1e-14);
//! assert!(exact.value(-0.7, 1.0).abs() < 1e-14);
//!
//! // integrate the source term over the problem domain
//! let grid = QuadGrid::on_rectangle(20, [-1.0, 1.0], [-1.0, 1.0]);
//! let f_total = grid.integrate(|x, y| rhs.value(x, y));
//! assert!(f_total.is_finite());
//! ```

/// Benchmark problem definitions
pub mod benchmarks;
/// Pointwise field sampling and export
pub mod fields;
/// Galerkin sampling of weak forms into dense system matrices
pub mod galerkin;
/// Structures and functions to assist in Gauss-Legendre-Quadrature integration
pub mod integration;
/// Extension-point contracts between problem definitions and a host FEM framework
pub mod problem;

pub use benchmarks::boundary_layer::{
    boundary_layer_weak_form, BoundaryLayerBc, BoundaryLayerMatrixForm, BoundaryLayerRhs,
    BoundaryLayerSolution,
};
pub use integration::QuadGrid;
pub use problem::functions::{ExactSolution, Func, Geom, SourceTerm, V2D};
pub use problem::weak_form::WeakForm;
