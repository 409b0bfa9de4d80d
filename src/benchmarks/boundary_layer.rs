//! The "boundary layer" problem from the NIST adaptive-refinement benchmark suite
//!
//! > -ε∆u + 2uₓ + u_y = f  on  Ω = (-1, 1)²
//!
//! with a known exact solution imposed as a non-constant essential boundary condition.
//! The solution is smooth in the interior but develops exponential layers of width O(ε)
//! along the edges x = 1 and y = 1, which makes the problem a standard stress test for
//! adaptive refinement strategies.

use crate::problem::bc::{BcValueType, EssentialBc};
use crate::problem::functions::{ExactSolution, Func, Geom, SourceTerm, V2D};
use crate::problem::weak_form::{MatrixFormVol, SourceVectorForm, WeakForm};

use std::f64::consts::PI;

/// Right-hand side f = -ε∆u + 2uₓ + u_y of the boundary-layer problem
#[derive(Clone, Copy, Debug)]
pub struct BoundaryLayerRhs {
    pub epsilon: f64,
}

impl BoundaryLayerRhs {
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }
}

impl SourceTerm for BoundaryLayerRhs {
    fn value(&self, x: f64, y: f64) -> f64 {
        let eps = self.epsilon;
        let ex = (-(1.0 - x) / eps).exp();
        let ey = (-(1.0 - y) / eps).exp();
        let lx = 1.0 - ex;
        let ly = 1.0 - ey;
        let c = (PI * (x + y)).cos();
        let s = (PI * (x + y)).sin();

        -eps * (-2.0 * PI * PI * lx * ly * c
            + 2.0 * PI * lx * ey * s / eps
            + 2.0 * PI * ly * ex * s / eps
            - ly * c * ex / (eps * eps)
            - lx * c * ey / (eps * eps))
            - 3.0 * PI * lx * ly * s
            - 2.0 * ly * c * ex / eps
            - lx * c * ey / eps
    }

    fn quadrature_order(&self) -> usize {
        10
    }
}

/// Exact solution u = (1 - e^(-(1-x)/ε)) (1 - e^(-(1-y)/ε)) cos(π(x + y))
#[derive(Clone, Copy, Debug)]
pub struct BoundaryLayerSolution {
    pub epsilon: f64,
}

impl BoundaryLayerSolution {
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }
}

impl ExactSolution for BoundaryLayerSolution {
    fn value(&self, x: f64, y: f64) -> f64 {
        let eps = self.epsilon;
        (1.0 - (-(1.0 - x) / eps).exp())
            * (1.0 - (-(1.0 - y) / eps).exp())
            * (PI * (x + y)).cos()
    }

    fn gradient(&self, x: f64, y: f64) -> V2D {
        let eps = self.epsilon;
        let ex = (-(1.0 - x) / eps).exp();
        let ey = (-(1.0 - y) / eps).exp();
        let lx = 1.0 - ex;
        let ly = 1.0 - ey;
        let c = (PI * (x + y)).cos();
        let s = (PI * (x + y)).sin();

        V2D::from([
            -PI * lx * ly * s - ly * c * ex / eps,
            -PI * lx * ly * s - lx * c * ey / eps,
        ])
    }
}

/// The volume matrix form ∫ ε∇u·∇v + (2uₓ + u_y)·v
pub struct BoundaryLayerMatrixForm {
    epsilon: f64,
}

impl BoundaryLayerMatrixForm {
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }
}

impl MatrixFormVol for BoundaryLayerMatrixForm {
    fn value(&self, wt: &[f64], u: &Func, v: &Func, _e: &Geom) -> f64 {
        let mut val = 0.0;
        for i in 0..wt.len() {
            val += wt[i] * self.epsilon * (u.dx[i] * v.dx[i] + u.dy[i] * v.dy[i]);
            val += wt[i] * (2.0 * u.dx[i] + u.dy[i]) * v.val[i];
        }
        val
    }
}

/// The full weak formulation: the diffusion-convection matrix form paired with ∫ f·v
pub fn boundary_layer_weak_form(epsilon: f64) -> WeakForm {
    let mut weak_form = WeakForm::new();
    weak_form.add_matrix_form(Box::new(BoundaryLayerMatrixForm::new(epsilon)));
    weak_form.add_vector_form(Box::new(SourceVectorForm::new(BoundaryLayerRhs::new(
        epsilon,
    ))));
    weak_form
}

/// Essential boundary condition taking its values from the exact solution
pub struct BoundaryLayerBc {
    markers: Vec<String>,
    exact_solution: BoundaryLayerSolution,
}

impl BoundaryLayerBc {
    pub fn new(marker: impl Into<String>, exact_solution: BoundaryLayerSolution) -> Self {
        Self {
            markers: vec![marker.into()],
            exact_solution,
        }
    }

    pub fn with_markers(markers: Vec<String>, exact_solution: BoundaryLayerSolution) -> Self {
        Self {
            markers,
            exact_solution,
        }
    }
}

impl EssentialBc for BoundaryLayerBc {
    fn markers(&self) -> &[String] {
        &self.markers
    }

    fn value_type(&self) -> BcValueType {
        BcValueType::Function
    }

    fn value(&self, x: f64, y: f64) -> f64 {
        self.exact_solution.value(x, y)
    }
}
