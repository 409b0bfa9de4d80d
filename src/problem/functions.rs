use crate::integration::QuadGrid;
use std::ops::{Add, Index, Mul};

#[derive(Clone, Copy, Debug, Default)]
/// 2D vector. Used for gradients of scalar fields
pub struct V2D {
    inner: [f64; 2],
}

impl V2D {
    pub const fn from([x, y]: [f64; 2]) -> Self {
        Self { inner: [x, y] }
    }

    pub fn dot_with(&self, other: &Self) -> f64 {
        self[0] * other[0] + self[1] * other[1]
    }

    pub fn dot(a: Self, b: Self) -> f64 {
        a[0] * b[0] + a[1] * b[1]
    }

    pub fn x(&self) -> f64 {
        self[0]
    }

    pub fn y(&self) -> f64 {
        self[1]
    }
}

impl Index<usize> for V2D {
    type Output = f64;
    fn index(&self, index: usize) -> &Self::Output {
        &self.inner[index]
    }
}

impl Add for V2D {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            inner: [self[0] + other[0], self[1] + other[1]],
        }
    }
}

impl Mul<f64> for V2D {
    type Output = Self;
    fn mul(self, coefficient: f64) -> Self {
        Self {
            inner: [self[0] * coefficient, self[1] * coefficient],
        }
    }
}

/// A scalar source term f(x, y); the right-hand side of a PDE
pub trait SourceTerm {
    /// Pointwise evaluation of the source term
    fn value(&self, x: f64, y: f64) -> f64;

    /// Polynomial-order hint for quadrature rules applied to integrals containing this term
    fn quadrature_order(&self) -> usize;
}

/// A reference solution with analytic partial derivatives
pub trait ExactSolution {
    /// Pointwise evaluation of the solution
    fn value(&self, x: f64, y: f64) -> f64;

    /// Gradient [∂u/∂x, ∂u/∂y] of the solution
    fn gradient(&self, x: f64, y: f64) -> V2D;

    /// Solution value and gradient in one call
    fn value_and_gradient(&self, x: f64, y: f64) -> (f64, V2D) {
        (self.value(x, y), self.gradient(x, y))
    }
}

/// Physical coordinates of a set of quadrature points
///
/// Weak forms receive a `Geom` alongside the sampled functions so that spatially-varying
/// coefficients and source terms can be evaluated point-by-point.
#[derive(Clone, Debug)]
pub struct Geom {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Geom {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// A scalar field sampled at a set of quadrature points
///
/// Holds the field values and both first partial derivatives as flat arrays indexed by
/// quadrature point. This is the form in which trial and test functions are handed to
/// [MatrixFormVol](super::weak_form::MatrixFormVol) and
/// [VectorFormVol](super::weak_form::VectorFormVol) implementations.
#[derive(Clone, Debug)]
pub struct Func {
    pub val: Vec<f64>,
    pub dx: Vec<f64>,
    pub dy: Vec<f64>,
}

impl Func {
    /// Sample a closure returning (value, gradient) at every point of a [QuadGrid]
    pub fn sample<F>(grid: &QuadGrid, f: F) -> Self
    where
        F: Fn(f64, f64) -> (f64, V2D),
    {
        let geom = grid.geom();
        let n = geom.len();

        let mut val = Vec::with_capacity(n);
        let mut dx = Vec::with_capacity(n);
        let mut dy = Vec::with_capacity(n);

        for (x, y) in geom.x.iter().zip(geom.y.iter()) {
            let (v, grad) = f(*x, *y);
            val.push(v);
            dx.push(grad.x());
            dy.push(grad.y());
        }

        Self { val, dx, dy }
    }

    /// Sample an [ExactSolution] at every point of a [QuadGrid]
    pub fn from_exact<E: ExactSolution>(grid: &QuadGrid, exact: &E) -> Self {
        Self::sample(grid, |x, y| exact.value_and_gradient(x, y))
    }

    pub fn len(&self) -> usize {
        self.val.len()
    }

    pub fn is_empty(&self) -> bool {
        self.val.is_empty()
    }
}
