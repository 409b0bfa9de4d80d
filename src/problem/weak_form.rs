use super::functions::{Func, Geom, SourceTerm};
use smallvec::SmallVec;

/// A bilinear volume contribution a(u, v), evaluated as a weighted sum over quadrature points
///
/// `u` is the trial function and `v` the test function; `wt` carries the quadrature weights
/// (including the cell Jacobian) and `e` the physical coordinates of the quadrature points.
pub trait MatrixFormVol: Sync + Send {
    fn value(&self, wt: &[f64], u: &Func, v: &Func, e: &Geom) -> f64;
}

/// A linear volume contribution l(v), evaluated as a weighted sum over quadrature points
pub trait VectorFormVol: Sync + Send {
    fn value(&self, wt: &[f64], v: &Func, e: &Geom) -> f64;
}

/// A weak formulation: a set of volume matrix forms and volume vector forms
///
/// Host frameworks consume the registered forms to fill their system matrices and load
/// vectors; [galerkin_sample_system](crate::galerkin::galerkin_sample_system) does the same
/// for a caller-supplied basis.
#[derive(Default)]
pub struct WeakForm {
    matrix_forms: SmallVec<[Box<dyn MatrixFormVol>; 1]>,
    vector_forms: SmallVec<[Box<dyn VectorFormVol>; 1]>,
}

impl WeakForm {
    pub fn new() -> Self {
        Self {
            matrix_forms: SmallVec::new(),
            vector_forms: SmallVec::new(),
        }
    }

    pub fn add_matrix_form(&mut self, form: Box<dyn MatrixFormVol>) {
        self.matrix_forms.push(form);
    }

    pub fn add_vector_form(&mut self, form: Box<dyn VectorFormVol>) {
        self.vector_forms.push(form);
    }

    pub fn matrix_forms(&self) -> &[Box<dyn MatrixFormVol>] {
        &self.matrix_forms
    }

    pub fn vector_forms(&self) -> &[Box<dyn VectorFormVol>] {
        &self.vector_forms
    }

    /// Sum of all registered matrix forms for the trial/test pair (u, v)
    pub fn eval_matrix(&self, wt: &[f64], u: &Func, v: &Func, e: &Geom) -> f64 {
        self.matrix_forms
            .iter()
            .map(|form| form.value(wt, u, v, e))
            .sum()
    }

    /// Sum of all registered vector forms for the test function v
    pub fn eval_vector(&self, wt: &[f64], v: &Func, e: &Geom) -> f64 {
        self.vector_forms
            .iter()
            .map(|form| form.value(wt, v, e))
            .sum()
    }
}

/// The volume vector form ∫ f·v for a non-constant source term f
pub struct SourceVectorForm<R: SourceTerm> {
    rhs: R,
}

impl<R: SourceTerm> SourceVectorForm<R> {
    pub fn new(rhs: R) -> Self {
        Self { rhs }
    }
}

impl<R: SourceTerm + Sync + Send> VectorFormVol for SourceVectorForm<R> {
    fn value(&self, wt: &[f64], v: &Func, e: &Geom) -> f64 {
        let mut val = 0.0;
        for i in 0..wt.len() {
            val += wt[i] * self.rhs.value(e.x[i], e.y[i]) * v.val[i];
        }
        val
    }
}
