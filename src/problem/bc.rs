/// How an essential boundary condition supplies its values
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BcValueType {
    /// A single fixed value over all marked boundary parts
    Const,
    /// A pointwise function of the boundary coordinates
    Function,
}

/// An essential (Dirichlet) boundary condition over a set of boundary markers
///
/// The host framework constrains the solution to `value(x, y)` at every boundary point
/// belonging to one of the named markers.
pub trait EssentialBc {
    /// Boundary markers this condition applies to
    fn markers(&self) -> &[String];

    fn value_type(&self) -> BcValueType;

    /// Constrained solution value at a boundary point
    fn value(&self, x: f64, y: f64) -> f64;
}

/// An essential boundary condition holding a fixed value
pub struct ConstEssentialBc {
    markers: Vec<String>,
    value: f64,
}

impl ConstEssentialBc {
    pub fn new(markers: Vec<String>, value: f64) -> Self {
        Self { markers, value }
    }
}

impl EssentialBc for ConstEssentialBc {
    fn markers(&self) -> &[String] {
        &self.markers
    }

    fn value_type(&self) -> BcValueType {
        BcValueType::Const
    }

    fn value(&self, _x: f64, _y: f64) -> f64 {
        self.value
    }
}
