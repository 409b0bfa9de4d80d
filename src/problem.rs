/// Essential (Dirichlet) boundary condition contracts
pub mod bc;

/// Pointwise function contracts and sampled-function structures
pub mod functions;

/// Volume weak-form contracts and the `WeakForm` registry
pub mod weak_form;
