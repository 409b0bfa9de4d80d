/// The NIST-06 "boundary layer" convection-diffusion benchmark
pub mod boundary_layer;
