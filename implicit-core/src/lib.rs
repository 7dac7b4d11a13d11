#![allow(mixed_script_confusables)]

#[cfg_attr(not(test), allow(unused_imports))]
#[macro_use]
extern crate approx;

pub mod error;
pub mod geometry;
pub mod implicit;
pub mod math;

// Re-exports for flat `crate::` paths
pub use geometry::curve;
pub use geometry::r2;

pub use math::horner;

// Re-export key types for external use
pub use curve::Curve;
pub use error::ImplicitizationError;
pub use implicit::{eval_intersection_polynomial, evaluate, to_power_basis};
pub use r2::R2;
