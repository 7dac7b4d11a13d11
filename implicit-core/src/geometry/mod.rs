pub mod curve;
pub mod r2;
