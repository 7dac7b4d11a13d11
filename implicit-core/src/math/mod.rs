pub mod horner;

pub use horner::horner;
