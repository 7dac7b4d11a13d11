#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ImplicitizationError {
    #[error("A point cannot be implicitized")]
    DegenerateCurve,

    #[error("Only degrees 1, 2 and 3 are supported, got degree {0}")]
    UnsupportedDegree(usize),

    #[error("Only degree pairs 1-1, 1-2, 1-3 and 2-2 are supported, got {degree1}-{degree2}")]
    UnsupportedDegreePair { degree1: usize, degree2: usize },
}
