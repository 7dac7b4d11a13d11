use itertools::Itertools;
use log::debug;

use crate::{curve::Curve, error::ImplicitizationError, r2::R2};

// Sample parameters per degree pair. Exact binary fractions keep the
// inverse-Vandermonde matrices rational and exactly representable, unlike a
// numerically inverted Vandermonde at arbitrary nodes.
const SAMPLES_1_1: [f64; 2] = [0., 1.];
const SAMPLES_1_2: [f64; 3] = [0., 0.5, 1.];
const SAMPLES_1_3: [f64; 4] = [0., 0.25, 0.75, 1.];
const SAMPLES_2_2: [f64; 5] = [0., 0.25, 0.5, 0.75, 1.];

// Inverse of the Vandermonde matrix at SAMPLES_1_1:
// [1 0]
// [1 1]
const INV_VANDERMONDE_1_1: [[f64; 2]; 2] = [
    [ 1., 0.],
    [-1., 1.],
];

// Inverse of the Vandermonde matrix at SAMPLES_1_2:
// [1 0   0  ]
// [1 1/2 1/4]
// [1 1   1  ]
const INV_VANDERMONDE_1_2: [[f64; 3]; 3] = [
    [ 1.,  0.,  0.],
    [-3.,  4., -1.],
    [ 2., -4.,  2.],
];

// 3 × the inverse of the Vandermonde matrix at SAMPLES_1_3:
// [1 0   0    0    ]
// [1 1/4 1/16 1/64 ]
// [1 3/4 9/16 27/64]
// [1 1   1    1    ]
// The 1/3 is deliberately not divided out; see `to_power_basis`.
const INV_VANDERMONDE_1_3: [[f64; 4]; 4] = [
    [  3.,   0.,   0.,   0.],
    [-19.,  24.,  -8.,   3.],
    [ 32., -56.,  40., -16.],
    [-16.,  32., -32.,  16.],
];

// 3 × the inverse of the Vandermonde matrix at SAMPLES_2_2:
// [1 0   0    0     0     ]
// [1 1/4 1/16 1/64  1/256 ]
// [1 1/2 1/4  1/8   1/16  ]
// [1 3/4 9/16 27/64 81/256]
// [1 1   1    1     1     ]
const INV_VANDERMONDE_2_2: [[f64; 5]; 5] = [
    [  3.,    0.,    0.,    0.,   0.],
    [-25.,   48.,  -36.,   16.,  -3.],
    [ 70., -208.,  228., -112.,  22.],
    [-80.,  288., -384.,  224., -48.],
    [ 32., -128.,  192., -128.,  32.],
];

impl Curve {
    /// Power-basis coefficients (ascending order) of the intersection
    /// polynomial g(t) = f(x(t), y(t)), where f implicitizes `self` and
    /// (x(t), y(t)) is `other`.
    ///
    /// `self`'s degree must be ≤ `other`'s; only the pairs 1-1, 1-2, 1-3 and
    /// 2-2 are implemented. The Bézout bound gives deg1·deg2 + 1
    /// coefficients.
    ///
    /// For the 1-3 and 2-2 pairs the returned coefficients are 3× the true
    /// values: dividing each sample by 3 before combining would only add
    /// round-off, and a uniform scale does not move the roots. Callers must
    /// treat those coefficients as proportional, not exact.
    pub fn to_power_basis(&self, other: &Curve) -> Result<Vec<f64>, ImplicitizationError> {
        let (degree1, degree2) = (self.degree(), other.degree());
        debug!("to_power_basis: degree pair {}-{}", degree1, degree2);
        match (degree1, degree2) {
            (1, 1) => Ok(self.combine_samples(other, &SAMPLES_1_1, &INV_VANDERMONDE_1_1)),
            (1, 2) => Ok(self.combine_samples(other, &SAMPLES_1_2, &INV_VANDERMONDE_1_2)),
            (1, 3) => Ok(self.combine_samples(other, &SAMPLES_1_3, &INV_VANDERMONDE_1_3)),
            (2, 2) => Ok(self.combine_samples(other, &SAMPLES_2_2, &INV_VANDERMONDE_2_2)),
            _ => Err(ImplicitizationError::UnsupportedDegreePair { degree1, degree2 }),
        }
    }

    /// Sample g(t) at the pair's nodes and apply the pair's
    /// inverse-Vandermonde rows.
    fn combine_samples<const N: usize>(
        &self,
        other: &Curve,
        ts: &[f64; N],
        inverse: &[[f64; N]; N],
    ) -> Vec<f64> {
        let vals: Vec<f64> = other
            .positions(ts)
            .into_iter()
            .map(|p| self.implicit_value(p))
            .collect();
        debug!("sampled g at {:?}: {:?}", ts, vals);
        inverse
            .iter()
            .map(|row| row.iter().zip_eq(&vals).map(|(c, v)| c * v).sum())
            .collect()
    }
}

/// Power-basis coefficients of the intersection polynomial for the curves
/// through `nodes1` and `nodes2`.
///
/// Slice-level entry point: validates both node counts, then dispatches to
/// [`Curve::to_power_basis`] (whose scaling contract for the 1-3 and 2-2
/// pairs applies here too).
pub fn to_power_basis(nodes1: &[R2], nodes2: &[R2]) -> Result<Vec<f64>, ImplicitizationError> {
    let curve1 = Curve::try_new(nodes1)?;
    let curve2 = Curve::try_new(nodes2)?;
    curve1.to_power_basis(&curve2)
}
