//! Implicitization of Bézier curves via a modified Sylvester resultant
//! (Farouki & Rajan), and pointwise evaluation of the resulting algebraic
//! curve f(x, y) = 0.
//!
//! Plugging a second parametric curve into f₁ yields the "intersection
//! polynomial" g(t) = f₁(x₂(t), y₂(t)), whose roots are the parameters where
//! the two curves meet. [`to_power_basis`] converts g from sampled values to
//! power-basis coefficients.

mod power_basis;

pub use power_basis::to_power_basis;

use log::debug;
use nalgebra::{Matrix4x2, Matrix6};

use crate::{curve::Curve, error::ImplicitizationError, r2::R2};

impl Curve {
    /// Evaluate the implicitized bivariate polynomial f(x, y) containing
    /// this curve.
    ///
    /// Assumes the nodes are not degree-elevated; an elevated curve makes
    /// the Sylvester determinant identically zero.
    pub fn implicit_value(&self, p: R2) -> f64 {
        match self {
            // x(s) - x = (x0 - x) (1 - s) + (x1 - x) s
            // y(s) - y = (y0 - y) (1 - s) + (y1 - y) s
            // Modified Sylvester: [x0 - x, x1 - x]
            //                     [y0 - y, y1 - y]
            Curve::Line([p0, p1]) => {
                (p0.x - p.x) * (p1.y - p.y) - (p1.x - p.x) * (p0.y - p.y)
            }
            // x(s) - x = (x0 - x) (1 - s)^2 + 2 (x1 - x) s(1 - s) + (x2 - x) s^2
            // y(s) - y = (y0 - y) (1 - s)^2 + 2 (y1 - y) s(1 - s) + (y2 - y) s^2
            // Modified Sylvester: [a, b, c, 0]
            //                     [0, a, b, c]
            //                     [d, e, f, 0]
            //                     [0, d, e, f]
            Curve::Quadratic([p0, p1, p2]) => {
                let a = p0.x - p.x;
                let b = 2. * (p1.x - p.x);
                let c = p2.x - p.x;
                let d = p0.y - p.y;
                let e = 2. * (p1.y - p.y);
                let f = p2.y - p.y;
                //     [a, b, c]         [e, f, 0]
                // det [e, f, 0] = - det [a, b, c] = -e (bf - ce) + f (af - cd)
                //     [d, e, f]         [d, e, f]
                let sub1 = b * f - c * e;
                let sub2 = a * f - c * d;
                let sub_det_a = -e * sub1 + f * sub2;
                //     [b, c, 0]
                // det [a, b, c] = b (bf - ce) - c (af - cd)
                //     [d, e, f]
                let sub_det_d = b * sub1 - c * sub2;
                a * sub_det_a + d * sub_det_d
            }
            Curve::Cubic(nodes) => cubic_sylvester_determinant(nodes, p),
        }
    }
}

/// Degree-3 case: explicit 6×6 modified Sylvester matrix.
///
/// Columns are interleaved so that each curve degree's x- and y-rows sit next
/// to each other; that only changes the determinant up to a fixed sign.
fn cubic_sylvester_determinant(nodes: &[R2; 4], p: R2) -> f64 {
    let mut delta = Matrix4x2::from_fn(|i, j| {
        let d = nodes[i] - p;
        if j == 0 { d.x } else { d.y }
    });
    // Binomial coefficients of the cubic Bernstein basis
    delta.row_mut(1).scale_mut(3.);
    delta.row_mut(2).scale_mut(3.);

    let mut sylvester = Matrix6::<f64>::zeros();
    sylvester.fixed_view_mut::<4, 2>(0, 0).copy_from(&delta);
    sylvester.fixed_view_mut::<4, 2>(1, 2).copy_from(&delta);
    sylvester.fixed_view_mut::<4, 2>(2, 4).copy_from(&delta);
    // LU-backed; cofactor expansion would lose precision here
    sylvester.determinant()
}

/// Evaluate the implicitized polynomial of the curve through `nodes` at
/// `(x, y)`.
///
/// Slice-level entry point: validates the node count, then dispatches to
/// [`Curve::implicit_value`].
pub fn evaluate(nodes: &[R2], x: f64, y: f64) -> Result<f64, ImplicitizationError> {
    let curve = Curve::try_new(nodes)?;
    debug!("evaluate: degree {} at {}", curve.degree(), R2 { x, y });
    Ok(curve.implicit_value(R2 { x, y }))
}

/// Evaluate the intersection polynomial g(t) = f₁(x₂(t), y₂(t)): the curve
/// through `nodes2` at parameter `t`, plugged into the implicitization of the
/// curve through `nodes1`.
pub fn eval_intersection_polynomial(
    nodes1: &[R2],
    nodes2: &[R2],
    t: f64,
) -> Result<f64, ImplicitizationError> {
    let curve1 = Curve::try_new(nodes1)?;
    let curve2 = Curve::try_new(nodes2)?;
    Ok(curve1.implicit_value(curve2.position(t)))
}

#[cfg(test)]
mod tests;
