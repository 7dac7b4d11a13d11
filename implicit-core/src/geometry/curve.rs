use serde::{Deserialize, Serialize};

use crate::{error::ImplicitizationError, r2::R2};

/// A planar Bézier curve of degree 1, 2 or 3, tagged by degree.
///
/// The degree is fixed at construction ([`Curve::try_new`]); downstream
/// evaluation code matches on the variant instead of re-inspecting node
/// counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Curve {
    Line([R2; 2]),
    Quadratic([R2; 3]),
    Cubic([R2; 4]),
}

impl Curve {
    /// Validate a node slice and wrap it in the matching degree variant.
    ///
    /// A single node is a point, which has no implicit form; more than four
    /// nodes is a degree this crate does not implement.
    pub fn try_new(nodes: &[R2]) -> Result<Self, ImplicitizationError> {
        match *nodes {
            // Zero nodes is degenerate for the same reason one node is:
            // nothing below degree 1 has an implicit form
            [] | [_] => Err(ImplicitizationError::DegenerateCurve),
            [p0, p1] => Ok(Curve::Line([p0, p1])),
            [p0, p1, p2] => Ok(Curve::Quadratic([p0, p1, p2])),
            [p0, p1, p2, p3] => Ok(Curve::Cubic([p0, p1, p2, p3])),
            _ => Err(ImplicitizationError::UnsupportedDegree(nodes.len() - 1)),
        }
    }

    pub fn degree(&self) -> usize {
        match self {
            Curve::Line(_) => 1,
            Curve::Quadratic(_) => 2,
            Curve::Cubic(_) => 3,
        }
    }

    pub fn nodes(&self) -> &[R2] {
        match self {
            Curve::Line(nodes) => nodes,
            Curve::Quadratic(nodes) => nodes,
            Curve::Cubic(nodes) => nodes,
        }
    }

    /// Position of the curve at parameter `t`, by Bernstein-basis evaluation.
    pub fn position(&self, t: f64) -> R2 {
        let mt = 1. - t;
        match self {
            Curve::Line([p0, p1]) => *p0 * mt + *p1 * t,
            Curve::Quadratic([p0, p1, p2]) => {
                *p0 * (mt * mt) + *p1 * (2. * mt * t) + *p2 * (t * t)
            }
            Curve::Cubic([p0, p1, p2, p3]) => {
                let mt2 = mt * mt;
                let t2 = t * t;
                *p0 * (mt2 * mt) + *p1 * (3. * mt2 * t) + *p2 * (3. * mt * t2) + *p3 * (t2 * t)
            }
        }
    }

    /// Batched [`position`](Curve::position) over a parameter slice.
    pub fn positions(&self, ts: &[f64]) -> Vec<R2> {
        ts.iter().map(|&t| self.position(t)).collect()
    }
}
