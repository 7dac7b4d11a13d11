use std::{ops::{Sub, Mul, Add}, fmt::{Display, Formatter, self}};
use approx::{AbsDiffEq, RelativeEq};

use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct R2 {
    pub x: f64,
    pub y: f64,
}

impl Display for R2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

impl AbsDiffEq for R2 {
    type Epsilon = f64;
    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for R2 {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }
    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative) && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

impl Add for R2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        R2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for R2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        R2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Mul<f64> for R2 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        R2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn componentwise_ops() {
        let a = R2 { x: 1., y: -2. };
        let b = R2 { x: 0.5, y: 4. };
        assert_relative_eq!(a + b, R2 { x: 1.5, y: 2. });
        assert_relative_eq!(a - b, R2 { x: 0.5, y: -6. });
        assert_relative_eq!(a * 2., R2 { x: 2., y: -4. });
    }

    #[test]
    fn display_precision() {
        let p = R2 { x: 0.5, y: -1.25 };
        assert_eq!(format!("{}", p), "(0.500, -1.250)");
    }
}
