/// Evaluate a polynomial at `t`, given coefficients in ascending power order.
pub fn horner(coeffs: &[f64], t: f64) -> f64 {
    coeffs.iter().rev().fold(0., |acc, &c| acc * t + c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn constant() {
        assert_eq!(horner(&[7.], 123.), 7.);
    }

    #[test]
    fn empty() {
        assert_eq!(horner(&[], 2.), 0.);
    }

    #[test]
    fn cubic_vs_power_sum() {
        // 1 - 2t + 3t² - 4t³
        let coeffs = [1., -2., 3., -4.];
        for t in [-1., 0., 0.25, 0.5, 1., 2.] {
            let direct = 1. - 2. * t + 3. * t * t - 4. * t * t * t;
            assert_relative_eq!(horner(&coeffs, t), direct, epsilon = 1e-12);
        }
    }
}
