use test_log::test;

use crate::{
    curve::Curve,
    error::ImplicitizationError,
    implicit::{eval_intersection_polynomial, evaluate},
    r2::R2,
};

fn pts(coords: &[(f64, f64)]) -> Vec<R2> {
    coords.iter().map(|&(x, y)| R2 { x, y }).collect()
}

fn line() -> Vec<R2> {
    pts(&[(0., 0.), (1., 1.)])
}

fn quadratic() -> Vec<R2> {
    pts(&[(0., 0.), (1., 2.), (2., 0.)])
}

fn cubic() -> Vec<R2> {
    pts(&[(0., 0.), (1., 3.), (3., -1.), (4., 2.)])
}

#[test]
fn line_matches_closed_form() {
    let nodes = pts(&[(0.5, -1.), (2., 3.)]);
    for &(x, y) in &[(0., 0.), (1., 1.), (-2., 0.5), (3.25, -0.75)] {
        let expected = (nodes[0].x - x) * (nodes[1].y - y) - (nodes[1].x - x) * (nodes[0].y - y);
        assert_relative_eq!(evaluate(&nodes, x, y).unwrap(), expected);
    }
}

#[test]
fn line_sign() {
    // Implicitization of the unit diagonal is proportional to y - x
    let nodes = line();
    assert_relative_eq!(evaluate(&nodes, 0., 1.).unwrap(), 1.);
    assert_relative_eq!(evaluate(&nodes, 1., 0.).unwrap(), -1.);
    assert_relative_eq!(evaluate(&nodes, 0.5, 0.5).unwrap(), 0.);
}

#[test]
fn implicit_curve_contains_parametric_curve() {
    // f(B(t)) = 0 for all t, for every supported degree
    for nodes in [line(), quadratic(), cubic()] {
        let curve = Curve::try_new(&nodes).unwrap();
        for i in 0..=20 {
            let t = i as f64 / 20.;
            let p = curve.position(t);
            assert_abs_diff_eq!(curve.implicit_value(p), 0., epsilon = 1e-8);
        }
    }
}

#[test]
fn degree_elevated_nodes_vanish_identically() {
    // Degree-elevated representations make the Sylvester determinant zero
    // everywhere, not just on the curve.
    let elevated_quadratic = pts(&[(0., 0.), (1., 1.), (2., 2.)]);
    let elevated_cubic = pts(&[(0., 0.), (1., 1.), (2., 2.), (3., 3.)]);
    for nodes in [elevated_quadratic, elevated_cubic] {
        let curve = Curve::try_new(&nodes).unwrap();
        for &(x, y) in &[(0., 0.), (5., -3.), (0.25, 1.5)] {
            // The 6×6 LU path leaves a small residual; the closed forms are exact
            assert_abs_diff_eq!(curve.implicit_value(R2 { x, y }), 0., epsilon = 1e-6);
        }
    }
}

#[test]
fn point_is_degenerate() {
    let nodes = pts(&[(1., 2.)]);
    assert_eq!(
        evaluate(&nodes, 0., 0.),
        Err(ImplicitizationError::DegenerateCurve),
    );
}

#[test]
fn degree_four_unsupported() {
    let nodes = pts(&[(0., 0.), (1., 0.), (2., 0.), (3., 0.), (4., 0.)]);
    assert_eq!(
        evaluate(&nodes, 0., 0.),
        Err(ImplicitizationError::UnsupportedDegree(4)),
    );
}

#[test]
fn intersection_polynomial_of_crossing_lines() {
    // g(t) = f₁(x₂(t), y₂(t)) = (1 - t) - t for these two diagonals
    let nodes1 = line();
    let nodes2 = pts(&[(0., 1.), (1., 0.)]);
    assert_relative_eq!(eval_intersection_polynomial(&nodes1, &nodes2, 0.).unwrap(), 1.);
    assert_relative_eq!(eval_intersection_polynomial(&nodes1, &nodes2, 0.5).unwrap(), 0.);
    assert_relative_eq!(eval_intersection_polynomial(&nodes1, &nodes2, 1.).unwrap(), -1.);
}
