//! Homogeneous transform behavior: composition order, inversion, and the
//! point-vs-direction distinction.

use approx::assert_abs_diff_eq;
use geom3::{
    apply_direction, apply_point, compose, invert, rotation_x, rotation_y, rotation_z, scaling,
    translation, Direction, GeomError, Matrix, Point,
};
use std::f64::consts::{FRAC_PI_2, PI};

#[test]
fn translation_affects_points_not_directions() {
    let chain = compose(&[translation(1.0, 0.0, 0.0), rotation_z(FRAC_PI_2)]).unwrap();

    // Origin point picks up the translation
    let p = apply_point(&chain, &Point::origin()).unwrap();
    assert!(p
        .position()
        .is_equal(&Direction::new(1.0, 0.0, 0.0), 1e-10));

    // A pure direction does not
    let d = apply_direction(&chain, &Direction::unit_x()).unwrap();
    assert!(d.is_equal(&Direction::unit_y(), 1e-10));
}

#[test]
fn composition_is_associative() {
    let a = translation(1.0, 2.0, 3.0);
    let b = rotation_y(0.4);
    let c = scaling(2.0, 0.5, 1.0);

    let left = compose(&[compose(&[a.clone(), b.clone()]).unwrap(), c.clone()]).unwrap();
    let right = compose(&[a.clone(), compose(&[b.clone(), c.clone()]).unwrap()]).unwrap();
    let flat = compose(&[a, b, c]).unwrap();

    assert!(left.is_equal(&right, 1e-12));
    assert!(left.is_equal(&flat, 1e-12));
}

#[test]
fn composition_is_order_sensitive() {
    let rotate_then_translate = compose(&[translation(1.0, 0.0, 0.0), rotation_z(FRAC_PI_2)])
        .unwrap();
    let translate_then_rotate = compose(&[rotation_z(FRAC_PI_2), translation(1.0, 0.0, 0.0)])
        .unwrap();

    let p = Point::from_position(Direction::unit_x());
    let first = apply_point(&rotate_then_translate, &p).unwrap();
    let second = apply_point(&translate_then_rotate, &p).unwrap();

    assert!(first
        .position()
        .is_equal(&Direction::new(1.0, 1.0, 0.0), 1e-10));
    assert!(second
        .position()
        .is_equal(&Direction::new(0.0, 2.0, 0.0), 1e-10));
}

#[test]
fn full_turn_is_identity() {
    for quarter in [rotation_x(FRAC_PI_2), rotation_y(FRAC_PI_2), rotation_z(FRAC_PI_2)] {
        let full = compose(&[quarter.clone(), quarter.clone(), quarter.clone(), quarter]).unwrap();
        assert!(full.is_equal(&Matrix::identity(4), 1e-10));
    }
}

#[test]
fn inverse_undoes_a_chain() {
    let chain = compose(&[
        translation(-2.0, 1.0, 4.0),
        rotation_x(PI / 3.0),
        rotation_z(-0.25),
        scaling(3.0, 1.0, 0.5),
    ])
    .unwrap();
    let inverse = invert(&chain).unwrap();

    let p = Point::from_position(Direction::new(1.0, -2.0, 0.75));
    let there = apply_point(&chain, &p).unwrap();
    let back = apply_point(&inverse, &there).unwrap();
    assert!(back.position().is_equal(&p.position(), 1e-9));

    let round = chain.multiplied(&inverse).unwrap();
    assert!(round.is_equal(&Matrix::identity(4), 1e-9));
}

#[test]
fn scaling_inverse_is_reciprocal() {
    let s = scaling(2.0, 4.0, 8.0);
    let inv = invert(&s).unwrap();
    assert_abs_diff_eq!(inv.value(0, 0), 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(inv.value(1, 1), 0.25, epsilon = 1e-12);
    assert_abs_diff_eq!(inv.value(2, 2), 0.125, epsilon = 1e-12);
}

#[test]
fn degenerate_scaling_is_singular() {
    let flat = scaling(1.0, 0.0, 1.0);
    assert!(matches!(
        invert(&flat).unwrap_err(),
        GeomError::Singular { .. }
    ));
}

#[test]
fn non_4x4_input_is_rejected() {
    let small = Matrix::identity(3);
    assert!(matches!(
        invert(&small).unwrap_err(),
        GeomError::ShapeMismatch(_)
    ));
    assert!(apply_point(&small, &Point::origin()).is_err());
    assert!(apply_direction(&small, &Direction::unit_x()).is_err());
}
