//! Demo of the geometry toolkit: vectors, points, matrices, transforms.

use geom3::{
    apply_direction, apply_point, compose, invert, rotation_z, scaling, translation, Direction,
    Matrix, Point,
};
use std::f64::consts::PI;

fn main() -> geom3::Result<()> {
    println!("=== geom3 demo ===\n");

    // Direction arithmetic
    println!("1. Directions:");
    let a = Direction::new(1.0, 2.0, 3.0);
    let b = Direction::new(4.0, 5.0, 6.0);
    println!("  a = {}", a);
    println!("  b = {}", b);
    println!("  a + b = {}", a + b);
    println!("  a - b = {}", a - b);
    println!("  a * 2 = {}", a * 2.0);
    println!("  a / 2 = {}", a.divided(2.0)?);
    println!("  |a| = {:.4}", a.magnitude());
    println!("  a normalized = {}", a.normalized()?);
    println!("  a . b = {}", a.dot(&b));
    println!("  a x b = {}", a.crossed(&b));

    // Points
    println!("\n2. Points:");
    let p = Point::new(Direction::new(1.0, 1.0, 1.0), Direction::new(0.5, 0.0, 0.0));
    let q = Point::from_position(Direction::new(3.0, 4.0, 5.0));
    println!("  p = {}", p);
    println!("  q = {}", q);
    println!("  p . q = {}", p.dot(&q));
    println!("  q - p = {}", q - p);

    // Matrices
    println!("\n3. Matrices:");
    let m = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
    let i = Matrix::identity(2);
    println!("  M =\n{}", m);
    println!("  M * I =\n{}", m.multiplied(&i)?);
    println!("  M * M =\n{}", m.multiplied(&m)?);
    println!("  det(M) = {}", m.determinant()?);

    // Homogeneous transforms
    println!("\n4. Transforms:");
    let chain = compose(&[
        translation(1.0, 0.0, 0.0),
        rotation_z(PI / 2.0),
        scaling(2.0, 2.0, 2.0),
    ])?;
    let moved = apply_point(&chain, &Point::origin())?;
    let turned = apply_direction(&chain, &Direction::unit_x())?;
    println!("  chain applied to origin point: {}", moved);
    println!("  chain applied to unit-x direction: {}", turned);
    let back = apply_point(&invert(&chain)?, &moved)?;
    println!("  inverse chain brings it back: {}", back);

    Ok(())
}
