extern crate assimp_interop;

use assimp_interop::*;
use std::f32;

#[test]
fn indexer() {
    let (x, y, z) = (1.0, 2.0, 3.0);
    let mut v = Vector3D::default();
    v.set_component(0, x);
    v.set_component(1, y);
    v.set_component(2, z);
    assert_eq!(v.get(0), x);
    assert_eq!(v.get(1), y);
    assert_eq!(v.get(2), z);
}

#[test]
#[should_panic(expected = "out of range for Vector3D")]
fn indexer_out_of_range() {
    let v = Vector3D::new(1.0, 2.0, 3.0);
    v.get(3);
}

#[test]
fn set() {
    let mut v = Vector3D::default();
    v.set(10.5, 109.21, -1.0);
    assert_eq!(v, Vector3D::new(10.5, 109.21, -1.0));
}

#[test]
fn equals() {
    let v1 = Vector3D::new(1.0, 2.0, 3.0);
    let v2 = Vector3D::new(1.0, 2.0, 3.0);
    let v3 = Vector3D::new(4.0, 5.0, 6.0);

    assert!(v1.eq(&v2));
    assert!(v1 == v2);
    assert!(v1 != v3);

    let nan = Vector3D::new(f32::NAN, 0.0, 0.0);
    assert!(nan != nan);
}

#[test]
fn length_and_length_squared() {
    let (x, y, z) = (2.0f32, -3.0f32, 6.0f32);
    let v = Vector3D::new(x, y, z);
    assert_eq!(v.length_squared(), 49.0);
    assert_eq!(v.length(), 7.0);
}

#[test]
fn negate_both_forms() {
    let mut v = Vector3D::new(2.0, 5.0, -7.0);
    let negated = -v;
    assert_eq!(negated, Vector3D::new(-2.0, -5.0, 7.0));
    assert_eq!(v, Vector3D::new(2.0, 5.0, -7.0));

    v.negate();
    assert_eq!(v, negated);
}

#[test]
fn normalize() {
    let mut v = Vector3D::new(0.0, 3.0, 4.0);
    v.normalize();
    let inv_length = 1.0f32 / 5.0;
    assert_eq!(
        v,
        Vector3D::new(0.0, 3.0 * inv_length, 4.0 * inv_length)
    );
}

#[test]
fn component_wise_operators() {
    let v1 = Vector3D::new(2.0, 5.0, 1.0);
    let v2 = Vector3D::new(10.0, 15.0, 4.0);
    assert_eq!(v1 + v2, Vector3D::new(12.0, 20.0, 5.0));
    assert_eq!(v1 - v2, Vector3D::new(-8.0, -10.0, -3.0));
    assert_eq!(v1 * v2, Vector3D::new(20.0, 75.0, 4.0));
    assert_eq!(v1 / v2, Vector3D::new(0.2, 5.0 / 15.0, 0.25));
}

#[test]
fn scalar_operators() {
    let v = Vector3D::new(2.0, 5.0, 1.0);
    assert_eq!(v * 25.0, Vector3D::new(50.0, 125.0, 25.0));
    assert_eq!(25.0 * v, v * 25.0);
    assert_eq!(v / 2.0, Vector3D::new(1.0, 2.5, 0.5));
}

#[test]
fn dot_and_cross() {
    let x = Vector3D::new(1.0, 0.0, 0.0);
    let y = Vector3D::new(0.0, 1.0, 0.0);
    assert_eq!(x.dot(&y), 0.0);
    assert_eq!(x.cross(&y), Vector3D::new(0.0, 0.0, 1.0));
    assert_eq!(y.cross(&x), Vector3D::new(0.0, 0.0, -1.0));

    let v1 = Vector3D::new(2.0, 5.0, 1.0);
    let v2 = Vector3D::new(10.0, 15.0, 4.0);
    assert_eq!(v1.dot(&v2), 99.0);
}

#[test]
fn from_vector2() {
    let v = Vector3D::from_vector2(Vector2D::new(1.0, 2.0), 3.0);
    assert_eq!(v, Vector3D::new(1.0, 2.0, 3.0));
}

#[test]
fn display() {
    let v = Vector3D::new(1.0, 2.5, -3.0);
    assert_eq!(format!("{}", v), "{X:1 Y:2.5 Z:-3}");
}
