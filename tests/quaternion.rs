extern crate assimp_interop;

use assimp_interop::*;
use std::f32;

#[test]
fn identity() {
    let q = Quaternion::identity();
    assert_eq!(q, Quaternion::new(1.0, 0.0, 0.0, 0.0));
    assert_eq!(q, Quaternion::default());
    assert_eq!(q.length(), 1.0);
}

#[test]
fn indexer_is_w_first() {
    let mut q = Quaternion::identity();
    q.set(0.5, 1.0, 2.0, 3.0);
    assert_eq!(q.get(0), 0.5);
    assert_eq!(q.get(1), 1.0);
    assert_eq!(q.get(2), 2.0);
    assert_eq!(q.get(3), 3.0);
}

#[test]
#[should_panic(expected = "out of range for Quaternion")]
fn indexer_out_of_range() {
    let q = Quaternion::identity();
    q.get(4);
}

#[test]
fn equals() {
    let q1 = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let q2 = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    assert!(q1.eq(&q2));
    assert!(q1 == q2);
    assert!(q1 != Quaternion::identity());
    assert_eq!(q1.hash_code(), q2.hash_code());

    let nan = Quaternion::new(f32::NAN, 0.0, 0.0, 0.0);
    assert!(nan != nan);
}

#[test]
fn normalize() {
    // (2, 0, 0, 0) has length 2
    let mut q = Quaternion::new(2.0, 0.0, 0.0, 0.0);
    q.normalize();
    assert_eq!(q, Quaternion::identity());
}

#[test]
fn conjugate() {
    let mut q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    q.conjugate();
    assert_eq!(q, Quaternion::new(1.0, -2.0, -3.0, -4.0));
}

#[test]
fn hamilton_product() {
    let i = Quaternion::new(0.0, 1.0, 0.0, 0.0);
    let j = Quaternion::new(0.0, 0.0, 1.0, 0.0);
    let k = Quaternion::new(0.0, 0.0, 0.0, 1.0);

    assert_eq!(i * j, k);
    assert_eq!(j * i, Quaternion::new(0.0, 0.0, 0.0, -1.0));
    assert_eq!(i * i, Quaternion::new(-1.0, 0.0, 0.0, 0.0));

    let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(q * Quaternion::identity(), q);
    assert_eq!(Quaternion::identity() * q, q);
}

#[test]
fn product_is_pure() {
    let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let _ = q * q;
    assert_eq!(q, Quaternion::new(1.0, 2.0, 3.0, 4.0));
}

#[test]
fn display() {
    let q = Quaternion::new(1.0, 0.5, 0.0, -1.0);
    assert_eq!(format!("{}", q), "{W:1 X:0.5 Y:0 Z:-1}");
}
