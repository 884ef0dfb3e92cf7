use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::os::raw::c_float;

use types::{component_range_panic, float_hash};

/// Mirror of the native `aiVector2D`. Field order and size are part of the
/// ABI: importer-owned buffers are reinterpreted in place as slices of this
/// type.
#[repr(C, packed)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2D {
    pub x: c_float,
    pub y: c_float,
}

impl Vector2D {
    pub fn new(x: f32, y: f32) -> Vector2D {
        Vector2D { x, y }
    }

    /// Rewrites both components.
    pub fn set(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Component at `index` (0 = x, 1 = y). Panics outside `0..2`.
    pub fn get(&self, index: usize) -> f32 {
        match index {
            0 => self.x,
            1 => self.y,
            _ => component_range_panic("Vector2D", index),
        }
    }

    /// Writes the component at `index` (0 = x, 1 = y). Panics outside `0..2`.
    pub fn set_component(&mut self, index: usize, value: f32) {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            _ => component_range_panic("Vector2D", index),
        }
    }

    /// Euclidean length, computed in single precision.
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Squared length; cheaper than `length` for comparisons.
    pub fn length_squared(&self) -> f32 {
        let Vector2D { x, y } = *self;
        x * x + y * y
    }

    pub fn dot(&self, other: &Vector2D) -> f32 {
        let Vector2D { x, y } = *self;
        x * other.x + y * other.y
    }

    /// Scales the vector in place to unit length by multiplying with the
    /// reciprocal of the current length. A zero-length vector propagates the
    /// IEEE infinity/NaN results, there is no guard.
    pub fn normalize(&mut self) {
        let inv_length = 1.0 / self.length();
        self.x *= inv_length;
        self.y *= inv_length;
    }

    /// Negates both components in place. The unary `-` operator is the pure
    /// counterpart that leaves the receiver untouched.
    pub fn negate(&mut self) {
        self.x = -self.x;
        self.y = -self.y;
    }

    /// Wrapping sum of the per-component hash codes. Equal vectors hash
    /// equal; no further distribution guarantees.
    pub fn hash_code(&self) -> i32 {
        let Vector2D { x, y } = *self;
        float_hash(x).wrapping_add(float_hash(y))
    }
}

impl Add for Vector2D {
    type Output = Vector2D;

    fn add(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2D {
    type Output = Vector2D;

    fn sub(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul for Vector2D {
    type Output = Vector2D;

    fn mul(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Mul<f32> for Vector2D {
    type Output = Vector2D;

    fn mul(self, scalar: f32) -> Vector2D {
        Vector2D::new(self.x * scalar, self.y * scalar)
    }
}

impl Mul<Vector2D> for f32 {
    type Output = Vector2D;

    fn mul(self, v: Vector2D) -> Vector2D {
        Vector2D::new(v.x * self, v.y * self)
    }
}

impl Div for Vector2D {
    type Output = Vector2D;

    fn div(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl Div<f32> for Vector2D {
    type Output = Vector2D;

    fn div(self, divisor: f32) -> Vector2D {
        Vector2D::new(self.x / divisor, self.y / divisor)
    }
}

impl Neg for Vector2D {
    type Output = Vector2D;

    fn neg(self) -> Vector2D {
        Vector2D::new(-self.x, -self.y)
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Vector2D { x, y } = *self;
        write!(f, "{{X:{} Y:{}}}", x, y)
    }
}
