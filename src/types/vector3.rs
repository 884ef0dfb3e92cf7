use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::os::raw::c_float;

use types::{component_range_panic, float_hash, Vector2D};

/// Mirror of the native `aiVector3D`. Used for positions, normals, tangents
/// and texture coordinates; field order and size are part of the ABI.
#[repr(C, packed)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3D {
    pub x: c_float,
    pub y: c_float,
    pub z: c_float,
}

impl Vector3D {
    pub fn new(x: f32, y: f32, z: f32) -> Vector3D {
        Vector3D { x, y, z }
    }

    /// Extends a 2D vector with an explicit z component.
    pub fn from_vector2(v: Vector2D, z: f32) -> Vector3D {
        Vector3D::new(v.x, v.y, z)
    }

    /// Rewrites all three components.
    pub fn set(&mut self, x: f32, y: f32, z: f32) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    /// Component at `index` (0 = x, 1 = y, 2 = z). Panics outside `0..3`.
    pub fn get(&self, index: usize) -> f32 {
        match index {
            0 => self.x,
            1 => self.y,
            2 => self.z,
            _ => component_range_panic("Vector3D", index),
        }
    }

    /// Writes the component at `index`. Panics outside `0..3`.
    pub fn set_component(&mut self, index: usize, value: f32) {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            2 => self.z = value,
            _ => component_range_panic("Vector3D", index),
        }
    }

    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    pub fn length_squared(&self) -> f32 {
        let Vector3D { x, y, z } = *self;
        x * x + y * y + z * z
    }

    pub fn dot(&self, other: &Vector3D) -> f32 {
        let Vector3D { x, y, z } = *self;
        x * other.x + y * other.y + z * other.z
    }

    pub fn cross(&self, other: &Vector3D) -> Vector3D {
        let Vector3D { x, y, z } = *self;
        let Vector3D {
            x: ox,
            y: oy,
            z: oz,
        } = *other;
        Vector3D::new(y * oz - z * oy, z * ox - x * oz, x * oy - y * ox)
    }

    /// In-place normalization by the reciprocal length; zero length
    /// propagates IEEE infinity/NaN, there is no guard.
    pub fn normalize(&mut self) {
        let inv_length = 1.0 / self.length();
        self.x *= inv_length;
        self.y *= inv_length;
        self.z *= inv_length;
    }

    /// Negates every component in place; see the pure unary `-` for the
    /// non-mutating form.
    pub fn negate(&mut self) {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
    }

    pub fn hash_code(&self) -> i32 {
        let Vector3D { x, y, z } = *self;
        float_hash(x)
            .wrapping_add(float_hash(y))
            .wrapping_add(float_hash(z))
    }
}

impl Add for Vector3D {
    type Output = Vector3D;

    fn add(self, rhs: Vector3D) -> Vector3D {
        Vector3D::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3D {
    type Output = Vector3D;

    fn sub(self, rhs: Vector3D) -> Vector3D {
        Vector3D::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul for Vector3D {
    type Output = Vector3D;

    fn mul(self, rhs: Vector3D) -> Vector3D {
        Vector3D::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Mul<f32> for Vector3D {
    type Output = Vector3D;

    fn mul(self, scalar: f32) -> Vector3D {
        Vector3D::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Mul<Vector3D> for f32 {
    type Output = Vector3D;

    fn mul(self, v: Vector3D) -> Vector3D {
        Vector3D::new(v.x * self, v.y * self, v.z * self)
    }
}

impl Div for Vector3D {
    type Output = Vector3D;

    fn div(self, rhs: Vector3D) -> Vector3D {
        Vector3D::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

impl Div<f32> for Vector3D {
    type Output = Vector3D;

    fn div(self, divisor: f32) -> Vector3D {
        Vector3D::new(self.x / divisor, self.y / divisor, self.z / divisor)
    }
}

impl Neg for Vector3D {
    type Output = Vector3D;

    fn neg(self) -> Vector3D {
        Vector3D::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Vector3D {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Vector3D { x, y, z } = *self;
        write!(f, "{{X:{} Y:{} Z:{}}}", x, y, z)
    }
}
