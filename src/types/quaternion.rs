use std::fmt;
use std::ops::Mul;
use std::os::raw::c_float;

use types::{component_range_panic, float_hash};

/// Mirror of the native `aiQuaternion`. Note the native component order:
/// w comes first.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quaternion {
    pub w: c_float,
    pub x: c_float,
    pub y: c_float,
    pub z: c_float,
}

impl Quaternion {
    pub fn new(w: f32, x: f32, y: f32, z: f32) -> Quaternion {
        Quaternion { w, x, y, z }
    }

    /// The identity rotation.
    pub fn identity() -> Quaternion {
        Quaternion::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Rewrites all four components.
    pub fn set(&mut self, w: f32, x: f32, y: f32, z: f32) {
        self.w = w;
        self.x = x;
        self.y = y;
        self.z = z;
    }

    /// Component at `index` (0 = w, 1 = x, 2 = y, 3 = z). Panics outside
    /// `0..4`.
    pub fn get(&self, index: usize) -> f32 {
        match index {
            0 => self.w,
            1 => self.x,
            2 => self.y,
            3 => self.z,
            _ => component_range_panic("Quaternion", index),
        }
    }

    pub fn set_component(&mut self, index: usize, value: f32) {
        match index {
            0 => self.w = value,
            1 => self.x = value,
            2 => self.y = value,
            3 => self.z = value,
            _ => component_range_panic("Quaternion", index),
        }
    }

    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    pub fn length_squared(&self) -> f32 {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// In-place normalization over all four components by the reciprocal
    /// length; a zero-length quaternion propagates IEEE infinity/NaN.
    pub fn normalize(&mut self) {
        let inv_length = 1.0 / self.length();
        self.w *= inv_length;
        self.x *= inv_length;
        self.y *= inv_length;
        self.z *= inv_length;
    }

    /// Conjugates in place: negates the vector part, leaving w untouched.
    pub fn conjugate(&mut self) {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
    }

    pub fn hash_code(&self) -> i32 {
        float_hash(self.w)
            .wrapping_add(float_hash(self.x))
            .wrapping_add(float_hash(self.y))
            .wrapping_add(float_hash(self.z))
    }
}

impl Default for Quaternion {
    fn default() -> Quaternion {
        Quaternion::identity()
    }
}

/// Hamilton product; rotation composition, not component-wise.
impl Mul for Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: Quaternion) -> Quaternion {
        Quaternion::new(
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y + self.y * rhs.w + self.z * rhs.x - self.x * rhs.z,
            self.w * rhs.z + self.z * rhs.w + self.x * rhs.y - self.y * rhs.x,
        )
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{{W:{} X:{} Y:{} Z:{}}}",
            self.w, self.x, self.y, self.z
        )
    }
}
