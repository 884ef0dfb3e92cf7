use std::fmt;
use std::ops::{Add, Div, Mul, Sub};
use std::os::raw::c_float;

use types::{component_range_panic, float_hash};

/// Mirror of the native `aiColor3D`, an opaque RGB color.
#[repr(C, packed)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color3D {
    pub r: c_float,
    pub g: c_float,
    pub b: c_float,
}

impl Color3D {
    pub fn new(r: f32, g: f32, b: f32) -> Color3D {
        Color3D { r, g, b }
    }

    pub fn set(&mut self, r: f32, g: f32, b: f32) {
        self.r = r;
        self.g = g;
        self.b = b;
    }

    /// Channel at `index` (0 = r, 1 = g, 2 = b). Panics outside `0..3`.
    pub fn get(&self, index: usize) -> f32 {
        match index {
            0 => self.r,
            1 => self.g,
            2 => self.b,
            _ => component_range_panic("Color3D", index),
        }
    }

    pub fn set_component(&mut self, index: usize, value: f32) {
        match index {
            0 => self.r = value,
            1 => self.g = value,
            2 => self.b = value,
            _ => component_range_panic("Color3D", index),
        }
    }

    pub fn hash_code(&self) -> i32 {
        let Color3D { r, g, b } = *self;
        float_hash(r)
            .wrapping_add(float_hash(g))
            .wrapping_add(float_hash(b))
    }
}

impl Add for Color3D {
    type Output = Color3D;

    fn add(self, rhs: Color3D) -> Color3D {
        Color3D::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl Sub for Color3D {
    type Output = Color3D;

    fn sub(self, rhs: Color3D) -> Color3D {
        Color3D::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b)
    }
}

impl Mul for Color3D {
    type Output = Color3D;

    fn mul(self, rhs: Color3D) -> Color3D {
        Color3D::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b)
    }
}

impl Mul<f32> for Color3D {
    type Output = Color3D;

    fn mul(self, scalar: f32) -> Color3D {
        Color3D::new(self.r * scalar, self.g * scalar, self.b * scalar)
    }
}

impl Mul<Color3D> for f32 {
    type Output = Color3D;

    fn mul(self, c: Color3D) -> Color3D {
        Color3D::new(c.r * self, c.g * self, c.b * self)
    }
}

impl Div for Color3D {
    type Output = Color3D;

    fn div(self, rhs: Color3D) -> Color3D {
        Color3D::new(self.r / rhs.r, self.g / rhs.g, self.b / rhs.b)
    }
}

impl Div<f32> for Color3D {
    type Output = Color3D;

    fn div(self, divisor: f32) -> Color3D {
        Color3D::new(self.r / divisor, self.g / divisor, self.b / divisor)
    }
}

impl fmt::Display for Color3D {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Color3D { r, g, b } = *self;
        write!(f, "{{R:{} G:{} B:{}}}", r, g, b)
    }
}
