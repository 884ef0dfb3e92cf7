use std::fmt;
use std::ops::{Add, Div, Mul, Sub};
use std::os::raw::c_float;

use types::{component_range_panic, float_hash, Color3D};

/// Mirror of the native `aiColor4D`: four normalized-range float channels.
/// The range is conventionally `[0, 1]` but never clamp-enforced.
#[repr(C, packed)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color4D {
    pub r: c_float,
    pub g: c_float,
    pub b: c_float,
    pub a: c_float,
}

impl Color4D {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Color4D {
        Color4D { r, g, b, a }
    }

    /// Extends an opaque RGB color with an explicit alpha channel.
    pub fn from_color3(c: Color3D, a: f32) -> Color4D {
        Color4D::new(c.r, c.g, c.b, a)
    }

    /// Rewrites all four channels.
    pub fn set(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.r = r;
        self.g = g;
        self.b = b;
        self.a = a;
    }

    /// Channel at `index` (0 = r, 1 = g, 2 = b, 3 = a). Panics outside `0..4`.
    pub fn get(&self, index: usize) -> f32 {
        match index {
            0 => self.r,
            1 => self.g,
            2 => self.b,
            3 => self.a,
            _ => component_range_panic("Color4D", index),
        }
    }

    /// Writes the channel at `index`. Panics outside `0..4`.
    pub fn set_component(&mut self, index: usize, value: f32) {
        match index {
            0 => self.r = value,
            1 => self.g = value,
            2 => self.b = value,
            3 => self.a = value,
            _ => component_range_panic("Color4D", index),
        }
    }

    pub fn hash_code(&self) -> i32 {
        let Color4D { r, g, b, a } = *self;
        float_hash(r)
            .wrapping_add(float_hash(g))
            .wrapping_add(float_hash(b))
            .wrapping_add(float_hash(a))
    }
}

impl Add for Color4D {
    type Output = Color4D;

    fn add(self, rhs: Color4D) -> Color4D {
        Color4D::new(
            self.r + rhs.r,
            self.g + rhs.g,
            self.b + rhs.b,
            self.a + rhs.a,
        )
    }
}

impl Sub for Color4D {
    type Output = Color4D;

    fn sub(self, rhs: Color4D) -> Color4D {
        Color4D::new(
            self.r - rhs.r,
            self.g - rhs.g,
            self.b - rhs.b,
            self.a - rhs.a,
        )
    }
}

impl Mul for Color4D {
    type Output = Color4D;

    fn mul(self, rhs: Color4D) -> Color4D {
        Color4D::new(
            self.r * rhs.r,
            self.g * rhs.g,
            self.b * rhs.b,
            self.a * rhs.a,
        )
    }
}

impl Mul<f32> for Color4D {
    type Output = Color4D;

    fn mul(self, scalar: f32) -> Color4D {
        Color4D::new(
            self.r * scalar,
            self.g * scalar,
            self.b * scalar,
            self.a * scalar,
        )
    }
}

impl Mul<Color4D> for f32 {
    type Output = Color4D;

    fn mul(self, c: Color4D) -> Color4D {
        Color4D::new(c.r * self, c.g * self, c.b * self, c.a * self)
    }
}

impl Div for Color4D {
    type Output = Color4D;

    fn div(self, rhs: Color4D) -> Color4D {
        Color4D::new(
            self.r / rhs.r,
            self.g / rhs.g,
            self.b / rhs.b,
            self.a / rhs.a,
        )
    }
}

impl Div<f32> for Color4D {
    type Output = Color4D;

    fn div(self, divisor: f32) -> Color4D {
        Color4D::new(
            self.r / divisor,
            self.g / divisor,
            self.b / divisor,
            self.a / divisor,
        )
    }
}

impl fmt::Display for Color4D {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Color4D { r, g, b, a } = *self;
        write!(f, "{{R:{} G:{} B:{} A:{}}}", r, g, b, a)
    }
}
