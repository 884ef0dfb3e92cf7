use std::fmt;
use std::ops::Mul;
use std::os::raw::c_float;

use types::{component_range_panic, float_hash};

/// Mirror of the native `aiMatrix3x3`, row-major: `a1..a3` is the first row.
#[repr(C, packed)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix3x3 {
    pub a1: c_float,
    pub a2: c_float,
    pub a3: c_float,
    pub b1: c_float,
    pub b2: c_float,
    pub b3: c_float,
    pub c1: c_float,
    pub c2: c_float,
    pub c3: c_float,
}

impl Matrix3x3 {
    pub fn new(
        a1: f32,
        a2: f32,
        a3: f32,
        b1: f32,
        b2: f32,
        b3: f32,
        c1: f32,
        c2: f32,
        c3: f32,
    ) -> Matrix3x3 {
        Matrix3x3 {
            a1,
            a2,
            a3,
            b1,
            b2,
            b3,
            c1,
            c2,
            c3,
        }
    }

    pub fn identity() -> Matrix3x3 {
        Matrix3x3::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0)
    }

    /// Cell at `(row, col)`, both zero-based. Panics outside `0..3`.
    pub fn get(&self, row: usize, col: usize) -> f32 {
        match (row, col) {
            (0, 0) => self.a1,
            (0, 1) => self.a2,
            (0, 2) => self.a3,
            (1, 0) => self.b1,
            (1, 1) => self.b2,
            (1, 2) => self.b3,
            (2, 0) => self.c1,
            (2, 1) => self.c2,
            (2, 2) => self.c3,
            _ => component_range_panic("Matrix3x3", row * 3 + col),
        }
    }

    /// Writes the cell at `(row, col)`. Panics outside `0..3`.
    pub fn set_cell(&mut self, row: usize, col: usize, value: f32) {
        match (row, col) {
            (0, 0) => self.a1 = value,
            (0, 1) => self.a2 = value,
            (0, 2) => self.a3 = value,
            (1, 0) => self.b1 = value,
            (1, 1) => self.b2 = value,
            (1, 2) => self.b3 = value,
            (2, 0) => self.c1 = value,
            (2, 1) => self.c2 = value,
            (2, 2) => self.c3 = value,
            _ => component_range_panic("Matrix3x3", row * 3 + col),
        }
    }

    /// Transposes in place.
    pub fn transpose(&mut self) {
        let t = self.a2;
        self.a2 = self.b1;
        self.b1 = t;
        let t = self.a3;
        self.a3 = self.c1;
        self.c1 = t;
        let t = self.b3;
        self.b3 = self.c2;
        self.c2 = t;
    }

    pub fn hash_code(&self) -> i32 {
        let m = *self;
        let mut hash = 0i32;
        for &c in &[m.a1, m.a2, m.a3, m.b1, m.b2, m.b3, m.c1, m.c2, m.c3] {
            hash = hash.wrapping_add(float_hash(c));
        }
        hash
    }
}

impl Default for Matrix3x3 {
    fn default() -> Matrix3x3 {
        Matrix3x3::identity()
    }
}

/// Row-major matrix product.
impl Mul for Matrix3x3 {
    type Output = Matrix3x3;

    fn mul(self, rhs: Matrix3x3) -> Matrix3x3 {
        let mut out = Matrix3x3::identity();
        for row in 0..3 {
            for col in 0..3 {
                let mut sum = 0.0;
                for k in 0..3 {
                    sum += self.get(row, k) * rhs.get(k, col);
                }
                out.set_cell(row, col, sum);
            }
        }
        out
    }
}

impl fmt::Display for Matrix3x3 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let m = *self;
        let (a1, a2, a3) = (m.a1, m.a2, m.a3);
        let (b1, b2, b3) = (m.b1, m.b2, m.b3);
        let (c1, c2, c3) = (m.c1, m.c2, m.c3);
        write!(
            f,
            "{{[A1:{} A2:{} A3:{}] [B1:{} B2:{} B3:{}] [C1:{} C2:{} C3:{}]}}",
            a1, a2, a3, b1, b2, b3, c1, c2, c3
        )
    }
}
