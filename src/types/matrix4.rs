use std::fmt;
use std::ops::Mul;
use std::os::raw::c_float;

use types::{component_range_panic, float_hash, Matrix3x3};

/// Mirror of the native `aiMatrix4x4`, row-major: `a1..a4` is the first row.
/// Node transforms are stored in this layout and reinterpreted in place.
#[repr(C, packed)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix4x4 {
    pub a1: c_float,
    pub a2: c_float,
    pub a3: c_float,
    pub a4: c_float,
    pub b1: c_float,
    pub b2: c_float,
    pub b3: c_float,
    pub b4: c_float,
    pub c1: c_float,
    pub c2: c_float,
    pub c3: c_float,
    pub c4: c_float,
    pub d1: c_float,
    pub d2: c_float,
    pub d3: c_float,
    pub d4: c_float,
}

impl Matrix4x4 {
    pub fn new(
        a1: f32,
        a2: f32,
        a3: f32,
        a4: f32,
        b1: f32,
        b2: f32,
        b3: f32,
        b4: f32,
        c1: f32,
        c2: f32,
        c3: f32,
        c4: f32,
        d1: f32,
        d2: f32,
        d3: f32,
        d4: f32,
    ) -> Matrix4x4 {
        Matrix4x4 {
            a1,
            a2,
            a3,
            a4,
            b1,
            b2,
            b3,
            b4,
            c1,
            c2,
            c3,
            c4,
            d1,
            d2,
            d3,
            d4,
        }
    }

    pub fn identity() -> Matrix4x4 {
        Matrix4x4::new(
            1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Upper-left 3x3 rotation/scale block extended with an identity fourth
    /// row and column.
    pub fn from_matrix3(m: &Matrix3x3) -> Matrix4x4 {
        let m = *m;
        Matrix4x4::new(
            m.a1, m.a2, m.a3, 0.0, m.b1, m.b2, m.b3, 0.0, m.c1, m.c2, m.c3, 0.0, 0.0, 0.0, 0.0,
            1.0,
        )
    }

    /// Cell at `(row, col)`, both zero-based. Panics outside `0..4`.
    pub fn get(&self, row: usize, col: usize) -> f32 {
        match (row, col) {
            (0, 0) => self.a1,
            (0, 1) => self.a2,
            (0, 2) => self.a3,
            (0, 3) => self.a4,
            (1, 0) => self.b1,
            (1, 1) => self.b2,
            (1, 2) => self.b3,
            (1, 3) => self.b4,
            (2, 0) => self.c1,
            (2, 1) => self.c2,
            (2, 2) => self.c3,
            (2, 3) => self.c4,
            (3, 0) => self.d1,
            (3, 1) => self.d2,
            (3, 2) => self.d3,
            (3, 3) => self.d4,
            _ => component_range_panic("Matrix4x4", row * 4 + col),
        }
    }

    /// Writes the cell at `(row, col)`. Panics outside `0..4`.
    pub fn set_cell(&mut self, row: usize, col: usize, value: f32) {
        match (row, col) {
            (0, 0) => self.a1 = value,
            (0, 1) => self.a2 = value,
            (0, 2) => self.a3 = value,
            (0, 3) => self.a4 = value,
            (1, 0) => self.b1 = value,
            (1, 1) => self.b2 = value,
            (1, 2) => self.b3 = value,
            (1, 3) => self.b4 = value,
            (2, 0) => self.c1 = value,
            (2, 1) => self.c2 = value,
            (2, 2) => self.c3 = value,
            (2, 3) => self.c4 = value,
            (3, 0) => self.d1 = value,
            (3, 1) => self.d2 = value,
            (3, 2) => self.d3 = value,
            (3, 3) => self.d4 = value,
            _ => component_range_panic("Matrix4x4", row * 4 + col),
        }
    }

    /// Transposes in place.
    pub fn transpose(&mut self) {
        for row in 0..4 {
            for col in (row + 1)..4 {
                let t = self.get(row, col);
                self.set_cell(row, col, self.get(col, row));
                self.set_cell(col, row, t);
            }
        }
    }

    pub fn hash_code(&self) -> i32 {
        let m = *self;
        let components = [
            m.a1, m.a2, m.a3, m.a4, m.b1, m.b2, m.b3, m.b4, m.c1, m.c2, m.c3, m.c4, m.d1, m.d2,
            m.d3, m.d4,
        ];
        let mut hash = 0i32;
        for &c in &components {
            hash = hash.wrapping_add(float_hash(c));
        }
        hash
    }
}

impl Default for Matrix4x4 {
    fn default() -> Matrix4x4 {
        Matrix4x4::identity()
    }
}

/// Row-major matrix product.
impl Mul for Matrix4x4 {
    type Output = Matrix4x4;

    fn mul(self, rhs: Matrix4x4) -> Matrix4x4 {
        let mut out = Matrix4x4::identity();
        for row in 0..4 {
            for col in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.get(row, k) * rhs.get(k, col);
                }
                out.set_cell(row, col, sum);
            }
        }
        out
    }
}

impl fmt::Display for Matrix4x4 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let m = *self;
        let (a1, a2, a3, a4) = (m.a1, m.a2, m.a3, m.a4);
        let (b1, b2, b3, b4) = (m.b1, m.b2, m.b3, m.b4);
        let (c1, c2, c3, c4) = (m.c1, m.c2, m.c3, m.c4);
        let (d1, d2, d3, d4) = (m.d1, m.d2, m.d3, m.d4);
        write!(
            f,
            "{{[A1:{} A2:{} A3:{} A4:{}] [B1:{} B2:{} B3:{} B4:{}] \
             [C1:{} C2:{} C3:{} C4:{}] [D1:{} D2:{} D3:{} D4:{}]}}",
            a1, a2, a3, a4, b1, b2, b3, b4, c1, c2, c3, c4, d1, d2, d3, d4
        )
    }
}
