use std::fmt;
use std::os::raw::{c_char, c_uint};

use interop::{buffer_view, buffer_view_mut, ElementSizeMismatch, NativeLayout};
use types::Color4D;

/// A single pixel of an embedded texture, in the native ARGB8888 buffer
/// layout: the byte order B, G, R, A is part of the ABI, not an
/// implementation detail.
#[repr(C, packed)]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Texel {
    pub b: u8,
    pub g: u8,
    pub r: u8,
    pub a: u8,
}

impl Texel {
    pub fn new(b: u8, g: u8, r: u8, a: u8) -> Texel {
        Texel { b, g, r, a }
    }

    /// Wrapping sum of the channel values, consistent with equality.
    pub fn hash_code(&self) -> i32 {
        (self.b as i32)
            .wrapping_add(self.g as i32)
            .wrapping_add(self.r as i32)
            .wrapping_add(self.a as i32)
    }
}

/// Pure per-channel widening: each byte divided by 255. Lossless in this
/// direction; no inverse is defined.
impl From<Texel> for Color4D {
    fn from(texel: Texel) -> Color4D {
        Color4D::new(
            texel.r as f32 / 255.0,
            texel.g as f32 / 255.0,
            texel.b as f32 / 255.0,
            texel.a as f32 / 255.0,
        )
    }
}

impl fmt::Display for Texel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Texel { b, g, r, a } = *self;
        write!(f, "{{B:{} G:{} R:{} A:{}}}", b, g, r, a)
    }
}

/// Explicit-copy conversion of a whole pixel buffer. Used where the consumer
/// wants float colors; the packed form stays untouched in native memory.
pub fn texels_to_colors(texels: &[Texel]) -> Vec<Color4D> {
    texels.iter().map(|&t| Color4D::from(t)).collect()
}

/// Mirror of the native `aiTexture` header. `data` points at `width * height`
/// texels owned by the importer (or at compressed bytes when `height` is 0,
/// in which case `width` is the byte count and `format_hint` names the
/// codec).
#[repr(C)]
pub struct Texture {
    pub width: c_uint,
    pub height: c_uint,
    pub format_hint: [c_char; 4],
    pub data: *mut Texel,
}

impl Texture {
    pub fn is_compressed(&self) -> bool {
        self.height == 0
    }

    /// Zero-copy view of the uncompressed pixel data. Valid only until the
    /// owning scene is released.
    pub fn texels(&self) -> Result<&[Texel], ElementSizeMismatch> {
        let count = if self.is_compressed() {
            0
        } else {
            self.width as usize * self.height as usize
        };
        unsafe { buffer_view(self.data, count, Texel::NATIVE_SIZE) }
    }

    /// Mutable variant of [`texels`]; writes land directly in the native
    /// buffer.
    pub fn texels_mut(&mut self) -> Result<&mut [Texel], ElementSizeMismatch> {
        let count = if self.is_compressed() {
            0
        } else {
            self.width as usize * self.height as usize
        };
        unsafe { buffer_view_mut(self.data, count, Texel::NATIVE_SIZE) }
    }
}
