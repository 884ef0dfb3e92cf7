//! Buffer views over importer-owned memory.
//!
//! The importer allocates arrays of the layout-exact types during an import
//! and frees them when the scene is released. The functions here expose such
//! an array as an ordinary slice without copying. The caller supplies the
//! element size the native headers declare for the buffer; construction fails
//! before any memory is touched if that size does not match the size this
//! build compiled the target type to (an ABI mismatch between binding and
//! library versions).
//!
//! A view is a plain reborrow of native memory: writes through a mutable view
//! are immediately visible to the native side. A view must not be used after
//! the matching release call; that is a caller obligation, nothing here
//! tracks the native allocation.

use std::mem;
use std::slice;

use texture::Texel;
use types::{Color3D, Color4D, Matrix3x3, Matrix4x4, Quaternion, Vector2D, Vector3D};

/// The declared element size of a native buffer does not match the size the
/// target type was compiled to. Nothing was read from the buffer.
#[derive(Debug, Fail, PartialEq)]
#[fail(
    display = "native element size ({} bytes) does not match the compiled size of the target type ({} bytes)",
    native_size, compiled_size
)]
pub struct ElementSizeMismatch {
    pub native_size: usize,
    pub compiled_size: usize,
}

/// Marker for value types whose memory layout matches the corresponding
/// native structure byte for byte.
///
/// Implementing this is a promise that a pointer into a native buffer of the
/// mirrored structure can be reinterpreted as a pointer to `Self`.
/// `NATIVE_SIZE` is the structure size the native headers document, checked
/// against `size_of::<Self>()` whenever a view is constructed.
pub unsafe trait NativeLayout: Copy {
    /// Size in bytes of the native counterpart structure.
    const NATIVE_SIZE: usize;
}

unsafe impl NativeLayout for Vector2D {
    const NATIVE_SIZE: usize = 8;
}

unsafe impl NativeLayout for Vector3D {
    const NATIVE_SIZE: usize = 12;
}

unsafe impl NativeLayout for Color3D {
    const NATIVE_SIZE: usize = 12;
}

unsafe impl NativeLayout for Color4D {
    const NATIVE_SIZE: usize = 16;
}

unsafe impl NativeLayout for Quaternion {
    const NATIVE_SIZE: usize = 16;
}

unsafe impl NativeLayout for Matrix3x3 {
    const NATIVE_SIZE: usize = 36;
}

unsafe impl NativeLayout for Matrix4x4 {
    const NATIVE_SIZE: usize = 64;
}

unsafe impl NativeLayout for Texel {
    const NATIVE_SIZE: usize = 4;
}

fn check_element_size<T: NativeLayout>(element_size: usize) -> Result<(), ElementSizeMismatch> {
    let compiled_size = mem::size_of::<T>();
    if element_size != compiled_size {
        error!(
            "refusing to map native buffer: element size {} vs compiled size {}",
            element_size, compiled_size
        );
        return Err(ElementSizeMismatch {
            native_size: element_size,
            compiled_size,
        });
    }
    Ok(())
}

/// Read-only view of `count` elements starting at `data`.
///
/// A null `data` or a zero `count` yields an empty slice. Unsafe because the
/// caller must guarantee that the buffer really holds `count` elements of
/// this layout and stays alive (unreleased) for the lifetime `'a`.
pub unsafe fn buffer_view<'a, T: NativeLayout>(
    data: *const T,
    count: usize,
    element_size: usize,
) -> Result<&'a [T], ElementSizeMismatch> {
    check_element_size::<T>(element_size)?;
    if data.is_null() || count == 0 {
        return Ok(&[]);
    }
    trace!("mapping native buffer: {} x {} bytes", count, element_size);
    Ok(slice::from_raw_parts(data, count))
}

/// Read/write view of `count` elements starting at `data`. Writes go straight
/// to the native memory; nothing is buffered or deferred. Same contract as
/// [`buffer_view`], plus exclusivity: no other view of the same buffer may be
/// live at the same time.
pub unsafe fn buffer_view_mut<'a, T: NativeLayout>(
    data: *mut T,
    count: usize,
    element_size: usize,
) -> Result<&'a mut [T], ElementSizeMismatch> {
    check_element_size::<T>(element_size)?;
    if data.is_null() || count == 0 {
        return Ok(&mut []);
    }
    trace!("mapping native buffer: {} x {} bytes (mut)", count, element_size);
    Ok(slice::from_raw_parts_mut(data, count))
}
