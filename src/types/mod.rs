// Reexport submodules
pub use self::color3::*;
pub use self::color4::*;
pub use self::matrix3::*;
pub use self::matrix4::*;
pub use self::quaternion::*;
pub use self::vector2::*;
pub use self::vector3::*;

mod color3;
mod color4;
mod matrix3;
mod matrix4;
mod quaternion;
mod vector2;
mod vector3;

/// Hash code of a single float component: the raw bit pattern, with both
/// zeroes collapsed so that `0.0 == -0.0` implies equal hashes. Per-type hash
/// codes are the wrapping sum of these, which is weak on distribution but
/// stable, and equality-consistent.
pub(crate) fn float_hash(v: f32) -> i32 {
    if v == 0.0 {
        0
    } else {
        v.to_bits() as i32
    }
}

pub(crate) fn component_range_panic(type_name: &str, index: usize) -> ! {
    panic!(
        "component index {} is out of range for {}",
        index, type_name
    );
}
