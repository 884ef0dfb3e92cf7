extern crate assimp_interop;

use assimp_interop::*;
use std::mem;

#[test]
fn compiled_sizes_match_native_layout() {
    assert_eq!(mem::size_of::<Vector2D>(), Vector2D::NATIVE_SIZE);
    assert_eq!(mem::size_of::<Vector3D>(), Vector3D::NATIVE_SIZE);
    assert_eq!(mem::size_of::<Color3D>(), Color3D::NATIVE_SIZE);
    assert_eq!(mem::size_of::<Color4D>(), Color4D::NATIVE_SIZE);
    assert_eq!(mem::size_of::<Quaternion>(), Quaternion::NATIVE_SIZE);
    assert_eq!(mem::size_of::<Matrix3x3>(), Matrix3x3::NATIVE_SIZE);
    assert_eq!(mem::size_of::<Matrix4x4>(), Matrix4x4::NATIVE_SIZE);
    assert_eq!(mem::size_of::<Texel>(), Texel::NATIVE_SIZE);
}

#[test]
fn view_over_buffer() {
    // a heap allocation standing in for an importer-owned vertex buffer
    let buf = vec![
        Vector3D::new(1.0, 2.0, 3.0),
        Vector3D::new(4.0, 5.0, 6.0),
        Vector3D::new(7.0, 8.0, 9.0),
    ];
    let view = unsafe { buffer_view(buf.as_ptr(), buf.len(), Vector3D::NATIVE_SIZE) }.unwrap();
    assert_eq!(view.len(), 3);
    assert_eq!(view[1], Vector3D::new(4.0, 5.0, 6.0));
    assert_eq!(view[2].get(2), 9.0);
}

#[test]
fn element_size_mismatch_fails_before_any_read() {
    // dangling, never-dereferenced pointer: the size check must reject the
    // view without touching memory
    let dangling = mem::align_of::<Vector3D>() as *const Vector3D;
    let err = unsafe { buffer_view(dangling, 1024, 16) }.unwrap_err();
    assert_eq!(
        err,
        ElementSizeMismatch {
            native_size: 16,
            compiled_size: 12,
        }
    );
}

#[test]
fn null_or_empty_buffer_views_as_empty_slice() {
    use std::ptr;
    let view =
        unsafe { buffer_view::<Vector2D>(ptr::null(), 0, Vector2D::NATIVE_SIZE) }.unwrap();
    assert!(view.is_empty());

    let view =
        unsafe { buffer_view::<Vector2D>(ptr::null(), 16, Vector2D::NATIVE_SIZE) }.unwrap();
    assert!(view.is_empty());
}

#[test]
fn writes_through_view_land_in_the_buffer() {
    let mut buf = vec![Texel::new(0, 0, 0, 0); 4];
    {
        let view =
            unsafe { buffer_view_mut(buf.as_mut_ptr(), buf.len(), Texel::NATIVE_SIZE) }.unwrap();
        view[2] = Texel::new(1, 2, 3, 4);
    }
    // not buffered or deferred: the underlying storage changed
    assert_eq!(buf[2], Texel::new(1, 2, 3, 4));
    assert_eq!(buf[3], Texel::new(0, 0, 0, 0));
}

#[test]
fn texture_exposes_its_texels() {
    let mut pixels = vec![
        Texel::new(0, 0, 255, 255),
        Texel::new(0, 255, 0, 255),
        Texel::new(255, 0, 0, 255),
        Texel::new(0, 0, 0, 0),
    ];
    let mut tex = Texture {
        width: 2,
        height: 2,
        format_hint: [0; 4],
        data: pixels.as_mut_ptr(),
    };
    assert!(!tex.is_compressed());

    {
        let texels = tex.texels().unwrap();
        assert_eq!(texels.len(), 4);
        assert_eq!(Color4D::from(texels[0]), Color4D::new(1.0, 0.0, 0.0, 1.0));
    }

    {
        let texels = tex.texels_mut().unwrap();
        texels[3] = Texel::new(9, 9, 9, 9);
    }
    assert_eq!(pixels[3], Texel::new(9, 9, 9, 9));
}
