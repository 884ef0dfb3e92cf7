//! The native operations this layer consumes.
//!
//! The importer owns every buffer it hands out: it allocates them while
//! `aiImportFile` runs and frees them in `aiReleaseImport`, which must be
//! called exactly once per successful import. This layer never frees native
//! memory itself, and every view constructed over a scene's buffers is
//! invalidated the moment the scene is released. Using a view after that is
//! undefined; the binding does not (and by design cannot cheaply) guard
//! against it.

use std::os::raw::{c_char, c_uint};

/// Opaque handle to an import result. The full scene graph layout belongs to
/// the higher-level binding; this layer only needs an address to release.
#[repr(C)]
pub struct AiScene {
    _opaque: [u8; 0],
}

extern "C" {
    /// Imports the file at `file`, allocating the scene and all of its
    /// buffers on the native side. Returns null on failure.
    pub fn aiImportFile(file: *const c_char, flags: c_uint) -> *const AiScene;

    /// Frees a scene returned by [`aiImportFile`] and every buffer reachable
    /// from it. Call exactly once per successful import.
    pub fn aiReleaseImport(scene: *const AiScene);
}
