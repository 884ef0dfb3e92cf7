//! Interop value layer for the assimp C API.
//!
//! The types in here mirror the native structures field for field so that
//! buffers allocated by the importer can be reinterpreted in place as slices
//! of these values, without a per-element marshaling copy. On top of the raw
//! layout they carry ordinary value semantics: component-wise equality,
//! arithmetic operators, hashing and diagnostic formatting.

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;

pub use cimport::*;
pub use interop::*;
pub use texture::*;
pub use types::*;

mod cimport;
mod interop;
mod texture;
mod types;
