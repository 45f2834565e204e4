//! C ABI for the mage math core.
//!
//! Engine code (Unreal C++, Godot `GDExtension`, ...) links the `cdylib` or
//! `staticlib` and includes the generated `MageMathFFI.h`. `Vector3` crosses
//! the boundary as a plain `{ float x, y, z; }` struct.

mod error;
mod helpers;
mod vector;

pub use error::{mage_math_get_last_error, mage_math_get_last_error_code, MageMathErrorCode};
pub use vector::*;

pub use mage_math_core::Vector3;
