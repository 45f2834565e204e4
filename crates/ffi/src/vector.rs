//! C ABI over `Vector3`.
//!
//! Value-only queries take and return `Vector3` by value. Functions that
//! mutate take pointers and return `MageMathErrorCode`; on failure the reason
//! is available from `mage_math_get_last_error()`.
//!
//! Pointer arguments may alias each other. Every function copies its inputs
//! before writing any output.

use mage_math_core::Vector3;

use crate::error::{DefaultMageMathError, MageMathErrorCode};
use crate::helpers::{handle_ffi_result_error, read_vector, vector_mut};

/// Construct a vector from components.
#[no_mangle]
pub extern "C" fn mage_vec3_new(x: f32, y: f32, z: f32) -> Vector3 {
    Vector3::new(x, y, z)
}

/// The zero vector.
#[no_mangle]
pub extern "C" fn mage_vec3_zero() -> Vector3 {
    Vector3::ZERO
}

/// Dot product of `a` and `b`.
#[no_mangle]
pub extern "C" fn mage_vec3_dot(a: Vector3, b: Vector3) -> f32 {
    a.dot(&b)
}

/// Euclidean length of `v`.
#[no_mangle]
pub extern "C" fn mage_vec3_magnitude(v: Vector3) -> f32 {
    v.magnitude()
}

/// Euclidean distance between `a` and `b`.
#[no_mangle]
pub extern "C" fn mage_vec3_distance(a: Vector3, b: Vector3) -> f32 {
    a.distance(&b)
}

/// Exact componentwise equality. No tolerance is applied.
#[no_mangle]
pub extern "C" fn mage_vec3_equals(a: Vector3, b: Vector3) -> bool {
    a.equals(&b)
}

/// Classify `point` against a viewer at `position` looking along `orientation`.
///
/// Returns
/// - `-1` if the point is left of the view direction
/// - `1` if it is right
/// - `0` if it lies on the view axis, the viewer looks straight along the up
///   axis, or `orientation` is the zero vector
#[no_mangle]
pub extern "C" fn mage_vec3_left_or_right_of_view(
    point: Vector3,
    position: Vector3,
    orientation: Vector3,
) -> i32 {
    point.left_or_right_of_view(&position, &orientation).as_i32()
}

/// Write `a × b` into `out`.
///
/// `out` may point at `a` or `b`.
///
/// Returns
/// - `MageMathErrorCode::Ok` on success
/// - `MageMathErrorCode::NullPointer` if any pointer is null (`out` untouched)
///
/// # Safety
/// Non-null pointers must be valid and properly aligned.
#[no_mangle]
pub unsafe extern "C" fn mage_vec3_cross(
    a: *const Vector3,
    b: *const Vector3,
    out: *mut Vector3,
) -> MageMathErrorCode {
    handle_ffi_result_error(|| {
        let a = read_vector(a, "a")?;
        let b = read_vector(b, "b")?;
        let out = vector_mut(out, "out")?;
        a.cross_into(&b, out);
        Ok(())
    })
}

/// Normalize `v` in place.
///
/// - `out_length` (optional) receives the length before normalization. If
///   null, ignored.
///
/// Returns
/// - `MageMathErrorCode::Ok` on success
/// - `MageMathErrorCode::NullPointer` if `v` is null
/// - `MageMathErrorCode::ZeroLengthVector` if `v` is the zero vector
/// - `MageMathErrorCode::NonFiniteVector` if the length of `v` is not finite
///
/// `v` is left unchanged on error.
///
/// # Safety
/// `v` must be null or valid for reads and writes; `out_length` must be null
/// or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn mage_vec3_normalize(
    v: *mut Vector3,
    out_length: *mut f32,
) -> MageMathErrorCode {
    handle_ffi_result_error(|| {
        // Normalize a copy so `out_length` may point into `*v`
        let mut unit = read_vector(v, "v")?;
        let length = unit
            .try_normalize()
            .map_err(|e| DefaultMageMathError::from_vector_error("v", e))?;
        *vector_mut(v, "v")? = unit;
        if !out_length.is_null() {
            *out_length = length;
        }
        Ok(())
    })
}

/// Multiply every component of `v` by `multiplier`.
///
/// # Safety
/// `v` must be null or valid for reads and writes.
#[no_mangle]
pub unsafe extern "C" fn mage_vec3_scalar_multiply(
    v: *mut Vector3,
    multiplier: f32,
) -> MageMathErrorCode {
    handle_ffi_result_error(|| {
        vector_mut(v, "v")?.scalar_multiply(multiplier);
        Ok(())
    })
}

/// `target += other`. `other` may point at `target`.
///
/// # Safety
/// Non-null pointers must be valid and properly aligned.
#[no_mangle]
pub unsafe extern "C" fn mage_vec3_add(
    target: *mut Vector3,
    other: *const Vector3,
) -> MageMathErrorCode {
    handle_ffi_result_error(|| {
        let other = read_vector(other, "other")?;
        vector_mut(target, "target")?.add_vector(&other);
        Ok(())
    })
}

/// `target -= other`. `other` may point at `target`.
///
/// # Safety
/// Non-null pointers must be valid and properly aligned.
#[no_mangle]
pub unsafe extern "C" fn mage_vec3_subtract(
    target: *mut Vector3,
    other: *const Vector3,
) -> MageMathErrorCode {
    handle_ffi_result_error(|| {
        let other = read_vector(other, "other")?;
        vector_mut(target, "target")?.subtract_vector(&other);
        Ok(())
    })
}

/// Whether `v1` and `v2` point the same or exactly opposite ways.
///
/// The comparison is exact: vectors that are only approximately parallel
/// report `false`.
///
/// Returns
/// - `MageMathErrorCode::Ok` on success, with `out_result` set
/// - `MageMathErrorCode::NullPointer` if any pointer is null
/// - `MageMathErrorCode::ZeroLengthVector` if either input is the zero vector
/// - `MageMathErrorCode::NonFiniteVector` if either input's length is not finite
///
/// # Safety
/// Non-null pointers must be valid and properly aligned.
#[no_mangle]
pub unsafe extern "C" fn mage_vec3_are_parallel_or_antiparallel(
    v1: *const Vector3,
    v2: *const Vector3,
    out_result: *mut bool,
) -> MageMathErrorCode {
    handle_ffi_result_error(|| {
        let v1 = read_vector(v1, "v1")?;
        let v2 = read_vector(v2, "v2")?;
        let out_result = out_result
            .as_mut()
            .ok_or_else(|| DefaultMageMathError::null_pointer("out_result"))?;
        v1.normalized_checked()
            .map_err(|e| DefaultMageMathError::from_vector_error("v1", e))?;
        v2.normalized_checked()
            .map_err(|e| DefaultMageMathError::from_vector_error("v2", e))?;
        *out_result = Vector3::are_parallel_or_antiparallel(&v1, &v2);
        Ok(())
    })
}
