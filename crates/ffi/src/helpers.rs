use crate::error::{with_last_error_mut, DefaultMageMathError, MageMathError, MageMathErrorCode};
use mage_math_core::Vector3;
use std::ffi::CString;

/// Set the thread-local error message and code.
pub(crate) fn set_last_error(error: &impl MageMathError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl MageMathError) -> MageMathErrorCode {
    set_last_error(error);
    error.code()
}

/// Clear the thread-local error message and code.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = MageMathErrorCode::Ok;
    });
}

/// Run an FFI body, record its outcome in thread-local storage, and return the code.
pub(crate) fn handle_ffi_result_error<F>(f: F) -> MageMathErrorCode
where
    F: FnOnce() -> Result<(), DefaultMageMathError>,
{
    match f() {
        Ok(()) => {
            clear_last_error();
            MageMathErrorCode::Ok
        }
        Err(error) => track_error(&error),
    }
}

/// Copy a vector out of a caller pointer.
///
/// # Safety
/// `ptr` must be null or valid for reads.
pub(crate) unsafe fn read_vector(
    ptr: *const Vector3,
    param_name: &str,
) -> Result<Vector3, DefaultMageMathError> {
    if ptr.is_null() {
        return Err(DefaultMageMathError::null_pointer(param_name));
    }
    Ok(*ptr)
}

/// Borrow a caller pointer mutably.
///
/// # Safety
/// `ptr` must be null or valid for reads and writes, and not accessed through
/// any other path while the borrow is alive.
pub(crate) unsafe fn vector_mut<'a>(
    ptr: *mut Vector3,
    param_name: &str,
) -> Result<&'a mut Vector3, DefaultMageMathError> {
    ptr.as_mut().ok_or_else(|| DefaultMageMathError::null_pointer(param_name))
}
