use mage_math_core::VectorError;
use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

/// Common interface for FFI error types.
///
/// - `code()` - Returns the error code to be passed across FFI boundary
/// - `msg()` - Returns the error message for diagnostic purposes
///
/// # Example
/// ```rust,ignore
/// let err = DefaultMageMathError::null_pointer("out");
/// assert_eq!(err.code(), MageMathErrorCode::NullPointer);
/// assert_eq!(err.msg(), "Parameter 'out' cannot be null");
/// ```
pub(crate) trait MageMathError {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> MageMathErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `MageMathError` for the vector FFI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultMageMathError {
    code: MageMathErrorCode,
    msg: String,
}

impl DefaultMageMathError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"out"`, `"v1"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: MageMathErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// Create error for a vector that has no direction.
    ///
    /// # Arguments
    /// * `param_name` - The name of the zero-length vector parameter
    pub fn zero_length(param_name: &str) -> Self {
        Self {
            code: MageMathErrorCode::ZeroLengthVector,
            msg: format!("Vector '{param_name}' has zero length"),
        }
    }

    /// Create error from a core vector error on the named parameter.
    pub fn from_vector_error(param_name: &str, error: VectorError) -> Self {
        match error {
            VectorError::ZeroLength => Self::zero_length(param_name),
            VectorError::NonFinite { .. } => Self {
                code: MageMathErrorCode::NonFiniteVector,
                msg: format!("Vector '{param_name}': {error}"),
            },
        }
    }
}

impl MageMathError for DefaultMageMathError {
    fn code(&self) -> MageMathErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by vector functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MageMathErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// A vector that must have a direction has zero length.
    ZeroLengthVector = 2,

    /// A vector's length is infinite or NaN.
    NonFiniteVector = 3,
}

impl From<DefaultMageMathError> for MageMathErrorCode {
    fn from(error: DefaultMageMathError) -> Self {
        error.code
    }
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    /// The `CString` is stored to prevent memory leaks when returning raw pointers via FFI.
    static LAST_ERROR: RefCell<(Option<CString>, MageMathErrorCode)> = const { RefCell::new((None, MageMathErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, MageMathErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, MageMathErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if the last call on this thread failed.
/// - `null` if the last call succeeded or no call has been made.
///
/// # Lifetime
/// The returned pointer is valid until the next FFI call on this thread.
///
/// **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```cpp
/// float length = 0.0f;
/// if (mage_vec3_normalize(&direction, &length) != MageMathErrorCode::Ok) {
///     UE_LOG(LogTemp, Warning, TEXT("%hs"), mage_math_get_last_error());
/// }
/// ```
#[no_mangle]
pub extern "C" fn mage_math_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code for this thread.
#[no_mangle]
pub extern "C" fn mage_math_get_last_error_code() -> MageMathErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
