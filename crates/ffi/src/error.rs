use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

/// Common interface for FFI error types.
///
/// - `code()` - Returns the error code to be passed across FFI boundary
/// - `msg()` - Returns the error message for diagnostic purposes
pub(crate) trait CycloneRiskError {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> CycloneRiskErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `CycloneRiskError` for common FFI error scenarios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultCycloneRiskError {
    code: CycloneRiskErrorCode,
    msg: String,
}

impl DefaultCycloneRiskError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"inputs"`, `"out_scores"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: CycloneRiskErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// Create error for invalid parameter.
    pub fn invalid_parameter(message: String) -> Self {
        Self {
            code: CycloneRiskErrorCode::InvalidParameter,
            msg: message,
        }
    }
}

impl CycloneRiskError for DefaultCycloneRiskError {
    fn code(&self) -> CycloneRiskErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by cyclone risk functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycloneRiskErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// Invalid parameter passed to function.
    InvalidParameter = 2,
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    static LAST_ERROR: RefCell<(Option<CString>, CycloneRiskErrorCode)> = const { RefCell::new((None, CycloneRiskErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, CycloneRiskErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, CycloneRiskErrorCode)) -> R,
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
/// ```c
/// CycloneRiskErrorCode err = cyclone_risk_compute_batch(inputs, len, scores);
/// if (err != Ok) {
///     const char* error = cyclone_risk_get_last_error();
///     if (error) {
///         printf("Batch scoring failed: %s\n", error);
///     }
/// }
/// ```
#[no_mangle]
pub extern "C" fn cyclone_risk_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code (`Ok` if the last call succeeded).
///
/// Error codes are stored per-thread, so this is thread-safe.
#[no_mangle]
pub extern "C" fn cyclone_risk_get_last_error_code() -> CycloneRiskErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
