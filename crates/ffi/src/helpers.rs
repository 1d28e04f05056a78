use crate::error::{with_last_error_mut, CycloneRiskError, CycloneRiskErrorCode};
use std::ffi::CString;

/// Set the thread-local error message and code.
pub(crate) fn set_last_error(error: &impl CycloneRiskError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Record `error` in thread-local storage and return its code.
#[inline]
pub(crate) fn track_error(error: &impl CycloneRiskError) -> CycloneRiskErrorCode {
    set_last_error(error);
    error.code()
}

/// Clear the thread-local error message and code after a successful call.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = CycloneRiskErrorCode::Ok;
    });
}
