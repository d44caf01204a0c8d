use fire_effect_core::{ColorError, ConfigError, FireError};
use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

/// Common interface for FFI error types.
///
/// - `code()` - Returns the error code to be passed across FFI boundary
/// - `msg()` - Returns the error message for diagnostic purposes
pub(crate) trait FireEffectError {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> FireEffectErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `FireEffectError` for the FFI error scenarios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultFireEffectError {
    code: FireEffectErrorCode,
    msg: String,
}

impl DefaultFireEffectError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"out_instance"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: FireEffectErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// Create error for poisoned lock.
    pub fn lock_poisoned(lock_name: &str) -> Self {
        Self {
            code: FireEffectErrorCode::LockPoisoned,
            msg: format!("Lock '{lock_name}' was poisoned by a panic in another thread"),
        }
    }

    /// Create error for a caller buffer that cannot hold a frame.
    pub fn buffer_too_small(needed: usize, given: usize) -> Self {
        Self {
            code: FireEffectErrorCode::BufferTooSmall,
            msg: format!("Frame needs {needed} bytes, buffer holds {given}"),
        }
    }
}

impl From<ConfigError> for DefaultFireEffectError {
    fn from(error: ConfigError) -> Self {
        Self {
            code: FireEffectErrorCode::InvalidDimensions,
            msg: error.to_string(),
        }
    }
}

impl From<ColorError> for DefaultFireEffectError {
    fn from(error: ColorError) -> Self {
        Self {
            code: FireEffectErrorCode::ColorFault,
            msg: error.to_string(),
        }
    }
}

impl From<FireError> for DefaultFireEffectError {
    fn from(error: FireError) -> Self {
        match error {
            FireError::Config(e) => e.into(),
            FireError::Color(e) => e.into(),
        }
    }
}

impl FireEffectError for DefaultFireEffectError {
    fn code(&self) -> FireEffectErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by fire effect functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireEffectErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// Lock poisoned: internal synchronization primitive was poisoned by a panic.
    LockPoisoned = 2,

    /// Width or height is zero, or the frame would not fit in memory.
    InvalidDimensions = 3,

    /// Output buffer shorter than `fire_effect_buffer_len`.
    BufferTooSmall = 4,

    /// Palette construction failed a color conversion check.
    ColorFault = 5,
}

impl From<DefaultFireEffectError> for FireEffectErrorCode {
    fn from(error: DefaultFireEffectError) -> Self {
        error.code
    }
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    /// The CString is stored here so the pointer handed out stays valid.
    static LAST_ERROR: RefCell<(Option<CString>, FireEffectErrorCode)> = const { RefCell::new((None, FireEffectErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, FireEffectErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, FireEffectErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if an error occurred.
/// - `null` if the last call on this thread succeeded.
///
/// # Lifetime
/// The returned pointer is valid until the next FFI call on this thread.
///
/// **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```c
/// FireEffectInstance* fire = NULL;
/// if (fire_effect_new(30, 100, 0, false, &fire) != Ok) {
///     const char* error = fire_effect_get_last_error();
///     if (error) {
///         printf("Fire effect creation failed: %s\n", error);
///     }
/// }
/// ```
#[no_mangle]
pub extern "C" fn fire_effect_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code (`Ok` if the last call succeeded).
#[no_mangle]
pub extern "C" fn fire_effect_get_last_error_code() -> FireEffectErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
