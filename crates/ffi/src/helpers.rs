use crate::error::{
    with_last_error_mut, DefaultFireEffectError, FireEffectError, FireEffectErrorCode,
};
use crate::instance::FireEffectInstance;
use fire_effect_core::FireSimulator;
use std::ffi::CString;

/// Set the thread-local error message and code.
pub(crate) fn set_last_error(error: &impl FireEffectError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl FireEffectError) -> FireEffectErrorCode {
    set_last_error(error);
    error.code()
}

/// Record the outcome of a fallible operation: clear the error slot on success,
/// store the error and return its code on failure.
pub(crate) fn track_result<T>(
    result: Result<T, DefaultFireEffectError>,
) -> Result<T, FireEffectErrorCode> {
    match result {
        Ok(value) => {
            clear_last_error();
            Ok(value)
        }
        Err(error) => Err(track_error(&error)),
    }
}

/// Clear the thread-local error message and code.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = FireEffectErrorCode::Ok;
    });
}

/// Borrow an instance from a raw pointer.
///
/// # Safety
/// `ptr` must be null or a pointer returned by `fire_effect_new` that has not been destroyed.
pub(crate) unsafe fn instance_from_ptr<'a>(
    ptr: *const FireEffectInstance,
) -> Result<&'a FireEffectInstance, DefaultFireEffectError> {
    // SAFETY: non-null pointers come from `Box::into_raw` in `fire_effect_new`
    unsafe { ptr.as_ref() }.ok_or_else(|| DefaultFireEffectError::null_pointer("ptr"))
}

/// Run `func` with exclusive access to the instance's simulator.
pub(crate) fn with_simulator_mut<F, T>(
    instance: &FireEffectInstance,
    func: F,
) -> Result<T, DefaultFireEffectError>
where
    F: FnOnce(&mut FireSimulator) -> T,
{
    let mut sim = instance
        .sim
        .lock()
        .map_err(|_| DefaultFireEffectError::lock_poisoned("Mutex"))?;
    Ok(func(&mut sim))
}
