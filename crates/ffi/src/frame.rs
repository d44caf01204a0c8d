use fire_effect_core::FRAME_INTERVAL;
use tracing::warn;

use crate::error::{DefaultFireEffectError, FireEffectErrorCode};
use crate::helpers::{instance_from_ptr, track_error, track_result, with_simulator_mut};
use crate::instance::FireEffectInstance;

/// Advance the fire one step and copy the rendered frame into `out_buffer`.
///
/// The frame is row-major RGB24: `width * 3` bytes per scanline, top scanline first,
/// `fire_effect_buffer_len` bytes in total.
///
/// Returns
/// - `Ok` on success
/// - `NullPointer` if `ptr` or `out_buffer` is null
/// - `BufferTooSmall` if `buffer_len` is shorter than one frame (the simulation
///   does not advance)
/// - `LockPoisoned` if a previous caller panicked while holding the instance
///
/// # Safety
/// - `ptr` must be null or a live instance from `fire_effect_new`.
/// - `out_buffer` must be null or valid for writes of `buffer_len` bytes.
#[no_mangle]
pub unsafe extern "C" fn fire_effect_update(
    ptr: *const FireEffectInstance,
    out_buffer: *mut u8,
    buffer_len: usize,
) -> FireEffectErrorCode {
    let result = unsafe { update_into(ptr, out_buffer, buffer_len) };
    match track_result(result) {
        Ok(()) => FireEffectErrorCode::Ok,
        Err(code) => code,
    }
}

/// # Safety
/// Same contract as `fire_effect_update`.
unsafe fn update_into(
    ptr: *const FireEffectInstance,
    out_buffer: *mut u8,
    buffer_len: usize,
) -> Result<(), DefaultFireEffectError> {
    let instance = unsafe { instance_from_ptr(ptr) }?;
    if out_buffer.is_null() {
        return Err(DefaultFireEffectError::null_pointer("out_buffer"));
    }
    let needed = instance.buffer_len();
    if buffer_len < needed {
        warn!(
            "fire_effect_update: buffer of {} bytes cannot hold a {}-byte frame",
            buffer_len, needed
        );
        return Err(DefaultFireEffectError::buffer_too_small(needed, buffer_len));
    }

    // SAFETY: caller guarantees `out_buffer` is writable for `buffer_len >= needed` bytes
    let out = unsafe { std::slice::from_raw_parts_mut(out_buffer, needed) };
    with_simulator_mut(instance, |sim| out.copy_from_slice(sim.update()))
}

/// Number of bytes in one frame (`3 * width * height`), or 0 if `ptr` is null.
///
/// # Safety
/// `ptr` must be null or a live instance from `fire_effect_new`.
#[no_mangle]
pub unsafe extern "C" fn fire_effect_buffer_len(ptr: *const FireEffectInstance) -> usize {
    unsafe { instance_from_ptr(ptr) }.map_or(0, FireEffectInstance::buffer_len)
}

/// Write the grid dimensions to `out_width` and `out_height`.
///
/// # Safety
/// - `ptr` must be null or a live instance from `fire_effect_new`.
/// - `out_width` and `out_height` must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn fire_effect_dimensions(
    ptr: *const FireEffectInstance,
    out_width: *mut usize,
    out_height: *mut usize,
) -> FireEffectErrorCode {
    if out_width.is_null() {
        return track_error(&DefaultFireEffectError::null_pointer("out_width"));
    }
    if out_height.is_null() {
        return track_error(&DefaultFireEffectError::null_pointer("out_height"));
    }

    match track_result(unsafe { instance_from_ptr(ptr) }) {
        Ok(instance) => {
            unsafe {
                *out_width = instance.width;
                *out_height = instance.height;
            }
            FireEffectErrorCode::Ok
        }
        Err(code) => code,
    }
}

/// Suggested delay between `fire_effect_update` calls, in milliseconds.
#[no_mangle]
pub extern "C" fn fire_effect_frame_interval_ms() -> u32 {
    u32::try_from(FRAME_INTERVAL.as_millis()).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::fire_effect_get_last_error;
    use crate::instance::{fire_effect_destroy, fire_effect_new};
    use std::ffi::CStr;
    use std::ptr;

    fn create(width: usize, height: usize) -> *mut FireEffectInstance {
        let mut instance: *mut FireEffectInstance = ptr::null_mut();
        let code = unsafe { fire_effect_new(width, height, 13, true, &mut instance) };
        assert_eq!(code, FireEffectErrorCode::Ok);
        instance
    }

    #[test]
    fn test_update_fills_buffer() {
        let instance = create(30, 100);
        let len = unsafe { fire_effect_buffer_len(instance) };
        assert_eq!(len, 9000);

        let mut pixels = vec![0u8; len];
        let code = unsafe { fire_effect_update(instance, pixels.as_mut_ptr(), pixels.len()) };
        assert_eq!(code, FireEffectErrorCode::Ok);
        // Bottom scanline was just seeded
        assert!(pixels[len - 90..].iter().any(|&b| b > 0));

        unsafe { fire_effect_destroy(instance) };
    }

    #[test]
    fn test_update_rejects_short_buffer() {
        let instance = create(4, 4);
        let mut pixels = vec![0u8; 10];
        let code = unsafe { fire_effect_update(instance, pixels.as_mut_ptr(), pixels.len()) };
        assert_eq!(code, FireEffectErrorCode::BufferTooSmall);

        let msg = unsafe { CStr::from_ptr(fire_effect_get_last_error()) };
        assert_eq!(msg.to_str().unwrap(), "Frame needs 48 bytes, buffer holds 10");

        unsafe { fire_effect_destroy(instance) };
    }

    #[test]
    fn test_update_null_instance() {
        let mut pixels = vec![0u8; 3];
        let code = unsafe { fire_effect_update(ptr::null(), pixels.as_mut_ptr(), 3) };
        assert_eq!(code, FireEffectErrorCode::NullPointer);
        assert_eq!(unsafe { fire_effect_buffer_len(ptr::null()) }, 0);
    }

    #[test]
    fn test_dimensions() {
        let instance = create(12, 7);
        let (mut w, mut h): (usize, usize) = (0, 0);
        let code = unsafe { fire_effect_dimensions(instance, &mut w, &mut h) };
        assert_eq!(code, FireEffectErrorCode::Ok);
        assert_eq!((w, h), (12, 7));

        unsafe { fire_effect_destroy(instance) };
    }

    #[test]
    fn test_frame_interval() {
        assert_eq!(fire_effect_frame_interval_ms(), 30);
    }
}
