use fire_effect_core::{FireConfig, FireSimulator};
use std::ptr;
use std::sync::Mutex;
use tracing::info;

use crate::error::{DefaultFireEffectError, FireEffectErrorCode};
use crate::helpers::{track_error, track_result};

/// The fire effect context handed to native display code.
/// Holds the simulator: heat grid, palette, frame buffer and random generator.
///
/// # Thread Safety
/// The simulator sits behind a `Mutex`. Any thread may call into the instance, one
/// caller at a time; frames are copied out under the lock so the host never observes
/// a half-written buffer.
///
/// # Usage
///
/// ```c
/// FireEffectInstance* fire = NULL;
/// if (fire_effect_new(30, 100, 0, false, &fire) != Ok) {
///     return;
/// }
/// size_t len = fire_effect_buffer_len(fire);
/// uint8_t* pixels = malloc(len);
///
/// // Every ~30 ms from the display timer:
/// fire_effect_update(fire, pixels, len);
/// blit_rgb24(pixels, 30, 100, 30 * 3);
///
/// fire_effect_destroy(fire);
/// free(pixels);
/// ```
pub struct FireEffectInstance {
    pub(crate) sim: Mutex<FireSimulator>,
    /// Dimensions cached so size queries don't contend on the lock.
    pub(crate) width: usize,
    pub(crate) height: usize,
}

impl FireEffectInstance {
    /// Creates a new instance for a `width` × `height` grid.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` for zero or oversized dimensions and `ColorFault` if the
    /// palette cannot be built.
    pub(crate) fn new(
        width: usize,
        height: usize,
        seed: Option<u64>,
    ) -> Result<Box<Self>, DefaultFireEffectError> {
        let mut config = FireConfig::new(width, height);
        if let Some(seed) = seed {
            config = config.with_seed(seed);
        }
        let sim = FireSimulator::new(config)?;

        info!("Created FFI fire effect instance ({}x{})", width, height);

        Ok(Box::new(Self {
            sim: Mutex::new(sim),
            width,
            height,
        }))
    }

    /// Bytes in one rendered frame.
    pub(crate) fn buffer_len(&self) -> usize {
        self.width * self.height * 3
    }
}

/// Create a new fire effect instance and return it via out-parameter.
///
/// - Returns `FireEffectErrorCode::Ok` (0) on success with a valid instance in `out_instance`
/// - Returns a non-zero error code on failure with `out_instance` set to null
///
/// Parameters
/// - `width`, `height`: grid size in pixels; fixed for the instance's lifetime.
/// - `seed`, `use_seed`: when `use_seed` is true the heat sequence is reproducible from
///   `seed`; otherwise the generator is seeded by the operating system.
/// - `out_instance`: receives the created instance. Must be non-null.
///
/// Call `fire_effect_get_last_error()` for a description of any failure.
///
/// # Safety
///
/// - `out_instance` must be a valid, non-null pointer to writable memory.
/// - The caller owns the returned instance and MUST call `fire_effect_destroy` exactly once.
#[no_mangle]
pub unsafe extern "C" fn fire_effect_new(
    width: usize,
    height: usize,
    seed: u64,
    use_seed: bool,
    out_instance: *mut *mut FireEffectInstance,
) -> FireEffectErrorCode {
    if out_instance.is_null() {
        return track_error(&DefaultFireEffectError::null_pointer("out_instance"));
    }

    let seed = use_seed.then_some(seed);
    match track_result(FireEffectInstance::new(width, height, seed)) {
        Ok(instance) => {
            unsafe {
                *out_instance = Box::into_raw(instance);
            }
            FireEffectErrorCode::Ok
        }
        Err(code) => {
            unsafe {
                // Set to null on error (per documentation contract)
                *out_instance = ptr::null_mut();
            }
            code
        }
    }
}

/// Destroys an instance previously created by `fire_effect_new`.
///
/// If `ptr` is null this is a no-op.
///
/// # Safety
/// - The pointer MUST have been created by `fire_effect_new` and not destroyed already.
/// - The caller must not use the pointer afterwards.
#[no_mangle]
pub unsafe extern "C" fn fire_effect_destroy(ptr: *mut FireEffectInstance) {
    if ptr.is_null() {
        return;
    }

    // SAFETY: `ptr` came from `Box::into_raw` in `fire_effect_new` and is still live
    unsafe {
        drop(Box::from_raw(ptr));
    }
}
