//! C ABI for the fire effect
//!
//! Lets a native display surface own a fire effect instance, pull RGB24 frames from it
//! on its own timer, and free it when done. Errors are reported as
//! [`FireEffectErrorCode`] values with a per-thread message available from
//! `fire_effect_get_last_error`.

mod error;
mod frame;
mod helpers;
mod instance;

pub use error::{fire_effect_get_last_error, fire_effect_get_last_error_code, FireEffectErrorCode};
pub use frame::{
    fire_effect_buffer_len, fire_effect_dimensions, fire_effect_frame_interval_ms,
    fire_effect_update,
};
pub use instance::{fire_effect_destroy, fire_effect_new, FireEffectInstance};
