//! Color space conversion and hue utilities
//!
//! All components are normalized to `[0,1]`; hue is a fraction of a full turn with
//! red at `0`. The functions are pure and stateless.

mod convert;
mod hue;
mod quantize;
mod tables;

pub use convert::{
    clamp01, clamp01_within, hsl_to_rgb, hslv_to_rgb, hsv_to_rgb, rgb_to_hsl, rgb_to_hslv,
    rgb_to_hsv, wrap01, ColorModel, Hsl, Hslv, Hsv, Rgb, CLAMP_TOLERANCE, CONVERSION_TOLERANCE,
};
pub use hue::{
    hue_contained, hue_distance, normalize_hue, normalize_hue_range,
    normalize_hue_range_with_mid, positive_mod, scale_hue,
};
pub use quantize::{gamma_correct, to_byte, upscale};
