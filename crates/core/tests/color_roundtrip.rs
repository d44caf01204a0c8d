//! Conversion accuracy across the HSL/HSV cube

use approx::assert_abs_diff_eq;
use fire_effect_core::color::{
    hsl_to_rgb, hsv_to_rgb, hue_distance, rgb_to_hsl, rgb_to_hsv, upscale, CONVERSION_TOLERANCE,
};

fn steps(n: u32) -> impl Iterator<Item = f64> {
    (0..=n).map(move |i| f64::from(i) / f64::from(n))
}

#[test]
fn test_hsl_roundtrip_within_tolerance() {
    for h in steps(24).filter(|&h| h < 1.0) {
        for s in steps(10).filter(|&s| s > 0.05) {
            for l in steps(10).filter(|&l| l > 0.05 && l < 0.95) {
                let rgb = hsl_to_rgb(h, s, l).unwrap();
                let back = rgb_to_hsl(rgb.r, rgb.g, rgb.b).unwrap();

                assert!(
                    hue_distance(back.h, h) < CONVERSION_TOLERANCE,
                    "hue drifted for ({h}, {s}, {l}): {back:?}"
                );
                assert_abs_diff_eq!(back.s, s, epsilon = CONVERSION_TOLERANCE);
                assert_abs_diff_eq!(back.l, l, epsilon = CONVERSION_TOLERANCE);
            }
        }
    }
}

#[test]
fn test_hsv_roundtrip_within_tolerance() {
    for h in steps(24).filter(|&h| h < 1.0) {
        for s in steps(10).filter(|&s| s > 0.05) {
            for v in steps(10).filter(|&v| v > 0.05) {
                let rgb = hsv_to_rgb(h, s, v).unwrap();
                let back = rgb_to_hsv(rgb.r, rgb.g, rgb.b).unwrap();

                assert!(hue_distance(back.h, h) < CONVERSION_TOLERANCE);
                assert_abs_diff_eq!(back.s, s, epsilon = CONVERSION_TOLERANCE);
                assert_abs_diff_eq!(back.v, v, epsilon = CONVERSION_TOLERANCE);
            }
        }
    }
}

#[test]
fn test_degenerate_points_lose_information() {
    // Zero saturation: hue cannot be recovered
    let rgb = hsl_to_rgb(0.6, 0.0, 0.4).unwrap();
    let back = rgb_to_hsl(rgb.r, rgb.g, rgb.b).unwrap();
    assert_eq!(back.h, 0.0);
    assert_eq!(back.s, 0.0);

    // Full lightness: saturation cannot be recovered
    let rgb = hsl_to_rgb(0.6, 0.7, 1.0).unwrap();
    let back = rgb_to_hsl(rgb.r, rgb.g, rgb.b).unwrap();
    assert_eq!(back.s, 0.0);
    assert_eq!(back.l, 1.0);
}

#[test]
fn test_converted_channels_quantize() {
    for h in steps(12) {
        let rgb = hsl_to_rgb(h, 1.0, 0.5).unwrap();
        for channel in [rgb.r, rgb.g, rgb.b] {
            assert!(upscale(channel).is_ok());
        }
    }
}
