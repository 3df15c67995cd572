//! HSL and HWB, the cylindrical reformulations of sRGB.
//!
//! Both color spaces put the hue in degrees first and express their other two
//! coordinates as percentages `0..=100`. An achromatic color has a
//! not-a-number hue.

use super::math::normalize_hue;
use super::rgb::{srgb_to_xyz_d50, xyz_d50_to_srgb};
use crate::Float;

// --------------------------------------------------------------------------------------------------------------------
// https://www.w3.org/TR/css-color-4/#rgb-to-hsl

/// Convert coordinates for sRGB to HSL. This is a one-hop, direct conversion.
pub fn srgb_to_hsl(value: &[Float; 3]) -> [Float; 3] {
    let [red, green, blue] = *value;
    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);
    let lightness = (min + max) / 2.0;
    let delta = max - min;

    if delta == 0.0 {
        return [Float::NAN, 0.0, lightness * 100.0];
    }

    let mut saturation = if lightness == 0.0 || lightness == 1.0 {
        0.0
    } else {
        (max - lightness) / lightness.min(1.0 - lightness)
    };

    let sextant = if max == red {
        (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
    } else if max == green {
        (blue - red) / delta + 2.0
    } else {
        (red - green) / delta + 4.0
    };
    let mut hue = sextant * 60.0;

    // Colors outside the sRGB gamut may have negative saturation.
    if saturation < 0.0 {
        hue += 180.0;
        saturation = saturation.abs();
    }

    [normalize_hue(hue), saturation * 100.0, lightness * 100.0]
}

/// Convert coordinates for HSL to sRGB. This is a one-hop, direct conversion.
///
/// A not-a-number hue is treated like zero saturation.
pub fn hsl_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    let [hue, saturation, lightness] = *value;
    let (hue, saturation) = if hue.is_nan() {
        (0.0, 0.0)
    } else {
        (normalize_hue(hue), saturation / 100.0)
    };
    let lightness = lightness / 100.0;
    let amplitude = saturation * lightness.min(1.0 - lightness);

    let channel = |n: Float| {
        let k = (n + hue / 30.0).rem_euclid(12.0);
        let ramp = (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
        amplitude.mul_add(-ramp, lightness)
    };

    [channel(0.0), channel(8.0), channel(4.0)]
}

// --------------------------------------------------------------------------------------------------------------------
// https://www.w3.org/TR/css-color-4/#rgb-to-hwb

/// Convert coordinates for sRGB to HWB. This is a one-hop, direct conversion.
pub fn srgb_to_hwb(value: &[Float; 3]) -> [Float; 3] {
    let [red, green, blue] = *value;
    let [hue, _, _] = srgb_to_hsl(value);
    let white = red.min(green).min(blue);
    let black = 1.0 - red.max(green).max(blue);

    [hue, white * 100.0, black * 100.0]
}

/// Convert coordinates for HWB to sRGB. This is a one-hop, direct conversion.
///
/// If whiteness and blackness add up to 100 or more, the result is the gray
/// with level `whiteness / (whiteness + blackness)`.
///
/// ```
/// # use colorhub::hub::hwb_to_srgb;
/// assert_eq!(hwb_to_srgb(&[120.0, 60.0, 60.0]), [0.5, 0.5, 0.5]);
/// ```
pub fn hwb_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    let [hue, white, black] = *value;
    let white = white / 100.0;
    let black = black / 100.0;

    if white + black >= 1.0 {
        let gray = white / (white + black);
        return [gray, gray, gray];
    }

    let [red, green, blue] = hsl_to_srgb(&[hue, 100.0, 50.0]);
    let scale = 1.0 - white - black;
    [
        red.mul_add(scale, white),
        green.mul_add(scale, white),
        blue.mul_add(scale, white),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates for HSL to the XYZ D50 hub.
pub fn hsl_to_xyz_d50(value: &[Float; 3]) -> [Float; 3] {
    srgb_to_xyz_d50(&hsl_to_srgb(value))
}

/// Convert coordinates for the XYZ D50 hub to HSL.
pub fn xyz_d50_to_hsl(value: &[Float; 3]) -> [Float; 3] {
    srgb_to_hsl(&xyz_d50_to_srgb(value))
}

/// Convert coordinates for HWB to the XYZ D50 hub.
pub fn hwb_to_xyz_d50(value: &[Float; 3]) -> [Float; 3] {
    srgb_to_xyz_d50(&hwb_to_srgb(value))
}

/// Convert coordinates for the XYZ D50 hub to HWB.
pub fn xyz_d50_to_hwb(value: &[Float; 3]) -> [Float; 3] {
    srgb_to_hwb(&xyz_d50_to_srgb(value))
}
