//! Transfer functions between gamma-encoded and linear-light coordinates.
//!
//! All transfer functions are *extended*, i.e., they handle negative inputs
//! by reflecting the curve through the origin. Out-of-gamut colors routinely
//! have negative coordinates, and those must survive conversion until they
//! are gamut-mapped.

use crate::Float;

// --------------------------------------------------------------------------------------------------------------------
// https://www.w3.org/TR/css-color-4/#color-conversion-code

/// Decode the sRGB coordinate to linear light. Display P3 uses the very same
/// transfer function.
#[inline]
pub fn srgb_to_linear(value: Float) -> Float {
    let magnitude = value.abs();
    if magnitude <= 0.04045 {
        value / 12.92
    } else {
        ((magnitude + 0.055) / 1.055).powf(2.4).copysign(value)
    }
}

/// Encode the linear sRGB coordinate with sRGB's transfer function. Display
/// P3 uses the very same transfer function.
#[inline]
pub fn srgb_to_gamma(value: Float) -> Float {
    let magnitude = value.abs();
    if magnitude <= 0.0031308 {
        value * 12.92
    } else {
        magnitude
            .powf(2.4_f64.recip())
            .mul_add(1.055, -0.055)
            .copysign(value)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The exponent of A98 RGB's transfer function.
const A98_GAMMA: Float = 563.0 / 256.0;

/// Decode the A98 RGB coordinate to linear light.
#[inline]
pub fn a98_to_linear(value: Float) -> Float {
    value.abs().powf(A98_GAMMA).copysign(value)
}

/// Encode the linear A98 RGB coordinate.
#[inline]
pub fn a98_to_gamma(value: Float) -> Float {
    value.abs().powf(A98_GAMMA.recip()).copysign(value)
}

// --------------------------------------------------------------------------------------------------------------------

/// The slope of ProPhoto's linear segment.
const PROPHOTO_SLOPE: Float = 16.0;
/// The threshold between linear segment and power law for linear values.
const PROPHOTO_LINEAR_THRESHOLD: Float = 1.0 / 512.0;
/// The threshold between linear segment and power law for encoded values.
const PROPHOTO_ENCODED_THRESHOLD: Float = 16.0 / 512.0;

/// Decode the ProPhoto RGB coordinate to linear light.
#[inline]
pub fn prophoto_to_linear(value: Float) -> Float {
    let magnitude = value.abs();
    if magnitude <= PROPHOTO_ENCODED_THRESHOLD {
        value / PROPHOTO_SLOPE
    } else {
        magnitude.powf(1.8).copysign(value)
    }
}

/// Encode the linear ProPhoto RGB coordinate.
#[inline]
pub fn prophoto_to_gamma(value: Float) -> Float {
    let magnitude = value.abs();
    if magnitude >= PROPHOTO_LINEAR_THRESHOLD {
        magnitude.powf(1.8_f64.recip()).copysign(value)
    } else {
        value * PROPHOTO_SLOPE
    }
}

// --------------------------------------------------------------------------------------------------------------------
// https://github.com/color-js/color.js/blob/main/src/spaces/rec2020.js

#[allow(clippy::excessive_precision)]
const ALPHA: Float = 1.09929682680944;
#[allow(clippy::excessive_precision)]
const BETA: Float = 0.018053968510807;

/// Decode the Rec. 2020 coordinate to linear light.
#[inline]
pub fn rec2020_to_linear(value: Float) -> Float {
    let magnitude = value.abs();
    if magnitude < BETA * 4.5 {
        value / 4.5
    } else {
        ((magnitude + ALPHA - 1.0) / ALPHA)
            .powf(0.45_f64.recip())
            .copysign(value)
    }
}

/// Encode the linear Rec. 2020 coordinate.
#[inline]
pub fn rec2020_to_gamma(value: Float) -> Float {
    let magnitude = value.abs();
    if magnitude < BETA {
        value * 4.5
    } else {
        ALPHA
            .mul_add(magnitude.powf(0.45), -(ALPHA - 1.0))
            .copysign(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::assert_close_enough;

    const SAMPLES: [Float; 9] = [-1.5, -0.5, -0.01, 0.0, 0.001, 0.02, 0.5, 0.9, 1.25];

    #[test]
    fn test_round_trip() {
        let pairs: [(fn(Float) -> Float, fn(Float) -> Float); 4] = [
            (srgb_to_linear, srgb_to_gamma),
            (a98_to_linear, a98_to_gamma),
            (prophoto_to_linear, prophoto_to_gamma),
            (rec2020_to_linear, rec2020_to_gamma),
        ];

        for (to_linear, to_gamma) in pairs {
            for value in SAMPLES {
                assert_close_enough!(to_gamma(to_linear(value)), value);
                assert_close_enough!(to_linear(to_gamma(value)), value);
            }
        }
    }

    #[test]
    fn test_sign_preservation() {
        for value in SAMPLES {
            assert_eq!(srgb_to_linear(-value), -srgb_to_linear(value));
            assert_eq!(a98_to_linear(-value), -a98_to_linear(value));
            assert_eq!(prophoto_to_linear(-value), -prophoto_to_linear(value));
            assert_eq!(rec2020_to_linear(-value), -rec2020_to_linear(value));
        }
    }

    #[test]
    fn test_known_values() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert_close_enough!(srgb_to_linear(1.0), 1.0);
        assert_close_enough!(srgb_to_linear(0.5), 0.21404114048223255);
        assert_close_enough!(srgb_to_gamma(0.5), 0.7353569830524495);
        assert_close_enough!(a98_to_linear(0.5), 0.21775552814439456);
        assert_close_enough!(prophoto_to_linear(0.5), 0.2871745887492587);
        assert_close_enough!(prophoto_to_linear(0.02), 0.00125);
        assert_close_enough!(rec2020_to_linear(0.5), 0.2597194371011775);
    }
}
