use super::cylinder::{hsl_to_xyz_d50, hwb_to_xyz_d50, xyz_d50_to_hsl, xyz_d50_to_hwb};
use super::lab::{lab_to_xyz_d50, lch_to_xyz_d50, xyz_d50_to_lab, xyz_d50_to_lch};
use super::oklab::{oklab_to_xyz_d50, oklch_to_xyz_d50, xyz_d50_to_oklab, xyz_d50_to_oklch};
use super::rgb::*;
use super::xyz::{xyz_d50_to_xyz_d65, xyz_d65_to_xyz_d50};
use super::{normalize, ColorSpace};
use crate::Float;

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
///
/// ```
/// # use colorhub::from_24bit;
/// assert_eq!(from_24bit(255, 0, 51), [1.0, 0.0, 0.2]);
/// ```
#[inline]
pub fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [r as Float / 255.0, g as Float / 255.0, b as Float / 255.0]
}

/// Convert the color coordinates to 24-bit representation.
///
/// This function converts the color coordinates to 24-bit representation. It
/// assumes that the color is an in-gamut RGB color, i.e., that its coordinates
/// range `0..=1`. Even if that is not the case, the conversion automatically
/// clamps coordinates to the range `0x00..=0xff`.
pub fn to_24bit(space: ColorSpace, coordinates: &[Float; 3]) -> [u8; 3] {
    let [r, g, b] = normalize(space, coordinates);
    [
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert the coordinates from the given color space to the XYZ D50 hub.
///
/// This function dispatches to the color space's hub converter, e.g.,
/// [`srgb_to_xyz_d50`](crate::hub::srgb_to_xyz_d50) for sRGB. It does not
/// normalize not-a-number coordinates.
pub fn to_xyz_d50(space: ColorSpace, coordinates: &[Float; 3]) -> [Float; 3] {
    use ColorSpace::*;

    match space {
        Srgb => srgb_to_xyz_d50(coordinates),
        LinearSrgb => linear_srgb_to_xyz_d50(coordinates),
        DisplayP3 => display_p3_to_xyz_d50(coordinates),
        LinearDisplayP3 => linear_display_p3_to_xyz_d50(coordinates),
        A98Rgb => a98_rgb_to_xyz_d50(coordinates),
        LinearA98Rgb => linear_a98_rgb_to_xyz_d50(coordinates),
        ProPhotoRgb => prophoto_rgb_to_xyz_d50(coordinates),
        LinearProPhotoRgb => linear_prophoto_rgb_to_xyz_d50(coordinates),
        Rec2020 => rec2020_to_xyz_d50(coordinates),
        LinearRec2020 => linear_rec2020_to_xyz_d50(coordinates),
        Hsl => hsl_to_xyz_d50(coordinates),
        Hwb => hwb_to_xyz_d50(coordinates),
        Lab => lab_to_xyz_d50(coordinates),
        Lch => lch_to_xyz_d50(coordinates),
        Oklab => oklab_to_xyz_d50(coordinates),
        Oklch => oklch_to_xyz_d50(coordinates),
        XyzD50 => *coordinates,
        XyzD65 => xyz_d65_to_xyz_d50(coordinates),
    }
}

/// Convert the coordinates from the XYZ D50 hub to the given color space.
///
/// This function dispatches to the color space's hub converter, e.g.,
/// [`xyz_d50_to_srgb`](crate::hub::xyz_d50_to_srgb) for sRGB.
pub fn from_xyz_d50(space: ColorSpace, coordinates: &[Float; 3]) -> [Float; 3] {
    use ColorSpace::*;

    match space {
        Srgb => xyz_d50_to_srgb(coordinates),
        LinearSrgb => xyz_d50_to_linear_srgb(coordinates),
        DisplayP3 => xyz_d50_to_display_p3(coordinates),
        LinearDisplayP3 => xyz_d50_to_linear_display_p3(coordinates),
        A98Rgb => xyz_d50_to_a98_rgb(coordinates),
        LinearA98Rgb => xyz_d50_to_linear_a98_rgb(coordinates),
        ProPhotoRgb => xyz_d50_to_prophoto_rgb(coordinates),
        LinearProPhotoRgb => xyz_d50_to_linear_prophoto_rgb(coordinates),
        Rec2020 => xyz_d50_to_rec2020(coordinates),
        LinearRec2020 => xyz_d50_to_linear_rec2020(coordinates),
        Hsl => xyz_d50_to_hsl(coordinates),
        Hwb => xyz_d50_to_hwb(coordinates),
        Lab => xyz_d50_to_lab(coordinates),
        Lch => xyz_d50_to_lch(coordinates),
        Oklab => xyz_d50_to_oklab(coordinates),
        Oklch => xyz_d50_to_oklch(coordinates),
        XyzD50 => *coordinates,
        XyzD65 => xyz_d50_to_xyz_d65(coordinates),
    }
}

/// Convert the coordinates from one color space to another.
///
/// This function normalizes not-a-number coordinates to zero and then converts
/// them to the targeted color space, which may be the same as the original
/// color space. Every conversion between distinct color spaces goes through
/// the XYZ D50 hub, even if a more direct path exists. This function does not
/// check whether the result is in gamut for the targeted color space.
///
/// ```
/// # use colorhub::{convert, ColorSpace};
/// let [l, c, h] = convert(ColorSpace::Srgb, ColorSpace::Oklch, &[1.0, 0.0, 0.0]);
/// assert!((l - 0.627955).abs() < 1e-6);
/// assert!((c - 0.257683).abs() < 1e-6);
/// assert!((h - 29.2339).abs() < 1e-4);
/// ```
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub fn convert(from_space: ColorSpace, to_space: ColorSpace, coordinates: &[Float; 3]) -> [Float; 3] {
    // 1. Normalize coordinates. Be done if color spaces are the same.
    let coordinates = normalize(from_space, coordinates);
    if from_space == to_space {
        return coordinates;
    }

    // 2. Go through the hub.
    from_xyz_d50(to_space, &to_xyz_d50(from_space, &coordinates))
}
