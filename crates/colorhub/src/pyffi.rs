//! Python wrappers for colorhub's free functions.
//!
//! PyO3 passes coordinates by value, whereas the Rust API borrows them. These
//! thin wrappers bridge the gap and otherwise defer to the Rust functions.

use pyo3::prelude::*;

use crate::{ColorSpace, Float, GamutMapping};

/// Convert the coordinates between the two color spaces.
#[pyfunction]
#[pyo3(name = "convert")]
pub fn py_convert(from: ColorSpace, to: ColorSpace, coordinates: [Float; 3]) -> [Float; 3] {
    crate::convert(from, to, &coordinates)
}

/// Determine whether the coordinates are in gamut for the color space.
#[pyfunction]
#[pyo3(name = "in_gamut")]
pub fn py_in_gamut(space: ColorSpace, coordinates: [Float; 3]) -> bool {
    space.in_gamut(&coordinates)
}

/// Clip the coordinates to the gamut of the color space.
#[pyfunction]
#[pyo3(name = "clip")]
pub fn py_clip(space: ColorSpace, coordinates: [Float; 3]) -> [Float; 3] {
    space.clip(&coordinates)
}

/// Map the coordinates into the gamut of the color space.
#[pyfunction]
#[pyo3(name = "map_gamut", signature = (space, coordinates, method = GamutMapping::Bisection))]
pub fn py_map_gamut(space: ColorSpace, coordinates: [Float; 3], method: GamutMapping) -> [Float; 3] {
    crate::map_gamut(space, &coordinates, method)
}

/// Compute Delta E for the two Oklab colors.
#[pyfunction]
#[pyo3(name = "delta_e_ok")]
pub fn py_delta_e_ok(reference: [Float; 3], sample: [Float; 3]) -> Float {
    crate::delta_e_ok(&reference, &sample)
}

/// Compute the relative luminance of the sRGB color.
#[pyfunction]
#[pyo3(name = "luminance")]
pub fn py_luminance(coordinates: [Float; 3]) -> Float {
    crate::luminance(&coordinates)
}

/// Compute the WCAG 2.1 contrast ratio between the two sRGB colors.
#[pyfunction]
#[pyo3(name = "contrast_ratio_wcag_2_1")]
pub fn py_contrast_ratio_wcag_2_1(coordinates1: [Float; 3], coordinates2: [Float; 3]) -> Float {
    crate::contrast_ratio_wcag_2_1(&coordinates1, &coordinates2)
}

/// Look up the named color.
#[pyfunction]
#[pyo3(name = "named_color")]
pub fn py_named_color(name: &str) -> Option<[u8; 3]> {
    crate::named::named_color(name)
}

/// Find the named color closest to the sRGB color.
#[pyfunction]
#[pyo3(name = "closest_named_color")]
pub fn py_closest_named_color(coordinates: [Float; 3]) -> Option<&'static str> {
    crate::named::closest_named_color(&coordinates)
}
