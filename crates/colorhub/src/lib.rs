//! # colorhub
//!
//! Colorhub converts color coordinates between 18 color spaces and maps
//! out-of-gamut colors into RGB gamuts.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**. With the `pyffi` feature enabled, the crate also builds a Python
extension module."
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**. Items that are only available in Python are decorated with <i
class=python-only>Python only!</i>."
)]
//!
//!
//! ## 1. Overview
//!
//! Colorhub's main abstractions are:
//!
//!   * [`ColorSpace`] enumerates the **supported color spaces**, from sRGB
//!     through Rec. 2020 and ProPhoto RGB, in gamma-encoded and linear form,
//!     to HSL, HWB, CIELAB, Oklab, and XYZ. Coordinates are plain `[Float;
//!     3]` arrays; it is up to you to keep track of their color space.
//!   * [`convert`] implements **conversion between color spaces**. All
//!     conversions go through one hub, XYZ relative to the D50 white point.
//!     Each color space contributes exactly two functions, one to the hub and
//!     one from the hub, which are available individually in the [`hub`]
//!     module.
//!   * [`in_gamut`], [`clip`], and [`map_gamut`] implement **gamut testing,
//!     clipping, and mapping**. The latter supports two algorithms, selected
//!     with [`GamutMapping`]: the binary search specified by CSS Color 4 and a
//!     faster ray-tracing approach.
//!   * [`delta_e_ok`], [`luminance`], and [`contrast_ratio_wcag_2_1`] compute
//!     **color differences and contrast**.
//!   * The [`named`] module provides the **CSS named colors**.
//!
//!
//! ## 2. Conversion
//!
//! Converting between color spaces is a single function call:
//!
//! ```
//! # use colorhub::{convert, ColorSpace};
//! let oklch = convert(ColorSpace::Srgb, ColorSpace::Oklch, &[1.0, 0.0, 0.0]);
//! assert!((oklch[0] - 0.627955).abs() < 1e-6);
//! assert!((oklch[2] - 29.233880).abs() < 1e-6);
//! ```
//!
//! Following CSS Color 4, a not-a-number coordinate denotes a *missing* or
//! *powerless* component. [`convert`] replaces such coordinates with zero.
//! When the hue of a polar color space is missing, it also zeroes chroma or
//! saturation. Conversely, conversions to a polar color space produce a
//! not-a-number hue for achromatic colors.
//!
//!
//! ## 3. Gamut Mapping
//!
//! Display P3's green is considerably more saturated than sRGB's green and
//! hence out of gamut for sRGB. [`map_gamut`] finds an sRGB green that
//! preserves the original's lightness and hue as much as possible:
//!
//! ```
//! # use colorhub::{convert, in_gamut, map_gamut, ColorSpace, GamutMapping};
//! let green = convert(ColorSpace::DisplayP3, ColorSpace::Srgb, &[0.0, 1.0, 0.0]);
//! assert!(!in_gamut(&green));
//!
//! let green = map_gamut(ColorSpace::Srgb, &green, GamutMapping::Bisection);
//! assert!(in_gamut(&green));
//! ```
//!
//! Gamut mapping logs its decision points with the [`log`](https://docs.rs/log)
//! crate's `trace!` macro. The library does not install a logger.
//!
//!
//! ## 4. Feature Flags
//!
//!   - **`pyffi`** builds the Python extension module with PyO3.

/// The floating point type in use.
pub type Float = f64;

/// [`Float`]'s bits.
pub type Bits = u64;

mod core;
pub mod error;
pub mod named;
#[cfg(feature = "pyffi")]
mod pyffi;

pub mod hub {
    //! The hub's spokes: one pair of conversion functions per color space.
    //!
    //! Each function takes coordinates in one color space and returns
    //! coordinates in another. [`convert`](crate::convert) composes them,
    //! always going through XYZ D50. Use these functions directly when the
    //! color spaces are known statically.
    pub use crate::core::{
        a98_rgb_to_xyz_d50, display_p3_to_xyz_d50, hsl_to_srgb, hsl_to_xyz_d50, hwb_to_srgb,
        hwb_to_xyz_d50, lab_to_lch, lab_to_xyz_d50, lch_to_lab, lch_to_xyz_d50,
        linear_a98_rgb_to_xyz_d50, linear_display_p3_to_xyz_d50,
        linear_prophoto_rgb_to_xyz_d50, linear_rec2020_to_xyz_d50, linear_srgb_to_xyz_d50,
        oklab_to_oklch, oklab_to_xyz_d50, oklch_to_oklab, oklch_to_xyz_d50,
        prophoto_rgb_to_xyz_d50, rec2020_to_xyz_d50, srgb_to_hsl, srgb_to_hwb, srgb_to_xyz_d50,
        xyz_d50_to_a98_rgb, xyz_d50_to_display_p3, xyz_d50_to_hsl, xyz_d50_to_hwb,
        xyz_d50_to_lab, xyz_d50_to_lch, xyz_d50_to_linear_a98_rgb,
        xyz_d50_to_linear_display_p3, xyz_d50_to_linear_prophoto_rgb,
        xyz_d50_to_linear_rec2020, xyz_d50_to_linear_srgb, xyz_d50_to_oklab, xyz_d50_to_oklch,
        xyz_d50_to_prophoto_rgb, xyz_d50_to_rec2020, xyz_d50_to_srgb, xyz_d50_to_xyz_d65,
        xyz_d65_to_xyz_d50,
    };
}

pub mod transfer {
    //! Transfer functions, chromatic adaptation, and matrix math.
    //!
    //! The transfer functions convert a single gamma-encoded coordinate to
    //! linear light and back again. They are extended to negative values by
    //! mirroring, so that out-of-gamut coordinates survive the round trip.
    pub use crate::core::{
        a98_to_gamma, a98_to_linear, d50_to_d65, d65_to_d50, multiply, prophoto_to_gamma,
        prophoto_to_linear, rec2020_to_gamma, rec2020_to_linear, srgb_to_gamma, srgb_to_linear,
        Matrix, D50, D65,
    };
}

#[cfg(feature = "pyffi")]
pub use core::close_enough;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use core::{
    clip, contrast_ratio_wcag_2_1, convert, delta_e_ok, find_closest, from_24bit, from_xyz_d50,
    in_gamut, luminance, map_gamut, ray_trace_box, same_coordinates, to_24bit, to_gamut_bisect,
    to_gamut_ray_trace, to_xyz_d50, ColorSpace, GamutMapping,
};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn colorhub(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(close_enough, m)?)?;
    m.add_function(wrap_pyfunction!(pyffi::py_convert, m)?)?;
    m.add_function(wrap_pyfunction!(pyffi::py_in_gamut, m)?)?;
    m.add_function(wrap_pyfunction!(pyffi::py_clip, m)?)?;
    m.add_function(wrap_pyfunction!(pyffi::py_map_gamut, m)?)?;
    m.add_function(wrap_pyfunction!(pyffi::py_delta_e_ok, m)?)?;
    m.add_function(wrap_pyfunction!(pyffi::py_luminance, m)?)?;
    m.add_function(wrap_pyfunction!(pyffi::py_contrast_ratio_wcag_2_1, m)?)?;
    m.add_function(wrap_pyfunction!(pyffi::py_named_color, m)?)?;
    m.add_function(wrap_pyfunction!(pyffi::py_closest_named_color, m)?)?;

    m.add_class::<ColorSpace>()?;
    m.add_class::<GamutMapping>()?;

    Ok(())
}
