#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use super::math::ROUNDING_FACTOR;
use super::ColorSpace;
use crate::{Bits, Float};

/// Test macro for asserting the equality of floating point numbers.
///
/// This macro relies on [`to_eq_bits`](crate::to_eq_bits) to normalize the two
/// floating point numbers by zeroing out not-a-numbers, reducing resolution,
/// and dropping the sign of negative zeros and then compares the resulting bit
/// strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the numbers below each other at the beginning of subsequent
/// lines for easy comparability.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        let bits1 = $crate::to_eq_bits(f1);
        let bits2 = $crate::to_eq_bits(f2);
        assert_eq!(bits1, bits2, "quantities differ:\n{:?}\n{:?}", f1, f2);
    };
}

/// Test macro for asserting that two color coordinate slices describe the same
/// color.
///
/// Given a color space and two coordinate arrays, this macro normalizes the
/// coordinates by zeroing out not-a-numbers, scaling the hue, reducing
/// resolution, and dropping the sign of negative zeros before comparing the
/// resulting bit strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the coordinates below each other at the beginning of
/// subsequent lines for easy comparability.
#[cfg(test)]
macro_rules! assert_same_coordinates {
    ($space:expr , $cs1:expr , $cs2:expr $(,)?) => {
        let (space, cs1, cs2) = ($space, $cs1, $cs2);
        let bits1 = $crate::core::to_eq_coordinates(space, cs1);
        let bits2 = $crate::core::to_eq_coordinates(space, cs2);
        assert_eq!(
            bits1, bits2,
            "color coordinates differ:\n{:?}\n{:?}",
            cs1, cs2
        );
    };
}

#[cfg(test)]
pub(crate) use assert_same_coordinates;

/// Test macro for asserting that two coordinate arrays differ by no more than
/// the given tolerance in each coordinate.
///
/// Two not-a-numbers in the same position are considered equal.
///
/// # Panics
///
/// This macro panics if any pair of coordinates differs by more than the
/// tolerance.
#[cfg(test)]
macro_rules! assert_close_coordinates {
    ($cs1:expr , $cs2:expr , $tolerance:expr $(,)?) => {
        let (cs1, cs2, tolerance): (&[$crate::Float; 3], &[$crate::Float; 3], $crate::Float) =
            ($cs1, $cs2, $tolerance);
        for index in 0..3 {
            let (c1, c2) = (cs1[index], cs2[index]);
            assert!(
                (c1.is_nan() && c2.is_nan()) || (c1 - c2).abs() <= tolerance,
                "color coordinates differ by more than {:e} at index {}:\n{:?}\n{:?}",
                tolerance,
                index,
                cs1,
                cs2
            );
        }
    };
}

#[cfg(test)]
pub(crate) use assert_close_coordinates;

// --------------------------------------------------------------------------------------------------------------------

/// Normalize the color coordinates.
///
/// This function replaces not-a-number coordinates with zero. If the hue of a
/// color space with hue is not-a-number, it also replaces the chroma of LCH and
/// Oklch as well as the saturation of HSL with zero. The whiteness and
/// blackness of HWB are meaningful without hue and stay as they are.
#[inline]
pub(crate) fn normalize(space: ColorSpace, coordinates: &[Float; 3]) -> [Float; 3] {
    let mut coordinates = *coordinates;

    if let Some(index) = space.hue_index() {
        if coordinates[index].is_nan() && space != ColorSpace::Hwb {
            coordinates[1] = 0.0;
        }
    }

    for coordinate in coordinates.iter_mut() {
        if coordinate.is_nan() {
            *coordinate = 0.0;
        }
    }

    coordinates
}

/// Normalize coordinates for equality testing and hashing.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn to_eq_coordinates(space: ColorSpace, coordinates: &[Float; 3]) -> [Bits; 3] {
    let mut coordinates = normalize(space, coordinates);

    // Normalize rotation and scale to unit range.
    if let Some(index) = space.hue_index() {
        coordinates[index] = coordinates[index].rem_euclid(360.0) / 360.0;
    }

    coordinates.map(to_eq_bits)
}

/// Determine whether the two coordinate arrays describe the same color in the
/// given color space.
///
/// This function normalizes the coordinates by zeroing out not-a-numbers,
/// scaling the hue to unit range, reducing resolution, and dropping the sign
/// of negative zeros before comparing the resulting bit strings.
///
/// ```
/// # use colorhub::{same_coordinates, ColorSpace};
/// assert!(same_coordinates(
///     ColorSpace::Oklch,
///     &[0.5, 0.1, 360.0],
///     &[0.5, 0.1, 0.0]
/// ));
/// assert!(same_coordinates(
///     ColorSpace::Oklch,
///     &[0.5, 0.1, f64::NAN],
///     &[0.5, 0.0, 0.0]
/// ));
/// ```
pub fn same_coordinates(
    space: ColorSpace,
    coordinates1: &[Float; 3],
    coordinates2: &[Float; 3],
) -> bool {
    to_eq_coordinates(space, coordinates1) == to_eq_coordinates(space, coordinates2)
}

/// Determine whether the two floats are close enough to be considered equal.
/// <i class=python-only>Python only!</i>
///
/// This function relies on [`to_eq_bits`] to normalize the two floating point
/// numbers by zeroing out not-a-numbers, reducing resolution, and dropping the
/// sign of negative zeros and then compares the resulting bit strings. It
/// **must not** be used for testing color coordinates; they require additional
/// normalization steps, as implemented by [`same_coordinates`].
#[cfg(feature = "pyffi")]
#[pyfunction]
pub fn close_enough(f1: Float, f2: Float) -> bool {
    to_eq_bits(f1) == to_eq_bits(f2)
}

/// Helper function to normalize a floating point number before hashing or
/// equality testing.
///
/// This function zeros out not-a-number, reduces significant digits after the
/// decimal, and drops the sign of negative zero and returns the result as a bit
/// string. It is only public because the [`assert_close_enough`] test macro
/// uses it.
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(f: Float) -> Bits {
    // Eliminate not-a-number.
    let mut f = if f.is_nan() { 0.0 } else { f };

    // Reduce precision.
    f = (ROUNDING_FACTOR * f).round();

    // Too much negativity!
    if f == -0.0 {
        f = 0.0;
    }

    f.to_bits()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_normalize() {
        use ColorSpace::*;

        let nan = Float::NAN;
        assert_eq!(normalize(Srgb, &[nan, 0.5, nan]), [0.0, 0.5, 0.0]);
        assert_eq!(normalize(Oklch, &[0.5, 0.2, nan]), [0.5, 0.0, 0.0]);
        assert_eq!(normalize(Lch, &[50.0, 20.0, nan]), [50.0, 0.0, 0.0]);
        assert_eq!(normalize(Hsl, &[nan, 80.0, 40.0]), [0.0, 0.0, 40.0]);
        assert_eq!(normalize(Hwb, &[nan, 20.0, 30.0]), [0.0, 20.0, 30.0]);
        assert_eq!(normalize(Oklab, &[1.5, -0.4, 0.4]), [1.5, -0.4, 0.4]);
    }

    #[test]
    fn test_eq_bits() {
        assert_eq!(to_eq_bits(-0.0), to_eq_bits(0.0));
        assert_eq!(to_eq_bits(Float::NAN), to_eq_bits(0.0));
        assert_eq!(to_eq_bits(0.1 + 0.2), to_eq_bits(0.3));
        assert_ne!(to_eq_bits(0.3), to_eq_bits(0.300001));
    }

    #[test]
    fn test_same_coordinates() {
        assert!(same_coordinates(
            ColorSpace::Hsl,
            &[-90.0, 50.0, 50.0],
            &[270.0, 50.0, 50.0]
        ), "hue should be normalized");
        assert!(!same_coordinates(
            ColorSpace::Oklab,
            &[0.5, 0.1, 0.1],
            &[0.5, 0.1, 0.2]
        ), "coordinates should differ");
    }
}
