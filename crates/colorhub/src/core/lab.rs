//! CIELAB and its polar form CIELCh, relative to the D50 white point.

use super::math::normalize_hue;
use super::xyz::D50;
use crate::Float;

/// Convert polar coordinates with lightness, chroma, and hue to Cartesian
/// coordinates. This is a one-hop, direct conversion.
///
/// A not-a-number hue is powerless and treated like zero chroma.
#[allow(non_snake_case)]
pub(crate) fn polar_to_cartesian(value: &[Float; 3]) -> [Float; 3] {
    let [L, C, h] = *value;

    if h.is_nan() {
        [L, 0.0, 0.0]
    } else {
        let (sin, cos) = h.to_radians().sin_cos();
        [L, C * cos, C * sin]
    }
}

/// Convert Cartesian coordinates with lightness and two opponent axes to polar
/// coordinates. This is a one-hop, direct conversion.
///
/// If both opponent coordinates are smaller in magnitude than the epsilon, the
/// color is achromatic, with zero chroma and not-a-number hue.
#[allow(non_snake_case)]
pub(crate) fn cartesian_to_polar(value: &[Float; 3], epsilon: Float) -> [Float; 3] {
    let [L, a, b] = *value;

    let a_m = a.abs();
    if a_m < epsilon && b.abs() < epsilon {
        return [L, 0.0, Float::NAN];
    }

    // per herbie 2.1
    let C = if a_m < b { b.hypot(a_m) } else { a_m.hypot(b) };
    let h = normalize_hue(b.atan2(a).to_degrees());

    [L, C, h]
}

// --------------------------------------------------------------------------------------------------------------------
// https://www.w3.org/TR/css-color-4/#color-conversion-code

const EPSILON: Float = 216.0 / 24_389.0;
const KAPPA: Float = 24_389.0 / 27.0;

/// The threshold below which both a and b make for an achromatic color.
const ACHROMATIC_THRESHOLD: Float = 1.5e-3;

/// Convert coordinates for the XYZ D50 hub to Lab.
#[allow(non_snake_case)]
pub fn xyz_d50_to_lab(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn f(t: Float) -> Float {
        if t > EPSILON {
            t.cbrt()
        } else {
            KAPPA.mul_add(t, 16.0) / 116.0
        }
    }

    let fx = f(value[0] / D50[0]);
    let fy = f(value[1] / D50[1]);
    let fz = f(value[2] / D50[2]);

    let L = 116.0_f64.mul_add(fy, -16.0);
    [L, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// Convert coordinates for Lab to the XYZ D50 hub.
#[allow(non_snake_case)]
pub fn lab_to_xyz_d50(value: &[Float; 3]) -> [Float; 3] {
    let [L, a, b] = *value;

    let fy = (L + 16.0) / 116.0;
    let fx = a.mul_add(1.0 / 500.0, fy);
    let fz = b.mul_add(-1.0 / 200.0, fy);

    let fx3 = fx.powi(3);
    let x = if fx3 > EPSILON {
        fx3
    } else {
        116.0_f64.mul_add(fx, -16.0) / KAPPA
    };
    let y = if L > KAPPA * EPSILON {
        fy.powi(3)
    } else {
        L / KAPPA
    };
    let fz3 = fz.powi(3);
    let z = if fz3 > EPSILON {
        fz3
    } else {
        116.0_f64.mul_add(fz, -16.0) / KAPPA
    };

    [x * D50[0], y * D50[1], z * D50[2]]
}

/// Convert coordinates for Lab to LCH. This is a one-hop, direct conversion.
pub fn lab_to_lch(value: &[Float; 3]) -> [Float; 3] {
    cartesian_to_polar(value, ACHROMATIC_THRESHOLD)
}

/// Convert coordinates for LCH to Lab. This is a one-hop, direct conversion.
pub fn lch_to_lab(value: &[Float; 3]) -> [Float; 3] {
    polar_to_cartesian(value)
}

/// Convert coordinates for LCH to the XYZ D50 hub.
pub fn lch_to_xyz_d50(value: &[Float; 3]) -> [Float; 3] {
    lab_to_xyz_d50(&lch_to_lab(value))
}

/// Convert coordinates for the XYZ D50 hub to LCH.
pub fn xyz_d50_to_lch(value: &[Float; 3]) -> [Float; 3] {
    lab_to_lch(&xyz_d50_to_lab(value))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::assert_close_coordinates;

    #[test]
    fn test_lab() {
        assert_close_coordinates!(&xyz_d50_to_lab(&D50), &[100.0, 0.0, 0.0], 1e-9);
        assert_close_coordinates!(&xyz_d50_to_lab(&[0.0, 0.0, 0.0]), &[0.0, 0.0, 0.0], 1e-12);
        assert_close_coordinates!(&lab_to_xyz_d50(&[100.0, 0.0, 0.0]), &D50, 1e-12);

        // #ffca00 and #3178ea
        let yellow = [0.6635434850467424, 0.6459001538545541, 0.07126198065563918];
        let yellow_lab = [84.27202490523537, 9.217455990603362, 84.47723289078787];
        assert_close_coordinates!(&xyz_d50_to_lab(&yellow), &yellow_lab, 1e-9);
        assert_close_coordinates!(&lab_to_xyz_d50(&yellow_lab), &yellow, 1e-12);

        let blue = [0.20345542047334936, 0.1913569200613913, 0.6062123188831731];
        let blue_lab = [50.84558268299661, 9.53423070844478, -65.21770438095244];
        assert_close_coordinates!(&xyz_d50_to_lab(&blue), &blue_lab, 1e-9);
        assert_close_coordinates!(&lab_to_xyz_d50(&blue_lab), &blue, 1e-12);
    }

    #[test]
    fn test_dark_lab() {
        // Below the linear threshold of the lightness curve
        let xyz = [0.001, 0.002, 0.0015];
        assert_close_coordinates!(&lab_to_xyz_d50(&xyz_d50_to_lab(&xyz)), &xyz, 1e-12);
    }

    #[test]
    fn test_lch() {
        let [l, c, h] = lab_to_lch(&[50.0, 0.001, -0.001]);
        assert_eq!(l, 50.0);
        assert_eq!(c, 0.0);
        assert!(h.is_nan(), "hue of achromatic color should be powerless");

        assert_eq!(lch_to_lab(&[50.0, 30.0, Float::NAN]), [50.0, 0.0, 0.0]);

        assert_close_coordinates!(&lab_to_lch(&[50.0, 0.0, 10.0]), &[50.0, 10.0, 90.0], 1e-12);
        assert_close_coordinates!(&lab_to_lch(&[50.0, 0.0, -10.0]), &[50.0, 10.0, 270.0], 1e-12);
        assert_close_coordinates!(&lch_to_lab(&[50.0, 10.0, 180.0]), &[50.0, -10.0, 0.0], 1e-12);
    }
}
