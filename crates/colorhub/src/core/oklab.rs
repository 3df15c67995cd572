//! Oklab and its polar form Oklch.
//!
//! Oklab is defined relative to XYZ D65. Conversions from and to the XYZ D50
//! hub hence include chromatic adaptation.

use super::lab::{cartesian_to_polar, polar_to_cartesian};
use super::math::multiply;
use super::xyz::{d50_to_d65, d65_to_d50};
use crate::Float;

/// The threshold below which both a and b make for an achromatic color.
const ACHROMATIC_THRESHOLD: Float = 0.0002;

/// Convert coordinates for Oklch to Oklab. This is a one-hop, direct
/// conversion.
///
/// ```
/// # use colorhub::hub::oklch_to_oklab;
/// assert_eq!(oklch_to_oklab(&[0.5, 0.2, f64::NAN]), [0.5, 0.0, 0.0]);
/// ```
pub fn oklch_to_oklab(value: &[Float; 3]) -> [Float; 3] {
    polar_to_cartesian(value)
}

/// Convert coordinates for Oklab to Oklch. This is a one-hop, direct
/// conversion.
pub fn oklab_to_oklch(value: &[Float; 3]) -> [Float; 3] {
    cartesian_to_polar(value, ACHROMATIC_THRESHOLD)
}

// --------------------------------------------------------------------------------------------------------------------
// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/spaces/oklab.js

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLAB_TO_OKLMS: [[Float; 3]; 3] = [
    [ 1.0000000000000000,  0.3963377773761749,  0.2158037573099136 ],
    [ 1.0000000000000000, -0.1055613458156586, -0.0638541728258133 ],
    [ 1.0000000000000000, -0.0894841775298119, -1.2914855480194092 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLMS_TO_XYZ: [[Float; 3]; 3] = [
    [  1.2268798758459243, -0.5578149944602171,  0.2813910456659647 ],
    [ -0.0405757452148008,  1.1122868032803170, -0.0717110580655164 ],
    [ -0.0763729366746601, -0.4214933324022432,  1.5869240198367816 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_OKLMS: [[Float; 3]; 3] = [
    [ 0.8190224379967030, 0.3619062600528904, -0.1288737815209879 ],
    [ 0.0329836539323885, 0.9292868615863434,  0.0361446663506424 ],
    [ 0.0481771893596242, 0.2642395317527308,  0.6335478284694309 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLMS_TO_OKLAB: [[Float; 3]; 3] = [
    [ 0.2104542683093140,  0.7936177747023054, -0.0040720430116193 ],
    [ 1.9779985324311684, -2.4285922420485799,  0.4505937096174110 ],
    [ 0.0259040424655478,  0.7827717124575296, -0.8086757549230774 ],
];

/// Convert coordinates for Oklab to XYZ D65. This is a one-hop, direct
/// conversion, even though it requires two matrix multiplications and a
/// coordinate-wise exponential.
fn oklab_to_xyz_d65(value: &[Float; 3]) -> [Float; 3] {
    let [l, m, s] = multiply(&OKLAB_TO_OKLMS, value);
    multiply(&OKLMS_TO_XYZ, &[l.powi(3), m.powi(3), s.powi(3)])
}

/// Convert coordinates for XYZ D65 to Oklab. This is a one-hop, direct
/// conversion, even though it requires two matrix multiplications and a
/// coordinate-wise exponential.
fn xyz_d65_to_oklab(value: &[Float; 3]) -> [Float; 3] {
    let [l, m, s] = multiply(&XYZ_TO_OKLMS, value);
    multiply(&OKLMS_TO_OKLAB, &[l.cbrt(), m.cbrt(), s.cbrt()])
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates for Oklab to the XYZ D50 hub.
pub fn oklab_to_xyz_d50(value: &[Float; 3]) -> [Float; 3] {
    d65_to_d50(&oklab_to_xyz_d65(value))
}

/// Convert coordinates for the XYZ D50 hub to Oklab.
pub fn xyz_d50_to_oklab(value: &[Float; 3]) -> [Float; 3] {
    xyz_d65_to_oklab(&d50_to_d65(value))
}

/// Convert coordinates for Oklch to the XYZ D50 hub.
pub fn oklch_to_xyz_d50(value: &[Float; 3]) -> [Float; 3] {
    oklab_to_xyz_d50(&oklch_to_oklab(value))
}

/// Convert coordinates for the XYZ D50 hub to Oklch.
pub fn xyz_d50_to_oklch(value: &[Float; 3]) -> [Float; 3] {
    oklab_to_oklch(&xyz_d50_to_oklab(value))
}
