use super::math::{multiply, Matrix};
use crate::Float;

/// The D50 white point in XYZ, derived from its xy chromaticity.
pub const D50: [Float; 3] = [
    0.3457 / 0.3585,
    1.0,
    (1.0 - 0.3457 - 0.3585) / 0.3585,
];

/// The D65 white point in XYZ, derived from its xy chromaticity.
pub const D65: [Float; 3] = [
    0.3127 / 0.3290,
    1.0,
    (1.0 - 0.3127 - 0.3290) / 0.3290,
];

// --------------------------------------------------------------------------------------------------------------------
// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/adapt.js

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const D65_TO_D50: Matrix = [
    [  1.0479297925449969,   0.022946870601609652, -0.05019226628920524  ],
    [  0.02962780877005599,  0.9904344267538799,   -0.017073799063418826 ],
    [ -0.009243040646204504, 0.015055191490298152,  0.7518742814281371   ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const D50_TO_D65: Matrix = [
    [  0.955473421488075,    -0.02309845494876471,  0.06325924320057072  ],
    [ -0.0283697093338637,    1.0099953980813041,   0.021041441191917323 ],
    [  0.012314014864481998, -0.020507649298898964, 1.330365926242124    ],
];

/// Convert XYZ D65 to XYZ D50 using the (linear) Bradford method. This is a
/// one-hop, direct conversion.
#[inline]
pub fn d65_to_d50(value: &[Float; 3]) -> [Float; 3] {
    multiply(&D65_TO_D50, value)
}

/// Convert XYZ D50 to XYZ D65 using the (linear) Bradford method. This is a
/// one-hop, direct conversion.
#[inline]
pub fn d50_to_d65(value: &[Float; 3]) -> [Float; 3] {
    multiply(&D50_TO_D65, value)
}

/// Convert coordinates for XYZ D65 to the XYZ D50 hub.
#[inline]
pub fn xyz_d65_to_xyz_d50(value: &[Float; 3]) -> [Float; 3] {
    d65_to_d50(value)
}

/// Convert coordinates for the XYZ D50 hub to XYZ D65.
#[inline]
pub fn xyz_d50_to_xyz_d65(value: &[Float; 3]) -> [Float; 3] {
    d50_to_d65(value)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::assert_close_coordinates;

    #[test]
    fn test_adaptation_inverse() {
        for value in [
            [0.0, 0.0, 0.0],
            [1.0, 1.0, 1.0],
            [0.25, 0.5, 0.75],
            [-0.3, 1.7, 0.02],
            D50,
            D65,
        ] {
            assert_close_coordinates!(&d50_to_d65(&d65_to_d50(&value)), &value, 1e-9);
            assert_close_coordinates!(&d65_to_d50(&d50_to_d65(&value)), &value, 1e-9);
        }
    }

    #[test]
    fn test_white_points() {
        assert_close_coordinates!(&d65_to_d50(&D65), &D50, 1e-4);
        assert_close_coordinates!(&d50_to_d65(&D50), &D65, 1e-4);
    }
}
