//! The RGB color spaces and their conversions from and to the XYZ D50 hub.
//!
//! Each RGB color space has a matrix from linear RGB to XYZ and its inverse.
//! Except for ProPhoto RGB, these matrices target XYZ D65, so that conversions
//! from and to the hub also require chromatic adaptation. The matrices are
//! written as the exact rational numbers derived from the chromaticities of
//! each color space's primaries and white point.

use super::math::{each, multiply, Matrix};
use super::transfer::{
    a98_to_gamma, a98_to_linear, prophoto_to_gamma, prophoto_to_linear, rec2020_to_gamma,
    rec2020_to_linear, srgb_to_gamma, srgb_to_linear,
};
use super::xyz::{d50_to_d65, d65_to_d50};
use crate::Float;

/// Convert linear RGB to the XYZ D50 hub by way of XYZ D65.
#[inline]
fn linear_rgb_to_xyz_d50(to_xyz_d65: &Matrix, value: &[Float; 3]) -> [Float; 3] {
    d65_to_d50(&multiply(to_xyz_d65, value))
}

/// Convert the XYZ D50 hub to linear RGB by way of XYZ D65.
#[inline]
fn xyz_d50_to_linear_rgb(from_xyz_d65: &Matrix, value: &[Float; 3]) -> [Float; 3] {
    multiply(from_xyz_d65, &d50_to_d65(value))
}

// --------------------------------------------------------------------------------------------------------------------
// https://www.w3.org/TR/css-color-4/#color-conversion-code

#[rustfmt::skip]
const LINEAR_SRGB_TO_XYZ: Matrix = [
    [ 506_752.0 / 1_228_815.0,  87_881.0 / 245_763.0,    12_673.0 /    70_218.0 ],
    [  87_098.0 /   409_605.0, 175_762.0 / 245_763.0,    12_673.0 /   175_545.0 ],
    [   7_918.0 /   409_605.0,  87_881.0 / 737_289.0, 1_001_167.0 / 1_053_270.0 ],
];

#[rustfmt::skip]
const XYZ_TO_LINEAR_SRGB: Matrix = [
    [    12_831.0 /   3_959.0,      -329.0 /     214.0, -1_974.0 /   3_959.0 ],
    [  -851_781.0 / 878_810.0, 1_648_619.0 / 878_810.0, 36_519.0 / 878_810.0 ],
    [       705.0 /  12_673.0,    -2_585.0 /  12_673.0,    705.0 /     667.0 ],
];

/// Convert coordinates for linear sRGB to the XYZ D50 hub.
pub fn linear_srgb_to_xyz_d50(value: &[Float; 3]) -> [Float; 3] {
    linear_rgb_to_xyz_d50(&LINEAR_SRGB_TO_XYZ, value)
}

/// Convert coordinates for the XYZ D50 hub to linear sRGB.
pub fn xyz_d50_to_linear_srgb(value: &[Float; 3]) -> [Float; 3] {
    xyz_d50_to_linear_rgb(&XYZ_TO_LINEAR_SRGB, value)
}

/// Convert coordinates for sRGB to the XYZ D50 hub.
///
/// ```
/// # use colorhub::hub::srgb_to_xyz_d50;
/// assert_eq!(srgb_to_xyz_d50(&[0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
/// ```
pub fn srgb_to_xyz_d50(value: &[Float; 3]) -> [Float; 3] {
    linear_srgb_to_xyz_d50(&each(value, srgb_to_linear))
}

/// Convert coordinates for the XYZ D50 hub to sRGB.
pub fn xyz_d50_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    each(&xyz_d50_to_linear_srgb(value), srgb_to_gamma)
}

// --------------------------------------------------------------------------------------------------------------------

#[rustfmt::skip]
const LINEAR_DISPLAY_P3_TO_XYZ: Matrix = [
    [ 608_311.0 / 1_250_200.0, 189_793.0 / 714_400.0,   198_249.0 / 1_000_160.0 ],
    [  35_783.0 /   156_275.0, 247_089.0 / 357_200.0,   198_249.0 / 2_500_400.0 ],
    [       0.0,                32_229.0 / 714_400.0, 5_220_557.0 / 5_000_800.0 ],
];

#[rustfmt::skip]
const XYZ_TO_LINEAR_DISPLAY_P3: Matrix = [
    [ 446_124.0 / 178_915.0, -333_277.0 / 357_830.0, -72_051.0 / 178_915.0 ],
    [ -14_852.0 /  17_905.0,   63_121.0 /  35_810.0,     423.0 /  17_905.0 ],
    [  11_844.0 / 330_415.0,  -50_337.0 / 660_830.0, 316_169.0 / 330_415.0 ],
];

/// Convert coordinates for linear Display P3 to the XYZ D50 hub.
pub fn linear_display_p3_to_xyz_d50(value: &[Float; 3]) -> [Float; 3] {
    linear_rgb_to_xyz_d50(&LINEAR_DISPLAY_P3_TO_XYZ, value)
}

/// Convert coordinates for the XYZ D50 hub to linear Display P3.
pub fn xyz_d50_to_linear_display_p3(value: &[Float; 3]) -> [Float; 3] {
    xyz_d50_to_linear_rgb(&XYZ_TO_LINEAR_DISPLAY_P3, value)
}

/// Convert coordinates for Display P3 to the XYZ D50 hub.
pub fn display_p3_to_xyz_d50(value: &[Float; 3]) -> [Float; 3] {
    linear_display_p3_to_xyz_d50(&each(value, srgb_to_linear))
}

/// Convert coordinates for the XYZ D50 hub to Display P3.
pub fn xyz_d50_to_display_p3(value: &[Float; 3]) -> [Float; 3] {
    each(&xyz_d50_to_linear_display_p3(value), srgb_to_gamma)
}

// --------------------------------------------------------------------------------------------------------------------

#[rustfmt::skip]
const LINEAR_A98_RGB_TO_XYZ: Matrix = [
    [ 573_536.0 /   994_567.0,   263_643.0 / 1_420_810.0,   187_206.0 /   994_567.0 ],
    [ 591_459.0 / 1_989_134.0, 6_239_551.0 / 9_945_670.0,   374_412.0 / 4_972_835.0 ],
    [  53_769.0 / 1_989_134.0,   351_524.0 / 4_972_835.0, 4_929_758.0 / 4_972_835.0 ],
];

#[rustfmt::skip]
const XYZ_TO_LINEAR_A98_RGB: Matrix = [
    [ 1_829_569.0 /   896_150.0, -506_331.0 /   896_150.0,  -308_931.0 /   896_150.0 ],
    [  -851_781.0 /   878_810.0, 1_648_619.0 /  878_810.0,    36_519.0 /   878_810.0 ],
    [    16_779.0 / 1_248_040.0, -147_721.0 / 1_248_040.0, 1_266_979.0 / 1_248_040.0 ],
];

/// Convert coordinates for linear A98 RGB to the XYZ D50 hub.
pub fn linear_a98_rgb_to_xyz_d50(value: &[Float; 3]) -> [Float; 3] {
    linear_rgb_to_xyz_d50(&LINEAR_A98_RGB_TO_XYZ, value)
}

/// Convert coordinates for the XYZ D50 hub to linear A98 RGB.
pub fn xyz_d50_to_linear_a98_rgb(value: &[Float; 3]) -> [Float; 3] {
    xyz_d50_to_linear_rgb(&XYZ_TO_LINEAR_A98_RGB, value)
}

/// Convert coordinates for A98 RGB to the XYZ D50 hub.
pub fn a98_rgb_to_xyz_d50(value: &[Float; 3]) -> [Float; 3] {
    linear_a98_rgb_to_xyz_d50(&each(value, a98_to_linear))
}

/// Convert coordinates for the XYZ D50 hub to A98 RGB.
pub fn xyz_d50_to_a98_rgb(value: &[Float; 3]) -> [Float; 3] {
    each(&xyz_d50_to_linear_a98_rgb(value), a98_to_gamma)
}

// --------------------------------------------------------------------------------------------------------------------
// ProPhoto RGB uses the D50 white point and hence needs no chromatic adaptation.

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_PROPHOTO_RGB_TO_XYZ_D50: Matrix = [
    [ 0.797_766_644_900_642_3, 0.135_181_297_400_533_08, 0.031_347_734_128_392_2   ],
    [ 0.288_074_828_819_401_3, 0.711_835_234_241_873,    0.000_089_936_938_725_64  ],
    [ 0.0,                     0.0,                      0.825_104_602_510_460_2   ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_D50_TO_LINEAR_PROPHOTO_RGB: Matrix = [
    [  1.345_786_881_647_158_3, -0.255_572_087_379_794_64, -0.051_101_864_975_545_26 ],
    [ -0.544_630_705_124_901_9,  1.508_247_742_845_146_8,   0.020_527_447_436_421_39 ],
    [  0.0,                      0.0,                       1.211_967_545_638_945_2  ],
];

/// Convert coordinates for linear ProPhoto RGB to the XYZ D50 hub.
pub fn linear_prophoto_rgb_to_xyz_d50(value: &[Float; 3]) -> [Float; 3] {
    multiply(&LINEAR_PROPHOTO_RGB_TO_XYZ_D50, value)
}

/// Convert coordinates for the XYZ D50 hub to linear ProPhoto RGB.
pub fn xyz_d50_to_linear_prophoto_rgb(value: &[Float; 3]) -> [Float; 3] {
    multiply(&XYZ_D50_TO_LINEAR_PROPHOTO_RGB, value)
}

/// Convert coordinates for ProPhoto RGB to the XYZ D50 hub.
pub fn prophoto_rgb_to_xyz_d50(value: &[Float; 3]) -> [Float; 3] {
    linear_prophoto_rgb_to_xyz_d50(&each(value, prophoto_to_linear))
}

/// Convert coordinates for the XYZ D50 hub to ProPhoto RGB.
pub fn xyz_d50_to_prophoto_rgb(value: &[Float; 3]) -> [Float; 3] {
    each(&xyz_d50_to_linear_prophoto_rgb(value), prophoto_to_gamma)
}

// --------------------------------------------------------------------------------------------------------------------

#[rustfmt::skip]
const LINEAR_REC2020_TO_XYZ: Matrix = [
    [ 63_426_534.0 / 99_577_255.0,  20_160_776.0 / 139_408_157.0,  47_086_771.0 / 278_816_314.0 ],
    [ 26_158_966.0 / 99_577_255.0, 472_592_308.0 / 697_040_785.0,   8_267_143.0 / 139_408_157.0 ],
    [          0.0,                 19_567_812.0 / 697_040_785.0, 295_819_943.0 / 278_816_314.0 ],
];

#[rustfmt::skip]
const XYZ_TO_LINEAR_REC2020: Matrix = [
    [  30_757_411.0 / 17_917_100.0, -6_372_589.0 / 17_917_100.0, -4_539_589.0 / 17_917_100.0 ],
    [ -19_765_991.0 / 29_648_200.0, 47_925_759.0 / 29_648_200.0,    467_509.0 / 29_648_200.0 ],
    [     792_561.0 / 44_930_125.0, -1_921_689.0 / 44_930_125.0, 42_328_811.0 / 44_930_125.0 ],
];

/// Convert coordinates for linear Rec. 2020 to the XYZ D50 hub.
pub fn linear_rec2020_to_xyz_d50(value: &[Float; 3]) -> [Float; 3] {
    linear_rgb_to_xyz_d50(&LINEAR_REC2020_TO_XYZ, value)
}

/// Convert coordinates for the XYZ D50 hub to linear Rec. 2020.
pub fn xyz_d50_to_linear_rec2020(value: &[Float; 3]) -> [Float; 3] {
    xyz_d50_to_linear_rgb(&XYZ_TO_LINEAR_REC2020, value)
}

/// Convert coordinates for Rec. 2020 to the XYZ D50 hub.
pub fn rec2020_to_xyz_d50(value: &[Float; 3]) -> [Float; 3] {
    linear_rec2020_to_xyz_d50(&each(value, rec2020_to_linear))
}

/// Convert coordinates for the XYZ D50 hub to Rec. 2020.
pub fn xyz_d50_to_rec2020(value: &[Float; 3]) -> [Float; 3] {
    each(&xyz_d50_to_linear_rec2020(value), rec2020_to_gamma)
}

#[cfg(test)]
#[allow(clippy::excessive_precision)]
mod test {
    use super::*;
    use crate::core::assert_close_coordinates;
    use crate::core::xyz::{D50, D65};

    const MATRICES: [(&Matrix, &Matrix); 4] = [
        (&LINEAR_SRGB_TO_XYZ, &XYZ_TO_LINEAR_SRGB),
        (&LINEAR_DISPLAY_P3_TO_XYZ, &XYZ_TO_LINEAR_DISPLAY_P3),
        (&LINEAR_A98_RGB_TO_XYZ, &XYZ_TO_LINEAR_A98_RGB),
        (&LINEAR_REC2020_TO_XYZ, &XYZ_TO_LINEAR_REC2020),
    ];

    #[test]
    fn test_white_maps_to_white_point() {
        for (to_xyz, _) in MATRICES {
            assert_close_coordinates!(&multiply(to_xyz, &[1.0, 1.0, 1.0]), &D65, 1e-12);
        }

        assert_close_coordinates!(
            &multiply(&LINEAR_PROPHOTO_RGB_TO_XYZ_D50, &[1.0, 1.0, 1.0]),
            &D50,
            1e-12
        );
    }

    #[test]
    fn test_matrices_are_inverses() {
        let mut pairs = MATRICES.to_vec();
        pairs.push((
            &LINEAR_PROPHOTO_RGB_TO_XYZ_D50,
            &XYZ_D50_TO_LINEAR_PROPHOTO_RGB,
        ));

        for (to_xyz, from_xyz) in pairs {
            for unit in [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]] {
                assert_close_coordinates!(&multiply(from_xyz, &multiply(to_xyz, &unit)), &unit, 1e-12);
            }
        }
    }

    #[test]
    fn test_known_values() {
        // #ffca00 and #3178ea, checked against the XYZ D50 values published by
        // Color.js.
        assert_close_coordinates!(
            &srgb_to_xyz_d50(&[1.0, 0.792156862745098, 0.0]),
            &[0.6635434850467424, 0.6459001538545541, 0.07126198065563918],
            1e-9
        );
        assert_close_coordinates!(
            &srgb_to_xyz_d50(&[0.19215686274509805, 0.47058823529411764, 0.9176470588235294]),
            &[0.20345542047334936, 0.1913569200613913, 0.6062123188831731],
            1e-9
        );

        // A very green green.
        assert_close_coordinates!(
            &xyz_d50_to_srgb(&display_p3_to_xyz_d50(&[0.0, 1.0, 0.0])),
            &[-0.5116049825853448, 1.0182656579378029, -0.3106746212905826],
            1e-9
        );
    }

    #[test]
    fn test_white_and_black() {
        let rgb_to_xyz_d50: [fn(&[Float; 3]) -> [Float; 3]; 10] = [
            srgb_to_xyz_d50,
            linear_srgb_to_xyz_d50,
            display_p3_to_xyz_d50,
            linear_display_p3_to_xyz_d50,
            a98_rgb_to_xyz_d50,
            linear_a98_rgb_to_xyz_d50,
            prophoto_rgb_to_xyz_d50,
            linear_prophoto_rgb_to_xyz_d50,
            rec2020_to_xyz_d50,
            linear_rec2020_to_xyz_d50,
        ];

        for to_xyz_d50 in rgb_to_xyz_d50 {
            assert_close_coordinates!(&to_xyz_d50(&[1.0, 1.0, 1.0]), &D50, 1e-4);
            assert_eq!(to_xyz_d50(&[0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
        }
    }
}
