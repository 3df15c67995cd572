mod contrast;
mod conversion;
mod cylinder;
mod difference;
mod equality;
mod gamut;
mod lab;
mod math;
mod oklab;
mod rgb;
mod space;
mod transfer;
mod xyz;

// contrast
pub use contrast::{contrast_ratio_wcag_2_1, luminance};

// conversion
pub use conversion::{convert, from_24bit, from_xyz_d50, to_24bit, to_xyz_d50};

// cylinder, lab, oklab, rgb, xyz: the hub's spokes
pub use cylinder::{
    hsl_to_srgb, hsl_to_xyz_d50, hwb_to_srgb, hwb_to_xyz_d50, srgb_to_hsl, srgb_to_hwb,
    xyz_d50_to_hsl, xyz_d50_to_hwb,
};
pub use lab::{
    lab_to_lch, lab_to_xyz_d50, lch_to_lab, lch_to_xyz_d50, xyz_d50_to_lab, xyz_d50_to_lch,
};
pub use oklab::{
    oklab_to_oklch, oklab_to_xyz_d50, oklch_to_oklab, oklch_to_xyz_d50, xyz_d50_to_oklab,
    xyz_d50_to_oklch,
};
pub use rgb::{
    a98_rgb_to_xyz_d50, display_p3_to_xyz_d50, linear_a98_rgb_to_xyz_d50,
    linear_display_p3_to_xyz_d50, linear_prophoto_rgb_to_xyz_d50, linear_rec2020_to_xyz_d50,
    linear_srgb_to_xyz_d50, prophoto_rgb_to_xyz_d50, rec2020_to_xyz_d50, srgb_to_xyz_d50,
    xyz_d50_to_a98_rgb, xyz_d50_to_display_p3, xyz_d50_to_linear_a98_rgb,
    xyz_d50_to_linear_display_p3, xyz_d50_to_linear_prophoto_rgb, xyz_d50_to_linear_rec2020,
    xyz_d50_to_linear_srgb, xyz_d50_to_prophoto_rgb, xyz_d50_to_rec2020, xyz_d50_to_srgb,
};
pub use xyz::{d50_to_d65, d65_to_d50, xyz_d50_to_xyz_d65, xyz_d65_to_xyz_d50, D50, D65};

// difference
pub use difference::{delta_e_ok, find_closest};

// equality
#[cfg(test)]
pub(crate) use equality::{assert_close_coordinates, assert_same_coordinates};
#[cfg(feature = "pyffi")]
pub use equality::close_enough;
pub use equality::{same_coordinates, to_eq_bits};
pub(crate) use equality::normalize;
#[cfg(test)]
pub(crate) use equality::to_eq_coordinates;

// gamut
pub use gamut::{
    clip, in_gamut, map_gamut, ray_trace_box, to_gamut_bisect, to_gamut_ray_trace, GamutMapping,
};

// math
pub use math::{multiply, Matrix};

// space
pub use space::ColorSpace;

// transfer
pub use transfer::{
    a98_to_gamma, a98_to_linear, prophoto_to_gamma, prophoto_to_linear, rec2020_to_gamma,
    rec2020_to_linear, srgb_to_gamma, srgb_to_linear,
};
