#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::UnknownColorSpaceError;

/// The enumeration of supported color spaces.
///
/// # RGB
///
/// This crate supports five RGB color spaces, each in its gamma-encoded and
/// its linear-light form. From smallest to largest gamut, they are:
///
///   * [sRGB](https://en.wikipedia.org/wiki/SRGB), which has long served as the
///     default color space for the web.
///   * [Display P3](https://en.wikipedia.org/wiki/DCI-P3), which shares sRGB's
///     transfer function but has considerably more saturated primaries.
///   * [A98 RGB](https://en.wikipedia.org/wiki/Adobe_RGB_color_space), which
///     extends sRGB's gamut mostly in the cyan-greens and uses a pure power
///     law as transfer function.
///   * [Rec. 2020](https://en.wikipedia.org/wiki/Rec._2020), the standard
///     color space for ultra-high-definition video.
///   * [ProPhoto RGB](https://en.wikipedia.org/wiki/ProPhoto_RGB_color_space),
///     which covers most surface colors and, unlike the others, is defined
///     relative to the D50 white point.
///
/// For all ten color spaces, in-gamut coordinates range from 0 to 1,
/// inclusive.
///
/// # HSL and HWB
///
/// HSL and HWB are cylindrical reformulations of sRGB. Their first
/// coordinate is the hue in degrees, the other two coordinates are
/// percentages `0..=100`, i.e., saturation and lightness for HSL and
/// whiteness and blackness for HWB. Their gamut is sRGB's gamut.
///
/// # Lab and Oklab
///
/// CIELAB (Lab) and [Oklab](https://bottosson.github.io/posts/oklab/) use one
/// coordinate for lightness and two Cartesian coordinates a, b for
/// "colorness." LCH and Oklch are the same color spaces in polar coordinates,
/// with chroma C and hue h. Lab uses the D50 white point and lightness
/// `0..=100`, whereas Oklab uses D65 and lightness `0..=1`. Neither has gamut
/// bounds.
///
/// The hue may be not-a-number, which indicates a powerless component, i.e., a
/// gray tone. In that case, the chroma is zero.
///
/// # XYZ
///
/// [XYZ](https://en.wikipedia.org/wiki/CIE_1931_color_space) serves as the
/// foundational color space. All conversions go through XYZ with the D50
/// white point, which is the hub of the conversion graph. XYZ with the D65
/// white point is available, too. Chromatic adaptation between the two
/// versions uses the (linear) Bradford method.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "colorhub")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    Srgb,
    LinearSrgb,
    DisplayP3,
    LinearDisplayP3,
    A98Rgb,
    LinearA98Rgb,
    ProPhotoRgb,
    LinearProPhotoRgb,
    Rec2020,
    LinearRec2020,
    Hsl,
    Hwb,
    Lab,
    Lch,
    Oklab,
    Oklch,
    XyzD50,
    XyzD65,
}

impl ColorSpace {
    /// All color spaces, in declaration order.
    pub const ALL: [ColorSpace; 18] = [
        Self::Srgb,
        Self::LinearSrgb,
        Self::DisplayP3,
        Self::LinearDisplayP3,
        Self::A98Rgb,
        Self::LinearA98Rgb,
        Self::ProPhotoRgb,
        Self::LinearProPhotoRgb,
        Self::Rec2020,
        Self::LinearRec2020,
        Self::Hsl,
        Self::Hwb,
        Self::Lab,
        Self::Lch,
        Self::Oklab,
        Self::Oklch,
        Self::XyzD50,
        Self::XyzD65,
    ];
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl ColorSpace {
    /// Determine whether this color space is polar.
    ///
    /// LCH and Oklch are the polar forms of Lab and Oklab, respectively.
    pub const fn is_polar(&self) -> bool {
        matches!(*self, Self::Lch | Self::Oklch)
    }

    /// Determine whether this color space is a cylindrical form of sRGB,
    /// i.e., HSL or HWB.
    pub const fn is_cylindrical(&self) -> bool {
        matches!(*self, Self::Hsl | Self::Hwb)
    }

    /// Determine whether this color space is one of the XYZ variations.
    pub const fn is_xyz(&self) -> bool {
        matches!(*self, Self::XyzD50 | Self::XyzD65)
    }

    /// Determine whether this color space is RGB.
    ///
    /// RGB color spaces are additive and have red, green, and blue coordinates.
    /// In-gamut colors have coordinates in unit range `0..=1`.
    pub const fn is_rgb(&self) -> bool {
        use ColorSpace::*;
        matches!(
            *self,
            Srgb | LinearSrgb
                | DisplayP3
                | LinearDisplayP3
                | A98Rgb
                | LinearA98Rgb
                | ProPhotoRgb
                | LinearProPhotoRgb
                | Rec2020
                | LinearRec2020
        )
    }

    /// Determine whether this color space is a linear-light RGB color space.
    pub const fn is_linear(&self) -> bool {
        use ColorSpace::*;
        matches!(
            *self,
            LinearSrgb | LinearDisplayP3 | LinearA98Rgb | LinearProPhotoRgb | LinearRec2020
        )
    }

    /// Determine whether this color space is one of the Oklab variations.
    pub const fn is_ok(&self) -> bool {
        matches!(*self, Self::Oklab | Self::Oklch)
    }

    /// Determine whether this color space is bounded.
    ///
    /// RGB color spaces are bounded, with in-gamut coordinates ranging `0..=1`.
    /// HSL and HWB are bounded by sRGB's gamut. XYZ as well as the Lab and
    /// Oklab variations are *unbounded* and hence can model any color.
    pub const fn is_bounded(&self) -> bool {
        self.is_rgb() || self.is_cylindrical()
    }

    /// Determine the RGB color space whose gamut bounds this color space.
    ///
    /// For RGB color spaces, that is the color space itself. For HSL and HWB,
    /// it is sRGB. Unbounded color spaces have no gamut.
    pub const fn gamut_space(&self) -> Option<ColorSpace> {
        if self.is_rgb() {
            Some(*self)
        } else if self.is_cylindrical() {
            Some(Self::Srgb)
        } else {
            None
        }
    }

    /// Determine the index of the hue coordinate.
    ///
    /// HSL and HWB put the hue first, LCH and Oklch last. All other color
    /// spaces have no hue.
    pub const fn hue_index(&self) -> Option<usize> {
        match *self {
            Self::Hsl | Self::Hwb => Some(0),
            Self::Lch | Self::Oklch => Some(2),
            _ => None,
        }
    }

    /// Determine the linear-light version of this gamma-encoded RGB color
    /// space.
    pub const fn linear_counterpart(&self) -> Option<ColorSpace> {
        use ColorSpace::*;
        match *self {
            Srgb => Some(LinearSrgb),
            DisplayP3 => Some(LinearDisplayP3),
            A98Rgb => Some(LinearA98Rgb),
            ProPhotoRgb => Some(LinearProPhotoRgb),
            Rec2020 => Some(LinearRec2020),
            _ => None,
        }
    }

    /// Determine the gamma-encoded version of this linear-light RGB color
    /// space.
    pub const fn gamma_counterpart(&self) -> Option<ColorSpace> {
        use ColorSpace::*;
        match *self {
            LinearSrgb => Some(Srgb),
            LinearDisplayP3 => Some(DisplayP3),
            LinearA98Rgb => Some(A98Rgb),
            LinearProPhotoRgb => Some(ProPhotoRgb),
            LinearRec2020 => Some(Rec2020),
            _ => None,
        }
    }

    /// Get the identifier for this color space.
    ///
    /// The identifiers are the names CSS Color 4 uses for the `color()`
    /// function, extended with `hsl`, `hwb`, `lab`, `lch`, `oklab`, and
    /// `oklch`.
    pub const fn identifier(&self) -> &'static str {
        use ColorSpace::*;
        match *self {
            Srgb => "srgb",
            LinearSrgb => "srgb-linear",
            DisplayP3 => "display-p3",
            LinearDisplayP3 => "display-p3-linear",
            A98Rgb => "a98-rgb",
            LinearA98Rgb => "a98-rgb-linear",
            ProPhotoRgb => "prophoto-rgb",
            LinearProPhotoRgb => "prophoto-rgb-linear",
            Rec2020 => "rec2020",
            LinearRec2020 => "rec2020-linear",
            Hsl => "hsl",
            Hwb => "hwb",
            Lab => "lab",
            Lch => "lch",
            Oklab => "oklab",
            Oklch => "oklch",
            XyzD50 => "xyz-d50",
            XyzD65 => "xyz-d65",
        }
    }

    /// Create a human-readable representation for this color space. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl core::str::FromStr for ColorSpace {
    type Err = UnknownColorSpaceError;

    /// Look up the color space with the given identifier.
    ///
    /// The comparison ignores ASCII case. Plain `xyz` is an alias for
    /// `xyz-d65`, as in CSS.
    ///
    /// ```
    /// # use colorhub::ColorSpace;
    /// # use core::str::FromStr;
    /// assert_eq!(ColorSpace::from_str("Display-P3"), Ok(ColorSpace::DisplayP3));
    /// assert_eq!(ColorSpace::from_str("xyz"), Ok(ColorSpace::XyzD65));
    /// assert!(ColorSpace::from_str("cmyk").is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("xyz") {
            return Ok(Self::XyzD65);
        }

        Self::ALL
            .iter()
            .find(|space| space.identifier().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| UnknownColorSpaceError::new(s))
    }
}

impl TryFrom<&str> for ColorSpace {
    type Error = UnknownColorSpaceError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl core::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use ColorSpace::*;

        let s = match *self {
            Srgb => "sRGB",
            LinearSrgb => "linear sRGB",
            DisplayP3 => "Display P3",
            LinearDisplayP3 => "linear Display P3",
            A98Rgb => "A98 RGB",
            LinearA98Rgb => "linear A98 RGB",
            ProPhotoRgb => "ProPhoto RGB",
            LinearProPhotoRgb => "linear ProPhoto RGB",
            Rec2020 => "Rec. 2020",
            LinearRec2020 => "linear Rec. 2020",
            Hsl => "HSL",
            Hwb => "HWB",
            Lab => "Lab",
            Lch => "LCH",
            Oklab => "Oklab",
            Oklch => "Oklch",
            XyzD50 => "XYZ D50",
            XyzD65 => "XYZ D65",
        };

        f.write_str(s)
    }
}

#[cfg(test)]
mod test {
    use super::ColorSpace;

    #[test]
    fn test_identifiers() {
        for space in ColorSpace::ALL {
            assert_eq!(
                space.identifier().parse::<ColorSpace>(),
                Ok(space),
                "identifier of {} should parse back",
                space
            );
            assert_eq!(
                space.identifier().to_ascii_uppercase().parse::<ColorSpace>(),
                Ok(space),
                "identifier parsing should ignore case"
            );
        }

        let Err(error) = "p3".parse::<ColorSpace>() else {
            panic!("p3 should not be a color space identifier");
        };
        assert_eq!(error.name(), "p3");
        assert_eq!(
            error.to_string(),
            "p3 is not a known color space identifier"
        );
    }

    #[test]
    fn test_counterparts() {
        for space in ColorSpace::ALL {
            if let Some(linear) = space.linear_counterpart() {
                assert!(linear.is_linear(), "{} should be linear", linear);
                assert_eq!(linear.gamma_counterpart(), Some(space));
            }

            let has_counterpart =
                space.linear_counterpart().is_some() || space.gamma_counterpart().is_some();
            assert_eq!(space.is_rgb(), has_counterpart, "{} counterpart", space);
        }
    }

    #[test]
    fn test_classification() {
        use ColorSpace::*;

        assert_eq!(Hsl.gamut_space(), Some(Srgb));
        assert_eq!(Hwb.gamut_space(), Some(Srgb));
        assert_eq!(Rec2020.gamut_space(), Some(Rec2020));
        assert_eq!(Oklch.gamut_space(), None);
        assert_eq!(XyzD50.gamut_space(), None);

        assert_eq!(Hwb.hue_index(), Some(0));
        assert_eq!(Lch.hue_index(), Some(2));
        assert_eq!(Oklab.hue_index(), None);

        let bounded = ColorSpace::ALL
            .iter()
            .filter(|space| space.is_bounded())
            .count();
        assert_eq!(bounded, 12);
    }
}
