use super::transfer::srgb_to_linear;
use crate::Float;

/// The coefficients for computing relative luminance from linear sRGB.
const SRGB_LUMINANCE: &[Float; 3] = &[0.2126, 0.7152, 0.0722];

/// Compute the relative luminance of the given sRGB coordinates.
///
/// This function implements the [WCAG 2.1
/// definition](https://www.w3.org/TR/WCAG21/#dfn-relative-luminance), which
/// linearizes each coordinate with sRGB's transfer function before computing
/// the weighted sum.
///
/// ```
/// # use colorhub::luminance;
/// assert_eq!(luminance(&[0.0, 0.0, 0.0]), 0.0);
/// assert!((luminance(&[1.0, 1.0, 1.0]) - 1.0).abs() < 1e-12);
/// ```
pub fn luminance(coordinates: &[Float; 3]) -> Float {
    let [c1, c2, c3] = *SRGB_LUMINANCE;
    let [r, g, b] = *coordinates;

    srgb_to_linear(r).mul_add(c1, srgb_to_linear(g).mul_add(c2, srgb_to_linear(b) * c3))
}

/// Compute the contrast ratio between the two sRGB colors.
///
/// This function implements the [WCAG 2.1
/// definition](https://www.w3.org/TR/WCAG21/#dfn-contrast-ratio). The ratio
/// ranges from 1 for identical luminance to 21 for black and white. Since the
/// lighter color always is the numerator, the arguments are interchangeable.
///
/// ```
/// # use colorhub::contrast_ratio_wcag_2_1;
/// let ratio = contrast_ratio_wcag_2_1(&[0.0, 0.0, 0.0], &[1.0, 1.0, 1.0]);
/// assert!((ratio - 21.0).abs() < 1e-9);
/// ```
pub fn contrast_ratio_wcag_2_1(coordinates1: &[Float; 3], coordinates2: &[Float; 3]) -> Float {
    let luminance1 = luminance(coordinates1);
    let luminance2 = luminance(coordinates2);

    (luminance1.max(luminance2) + 0.05) / (luminance1.min(luminance2) + 0.05)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::assert_close_enough;

    #[test]
    fn test_luminance() {
        assert_eq!(luminance(&[0.0, 0.0, 0.0]), 0.0);
        assert_close_enough!(luminance(&[1.0, 1.0, 1.0]), 1.0);
        assert_close_enough!(luminance(&[1.0, 0.0, 0.0]), 0.2126);
        assert_close_enough!(luminance(&[0.5, 0.5, 0.5]), 0.21404114048223255);
    }

    #[test]
    fn test_contrast_ratio() {
        assert_close_enough!(
            contrast_ratio_wcag_2_1(&[0.0, 0.0, 0.0], &[1.0, 1.0, 1.0]),
            21.0
        );
        assert_close_enough!(
            contrast_ratio_wcag_2_1(&[1.0, 1.0, 1.0], &[0.0, 0.0, 0.0]),
            21.0
        );
        assert_eq!(
            contrast_ratio_wcag_2_1(&[0.3, 0.6, 0.9], &[0.3, 0.6, 0.9]),
            1.0
        );
    }
}
