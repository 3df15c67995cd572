#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use super::lab::polar_to_cartesian;
use super::{convert, delta_e_ok, normalize};
use crate::{ColorSpace, Float};

/// The tolerance for gamut membership.
const GAMUT_TOLERANCE: Float = 1e-4;

/// Determine whether the RGB coordinates are in gamut.
///
/// This function treats coordinates as in gamut if they fall into the unit
/// range `0..=1`, widened by a small tolerance on both ends to absorb
/// floating point error accumulated during round-trip conversions.
///
/// ```
/// # use colorhub::in_gamut;
/// assert!(in_gamut(&[0.0, 0.5, 1.0]));
/// assert!(in_gamut(&[-0.00001, 0.5, 1.00001]));
/// assert!(!in_gamut(&[-0.1, 0.5, 1.0]));
/// ```
pub fn in_gamut(coordinates: &[Float; 3]) -> bool {
    coordinates
        .iter()
        .all(|c| -GAMUT_TOLERANCE <= *c && *c <= 1.0 + GAMUT_TOLERANCE)
}

/// Clip the RGB coordinates to the unit range `0..=1`.
pub fn clip(coordinates: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *coordinates;
    [r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0)]
}

impl ColorSpace {
    /// Determine whether the coordinates are in gamut for this color space.
    ///
    /// RGB coordinates are tested with [`in_gamut`]. HSL and HWB coordinates
    /// are converted to sRGB first. Coordinates for unbounded color spaces
    /// always are in gamut.
    pub fn in_gamut(&self, coordinates: &[Float; 3]) -> bool {
        match self.gamut_space() {
            Some(space) => in_gamut(&convert(*self, space, coordinates)),
            None => true,
        }
    }

    /// Clip the coordinates to the gamut of this color space.
    ///
    /// RGB coordinates are clipped with [`clip`]. HSL and HWB coordinates are
    /// converted to sRGB, clipped, and converted back again. Coordinates for
    /// unbounded color spaces are only normalized.
    #[must_use = "method returns new color coordinates and does not mutate original value"]
    pub fn clip(&self, coordinates: &[Float; 3]) -> [Float; 3] {
        match self.gamut_space() {
            Some(space) => convert(space, *self, &clip(&convert(*self, space, coordinates))),
            None => normalize(*self, coordinates),
        }
    }
}

// ====================================================================================================================

/// The choice of gamut mapping algorithm.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "colorhub")
)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum GamutMapping {
    /// Binary search for the largest chroma, per CSS Color 4. See
    /// [`to_gamut_bisect`].
    #[default]
    Bisection,
    /// Ray tracing against the RGB cube. See [`to_gamut_ray_trace`].
    RayTrace,
}

/// Map the coordinates into the gamut of the color space.
///
/// For RGB color spaces, this function maps the coordinates into the
/// space's own gamut. For HSL and HWB, it maps into sRGB's gamut. In both
/// cases, the coordinates are converted to Oklch and back again, with the
/// given algorithm determining the in-gamut color. Coordinates for unbounded
/// color spaces are only normalized.
///
/// ```
/// # use colorhub::{map_gamut, ColorSpace, GamutMapping};
/// let srgb = map_gamut(ColorSpace::Srgb, &[1.2, 0.5, -0.1], GamutMapping::Bisection);
/// assert!(colorhub::in_gamut(&srgb));
/// ```
///
/// If the coordinates are so large that their Oklch version overflows, this
/// function falls back on clipping in the target color space.
///
/// # Panics
///
/// This function panics if the coordinates, after normalization, are not
/// finite.
pub fn map_gamut(space: ColorSpace, coordinates: &[Float; 3], method: GamutMapping) -> [Float; 3] {
    let coordinates = normalize(space, coordinates);
    let Some(target) = space.gamut_space() else {
        return coordinates;
    };

    assert!(
        coordinates.iter().all(|c| c.is_finite()),
        "gamut mapping requires finite coordinates, not {:?}",
        coordinates
    );

    let origin = convert(space, ColorSpace::Oklch, &coordinates);
    let [lightness, chroma, hue] = origin;
    if !lightness.is_finite() || !chroma.is_finite() || hue.is_infinite() {
        log::trace!("{:?} overflows Oklch, clipping instead", coordinates);
        return convert(target, space, &clip(&convert(space, target, &coordinates)));
    }

    let to_target = |c: &[Float; 3]| convert(ColorSpace::Oklch, target, c);
    let to_oklch = |c: &[Float; 3]| convert(target, ColorSpace::Oklch, c);

    let mapped = match method {
        GamutMapping::Bisection => to_gamut_bisect(&origin, to_target, to_oklch),
        GamutMapping::RayTrace => to_gamut_ray_trace(&origin, to_target, to_oklch),
    };

    convert(target, space, &mapped)
}

// --------------------------------------------------------------------------------------------------------------------

const JND: Float = 0.02;
const EPSILON: Float = 0.0001;

/// Check the preconditions of gamut mapping and handle out-of-range
/// lightness.
fn check_origin<F>(origin: &[Float; 3], to_target: &F) -> Option<[Float; 3]>
where
    F: Fn(&[Float; 3]) -> [Float; 3],
{
    let [l, c, h] = *origin;
    assert!(
        l.is_finite() && c.is_finite() && !h.is_infinite(),
        "gamut mapping requires finite Oklch coordinates, not {:?}",
        origin
    );

    if 1.0 <= l {
        log::trace!("lightness {} maps to white", l);
        Some(clip(&to_target(&[1.0, 0.0, 0.0])))
    } else if l <= 0.0 {
        log::trace!("lightness {} maps to black", l);
        Some(clip(&to_target(&[0.0, 0.0, 0.0])))
    } else {
        None
    }
}

/// Map the Oklch coordinates into the gamut of the target color space with
/// binary search.
///
/// This function implements the CSS Color 4 [gamut mapping
/// algorithm](https://drafts.csswg.org/css-color/#css-gamut-mapping). It
/// basically performs a binary search in Oklch for a color with less chroma
/// than the original, whose clipped version is within the *just noticeable
/// difference*. Since, by definition, the clipped version also is in gamut, it
/// becomes the result of the search.
///
/// The first closure converts Oklch coordinates to the target color space,
/// the second one converts back again. Lightness 1 or more maps to white and
/// lightness 0 or less maps to black. Coordinates that already are in gamut
/// are only clipped. A not-a-number hue is treated as zero chroma.
///
/// The binary search assumes that, for fixed lightness and hue, reducing
/// chroma moves an out-of-gamut color monotonically towards the gamut. That
/// holds for the RGB color spaces supported by this crate but is not
/// guaranteed in general.
///
/// # Panics
///
/// This function panics if the lightness or chroma are not finite or if the
/// hue is infinite.
pub fn to_gamut_bisect<F, G>(origin: &[Float; 3], to_target: F, to_oklch: G) -> [Float; 3]
where
    F: Fn(&[Float; 3]) -> [Float; 3],
    G: Fn(&[Float; 3]) -> [Float; 3],
{
    if let Some(result) = check_origin(origin, &to_target) {
        return result;
    }

    let origin_as_target = to_target(origin);
    if in_gamut(&origin_as_target) {
        return clip(&origin_as_target);
    }

    // Goal: Minimize just noticeable difference between current and clipped
    // colors
    let mut current_as_oklch = *origin;
    let mut clipped_as_target = clip(&origin_as_target);

    let difference = delta_e_ok(
        &polar_to_cartesian(&to_oklch(&clipped_as_target)),
        &polar_to_cartesian(&current_as_oklch),
    );

    if difference < JND {
        log::trace!("clipped color within JND, difference {}", difference);
        return clipped_as_target;
    }

    // Strategy: Binary search by adjusting chroma in Oklch
    let mut min = 0.0;
    let mut max = origin[1];
    let mut min_in_gamut = true;

    while EPSILON < max - min {
        let chroma = (min + max) / 2.0;
        current_as_oklch = [current_as_oklch[0], chroma, current_as_oklch[2]];

        let current_as_target = to_target(&current_as_oklch);

        if min_in_gamut && in_gamut(&current_as_target) {
            min = chroma;
            continue;
        }

        clipped_as_target = clip(&current_as_target);

        let difference = delta_e_ok(
            &polar_to_cartesian(&to_oklch(&clipped_as_target)),
            &polar_to_cartesian(&current_as_oklch),
        );

        if difference < JND {
            if JND - difference < EPSILON {
                log::trace!("chroma {} close enough to JND", chroma);
                return clipped_as_target;
            }
            min_in_gamut = false;
            min = chroma;
        } else {
            max = chroma;
        }
    }

    clipped_as_target
}

// --------------------------------------------------------------------------------------------------------------------

/// The minimum magnitude of a ray's direction along an axis.
const RAY_EPSILON: Float = 1e-12;

/// Intersect the ray from start through end with the axis-aligned box.
///
/// This function uses the slab method. It computes the ray's entry and exit
/// parameters for each axis and intersects the resulting intervals. If the ray
/// starts inside the box, the result is the exit point. Otherwise, it is the
/// entry point. The ray does not intersect the box if it runs parallel to an
/// axis outside the box, if the intervals do not overlap, or if the box lies
/// behind the start. The coordinates of the intersection always fall into
/// the box's bounds.
///
/// ```
/// # use colorhub::ray_trace_box;
/// let hit = ray_trace_box(&[0.5, 0.5, 0.5], &[1.5, 0.5, 0.5], &[0.0; 3], &[1.0; 3]);
/// assert_eq!(hit, Some([1.0, 0.5, 0.5]));
///
/// let miss = ray_trace_box(&[1.5, 0.5, 0.5], &[2.5, 0.5, 0.5], &[0.0; 3], &[1.0; 3]);
/// assert_eq!(miss, None);
/// ```
pub fn ray_trace_box(
    start: &[Float; 3],
    end: &[Float; 3],
    min: &[Float; 3],
    max: &[Float; 3],
) -> Option<[Float; 3]> {
    let mut t_near = Float::NEG_INFINITY;
    let mut t_far = Float::INFINITY;
    let mut direction = [0.0; 3];

    for index in 0..3 {
        let origin = start[index];
        let delta = end[index] - origin;
        direction[index] = delta;

        if delta.abs() < RAY_EPSILON {
            if origin < min[index] || max[index] < origin {
                return None;
            }
        } else {
            let t1 = (min[index] - origin) / delta;
            let t2 = (max[index] - origin) / delta;
            t_near = t_near.max(t1.min(t2));
            t_far = t_far.min(t1.max(t2));
        }
    }

    if t_far < t_near || t_far < 0.0 {
        return None;
    }

    let t = if t_near < 0.0 { t_far } else { t_near };
    if !t.is_finite() {
        return None;
    }

    // Rounding may leave the point just outside the box it lies on.
    let on_box = |index: usize| {
        direction[index]
            .mul_add(t, start[index])
            .max(min[index])
            .min(max[index])
    };

    Some([on_box(0), on_box(1), on_box(2)])
}

const UNIT_MIN: [Float; 3] = [0.0; 3];
const UNIT_MAX: [Float; 3] = [1.0; 3];

/// The margin a corrected color must keep from the cube's faces to become the
/// next anchor.
const ANCHOR_MARGIN: Float = 1e-6;

/// Map the Oklch coordinates into the gamut of the target color space with
/// ray tracing.
///
/// This function casts a ray in the target's RGB cube from the achromatic
/// color with the same lightness and hue through the out-of-gamut color and
/// intersects it with the cube. Since the straight line in RGB does not
/// preserve Oklch lightness and hue, it then restores both for the
/// intersection and casts another ray, for up to four iterations. If a
/// corrected color falls inside the cube, it becomes the anchor for
/// subsequent rays. The result is clipped.
///
/// The closures and the treatment of lightness are the same as for
/// [`to_gamut_bisect`]. Since this function does not compute color
/// differences, it is faster but may be slightly less accurate.
///
/// # Panics
///
/// This function panics if the lightness or chroma are not finite or if the
/// hue is infinite.
pub fn to_gamut_ray_trace<F, G>(origin: &[Float; 3], to_target: F, to_oklch: G) -> [Float; 3]
where
    F: Fn(&[Float; 3]) -> [Float; 3],
    G: Fn(&[Float; 3]) -> [Float; 3],
{
    if let Some(result) = check_origin(origin, &to_target) {
        return result;
    }

    let mut current = to_target(origin);
    if in_gamut(&current) {
        return clip(&current);
    }

    let [lightness, _, hue] = *origin;
    let mut anchor = to_target(&[lightness, 0.0, hue]);

    for iteration in 0..4 {
        if 0 < iteration {
            let [_, chroma, _] = to_oklch(&current);
            current = to_target(&[lightness, chroma, hue]);
        }

        let intersection = ray_trace_box(&anchor, &current, &UNIT_MIN, &UNIT_MAX);

        if 0 < iteration
            && current
                .iter()
                .all(|c| ANCHOR_MARGIN < *c && *c < 1.0 - ANCHOR_MARGIN)
        {
            anchor = current;
        }

        let Some(point) = intersection else {
            log::trace!("ray misses RGB cube in iteration {}", iteration);
            break;
        };
        current = point;
    }

    clip(&current)
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::{assert_close_coordinates, assert_same_coordinates};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn to_srgb(coordinates: &[Float; 3]) -> [Float; 3] {
        convert(ColorSpace::Oklch, ColorSpace::Srgb, coordinates)
    }

    fn from_srgb(coordinates: &[Float; 3]) -> [Float; 3] {
        convert(ColorSpace::Srgb, ColorSpace::Oklch, coordinates)
    }

    #[test]
    fn test_in_gamut_and_clip() {
        assert!(in_gamut(&[0.0, 0.0, 0.0]));
        assert!(in_gamut(&[1.0001, -0.0001, 0.5]));
        assert!(!in_gamut(&[1.0002, 0.5, 0.5]));
        assert!(!in_gamut(&[0.5, 0.5, -0.001]));

        let mut rng = StdRng::seed_from_u64(0x11);
        for _ in 0..100 {
            let coordinates = [
                rng.random_range(-2.0..2.0),
                rng.random_range(-2.0..2.0),
                rng.random_range(-2.0..2.0),
            ];
            let clipped = clip(&coordinates);
            assert_eq!(clip(&clipped), clipped);
            assert!(in_gamut(&clipped), "{:?} should be in gamut", clipped);
        }
    }

    #[test]
    fn test_space_gamut() {
        use ColorSpace::*;

        assert!(Hsl.in_gamut(&[120.0, 50.0, 50.0]));
        assert!(!Srgb.in_gamut(&[1.2, 0.5, 0.5]));
        assert!(Oklab.in_gamut(&[1.2, 0.5, 0.5]));

        assert_eq!(Srgb.clip(&[1.2, 0.5, -0.3]), [1.0, 0.5, 0.0]);
        assert_eq!(Oklab.clip(&[1.2, 0.5, Float::NAN]), [1.2, 0.5, 0.0]);

        let hsl = Hsl.clip(&convert(DisplayP3, Hsl, &[0.0, 1.0, 0.0]));
        assert!(Hsl.in_gamut(&hsl), "{:?} should be in sRGB gamut", hsl);
    }

    #[test]
    fn test_bisect() {
        // A very green green.
        let p3 = [0.0, 1.0, 0.0];
        let origin = convert(ColorSpace::DisplayP3, ColorSpace::Oklch, &p3);
        let srgb = to_gamut_bisect(&origin, to_srgb, from_srgb);
        assert_close_coordinates!(
            &srgb,
            &[0.0, 0.9857637107710327, 0.15974244397343723],
            1e-9
        );

        // A very yellow yellow.
        let p3 = [1.0, 1.0, 0.0];
        let linear_srgb = map_gamut(
            ColorSpace::LinearSrgb,
            &convert(ColorSpace::DisplayP3, ColorSpace::LinearSrgb, &p3),
            GamutMapping::Bisection,
        );
        assert_close_coordinates!(
            &linear_srgb,
            &[0.9914525477996114, 0.9977581974546277, 0.0],
            1e-6
        );
    }

    #[test]
    fn test_ray_trace() {
        let p3 = [0.0, 1.0, 0.0];
        let origin = convert(ColorSpace::DisplayP3, ColorSpace::Oklch, &p3);
        let srgb = to_gamut_ray_trace(&origin, to_srgb, from_srgb);
        assert_close_coordinates!(
            &srgb,
            &[0.0, 0.9682988512380869, 0.3032447301792345],
            1e-6
        );

        // Lightness and hue stay close to the original.
        let [l, _, h] = from_srgb(&srgb);
        assert!((l - origin[0]).abs() < 1e-3, "lightness {} drifted", l);
        assert!((h - origin[2]).abs() < 0.5, "hue {} drifted", h);
    }

    #[test]
    fn test_ray_trace_box() {
        let (min, max) = (&UNIT_MIN, &UNIT_MAX);

        // From inside, the ray exits the box.
        assert_eq!(
            ray_trace_box(&[0.5, 0.5, 0.5], &[0.5, 2.5, 0.5], min, max),
            Some([0.5, 1.0, 0.5])
        );

        // From outside, the ray enters the box.
        assert_eq!(
            ray_trace_box(&[-1.0, 0.5, 0.5], &[0.5, 0.5, 0.5], min, max),
            Some([0.0, 0.5, 0.5])
        );

        // Parallel to a face but outside the box.
        assert_eq!(
            ray_trace_box(&[0.5, 1.5, 0.5], &[2.0, 1.5, 0.5], min, max),
            None
        );

        // Box behind the ray.
        assert_eq!(
            ray_trace_box(&[2.0, 0.5, 0.5], &[3.0, 0.5, 0.5], min, max),
            None
        );

        // Degenerate ray.
        assert_eq!(
            ray_trace_box(&[0.5, 0.5, 0.5], &[0.5, 0.5, 0.5], min, max),
            None
        );
    }

    #[test]
    fn test_lightness_extremes() {
        for method in [GamutMapping::Bisection, GamutMapping::RayTrace] {
            let white = map_gamut(ColorSpace::Oklch, &[1.5, 0.3, 20.0], method);
            assert_eq!(white, [1.5, 0.3, 20.0], "Oklch is unbounded");

            let origin = [1.2, 0.3, 20.0];
            let white = match method {
                GamutMapping::Bisection => to_gamut_bisect(&origin, to_srgb, from_srgb),
                GamutMapping::RayTrace => to_gamut_ray_trace(&origin, to_srgb, from_srgb),
            };
            assert_close_coordinates!(&white, &[1.0, 1.0, 1.0], 1e-9);

            let origin = [-0.1, 0.3, 20.0];
            let black = match method {
                GamutMapping::Bisection => to_gamut_bisect(&origin, to_srgb, from_srgb),
                GamutMapping::RayTrace => to_gamut_ray_trace(&origin, to_srgb, from_srgb),
            };
            assert_same_coordinates!(ColorSpace::Srgb, &black, &[0.0, 0.0, 0.0]);
        }
    }

    #[test]
    fn test_no_op() {
        let mut rng = StdRng::seed_from_u64(0x42);

        for _ in 0..100 {
            let srgb = [
                rng.random_range(0.0..1.0),
                rng.random_range(0.0..1.0),
                rng.random_range(0.0..1.0),
            ];
            let origin = from_srgb(&srgb);

            for mapped in [
                to_gamut_bisect(&origin, to_srgb, from_srgb),
                to_gamut_ray_trace(&origin, to_srgb, from_srgb),
            ] {
                assert_close_coordinates!(&mapped, &clip(&to_srgb(&origin)), 1e-12);
                assert_close_coordinates!(&mapped, &srgb, 1e-9);
            }
        }
    }

    #[test]
    fn test_gamut_invariant() {
        let mut rng = StdRng::seed_from_u64(0x9a37);

        for target in [
            ColorSpace::Srgb,
            ColorSpace::DisplayP3,
            ColorSpace::A98Rgb,
            ColorSpace::Rec2020,
            ColorSpace::LinearProPhotoRgb,
            ColorSpace::Hwb,
        ] {
            for _ in 0..50 {
                let origin = [
                    rng.random_range(-0.2..1.2),
                    rng.random_range(0.0..0.5),
                    rng.random_range(0.0..360.0),
                ];
                let coordinates = convert(ColorSpace::Oklch, target, &origin);

                for method in [GamutMapping::Bisection, GamutMapping::RayTrace] {
                    let mapped = map_gamut(target, &coordinates, method);
                    assert!(
                        target.in_gamut(&mapped),
                        "{:?} in {} should be in gamut after {:?}",
                        mapped,
                        target,
                        method
                    );
                }
            }
        }
    }

    #[test]
    #[should_panic(expected = "gamut mapping requires finite Oklch coordinates")]
    fn test_non_finite() {
        to_gamut_bisect(&[0.5, Float::INFINITY, 30.0], to_srgb, from_srgb);
    }

    #[test]
    fn test_overflowing_coordinates() {
        for method in [GamutMapping::Bisection, GamutMapping::RayTrace] {
            let srgb = map_gamut(ColorSpace::Srgb, &[1e200, 0.0, 0.0], method);
            assert_eq!(srgb, [1.0, 0.0, 0.0], "{:?} should clip", method);

            let p3 = map_gamut(ColorSpace::DisplayP3, &[0.2, -1e300, 0.4], method);
            assert!(in_gamut(&p3), "{:?} should be in gamut after {:?}", p3, method);
        }
    }

    #[test]
    #[should_panic(expected = "gamut mapping requires finite coordinates")]
    fn test_infinite_coordinates() {
        let _ = map_gamut(
            ColorSpace::Srgb,
            &[Float::INFINITY, 0.0, 0.0],
            GamutMapping::RayTrace,
        );
    }

    #[test]
    fn test_powerless_hue() {
        let gray = to_gamut_ray_trace(&[0.5, 0.0, Float::NAN], to_srgb, from_srgb);
        assert_close_coordinates!(&gray, &to_srgb(&[0.5, 0.0, 0.0]), 1e-12);
    }
}
