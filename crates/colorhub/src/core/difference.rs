use crate::Float;

/// Compute Delta E for Oklab.
///
/// This function computes the Euclidean distance between the two colors in
/// Oklab. Since Oklab is perceptually uniform, equal distances approximate
/// equally perceived color differences.
///
/// ```
/// # use colorhub::delta_e_ok;
/// assert_eq!(delta_e_ok(&[0.5, 0.0, 0.0], &[0.5, 3.0, 4.0]), 5.0);
/// ```
#[inline]
pub fn delta_e_ok(reference: &[Float; 3], sample: &[Float; 3]) -> Float {
    let dl = reference[0] - sample[0];
    let da = reference[1] - sample[1];
    let db = reference[2] - sample[2];

    dl.mul_add(dl, da.mul_add(da, db * db)).sqrt()
}

/// Find the candidate closest to the origin.
///
/// This function determines the index of the candidate with the smallest
/// distance from the origin, as computed by the given distance function. If
/// several candidates are equally close, it returns the first such index. If
/// there are no candidates or all distances are not-a-number, it returns
/// `None`.
pub fn find_closest<C, F>(origin: &[Float; 3], candidates: C, distance: F) -> Option<usize>
where
    C: IntoIterator<Item = [Float; 3]>,
    F: Fn(&[Float; 3], &[Float; 3]) -> Float,
{
    let mut min_distance = Float::INFINITY;
    let mut min_index = None;

    for (index, candidate) in candidates.into_iter().enumerate() {
        let d = distance(origin, &candidate);
        if d < min_distance {
            min_distance = d;
            min_index = Some(index);
        }
    }

    min_index
}
