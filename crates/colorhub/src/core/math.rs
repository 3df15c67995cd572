use crate::Float;

/// A 3 by 3 matrix in row-major order.
pub type Matrix = [[Float; 3]; 3];

/// The factor determining rounding precision for equality comparisons.
///
/// When limiting a floating point number's precision, the number is
/// multiplied by some factor, rounded, and divided by the same factor again.
/// Since that factor is a power of ten, it directly translates into
/// significant digits after the decimal.
pub(crate) const ROUNDING_FACTOR: Float = 1e12;

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
///
/// ```
/// # use colorhub::transfer::multiply;
/// let swap = [[0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 2.0]];
/// assert_eq!(multiply(&swap, &[1.0, 2.0, 3.0]), [2.0, 1.0, 6.0]);
/// ```
#[inline]
pub fn multiply(matrix: &Matrix, vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

/// Apply the function to each coordinate.
#[inline]
pub(crate) fn each(value: &[Float; 3], f: fn(Float) -> Float) -> [Float; 3] {
    [f(value[0]), f(value[1]), f(value[2])]
}

/// Normalize the hue to `0..360`.
///
/// Not-a-number stays not-a-number. Since `rem_euclid` may round a tiny
/// negative hue up to exactly 360, this function folds that case back onto 0.
#[inline]
pub(crate) fn normalize_hue(hue: Float) -> Float {
    let hue = hue.rem_euclid(360.0);
    if hue >= 360.0 {
        0.0
    } else {
        hue
    }
}

#[cfg(test)]
mod test {
    use super::{multiply, normalize_hue};

    #[test]
    fn test_multiply() {
        let identity = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        assert_eq!(multiply(&identity, &[0.25, -3.0, 7.5]), [0.25, -3.0, 7.5]);

        let matrix = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]];
        assert_eq!(multiply(&matrix, &[1.0, 0.0, -1.0]), [-2.0, -2.0, -2.0]);
    }

    #[test]
    fn test_normalize_hue() {
        assert_eq!(normalize_hue(0.0), 0.0);
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(-90.0), 270.0);
        assert_eq!(normalize_hue(725.0), 5.0);
        assert_eq!(normalize_hue(-1e-15), 0.0);
        assert!(normalize_hue(f64::NAN).is_nan());
    }
}
