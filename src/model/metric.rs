use super::Field;

/// Number of cells strictly greater than `threshold`, boundary included.
pub fn count_above_threshold(field: &Field, threshold: f64) -> usize {
    field.iter().filter(|&&value| value > threshold).count()
}

/// Fraction of all cells strictly greater than `threshold`, in `[0, 1]`.
pub fn fraction_above_threshold(field: &Field, threshold: f64) -> f64 {
    count_above_threshold(field, threshold) as f64 / field.domain().size() as f64
}
