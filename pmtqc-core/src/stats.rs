//! Small statistics helpers over raw `f64` samples.

/// Picoseconds per nanosecond.
pub const PS_PER_NS: f64 = 1000.0;

/// Arithmetic mean. Returns 0.0 for an empty slice.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (`ddof = 0`). Returns 0.0 for an empty slice.
#[must_use]
pub fn std_population(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(std_population(&[]), 0.0);
    }

    #[test]
    fn test_std_population() {
        // Population std of {2, 4, 4, 4, 5, 5, 7, 9} is exactly 2.
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(std_population(&values), 2.0);
        assert_relative_eq!(mean(&values), 5.0);
    }

    #[test]
    fn test_std_constant_samples() {
        assert_relative_eq!(std_population(&[3.0, 3.0, 3.0]), 0.0);
    }
}
