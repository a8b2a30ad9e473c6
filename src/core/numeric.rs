//! Null-safe arithmetic. Missing inputs never raise; they fall back to a default.

/// Replace a missing value with `default`.
pub fn safe(value: Option<f64>, default: f64) -> f64 {
    value.unwrap_or(default)
}

/// Square root that yields 0.0 for missing, non-positive or NaN input.
pub fn safe_sqrt(value: Option<f64>) -> f64 {
    match value {
        Some(x) if x > 0.0 => x.sqrt(),
        _ => 0.0,
    }
}

/// `numerator / denominator`, or 0.0 when the denominator is zero.
pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_sqrt_non_positive_or_missing() {
        assert_eq!(safe_sqrt(None), 0.0);
        assert_eq!(safe_sqrt(Some(0.0)), 0.0);
        assert_eq!(safe_sqrt(Some(-4.0)), 0.0);
        assert_eq!(safe_sqrt(Some(f64::NAN)), 0.0);
    }

    #[test]
    fn test_safe_sqrt_positive() {
        assert_eq!(safe_sqrt(Some(4.0)), 2.0);
        assert_eq!(safe_sqrt(Some(2.0)), 2.0_f64.sqrt());
    }

    #[test]
    fn test_safe_defaults() {
        assert_eq!(safe(None, 0.0), 0.0);
        assert_eq!(safe(None, 7.5), 7.5);
        assert_eq!(safe(Some(3.25), 0.0), 3.25);
        assert_eq!(safe(Some(0.0), 9.0), 0.0);
    }

    #[test]
    fn test_ratio_guards_zero_denominator() {
        assert_eq!(ratio(20.0, 0.0), 0.0);
        assert_eq!(ratio(300.0, 30.0), 10.0);
    }
}
