//! Small numeric and text helpers shared across the update functions

/// Linearly map `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// A degenerate input range yields `out_min` instead of NaN.
pub fn map_range(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    let span = in_max - in_min;
    if span.abs() < f64::EPSILON {
        return out_min;
    }
    out_min + (value - in_min) * (out_max - out_min) / span
}

/// Check whether rendered text content is empty after trimming whitespace
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_range_endpoints() {
        assert_eq!(map_range(0.0, 0.0, 250.0, 0.0, 1.0), 0.0);
        assert_eq!(map_range(250.0, 0.0, 250.0, 0.0, 1.0), 1.0);
    }

    #[test]
    fn map_range_midpoint() {
        assert_eq!(map_range(160.0, 0.0, 250.0, 0.0, 1.0), 0.64);
    }

    #[test]
    fn map_range_degenerate_span() {
        assert_eq!(map_range(5.0, 0.0, 0.0, 0.0, 1.0), 0.0);
    }

    #[test]
    fn blank_detection() {
        assert!(is_blank("   \n\t "));
        assert!(is_blank(""));
        assert!(!is_blank(" menu "));
    }
}
