//! Normalization Utilities
//!
//! Min-max scaling of one calculator's raw column onto 0-100 across the whole
//! surviving population.
//!
//! A column whose values are all equal has no spread to scale against. Every
//! record then normalizes to 0 and the caller is told through
//! `ValueRange::Degenerate`.

/// Spread of a raw score column
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueRange {
    /// No values at all
    Empty,
    /// Every value equal (includes single-record populations)
    Degenerate { value: f64 },
    Spread { min: f64, max: f64 },
}

/// A normalized column together with the range it was scaled against
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedColumn {
    pub values: Vec<f64>,
    pub range: ValueRange,
}

impl NormalizedColumn {
    pub fn is_degenerate(&self) -> bool {
        matches!(self.range, ValueRange::Degenerate { .. })
    }
}

/// Find min and max of a column
pub fn value_range(raw: &[f64]) -> ValueRange {
    let Some(&first) = raw.first() else {
        return ValueRange::Empty;
    };

    let (min, max) = raw
        .iter()
        .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));

    if max > min {
        ValueRange::Spread { min, max }
    } else {
        ValueRange::Degenerate { value: min }
    }
}

/// Min-max normalize to 0-100
///
/// `normalized = (raw - min) / (max - min) * 100`. Degenerate columns map to 0.
pub fn min_max_normalize(raw: &[f64]) -> NormalizedColumn {
    let range = value_range(raw);

    let values = match range {
        ValueRange::Empty => Vec::new(),
        ValueRange::Degenerate { .. } => vec![0.0; raw.len()],
        ValueRange::Spread { min, max } => {
            let span = max - min;
            raw.iter()
                .map(|&v| ((v - min) / span * 100.0).clamp(0.0, 100.0))
                .collect()
        }
    };

    NormalizedColumn { values, range }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_min_max_endpoints() {
        let col = min_max_normalize(&[13.2, 11.2, 12.2]);
        assert_relative_eq!(col.values[0], 100.0, epsilon = 1e-9);
        assert_relative_eq!(col.values[1], 0.0, epsilon = 1e-9);
        assert_relative_eq!(col.values[2], 50.0, epsilon = 1e-9);
        assert_eq!(col.range, ValueRange::Spread { min: 11.2, max: 13.2 });
    }

    #[test]
    fn test_degenerate_column_is_zero() {
        let col = min_max_normalize(&[7.5, 7.5, 7.5]);
        assert!(col.is_degenerate());
        assert_eq!(col.values, vec![0.0, 0.0, 0.0]);
        assert!(col.values.iter().all(|v| !v.is_nan()));
    }

    #[test]
    fn test_single_value_is_degenerate() {
        let col = min_max_normalize(&[42.0]);
        assert_eq!(col.range, ValueRange::Degenerate { value: 42.0 });
        assert_eq!(col.values, vec![0.0]);
    }

    #[test]
    fn test_empty_column() {
        let col = min_max_normalize(&[]);
        assert_eq!(col.range, ValueRange::Empty);
        assert!(col.values.is_empty());
    }

    #[test]
    fn test_negative_values() {
        // Team-impact deltas can push raw scores below zero
        let col = min_max_normalize(&[-4.0, 0.0, 6.0]);
        assert_relative_eq!(col.values[0], 0.0, epsilon = 1e-9);
        assert_relative_eq!(col.values[1], 40.0, epsilon = 1e-9);
        assert_relative_eq!(col.values[2], 100.0, epsilon = 1e-9);
    }
}
