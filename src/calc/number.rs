//! JSON encoding for `f64` results
//!
//! Non-finite values have no JSON form and are written as `null`.
//! Integral values inside the exactly representable range are written
//! without a fractional part, so `5.0` goes out as `5` and `-0.0` as `0`.

use serde::{Serialize, Serializer};

/// Largest magnitude below which every integral `f64` is exact
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0; // 2^53

/// An `f64` that serializes the way JSON consumers expect numbers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsonNumber(pub f64);

impl Serialize for JsonNumber {
    #[allow(clippy::cast_possible_truncation)]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = self.0;
        if !value.is_finite() {
            return serializer.serialize_none();
        }
        if value.fract() == 0.0 && value.abs() < MAX_SAFE_INTEGER {
            return serializer.serialize_i64(value as i64);
        }
        serializer.serialize_f64(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(value: f64) -> String {
        serde_json::to_string(&JsonNumber(value)).unwrap()
    }

    #[test]
    fn test_integral_values() {
        assert_eq!(encode(5.0), "5");
        assert_eq!(encode(0.0), "0");
        assert_eq!(encode(-0.0), "0");
        assert_eq!(encode(-12.0), "-12");
        assert_eq!(encode(9_007_199_254_740_991.0), "9007199254740991");
    }

    #[test]
    fn test_fractional_values() {
        assert_eq!(encode(2.5), "2.5");
        assert_eq!(encode(-0.125), "-0.125");
        assert_eq!(encode(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_non_finite_is_null() {
        assert_eq!(encode(f64::NAN), "null");
        assert_eq!(encode(f64::INFINITY), "null");
        assert_eq!(encode(f64::NEG_INFINITY), "null");
    }

    #[test]
    fn test_large_values_stay_floats() {
        let value: f64 = serde_json::from_str(&encode(1e300)).unwrap();
        assert!((value - 1e300).abs() < f64::EPSILON * 1e300);
    }
}
