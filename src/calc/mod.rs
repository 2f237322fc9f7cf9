//! Arithmetic core
//!
//! Text-to-number conversion and the JSON shape of a sum. Nothing here
//! knows about HTTP.

mod number;
mod parse;

use serde::Serialize;

pub use number::JsonNumber;
pub use parse::parse_optional;

/// Body of a successful `/add` response
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AddResponse {
    pub result: JsonNumber,
}

/// Sum two optional operands; missing or unparseable input is NaN and
/// propagates into the result.
pub fn add(a: Option<&str>, b: Option<&str>) -> AddResponse {
    AddResponse {
        result: JsonNumber(parse_optional(a) + parse_optional(b)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(a: Option<&str>, b: Option<&str>) -> String {
        serde_json::to_string(&add(a, b)).unwrap()
    }

    #[test]
    fn test_add_scenarios() {
        assert_eq!(body(Some("2"), Some("3")), r#"{"result":5}"#);
        assert_eq!(body(Some("2.5"), Some("0.5")), r#"{"result":3}"#);
        assert_eq!(body(Some("-4"), Some("4")), r#"{"result":0}"#);
        assert_eq!(body(Some("1.25"), Some("1")), r#"{"result":2.25}"#);
    }

    #[test]
    fn test_nan_propagates() {
        assert_eq!(body(None, Some("3")), r#"{"result":null}"#);
        assert_eq!(body(Some("2"), None), r#"{"result":null}"#);
        assert_eq!(body(Some("x"), Some("3")), r#"{"result":null}"#);
        assert_eq!(body(None, None), r#"{"result":null}"#);
    }

    #[test]
    fn test_infinities() {
        assert_eq!(body(Some("Infinity"), Some("1")), r#"{"result":null}"#);
        assert_eq!(
            body(Some("Infinity"), Some("-Infinity")),
            r#"{"result":null}"#
        );
        assert!(add(Some("1e308"), Some("1e308")).result.0.is_infinite());
    }

    #[test]
    fn test_sum_matches_float_addition() {
        let response = add(Some("0.1"), Some("0.2"));
        assert!((response.result.0 - (0.1 + 0.2)).abs() < f64::EPSILON);
    }
}
