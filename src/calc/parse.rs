//! Leading floating-point token parser
//!
//! Reads the longest numeric prefix of a string and ignores whatever
//! follows it. Anything without a numeric prefix is NaN, never an error.
//!
//! Accepted grammar after leading white space:
//!
//! ```text
//! [+-]? ( "Infinity" | digits ( "." digits? )? exponent? | "." digits exponent? )
//! exponent = [eE] [+-]? digits
//! ```

const INFINITY: &str = "Infinity";

/// Parse the leading float of `input`, or NaN if there is none
pub fn parse_leading_float(input: &str) -> f64 {
    let trimmed = input.trim_start_matches(is_js_whitespace);
    let len = numeric_prefix_len(trimmed.as_bytes());
    if len == 0 {
        return f64::NAN;
    }

    let token = &trimmed[..len];
    match token.strip_prefix(&['+', '-'][..]).unwrap_or(token) {
        INFINITY if token.starts_with('-') => f64::NEG_INFINITY,
        INFINITY => f64::INFINITY,
        // Rust's float grammar is a superset of the prefix we matched
        _ => token.parse().unwrap_or(f64::NAN),
    }
}

/// Parse an optional value; a missing value is NaN
pub fn parse_optional(input: Option<&str>) -> f64 {
    input.map_or(f64::NAN, parse_leading_float)
}

/// White space and line terminators as JavaScript defines them.
///
/// Unlike `char::is_whitespace` this includes BOM and excludes NEL.
fn is_js_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

/// Byte length of the numeric prefix, 0 if there is none
fn numeric_prefix_len(bytes: &[u8]) -> usize {
    let mut pos = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    if bytes[pos..].starts_with(INFINITY.as_bytes()) {
        return pos + INFINITY.len();
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = count_digits(&bytes[pos + 1..]);
        // "5." is a number, a lone "." is not
        if int_digits > 0 || frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp = pos + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(&bytes[exp..]);
        if exp_digits > 0 {
            pos = exp + exp_digits;
        }
    }

    pos
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_parses(input: &str, expected: f64) {
        let got = parse_leading_float(input);
        assert!(
            got == expected && got.is_sign_negative() == expected.is_sign_negative(),
            "{input:?}: expected {expected}, got {got}"
        );
    }

    fn assert_nan(input: &str) {
        let got = parse_leading_float(input);
        assert!(got.is_nan(), "{input:?}: expected NaN, got {got}");
    }

    #[test]
    fn test_plain_numbers() {
        assert_parses("2", 2.0);
        assert_parses("2.5", 2.5);
        assert_parses("-4", -4.0);
        assert_parses("+7", 7.0);
        assert_parses("0.5", 0.5);
        assert_parses("-0", -0.0);
    }

    #[test]
    fn test_partial_fraction() {
        assert_parses("5.", 5.0);
        assert_parses(".5", 0.5);
        assert_parses("-.25", -0.25);
        assert_nan(".");
        assert_nan("-.");
    }

    #[test]
    fn test_stops_at_first_invalid_char() {
        assert_parses("3abc", 3.0);
        assert_parses("1.2.3", 1.2);
        assert_parses("12px", 12.0);
        assert_parses("1,5", 1.0);
        assert_parses("0x10", 0.0);
        assert_parses("1_000", 1.0);
    }

    #[test]
    fn test_exponent() {
        assert_parses("1e3", 1000.0);
        assert_parses("2.5E-1", 0.25);
        assert_parses(".5e+1", 5.0);
        // Incomplete exponents are left unconsumed
        assert_parses("1e", 1.0);
        assert_parses("1e+", 1.0);
        assert_parses("7e-x", 7.0);
    }

    #[test]
    fn test_infinity() {
        assert_parses("Infinity", f64::INFINITY);
        assert_parses("-Infinity", f64::NEG_INFINITY);
        assert_parses("+Infinityxyz", f64::INFINITY);
        assert_nan("infinity");
        assert_nan("inf");
        assert_nan("NaN");
    }

    #[test]
    fn test_leading_whitespace() {
        assert_parses("  42", 42.0);
        assert_parses("\t\n\r 1.5", 1.5);
        assert_parses("\u{00A0}\u{FEFF}8", 8.0);
        assert_nan("\u{0085}8");
        assert_nan("- 1");
    }

    #[test]
    fn test_not_a_number() {
        assert_nan("");
        assert_nan("abc");
        assert_nan("+");
        assert_nan("e5");
        assert!(parse_optional(None).is_nan());
        assert_parses("9", parse_optional(Some("9")));
    }

    #[test]
    fn test_large_and_small() {
        assert_parses("1e400", f64::INFINITY);
        assert_parses("1e-400", 0.0);
        assert_parses("1.7976931348623157e308", f64::MAX);
    }
}
