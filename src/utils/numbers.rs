//! Lenient integer parsing for form and query values.

use crate::domain::ScalarInput;

/// Parse the leading integer of a string.
///
/// Leading whitespace and a sign are accepted, then digits up to the first
/// non-digit: `"30min"` is 30, `"abc"` and `""` are `None`.
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let value: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// 2^63, the first magnitude an i64 cannot hold
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Integer value of a scalar body field; numbers are truncated toward zero
/// and rejected outside the i64 range.
pub fn parse_int_input(input: &ScalarInput) -> Option<i64> {
    match input {
        ScalarInput::Text(text) => parse_leading_int(text),
        ScalarInput::Number(n) => {
            let n = n.trunc();
            // `as` would saturate anything outside i64
            (n.is_finite() && (-I64_BOUND..I64_BOUND).contains(&n)).then_some(n as i64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("30"), Some(30));
        assert_eq!(parse_leading_int("  42"), Some(42));
        assert_eq!(parse_leading_int("30min"), Some(30));
        assert_eq!(parse_leading_int("12.9"), Some(12));
        assert_eq!(parse_leading_int("-5"), Some(-5));
        assert_eq!(parse_leading_int("+7"), Some(7));
    }

    #[test]
    fn test_parse_leading_int_rejects_non_numbers() {
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("x10"), None);
        assert_eq!(parse_leading_int("99999999999999999999"), None);
    }

    #[test]
    fn test_parse_int_input_truncates_numbers() {
        assert_eq!(parse_int_input(&ScalarInput::Number(30.7)), Some(30));
        assert_eq!(parse_int_input(&ScalarInput::Number(-1.5)), Some(-1));
        assert_eq!(parse_int_input(&ScalarInput::Number(f64::INFINITY)), None);
        assert_eq!(parse_int_input(&ScalarInput::Number(f64::NAN)), None);
        assert_eq!(parse_int_input(&ScalarInput::from("15")), Some(15));
    }

    #[test]
    fn test_parse_int_input_rejects_out_of_range() {
        assert_eq!(parse_int_input(&ScalarInput::Number(1e30)), None);
        assert_eq!(parse_int_input(&ScalarInput::Number(-1e30)), None);
        assert_eq!(parse_int_input(&ScalarInput::Number(9.3e18)), None);
        assert_eq!(
            parse_int_input(&ScalarInput::Number(-9_223_372_036_854_775_808.0)),
            Some(i64::MIN)
        );
    }
}
