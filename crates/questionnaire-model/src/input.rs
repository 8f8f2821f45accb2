//! Numeric form input.

/// Read an integer the way a browser form field is read: leading
/// whitespace, an optional sign, then as many base-10 digits as there are.
/// Trailing garbage is ignored ("12abc" is 12). Returns `None` when no
/// digit is found or the value does not fit in an `i64`.
pub fn parse_int(input: &str) -> Option<i64> {
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
    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Parse a decimal number, rejecting NaN and infinities.
pub(crate) fn parse_finite(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_prefix() {
        assert_eq!(parse_int("2"), Some(2));
        assert_eq!(parse_int("  10"), Some(10));
        assert_eq!(parse_int("12abc"), Some(12));
        assert_eq!(parse_int("-3"), Some(-3));
        assert_eq!(parse_int("+7"), Some(7));
        assert_eq!(parse_int("3.9"), Some(3));
    }

    #[test]
    fn test_parse_int_not_a_number() {
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int("-"), None);
        assert_eq!(parse_int("99999999999999999999"), None);
    }

    #[test]
    fn test_parse_finite() {
        assert_eq!(parse_finite(" 2.5 "), Some(2.5));
        assert_eq!(parse_finite("NaN"), None);
        assert_eq!(parse_finite("inf"), None);
        assert_eq!(parse_finite("x"), None);
    }
}
