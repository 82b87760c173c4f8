//! Keystroke-acceptance predicates
//!
//! Each editable field is gated by one of these predicates: the view computes
//! the value the field would hold after an edit and commits the edit only if
//! the predicate accepts it. Rejections are silent; no character appears and
//! no alert is raised.

/// Accept a proposed field value for the integer fields (power, hours,
/// minutes): digits only, empty allowed so the field can be cleared.
pub fn accepts_integer(proposed: &str) -> bool {
    proposed.chars().all(|c| c.is_ascii_digit())
}

/// Accept a proposed field value for the tariff field.
///
/// Deliberately a prefix rule rather than a full float parse: a lone "." or
/// "0." is a legitimate intermediate state of decimal entry and must not be
/// rejected, while a full `f64` parse would also let "inf", "nan" and
/// exponent forms through. Digits with at most one decimal point, empty
/// allowed.
pub fn accepts_decimal(proposed: &str) -> bool {
    let mut seen_point = false;
    for c in proposed.chars() {
        match c {
            '0'..='9' => {}
            '.' if !seen_point => seen_point = true,
            _ => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_accepts_digits() {
        assert!(accepts_integer(""));
        assert!(accepts_integer("0"));
        assert!(accepts_integer("100"));
        assert!(accepts_integer("007"));
    }

    #[test]
    fn test_integer_rejects_non_digits() {
        assert!(!accepts_integer("1a"));
        assert!(!accepts_integer("-1"));
        assert!(!accepts_integer("1.5"));
        assert!(!accepts_integer(" 1"));
        assert!(!accepts_integer("\u{660}")); // non-ASCII digit
    }

    #[test]
    fn test_decimal_accepts_float_entry() {
        assert!(accepts_decimal(""));
        assert!(accepts_decimal("3"));
        assert!(accepts_decimal("0.2173"));
        assert!(accepts_decimal("0."));
        assert!(accepts_decimal("."));
        assert!(accepts_decimal(".5"));
    }

    #[test]
    fn test_decimal_rejects_non_numeric() {
        assert!(!accepts_decimal("abc"));
        assert!(!accepts_decimal("0.2a"));
        assert!(!accepts_decimal("1e3"));
        assert!(!accepts_decimal("-1.5"));
        assert!(!accepts_decimal("+1"));
        assert!(!accepts_decimal("1.2.3"));
        assert!(!accepts_decimal("inf"));
    }
}
