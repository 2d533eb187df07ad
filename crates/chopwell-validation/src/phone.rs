//! Phone number normalization for locally formatted numbers.
//!
//! Ghana (`233`) numbers are carried in the 10-digit leading-zero local form
//! (e.g. `0591552809`). Normalization is best-effort and never fails; strict
//! correctness is enforced separately by
//! [`PhoneForCountryValidator`](crate::validators::phone::PhoneForCountryValidator).

/// Dialing code of the one country with full local-format support.
pub const GHANA_DIALING_CODE: &str = "233";

/// Allowed three-digit prefixes for Ghana local numbers, by carrier:
/// MTN, Telecel, AirtelTigo, Expresso.
pub const GHANA_PREFIXES: &[&str] = &[
    "024", "054", "055", "059", "025", "053", // MTN
    "020", "050", // Telecel
    "027", "057", "026", "056", // AirtelTigo
    "028", // Expresso
];

/// Check whether a canonical Ghana local number starts with a known carrier prefix.
pub fn has_ghana_prefix(local: &str) -> bool {
    local.is_ascii() && local.len() >= 3 && GHANA_PREFIXES.contains(&&local[..3])
}

/// Strip everything but ASCII digits.
pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn is_local_form(digits: &str) -> bool {
    digits.len() == 10 && digits.starts_with('0') && digits.chars().all(|c| c.is_ascii_digit())
}

/// Normalize a raw phone spelling into the canonical per-country local form.
///
/// Returns `None` only for empty input. For country code `233` the result is
/// the 10-digit leading-zero local form whenever the input has a recognizable
/// shape; otherwise a digits-only best effort. For other or unknown country
/// codes the digits-only remainder is returned untouched.
///
/// Idempotent on already-canonical input.
pub fn normalize_to_local(phone: &str, country_code: Option<&str>) -> Option<String> {
    if phone.is_empty() {
        return None;
    }

    // Strip whitespace, parentheses and dashes, then a leading '+'.
    let mut digits: String = phone
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '(' | ')' | '-'))
        .collect();
    if let Some(rest) = digits.strip_prefix('+') {
        digits = rest.to_string();
    }

    let cc_digits = country_code.map(digits_only);
    if cc_digits.as_deref() == Some(GHANA_DIALING_CODE) {
        // 233 + 9 digits -> drop the dialing code and prefix 0
        if digits.starts_with(GHANA_DIALING_CODE)
            && digits.len() == 12
            && digits.chars().all(|c| c.is_ascii_digit())
        {
            return Some(format!("0{}", &digits[3..]));
        }
        // Already the local 10-digit form
        if is_local_form(&digits) {
            return Some(digits);
        }
        // Bare 9 digits without the leading zero
        if digits.len() == 9 && digits.chars().all(|c| c.is_ascii_digit()) {
            return Some(format!("0{}", digits));
        }
        // Fallback: strip non-digits and accept if the local form emerges
        let only_digits = digits_only(&digits);
        if is_local_form(&only_digits) {
            return Some(only_digits);
        }
    }

    // Other countries or unrecognized shapes: best-effort digits
    let fallback = digits_only(&digits);
    if fallback.is_empty() {
        None
    } else {
        Some(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ghana_variants_normalize_to_local_form() {
        for raw in ["233591552809", "+233591552809", "591552809"] {
            assert_eq!(
                normalize_to_local(raw, Some("233")).as_deref(),
                Some("0591552809"),
                "raw: {raw}"
            );
        }
    }

    #[test]
    fn test_local_form_passes_through() {
        assert_eq!(
            normalize_to_local("0591552809", Some("233")).as_deref(),
            Some("0591552809")
        );
    }

    #[test]
    fn test_idempotent_on_canonical_input() {
        let first = normalize_to_local("+233 (059) 155-2809", Some("233")).unwrap();
        let second = normalize_to_local(&first, Some("233")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_formatting_characters_are_stripped() {
        assert_eq!(
            normalize_to_local("  +233 59 155 2809 ", Some("233")).as_deref(),
            Some("0591552809")
        );
        assert_eq!(
            normalize_to_local("(059) 155-2809", Some("233")).as_deref(),
            Some("0591552809")
        );
    }

    #[test]
    fn test_unrecognized_ghana_shape_falls_back_to_digits() {
        // 11 digits, not a known shape: best-effort digits
        assert_eq!(
            normalize_to_local("05915528091", Some("233")).as_deref(),
            Some("05915528091")
        );
    }

    #[test]
    fn test_other_country_is_digits_only() {
        assert_eq!(
            normalize_to_local("+1 (555) 010-9999", Some("1")).as_deref(),
            Some("15550109999")
        );
        assert_eq!(
            normalize_to_local("0591552809", None).as_deref(),
            Some("0591552809")
        );
    }

    #[test]
    fn test_empty_and_no_digits() {
        assert_eq!(normalize_to_local("", Some("233")), None);
        assert_eq!(normalize_to_local("++--", None), None);
    }

    #[test]
    fn test_country_code_with_punctuation_resolves() {
        assert_eq!(
            normalize_to_local("591552809", Some("+233")).as_deref(),
            Some("0591552809")
        );
    }

    #[test]
    fn test_ghana_prefix_check() {
        assert!(has_ghana_prefix("0591552809"));
        assert!(has_ghana_prefix("0241234567"));
        assert!(!has_ghana_prefix("0991234567"));
        assert!(!has_ghana_prefix("05"));
    }
}
