//! Field-level validation primitives shared by the form checks.

/// Validation errors keyed by field name, in the order the fields appear
/// on the form. Empty means the input is valid.
pub type FieldErrors = Vec<(&'static str, String)>;

/// Minimal email shape check: a local part, one '@', and a dotted
/// domain. Anything stricter belongs to the backend.
pub fn is_valid_email(value: &str) -> bool {
    if value.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.len() >= 3 && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Phone pattern `^\+?\d{9,15}$`: optional leading '+', then 9 to 15
/// digits, nothing else.
pub fn is_valid_phone(value: &str) -> bool {
    let digits = value.strip_prefix('+').unwrap_or(value);
    (9..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email("a.b+c@mail.co.id"));
        assert!(!is_valid_email("janeexample.com"));
        assert!(!is_valid_email("jane@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("jane@.com"));
        assert!(!is_valid_email("jane doe@example.com"));
        assert!(!is_valid_email("jane@exa@mple.com"));
    }

    #[test]
    fn phone_shapes() {
        assert!(is_valid_phone("081234567890"));
        assert!(is_valid_phone("+6281234567890"));
        assert!(is_valid_phone("123456789"));
        assert!(is_valid_phone("123456789012345"));
        assert!(!is_valid_phone("12345678"));
        assert!(!is_valid_phone("1234567890123456"));
        assert!(!is_valid_phone("+62-812-3456"));
        assert!(!is_valid_phone("0812345678a"));
        assert!(!is_valid_phone("++628123456789"));
    }
}
