//! Pre-submission checks for the customer form.

use super::CustomerDraft;
use crate::shared::validation::{is_valid_email, is_valid_phone, FieldErrors};

/// Validate a customer draft. Errors are keyed by field name so the form
/// can surface each message inline next to the offending input.
pub fn validate_customer(draft: &CustomerDraft) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    if draft.username.trim().is_empty() {
        errors.push(("username", "Username is required".to_string()));
    }
    if draft.name.trim().is_empty() {
        errors.push(("name", "Name is required".to_string()));
    }
    if draft.email.trim().is_empty() {
        errors.push(("email", "Email is required".to_string()));
    } else if !is_valid_email(draft.email.trim()) {
        errors.push(("email", "Invalid email format!".to_string()));
    }
    if draft.phone.trim().is_empty() {
        errors.push(("phone", "Phone is required".to_string()));
    } else if !is_valid_phone(draft.phone.trim()) {
        errors.push(("phone", "Invalid phone number format!".to_string()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(username: &str, name: &str, email: &str, phone: &str) -> CustomerDraft {
        CustomerDraft {
            username: username.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
        }
    }

    #[test]
    fn accepts_complete_draft() {
        let d = draft("jdoe", "Jane Doe", "jane@example.com", "+6281234567890");
        assert!(validate_customer(&d).is_ok());
    }

    #[test]
    fn flags_every_missing_field() {
        let errors = validate_customer(&draft("", "", "", "")).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|(f, _)| *f).collect();
        assert_eq!(fields, vec!["username", "name", "email", "phone"]);
    }

    #[test]
    fn rejects_malformed_email() {
        let errors = validate_customer(&draft("u", "n", "not-an-email", "081234567890")).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].0, "email");
    }

    #[test]
    fn rejects_malformed_phone() {
        for bad in ["12345678", "1234567890123456", "+62abc4567890", "++6281234567"] {
            let errors = validate_customer(&draft("u", "n", "a@b.co", bad)).unwrap_err();
            assert_eq!(errors[0].0, "phone", "expected {bad:?} to be rejected");
        }
    }
}
