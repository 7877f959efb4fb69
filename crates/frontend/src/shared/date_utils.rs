//! Date-time conversions between the backend and the form controls.
//!
//! The backend stores order timestamps as "YYYY-MM-DD HH:MM"; the
//! `datetime-local` input wants "YYYY-MM-DDTHH:MM". Values that parse
//! as neither are passed through unchanged.

use chrono::NaiveDateTime;

const SERVER_FORMAT: &str = "%Y-%m-%d %H:%M";
const PICKER_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Server form to `datetime-local` value, for pre-populating the edit form.
/// Example: "2025-07-01 09:30" -> "2025-07-01T09:30"
pub fn to_picker_value(value: &str) -> String {
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, SERVER_FORMAT) {
        return dt.format(PICKER_FORMAT).to_string();
    }
    if NaiveDateTime::parse_from_str(value, PICKER_FORMAT).is_ok() {
        return value.to_string();
    }
    value.to_string()
}

/// `datetime-local` value to the server form used in mutation payloads.
/// Example: "2025-07-01T09:30" -> "2025-07-01 09:30"
pub fn to_server_value(value: &str) -> String {
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, PICKER_FORMAT) {
        return dt.format(SERVER_FORMAT).to_string();
    }
    if NaiveDateTime::parse_from_str(value, SERVER_FORMAT).is_ok() {
        return value.to_string();
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_picker_value() {
        assert_eq!(to_picker_value("2025-07-01 09:30"), "2025-07-01T09:30");
        assert_eq!(to_picker_value("2025-07-01T09:30"), "2025-07-01T09:30");
    }

    #[test]
    fn test_to_server_value() {
        assert_eq!(to_server_value("2025-07-01T09:30"), "2025-07-01 09:30");
        assert_eq!(to_server_value("2025-07-01 09:30"), "2025-07-01 09:30");
    }

    #[test]
    fn test_invalid_values_pass_through() {
        assert_eq!(to_picker_value("yesterday"), "yesterday");
        assert_eq!(to_server_value(""), "");
    }
}
