//! Field-level validation helpers shared by the request payload types.
//!
//! Validation failures are reported as a field-keyed map so clients can
//! attach messages to the offending form inputs.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use validator::ValidationErrors;

/// Map of field name to human-readable error message.
pub type FieldErrors = BTreeMap<String, String>;

/// Flatten `validator` derive output into a field-keyed message map,
/// keeping the first message per field.
pub fn field_errors_from(errors: &ValidationErrors) -> FieldErrors {
    let mut map = FieldErrors::new();
    for (field, field_errors) in errors.field_errors() {
        if let Some(error) = field_errors.first() {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{field} is invalid"));
            map.insert(field.to_string(), message);
        }
    }
    map
}

/// Loose phone check: at least ten characters drawn from digits, spaces,
/// and common separators.
pub fn is_valid_phone(phone: &str) -> bool {
    let trimmed = phone.trim();
    trimmed.len() >= 10
        && trimmed
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '+' | '(' | ')'))
}

/// Parse an ISO `YYYY-MM-DD` date string.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Today's date in UTC, the reference point for all date-ordering rules.
pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}
