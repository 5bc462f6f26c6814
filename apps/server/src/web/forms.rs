//! Shared form-parsing helpers.
//!
//! Form payloads are string-typed so that invalid input can be re-rendered
//! verbatim. The helpers here parse and validate individual fields,
//! collecting errors instead of failing on the first one.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use std::str::FromStr;

/// A single validation failure, tied to the offending form field.
#[derive(Debug, Clone)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        FieldError {
            field,
            message: message.into(),
        }
    }
}

/// Required text field: trims, records an error when blank.
pub fn require_text(
    value: &str,
    field: &'static str,
    label: &str,
    errors: &mut Vec<FieldError>,
) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(FieldError::new(field, format!("{} is required", label)));
    }
    trimmed.to_string()
}

/// Optional text field: blank becomes None.
pub fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Optional decimal field: blank becomes None, garbage records an error.
pub fn parse_decimal(
    value: &str,
    field: &'static str,
    label: &str,
    errors: &mut Vec<FieldError>,
) -> Option<Decimal> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    match Decimal::from_str(trimmed) {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            errors.push(FieldError::new(field, format!("{} must be a number", label)));
            None
        }
    }
}

/// Optional decimal constrained to be non-negative (quantities, prices).
pub fn parse_non_negative_decimal(
    value: &str,
    field: &'static str,
    label: &str,
    errors: &mut Vec<FieldError>,
) -> Option<Decimal> {
    let parsed = parse_decimal(value, field, label, errors)?;
    if parsed.is_sign_negative() {
        errors.push(FieldError::new(
            field,
            format!("{} cannot be negative", label),
        ));
        return None;
    }
    Some(parsed)
}

/// Required integer field; records an error and yields 0 when unparseable
/// so the remaining fields still get validated.
pub fn parse_required_i32(
    value: &str,
    field: &'static str,
    label: &str,
    errors: &mut Vec<FieldError>,
) -> i32 {
    match value.trim().parse::<i32>() {
        Ok(parsed) => parsed,
        Err(_) => {
            errors.push(FieldError::new(
                field,
                format!("{} must be a whole number", label),
            ));
            0
        }
    }
}

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Optional date-time field; accepts the `datetime-local` input format with
/// or without seconds.
pub fn parse_datetime(
    value: &str,
    field: &'static str,
    label: &str,
    errors: &mut Vec<FieldError>,
) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(parsed);
        }
    }
    errors.push(FieldError::new(
        field,
        format!("{} must be a valid date and time", label),
    ));
    None
}

/// Formats a stored date-time back into the `datetime-local` input value.
pub fn datetime_input_value(value: Option<NaiveDateTime>) -> String {
    value
        .map(|v| v.format("%Y-%m-%dT%H:%M").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn blank_optional_fields_become_none() {
        let mut errors = Vec::new();
        assert_eq!(parse_decimal("  ", "qty", "Quantity", &mut errors), None);
        assert_eq!(parse_datetime("", "date", "Date", &mut errors), None);
        assert_eq!(optional_text("   "), None);
        assert!(errors.is_empty());
    }

    #[test]
    fn garbage_decimal_is_reported() {
        let mut errors = Vec::new();
        assert_eq!(
            parse_decimal("ten", "qty", "Quantity", &mut errors),
            None
        );
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "qty");
        assert!(errors[0].message.contains("must be a number"));
    }

    #[test]
    fn negative_quantity_is_reported() {
        let mut errors = Vec::new();
        assert_eq!(
            parse_non_negative_decimal("-2", "qty", "Quantity", &mut errors),
            None
        );
        assert!(errors[0].message.contains("cannot be negative"));
    }

    #[test]
    fn accepts_datetime_local_input() {
        let mut errors = Vec::new();
        let parsed = parse_datetime("2025-06-15T09:30", "date", "Date", &mut errors).unwrap();
        assert!(errors.is_empty());
        assert_eq!(datetime_input_value(Some(parsed)), "2025-06-15T09:30");

        assert!(parse_datetime("2025-06-15 09:30:00", "date", "Date", &mut errors).is_some());
        assert!(parse_datetime("yesterday", "date", "Date", &mut errors).is_none());
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn required_fields_collect_errors() {
        let mut errors = Vec::new();
        assert_eq!(require_text(" ", "account", "Account", &mut errors), "");
        assert_eq!(parse_required_i32("x", "curveId", "Curve id", &mut errors), 0);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn parses_valid_values() {
        let mut errors = Vec::new();
        assert_eq!(
            parse_non_negative_decimal("10.5", "qty", "Quantity", &mut errors),
            Some(dec!(10.5))
        );
        assert_eq!(
            parse_required_i32(" 7 ", "curveId", "Curve id", &mut errors),
            7
        );
        assert!(errors.is_empty());
    }
}
