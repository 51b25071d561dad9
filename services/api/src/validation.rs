//! Input validation utilities
//!
//! Validators return `Result<_, String>`; handlers surface the message as
//! a 400 response before any repository call is made.

use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

/// Require a non-empty string field
pub fn require_field(field: &str, value: Option<&str>) -> Result<String, String> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(format!("{field} is required")),
    }
}

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email is required".to_string());
    }

    if email.len() > 254 {
        return Err("Email must be at most 254 characters long".to_string());
    }

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        return Err("Invalid email format".to_string());
    }

    Ok(())
}

/// Validate password length bounds
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password is required".to_string());
    }

    if password.len() < 8 {
        return Err("Password must be at least 8 characters long".to_string());
    }

    if password.len() > 128 {
        return Err("Password must be at most 128 characters long".to_string());
    }

    Ok(())
}

/// Parse a reporting year from its textual form
pub fn parse_year(raw: &str) -> Result<i32, String> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| "Reporting year must be a number".to_string())
}

/// Extract a reporting year from an untyped JSON payload field
///
/// Accepts a JSON number or a numeric string; anything else is a
/// caller-fixable validation failure.
pub fn year_from_json(value: Option<&Value>) -> Result<i32, String> {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(|year| i32::try_from(year).ok())
            .ok_or_else(|| "Reporting year must be a whole number".to_string()),
        Some(Value::String(s)) => parse_year(s),
        _ => Err("Reporting year must be a number".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn require_field_rejects_missing_and_blank_values() {
        assert_eq!(require_field("Name", None), Err("Name is required".to_string()));
        assert_eq!(require_field("Name", Some("   ")), Err("Name is required".to_string()));
        assert_eq!(require_field("Name", Some(" Health ")), Ok("Health".to_string()));
    }

    #[test]
    fn validates_email_format() {
        assert!(validate_email("staff@example.org").is_ok());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("").is_err());
    }

    #[test]
    fn validates_password_length() {
        assert!(validate_password("longenough1").is_ok());
        assert!(validate_password("short").is_err());
        assert!(validate_password("").is_err());
    }

    #[test]
    fn parses_numeric_years_only() {
        assert_eq!(parse_year("2024"), Ok(2024));
        assert_eq!(parse_year(" 2024 "), Ok(2024));
        assert!(parse_year("twenty24").is_err());
        assert!(parse_year("").is_err());
    }

    #[test]
    fn extracts_year_from_json_number_or_string() {
        assert_eq!(year_from_json(Some(&json!(2024))), Ok(2024));
        assert_eq!(year_from_json(Some(&json!("2024"))), Ok(2024));
        assert!(year_from_json(Some(&json!(2024.5))).is_err());
        assert!(year_from_json(Some(&json!("next year"))).is_err());
        assert!(year_from_json(Some(&json!(null))).is_err());
        assert!(year_from_json(None).is_err());
    }
}
