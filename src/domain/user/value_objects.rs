use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Both accept the empty string, which clears an optional field.
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^$|^\+?[0-9(][0-9 ()\-]{5,19}$").unwrap();
    pub static ref POSTCODE_REGEX: Regex = Regex::new(r"^$|^[A-Za-z0-9][A-Za-z0-9 \-]{1,19}$").unwrap();
}

/// Emails are compared and stored trimmed and lowercased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Empty or whitespace-only optional text is stored as `None`.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
