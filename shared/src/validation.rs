//! # Validation Rules
//!
//! Stateless checks for each create account field. Every rule comes in two
//! flavours:
//!
//! - `is_valid_*` answers "does this value satisfy the rule?" and is what the
//!   submission gate uses. Empty values never satisfy it.
//! - `validate_*` produces the message shown under the input. Empty values are
//!   accepted so a field that was never typed into shows no error.
//!
//! Both flavours share the same predicate, so the inline messages and the
//! submit button cannot disagree about what a valid value looks like.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::FormData;

/// Usernames must be longer than this many characters
pub const USERNAME_MIN_EXCLUSIVE_LENGTH: usize = 3;
pub const PASSWORD_MIN_LENGTH: usize = 8;
/// The only non-alphanumeric characters a password may contain
pub const PASSWORD_SYMBOLS: &str = "@$!%*?&";

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

// Character set and length only. The regex crate has no lookahead, so the
// per-class requirements are checked separately in `is_valid_password`.
static PASSWORD_CHARSET_REGEX: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        r"^[A-Za-z0-9{}]{{{},}}$",
        regex::escape(PASSWORD_SYMBOLS),
        PASSWORD_MIN_LENGTH
    );
    Regex::new(&pattern).expect("password pattern is valid")
});

// `DD / MM / YYYY`, whitespace allowed only around the slashes
static TYPED_DATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{1,2})\s*/\s*([0-9]{1,2})\s*/\s*([0-9]{4})$")
        .expect("typed date pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsernameError {
    #[error("Username must be greater than 3 characters.")]
    TooShort,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("Email address must be a valid email.")]
    InvalidFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordError {
    #[error("Password must be at least 8 characters, include a number, an uppercase letter, and a special character.")]
    TooWeak,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfirmPasswordError {
    #[error("Passwords do not match.")]
    Mismatch,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateOfBirthError {
    #[error("Date of birth cannot be in the future.")]
    InFuture,
    #[error("Date of birth must be a valid date.")]
    InvalidDate,
}

/// Length in characters, not bytes
fn char_len(value: &str) -> usize {
    value.chars().count()
}

pub fn is_valid_username(username: &str) -> bool {
    char_len(username) > USERNAME_MIN_EXCLUSIVE_LENGTH
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// At least 8 characters from `[A-Za-z0-9@$!%*?&]`, with at least one
/// lowercase letter, one uppercase letter, one digit and one symbol.
pub fn is_valid_password(password: &str) -> bool {
    PASSWORD_CHARSET_REGEX.is_match(password)
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
}

pub fn validate_username(username: &str) -> Result<(), UsernameError> {
    if username.is_empty() || is_valid_username(username) {
        Ok(())
    } else {
        Err(UsernameError::TooShort)
    }
}

pub fn validate_email(email: &str) -> Result<(), EmailError> {
    if email.is_empty() || is_valid_email(email) {
        Ok(())
    } else {
        Err(EmailError::InvalidFormat)
    }
}

pub fn validate_password(password: &str) -> Result<(), PasswordError> {
    if password.is_empty() || is_valid_password(password) {
        Ok(())
    } else {
        Err(PasswordError::TooWeak)
    }
}

/// Compares against the password as it is right now. Nothing re-runs this
/// when the password changes afterwards.
pub fn validate_confirm_password(
    confirm_password: &str,
    password: &str,
) -> Result<(), ConfirmPasswordError> {
    if confirm_password.is_empty() || confirm_password == password {
        Ok(())
    } else {
        Err(ConfirmPasswordError::Mismatch)
    }
}

/// Parse a date of birth as entered in either input mode.
///
/// Accepts `YYYY-MM-DD` from the date picker and `DD / MM / YYYY` typed into
/// the text input (the spaces around `/` are optional).
pub fn parse_date_of_birth(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    let captures = TYPED_DATE_REGEX.captures(trimmed)?;
    let day = captures[1].parse().ok()?;
    let month = captures[2].parse().ok()?;
    let year = captures[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// `today` is the local calendar date; time of day plays no part.
pub fn validate_date_of_birth(value: &str, today: NaiveDate) -> Result<(), DateOfBirthError> {
    if value.trim().is_empty() {
        return Ok(());
    }

    match parse_date_of_birth(value) {
        Some(date) if date > today => Err(DateOfBirthError::InFuture),
        Some(_) => Ok(()),
        None => Err(DateOfBirthError::InvalidDate),
    }
}

pub fn is_valid_date_of_birth(value: &str, today: NaiveDate) -> bool {
    parse_date_of_birth(value).map_or(false, |date| date <= today)
}

/// The submission gate.
///
/// Re-checks every raw value from scratch rather than reading the displayed
/// error messages, so a stale message (for example a confirm password error
/// left over after the password was edited) does not affect it.
pub fn is_form_valid(data: &FormData, accepted_terms: bool, today: NaiveDate) -> bool {
    is_valid_username(&data.username)
        && is_valid_date_of_birth(&data.date_of_birth, today)
        && is_valid_email(&data.email)
        && is_valid_password(&data.password)
        && data.password == data.confirm_password
        && accepted_terms
}

/// Message to display for a rule outcome, empty when it passed
pub fn message<E: std::fmt::Display>(result: Result<(), E>) -> String {
    match result {
        Ok(()) => String::new(),
        Err(e) => e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn valid_form() -> FormData {
        FormData {
            username: "alice".to_string(),
            date_of_birth: "2000-01-01".to_string(),
            email: "alice@example.com".to_string(),
            password: "Passw0rd!".to_string(),
            confirm_password: "Passw0rd!".to_string(),
        }
    }

    #[test]
    fn test_username_length_boundaries() {
        assert_eq!(validate_username(""), Ok(()));
        assert_eq!(validate_username("a"), Err(UsernameError::TooShort));
        assert_eq!(validate_username("ab"), Err(UsernameError::TooShort));
        assert_eq!(validate_username("abc"), Err(UsernameError::TooShort));
        assert_eq!(validate_username("abcd"), Ok(()));

        assert!(!is_valid_username(""));
        assert!(!is_valid_username("abc"));
        assert!(is_valid_username("abcd"));
    }

    #[test]
    fn test_username_counts_characters_not_bytes() {
        // Three characters, six bytes
        assert_eq!(validate_username("äöü"), Err(UsernameError::TooShort));
        assert_eq!(validate_username("äöüß"), Ok(()));
    }

    #[test]
    fn test_username_error_message() {
        assert_eq!(
            message(validate_username("ab")),
            "Username must be greater than 3 characters."
        );
        assert_eq!(message(validate_username("alice")), "");
    }

    #[test]
    fn test_email_format() {
        let valid = ["alice@example.com", "a@b.co", "first.last@sub.domain.org", "x+tag@y.z"];
        for email in valid {
            assert!(is_valid_email(email), "{} should be valid", email);
            assert_eq!(validate_email(email), Ok(()));
        }

        let invalid = [
            "alice",
            "alice@",
            "alice@example",
            "@example.com",
            "alice@@example.com",
            "alice @example.com",
            "alice@exa mple.com",
            "alice@example.",
        ];
        for email in invalid {
            assert!(!is_valid_email(email), "{} should be invalid", email);
            assert_eq!(validate_email(email), Err(EmailError::InvalidFormat));
        }

        assert_eq!(validate_email(""), Ok(()));
        assert!(!is_valid_email(""));
        assert_eq!(
            message(validate_email("alice")),
            "Email address must be a valid email."
        );
    }

    #[test]
    fn test_password_accepts_every_symbol() {
        for symbol in PASSWORD_SYMBOLS.chars() {
            let password = format!("Passw0rd{}", symbol);
            assert!(is_valid_password(&password), "{} should be valid", password);
        }
    }

    #[test]
    fn test_password_requires_each_character_class() {
        assert!(is_valid_password("Passw0rd!"));
        assert!(is_valid_password("Aa1@aaaa"));

        // Missing one class each
        assert!(!is_valid_password("passw0rd!"));
        assert!(!is_valid_password("PASSW0RD!"));
        assert!(!is_valid_password("Password!"));
        assert!(!is_valid_password("Passw0rdd"));

        // Too short
        assert!(!is_valid_password("Pa0!"));
        assert!(!is_valid_password("Aa1@aaa"));

        // Characters outside the allowed set
        assert!(!is_valid_password("Passw0rd!#"));
        assert!(!is_valid_password("Passw0rd! "));
        assert!(!is_valid_password("Pässw0rd!"));
    }

    #[test]
    fn test_password_error_message() {
        assert_eq!(validate_password(""), Ok(()));
        assert_eq!(validate_password("Passw0rd!"), Ok(()));
        assert_eq!(validate_password("password"), Err(PasswordError::TooWeak));
        assert_eq!(
            message(validate_password("password")),
            "Password must be at least 8 characters, include a number, an uppercase letter, and a special character."
        );
    }

    #[test]
    fn test_confirm_password() {
        assert_eq!(validate_confirm_password("", "Passw0rd!"), Ok(()));
        assert_eq!(validate_confirm_password("Passw0rd!", "Passw0rd!"), Ok(()));
        assert_eq!(
            validate_confirm_password("Password!", "Passw0rd!"),
            Err(ConfirmPasswordError::Mismatch)
        );
        assert_eq!(
            message(validate_confirm_password("Password!", "Passw0rd!")),
            "Passwords do not match."
        );
    }

    #[test]
    fn test_parse_date_of_birth_formats() {
        let expected = NaiveDate::from_ymd_opt(2000, 1, 31).unwrap();
        assert_eq!(parse_date_of_birth("2000-01-31"), Some(expected));
        assert_eq!(parse_date_of_birth("  2000-01-31  "), Some(expected));
        assert_eq!(parse_date_of_birth("31 / 01 / 2000"), Some(expected));
        assert_eq!(parse_date_of_birth("31/01/2000"), Some(expected));

        assert_eq!(parse_date_of_birth(""), None);
        assert_eq!(parse_date_of_birth("   "), None);
        assert_eq!(parse_date_of_birth("not a date"), None);
        assert_eq!(parse_date_of_birth("2000-02-30"), None);
        assert_eq!(parse_date_of_birth("2000-13-01"), None);

        // Whitespace inside a number is not a date
        assert_eq!(parse_date_of_birth("3 1/01/2000"), None);
        assert_eq!(parse_date_of_birth("3 1 / 0 1 / 2 0 0 0"), None);
        assert_eq!(parse_date_of_birth("31 / 01 / 20 00"), None);
        assert_eq!(parse_date_of_birth("31/02/2000"), None);
    }

    #[test]
    fn test_date_of_birth_future_and_today() {
        assert_eq!(validate_date_of_birth("2025-06-15", today()), Ok(()));
        assert_eq!(validate_date_of_birth("2025-06-14", today()), Ok(()));
        assert_eq!(
            validate_date_of_birth("2025-06-16", today()),
            Err(DateOfBirthError::InFuture)
        );
        assert_eq!(
            message(validate_date_of_birth("2025-06-16", today())),
            "Date of birth cannot be in the future."
        );

        assert!(is_valid_date_of_birth("2025-06-15", today()));
        assert!(!is_valid_date_of_birth("2025-06-16", today()));
    }

    #[test]
    fn test_date_of_birth_unparseable_is_not_future() {
        assert_eq!(validate_date_of_birth("", today()), Ok(()));
        assert_eq!(
            validate_date_of_birth("yesterday", today()),
            Err(DateOfBirthError::InvalidDate)
        );
        assert_eq!(
            message(validate_date_of_birth("yesterday", today())),
            "Date of birth must be a valid date."
        );
        assert!(!is_valid_date_of_birth("yesterday", today()));
        assert!(!is_valid_date_of_birth("", today()));
    }

    #[test]
    fn test_form_valid_happy_path() {
        assert!(is_form_valid(&valid_form(), true, today()));
    }

    #[test]
    fn test_form_invalid_without_terms() {
        assert!(!is_form_valid(&valid_form(), false, today()));
    }

    fn assert_gate_closed(case: &str, mutate: impl Fn(&mut FormData)) {
        let mut data = valid_form();
        mutate(&mut data);
        assert!(!is_form_valid(&data, true, today()), "{} should close the gate", case);
    }

    #[test]
    fn test_form_invalid_when_any_field_fails() {
        assert_gate_closed("short username", |d| d.username = "ab".to_string());
        assert_gate_closed("empty username", |d| d.username.clear());
        assert_gate_closed("future dob", |d| d.date_of_birth = "2025-06-16".to_string());
        assert_gate_closed("empty dob", |d| d.date_of_birth.clear());
        assert_gate_closed("garbage dob", |d| d.date_of_birth = "soon".to_string());
        assert_gate_closed("bad email", |d| d.email = "alice@example".to_string());
        assert_gate_closed("weak password", |d| {
            d.password = "password".to_string();
            d.confirm_password = "password".to_string();
        });
        assert_gate_closed("mismatch", |d| d.confirm_password = "Password!".to_string());
        assert_gate_closed("empty confirm", |d| d.confirm_password.clear());
    }

    #[test]
    fn test_form_valid_with_typed_date() {
        let mut data = valid_form();
        data.date_of_birth = "01 / 01 / 2000".to_string();
        assert!(is_form_valid(&data, true, today()));
    }
}
