//! Credential validation rules for the login and sign-up forms.
//!
//! Rules run in a fixed order and only the first failing rule's message
//! is reported. Messages are the user-facing Portuguese strings shown
//! next to the form fields.

use once_cell::sync::Lazy;
use regex::Regex;

pub const MSG_EMAIL_BLANK: &str = "Email não pode ficar em branco";
pub const MSG_EMAIL_TOO_SHORT: &str = "Email deve ter pelo menos 6 caracteres";
pub const MSG_EMAIL_INVALID: &str = "Email deve ser válido";
pub const MSG_NAME_BLANK: &str = "Nome não pode ficar em branco";
pub const MSG_PASSWORD_TOO_SHORT: &str = "Senha deve ter pelo menos 6 caracteres";
pub const MSG_PASSWORD_MISMATCH: &str = "As senhas não coincidem";
pub const MSG_PASSWORD_BLANK: &str = "Senha não pode ficar em branco";

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email shape regex"));

/// Strips every whitespace character from an email field value.
pub fn normalize_email(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Validates the sign-up form.
///
/// Returns the first failing rule's message, in fixed precedence:
/// email blank > email too short > email shape > name blank >
/// password too short > password mismatch.
pub fn signup_validation_error(
    email: &str,
    name: &str,
    password: &str,
    confirm_password: &str,
) -> Option<&'static str> {
    if email.is_empty() {
        return Some(MSG_EMAIL_BLANK);
    }
    if email.chars().count() < 6 {
        return Some(MSG_EMAIL_TOO_SHORT);
    }
    if !EMAIL_SHAPE.is_match(email) {
        return Some(MSG_EMAIL_INVALID);
    }
    if name.is_empty() {
        return Some(MSG_NAME_BLANK);
    }
    if password.chars().count() < 6 {
        return Some(MSG_PASSWORD_TOO_SHORT);
    }
    if password != confirm_password {
        return Some(MSG_PASSWORD_MISMATCH);
    }
    None
}

/// Validates the login form: both fields must be present, email checked
/// first.
pub fn login_validation_error(email: &str, password: &str) -> Option<&'static str> {
    if email.is_empty() {
        return Some(MSG_EMAIL_BLANK);
    }
    if password.is_empty() {
        return Some(MSG_PASSWORD_BLANK);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email_strips_all_whitespace() {
        assert_eq!(normalize_email(" user @ mail.com "), "user@mail.com");
        assert_eq!(normalize_email("a\tb\nc"), "abc");
        assert_eq!(normalize_email("clean@mail.com"), "clean@mail.com");
        assert!(!normalize_email("  a b\u{00a0}c  ").contains(char::is_whitespace));
    }

    #[test]
    fn test_signup_precedence_email_first() {
        // Everything wrong at once: email-blank wins.
        assert_eq!(
            signup_validation_error("", "", "", "x"),
            Some(MSG_EMAIL_BLANK)
        );
        assert_eq!(
            signup_validation_error("a@b.c", "", "", ""),
            Some(MSG_EMAIL_TOO_SHORT)
        );
        assert_eq!(
            signup_validation_error("not-an-email", "", "", ""),
            Some(MSG_EMAIL_INVALID)
        );
    }

    #[test]
    fn test_signup_precedence_after_email() {
        assert_eq!(
            signup_validation_error("user@mail.com", "", "", ""),
            Some(MSG_NAME_BLANK)
        );
        assert_eq!(
            signup_validation_error("user@mail.com", "Ana", "12345", "12345"),
            Some(MSG_PASSWORD_TOO_SHORT)
        );
        assert_eq!(
            signup_validation_error("user@mail.com", "Ana", "123456", "654321"),
            Some(MSG_PASSWORD_MISMATCH)
        );
    }

    #[test]
    fn test_signup_valid_input() {
        assert_eq!(
            signup_validation_error("user@mail.com", "Ana", "123456", "123456"),
            None
        );
    }

    #[test]
    fn test_signup_email_shape() {
        assert_eq!(
            signup_validation_error("user@mail", "Ana", "123456", "123456"),
            Some(MSG_EMAIL_INVALID)
        );
        assert_eq!(
            signup_validation_error("@mail.com", "Ana", "123456", "123456"),
            Some(MSG_EMAIL_INVALID)
        );
        assert_eq!(
            signup_validation_error("us er@mail.com", "Ana", "123456", "123456"),
            Some(MSG_EMAIL_INVALID)
        );
    }

    #[test]
    fn test_login_validation() {
        // Email is checked first even when both fields are empty.
        assert_eq!(login_validation_error("", ""), Some(MSG_EMAIL_BLANK));
        assert_eq!(
            login_validation_error("user@mail.com", ""),
            Some(MSG_PASSWORD_BLANK)
        );
        assert_eq!(login_validation_error("", "secret"), Some(MSG_EMAIL_BLANK));
        assert_eq!(login_validation_error("user@mail.com", "secret"), None);
    }
}
