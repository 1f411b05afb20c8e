use crate::api::LoginFormData;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Counted in Unicode scalar values (`chars()`), so an astral-plane character
/// counts once rather than as two UTF-16 code units.
pub const MIN_PASSWORD_LENGTH: usize = 6;

pub const EMAIL_REQUIRED_MESSAGE: &str = "이메일을 입력해주세요.";
pub const EMAIL_FORMAT_MESSAGE: &str = "올바른 이메일 형식이 아닙니다.";
pub const PASSWORD_REQUIRED_MESSAGE: &str = "비밀번호를 입력해주세요.";
pub const PASSWORD_LENGTH_MESSAGE: &str = "비밀번호는 6자 이상이어야 합니다.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LoginField {
    Email,
    Password,
    RememberMe,
}

/// Per-field validation messages from the latest submit attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<LoginField, String>);

impl FieldErrors {
    pub fn get(&self, field: LoginField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn insert(&mut self, field: LoginField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Drops the message for `field`; returns whether one was present.
    pub fn clear(&mut self, field: LoginField) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"))
}

pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

pub fn validate_credentials(data: &LoginFormData) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if data.email.is_empty() {
        errors.insert(LoginField::Email, EMAIL_REQUIRED_MESSAGE);
    } else if !is_valid_email(&data.email) {
        errors.insert(LoginField::Email, EMAIL_FORMAT_MESSAGE);
    }

    if data.password.is_empty() {
        errors.insert(LoginField::Password, PASSWORD_REQUIRED_MESSAGE);
    } else if data.password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.insert(LoginField::Password, PASSWORD_LENGTH_MESSAGE);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(email: &str, password: &str) -> LoginFormData {
        LoginFormData {
            email: email.into(),
            password: password.into(),
            remember_me: false,
        }
    }

    #[test]
    fn empty_email_requires_input() {
        for password in ["", "12345", "secret1"] {
            let errors = validate_credentials(&data("", password));
            assert_eq!(errors.get(LoginField::Email), Some(EMAIL_REQUIRED_MESSAGE));
        }
    }

    #[test]
    fn malformed_emails_fail_format_check() {
        for email in [
            "plain",
            "no-at.example.com",
            "missing@tld",
            "@logwatch.io",
            "ops@.io",
            "ops@logwatch.",
            "two words@logwatch.io",
            "a@b@c.io",
        ] {
            let errors = validate_credentials(&data(email, "secret1"));
            assert_eq!(
                errors.get(LoginField::Email),
                Some(EMAIL_FORMAT_MESSAGE),
                "accepted {:?}",
                email
            );
        }
    }

    #[test]
    fn well_formed_emails_pass() {
        for email in ["ops@logwatch.io", "a@b.c", "first.last+tag@sub.example.co.kr"] {
            assert!(is_valid_email(email), "rejected {:?}", email);
        }
    }

    #[test]
    fn password_rules() {
        let errors = validate_credentials(&data("ops@logwatch.io", ""));
        assert_eq!(errors.get(LoginField::Password), Some(PASSWORD_REQUIRED_MESSAGE));

        let errors = validate_credentials(&data("ops@logwatch.io", "12345"));
        assert_eq!(errors.get(LoginField::Password), Some(PASSWORD_LENGTH_MESSAGE));

        assert!(validate_credentials(&data("ops@logwatch.io", "123456")).is_empty());
    }

    #[test]
    fn password_length_counts_characters_not_bytes() {
        // Five Hangul syllables are fifteen bytes.
        let errors = validate_credentials(&data("ops@logwatch.io", "비밀번호요"));
        assert_eq!(errors.get(LoginField::Password), Some(PASSWORD_LENGTH_MESSAGE));
        assert!(validate_credentials(&data("ops@logwatch.io", "비밀번호입니")).is_empty());
    }

    #[test]
    fn both_fields_can_fail_together() {
        let errors = validate_credentials(&data("nope", "123"));
        assert_eq!(errors.len(), 2);
        assert!(errors.get(LoginField::RememberMe).is_none());
    }

    #[test]
    fn clear_removes_only_the_named_field() {
        let mut errors = validate_credentials(&data("", ""));
        assert!(errors.clear(LoginField::Email));
        assert!(!errors.clear(LoginField::Email));
        assert_eq!(errors.get(LoginField::Password), Some(PASSWORD_REQUIRED_MESSAGE));
    }
}
