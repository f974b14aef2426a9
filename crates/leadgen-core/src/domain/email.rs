use regex::Regex;
use std::sync::OnceLock;

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}))$";

/// Lowercases a raw email cell and keeps it only if it looks like a real,
/// reachable address.
pub fn normalize_email(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lowered = trimmed.to_lowercase();
    is_valid_email(&lowered).then_some(lowered)
}

pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.chars().count() == 1 || local.contains("dummy") {
        return false;
    }

    // Placeholder domains such as x@h.com or 00@000.com.
    let first_label = domain.split('.').next().unwrap_or_default();
    if first_label.chars().count() == 1 || first_label.parse::<i32>().is_ok() {
        return false;
    }

    email_regex().is_match(email)
}

fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

#[cfg(test)]
mod tests {
    use super::{is_valid_email, normalize_email};

    #[test]
    fn normalize_email_trims_and_lowercases() {
        let value = normalize_email("  Ada@Example.com ");
        assert_eq!(value.as_deref(), Some("ada@example.com"));
    }

    #[test]
    fn normalize_email_drops_invalid_values() {
        assert!(normalize_email("").is_none());
        assert!(normalize_email("H@HOTMAIL.COM").is_none());
        assert!(normalize_email("not an email").is_none());
    }

    #[test]
    fn rejects_missing_at_sign() {
        assert!(!is_valid_email("user.example.com"));
    }

    #[test]
    fn rejects_single_character_local_part() {
        assert!(!is_valid_email("a@b.com"));
        assert!(!is_valid_email("1@gmail.com"));
    }

    #[test]
    fn rejects_dummy_local_part_only() {
        assert!(!is_valid_email("dummy123@gmail.com"));
        assert!(!is_valid_email("nodummy@gmail.com"));
        assert!(is_valid_email("user@dummydomain.com"));
    }

    #[test]
    fn rejects_placeholder_domains() {
        assert!(!is_valid_email("user@h.com"));
        assert!(!is_valid_email("user@1.com"));
        assert!(!is_valid_email("0000@0000.com"));
        assert!(!is_valid_email("user@000.ooo"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user@example.c"));
        assert!(!is_valid_email("us er@example.com"));
        assert!(!is_valid_email("user@@example.com"));
    }

    #[test]
    fn accepts_common_addresses() {
        assert!(is_valid_email("ada.lovelace@example.com"));
        assert!(is_valid_email("o'neil+sales@mail.example.ae"));
        assert!(is_valid_email("owner@[10.0.0.1]"));
    }
}
