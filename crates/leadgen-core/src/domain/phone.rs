use serde::{Deserialize, Serialize};

pub const COUNTRY_CODE: &str = "971";

/// Two-digit mobile operator codes, without the national trunk `0`.
pub const MOBILE_PREFIXES: &[&str] = &["50", "52", "55", "56", "57", "58"];

const LANDLINE_PREFIX: &str = "04";
const CANONICAL_LEN: usize = 12;
const MIN_LEN: usize = 7;
const JUNK_ZERO_RUNS: std::ops::RangeInclusive<usize> = 3..=8;

/// Rewrites a raw phone cell into the canonical `971XXXXXXXXX` form.
///
/// The rewrite rules run in a fixed order and each one is checked against the
/// output of the previous rule. Digits that match no rule are returned as-is,
/// so callers still need [`is_valid_phone`] before trusting the value.
pub fn normalize_phone(raw: &str) -> String {
    let mut digits: String = raw.chars().filter(|ch| ch.is_ascii_digit()).collect();

    // 05X... -> 9715X...
    if digits.len() >= 3 && digits.starts_with('0') && is_mobile_prefix(&digits[1..3]) {
        digits.replace_range(0..1, COUNTRY_CODE);
    }

    // 5X....... -> 9715X.......
    if digits.len() == 9 && is_mobile_prefix(&digits[0..2]) {
        digits.insert_str(0, COUNTRY_CODE);
    }

    // 97105X... -> 9715X...
    if digits.starts_with("97105") {
        digits.remove(3);
    }

    if digits.starts_with("00") {
        digits.replace_range(0..2, "");
    }

    digits.trim().to_string()
}

pub fn is_valid_phone(number: &str) -> bool {
    if number.starts_with(COUNTRY_CODE) && number.len() != CANONICAL_LEN {
        return false;
    }
    if number.len() < MIN_LEN {
        return false;
    }
    if number.starts_with(LANDLINE_PREFIX) {
        return false;
    }
    !is_placeholder(number)
}

/// Normalizes a raw cell and keeps it only when it validates.
pub fn parse_phone(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let number = normalize_phone(trimmed);
    is_valid_phone(&number).then_some(number)
}

fn is_mobile_prefix(candidate: &str) -> bool {
    MOBILE_PREFIXES.contains(&candidate)
}

// 9715 followed only by a run of zeros, e.g. 971500000000.
fn is_placeholder(number: &str) -> bool {
    let Some(suffix) = number.strip_prefix("9715") else {
        return false;
    };
    JUNK_ZERO_RUNS.contains(&suffix.len()) && suffix.bytes().all(|b| b == b'0')
}

/// Phone numbers of one owner: insertion ordered, no duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneNumbers(Vec<String>);

impl PhoneNumbers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the number was already present.
    pub fn insert(&mut self, number: impl Into<String>) -> bool {
        let number = number.into();
        if self.contains(&number) {
            return false;
        }
        self.0.push(number);
        true
    }

    pub fn contains(&self, number: &str) -> bool {
        self.0.iter().any(|existing| existing == number)
    }

    pub fn intersects(&self, other: &PhoneNumbers) -> bool {
        self.0.iter().any(|number| other.contains(number))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn joined(&self, separator: &str) -> String {
        self.0.join(separator)
    }
}

impl<S: Into<String>> FromIterator<S> for PhoneNumbers {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut numbers = PhoneNumbers::new();
        for number in iter {
            numbers.insert(number);
        }
        numbers
    }
}

#[cfg(test)]
mod tests {
    use super::{is_valid_phone, normalize_phone, parse_phone, PhoneNumbers};

    #[test]
    fn normalize_phone_keeps_canonical_numbers() {
        assert_eq!(normalize_phone("971501234567"), "971501234567");
    }

    #[test]
    fn normalize_phone_replaces_trunk_zero_with_country_code() {
        assert_eq!(normalize_phone("050-123-4567"), "971501234567");
        assert_eq!(normalize_phone("(058) 765 4321"), "971587654321");
    }

    #[test]
    fn normalize_phone_prefixes_bare_mobile_numbers() {
        assert_eq!(normalize_phone("55 123 4567"), "971551234567");
    }

    #[test]
    fn normalize_phone_only_prefixes_nine_digit_mobile_numbers() {
        assert_eq!(normalize_phone("5512345678"), "5512345678");
        assert_eq!(normalize_phone("531234567"), "531234567");
    }

    #[test]
    fn normalize_phone_collapses_doubled_trunk_zero() {
        assert_eq!(normalize_phone("+971 050 123 4567"), "971501234567");
    }

    #[test]
    fn normalize_phone_strips_international_prefix() {
        assert_eq!(normalize_phone("00971501234567"), "971501234567");
        assert_eq!(normalize_phone("0044 20 7946 0958"), "442079460958");
    }

    #[test]
    fn normalize_phone_tolerates_short_input() {
        assert_eq!(normalize_phone("05"), "05");
        assert_eq!(normalize_phone("n/a"), "");
    }

    #[test]
    fn is_valid_phone_rejects_wrong_length_country_numbers() {
        assert!(is_valid_phone("971501234567"));
        assert!(!is_valid_phone("97150123456"));
        assert!(!is_valid_phone("9715012345678"));
    }

    #[test]
    fn is_valid_phone_rejects_short_numbers() {
        assert!(!is_valid_phone("123456"));
        assert!(is_valid_phone("1234567"));
    }

    #[test]
    fn is_valid_phone_rejects_landlines() {
        assert!(!is_valid_phone("043334444"));
        assert!(!is_valid_phone("0412345678901"));
    }

    #[test]
    fn is_valid_phone_rejects_zero_placeholders() {
        assert!(!is_valid_phone("971500000000"));
        assert!(is_valid_phone("971500000001"));
    }

    #[test]
    fn parse_phone_normalizes_and_validates() {
        assert_eq!(parse_phone(" 050 123 4567 ").as_deref(), Some("971501234567"));
        assert!(parse_phone("04 333 4444").is_none());
        assert!(parse_phone("   ").is_none());
    }

    #[test]
    fn phone_numbers_keep_first_occurrence_order() {
        let mut numbers = PhoneNumbers::new();
        assert!(numbers.insert("971501111111"));
        assert!(numbers.insert("971502222222"));
        assert!(!numbers.insert("971501111111"));
        assert_eq!(
            numbers.iter().collect::<Vec<_>>(),
            vec!["971501111111", "971502222222"]
        );
    }

    #[test]
    fn phone_numbers_intersect() {
        let a: PhoneNumbers = ["971501111111", "971502222222"].into_iter().collect();
        let b: PhoneNumbers = ["971502222222"].into_iter().collect();
        let c: PhoneNumbers = ["971503333333"].into_iter().collect();
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
        assert!(!a.intersects(&PhoneNumbers::new()));
    }
}
