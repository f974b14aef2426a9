use crate::domain::email::normalize_email;
use crate::domain::phone::{parse_phone, PhoneNumbers};
use crate::domain::property::PropertyKey;
use serde::{Deserialize, Serialize};

/// An owner row after contact normalization, before linkage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    pub name: String,
    pub email: Option<String>,
    pub sex: Option<String>,
    pub key: PropertyKey,
    pub phone_numbers: PhoneNumbers,
}

impl Owner {
    pub fn new(key: PropertyKey, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            sex: None,
            key,
            phone_numbers: PhoneNumbers::new(),
        }
    }

    /// Records a raw phone cell if it normalizes to a valid, unseen number.
    pub fn add_raw_phone(&mut self, raw: &str) -> bool {
        match parse_phone(raw) {
            Some(number) => self.phone_numbers.insert(number),
            None => false,
        }
    }

    /// Sets the email from a raw cell; invalid values leave it untouched.
    pub fn set_raw_email(&mut self, raw: &str) -> bool {
        match normalize_email(raw) {
            Some(email) => {
                self.email = Some(email);
                true
            }
            None => false,
        }
    }

    pub fn has_contact(&self) -> bool {
        !self.phone_numbers.is_empty() || self.email.is_some()
    }
}
