use crate::domain::owner::Owner;
use crate::domain::phone::PhoneNumbers;
use crate::domain::property::{Property, PropertyKey};
use serde::Serialize;

const NAME_SEPARATOR: &str = " & ";
const EMAIL_SEPARATOR: &str = ", ";

/// A deduplicated owner with at least one linked property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProspectiveClient {
    pub name: String,
    pub email: Option<String>,
    pub sex: Option<String>,
    pub key: PropertyKey,
    pub phone_numbers: PhoneNumbers,
    properties: Vec<Property>,
}

impl ProspectiveClient {
    /// Promotes an owner with its first linked property.
    pub fn promote(owner: Owner, property: Property) -> Self {
        Self {
            name: owner.name,
            email: owner.email,
            sex: owner.sex,
            key: owner.key,
            phone_numbers: owner.phone_numbers,
            properties: vec![property],
        }
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    pub fn add_property(&mut self, property: Property) {
        self.properties.push(property);
    }

    /// Folds a differently named owner who shares a phone number into this
    /// client. Returns `true` when the name changed.
    pub fn absorb(&mut self, name: &str, email: Option<&str>, property: Property) -> bool {
        let renamed = !self.name.contains(name);
        if renamed {
            self.name = format!("{}{}{}", self.name, NAME_SEPARATOR, name);
        }

        if let Some(email) = email {
            self.email = Some(match self.email.take() {
                Some(current) => format!("{}{}{}", current, EMAIL_SEPARATOR, email),
                None => email.to_string(),
            });
        }

        self.properties.push(property);
        renamed
    }
}
