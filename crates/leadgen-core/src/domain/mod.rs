pub mod client;
pub mod email;
pub mod name;
pub mod owner;
pub mod phone;
pub mod property;

pub use client::ProspectiveClient;
pub use email::{is_valid_email, normalize_email};
pub use name::{name_tokens, normalize_owner_name};
pub use owner::Owner;
pub use phone::{
    is_valid_phone, normalize_phone, parse_phone, PhoneNumbers, COUNTRY_CODE, MOBILE_PREFIXES,
};
pub use property::{Property, PropertyKey};
