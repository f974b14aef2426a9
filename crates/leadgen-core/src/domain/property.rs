use serde::{Deserialize, Serialize};
use std::fmt;

/// Property number shared by property rows and the owner rows registered
/// against them.
pub type PropertyKey = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub key: PropertyKey,
    /// Building or compound.
    pub name: Option<String>,
    pub location: Option<String>,
    pub bedrooms: Option<String>,
    /// Square feet; `0.0` when the sheet has no area.
    pub size: f64,
}

impl Property {
    pub fn new(key: PropertyKey) -> Self {
        Self {
            key,
            name: None,
            location: None,
            bedrooms: None,
            size: 0.0,
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}",
            self.name.as_deref().unwrap_or_default(),
            self.location.as_deref().unwrap_or_default(),
            self.bedrooms.as_deref().unwrap_or_default()
        )
    }
}
