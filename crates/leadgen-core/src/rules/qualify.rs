use crate::domain::{name_tokens, Owner};
use crate::error::CoreError;
use serde::Serialize;
use std::collections::HashSet;

/// Name tokens that mark an owner as a developer, bank, government body or
/// royal household rather than a private seller.
pub const DEFAULT_REJECTED_KEYWORDS: &[&str] = &[
    "bank",
    "properties",
    "limited",
    "investment",
    "estate",
    "estates",
    "engineering",
    "development",
    "llc",
    "l.l.c",
    "(l.l.c)",
    "ltd.",
    "ltd",
    "finance",
    "commercial",
    "co",
    "h.h.",
    "sheikh",
    "prince",
    "princess",
    "tamweel",
    "united",
    "capital",
    "company",
    "aal",
    "h.h.al",
    "h.e",
    "p.j.s.c",
];

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "reason", content = "keyword", rename_all = "kebab-case")]
pub enum Disqualification {
    RejectedKeyword(String),
    NoContact,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualificationPolicy {
    rejected: HashSet<String>,
}

impl Default for QualificationPolicy {
    fn default() -> Self {
        Self {
            rejected: DEFAULT_REJECTED_KEYWORDS
                .iter()
                .map(|keyword| keyword.to_string())
                .collect(),
        }
    }
}

impl QualificationPolicy {
    /// Extends the default vocabulary. Keywords are single tokens, compared
    /// case-insensitively.
    pub fn with_extra_keywords<I, S>(mut self, keywords: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for keyword in keywords {
            let keyword = normalize_keyword(keyword.as_ref())?;
            self.rejected.insert(keyword);
        }
        Ok(self)
    }

    pub fn is_rejected_keyword(&self, token: &str) -> bool {
        self.rejected.contains(&token.to_lowercase())
    }

    pub fn disqualification(&self, owner: &Owner) -> Option<Disqualification> {
        if let Some(token) = name_tokens(&owner.name).find(|token| self.rejected.contains(token)) {
            return Some(Disqualification::RejectedKeyword(token));
        }
        if !owner.has_contact() {
            return Some(Disqualification::NoContact);
        }
        None
    }

    pub fn is_qualified(&self, owner: &Owner) -> bool {
        self.disqualification(owner).is_none()
    }
}

pub fn normalize_keyword(raw: &str) -> Result<String, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
        return Err(CoreError::InvalidKeyword(raw.to_string()));
    }
    Ok(trimmed.to_lowercase())
}
