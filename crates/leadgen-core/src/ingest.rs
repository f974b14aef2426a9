use crate::domain::{normalize_owner_name, Owner, Property, PropertyKey};
use serde::Serialize;

pub const KEY_HEADER: &str = "P-NUMBER";

/// A single spreadsheet cell as handed over by a reader.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    pub fn is_empty(&self) -> bool {
        self.as_text().is_none()
    }

    /// Trimmed, non-empty text. Whole numbers render without a fraction so
    /// numeric phone cells survive the trip.
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Empty => None,
            CellValue::Text(value) => {
                let trimmed = value.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            CellValue::Number(value) => {
                if !value.is_finite() {
                    return None;
                }
                if value.fract() == 0.0 && value.abs() < 1e15 {
                    Some(format!("{}", *value as i64))
                } else {
                    Some(value.to_string())
                }
            }
        }
    }

    pub fn as_key(&self) -> Option<PropertyKey> {
        match self {
            CellValue::Empty => None,
            CellValue::Text(value) => value.trim().parse::<PropertyKey>().ok(),
            CellValue::Number(value) => {
                let in_range = (PropertyKey::MIN as f64..PropertyKey::MAX as f64).contains(value);
                (in_range && value.fract() == 0.0).then_some(*value as PropertyKey)
            }
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Empty => None,
            CellValue::Text(value) => value.trim().parse::<f64>().ok(),
            CellValue::Number(value) => Some(*value),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(value.to_string())
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

/// Header names that identify each property field in a sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyHeaders {
    pub key: String,
    pub location: String,
    pub name: String,
    pub bedrooms: String,
    pub size: String,
}

impl Default for PropertyHeaders {
    fn default() -> Self {
        Self {
            key: KEY_HEADER.to_string(),
            location: "AREA".to_string(),
            name: "PROJECT".to_string(),
            bedrooms: "ROOMS DESCRIPTION".to_string(),
            size: "ACTUAL AREA".to_string(),
        }
    }
}

/// Header names that identify each owner field in a sheet. Every phone
/// header contributes one phone cell per row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerHeaders {
    pub key: String,
    pub name: String,
    pub sex: String,
    pub email: String,
    pub phones: Vec<String>,
}

impl Default for OwnerHeaders {
    fn default() -> Self {
        Self {
            key: KEY_HEADER.to_string(),
            name: "NAME".to_string(),
            sex: "GENDER".to_string(),
            email: "EMAIL".to_string(),
            phones: vec![
                "PHONE".to_string(),
                "MOBILE".to_string(),
                "SECONDARY MOBILE".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyRow {
    pub key: CellValue,
    pub name: CellValue,
    pub location: CellValue,
    pub bedrooms: CellValue,
    pub size: CellValue,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OwnerRow {
    pub key: CellValue,
    pub name: CellValue,
    pub sex: CellValue,
    pub email: CellValue,
    pub phones: Vec<CellValue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowSkip {
    MissingKey,
    MissingName,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    pub properties_read: usize,
    pub owners_read: usize,
    pub properties_missing_key: usize,
    pub owners_missing_key: usize,
    pub owners_missing_name: usize,
}

impl PropertyRow {
    pub fn into_property(self) -> Result<Property, RowSkip> {
        let key = self.key.as_key().ok_or(RowSkip::MissingKey)?;
        Ok(Property {
            key,
            name: self.name.as_text(),
            location: self.location.as_text(),
            bedrooms: self.bedrooms.as_text(),
            size: self.size.as_number().unwrap_or(0.0),
        })
    }
}

impl OwnerRow {
    pub fn into_owner(self) -> Result<Owner, RowSkip> {
        let key = self.key.as_key().ok_or(RowSkip::MissingKey)?;
        let name = self
            .name
            .as_text()
            .and_then(|raw| normalize_owner_name(&raw))
            .ok_or(RowSkip::MissingName)?;

        let mut owner = Owner::new(key, name);
        owner.sex = self.sex.as_text();
        if let Some(raw) = self.email.as_text() {
            owner.set_raw_email(&raw);
        }
        for cell in &self.phones {
            if let Some(raw) = cell.as_text() {
                owner.add_raw_phone(&raw);
            }
        }
        Ok(owner)
    }
}

pub fn ingest_properties<I>(rows: I, report: &mut IngestReport) -> Vec<Property>
where
    I: IntoIterator<Item = PropertyRow>,
{
    let mut properties = Vec::new();
    for row in rows {
        report.properties_read += 1;
        match row.into_property() {
            Ok(property) => properties.push(property),
            Err(_) => report.properties_missing_key += 1,
        }
    }
    properties
}

pub fn ingest_owners<I>(rows: I, report: &mut IngestReport) -> Vec<Owner>
where
    I: IntoIterator<Item = OwnerRow>,
{
    let mut owners = Vec::new();
    for row in rows {
        report.owners_read += 1;
        match row.into_owner() {
            Ok(owner) => owners.push(owner),
            Err(RowSkip::MissingKey) => report.owners_missing_key += 1,
            Err(RowSkip::MissingName) => report.owners_missing_name += 1,
        }
    }
    owners
}
