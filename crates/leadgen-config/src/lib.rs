use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use leadgen_core::rules::qualify::normalize_keyword;
use leadgen_core::{OwnerHeaders, PropertyHeaders, QualificationPolicy};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "leadgen";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub qualification: QualificationPolicy,
    pub extra_rejected_keywords: Vec<String>,
    pub property_headers: PropertyHeaders,
    pub owner_headers: OwnerHeaders,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid rejected keyword: {0:?}")]
    InvalidKeyword(String),
    #[error("invalid column header for {field}")]
    InvalidHeader { field: String },
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    qualify: Option<QualifyFile>,
    columns: Option<ColumnsFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct QualifyFile {
    extra_rejected_keywords: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ColumnsFile {
    property: Option<PropertyColumnsFile>,
    owner: Option<OwnerColumnsFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PropertyColumnsFile {
    key: Option<String>,
    location: Option<String>,
    name: Option<String>,
    bedrooms: Option<String>,
    size: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct OwnerColumnsFile {
    key: Option<String>,
    name: Option<String>,
    sex: Option<String>,
    email: Option<String>,
    phones: Option<Vec<String>>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(keywords) = parsed.qualify.and_then(|qualify| qualify.extra_rejected_keywords) {
        let mut normalized = Vec::with_capacity(keywords.len());
        for keyword in keywords {
            let value =
                normalize_keyword(&keyword).map_err(|_| ConfigError::InvalidKeyword(keyword))?;
            if !normalized.contains(&value) {
                normalized.push(value);
            }
        }
        config.qualification = QualificationPolicy::default()
            .with_extra_keywords(&normalized)
            .map_err(|err| ConfigError::InvalidKeyword(err.to_string()))?;
        config.extra_rejected_keywords = normalized;
    }

    let columns = parsed.columns.unwrap_or_default();
    if let Some(property) = columns.property {
        let headers = &mut config.property_headers;
        apply_header(&mut headers.key, property.key, "columns.property.key")?;
        apply_header(&mut headers.location, property.location, "columns.property.location")?;
        apply_header(&mut headers.name, property.name, "columns.property.name")?;
        apply_header(&mut headers.bedrooms, property.bedrooms, "columns.property.bedrooms")?;
        apply_header(&mut headers.size, property.size, "columns.property.size")?;
    }

    if let Some(owner) = columns.owner {
        let headers = &mut config.owner_headers;
        apply_header(&mut headers.key, owner.key, "columns.owner.key")?;
        apply_header(&mut headers.name, owner.name, "columns.owner.name")?;
        apply_header(&mut headers.sex, owner.sex, "columns.owner.sex")?;
        apply_header(&mut headers.email, owner.email, "columns.owner.email")?;
        if let Some(phones) = owner.phones {
            if phones.is_empty() {
                return Err(invalid_header("columns.owner.phones"));
            }
            let mut resolved = Vec::with_capacity(phones.len());
            for phone in phones {
                let trimmed = phone.trim();
                if trimmed.is_empty() {
                    return Err(invalid_header("columns.owner.phones"));
                }
                resolved.push(trimmed.to_string());
            }
            headers.phones = resolved;
        }
    }

    Ok(config)
}

fn apply_header(target: &mut String, value: Option<String>, field: &str) -> Result<()> {
    let Some(value) = value else {
        return Ok(());
    };
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(invalid_header(field));
    }
    *target = trimmed.to_string();
    Ok(())
}

fn invalid_header(field: &str) -> ConfigError {
    ConfigError::InvalidHeader {
        field: field.to_string(),
    }
}
