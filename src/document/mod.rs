//! Document records
//!
//! Loads a YAML data file into a mapping keyed by section name. No schema is
//! enforced: consumers decide what an absent section means.

mod section;

use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::error::{ForgeError, Result};

pub use section::{Section, SectionShape};

/// Parsed contents of one input file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentRecord {
    entries: Mapping,
}

impl DocumentRecord {
    /// Load a record from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ForgeError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|err| match err.kind() {
            std::io::ErrorKind::InvalidData => ForgeError::Parse {
                path: path.to_path_buf(),
                message: format!("not valid UTF-8 text: {}", err),
            },
            _ => ForgeError::Io(err),
        })?;
        tracing::debug!("Read {} bytes from {}", content.len(), path.display());

        Self::parse(&content).map_err(|message| ForgeError::Parse {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parse a record from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Self::parse(content).map_err(|message| ForgeError::Parse {
            path: "<string>".into(),
            message,
        })
    }

    fn parse(content: &str) -> std::result::Result<Self, String> {
        let value: Value = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
        match value {
            Value::Null => Ok(Self::default()),
            Value::Mapping(entries) => Ok(Self { entries }),
            other => Err(format!(
                "top level must be a mapping of sections, found {}",
                value_type_name(&other)
            )),
        }
    }

    /// Section content, or `None` if the key is absent or null
    pub fn get(&self, section: Section) -> Option<&Value> {
        self.entries
            .get(section.key())
            .filter(|value| !value.is_null())
    }

    pub fn contains(&self, section: Section) -> bool {
        self.get(section).is_some()
    }

    /// Known sections present in the record, in declaration order
    pub fn present_sections(&self) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|s| self.contains(*s))
            .collect()
    }

    /// Top-level keys that do not name a known section
    pub fn unknown_keys(&self) -> Vec<String> {
        self.entries
            .keys()
            .filter_map(|key| match key.as_str() {
                Some(k) if Section::from_key(k).is_some() => None,
                Some(k) => Some(k.to_string()),
                None => Some(serde_yaml::to_string(key).unwrap_or_default().trim().to_string()),
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
