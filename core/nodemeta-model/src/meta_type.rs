use crate::error::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prefix of every type group key in a record.
pub const GROUP_PREFIX: &str = "meta_";

/// Field holding an attribute's current value.
pub const VALUE_FIELD: &str = "value";

/// A validated attribute type name, e.g. `text` or `AT15`.
///
/// The record layout is keyed by strings derived from this name, so only
/// non-empty ASCII names made of letters, digits, `_` and `-` are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MetaType(String);

impl MetaType {
    /// Validates `name` and wraps it.
    pub fn new(name: impl Into<String>) -> ModelResult<Self> {
        let name = name.into();
        let valid = !name.is_empty()
            && name
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-');
        if valid {
            Ok(Self(name))
        } else {
            Err(ModelError::InvalidMetaType(name))
        }
    }

    /// Recovers the type from a group key such as `meta_text`.
    pub fn from_group_key(key: &str) -> ModelResult<Self> {
        match key.strip_prefix(GROUP_PREFIX) {
            Some(name) => Self::new(name),
            None => Err(ModelError::InvalidMetaType(key.to_string())),
        }
    }

    /// Returns the bare type name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key of this type's group inside a record: `meta_<type>`.
    #[must_use]
    pub fn group_key(&self) -> String {
        format!("{GROUP_PREFIX}{}", self.0)
    }

    /// Identifier field of this type's entries: `attribute_<type>_id`.
    #[must_use]
    pub fn id_field(&self) -> String {
        format!("attribute_{}_id", self.0)
    }
}

impl fmt::Display for MetaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for MetaType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for MetaType {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MetaType> for String {
    fn from(value: MetaType) -> Self {
        value.0
    }
}
