use crate::error::{ModelError, ModelResult};
use crate::meta_type::{MetaType, VALUE_FIELD};
use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A single attribute inside a type group.
///
/// Holds the raw JSON object so that fields this crate does not know about
/// survive an edit and reach the remote unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeEntry(Map<String, Value>);

impl AttributeEntry {
    /// Creates an entry carrying only the identifier field for `meta_type`.
    #[must_use]
    pub fn with_id(meta_type: &MetaType, attribute_id: &str) -> Self {
        let mut fields = Map::new();
        fields.insert(meta_type.id_field(), Value::String(attribute_id.to_string()));
        Self(fields)
    }

    /// Returns the identifier stored under `meta_type`'s id field.
    pub fn id(&self, meta_type: &MetaType) -> Option<&Value> {
        self.0.get(&meta_type.id_field())
    }

    /// Returns true if the id field equals `attribute_id` as a JSON string.
    ///
    /// Comparison is strict: a numeric id never matches its string form.
    pub fn has_id(&self, id_field: &str, attribute_id: &str) -> bool {
        matches!(self.0.get(id_field), Some(Value::String(s)) if s == attribute_id)
    }

    /// Returns the current value, if one was ever set.
    pub fn value(&self) -> Option<&Value> {
        self.0.get(VALUE_FIELD)
    }

    /// Replaces the value, leaving every other field untouched.
    pub fn set_value(&mut self, value: Value) {
        self.0.insert(VALUE_FIELD.to_string(), value);
    }

    /// Returns an arbitrary field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Sets an arbitrary field.
    pub fn insert(&mut self, field: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(field.into(), value)
    }

    /// Borrows the underlying JSON object.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for AttributeEntry {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// All attributes of one map node, grouped by type under `meta_<type>` keys.
///
/// Serializes as a plain JSON object. Groups are created lazily by the editor;
/// order of entries inside a group is insertion order. Members whose key is
/// not a `meta_<type>` group key are kept as opaque JSON and written back
/// unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AttributeRecord {
    #[serde(flatten)]
    groups: BTreeMap<String, Vec<AttributeEntry>>,
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

impl<'de> Deserialize<'de> for AttributeRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(de::Error::custom)
    }
}

impl AttributeRecord {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a record from JSON produced elsewhere.
    ///
    /// The value must be an object. Members under a valid `meta_<type>` key
    /// must be arrays of objects; any other member is carried as is.
    pub fn from_value(value: Value) -> ModelResult<Self> {
        let Value::Object(members) = value else {
            return Err(ModelError::MalformedRecord(format!(
                "expected an object, got {}",
                json_kind(&value)
            )));
        };

        let mut record = Self::new();
        for (key, member) in members {
            if MetaType::from_group_key(&key).is_err() {
                record.extra.insert(key, member);
                continue;
            }
            let Value::Array(items) = member else {
                return Err(ModelError::MalformedRecord(format!(
                    "group {key:?} must be an array, got {}",
                    json_kind(&member)
                )));
            };
            let mut entries = Vec::with_capacity(items.len());
            for (index, item) in items.into_iter().enumerate() {
                match item {
                    Value::Object(fields) => entries.push(AttributeEntry(fields)),
                    other => {
                        return Err(ModelError::MalformedRecord(format!(
                            "entry {index} of {key:?} must be an object, got {}",
                            json_kind(&other)
                        )));
                    }
                }
            }
            record.groups.insert(key, entries);
        }
        Ok(record)
    }

    /// Parses a record from a JSON string.
    pub fn from_json_str(json: &str) -> ModelResult<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Converts the record into a JSON value.
    pub fn to_value(&self) -> ModelResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Returns the entries of a type group, if the group exists.
    pub fn group(&self, meta_type: &MetaType) -> Option<&[AttributeEntry]> {
        self.groups.get(&meta_type.group_key()).map(Vec::as_slice)
    }

    /// Returns the type group, creating an empty one on first reference.
    pub fn group_mut(&mut self, meta_type: &MetaType) -> &mut Vec<AttributeEntry> {
        self.groups.entry(meta_type.group_key()).or_default()
    }

    /// Finds the first entry of `meta_type` whose identifier is `attribute_id`.
    pub fn find(&self, meta_type: &MetaType, attribute_id: &str) -> Option<&AttributeEntry> {
        let id_field = meta_type.id_field();
        self.group(meta_type)?
            .iter()
            .find(|entry| entry.has_id(&id_field, attribute_id))
    }

    /// Returns the current value of an attribute.
    pub fn value(&self, meta_type: &MetaType, attribute_id: &str) -> Option<&Value> {
        self.find(meta_type, attribute_id)?.value()
    }

    /// Returns a non-group member carried through from loaded JSON.
    pub fn extra(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Lists the types present in the record.
    pub fn meta_types(&self) -> Vec<MetaType> {
        self.groups
            .keys()
            .filter_map(|key| MetaType::from_group_key(key).ok())
            .collect()
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if the record has no groups and no other members.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty() && self.extra.is_empty()
    }

    /// Number of entries across every group.
    pub fn entry_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
