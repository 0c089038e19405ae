//! Locate-or-create upsert over an [`AttributeRecord`].
//!
//! Editing never fails. A missing record, an empty or invalid type name, or an
//! empty attribute id turns the call into a no-op that hands the input back.

use crate::meta_type::MetaType;
use crate::record::{AttributeEntry, AttributeRecord};
use serde_json::Value;
use tracing::debug;

/// Returns the first entry of `meta_type` identified by `attribute_id`,
/// appending a new entry holding only the id field when none exists.
///
/// Later duplicates loaded from outside are left as they are.
pub fn ensure_entry<'r>(
    record: &'r mut AttributeRecord,
    meta_type: &MetaType,
    attribute_id: &str,
) -> &'r mut AttributeEntry {
    let id_field = meta_type.id_field();
    let group = record.group_mut(meta_type);

    let existing = group
        .iter()
        .position(|entry| entry.has_id(&id_field, attribute_id));
    let index = match existing {
        Some(index) => index,
        None => {
            group.push(AttributeEntry::with_id(meta_type, attribute_id));
            group.len() - 1
        }
    };
    &mut group[index]
}

/// Sets the value of attribute `attribute_id` of type `type_name`.
///
/// The returned reference is the record that was passed in, not a copy.
pub fn update_value<'r>(
    record: Option<&'r mut AttributeRecord>,
    type_name: &str,
    attribute_id: &str,
    new_value: impl Into<Value>,
) -> Option<&'r mut AttributeRecord> {
    let record = record?;
    Some(record.update_value(type_name, attribute_id, new_value))
}

impl AttributeRecord {
    /// Method form of [`update_value`] for an owned record; chains.
    pub fn update_value(
        &mut self,
        type_name: &str,
        attribute_id: &str,
        new_value: impl Into<Value>,
    ) -> &mut Self {
        if attribute_id.is_empty() {
            debug!(type_name, "skipping update: empty attribute id");
            return self;
        }
        let meta_type = match MetaType::new(type_name) {
            Ok(meta_type) => meta_type,
            Err(e) => {
                debug!(attribute_id, "skipping update: {e}");
                return self;
            }
        };

        ensure_entry(self, &meta_type, attribute_id).set_value(new_value.into());
        self
    }
}
