//! Attribute record model for map node meta data.
//!
//! Defines the types every nodemeta subsystem shares:
//! - [`MetaType`]: a validated attribute type name and the keys derived from it
//! - [`AttributeRecord`]: attribute entries grouped under `meta_<type>` keys
//! - [`AttributeEntry`]: one attribute: `attribute_<type>_id`, `value`, plus
//!   any pass-through fields
//! - [`update_value`]: the locate-or-create upsert used to edit a record
//!
//! The record serializes as a plain JSON object and is what the sync client
//! ships to the remote webhook.

mod editor;
mod error;
mod meta_type;
mod record;

pub use editor::{ensure_entry, update_value};
pub use error::{ModelError, ModelResult};
pub use meta_type::{GROUP_PREFIX, MetaType, VALUE_FIELD};
pub use record::{AttributeEntry, AttributeRecord};
