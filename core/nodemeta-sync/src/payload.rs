use nodemeta_model::AttributeRecord;
use serde::Serialize;

/// Body of a push: `{ "target_id": .., "meta": { .. } }`.
#[derive(Debug, Clone, Serialize)]
pub struct SyncPayload<'a> {
    target_id: &'a str,
    meta: PayloadMeta<'a>,
}

/// The `meta` member. An absent record goes out as `{}`.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
enum PayloadMeta<'a> {
    Record(&'a AttributeRecord),
    Empty(EmptyObject),
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
struct EmptyObject {}

impl<'a> SyncPayload<'a> {
    /// Builds the body for `target_id`; `None` sends an empty `meta` object.
    pub fn new(target_id: &'a str, record: Option<&'a AttributeRecord>) -> Self {
        let meta = match record {
            Some(record) => PayloadMeta::Record(record),
            None => PayloadMeta::Empty(EmptyObject {}),
        };
        Self { target_id, meta }
    }

    /// The node the record belongs to.
    pub fn target_id(&self) -> &str {
        self.target_id
    }

    /// Serializes the body exactly as it goes on the wire.
    pub fn to_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}
