use nodemeta_model::{AttributeEntry, AttributeRecord, MetaType, ModelError};
use pretty_assertions::assert_eq;
use serde_json::json;

fn text() -> MetaType {
    MetaType::new("text").unwrap()
}

// ── Loading ──────────────────────────────────────────────────────

#[test]
fn from_value_accepts_grouped_object() {
    let record = AttributeRecord::from_value(json!({
        "meta_text": [
            {"attribute_text_id": "a1", "value": "hi"},
            {"attribute_text_id": "a2", "value": "there", "label": "Second"}
        ],
        "meta_number": []
    }))
    .unwrap();

    assert_eq!(record.len(), 2);
    assert_eq!(record.entry_count(), 2);
    assert_eq!(record.value(&text(), "a1"), Some(&json!("hi")));
    assert_eq!(
        record.find(&text(), "a2").unwrap().get("label"),
        Some(&json!("Second"))
    );
}

#[test]
fn from_value_rejects_non_object() {
    let err = AttributeRecord::from_value(json!([1, 2])).unwrap_err();
    assert!(matches!(err, ModelError::MalformedRecord(ref m) if m.contains("an array")));
}

#[test]
fn from_value_rejects_non_array_group() {
    let err = AttributeRecord::from_value(json!({"meta_text": {"a": 1}})).unwrap_err();
    assert!(matches!(err, ModelError::MalformedRecord(ref m) if m.contains("meta_text")));
}

#[test]
fn from_value_rejects_non_object_entry() {
    let err = AttributeRecord::from_value(json!({"meta_text": [{"value": 1}, "x"]})).unwrap_err();
    assert!(matches!(err, ModelError::MalformedRecord(ref m) if m.contains("entry 1")));
}

#[test]
fn non_group_members_are_kept_opaque() {
    let input = json!({
        "map_title": "Roadmap",
        "revision": 7,
        "meta bad key": {"nested": true},
        "meta_text": [{"attribute_text_id": "a1", "value": "hi"}]
    });
    let mut record = AttributeRecord::from_value(input).unwrap();

    assert_eq!(record.len(), 1);
    assert_eq!(record.extra("map_title"), Some(&json!("Roadmap")));
    assert_eq!(record.extra("revision"), Some(&json!(7)));

    record.update_value("text", "a1", "bye");
    assert_eq!(
        record.to_value().unwrap(),
        json!({
            "map_title": "Roadmap",
            "revision": 7,
            "meta bad key": {"nested": true},
            "meta_text": [{"attribute_text_id": "a1", "value": "bye"}]
        })
    );
}

#[test]
fn record_with_only_side_members_is_not_empty() {
    let record = AttributeRecord::from_value(json!({"map_title": "x"})).unwrap();
    assert!(!record.is_empty());
    assert_eq!(record.len(), 0);
    assert!(record.meta_types().is_empty());
}

#[test]
fn serde_deserialize_applies_the_same_rules() {
    let record: AttributeRecord = serde_json::from_str(r#"{"note": 1, "meta_text": []}"#).unwrap();
    assert_eq!(record.extra("note"), Some(&json!(1)));

    assert!(serde_json::from_str::<AttributeRecord>(r#"{"meta_text": 1}"#).is_err());
}

#[test]
fn from_json_str_reports_syntax_errors() {
    let err = AttributeRecord::from_json_str("{not json").unwrap_err();
    assert!(matches!(err, ModelError::Serialization(_)));
}

// ── Serialization ────────────────────────────────────────────────

#[test]
fn serializes_as_plain_object() {
    let mut record = AttributeRecord::new();
    record.update_value("text", "a1", "hi");

    assert_eq!(
        record.to_value().unwrap(),
        json!({"meta_text": [{"attribute_text_id": "a1", "value": "hi"}]})
    );
}

#[test]
fn empty_record_serializes_to_empty_object() {
    let record = AttributeRecord::new();
    assert!(record.is_empty());
    assert_eq!(serde_json::to_string(&record).unwrap(), "{}");
}

#[test]
fn unknown_fields_survive_load_and_save() {
    let input = json!({
        "meta_text": [{"attribute_text_id": "a1", "value": 1, "updated_by": "u7"}],
        "meta_flag": [{"attribute_flag_id": "f", "value": true}]
    });
    let record = AttributeRecord::from_value(input.clone()).unwrap();
    assert_eq!(record.to_value().unwrap(), input);
}

// ── Lookups ──────────────────────────────────────────────────────

#[test]
fn group_is_none_until_referenced() {
    let mut record = AttributeRecord::new();
    assert!(record.group(&text()).is_none());

    record.group_mut(&text());
    assert_eq!(record.group(&text()).map(<[_]>::len), Some(0));
}

#[test]
fn find_uses_strict_id_equality() {
    let record = AttributeRecord::from_value(json!({
        "meta_num": [{"attribute_num_id": 5, "value": "numeric id"}]
    }))
    .unwrap();
    let num = MetaType::new("num").unwrap();

    assert!(record.find(&num, "5").is_none());
}

#[test]
fn meta_types_skips_foreign_keys() {
    let record = AttributeRecord::from_value(json!({
        "meta_text": [],
        "meta_AT15": [],
        "notes": []
    }))
    .unwrap();

    let names: Vec<String> = record.meta_types().into_iter().map(String::from).collect();
    assert_eq!(names, vec!["AT15".to_string(), "text".to_string()]);
}

#[test]
fn entry_accessors() {
    let mut entry = AttributeEntry::with_id(&text(), "a1");
    assert_eq!(entry.id(&text()), Some(&json!("a1")));
    assert!(entry.value().is_none());

    entry.set_value(json!({"rich": true}));
    entry.insert("label", json!("Title"));

    assert_eq!(entry.value(), Some(&json!({"rich": true})));
    assert_eq!(entry.fields().len(), 3);
}
