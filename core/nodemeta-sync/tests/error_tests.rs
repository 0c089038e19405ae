use nodemeta_sync::SyncError;

#[test]
fn missing_target_display() {
    assert_eq!(SyncError::MissingTarget.to_string(), "target id is required");
}

#[test]
fn remote_rejected_display_and_status() {
    let err = SyncError::RemoteRejected { status: 502 };
    assert_eq!(err.to_string(), "HTTP 502");
    assert_eq!(err.status(), Some(502));
    assert!(!err.is_transport());
}

#[test]
fn config_error_display() {
    let err = SyncError::Config("bad".into());
    assert_eq!(err.to_string(), "invalid configuration: bad");
    assert!(err.status().is_none());
}

#[test]
fn serde_error_converts() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: SyncError = json_err.into();
    assert!(matches!(err, SyncError::Serialization(_)));
    assert!(err.to_string().starts_with("serialization error"));
}

#[test]
fn error_is_send_sync() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<SyncError>();
}
