//! Loading configuration snapshots from disk

mod common;

use std::io::Write;

use printfarm_core::core::validate_snapshot;
use printfarm_core::load_snapshot;
use shared::error::{ErrorCode, ErrorKind};

fn write_snapshot(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn loads_valid_snapshot() {
    printfarm_core::init_logger();
    let json = serde_json::to_string(&common::reference_config()).unwrap();
    let file = write_snapshot(&json);

    let config = load_snapshot(file.path()).unwrap();
    assert_eq!(config, common::reference_config());
    assert_eq!(config.material("argolla").unwrap().price, 0.25);
}

#[test]
fn missing_file_is_unreadable() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_snapshot(dir.path().join("nope.json")).unwrap_err();
    assert_eq!(err.code, ErrorCode::SnapshotUnreadable);
    assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
}

#[test]
fn malformed_json_is_unreadable() {
    let file = write_snapshot("{\"costs\": ");
    let err = load_snapshot(file.path()).unwrap_err();
    assert_eq!(err.code, ErrorCode::SnapshotUnreadable);
}

#[test]
fn snapshot_with_incomplete_priorities_is_rejected() {
    let mut config = common::reference_config();
    config.status_priorities.truncate(4);
    let file = write_snapshot(&serde_json::to_string(&config).unwrap());
    let err = load_snapshot(file.path()).unwrap_err();
    assert_eq!(err.code, ErrorCode::StatusPriorityMissing);
}

#[test]
fn snapshot_with_duplicate_material_is_rejected() {
    let mut config = common::reference_config();
    config.materials.push(config.materials[0].clone());
    let err = validate_snapshot(&config).unwrap_err();
    assert_eq!(err.code, ErrorCode::AlreadyExists);
}
