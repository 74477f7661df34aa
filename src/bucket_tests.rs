use super::{derive_url, update_entry, ArchEntry, BucketManifest};
use crate::error::SyncError;
use std::collections::BTreeMap;

fn sample_manifest() -> BucketManifest {
    let mut architecture = BTreeMap::new();
    architecture.insert(
        "64bit".to_string(),
        ArchEntry {
            url: "https://github.com/shimman-dev/piscator/releases/download/v1.0.0/piscator-v1.0.0-windows-amd64.zip".to_string(),
            bin: vec!["piscator.exe".to_string()],
            hash: "sha256:deadbeef".to_string(),
        },
    );
    BucketManifest {
        version: "1.0.0".to_string(),
        architecture,
        homepage: "https://github.com/shimman-dev/piscator".to_string(),
        license: "MIT".to_string(),
        description: "Catch fish from the GitHub sea".to_string(),
    }
}

#[test]
fn derives_url_by_replacing_every_version_token() {
    let manifest = sample_manifest();
    let url = derive_url(&manifest, "64bit", "v1.0.0", "v1.1.0").expect("arch present");
    assert_eq!(
        url,
        "https://github.com/shimman-dev/piscator/releases/download/v1.1.0/piscator-v1.1.0-windows-amd64.zip"
    );
}

#[test]
fn missing_architecture_key_is_fatal() {
    let manifest = sample_manifest();
    let err = derive_url(&manifest, "32bit", "v1.0.0", "v1.1.0").unwrap_err();
    match err {
        SyncError::MissingArch { arch } => assert_eq!(arch, "32bit"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn update_entry_sets_url_and_prefixed_hash_together() {
    let mut manifest = sample_manifest();
    update_entry(&mut manifest, "64bit", "https://example/v1.1.0.zip".to_string(), "cafef00d")
        .expect("arch present");
    let entry = &manifest.architecture["64bit"];
    assert_eq!(entry.url, "https://example/v1.1.0.zip");
    assert_eq!(entry.hash, "sha256:cafef00d");
    // untouched fields survive
    assert_eq!(entry.bin, vec!["piscator.exe".to_string()]);
}

#[test]
fn manifest_round_trips_with_persisted_field_order() {
    let manifest = sample_manifest();
    let json = serde_json::to_string_pretty(&manifest).expect("serialize manifest");
    let version_at = json.find("\"version\"").expect("version field");
    let architecture_at = json.find("\"architecture\"").expect("architecture field");
    let homepage_at = json.find("\"homepage\"").expect("homepage field");
    assert!(version_at < architecture_at && architecture_at < homepage_at);

    let parsed: BucketManifest = serde_json::from_str(&json).expect("parse manifest");
    assert_eq!(parsed, manifest);
}
