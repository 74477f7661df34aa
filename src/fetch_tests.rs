use super::validate_sha256_hex;
use crate::error::SyncError;

const URL: &str = "https://example.invalid/piscator.tar.gz.sha256";

fn hex64() -> String {
    "cafef00d".repeat(8)
}

#[test]
fn accepts_a_sha256_hex_digest() {
    validate_sha256_hex(URL, &hex64()).expect("64 hex chars are valid");
    validate_sha256_hex(URL, &hex64().to_uppercase()).expect("case-insensitive");
}

#[test]
fn rejects_empty_body() {
    let err = validate_sha256_hex(URL, "").unwrap_err();
    assert!(matches!(err, SyncError::MalformedChecksum { .. }));
}

#[test]
fn rejects_wrong_length() {
    let short = &hex64()[..63];
    assert!(validate_sha256_hex(URL, short).is_err());
    let long = format!("{}0", hex64());
    assert!(validate_sha256_hex(URL, &long).is_err());
}

#[test]
fn rejects_error_page_body_and_names_the_url() {
    let err = validate_sha256_hex(URL, "<html><body>404 Not Found</body></html>").unwrap_err();
    match err {
        SyncError::MalformedChecksum { url, body } => {
            assert_eq!(url, URL);
            assert!(body.contains("404"));
        }
        other => panic!("unexpected error: {other}"),
    }
}
