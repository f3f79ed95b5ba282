//! Tests for the flat gallery listing.

mod common;

use common::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use splash_manifest::services::{build_gallery, write_json};

#[tokio::test]
async fn test_gallery_file_contents() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("DJ-images");
    std::fs::create_dir(&dir).unwrap();
    std::fs::write(dir.join("set2.webp"), solid_png(4, 4, colors::ORANGE)).unwrap();
    std::fs::write(dir.join("set1.jpeg"), b"bytes are not inspected").unwrap();
    std::fs::write(dir.join("flyer.pdf"), b"%PDF").unwrap();
    std::fs::create_dir(dir.join("raw")).unwrap();

    let output = root.path().join("gallery_images.json");
    let entries = build_gallery(&dir).await.unwrap();
    write_json(&output, &entries, 2).unwrap();

    let text = std::fs::read_to_string(&output).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(
        value,
        json!([
            { "filename": "set1.jpeg", "path": "DJ-images/set1.jpeg" },
            { "filename": "set2.webp", "path": "DJ-images/set2.webp" }
        ])
    );
    assert!(text.starts_with("[\n  {\n    \"filename\""), "{text}");
}

#[tokio::test]
async fn test_empty_gallery() {
    let root = tempfile::tempdir().unwrap();
    let entries = build_gallery(root.path()).await.unwrap();
    assert!(entries.is_empty());
}
