//! Integration tests for parsing DigitalOcean response data.
//!
//! These tests validate that the fulla-api models correctly deserialize
//! representative API response payloads.

use fulla_api::client::resolve_image;
use fulla_api::models::{DropletsResponse, ImagesPage, SshKeysResponse};
use std::fs;
use std::path::PathBuf;

/// Get the path to the test fixtures directory.
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture(name: &str) -> String {
    let fixture_path = fixtures_dir().join(name);
    fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!("Failed to read fixture at {}: {}", fixture_path.display(), e)
    })
}

#[test]
fn test_deserialize_droplet_listing() {
    let response: DropletsResponse =
        serde_json::from_str(&load_fixture("droplets_response.json")).unwrap();

    assert_eq!(response.droplets.len(), 2);
    assert_eq!(response.meta.unwrap().total, 2);

    let active = &response.droplets[0];
    assert_eq!(active.id, 3_164_444);
    assert_eq!(active.name, "example.com");
    assert_eq!(active.status.as_deref(), Some("active"));
    assert_eq!(active.memory, Some(512));
    assert_eq!(active.size_slug.as_deref(), Some("512mb"));
    assert_eq!(active.backup_ids.as_deref(), Some(&[7_938_002][..]));
    assert!(active.created_at.is_some());
    assert_eq!(active.region.as_ref().unwrap()["slug"], "nyc3");

    let off = &response.droplets[1];
    assert_eq!(off.status.as_deref(), Some("off"));
    assert_eq!(off.image.as_ref().unwrap()["slug"], serde_json::Value::Null);
}

#[test]
fn test_deserialize_images_page_with_pagination_links() {
    let page: ImagesPage = serde_json::from_str(&load_fixture("images_page.json")).unwrap();

    assert_eq!(page.images.len(), 3);
    assert_eq!(page.meta.unwrap().total, 9);

    let pages = page.links.unwrap().pages.unwrap();
    assert_eq!(
        pages.last.as_deref(),
        Some("https://api.digitalocean.com/v2/images?page=3")
    );

    // Public base images carry slugs; user snapshots do not.
    assert_eq!(page.images[0].slug.as_deref(), Some("ubuntu-14-04-x64"));
    assert!(page.images[2].slug.is_none());
    assert_eq!(page.images[2].public, Some(false));
}

#[test]
fn test_resolve_image_against_fixture_listing() {
    let page: ImagesPage = serde_json::from_str(&load_fixture("images_page.json")).unwrap();

    let by_slug = resolve_image(&page.images, "fedora-21-x64").unwrap();
    assert_eq!(by_slug.id, 6_372_321);

    // The slug-less snapshot is only addressable by id.
    let by_id = resolve_image(&page.images, "9801950").unwrap();
    assert!(by_id.slug.is_none());

    assert!(resolve_image(&page.images, "centos-7-x64").is_none());
}

#[test]
fn test_deserialize_ssh_key_listing() {
    let response: SshKeysResponse =
        serde_json::from_str(&load_fixture("ssh_keys_response.json")).unwrap();

    assert_eq!(response.ssh_keys.len(), 2);
    assert_eq!(response.meta.unwrap().total, 2);
    assert_eq!(response.ssh_keys[0].id, 512_190);
    assert_eq!(response.ssh_keys[1].name.as_deref(), Some("deploy key"));
    assert!(response.ssh_keys[1]
        .public_key
        .as_deref()
        .unwrap()
        .starts_with("ssh-ed25519"));
}
