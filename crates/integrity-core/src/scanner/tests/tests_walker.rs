//! Tests for the asset tree walker

#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use crate::scanner::walker::handle_upsert_result;
use crate::scanner::{
    hash_tree, save_subresource_integrity_hash, sri_digest, ScanError, WalkSummary,
};
use crate::store::model::IntegrityRecord;
use crate::store::{MemoryStore, StoreError};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// ============================================================================
// Helper functions
// ============================================================================

fn key(path: &Path) -> String {
    path.display().to_string()
}

/// root/app.js, root/logo.png, root/css/style.css
fn create_static_tree() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();

    fs::write(root.join("app.js"), "console.log('hi');").expect("Failed to write file");
    fs::write(root.join("logo.png"), [0x89, b'P', b'N', b'G']).expect("Failed to write file");
    fs::create_dir(root.join("css")).expect("Failed to create dir");
    fs::write(root.join("css").join("style.css"), "body { margin: 0 }")
        .expect("Failed to write file");

    temp_dir
}

// ============================================================================
// Walk behaviour
// ============================================================================

#[tokio::test]
async fn test_walk_stores_only_eligible_files() {
    let temp_dir = create_static_tree();
    let root = temp_dir.path();
    let store = MemoryStore::new();

    let summary = save_subresource_integrity_hash(&store, root)
        .await
        .expect("walk failed");

    assert_eq!(store.len(), 2);
    assert!(store.get(&key(&root.join("app.js"))).is_some());
    assert!(store.get(&key(&root.join("css").join("style.css"))).is_some());
    assert!(store.get(&key(&root.join("logo.png"))).is_none());
    assert!(store.get(&key(&root.join("css"))).is_none());

    assert_eq!(
        summary,
        WalkSummary {
            upserted: 2,
            failed_upserts: 0,
            unreadable: 0,
            skipped: 1,
        }
    );
}

#[tokio::test]
async fn test_walk_records_carry_file_digest() {
    let temp_dir = create_static_tree();
    let root = temp_dir.path();
    let store = MemoryStore::new();

    save_subresource_integrity_hash(&store, root)
        .await
        .expect("walk failed");

    let record = store
        .get(&key(&root.join("app.js")))
        .expect("missing record");
    assert_eq!(record.hash, sri_digest(b"console.log('hi');"));
    assert_eq!(record.filepath, key(&root.join("app.js")));
}

#[tokio::test]
async fn test_walk_twice_is_idempotent() {
    let temp_dir = create_static_tree();
    let store = MemoryStore::new();

    save_subresource_integrity_hash(&store, temp_dir.path())
        .await
        .expect("first walk failed");
    let first = store.records();

    save_subresource_integrity_hash(&store, temp_dir.path())
        .await
        .expect("second walk failed");
    let second = store.records();

    assert_eq!(first.len(), 2);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_walk_overwrites_changed_hash() {
    let temp_dir = create_static_tree();
    let root = temp_dir.path();
    let store = MemoryStore::new();

    save_subresource_integrity_hash(&store, root)
        .await
        .expect("first walk failed");
    fs::write(root.join("app.js"), "console.log('bye');").expect("Failed to write file");
    save_subresource_integrity_hash(&store, root)
        .await
        .expect("second walk failed");

    let record = store
        .get(&key(&root.join("app.js")))
        .expect("missing record");
    assert_eq!(record.hash, sri_digest(b"console.log('bye');"));
    assert_eq!(store.len(), 2);
}

#[tokio::test]
async fn test_walk_keeps_records_for_deleted_files() {
    let temp_dir = create_static_tree();
    let root = temp_dir.path();
    let store = MemoryStore::new();

    save_subresource_integrity_hash(&store, root)
        .await
        .expect("first walk failed");
    fs::remove_file(root.join("app.js")).expect("Failed to remove file");
    save_subresource_integrity_hash(&store, root)
        .await
        .expect("second walk failed");

    // There is no deletion path
    assert!(store.get(&key(&root.join("app.js"))).is_some());
}

#[tokio::test]
async fn test_walk_continues_after_failed_upsert() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();
    fs::write(root.join("a.js"), "a").expect("Failed to write file");
    fs::write(root.join("b.js"), "b").expect("Failed to write file");
    fs::create_dir_all(root.join("nested").join("deep")).expect("Failed to create dir");
    fs::write(root.join("nested").join("c.css"), "c").expect("Failed to write file");
    fs::write(root.join("nested").join("deep").join("d.js"), "d")
        .expect("Failed to write file");

    let failing = key(&root.join("a.js"));
    let store = MemoryStore::new().with_failures([failing.clone()]);

    let summary = save_subresource_integrity_hash(&store, root)
        .await
        .expect("walk should survive upsert failures");

    assert_eq!(summary.failed_upserts, 1);
    assert_eq!(summary.upserted, 3);
    assert!(store.get(&failing).is_none());
    assert!(store.get(&key(&root.join("b.js"))).is_some());
    assert!(store.get(&key(&root.join("nested").join("c.css"))).is_some());
    assert!(store
        .get(&key(&root.join("nested").join("deep").join("d.js")))
        .is_some());
}

#[tokio::test]
async fn test_walk_empty_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = MemoryStore::new();

    let summary = save_subresource_integrity_hash(&store, temp_dir.path())
        .await
        .expect("walk failed");

    assert_eq!(summary, WalkSummary::default());
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_walk_missing_root_is_an_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = MemoryStore::new();

    let result = save_subresource_integrity_hash(&store, &temp_dir.path().join("missing")).await;

    assert!(matches!(result, Err(ScanError::Walk(_))));
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_walk_file_root_is_an_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file = temp_dir.path().join("app.js");
    fs::write(&file, "x").expect("Failed to write file");
    let store = MemoryStore::new();

    let result = save_subresource_integrity_hash(&store, &file).await;

    match result {
        Err(ScanError::NotADirectory(path)) => assert_eq!(path, file),
        other => panic!("expected NotADirectory, got {other:?}"),
    }
    assert!(store.is_empty());
}

#[cfg(unix)]
#[tokio::test]
async fn test_walk_follows_directory_symlinks() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let shared = temp_dir.path().join("shared");
    let root = temp_dir.path().join("static");
    fs::create_dir(&shared).expect("Failed to create dir");
    fs::create_dir(&root).expect("Failed to create dir");
    fs::write(shared.join("lib.js"), "lib").expect("Failed to write file");
    std::os::unix::fs::symlink(&shared, root.join("vendor")).expect("Failed to symlink");

    let store = MemoryStore::new();
    save_subresource_integrity_hash(&store, &root)
        .await
        .expect("walk failed");

    assert!(store.get(&key(&root.join("vendor").join("lib.js"))).is_some());
}

#[cfg(unix)]
#[tokio::test]
async fn test_walk_broken_symlink_is_an_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();
    std::os::unix::fs::symlink(root.join("gone.js"), root.join("broken.js"))
        .expect("Failed to symlink");

    let store = MemoryStore::new();
    let result = save_subresource_integrity_hash(&store, root).await;

    assert!(matches!(result, Err(ScanError::Walk(_))));
}

#[cfg(unix)]
#[tokio::test]
async fn test_walk_continues_past_unreadable_asset() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();
    fs::write(root.join("a.js"), "a").expect("Failed to write file");
    fs::create_dir(root.join("sub")).expect("Failed to create dir");
    fs::write(root.join("sub").join("b.css"), "b").expect("Failed to write file");
    // Opening a socket fails with ENXIO, even for root
    let _listener = std::os::unix::net::UnixListener::bind(root.join("sock.js"))
        .expect("Failed to bind socket");

    let store = MemoryStore::new();
    let summary = save_subresource_integrity_hash(&store, root)
        .await
        .expect("walk should survive unreadable assets");

    assert_eq!(
        summary,
        WalkSummary {
            upserted: 2,
            failed_upserts: 0,
            unreadable: 1,
            skipped: 0,
        }
    );
    assert!(store.get(&key(&root.join("a.js"))).is_some());
    assert!(store.get(&key(&root.join("sub").join("b.css"))).is_some());
    assert!(store.get(&key(&root.join("sock.js"))).is_none());
}

#[cfg(target_os = "linux")]
#[tokio::test]
async fn test_walk_does_not_store_non_utf8_paths() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();
    fs::write(root.join("ok.js"), "ok").expect("Failed to write file");
    fs::write(root.join(OsStr::from_bytes(b"bad\xff.js")), "bad").expect("Failed to write file");

    let store = MemoryStore::new();
    let summary = save_subresource_integrity_hash(&store, root)
        .await
        .expect("walk failed");

    assert_eq!(summary.upserted, 1);
    assert_eq!(summary.unreadable, 1);
    assert_eq!(store.len(), 1);
    assert!(store.get(&key(&root.join("ok.js"))).is_some());
}

// ============================================================================
// hash_tree
// ============================================================================

#[tokio::test]
async fn test_hash_tree_returns_sorted_records() {
    let temp_dir = create_static_tree();
    let root = temp_dir.path();

    let records = hash_tree(root).await.expect("hash_tree failed");

    let paths: Vec<_> = records.iter().map(|r| r.filepath.clone()).collect();
    let mut sorted = paths.clone();
    sorted.sort();
    assert_eq!(paths, sorted);
    assert_eq!(records.len(), 2);
}

// ============================================================================
// handle_upsert_result
// ============================================================================

#[test]
fn test_handle_upsert_result_ok_increments_upserted() {
    let mut summary = WalkSummary::default();
    let record = IntegrityRecord::new("/static/app.js", "sha384-x");

    handle_upsert_result(Ok(()), &record, &mut summary);

    assert_eq!(summary.upserted, 1);
    assert_eq!(summary.failed_upserts, 0);
}

#[test]
fn test_handle_upsert_result_err_increments_failed() {
    let mut summary = WalkSummary::default();
    let record = IntegrityRecord::new("/static/app.js", "sha384-x");

    handle_upsert_result(
        Err(StoreError::Unavailable(record.filepath.clone())),
        &record,
        &mut summary,
    );

    assert_eq!(summary.upserted, 0);
    assert_eq!(summary.failed_upserts, 1);
}

#[test]
fn test_assets_seen_excludes_skipped() {
    let summary = WalkSummary {
        upserted: 3,
        failed_upserts: 1,
        unreadable: 2,
        skipped: 10,
    };

    assert_eq!(summary.assets_seen(), 6);
}
