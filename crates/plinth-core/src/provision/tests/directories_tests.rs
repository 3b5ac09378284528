use std::path::PathBuf;

use tempfile::tempdir;

use crate::app::context::AppContext;
use crate::provision::directories;

#[tokio::test]
async fn test_creates_nested_directories_under_root() {
    let tmp = tempdir().expect("tempdir failed");
    let context = AppContext::new(Some(tmp.path().to_path_buf()));

    directories::create(
        &context,
        &[PathBuf::from("data"), PathBuf::from("cache/blobs")],
    )
    .await
    .expect("create failed");

    assert!(tmp.path().join("data").is_dir());
    assert!(tmp.path().join("cache/blobs").is_dir());
}

#[tokio::test]
async fn test_absolute_paths_bypass_the_root() {
    let root = tempdir().expect("tempdir failed");
    let elsewhere = tempdir().expect("tempdir failed");
    let context = AppContext::new(Some(root.path().to_path_buf()));

    let target = elsewhere.path().join("standalone");
    directories::create(&context, &[target.clone()])
        .await
        .expect("create failed");

    assert!(target.is_dir());
}

#[tokio::test]
async fn test_existing_directories_are_idempotent() {
    let tmp = tempdir().expect("tempdir failed");
    let context = AppContext::new(Some(tmp.path().to_path_buf()));
    let paths = [PathBuf::from("data")];

    directories::create(&context, &paths).await.expect("first create failed");
    directories::create(&context, &paths).await.expect("second create failed");

    assert!(tmp.path().join("data").is_dir());
}

#[tokio::test]
async fn test_empty_list_is_a_noop() {
    let context = AppContext::new(None);
    directories::create(&context, &[]).await.expect("noop failed");
}
