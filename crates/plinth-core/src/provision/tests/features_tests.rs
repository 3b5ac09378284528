use serde_json::json;
use tempfile::tempdir;

use crate::app::constants;
use crate::app::context::AppContext;
use crate::provision::features;

#[tokio::test]
async fn test_absent_feature_map_is_a_noop() {
    let context = AppContext::new(None);
    features::ensure(&context).await.expect("ensure failed");
}

#[tokio::test]
async fn test_directory_features_default_kind() {
    let tmp = tempdir().expect("tempdir failed");
    let context = AppContext::new(Some(tmp.path().to_path_buf()));
    context
        .config()
        .set(
            constants::FEATURES_KEY,
            json!({"cache": {"path": "cache"}}),
        )
        .await
        .expect("set failed");

    features::ensure(&context).await.expect("ensure failed");
    assert!(tmp.path().join("cache").is_dir());
}

#[tokio::test]
async fn test_file_features_create_parents_and_empty_file() {
    let tmp = tempdir().expect("tempdir failed");
    let context = AppContext::new(Some(tmp.path().to_path_buf()));
    context
        .config()
        .set(
            constants::FEATURES_KEY,
            json!({"journal": {"path": "logs/journal.txt", "kind": "file"}}),
        )
        .await
        .expect("set failed");

    features::ensure(&context).await.expect("ensure failed");
    let file = tmp.path().join("logs/journal.txt");
    assert!(file.is_file());
    assert_eq!(std::fs::metadata(&file).expect("metadata failed").len(), 0);
}

#[tokio::test]
async fn test_existing_files_are_left_untouched() {
    let tmp = tempdir().expect("tempdir failed");
    let context = AppContext::new(Some(tmp.path().to_path_buf()));
    std::fs::write(tmp.path().join("keep.txt"), "contents").expect("write failed");
    context
        .config()
        .set(
            constants::FEATURES_KEY,
            json!({"keep": {"path": "keep.txt", "kind": "file"}}),
        )
        .await
        .expect("set failed");

    features::ensure(&context).await.expect("ensure failed");
    let contents = std::fs::read_to_string(tmp.path().join("keep.txt")).expect("read failed");
    assert_eq!(contents, "contents");
}
