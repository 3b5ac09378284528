use std::path::PathBuf;

use serde_json::json;
use tempfile::tempdir;

use crate::app::context::AppContext;
use crate::plugin::builtin::{ConfigPlugin, LogPlugin};
use crate::plugin::traits::Plugin;

#[tokio::test]
async fn test_config_plugin_merges_inline_options() {
    let context = AppContext::new(None);

    ConfigPlugin
        .init(&context, &json!({"directories": ["data"], "answer": 42}))
        .await
        .expect("config plugin init failed");

    let dirs: Vec<PathBuf> = context.config().get("directories").await.unwrap();
    assert_eq!(dirs, vec![PathBuf::from("data")]);
    assert_eq!(context.config().get::<u32>("answer").await, Some(42));
    // The "file" pseudo-key never lands in the store
    assert!(!context.config().contains_key("file").await);
}

#[tokio::test]
async fn test_config_plugin_loads_file_with_inline_overrides() {
    let tmp = tempdir().expect("tempdir failed");
    std::fs::write(
        tmp.path().join("app.json"),
        r#"{"name": "from-file", "answer": 1}"#,
    )
    .expect("write config file failed");

    let context = AppContext::new(Some(tmp.path().to_path_buf()));
    ConfigPlugin
        .init(&context, &json!({"file": "app.json", "answer": 2}))
        .await
        .expect("config plugin init failed");

    // File values load; inline values win on conflict.
    assert_eq!(
        context.config().get::<String>("name").await.as_deref(),
        Some("from-file")
    );
    assert_eq!(context.config().get::<u32>("answer").await, Some(2));
}

#[tokio::test]
async fn test_config_plugin_rejects_missing_file() {
    let tmp = tempdir().expect("tempdir failed");
    let context = AppContext::new(Some(tmp.path().to_path_buf()));

    let result = ConfigPlugin
        .init(&context, &json!({"file": "nope.json"}))
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_config_plugin_rejects_unknown_extension() {
    let tmp = tempdir().expect("tempdir failed");
    std::fs::write(tmp.path().join("app.ini"), "x=1").expect("write failed");
    let context = AppContext::new(Some(tmp.path().to_path_buf()));

    let result = ConfigPlugin.init(&context, &json!({"file": "app.ini"})).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_log_plugin_rejects_invalid_level() {
    let context = AppContext::new(None);
    let result = LogPlugin.init(&context, &json!({"level": "blaring"})).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_log_plugin_accepts_valid_level() {
    let context = AppContext::new(None);
    LogPlugin
        .init(&context, &json!({"level": "debug"}))
        .await
        .expect("log plugin init failed");

    // A second instance in the same process is tolerated even though the
    // global logger slot is already taken.
    LogPlugin
        .init(&context, &json!({"level": "info"}))
        .await
        .expect("repeated log plugin init failed");
}
