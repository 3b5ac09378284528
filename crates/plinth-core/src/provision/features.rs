use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::app::constants;
use crate::app::context::AppContext;
use crate::provision::error::ProvisionError;

/// Kind of filesystem entry a feature requires
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureKind {
    /// A directory that must exist
    #[default]
    Directory,
    /// A file that must exist (created empty when missing)
    File,
}

/// A single declared feature requirement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureRequirement {
    /// Path of the required entry, relative to the application root
    pub path: PathBuf,
    /// What kind of entry the path must be
    #[serde(default)]
    pub kind: FeatureKind,
}

/// Reconcile the application's declared features with the filesystem.
///
/// Reads the `features` config key (feature name to requirement) and
/// creates whatever is missing. An absent or empty map is a no-op; an
/// existing entry is left untouched.
pub async fn ensure(context: &AppContext) -> Result<(), ProvisionError> {
    let features: HashMap<String, FeatureRequirement> = context
        .config()
        .get(constants::FEATURES_KEY)
        .await
        .unwrap_or_default();

    for (name, requirement) in features {
        let full = context.resolve_path(&requirement.path);
        log::debug!("Ensuring feature '{}' at {}", name, full.display());
        let result = match requirement.kind {
            FeatureKind::Directory => tokio::fs::create_dir_all(&full).await,
            FeatureKind::File => ensure_file(&full).await,
        };
        if let Err(source) = result {
            return Err(ProvisionError::Feature {
                feature: name,
                path: full,
                source,
            });
        }
    }
    Ok(())
}

async fn ensure_file(path: &Path) -> std::io::Result<()> {
    if tokio::fs::try_exists(path).await? {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::File::create(path).await.map(|_| ())
}
