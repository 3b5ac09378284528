use std::path::PathBuf;

use crate::app::context::AppContext;
use crate::provision::error::ProvisionError;

/// Create every directory in `paths`, resolving relative entries against
/// the application root. Creation is recursive and idempotent; the first
/// failure aborts with the offending path.
pub async fn create(context: &AppContext, paths: &[PathBuf]) -> Result<(), ProvisionError> {
    for path in paths {
        let full = context.resolve_path(path);
        log::debug!("Provisioning directory {}", full.display());
        if let Err(source) = tokio::fs::create_dir_all(&full).await {
            return Err(ProvisionError::DirectoryCreate { path: full, source });
        }
    }
    Ok(())
}
