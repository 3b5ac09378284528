use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("Failed to create directory '{}': {source}", path.display())]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to ensure feature '{feature}' at '{}': {source}", path.display())]
    Feature {
        feature: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
