use std::path::PathBuf;

use thiserror::Error;

/// Fatal loader errors.
///
/// Malformed rows and dangling references never surface here; they become
/// warnings on the [`crate::LoadReport`].
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("sales directory not found: {0}")]
    SalesDirNotFound(PathBuf),
}
