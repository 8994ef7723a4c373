//! Reading and parsing the data document.

use std::fs;
use std::path::Path;

use crate::schema::PortfolioData;

/// Errors that can occur when loading the data document.
///
/// Callers collapse both variants into a single "load failed" path and fall
/// back to [`PortfolioData::fallback`].
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {message}")]
    Parse { path: String, message: String },
}

/// Load the portfolio data document from `path`.
pub fn load_document(path: &Path) -> Result<PortfolioData, LoadError> {
    let raw = fs::read_to_string(path).map_err(|e| LoadError::Read {
        path: path.display().to_string(),
        source: e,
    })?;

    serde_json::from_str(&raw).map_err(|e| LoadError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
