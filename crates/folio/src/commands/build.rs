//! Static site build command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use folio_static::StaticBuilder;

use crate::config::load_config;

/// Run the build command.
pub async fn run(config_path: &Path, output: Option<PathBuf>, minify: Option<bool>) -> Result<()> {
    tracing::info!("Building portfolio site...");

    let file_config = load_config(config_path)?;
    let config = file_config.build_config(output, minify);

    let result = StaticBuilder::new(config).build().await?;

    if result.used_fallback {
        tracing::warn!("Data document could not be loaded; built with fallback identity");
    }

    tracing::info!(
        "Applied {} bindings and {} project cards in {}ms",
        result.bindings_applied,
        result.projects_rendered,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
