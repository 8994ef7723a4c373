//! Configuration file loading (folio.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;

use folio_static::BuildConfig;

/// Configuration file structure (folio.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub build: BuildSettings,
}

#[derive(Debug, Deserialize)]
pub struct SiteConfig {
    /// Page skeleton the data is rendered into
    #[serde(default = "default_skeleton")]
    pub skeleton: String,

    /// Portfolio data document
    #[serde(default = "default_data")]
    pub data: String,

    /// Output directory
    #[serde(default = "default_output")]
    pub output: String,

    /// Directories copied verbatim into the output
    #[serde(default)]
    pub assets: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            skeleton: default_skeleton(),
            data: default_data(),
            output: default_output(),
            assets: vec![],
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BuildSettings {
    #[serde(default = "default_minify")]
    pub minify: bool,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            minify: default_minify(),
        }
    }
}

fn default_skeleton() -> String {
    "site/index.html".to_string()
}
fn default_data() -> String {
    "portfolio-data.json".to_string()
}
fn default_output() -> String {
    "dist".to_string()
}
fn default_minify() -> bool {
    true
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

impl ConfigFile {
    /// Translate into builder settings, applying CLI overrides.
    pub fn build_config(&self, output: Option<PathBuf>, minify: Option<bool>) -> BuildConfig {
        BuildConfig {
            skeleton: PathBuf::from(&self.site.skeleton),
            data: PathBuf::from(&self.site.data),
            output_dir: output.unwrap_or_else(|| PathBuf::from(&self.site.output)),
            assets: self.site.assets.iter().map(PathBuf::from).collect(),
            minify: minify.unwrap_or(self.build.minify),
        }
    }
}
