//! Asset pipeline for the generated stylesheet and copied static files.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use walkdir::WalkDir;

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Generate the effects stylesheet.
    pub fn generate_css() -> String {
        FOLIO_CSS.to_string()
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }

    /// Copy each configured asset directory into the output, preserving the
    /// directory name and relative structure. Files are copied in parallel.
    pub fn copy_assets(dirs: &[PathBuf], output_dir: &Path) -> Result<usize, std::io::Error> {
        let mut jobs: Vec<(PathBuf, PathBuf)> = Vec::new();

        for dir in dirs {
            if !dir.exists() {
                tracing::warn!("Asset directory not found: {}", dir.display());
                continue;
            }

            let dir_name = dir.file_name().map(PathBuf::from).unwrap_or_default();

            for entry in WalkDir::new(dir).into_iter().filter_map(|e| e.ok()) {
                if !entry.path().is_file() {
                    continue;
                }
                let relative = entry.path().strip_prefix(dir).unwrap_or(entry.path());
                jobs.push((
                    entry.path().to_path_buf(),
                    output_dir.join(&dir_name).join(relative),
                ));
            }
        }

        jobs.par_iter().try_for_each(|(from, to)| {
            if let Some(parent) = to.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(from, to).map(|_| ())
        })?;

        Ok(jobs.len())
    }
}

const FOLIO_CSS: &str = r#"/* folio effect styles */

.hidden {
  display: none;
}

/* Typewriter caret */
#typed-role::after {
  content: '|';
  margin-left: 2px;
  animation: caret-blink 1s step-end infinite;
}

@keyframes caret-blink {
  50% { opacity: 0; }
}

/* Skill badges pop in with their staggered delay */
.skill-animation {
  opacity: 0;
  animation: pop-in 0.4s ease forwards;
}

@keyframes pop-in {
  from {
    opacity: 0;
    transform: scale(0.8);
  }
  to {
    opacity: 1;
    transform: scale(1);
  }
}

/* Project cards slide up with their staggered delay */
.project-animation {
  opacity: 0;
  animation: slide-up 0.5s ease forwards;
}

@keyframes slide-up {
  from {
    opacity: 0;
    transform: translateY(20px);
  }
  to {
    opacity: 1;
    transform: translateY(0);
  }
}

/* Frosted card surface */
.glass {
  background: rgba(31, 41, 55, 0.6);
  backdrop-filter: blur(12px);
  border: 1px solid rgba(99, 102, 241, 0.15);
}

.card-hover {
  transition: transform 0.3s ease, box-shadow 0.3s ease;
}

.card-hover:hover {
  transform: translateY(-4px);
  box-shadow: 0 20px 40px rgba(0, 0, 0, 0.3);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn generates_css() {
        let css = AssetPipeline::generate_css();
        assert!(css.contains(".skill-animation"));
        assert!(css.contains(".project-animation"));
        assert!(css.contains("#typed-role"));
    }

    #[test]
    fn minifies_css() {
        let css = r#"
.card {
    background-color: blue;
    padding: 10px;
}
        "#;

        let minified = AssetPipeline::minify_css(css).unwrap();

        assert!(!minified.contains('\n'));
        assert!(minified.contains(".card"));
    }

    #[test]
    fn copies_asset_directories() {
        let temp = tempdir().unwrap();
        let images = temp.path().join("images");
        fs::create_dir_all(images.join("icons")).unwrap();
        fs::write(images.join("me.jpg"), b"jpg").unwrap();
        fs::write(images.join("icons/gh.svg"), b"svg").unwrap();

        let out = temp.path().join("dist");
        fs::create_dir_all(&out).unwrap();

        let copied = AssetPipeline::copy_assets(&[images], &out).unwrap();

        assert_eq!(copied, 2);
        assert!(out.join("images/me.jpg").exists());
        assert!(out.join("images/icons/gh.svg").exists());
    }

    #[test]
    fn missing_asset_directory_is_skipped() {
        let temp = tempdir().unwrap();
        let copied =
            AssetPipeline::copy_assets(&[temp.path().join("nope")], temp.path()).unwrap();
        assert_eq!(copied, 0);
    }
}
