//! Static site builder.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use folio_data::{load_document, PortfolioData};
use folio_effects::{effects_script, EffectsPlan};

use crate::assets::AssetPipeline;
use crate::bindings::{self, Region};
use crate::cards;
use crate::html;
use crate::seo::apply_seo;
use crate::templates::TemplateEngine;

/// Configuration for building the site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Page skeleton the data is rendered into
    pub skeleton: PathBuf,

    /// Portfolio data document
    pub data: PathBuf,

    /// Output directory
    pub output_dir: PathBuf,

    /// Directories copied verbatim into the output
    pub assets: Vec<PathBuf>,

    /// Minify the generated stylesheet
    pub minify: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            skeleton: PathBuf::from("site/index.html"),
            data: PathBuf::from("portfolio-data.json"),
            output_dir: PathBuf::from("dist"),
            assets: vec![],
            minify: true,
        }
    }
}

/// Result of a build.
#[derive(Debug)]
pub struct BuildResult {
    /// Bindings that wrote content into the skeleton
    pub bindings_applied: usize,

    /// Project cards rendered
    pub projects_rendered: usize,

    /// Whether the hardcoded fallback identity was used
    pub used_fallback: bool,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during a build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to read skeleton: {0}")]
    Skeleton(String),

    #[error("Failed to render fragment: {0}")]
    Template(String),

    #[error("Failed to write output: {0}")]
    Write(String),
}

/// What a single page render touched.
#[derive(Debug, Default)]
pub struct RenderStats {
    pub bindings_applied: usize,
    pub projects_rendered: usize,
}

/// Static site builder.
pub struct StaticBuilder {
    config: BuildConfig,
    templates: TemplateEngine,
}

impl StaticBuilder {
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            templates: TemplateEngine::new(),
        }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Build the site into the output directory.
    pub async fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::Write(e.to_string()))?;

        let skeleton = fs::read_to_string(&self.config.skeleton).map_err(|e| {
            BuildError::Skeleton(format!("{}: {}", self.config.skeleton.display(), e))
        })?;

        let (data, used_fallback) = self.load_data();
        let (page, stats) = self.render_page(&skeleton, &data, used_fallback)?;

        fs::write(self.config.output_dir.join("index.html"), page)
            .map_err(|e| BuildError::Write(e.to_string()))?;

        self.write_assets(&data)?;

        AssetPipeline::copy_assets(&self.config.assets, &self.config.output_dir)
            .map_err(|e| BuildError::Write(e.to_string()))?;

        Ok(BuildResult {
            bindings_applied: stats.bindings_applied,
            projects_rendered: stats.projects_rendered,
            used_fallback,
            duration_ms: start.elapsed().as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Load the data document, falling back to the hardcoded identity when
    /// it cannot be read or parsed.
    pub fn load_data(&self) -> (PortfolioData, bool) {
        match load_document(&self.config.data) {
            Ok(data) => {
                tracing::debug!("Loaded portfolio data from {}", self.config.data.display());
                (data, false)
            }
            Err(e) => {
                tracing::error!("Failed to load portfolio data, using fallback: {}", e);
                (PortfolioData::fallback(), true)
            }
        }
    }

    /// Render one page from the skeleton.
    ///
    /// `hero_only` is the fallback mode: only the hero bindings are applied
    /// and every other region keeps its template-authored content.
    pub fn render_page(
        &self,
        skeleton: &str,
        data: &PortfolioData,
        hero_only: bool,
    ) -> Result<(String, RenderStats), BuildError> {
        if hero_only {
            let (page, applied) = bindings::apply_region(skeleton, data, Region::Hero);
            return Ok((
                page,
                RenderStats {
                    bindings_applied: applied,
                    projects_rendered: 0,
                },
            ));
        }

        let (mut page, applied) = bindings::apply(skeleton, data);
        let mut stats = RenderStats {
            bindings_applied: applied,
            projects_rendered: 0,
        };

        if !data.skills.technical.is_empty() {
            let badges = cards::render_skills(&self.templates, &data.skills)
                .map_err(|e| BuildError::Template(e.to_string()))?;
            if let Some(updated) = html::replace_inner_by_id(&page, "skills", &badges) {
                page = updated;
            }
        }

        if !data.projects.is_empty() {
            let selected = cards::select_projects(&data.projects);
            let grid = cards::render_projects(&self.templates, &selected)
                .map_err(|e| BuildError::Template(e.to_string()))?;
            if let Some(updated) = html::replace_inner_by_id(&page, "projectsGrid", &grid) {
                page = updated;
                stats.projects_rendered = selected.len();
            }
        }

        page = apply_seo(&page, &data.seo);

        Ok((page, stats))
    }

    /// The generated stylesheet, minified per config.
    pub fn stylesheet(&self) -> String {
        let css = AssetPipeline::generate_css();
        if self.config.minify {
            AssetPipeline::minify_css(&css).unwrap_or(css)
        } else {
            css
        }
    }

    /// The generated effects script for `data`.
    pub fn effects(&self, data: &PortfolioData) -> String {
        effects_script(&EffectsPlan::from_data(data))
    }

    fn write_assets(&self, data: &PortfolioData) -> Result<(), BuildError> {
        let assets_dir = self.config.output_dir.join("assets");
        fs::create_dir_all(&assets_dir).map_err(|e| BuildError::Write(e.to_string()))?;

        fs::write(assets_dir.join("folio.css"), self.stylesheet())
            .map_err(|e| BuildError::Write(e.to_string()))?;

        fs::write(assets_dir.join("effects.js"), self.effects(data))
            .map_err(|e| BuildError::Write(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SKELETON: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <title>Template Title</title>
  <meta name="description" content="template description">
</head>
<body>
  <header><span id="logo">Logo</span></header>
  <section>
    <h1 id="heroName">Your Name</h1>
    <p id="heroBio">Your tagline</p>
    <span id="typed-role"></span>
  </section>
  <section>
    <p id="aboutText">About placeholder</p>
    <span id="yearsCounter">0</span>
    <div id="skills"></div>
  </section>
  <section>
    <div id="projectsGrid"></div>
  </section>
  <footer><a id="githubLink" href="#">GitHub</a></footer>
</body>
</html>"##;

    const DATA: &str = r#"{
        "personal": { "name": "Ada Lovelace", "tagline": "First programmer" },
        "about": {
            "description": "I write programs.",
            "stats": { "yearsLearning": 3 }
        },
        "skills": { "technical": ["Rust", "SQL"] },
        "projects": [
            { "title": "Engine", "description": "Notes", "featured": true,
              "links": { "live": "https://eng.example" } },
            { "title": "Other", "description": "Not featured" }
        ],
        "roles": ["Developer"],
        "seo": { "title": "Ada | Portfolio", "description": "Personal site" },
        "contact": { "social": { "github": "https://github.com/ada" } }
    }"#;

    fn scaffolded(temp: &std::path::Path) -> BuildConfig {
        fs::create_dir_all(temp.join("site")).unwrap();
        fs::write(temp.join("site/index.html"), SKELETON).unwrap();
        fs::write(temp.join("portfolio-data.json"), DATA).unwrap();

        BuildConfig {
            skeleton: temp.join("site/index.html"),
            data: temp.join("portfolio-data.json"),
            output_dir: temp.join("dist"),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn builds_a_populated_page() {
        let temp = tempdir().unwrap();
        let builder = StaticBuilder::new(scaffolded(temp.path()));

        let result = builder.build().await.unwrap();

        assert!(!result.used_fallback);
        assert_eq!(result.projects_rendered, 1);

        let page = fs::read_to_string(temp.path().join("dist/index.html")).unwrap();
        assert!(page.contains(">Ada Lovelace</h1>"));
        assert!(page.contains(">Ada</span>")); // logo from first word of name
        assert!(page.contains(">3+</span>"));
        assert!(page.contains(">Rust</span>"));
        assert!(page.contains(r#"href="https://eng.example""#));
        assert!(!page.contains("Other")); // only the featured project
        assert!(page.contains("<title>Ada | Portfolio</title>"));
        assert!(page.contains(r#"content="Personal site""#));
    }

    #[tokio::test]
    async fn writes_effect_assets() {
        let temp = tempdir().unwrap();
        let builder = StaticBuilder::new(scaffolded(temp.path()));

        builder.build().await.unwrap();

        let css = fs::read_to_string(temp.path().join("dist/assets/folio.css")).unwrap();
        assert!(css.contains("skill-animation"));

        let js = fs::read_to_string(temp.path().join("dist/assets/effects.js")).unwrap();
        assert!(js.contains("yearsCounter"));
        assert!(js.contains("IntersectionObserver"));
    }

    #[tokio::test]
    async fn missing_data_falls_back_to_hero_identity() {
        let temp = tempdir().unwrap();
        let mut config = scaffolded(temp.path());
        config.data = temp.path().join("does-not-exist.json");
        let builder = StaticBuilder::new(config);

        let result = builder.build().await.unwrap();

        assert!(result.used_fallback);
        assert_eq!(result.projects_rendered, 0);

        let page = fs::read_to_string(temp.path().join("dist/index.html")).unwrap();
        assert!(page.contains(">Rishi Sharma</h1>"));
        assert!(page.contains(">Portfolio data temporarily unavailable</p>"));
        // Everything outside the hero keeps its template content.
        assert!(page.contains(">About placeholder</p>"));
        assert!(page.contains("<title>Template Title</title>"));

        // The typewriter still runs with its built-in roles.
        let js = fs::read_to_string(temp.path().join("dist/assets/effects.js")).unwrap();
        assert!(js.contains("Problem Solver"));
    }

    #[tokio::test]
    async fn malformed_data_falls_back_too() {
        let temp = tempdir().unwrap();
        let config = scaffolded(temp.path());
        fs::write(&config.data, "{not json").unwrap();
        let builder = StaticBuilder::new(config);

        let result = builder.build().await.unwrap();

        assert!(result.used_fallback);
    }

    #[tokio::test]
    async fn missing_skeleton_is_an_error() {
        let temp = tempdir().unwrap();
        let mut config = scaffolded(temp.path());
        config.skeleton = temp.path().join("missing.html");

        let err = StaticBuilder::new(config).build().await.unwrap_err();

        assert!(matches!(err, BuildError::Skeleton(_)));
    }
}
