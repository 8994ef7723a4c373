//! Scaffold a portfolio project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(yes: bool) -> Result<()> {
    tracing::info!("Initializing folio...");

    let site_dir = Path::new("site");

    if site_dir.exists() {
        if !yes {
            tracing::warn!("site/ directory already exists. Use --yes to overwrite.");
            return Ok(());
        }
    } else {
        fs::create_dir_all(site_dir).context("Failed to create site directory")?;
    }

    let config_path = Path::new("folio.toml");
    if !config_path.exists() || yes {
        fs::write(config_path, DEFAULT_CONFIG).context("Failed to write folio.toml")?;
        tracing::info!("Created folio.toml");
    }

    let data_path = Path::new("portfolio-data.json");
    if !data_path.exists() || yes {
        fs::write(data_path, DEFAULT_DATA).context("Failed to write portfolio-data.json")?;
        tracing::info!("Created portfolio-data.json");
    }

    let skeleton_path = site_dir.join("index.html");
    if !skeleton_path.exists() || yes {
        fs::write(&skeleton_path, DEFAULT_SKELETON)
            .context("Failed to write site/index.html")?;
        tracing::info!("Created site/index.html");
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Edit portfolio-data.json, then run 'folio dev' to preview.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Folio Configuration

[site]
# Page skeleton the data is rendered into
skeleton = "site/index.html"

# Portfolio data document
data = "portfolio-data.json"

# Output directory for the built site
output = "dist"

# Directories copied verbatim into the output (images, resume, ...)
assets = []

[build]
# Enable CSS minification
minify = true
"#;

const DEFAULT_DATA: &str = r##"{
  "personal": {
    "name": "Your Name",
    "firstName": "Your",
    "tagline": "I build things for the web",
    "profileImage": ""
  },
  "resume": {
    "file": "",
    "downloadName": ""
  },
  "contact": {
    "email": "you@example.com",
    "phone": "",
    "availability": { "message": "Open to opportunities" },
    "social": {
      "github": "https://github.com/you",
      "linkedin": "https://linkedin.com/in/you"
    }
  },
  "about": {
    "description": "A few sentences about you.",
    "stats": {
      "yearsLearning": 3,
      "projectsBuilt": 10,
      "technologies": 12
    }
  },
  "skills": {
    "technical": ["Rust", "TypeScript", "SQL"]
  },
  "projects": [
    {
      "title": "First Project",
      "description": "What it does and why it exists.",
      "image": "",
      "technologies": ["Rust"],
      "status": "In Progress",
      "links": { "live": "#", "demo": "#", "github": "#" },
      "featured": true
    }
  ],
  "roles": ["Developer", "Programmer", "Problem Solver"],
  "seo": {
    "title": "Your Name | Portfolio",
    "description": "Personal portfolio",
    "keywords": ["portfolio", "developer"],
    "author": "Your Name",
    "url": "https://example.com"
  }
}
"##;

const DEFAULT_SKELETON: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Portfolio</title>
  <meta name="description" content="Personal portfolio">
  <script src="https://cdn.tailwindcss.com"></script>
  <link rel="stylesheet" href="assets/folio.css">
</head>
<body class="bg-gray-900 text-white">
  <header class="flex items-center justify-between px-8 py-4">
    <span id="logo" class="font-bold text-xl">Portfolio</span>
    <nav class="flex gap-6 items-center">
      <a href="#about">About</a>
      <a href="#projects">Projects</a>
      <a href="#contact">Contact</a>
      <a id="ctaResume" href="#" download class="px-4 py-2 rounded-xl bg-indigo-600">Resume</a>
    </nav>
  </header>

  <section class="flex flex-col items-center text-center px-8 py-24 gap-6">
    <div class="relative w-40 h-40">
      <div id="profilePlaceholder" class="w-40 h-40 rounded-full bg-gradient-to-r from-indigo-600 to-purple-600"></div>
      <img id="profileImg" class="hidden absolute inset-0 w-40 h-40 rounded-full object-cover"
           onload="this.classList.remove('hidden'); document.getElementById('profilePlaceholder').classList.add('hidden');"
           onerror="this.classList.add('hidden');">
    </div>
    <h1 id="heroName" class="text-5xl font-bold">Your Name</h1>
    <p class="text-xl text-indigo-400">I'm a <span id="typed-role"></span></p>
    <p id="heroBio" class="max-w-xl opacity-80">A short tagline about what you do.</p>
    <div class="flex gap-4">
      <a id="heroContact" href="#contact" class="px-6 py-3 rounded-xl bg-indigo-600">Get in touch</a>
      <a id="heroGithub" href="#" target="_blank">GitHub</a>
      <a id="heroLinkedin" href="#" target="_blank">LinkedIn</a>
    </div>
  </section>

  <section id="about" class="px-8 py-16 max-w-4xl mx-auto">
    <h2 class="text-3xl font-bold mb-6">About</h2>
    <p id="aboutText" class="opacity-80 leading-relaxed mb-10">A few sentences about you.</p>
    <div class="grid grid-cols-3 gap-6 text-center">
      <div><span id="yearsCounter" class="text-4xl font-bold">0</span><p>Years Learning</p></div>
      <div><span id="projectsCounter" class="text-4xl font-bold">0</span><p>Projects Built</p></div>
      <div><span id="skillsCounter" class="text-4xl font-bold">0</span><p>Technologies</p></div>
    </div>
    <div id="skills" class="flex flex-wrap gap-3 mt-10"></div>
  </section>

  <section id="projects" class="px-8 py-16 max-w-6xl mx-auto">
    <h2 class="text-3xl font-bold mb-10">Projects</h2>
    <div id="projectsGrid" class="grid md:grid-cols-2 lg:grid-cols-3 gap-8"></div>
  </section>

  <section id="contact" class="px-8 py-16 max-w-4xl mx-auto text-center">
    <h2 class="text-3xl font-bold mb-4">Contact</h2>
    <p id="contactText" class="opacity-80 mb-8">Let's connect!</p>
    <div class="flex flex-col items-center gap-2">
      <a id="emailLink" href="#"><span id="contactEmail">you@example.com</span></a>
      <a id="mobileLink" href="#"><span id="contactPhone"></span></a>
    </div>
    <div class="flex justify-center gap-6 mt-8">
      <a id="quickContact" href="#" class="px-6 py-3 rounded-xl bg-indigo-600">Email me</a>
      <a id="githubLink" href="#" target="_blank">GitHub</a>
      <a id="linkedinLink" href="#" target="_blank">LinkedIn</a>
    </div>
  </section>

  <footer class="px-8 py-8 text-center opacity-60">
    <p>Built with folio</p>
  </footer>

  <script src="assets/effects.js"></script>
</body>
</html>
"##;
