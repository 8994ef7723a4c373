//! The portfolio data document.
//!
//! Wire names are camelCase (`firstName`, `yearsLearning`); the document is
//! deserialized once and passed around as an immutable reference.

use serde::Deserialize;

/// The root of the portfolio data document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortfolioData {
    pub personal: Personal,
    pub resume: Resume,
    pub contact: Contact,
    pub about: About,
    pub skills: Skills,
    pub projects: Vec<Project>,
    pub roles: Vec<String>,
    pub seo: Seo,
}

impl PortfolioData {
    /// Fallback document used when the data document cannot be loaded.
    ///
    /// Only the hero name and bio are set; every other field stays absent so
    /// the rest of the page keeps its template-authored content.
    pub fn fallback() -> Self {
        Self {
            personal: Personal {
                name: Some("Rishi Sharma".to_string()),
                tagline: Some("Portfolio data temporarily unavailable".to_string()),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Identity fields for the hero and navigation regions.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Personal {
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub tagline: Option<String>,
    pub profile_image: Option<String>,
}

impl Personal {
    /// The name shown in the nav logo: `first_name` if set, otherwise the
    /// first word of `name`.
    pub fn logo_name(&self) -> Option<String> {
        if let Some(first) = &self.first_name {
            return Some(first.clone());
        }
        self.name
            .as_ref()
            .and_then(|n| n.split_whitespace().next())
            .map(|s| s.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Resume {
    pub file: Option<String>,
    pub download_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Contact {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub availability: Availability,
    pub social: Social,
}

impl Contact {
    pub fn mailto(&self) -> Option<String> {
        self.email.as_ref().map(|e| format!("mailto:{}", e))
    }

    pub fn tel(&self) -> Option<String> {
        self.phone.as_ref().map(|p| format!("tel:{}", p))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Availability {
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Social {
    pub github: Option<String>,
    pub linkedin: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct About {
    pub description: Option<String>,
    pub stats: Stats,
}

/// Numeric statistics shown as count-up counters.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Stats {
    pub years_learning: Option<u32>,
    pub projects_built: Option<u32>,
    pub technologies: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Skills {
    pub technical: Vec<String>,
}

/// A single project card.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub technologies: Vec<String>,
    pub status: Option<String>,
    pub links: ProjectLinks,
    pub featured: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectLinks {
    pub live: Option<String>,
    pub demo: Option<String>,
    pub github: Option<String>,
}

impl ProjectLinks {
    /// The primary action link: first present, non-`"#"` value in priority
    /// order live, demo, github. `"#"` is the authoring placeholder for "no
    /// link yet" and is treated as absent.
    pub fn primary(&self) -> Option<&str> {
        [&self.live, &self.demo, &self.github]
            .into_iter()
            .flatten()
            .map(|s| s.as_str())
            .find(|s| !s.is_empty() && *s != "#")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Seo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Vec<String>,
    pub author: Option<String>,
    pub url: Option<String>,
}

impl Seo {
    /// Keywords joined for the `<meta name="keywords">` tag.
    pub fn keywords_joined(&self) -> Option<String> {
        if self.keywords.is_empty() {
            None
        } else {
            Some(self.keywords.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserializes_full_document() {
        let json = r#"{
            "personal": {
                "name": "Ada Lovelace",
                "firstName": "Ada",
                "tagline": "First programmer",
                "profileImage": "assets/ada.jpg"
            },
            "resume": { "file": "assets/resume.pdf", "downloadName": "Ada_Resume" },
            "contact": {
                "email": "ada@example.com",
                "phone": "+44 1234",
                "availability": { "message": "Open to work" },
                "social": { "github": "https://github.com/ada" }
            },
            "about": {
                "description": "I write programs.",
                "stats": { "yearsLearning": 3, "projectsBuilt": 12, "technologies": 8 }
            },
            "skills": { "technical": ["Rust", "SQL"] },
            "projects": [{
                "title": "Engine",
                "description": "Analytical engine notes",
                "technologies": ["Math"],
                "status": "Completed",
                "links": { "github": "https://github.com/ada/engine" },
                "featured": true
            }],
            "roles": ["Developer"],
            "seo": { "title": "Ada", "keywords": ["rust", "portfolio"] }
        }"#;

        let data: PortfolioData = serde_json::from_str(json).unwrap();

        assert_eq!(data.personal.first_name.as_deref(), Some("Ada"));
        assert_eq!(data.about.stats.projects_built, Some(12));
        assert_eq!(data.projects.len(), 1);
        assert!(data.projects[0].featured);
        assert_eq!(data.seo.keywords_joined().as_deref(), Some("rust, portfolio"));
    }

    #[test]
    fn every_field_is_optional() {
        let data: PortfolioData = serde_json::from_str("{}").unwrap();
        assert_eq!(data, PortfolioData::default());
    }

    #[test]
    fn logo_name_prefers_first_name() {
        let personal = Personal {
            name: Some("Ada Lovelace".to_string()),
            first_name: Some("Augusta".to_string()),
            ..Default::default()
        };
        assert_eq!(personal.logo_name().as_deref(), Some("Augusta"));
    }

    #[test]
    fn logo_name_falls_back_to_first_word() {
        let personal = Personal {
            name: Some("Ada Lovelace".to_string()),
            ..Default::default()
        };
        assert_eq!(personal.logo_name().as_deref(), Some("Ada"));
    }

    #[test]
    fn primary_link_priority() {
        let links = ProjectLinks {
            live: Some("https://live.example".to_string()),
            demo: Some("https://demo.example".to_string()),
            github: Some("https://github.example".to_string()),
        };
        assert_eq!(links.primary(), Some("https://live.example"));

        let links = ProjectLinks {
            live: Some("#".to_string()),
            demo: Some("https://demo.example".to_string()),
            github: None,
        };
        assert_eq!(links.primary(), Some("https://demo.example"));
    }

    #[test]
    fn placeholder_links_count_as_absent() {
        let links = ProjectLinks {
            live: Some("#".to_string()),
            demo: Some("#".to_string()),
            github: Some("#".to_string()),
        };
        assert_eq!(links.primary(), None);
        assert_eq!(ProjectLinks::default().primary(), None);
    }

    #[test]
    fn fallback_sets_only_hero_identity() {
        let data = PortfolioData::fallback();

        assert_eq!(data.personal.name.as_deref(), Some("Rishi Sharma"));
        assert_eq!(
            data.personal.tagline.as_deref(),
            Some("Portfolio data temporarily unavailable")
        );
        assert!(data.personal.profile_image.is_none());
        assert!(data.projects.is_empty());
        assert!(data.roles.is_empty());
        assert!(data.seo.title.is_none());
    }
}
