//! Declarative binding table.
//!
//! Each binding names a skeleton element id, the target (text content or a
//! single attribute), and an accessor into the data document. A binding is
//! applied only when both the element and the value exist; everything else
//! is a silent skip.

use folio_data::PortfolioData;

use crate::html;

/// Page region a binding belongs to. The fallback path applies only the
/// hero region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Navigation,
    Hero,
    About,
    Contact,
}

/// What a binding writes into the element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Text,
    Attr(&'static str),
}

/// One (element id, target, accessor) row of the table.
pub struct Binding {
    pub id: &'static str,
    pub region: Region,
    pub target: Target,
    pub get: fn(&PortfolioData) -> Option<String>,
}

/// The full binding table, in document order.
pub fn bindings() -> &'static [Binding] {
    BINDINGS
}

static BINDINGS: &[Binding] = &[
    // Navigation
    Binding {
        id: "logo",
        region: Region::Navigation,
        target: Target::Text,
        get: |d| d.personal.logo_name(),
    },
    Binding {
        id: "ctaResume",
        region: Region::Navigation,
        target: Target::Attr("href"),
        get: |d| d.resume.file.clone(),
    },
    Binding {
        id: "ctaResume",
        region: Region::Navigation,
        target: Target::Attr("download"),
        get: |d| d.resume.file.as_ref().and(d.resume.download_name.clone()),
    },
    Binding {
        id: "resumeIframe",
        region: Region::Navigation,
        target: Target::Attr("src"),
        get: |d| d.resume.file.clone(),
    },
    // Hero
    Binding {
        id: "heroName",
        region: Region::Hero,
        target: Target::Text,
        get: |d| d.personal.name.clone(),
    },
    Binding {
        id: "heroBio",
        region: Region::Hero,
        target: Target::Text,
        get: |d| d.personal.tagline.clone(),
    },
    Binding {
        id: "heroContact",
        region: Region::Hero,
        target: Target::Attr("href"),
        get: |d| d.contact.mailto(),
    },
    Binding {
        id: "heroGithub",
        region: Region::Hero,
        target: Target::Attr("href"),
        get: |d| d.contact.social.github.clone(),
    },
    Binding {
        id: "heroLinkedin",
        region: Region::Hero,
        target: Target::Attr("href"),
        get: |d| d.contact.social.linkedin.clone(),
    },
    Binding {
        id: "profileImg",
        region: Region::Hero,
        target: Target::Attr("src"),
        get: |d| d.personal.profile_image.clone(),
    },
    Binding {
        id: "profileImg",
        region: Region::Hero,
        target: Target::Attr("alt"),
        get: |d| {
            // Alt text only makes sense once an image is set.
            d.personal.profile_image.as_ref()?;
            d.personal
                .name
                .as_ref()
                .map(|n| format!("{} profile picture", n))
        },
    },
    // About
    Binding {
        id: "aboutText",
        region: Region::About,
        target: Target::Text,
        get: |d| d.about.description.clone(),
    },
    // Counters render their final value; the count-up is replayed by the
    // effects script.
    Binding {
        id: "yearsCounter",
        region: Region::About,
        target: Target::Text,
        get: |d| d.about.stats.years_learning.map(|v| format!("{}+", v)),
    },
    Binding {
        id: "projectsCounter",
        region: Region::About,
        target: Target::Text,
        get: |d| d.about.stats.projects_built.map(|v| format!("{}+", v)),
    },
    Binding {
        id: "skillsCounter",
        region: Region::About,
        target: Target::Text,
        get: |d| d.about.stats.technologies.map(|v| format!("{}+", v)),
    },
    // Contact
    Binding {
        id: "contactEmail",
        region: Region::Contact,
        target: Target::Text,
        get: |d| d.contact.email.clone(),
    },
    Binding {
        id: "contactPhone",
        region: Region::Contact,
        target: Target::Text,
        get: |d| d.contact.phone.clone(),
    },
    Binding {
        id: "contactText",
        region: Region::Contact,
        target: Target::Text,
        get: |d| {
            Some(
                d.contact
                    .availability
                    .message
                    .clone()
                    .unwrap_or_else(|| "Let's connect!".to_string()),
            )
        },
    },
    Binding {
        id: "emailLink",
        region: Region::Contact,
        target: Target::Attr("href"),
        get: |d| d.contact.mailto(),
    },
    Binding {
        id: "quickContact",
        region: Region::Contact,
        target: Target::Attr("href"),
        get: |d| d.contact.mailto(),
    },
    Binding {
        id: "mobileLink",
        region: Region::Contact,
        target: Target::Attr("href"),
        get: |d| d.contact.tel(),
    },
    Binding {
        id: "githubLink",
        region: Region::Contact,
        target: Target::Attr("href"),
        get: |d| d.contact.social.github.clone(),
    },
    Binding {
        id: "linkedinLink",
        region: Region::Contact,
        target: Target::Attr("href"),
        get: |d| d.contact.social.linkedin.clone(),
    },
];

/// Apply every binding to the skeleton. Returns the updated page and the
/// number of bindings that wrote something.
pub fn apply(html: &str, data: &PortfolioData) -> (String, usize) {
    apply_filtered(html, data, |_| true)
}

/// Apply only the bindings for `region`.
pub fn apply_region(html: &str, data: &PortfolioData, region: Region) -> (String, usize) {
    apply_filtered(html, data, |b| b.region == region)
}

fn apply_filtered(
    html: &str,
    data: &PortfolioData,
    keep: impl Fn(&Binding) -> bool,
) -> (String, usize) {
    let mut page = html.to_string();
    let mut applied = 0;

    for binding in BINDINGS.iter().filter(|b| keep(b)) {
        let Some(value) = (binding.get)(data) else {
            continue;
        };

        let updated = match binding.target {
            Target::Text => html::set_text_by_id(&page, binding.id, &value),
            Target::Attr(attr) => html::set_attr_by_id(&page, binding.id, attr, &value),
        };

        if let Some(updated) = updated {
            page = updated;
            applied += 1;
        }
    }

    (page, applied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BOUND_IDS: &[&str] = &[
        "logo",
        "ctaResume",
        "resumeIframe",
        "heroName",
        "heroBio",
        "heroContact",
        "heroGithub",
        "heroLinkedin",
        "profileImg",
        "aboutText",
        "yearsCounter",
        "projectsCounter",
        "skillsCounter",
        "contactEmail",
        "contactPhone",
        "contactText",
        "emailLink",
        "quickContact",
        "mobileLink",
        "githubLink",
        "linkedinLink",
    ];

    #[test]
    fn table_covers_every_bound_id() {
        for id in BOUND_IDS {
            assert!(
                bindings().iter().any(|b| b.id == *id),
                "missing binding for {}",
                id
            );
        }
    }

    #[test]
    fn hero_name_and_bio_are_hero_region() {
        for id in ["heroName", "heroBio"] {
            let binding = bindings().iter().find(|b| b.id == id).unwrap();
            assert_eq!(binding.region, Region::Hero);
        }
    }

    #[test]
    fn applies_text_and_attr_bindings() {
        let mut data = PortfolioData::default();
        data.personal.name = Some("Ada Lovelace".to_string());
        data.contact.social.github = Some("https://github.com/ada".to_string());

        let html = r##"<h1 id="heroName">x</h1><a id="heroGithub" href="#">gh</a>"##;
        let (page, applied) = apply(html, &data);

        assert!(page.contains(">Ada Lovelace</h1>"));
        assert!(page.contains(r#"href="https://github.com/ada""#));
        // heroName text, heroGithub href, contactText default would need its
        // element; logo derives from name but has no element either.
        assert_eq!(applied, 2);
    }

    #[test]
    fn absent_fields_leave_skeleton_untouched() {
        let html = r#"<h1 id="heroName">Template Name</h1><p id="aboutText">Template about</p>"#;

        let (page, applied) = apply(html, &PortfolioData::default());

        // contactText has a default but no element; nothing else has data.
        assert_eq!(applied, 0);
        assert_eq!(page, html);
    }

    #[test]
    fn region_filter_applies_hero_only() {
        let data = PortfolioData::fallback();
        let html = concat!(
            r#"<h1 id="heroName">x</h1><p id="heroBio">y</p>"#,
            r#"<p id="contactText">Template contact</p>"#,
        );

        let (page, applied) = apply_region(html, &data, Region::Hero);

        assert_eq!(applied, 2);
        assert!(page.contains(">Rishi Sharma</h1>"));
        assert!(page.contains(">Portfolio data temporarily unavailable</p>"));
        assert!(page.contains(">Template contact</p>"));
    }

    #[test]
    fn download_name_requires_resume_file() {
        let mut data = PortfolioData::default();
        data.resume.download_name = Some("Resume.pdf".to_string());

        let html = r##"<a id="ctaResume" href="#">resume</a>"##;
        let (page, applied) = apply(html, &data);

        assert_eq!(applied, 0);
        assert_eq!(page, html);
    }
}
