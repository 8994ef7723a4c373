//! Project card and skill badge rendering.

use minijinja::context;
use minijinja::value::Value;

use folio_data::{Project, Skills};

use crate::templates::TemplateEngine;

/// How many projects to show when none are marked featured.
const UNFEATURED_LIMIT: usize = 6;

/// Staggered reveal delay between skill badges, in milliseconds.
const BADGE_DELAY_STEP_MS: usize = 100;

/// Staggered reveal delay between project cards, in milliseconds.
const CARD_DELAY_STEP_MS: usize = 200;

/// Fixed class treatments for the recognized status labels. Anything else
/// gets the `Completed` treatment.
pub fn status_classes(status: &str) -> &'static str {
    match status {
        "In Progress" => "bg-yellow-500/20 text-yellow-400 border-yellow-500/30",
        "Planning" => "bg-blue-500/20 text-blue-400 border-blue-500/30",
        "On Hold" => "bg-gray-500/20 text-gray-400 border-gray-500/30",
        _ => "bg-green-500/20 text-green-400 border-green-500/30",
    }
}

/// Projects to show: featured ones if any exist, otherwise the first six.
pub fn select_projects(projects: &[Project]) -> Vec<&Project> {
    let featured: Vec<&Project> = projects.iter().filter(|p| p.featured).collect();
    if !featured.is_empty() {
        featured
    } else {
        projects.iter().take(UNFEATURED_LIMIT).collect()
    }
}

/// Placeholder image for projects without one.
pub fn placeholder_image(title: &str) -> String {
    format!(
        "https://via.placeholder.com/400x300/6366f1/ffffff?text={}",
        encode_uri_component(title)
    )
}

/// Render the selected projects as a grid of cards.
pub fn render_projects(
    engine: &TemplateEngine,
    projects: &[&Project],
) -> Result<String, minijinja::Error> {
    let mut out = String::new();

    for (index, project) in projects.iter().enumerate() {
        let placeholder = placeholder_image(&project.title);
        let image = project.image.clone().unwrap_or_else(|| placeholder.clone());

        let card = engine.render(
            "card.html",
            context! {
                title => &project.title,
                description => &project.description,
                image => url_value(&image),
                placeholder => url_value(&placeholder),
                technologies => &project.technologies,
                status => &project.status,
                status_classes => project.status.as_deref().map(status_classes).unwrap_or(""),
                link => project.links.primary().map(url_value),
                delay_ms => index * CARD_DELAY_STEP_MS,
            },
        )?;

        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&card);
    }

    Ok(out)
}

/// Render one badge per technical skill with a staggered reveal delay.
pub fn render_skills(engine: &TemplateEngine, skills: &Skills) -> Result<String, minijinja::Error> {
    let mut out = String::new();

    for (index, skill) in skills.technical.iter().enumerate() {
        let badge = engine.render(
            "badge.html",
            context! {
                skill => skill,
                delay_ms => index * BADGE_DELAY_STEP_MS,
            },
        )?;

        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&badge);
    }

    Ok(out)
}

/// Escape a URL for an href/src attribute and mark it safe, keeping literal
/// slashes that auto-escape would otherwise entity-encode.
fn url_value(url: &str) -> Value {
    Value::from_safe_string(crate::html::escape_html(url))
}

/// Percent-encoding matching `encodeURIComponent`.
fn encode_uri_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'!' | b'~' | b'*'
            | b'\'' | b'(' | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_data::ProjectLinks;
    use pretty_assertions::assert_eq;

    fn project(title: &str, featured: bool) -> Project {
        Project {
            title: title.to_string(),
            description: format!("{} description", title),
            featured,
            ..Default::default()
        }
    }

    #[test]
    fn recognized_statuses_map_to_fixed_treatments() {
        assert_eq!(
            status_classes("Completed"),
            "bg-green-500/20 text-green-400 border-green-500/30"
        );
        assert_eq!(
            status_classes("In Progress"),
            "bg-yellow-500/20 text-yellow-400 border-yellow-500/30"
        );
        assert_eq!(
            status_classes("Planning"),
            "bg-blue-500/20 text-blue-400 border-blue-500/30"
        );
        assert_eq!(
            status_classes("On Hold"),
            "bg-gray-500/20 text-gray-400 border-gray-500/30"
        );
    }

    #[test]
    fn unknown_status_gets_the_completed_treatment() {
        assert_eq!(status_classes("Shipped"), status_classes("Completed"));
        assert_eq!(status_classes(""), status_classes("Completed"));
    }

    #[test]
    fn featured_projects_win_over_the_slice() {
        let projects = vec![
            project("a", false),
            project("b", true),
            project("c", false),
        ];

        let selected = select_projects(&projects);

        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].title, "b");
    }

    #[test]
    fn no_featured_shows_first_six() {
        let projects: Vec<Project> = (0..8).map(|i| project(&format!("p{}", i), false)).collect();

        let selected = select_projects(&projects);

        assert_eq!(selected.len(), 6);
        assert_eq!(selected[0].title, "p0");
        assert_eq!(selected[5].title, "p5");
    }

    #[test]
    fn placeholder_encodes_the_title() {
        let url = placeholder_image("My App & More");
        assert!(url.ends_with("text=My%20App%20%26%20More"));
    }

    #[test]
    fn card_with_valid_link_renders_view_project() {
        let engine = TemplateEngine::new();
        let mut p = project("Engine", true);
        p.links = ProjectLinks {
            live: Some("https://live.example".to_string()),
            ..Default::default()
        };

        let html = render_projects(&engine, &[&p]).unwrap();

        assert!(html.contains(r#"href="https://live.example""#));
        assert!(html.contains("View Project"));
        assert!(!html.contains("Coming Soon"));
    }

    #[test]
    fn urls_keep_literal_slashes() {
        let engine = TemplateEngine::new();
        let mut p = project("Engine", true);
        p.image = Some("https://img.example/shot.png".to_string());
        p.links = ProjectLinks {
            live: Some("https://live.example/app".to_string()),
            ..Default::default()
        };

        let html = render_projects(&engine, &[&p]).unwrap();

        assert!(html.contains(r#"src="https://img.example/shot.png""#));
        assert!(html.contains(r#"href="https://live.example/app""#));
        assert!(!html.contains("&#x2f;"));
    }

    #[test]
    fn placeholder_only_links_render_coming_soon() {
        let engine = TemplateEngine::new();
        let mut p = project("Engine", true);
        p.links = ProjectLinks {
            live: Some("#".to_string()),
            demo: Some("#".to_string()),
            github: Some("#".to_string()),
        };

        let html = render_projects(&engine, &[&p]).unwrap();

        assert!(html.contains("Coming Soon"));
        assert!(!html.contains("View Project"));
    }

    #[test]
    fn skills_get_staggered_delays() {
        let engine = TemplateEngine::new();
        let skills = Skills {
            technical: vec!["Rust".to_string(), "SQL".to_string()],
        };

        let html = render_skills(&engine, &skills).unwrap();

        assert!(html.contains("animation-delay: 0ms"));
        assert!(html.contains("animation-delay: 100ms"));
        assert!(html.contains(">Rust</span>"));
    }
}
