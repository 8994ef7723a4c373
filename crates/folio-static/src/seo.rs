//! Document title and meta tag population.

use regex::Regex;

use folio_data::Seo;

use crate::html::escape_html;

/// Apply every present SEO field to the page head.
///
/// Meta tags are updated in place when the skeleton already has them and
/// inserted before `</head>` when it does not. Absent fields are skipped.
pub fn apply_seo(page: &str, seo: &Seo) -> String {
    let mut page = page.to_string();

    if let Some(title) = &seo.title {
        page = set_title(&page, title);
    }

    let named = [
        ("description", seo.description.clone()),
        ("keywords", seo.keywords_joined()),
        ("author", seo.author.clone()),
    ];
    for (name, content) in named {
        if let Some(content) = content {
            page = upsert_meta(&page, "name", name, &content);
        }
    }

    let og = [
        ("og:title", seo.title.clone()),
        ("og:description", seo.description.clone()),
        ("og:url", seo.url.clone()),
    ];
    for (property, content) in og {
        if let Some(content) = content {
            page = upsert_meta(&page, "property", property, &content);
        }
    }

    page
}

/// Replace the `<title>` element, inserting one if the skeleton lacks it.
fn set_title(page: &str, title: &str) -> String {
    let re = Regex::new(r"(?s)<title>.*?</title>").expect("title pattern is valid");
    let element = format!("<title>{}</title>", escape_html(title));

    if re.is_match(page) {
        re.replace(page, regex::NoExpand(element.as_str())).to_string()
    } else {
        insert_before_head_close(page, &element)
    }
}

/// Update or insert `<meta key="name" content="...">`.
pub fn upsert_meta(page: &str, key: &str, name: &str, content: &str) -> String {
    let tag_re = Regex::new(&format!(
        r#"<meta\b[^>]*\b{}\s*=\s*"{}"[^>]*>"#,
        regex::escape(key),
        regex::escape(name)
    ))
    .expect("meta pattern is valid");

    let escaped = escape_html(content);

    if let Some(found) = tag_re.find(page) {
        let content_re =
            Regex::new(r#"\bcontent\s*=\s*"[^"]*""#).expect("content pattern is valid");
        let tag = found.as_str();

        let updated = if content_re.is_match(tag) {
            let replacement = format!(r#"content="{}""#, escaped);
            content_re
                .replace(tag, regex::NoExpand(replacement.as_str()))
                .to_string()
        } else {
            let insert_at = tag.len() - 1;
            format!(r#"{} content="{}">"#, tag[..insert_at].trim_end(), escaped)
        };

        let mut out = String::with_capacity(page.len() + updated.len());
        out.push_str(&page[..found.start()]);
        out.push_str(&updated);
        out.push_str(&page[found.end()..]);
        out
    } else {
        insert_before_head_close(
            page,
            &format!(r#"<meta {}="{}" content="{}">"#, key, name, escaped),
        )
    }
}

fn insert_before_head_close(page: &str, element: &str) -> String {
    match page.find("</head>") {
        Some(pos) => {
            let mut out = String::with_capacity(page.len() + element.len() + 1);
            out.push_str(&page[..pos]);
            out.push_str(element);
            out.push('\n');
            out.push_str(&page[pos..]);
            out
        }
        // No head at all: append so the content is not lost.
        None => format!("{}{}\n", page, element),
    }
}
