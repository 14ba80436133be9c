use std::fmt::Write;

use recipe_core::{QueueEntryView, RecipeView};
use url::Url;

/// Escapes text for use in element content and double- or single-quoted attributes.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Returns an escaped link target, or `#` unless `raw` is a root-relative path
/// or an absolute http(s) url.
pub fn safe_href(raw: &str) -> String {
    let raw = raw.trim();
    if raw.starts_with('/') && !raw.starts_with("//") {
        return escape_html(raw);
    }
    match Url::parse(raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => escape_html(url.as_str()),
        _ => "#".to_string(),
    }
}

/// HTML fragments for each region of the detail panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeMarkup {
    /// Plain text, already escaped.
    pub title: String,
    pub source: String,
    pub ingredients: String,
    pub directions: String,
    /// Facts list and nutrition table; empty when the recipe carries neither.
    pub details: String,
}

impl RecipeMarkup {
    pub fn render(view: &RecipeView) -> Self {
        let source = format!(
            "<span>From: <a href=\"{}\">{}</a></span>",
            safe_href(&view.source.href),
            escape_html(&view.source.author)
        );

        let mut ingredients = String::new();
        for section in &view.ingredient_sections {
            if let Some(heading) = &section.heading {
                let _ = write!(ingredients, "<h3>{}</h3>", escape_html(heading));
            }
            ingredients.push_str("<ul>");
            for item in &section.items {
                let _ = write!(ingredients, "<li>{}</li>", escape_html(item));
            }
            ingredients.push_str("</ul>");
        }

        let directions = view
            .directions
            .iter()
            .map(|step| format!("<p>{}</p>", escape_html(step)))
            .collect();

        let mut details = String::new();
        if !view.facts.is_empty() {
            details.push_str("<ul class=\"facts\">");
            for (label, value) in &view.facts {
                let _ = write!(
                    details,
                    "<li><strong>{}:</strong> {}</li>",
                    escape_html(label),
                    escape_html(value)
                );
            }
            details.push_str("</ul>");
        }
        if !view.nutrients.is_empty() {
            details.push_str("<table class=\"nutrition\">");
            for (name, value) in &view.nutrients {
                let _ = write!(
                    details,
                    "<tr><td>{}</td><td>{}</td></tr>",
                    escape_html(name),
                    escape_html(value)
                );
            }
            details.push_str("</table>");
        }

        Self {
            title: escape_html(&view.title),
            source,
            ingredients,
            directions,
            details,
        }
    }

    /// Stitches the regions into one fragment with the page's region ids.
    pub fn to_fragment(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "<h1 id=\"title\">{}</h1>", self.title);
        let _ = writeln!(out, "<div id=\"source\">{}</div>", self.source);
        if !self.details.is_empty() {
            let _ = writeln!(out, "<div id=\"details\">{}</div>", self.details);
        }
        let _ = writeln!(out, "<div id=\"ingredients\">{}</div>", self.ingredients);
        let _ = writeln!(out, "<div id=\"directions\">{}</div>", self.directions);
        out
    }
}

/// Renders queue entries as the `<li>` items of the queue list.
pub fn render_queue_markup(entries: &[QueueEntryView]) -> String {
    let mut out = String::from("<ul id=\"queue-ul\">");
    for entry in entries {
        let _ = write!(
            out,
            "<li class=\"list-group-item\" id=\"{}\" data-url=\"{}\">{}</li>",
            escape_html(&entry.id),
            escape_html(&entry.command.url),
            escape_html(&entry.title)
        );
    }
    out.push_str("</ul>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn href_rejects_script_urls() {
        assert_eq!(safe_href("javascript:alert(1)"), "#");
        assert_eq!(safe_href("//evil.example/x"), "#");
        assert_eq!(safe_href("not a url"), "#");
    }

    #[test]
    fn href_keeps_http_and_relative_paths() {
        assert_eq!(safe_href("https://example.com/a?b=1&c=2"), "https://example.com/a?b=1&amp;c=2");
        assert_eq!(safe_href("/recipes/x.json"), "/recipes/x.json");
    }

    #[test]
    fn escape_covers_quotes() {
        assert_eq!(escape_html(r#"<a href="x">'&'</a>"#), "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;");
    }
}
