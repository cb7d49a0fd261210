//! Posts page rendering using embedded Tera templates
//!
//! Templates are compiled into the binary. Autoescaping stays on: document
//! fields come from an external store and are not trusted HTML.

use anyhow::Result;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::config::SiteConfig;
use crate::content::PostDocument;

/// Template renderer for the posts page
pub struct PageRenderer {
    tera: Tera,
}

impl PageRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("templates/layout.html")),
            ("posts.html", include_str!("templates/posts.html")),
        ])?;

        tera.register_filter("display_date", display_date_filter);

        Ok(Self { tera })
    }

    /// Render the posts listing page.
    ///
    /// Produces exactly one item per document, in collection order. An empty
    /// collection renders a page with zero items.
    pub fn render_posts(&self, site: &SiteConfig, posts: &[PostDocument]) -> Result<String> {
        let mut context = Context::new();
        context.insert("site", site);
        context.insert("posts", posts);
        Ok(self.tera.render("posts.html", &context)?)
    }
}

/// Tera filter: format an RFC 3339 timestamp for display
fn display_date_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("display_date", "value", String, value);
    let formatted = match chrono::DateTime::parse_from_rfc3339(&s) {
        Ok(date) => date.format("%B %d, %Y").to_string(),
        // Leave unparseable values as-is rather than failing the render
        Err(_) => s,
    };
    Ok(tera::Value::String(formatted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn renderer() -> PageRenderer {
        PageRenderer::new().unwrap()
    }

    fn site() -> SiteConfig {
        SiteConfig {
            title: "Test Site".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_renders_one_item_per_post_in_order() {
        let posts = vec![
            PostDocument::new("1", "Alpha Release"),
            PostDocument::new("2", "Beta Notes"),
        ];

        let html = renderer().render_posts(&site(), &posts).unwrap();
        assert_eq!(html.matches(r#"class="post-item""#).count(), 2);

        let first = html.find("Alpha Release").unwrap();
        let second = html.find("Beta Notes").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_empty_collection_renders_without_items() {
        let html = renderer().render_posts(&site(), &[]).unwrap();
        assert_eq!(html.matches(r#"class="post-item""#).count(), 0);
        assert!(html.contains(r#"class="post-list-empty""#));
        assert!(html.contains("Test Site"));
    }

    #[test]
    fn test_document_fields_are_escaped() {
        let posts = vec![PostDocument::new("1", "<script>alert(1)</script>")];
        let html = renderer().render_posts(&site(), &posts).unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_published_date_is_shown() {
        let mut post = PostDocument::new("1", "Dated");
        post.published_at = Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap());

        let html = renderer().render_posts(&site(), &[post]).unwrap();
        assert!(html.contains("March 01, 2024"));
    }

    #[test]
    fn test_display_date_filter_passes_through_garbage() {
        let value = tera::Value::String("not a date".to_string());
        let out = display_date_filter(&value, &HashMap::new()).unwrap();
        assert_eq!(out, tera::Value::String("not a date".to_string()));
    }
}
