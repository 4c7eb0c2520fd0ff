//! HTML assembly for pagination controls.

use pagekit_core::config::pagination::PaginatorOptions;
use pagekit_core::types::{PageLink, PageWindowPlan};

use crate::resolver::LinkResolver;

/// Text of the previous link.
const PREVIOUS_TEXT: &str = "&laquo;";
/// Text of the next link.
const NEXT_TEXT: &str = "&raquo;";
/// Markup of a gap marker.
const GAP_ITEM: &str = r#"<li class="disabled gap"><span>...</span></li>"#;

/// Render the whole control: container, optional description, and link list.
pub fn render(plan: &PageWindowPlan, options: &PaginatorOptions, resolver: &dyn LinkResolver) -> String {
    let multiple = plan.has_multiple_pages();
    let mut html = String::new();

    html.push_str(&format!(
        r#"<div class="{} {}">"#,
        escape_html(&options.container_css_class),
        if multiple { "multiple-pages" } else { "single-page" }
    ));

    if let Some(description) = options.description.as_deref() {
        if !description.is_empty() && (options.always_show_description || multiple) {
            html.push_str(&format!("<p>{}</p>", escape_html(description)));
        }
    }

    if multiple {
        html.push_str("<ul>");
        for link in plan.links() {
            html.push_str(&list_item(&link, resolver));
        }
        html.push_str("</ul>");
    }

    html.push_str("</div>");
    html
}

/// Render a single `<li>` item.
pub fn list_item(link: &PageLink, resolver: &dyn LinkResolver) -> String {
    let (text, mut css_class) = match link {
        PageLink::Gap { .. } => return GAP_ITEM.to_string(),
        PageLink::Previous { .. } => (PREVIOUS_TEXT.to_string(), "previous".to_string()),
        PageLink::Next { .. } => (NEXT_TEXT.to_string(), "next".to_string()),
        numeric => {
            let page = numeric.page().unwrap_or(1);
            let class = if numeric.is_active() { "active" } else { "" };
            (page.to_string(), class.to_string())
        }
    };

    let disabled = link.is_disabled();
    if disabled {
        css_class.push_str(" disabled");
    }

    let mut html = if css_class.is_empty() {
        "<li>".to_string()
    } else {
        format!(r#"<li class="{css_class}">"#)
    };

    match (disabled, link.page()) {
        (false, Some(page)) => {
            html.push_str(&format!(r#"<a href="{}">{text}</a>"#, resolver.resolve(page)));
        }
        _ => html.push_str(&format!("<span>{text}</span>")),
    }

    html.push_str("</li>");
    html
}

/// Escape text for use in HTML content and attribute values.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
