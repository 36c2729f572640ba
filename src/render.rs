//! HTML rendering: pure functions of (catalog, selection). Every call
//! produces the full replacement markup for its pane, so re-rendering with
//! unchanged state is idempotent and stale content cannot accumulate.

use crate::catalog::{Catalog, Media, Project};
use crate::router;
use crate::state::Selection;

/// Placeholder shown in the detail pane whenever no project is resolved.
pub const EMPTY_STATE: &str =
    r#"<p class="detail-empty">Select a project from the list to view it.</p>"#;

/// Rendered output of both panes, ready for a host to mount into its
/// containers. Each render replaces the previous frame wholesale, never
/// appends to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    pub nav: String,
    pub detail: String,
}

pub fn render_frame(catalog: &Catalog, selection: &Selection) -> Frame {
    Frame {
        nav: render_nav(catalog, selection),
        detail: render_detail(catalog, selection),
    }
}

/// Navigation list: every category in catalog order as a toggle button,
/// with the open one expanded into its project links. Collapsed categories
/// render no project sub-list at all, so no stale links remain clickable.
pub fn render_nav(catalog: &Catalog, selection: &Selection) -> String {
    let mut html = String::new();

    for cat in &catalog.categories {
        let expanded = selection.open_category.as_deref() == Some(cat.id.as_str());
        html.push_str(&format!(
            "<div class=\"category-row\">\
             <button class=\"category-btn\" type=\"button\" aria-expanded=\"{}\">{}</button>",
            expanded,
            html_escape(&cat.title)
        ));

        if expanded {
            html.push_str("<ul class=\"project-list\">");
            for proj in &cat.projects {
                let current = selection.selected_project.as_deref() == Some(proj.id.as_str());
                let marker = if current { " aria-current=\"true\"" } else { "" };
                // The href carries the canonical fragment so right-click /
                // copy-link works even when a host intercepts the click.
                html.push_str(&format!(
                    "<li><a class=\"project-link\" href=\"{}\"{}>{}</a></li>",
                    router::format_fragment(Some(&cat.id), Some(&proj.id)),
                    marker,
                    html_escape(&proj.title)
                ));
            }
            html.push_str("</ul>");
        }

        html.push_str("</div>\n");
    }

    html
}

/// Detail pane: the resolved project, or the empty-state placeholder. Total
/// over any selection; resolution misses fall back to the placeholder.
pub fn render_detail(catalog: &Catalog, selection: &Selection) -> String {
    let project = selection
        .open_category
        .as_deref()
        .and_then(|id| catalog.find_category(id))
        .and_then(|cat| {
            selection
                .selected_project
                .as_deref()
                .and_then(|id| cat.find_project(id))
        });

    match project {
        Some(p) => render_project(p),
        None => EMPTY_STATE.to_string(),
    }
}

fn render_project(project: &Project) -> String {
    // detail-enter restarts the entry animation on each render because the
    // previous article is replaced wholesale, never patched.
    let mut html = String::from("<article class=\"detail-card detail-enter\">");

    html.push_str(&format!(
        "<h1 class=\"detail-title\">{}</h1>",
        html_escape(&project.title)
    ));

    if let Some(media) = &project.media {
        html.push_str(&render_media(media));
    }

    let mut meta_parts: Vec<String> = Vec::new();
    if let Some(role) = project.role.as_deref().filter(|s| !s.is_empty()) {
        meta_parts.push(html_escape(role));
    }
    if let Some(date) = project.date.as_deref().filter(|s| !s.is_empty()) {
        meta_parts.push(html_escape(date));
    }
    if !meta_parts.is_empty() {
        html.push_str(&format!(
            "<p class=\"detail-meta\">{}</p>",
            meta_parts.join(" • ")
        ));
    }

    // Trusted catalog content, deliberately unescaped.
    if let Some(desc) = project.description.as_deref().filter(|s| !s.is_empty()) {
        html.push_str(&format!("<div class=\"detail-description\">{}</div>", desc));
    }

    html.push_str("</article>");
    html
}

/// Media embed for the detail pane. A malformed block renders nothing.
pub fn render_media(media: &Media) -> String {
    match media {
        Media::Youtube { id } if !id.is_empty() => format!(
            "<div class=\"media-wrap\"><iframe class=\"media-frame\" \
             src=\"https://www.youtube-nocookie.com/embed/{}\" \
             allow=\"accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture\" \
             allowfullscreen></iframe></div>",
            router::percent_encode(id)
        ),
        Media::Vimeo { id } if !id.is_empty() => format!(
            "<div class=\"media-wrap\"><iframe class=\"media-frame\" \
             src=\"https://player.vimeo.com/video/{}\" \
             allow=\"autoplay; fullscreen; picture-in-picture\" \
             allowfullscreen></iframe></div>",
            router::percent_encode(id)
        ),
        Media::Image { src, alt } if !src.is_empty() => format!(
            "<div class=\"media-wrap\"><img class=\"media-img\" src=\"{}\" alt=\"{}\"></div>",
            html_escape(src),
            html_escape(alt.as_deref().unwrap_or(""))
        ),
        _ => String::new(),
    }
}

/// Full page shell around a rendered frame: the sidebar-site layout with
/// the home-link control, the category nav, and the detail pane.
pub fn render_page(catalog: &Catalog, frame: &Frame) -> String {
    let site_title = html_escape(catalog.home_label());
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{site_title}</title>
    <style>
        {base_css}
    </style>
</head>
<body>
    <div class="site-wrapper">
        <aside class="sidebar">
            <a href="#" id="home-link" class="home-link">{site_title}</a>
            <nav id="category-list" class="category-nav" aria-label="Projects">
                {nav_html}
            </nav>
            <div class="sidebar-bottom">
                <p class="footer-text">&copy; {year}</p>
            </div>
        </aside>
        <main id="detail" class="detail">
            <div id="detail-inner" class="detail-inner">
                {detail_html}
            </div>
        </main>
    </div>
</body>
</html>"##,
        site_title = site_title,
        base_css = DEFAULT_CSS,
        nav_html = frame.nav,
        year = chrono::Utc::now().format("%Y"),
        detail_html = frame.detail,
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const DEFAULT_CSS: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }

body {
    font-family: -apple-system, "Segoe UI", Helvetica, Arial, sans-serif;
    font-size: 15px;
    color: #1c1c1c;
    background: #fafafa;
    line-height: 1.6;
}

.site-wrapper {
    display: flex;
    min-height: 100vh;
}

/* ── Sidebar ── */
.sidebar {
    width: 260px;
    position: fixed;
    top: 0;
    left: 0;
    height: 100vh;
    padding: 28px 24px;
    display: flex;
    flex-direction: column;
    overflow-y: auto;
    background: #fff;
    border-right: 1px solid #eee;
}

.home-link {
    font-size: 20px;
    font-weight: 700;
    color: #1c1c1c;
    text-decoration: none;
    margin-bottom: 20px;
}

.category-nav {
    display: flex;
    flex-direction: column;
    gap: 2px;
    flex: 1;
    font-size: 13px;
}

.category-btn {
    display: block;
    width: 100%;
    text-align: left;
    padding: 6px 0;
    border: none;
    background: none;
    cursor: pointer;
    font-size: 13px;
    text-transform: uppercase;
    letter-spacing: 0.06em;
    color: #555;
}

.category-btn[aria-expanded="true"] { color: #1c1c1c; font-weight: 600; }

.project-list {
    list-style: none;
    margin: 2px 0 8px;
    padding-left: 12px;
}

.project-link {
    display: block;
    padding: 3px 0;
    color: #555;
    text-decoration: none;
}

.project-link:hover { color: #1c1c1c; }
.project-link[aria-current="true"] { color: #1c1c1c; font-weight: 600; }

.sidebar-bottom { margin-top: 16px; }
.footer-text { font-size: 11px; color: #999; }

/* ── Detail pane ── */
.detail {
    margin-left: 260px;
    flex: 1;
    padding: 40px;
    overflow-y: auto;
    scroll-behavior: smooth;
}

.detail-empty { color: #999; }

.detail-card { max-width: 760px; }

.detail-title {
    font-size: 26px;
    font-weight: 700;
    margin-bottom: 16px;
}

.detail-meta {
    font-size: 13px;
    color: #777;
    margin: 12px 0;
}

.detail-description { margin-top: 12px; }

.media-wrap {
    position: relative;
    width: 100%;
    aspect-ratio: 16 / 9;
    background: #000;
}

.media-frame {
    position: absolute;
    inset: 0;
    width: 100%;
    height: 100%;
    border: 0;
}

.media-img {
    width: 100%;
    height: auto;
    display: block;
}

.detail-enter {
    animation: detail-enter 0.25s ease-out;
}

@keyframes detail-enter {
    from { opacity: 0; transform: translateY(8px); }
    to   { opacity: 1; transform: none; }
}
"#;
