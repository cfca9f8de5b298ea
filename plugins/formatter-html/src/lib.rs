//! HTML renderer plugin.
//!
//! Produces a self-contained page with one card per release. The output is
//! presentational only and is not meant to be parsed back.

use std::fmt::Write;

use changecraft_model::{ChangeCategory, Release, group_by_category};
use changecraft_plugin::{ChangelogRenderer, Plugin};
use tracing::debug;

const STYLES: &str = r"
    * { box-sizing: border-box; margin: 0; padding: 0; }
    body {
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
      background: #f8fafc;
      color: #1e293b;
      line-height: 1.6;
      padding: 2rem 1rem;
    }
    .container { max-width: 800px; margin: 0 auto; }
    h1 { font-size: 2rem; margin-bottom: 0.25rem; }
    .subtitle { color: #64748b; margin-bottom: 2rem; }
    .release {
      background: #ffffff;
      border: 1px solid #e2e8f0;
      border-radius: 12px;
      padding: 1.5rem;
      margin-bottom: 1.5rem;
      box-shadow: 0 1px 3px rgba(0, 0, 0, 0.05);
    }
    .release-header {
      display: flex;
      align-items: baseline;
      justify-content: space-between;
      border-bottom: 1px solid #e2e8f0;
      padding-bottom: 0.75rem;
      margin-bottom: 1rem;
    }
    .version { font-size: 1.4rem; }
    .date { color: #64748b; font-size: 0.9rem; }
    .category { margin-bottom: 1rem; }
    .category:last-child { margin-bottom: 0; }
    .category h3 {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.05em;
      margin-bottom: 0.5rem;
    }
    .category ul { list-style: none; padding-left: 0.5rem; }
    .category li {
      padding-left: 0.75rem;
      border-left: 3px solid var(--accent);
      margin-bottom: 0.35rem;
    }
";

/// Simple HTML escaping
fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// HTML renderer producing a standalone document.
pub struct HtmlRenderer;

impl HtmlRenderer {
    /// Creates a new renderer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn render_card(html: &mut String, release: &Release) {
        html.push_str("    <div class=\"release\">\n");
        html.push_str("      <div class=\"release-header\">\n");
        _ = writeln!(
            html,
            "        <h2 class=\"version\">{}</h2>",
            html_escape(&release.version)
        );
        _ = writeln!(
            html,
            "        <span class=\"date\">{}</span>",
            html_escape(&release.date)
        );
        html.push_str("      </div>\n");

        for (category, entries) in group_by_category(release) {
            Self::render_category_open(html, category);
            for entry in entries {
                _ = writeln!(
                    html,
                    "          <li>{}</li>",
                    html_escape(&entry.description)
                );
            }
            html.push_str("        </ul>\n");
            html.push_str("      </div>\n");
        }

        html.push_str("    </div>\n");
    }

    fn render_category_open(html: &mut String, category: ChangeCategory) {
        _ = writeln!(
            html,
            "      <div class=\"category category-{}\" style=\"--accent: {};\">",
            category.as_str(),
            category.color()
        );
        _ = writeln!(
            html,
            "        <h3 style=\"color: {};\">{} {}</h3>",
            category.color(),
            category.emoji(),
            category.label()
        );
        html.push_str("        <ul>\n");
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for HtmlRenderer {
    fn name(&self) -> &'static str {
        "html"
    }

    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn description(&self) -> &'static str {
        "Renders releases as a standalone HTML page"
    }
}

impl ChangelogRenderer for HtmlRenderer {
    fn render(&self, releases: &[Release]) -> String {
        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n");
        html.push_str("<html lang=\"en\">\n");
        html.push_str("<head>\n");
        html.push_str("  <meta charset=\"UTF-8\">\n");
        html.push_str(
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        html.push_str("  <title>Changelog</title>\n");
        _ = writeln!(html, "  <style>{STYLES}  </style>");
        html.push_str("</head>\n");
        html.push_str("<body>\n");
        html.push_str("  <div class=\"container\">\n");
        html.push_str("    <h1>Changelog</h1>\n");
        html.push_str("    <p class=\"subtitle\">All notable changes to this project will be documented in this file.</p>\n");

        for release in releases {
            Self::render_card(&mut html, release);
        }

        html.push_str("  </div>\n");
        html.push_str("</body>\n");
        html.push_str("</html>\n");

        debug!(
            releases = releases.len(),
            output_len = html.len(),
            "rendered html"
        );
        html
    }

    fn extension(&self) -> &'static str {
        "html"
    }
}
