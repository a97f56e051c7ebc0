//! changelog::render
//!
//! Renderer: assembles the final release body.
//!
//! Pure string assembly, no side effects; publishing the result is the
//! forge's job. Sections render in declared order regardless of when
//! their requests were resolved; empty sections are skipped entirely.

use super::classify::Grouped;
use crate::core::config::Config;
use crate::core::types::ChangeRequest;

/// Render one line via the configured template.
///
/// Supported placeholders: `{title}`, `{number}`, `{url}`.
pub fn render_line(template: &str, request: &ChangeRequest) -> String {
    template
        .replace("{title}", &request.title)
        .replace("{number}", &request.number.to_string())
        .replace("{url}", &request.url)
}

/// Render the release body from the configuration and grouping.
///
/// Each non-empty section becomes a block: blank line, `## <title>`,
/// blank line, one templated line per request. With no non-empty blocks
/// the configured no-changes message takes their place. The header and
/// footer, when configured, wrap the result as their own segments.
pub fn render(config: &Config, grouped: &Grouped) -> String {
    let mut blocks = Vec::new();

    for section in &config.sections {
        let requests = grouped.get(&section.title);
        if requests.is_empty() {
            continue;
        }

        let mut lines = Vec::with_capacity(requests.len() + 1);
        lines.push(format!("\n## {}\n", section.title));
        for request in requests {
            lines.push(render_line(&config.line_template, request));
        }
        blocks.push(lines.join("\n"));
    }

    let body = if blocks.is_empty() {
        config.no_changes_message.clone()
    } else {
        blocks.join("\n")
    };

    let mut segments = Vec::new();
    if let Some(header) = &config.header {
        segments.push(header.clone());
    }
    segments.push(body);
    if let Some(footer) = &config.footer {
        segments.push(footer.clone());
    }
    segments.join("\n")
}
