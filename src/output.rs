//! CLI output formatting.
//!
//! Information-first display of a portfolio document and of build/export
//! results. Each command has a `format_*` function (returns `Vec<String>`,
//! pure, testable) and a thin `print_*` wrapper that writes to stdout.
//!
//! ```text
//! My Portfolio (template: Minimal)
//! 001 About Me
//!     Type: about
//!     Content: filled
//! 002 Projects
//!     Type: projects
//!     Content: empty
//!
//! 2 sections (1 filled)
//! ```

use crate::types::Portfolio;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Section inventory for `check` (and the header of build/export output).
pub fn format_check_output(portfolio: &Portfolio) -> Vec<String> {
    let mut lines = vec![format!(
        "{} (template: {})",
        portfolio.title, portfolio.template.name
    )];

    for (idx, section) in portfolio.sections.iter().enumerate() {
        lines.push(format!("{} {}", format_index(idx + 1), section.title));
        lines.push(format!("    Type: {}", section.kind.as_str()));
        lines.push(format!(
            "    Content: {}",
            if section.content.is_some() {
                "filled"
            } else {
                "empty"
            }
        ));
    }

    let filled = portfolio
        .sections
        .iter()
        .filter(|s| s.content.is_some())
        .count();
    lines.push(String::new());
    lines.push(format!(
        "{} sections ({} filled)",
        portfolio.sections.len(),
        filled
    ));
    lines
}

/// Artifact summary after `build`.
pub fn format_build_output(html_len: usize, css_len: usize, out_dir: &Path) -> Vec<String> {
    vec![
        format!("index.html → {} ({} bytes)", out_dir.display(), html_len),
        format!("styles.css → {} ({} bytes)", out_dir.display(), css_len),
    ]
}

/// Artifact summary after `export`.
pub fn format_export_output(archive_len: usize, path: &Path) -> Vec<String> {
    vec![format!("{} ({} bytes)", path.display(), archive_len)]
}

pub fn print_check_output(portfolio: &Portfolio) {
    for line in format_check_output(portfolio) {
        println!("{line}");
    }
}

pub fn print_build_output(html_len: usize, css_len: usize, out_dir: &Path) {
    for line in format_build_output(html_len, css_len, out_dir) {
        println!("{line}");
    }
}

pub fn print_export_output(archive_len: usize, path: &Path) {
    for line in format_export_output(archive_len, path) {
        println!("{line}");
    }
}
