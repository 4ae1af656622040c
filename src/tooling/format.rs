//! Format tree summaries as text.

use crate::pipeline::TreeSummary;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Format a tree summary as human-readable text.
pub fn format_summary_text(root: &str, summary: &TreeSummary) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Package Tree")));
    out.push_str(&format!("  Root: {}\n", root));
    out.push_str(&format!("  Max depth: {}\n\n", summary.max_depth));

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Class", "Entries"]);
    table.add_row(vec!["package".to_string(), summary.packages.to_string()]);
    table.add_row(vec!["non-package".to_string(), summary.pass_through.to_string()]);
    table.add_row(vec!["total".to_string(), summary.total.to_string()]);
    out.push_str(&format!("{}\n", table));
    out
}
