//! CLI output formatting.
//!
//! Output leads with what the gallery will show, the title of each image
//! in table order, with the source filename as an indented context line:
//!
//! ```text
//! Gallery
//! 001 Two Rects
//!     Source: two-rects.svg
//! 002 ALL CAPS
//!     Source: ALL-CAPS.svg
//!
//! Skipped
//!     test.svg
//!
//! Rendered ../../README.md.in → ../../README.md
//!     2 images, 0 full rows, 1 placeholder replaced, 1532 bytes
//! ```
//!
//! Each `format_*` function is pure and returns lines for testing. The
//! `print_*` wrappers write them to stdout.

use crate::fill::FillReport;
use crate::scan::Listing;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

/// Lines describing what a listing contains and what it left out.
pub fn format_scan_output(listing: &Listing) -> Vec<String> {
    let mut lines = vec!["Gallery".to_string()];

    if listing.entries.is_empty() {
        lines.push("    (no images)".to_string());
    }
    for (i, entry) in listing.entries.iter().enumerate() {
        let title = if entry.title.is_empty() {
            format!("({})", entry.filename)
        } else {
            entry.title.clone()
        };
        lines.push(format!("{} {}", format_index(i + 1), title));
        lines.push(format!("    Source: {}", entry.filename));
    }

    if !listing.skipped.is_empty() {
        lines.push(String::new());
        lines.push("Skipped".to_string());
        for name in &listing.skipped {
            lines.push(format!("    {name}"));
        }
    }

    lines
}

/// Scan lines followed by a summary of the rendered file.
pub fn format_fill_output(report: &FillReport) -> Vec<String> {
    let mut lines = format_scan_output(&report.listing);
    lines.push(String::new());
    lines.push(format!(
        "Rendered {} → {}",
        report.rendered.template.display(),
        report.rendered.output.display()
    ));
    lines.push(format!(
        "    {}, {}, {}, {} bytes",
        plural(report.cells, "image", "images"),
        plural(report.full_rows, "full row", "full rows"),
        plural(
            report.rendered.replacements,
            "placeholder replaced",
            "placeholders replaced"
        ),
        report.rendered.bytes,
    ));
    lines
}

pub fn print_scan_output(listing: &Listing) {
    for line in format_scan_output(listing) {
        println!("{}", line);
    }
}

pub fn print_fill_output(report: &FillReport) {
    for line in format_fill_output(report) {
        println!("{}", line);
    }
}
