//! # README Gallery
//!
//! Fills a README template with a Markdown table showcasing every SVG in a
//! gallery directory. Run it from the gallery directory (conventionally
//! `examples/gallery/`) and it rewrites `../../README.md` from
//! `../../README.md.in`, replacing the `%gallery%` token with the table.
//!
//! # Pipeline
//!
//! ```text
//! 1. Scan     gallery/*.svg      →  entries       (filename + display title)
//! 2. Table    entries            →  Markdown      (3 centered columns)
//! 3. Render   README.md.in       →  README.md     (placeholder substitution)
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Lists `*.svg` files, skipping `test.svg` and configured excludes |
//! | [`naming`] | Filename → display title (`two-rects.svg` → "Two Rects") |
//! | [`table`] | Fixed three-column gallery table |
//! | [`render`] | Reads the template, substitutes the table, writes the output |
//! | [`fill`] | Runs the three stages over one directory |
//! | [`config`] | Optional `gallery.toml` layered over stock defaults |
//! | [`output`] | CLI output formatting |
//!
//! # Listing Order
//!
//! Files appear in the order the filesystem lists them unless `sort` is
//! enabled. Host order is kept as the default so existing READMEs do not
//! reshuffle on upgrade, but it means reruns on another machine can produce a
//! different table. Turn on `sort` for reproducible documentation builds.

pub mod config;
pub mod fill;
pub mod naming;
pub mod output;
pub mod render;
pub mod scan;
pub mod table;

#[cfg(test)]
pub(crate) mod test_helpers;
