//! Gallery directory listing.
//!
//! Collects every `*.svg` file directly inside the gallery directory and pairs
//! it with its display title. The scan is not recursive.
//!
//! ## Selection rules
//!
//! - Only regular files (or symlinks to them) whose name matches `*.svg`
//! - Dotfiles are never matched, as with a shell glob
//! - `test.svg` is always skipped: it is the fixture the rendering tests use
//!   and must never show up in the published gallery
//! - Names matching any configured `exclude` pattern are skipped
//!
//! ## Ordering
//!
//! By default entries come back in whatever order the filesystem lists them.
//! That order is platform dependent, so two runs on different machines can
//! produce different tables. Set `sort` to get a stable, name-ordered listing.

use crate::config::GalleryConfig;
use crate::naming::derive_title;
use globset::{Glob, GlobMatcher, GlobSet, GlobSetBuilder};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Pattern every gallery image must match.
pub const IMAGE_PATTERN: &str = "*.svg";

/// Filename that is never part of the gallery.
pub const SENTINEL: &str = "test.svg";

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Cannot list {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid glob pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        source: globset::Error,
    },
}

/// One image in the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Filename relative to the gallery directory.
    pub filename: String,
    pub title: String,
}

impl Entry {
    pub fn new(filename: impl Into<String>) -> Self {
        let filename = filename.into();
        let title = derive_title(&filename);
        Self { filename, title }
    }
}

/// Result of listing a gallery directory.
#[derive(Debug, Clone, Default)]
pub struct Listing {
    /// Images to render, in table order.
    pub entries: Vec<Entry>,
    /// Matching files that were left out (sentinel or `exclude`).
    pub skipped: Vec<String>,
}

impl Listing {
    /// `(title, filename)` pairs in table order.
    pub fn cells(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|e| (e.title.as_str(), e.filename.as_str()))
    }
}

/// Compiled selection rules for a listing.
struct Selector {
    image: GlobMatcher,
    exclude: GlobSet,
}

impl Selector {
    fn new(exclude: &[String]) -> Result<Self, ScanError> {
        let image = compile(IMAGE_PATTERN)?.compile_matcher();
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude {
            builder.add(compile(pattern)?);
        }
        let exclude = builder.build().map_err(|source| ScanError::Pattern {
            pattern: exclude.join(", "),
            source,
        })?;
        Ok(Self { image, exclude })
    }

    fn is_image(&self, name: &str) -> bool {
        !name.starts_with('.') && self.image.is_match(name)
    }

    fn is_excluded(&self, name: &str) -> bool {
        name == SENTINEL || self.exclude.is_match(name)
    }
}

fn compile(pattern: &str) -> Result<Glob, ScanError> {
    Glob::new(pattern).map_err(|source| ScanError::Pattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// List the gallery images in `dir`.
pub fn scan(dir: &Path, config: &GalleryConfig) -> Result<Listing, ScanError> {
    let selector = Selector::new(&config.exclude)?;
    let read_dir_err = |source: std::io::Error| ScanError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut listing = Listing::default();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                tracing::warn!(name = ?raw, "skipping non UTF-8 filename");
                continue;
            }
        };
        if !selector.is_image(&name) || !entry.path().is_file() {
            continue;
        }
        if selector.is_excluded(&name) {
            tracing::debug!(%name, "excluded");
            listing.skipped.push(name);
            continue;
        }
        tracing::debug!(%name, "listed");
        listing.entries.push(Entry::new(name));
    }

    if config.sort {
        listing
            .entries
            .sort_by(|a, b| a.filename.cmp(&b.filename));
        listing.skipped.sort();
    }

    Ok(listing)
}
