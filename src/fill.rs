//! The full list → title → table → render pass over one gallery directory.

use crate::config::GalleryConfig;
use crate::render::{self, RenderError, Rendered};
use crate::scan::{self, Listing, ScanError};
use crate::table::{self, GalleryTable};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FillError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Everything a fill produced, for reporting.
#[derive(Debug, Clone)]
pub struct FillReport {
    pub listing: Listing,
    pub cells: usize,
    pub full_rows: usize,
    pub rendered: Rendered,
}

/// List `dir` and build its gallery table without writing anything.
pub fn build(dir: &Path, config: &GalleryConfig) -> Result<(Listing, GalleryTable), ScanError> {
    let listing = scan::scan(dir, config)?;
    let table = table::build_table(listing.cells(), &config.image_prefix);
    Ok((listing, table))
}

/// Build the gallery for `dir` and render it into the configured output.
pub fn fill(dir: &Path, config: &GalleryConfig) -> Result<FillReport, FillError> {
    let (listing, table) = build(dir, config)?;
    tracing::debug!(
        cells = table.cell_count(),
        skipped = listing.skipped.len(),
        "gallery table built"
    );

    let rendered = render::render(
        &config.template_path(dir),
        &config.output_path(dir),
        &config.placeholder,
        table.as_str(),
    )?;

    Ok(FillReport {
        cells: table.cell_count(),
        full_rows: table.full_rows(),
        listing,
        rendered,
    })
}
