//! Fixed three-column Markdown gallery table.
//!
//! ```text
//! | | | |
//! |:-------------------------:|:-------------------------:|:-------------------------:|
//! | **Two Rects** ![Two Rects](./examples/gallery/two-rects.svg)| **Dna** ![Dna](...)| ...
//! ```
//!
//! Every image is one cell. The header row is empty so the table reads as a
//! plain grid. A row is closed with a newline after its third cell. When the
//! image count is not a multiple of three the last row stays open: no padding
//! cells, no trailing newline.

/// Header and centered separator row every table starts with.
pub const HEADER: &str = "| | | |\n\
|:-------------------------:|:-------------------------:|:-------------------------:|\n";

/// Number of cells per row.
pub const COLUMNS: usize = 3;

/// Image prefix used when no config overrides it.
pub const DEFAULT_IMAGE_PREFIX: &str = "./examples/gallery/";

/// Format a single cell: bold title followed by the image.
pub fn format_cell(title: &str, filename: &str, image_prefix: &str) -> String {
    format!("| **{title}** ![{title}]({image_prefix}{filename})")
}

/// A gallery table being built one cell at a time.
#[derive(Debug, Clone)]
pub struct GalleryTable {
    markdown: String,
    cells: usize,
    image_prefix: String,
}

impl GalleryTable {
    pub fn new(image_prefix: impl Into<String>) -> Self {
        Self {
            markdown: HEADER.to_string(),
            cells: 0,
            image_prefix: image_prefix.into(),
        }
    }

    /// Append the next cell, closing the row if it was the last column.
    pub fn push(&mut self, title: &str, filename: &str) {
        // Indexed by emitted cells, so skipped files never leave a short row.
        let index = self.cells;
        self.markdown
            .push_str(&format_cell(title, filename, &self.image_prefix));
        if index % COLUMNS == COLUMNS - 1 {
            self.markdown.push('\n');
        }
        self.cells += 1;
    }

    pub fn cell_count(&self) -> usize {
        self.cells
    }

    /// Completed rows, not counting a trailing partial one.
    pub fn full_rows(&self) -> usize {
        self.cells / COLUMNS
    }

    pub fn as_str(&self) -> &str {
        &self.markdown
    }

    pub fn into_markdown(self) -> String {
        self.markdown
    }
}

impl Default for GalleryTable {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_PREFIX)
    }
}

/// Build the table from `(title, filename)` pairs in iteration order.
pub fn build_table<'a, I>(cells: I, image_prefix: &str) -> GalleryTable
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    cells
        .into_iter()
        .fold(GalleryTable::new(image_prefix), |mut table, (title, filename)| {
            table.push(title, filename);
            table
        })
}
