//! Shared test utilities.
//!
//! Builds throwaway repositories laid out the way the tool expects to run:
//!
//! ```text
//! <tmp>/
//! ├── README.md.in          # template
//! └── examples/
//!     └── gallery/          # gallery directory, the working dir of a run
//!         ├── a.svg
//!         └── ...
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::scan::Listing;

/// Minimal SVG body; the tool never looks inside.
pub const SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg"/>"#;

/// Template used when a test does not care about its contents.
pub const TEMPLATE: &str = "Header\n%gallery%\nFooter";

/// The gallery directory inside a repo built by [`gallery_with`].
pub fn gallery_dir(tmp: &TempDir) -> PathBuf {
    tmp.path().join("examples/gallery")
}

/// Temp repo with the given files in its gallery directory and the default
/// template at the root.
pub fn gallery_with(files: &[&str]) -> TempDir {
    repo_with(files, TEMPLATE)
}

/// Temp repo with the given gallery files and template contents.
pub fn repo_with(files: &[&str], template: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    let dir = gallery_dir(&tmp);
    fs::create_dir_all(&dir).unwrap();
    for name in files {
        fs::write(dir.join(name), SVG).unwrap();
    }
    fs::write(tmp.path().join("README.md.in"), template).unwrap();
    tmp
}

/// Rendered README of a temp repo. Panics if it was never written.
pub fn read_output(root: &Path) -> String {
    fs::read_to_string(root.join("README.md"))
        .unwrap_or_else(|e| panic!("README.md not written under {}: {e}", root.display()))
}

/// Listed filenames in listing order.
pub fn filenames(listing: &Listing) -> Vec<&str> {
    listing.entries.iter().map(|e| e.filename.as_str()).collect()
}
