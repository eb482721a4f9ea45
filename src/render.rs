//! Template substitution.
//!
//! The template is an ordinary Markdown file with a placeholder token where the
//! gallery goes. Every occurrence of the token is replaced. A template without
//! the token is written out unchanged. The template is read in full before the
//! output is touched, so a failed read never truncates the previous output.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Cannot read template {path}: {source}")]
    ReadTemplate {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Cannot write {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// What a render wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub template: PathBuf,
    pub output: PathBuf,
    /// Placeholder occurrences replaced.
    pub replacements: usize,
    pub bytes: usize,
}

/// Replace every `placeholder` in `template` with `replacement`.
///
/// Returns the new text and the number of replacements made.
pub fn substitute(template: &str, placeholder: &str, replacement: &str) -> (String, usize) {
    let count = template.matches(placeholder).count();
    (template.replace(placeholder, replacement), count)
}

/// Read `template`, substitute `table` for `placeholder`, write `output`.
pub fn render(
    template: &Path,
    output: &Path,
    placeholder: &str,
    table: &str,
) -> Result<Rendered, RenderError> {
    let source = fs::read_to_string(template).map_err(|source| RenderError::ReadTemplate {
        path: template.to_path_buf(),
        source,
    })?;

    let (rendered, replacements) = substitute(&source, placeholder, table);
    match replacements {
        0 => tracing::warn!(
            template = %template.display(),
            placeholder,
            "placeholder not found, output is the template unchanged"
        ),
        1 => {}
        n => tracing::warn!(
            template = %template.display(),
            placeholder,
            occurrences = n,
            "placeholder appears more than once, replacing all"
        ),
    }

    fs::write(output, &rendered).map_err(|source| RenderError::WriteOutput {
        path: output.to_path_buf(),
        source,
    })?;
    tracing::info!(output = %output.display(), bytes = rendered.len(), "rendered");

    Ok(Rendered {
        template: template.to_path_buf(),
        output: output.to_path_buf(),
        replacements,
        bytes: rendered.len(),
    })
}
