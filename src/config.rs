//! Gallery configuration.
//!
//! Every setting has a default matching the conventional layout, where the
//! tool runs inside `examples/gallery/` and fills the repository README two
//! levels up. An optional `gallery.toml` in the gallery directory overrides
//! just the keys it names:
//!
//! ```toml
//! template = "../../README.md.in"     # relative to the gallery directory
//! output = "../../README.md"
//! placeholder = "%gallery%"
//! image_prefix = "./examples/gallery/"
//! sort = false                        # keep the filesystem's listing order
//! exclude = []                        # extra glob patterns; test.svg is always skipped
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::table::DEFAULT_IMAGE_PREFIX;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the optional config file looked up in the gallery directory.
pub const CONFIG_FILE: &str = "gallery.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Settings for one gallery fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Template file, relative to the gallery directory.
    pub template: PathBuf,
    /// File the rendered template is written to, relative to the gallery directory.
    pub output: PathBuf,
    /// Token in the template replaced by the table.
    pub placeholder: String,
    /// Prepended to each filename in the image links.
    pub image_prefix: String,
    /// Sort filenames instead of using the directory listing order.
    pub sort: bool,
    /// Additional glob patterns of files to leave out.
    pub exclude: Vec<String>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            template: PathBuf::from("../../README.md.in"),
            output: PathBuf::from("../../README.md"),
            placeholder: "%gallery%".to_string(),
            image_prefix: DEFAULT_IMAGE_PREFIX.to_string(),
            sort: false,
            exclude: Vec::new(),
        }
    }
}

impl GalleryConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.placeholder.is_empty() {
            return Err(ConfigError::Validation(
                "placeholder must not be empty".into(),
            ));
        }
        if self.template.as_os_str().is_empty() || self.output.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "template and output paths must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Template path resolved against the gallery directory.
    pub fn template_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.template)
    }

    /// Output path resolved against the gallery directory.
    pub fn output_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.output)
    }
}

/// Load the gallery config for `dir`.
///
/// Without a `gallery.toml` this is [`GalleryConfig::default`]. Keys the file
/// leaves out keep their defaults; unknown keys are an error.
pub fn load_config(dir: &Path) -> Result<GalleryConfig, ConfigError> {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(GalleryConfig::default());
    }
    let content = fs::read_to_string(&config_path)?;
    let config: GalleryConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// A fully commented `gallery.toml` listing every key with its default.
pub fn stock_config_toml() -> &'static str {
    r##"# readme-gallery configuration
# ============================
# Place this file as gallery.toml in the gallery directory. Every key is
# optional; the values below are the defaults. Unknown keys are an error.

# Template to fill, relative to the gallery directory.
template = "../../README.md.in"

# Where the filled template is written (overwritten on every run).
output = "../../README.md"

# Token in the template replaced by the gallery table. Every occurrence
# is replaced.
placeholder = "%gallery%"

# Prefix of each image link in the table.
image_prefix = "./examples/gallery/"

# Sort files by name. When false, files appear in whatever order the
# filesystem lists them, which may differ between machines.
sort = false

# Extra glob patterns of files to leave out of the gallery.
# test.svg is always left out.
exclude = []
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_conventional_layout() {
        let config = GalleryConfig::default();
        assert_eq!(config.template, Path::new("../../README.md.in"));
        assert_eq!(config.output, Path::new("../../README.md"));
        assert_eq!(config.placeholder, "%gallery%");
        assert_eq!(config.image_prefix, "./examples/gallery/");
        assert!(!config.sort);
        assert!(config.exclude.is_empty());
    }

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(load_config(tmp.path()).unwrap(), GalleryConfig::default());
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            "sort = true\nexclude = [\"draft-*.svg\"]\n",
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert!(config.sort);
        assert_eq!(config.exclude, vec!["draft-*.svg"]);
        assert_eq!(config.placeholder, "%gallery%");
        assert_eq!(config.output, Path::new("../../README.md"));
    }

    #[test]
    fn unknown_key_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "columns = 4\n").unwrap();
        assert!(matches!(load_config(tmp.path()), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "sort = [").unwrap();
        assert!(matches!(load_config(tmp.path()), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn empty_placeholder_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "placeholder = \"\"\n").unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn paths_resolve_against_gallery_dir() {
        let config = GalleryConfig::default();
        let dir = Path::new("/repo/examples/gallery");
        assert_eq!(
            config.template_path(dir),
            Path::new("/repo/examples/gallery/../../README.md.in")
        );
        assert_eq!(
            config.output_path(dir),
            Path::new("/repo/examples/gallery/../../README.md")
        );
    }

    #[test]
    fn stock_config_parses_to_defaults() {
        let config: GalleryConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config, GalleryConfig::default());
    }
}
