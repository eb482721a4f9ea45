//! Display titles derived from gallery filenames.
//!
//! Filenames are the only metadata the gallery has, so the title shown above
//! each image comes straight from its name:
//!
//! - `two-rects.svg` → "Two Rects"
//! - `gallery/ALL-CAPS.svg` → "ALL CAPS"
//! - `dna-analysis-machine.svg` → "Dna Analysis Machine"
//!
//! Dashes become spaces and every word is capitalized, except words that are
//! already entirely uppercase. Those are treated as acronyms and kept as-is.

const DIR_PREFIX: &str = "gallery/";
const EXTENSION: &str = ".svg";

/// Derive the display title for a gallery filename.
///
/// Strips a leading `gallery/` and a trailing `.svg`, turns dashes into
/// spaces, then capitalizes each whitespace-separated word unless it has no
/// lowercase letters. Empty input gives an empty title.
pub fn derive_title(filename: &str) -> String {
    let name = filename.strip_prefix(DIR_PREFIX).unwrap_or(filename);
    let name = name.strip_suffix(EXTENSION).unwrap_or(name);

    name.replace('-', " ")
        .split_whitespace()
        .map(|word| {
            if word.to_uppercase() == word {
                word.to_string()
            } else {
                capitalize(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// First character uppercased, the rest lowercased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
