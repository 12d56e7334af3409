//! Toolchain detection from marker files

use crate::error::Error;
use crate::registry::Language;
use std::path::Path;

/// Marker files and the language each one indicates. A directory must match
/// exactly one language to be runnable.
const MARKERS: &[(&str, Language)] = &[
    ("go.mod", Language::Go),
    ("package.json", Language::Node),
    ("requirements.txt", Language::Python),
    ("pyproject.toml", Language::Python),
];

/// Determine the implementation language of the project in `dir`.
///
/// Fails with `AmbiguousOrUnknownProject` when no marker matches, or when
/// markers for more than one distinct language are present.
pub fn detect_language(dir: &Path) -> Result<Language, Error> {
    let mut found: Vec<Language> = Vec::new();
    for (marker, language) in MARKERS {
        if dir.join(marker).is_file() && !found.contains(language) {
            found.push(*language);
        }
    }

    match found.as_slice() {
        [language] => Ok(*language),
        _ => Err(Error::AmbiguousOrUnknownProject { found }),
    }
}
